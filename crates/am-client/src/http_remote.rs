use crate::remote::{AccountPatch, RemoteAuthority};
use crate::{RemoteError, RemoteResult};

use std::time::Duration;

use am_core::{FriendEntry, PendingRequest, RequestAck, Theme, UserEntity, UserId};

use bytes::Bytes;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// HTTP client for the account service REST API
pub struct HttpRemote {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpRemote {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from the remote config section
    pub fn from_config(config: &am_config::RemoteConfig) -> RemoteResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request against the service
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request, mapping non-success statuses to typed errors.
    /// Error bodies carry a `detail` message.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> RemoteResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|d| d.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| format!("Request failed with status {status}"));

            debug!("Remote rejected request: {status} - {detail}");
            return Err(RemoteError::from_status(status.as_u16(), detail));
        }

        response.json::<T>().await.map_err(RemoteError::decode)
    }

    /// Execute a request whose body is just an acknowledgment
    async fn execute_ack(&self, req: reqwest::RequestBuilder) -> RemoteResult<()> {
        self.execute::<serde_json::Value>(req).await.map(|_| ())
    }
}

impl RemoteAuthority for HttpRemote {
    // =========================================================================
    // Profile Operations
    // =========================================================================

    async fn fetch_user(&self, user: UserId) -> RemoteResult<UserEntity> {
        let req = self.request(Method::GET, &format!("/api/profile/{user}"));
        self.execute(req).await
    }

    async fn update_account(&self, user: UserId, patch: AccountPatch) -> RemoteResult<UserEntity> {
        let req = self
            .request(Method::PATCH, &format!("/api/profile/{user}"))
            .json(&patch);
        self.execute(req).await
    }

    async fn change_email(
        &self,
        user: UserId,
        email: &str,
        current_password: &str,
    ) -> RemoteResult<UserEntity> {
        #[derive(serde::Serialize)]
        struct ChangeEmailRequest<'a> {
            email: &'a str,
            current_password: &'a str,
        }

        let body = ChangeEmailRequest {
            email,
            current_password,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/profile/{user}/email"))
            .json(&body);
        self.execute(req).await
    }

    async fn change_password(
        &self,
        user: UserId,
        old_password: &str,
        new_password: &str,
    ) -> RemoteResult<UserEntity> {
        #[derive(serde::Serialize)]
        struct ChangePasswordRequest<'a> {
            old_password: &'a str,
            new_password: &'a str,
        }

        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/profile/{user}/password"))
            .json(&body);
        self.execute(req).await
    }

    async fn update_theme(&self, user: UserId, theme: Theme) -> RemoteResult<UserEntity> {
        #[derive(serde::Serialize)]
        struct ThemeRequest {
            theme: Theme,
        }

        let req = self
            .request(Method::PATCH, &format!("/api/settings/theme/{user}"))
            .json(&ThemeRequest { theme });
        self.execute(req).await
    }

    async fn upload_avatar(
        &self,
        user: UserId,
        bytes: Bytes,
        content_type: &str,
    ) -> RemoteResult<String> {
        #[derive(Deserialize)]
        struct AvatarResponse {
            avatar_url: String,
        }

        let part = Part::bytes(bytes.to_vec())
            .file_name("avatar")
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let req = self
            .request(Method::POST, &format!("/api/profile/photo?user_id={user}"))
            .multipart(form);

        let response: AvatarResponse = self.execute(req).await?;
        Ok(response.avatar_url)
    }

    // =========================================================================
    // Relationship Operations
    // =========================================================================

    async fn list_friends(&self, user: UserId) -> RemoteResult<Vec<FriendEntry>> {
        let req = self.request(Method::GET, &format!("/api/friends/list/{user}"));
        self.execute(req).await
    }

    async fn list_pending(&self, user: UserId) -> RemoteResult<Vec<PendingRequest>> {
        let req = self.request(Method::GET, &format!("/api/friends/requests/{user}"));
        self.execute(req).await
    }

    async fn send_request(&self, user: UserId, code: &str) -> RemoteResult<RequestAck> {
        #[derive(serde::Serialize)]
        struct SendRequestBody<'a> {
            friend_code: &'a str,
        }

        let req = self
            .request(Method::POST, &format!("/api/friends/request/{user}"))
            .json(&SendRequestBody { friend_code: code });
        self.execute(req).await
    }

    async fn accept(&self, user: UserId, other: UserId) -> RemoteResult<()> {
        let req = self.request(Method::PATCH, &format!("/api/friends/accept/{user}/{other}"));
        self.execute_ack(req).await
    }

    async fn decline(&self, user: UserId, other: UserId) -> RemoteResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/friends/decline/{user}/{other}"),
        );
        self.execute_ack(req).await
    }

    async fn remove_friend(&self, user: UserId, other: UserId) -> RemoteResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/friends/remove/{user}/{other}"),
        );
        self.execute_ack(req).await
    }
}
