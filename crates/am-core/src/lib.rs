pub mod drafts;
pub mod error;
pub mod models;

pub use drafts::avatar_draft::AvatarDraft;
pub use drafts::email_draft::EmailDraft;
pub use drafts::name_draft::NameDraft;
pub use drafts::password_draft::PasswordDraft;
pub use drafts::stats_draft::StatsDraft;
pub use drafts::theme_draft::ThemeDraft;
pub use error::{CoreError, Result};
pub use models::friend_entry::FriendEntry;
pub use models::height::Height;
pub use models::pending_request::PendingRequest;
pub use models::request_ack::RequestAck;
pub use models::theme::Theme;
pub use models::user_entity::{UserEntity, UserId};
