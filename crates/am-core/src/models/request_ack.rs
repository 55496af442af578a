use serde::{Deserialize, Serialize};

/// Server acknowledgment for a sent friend request. The request itself is
/// only visible on the counterparty's next list refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAck {
    pub ok: bool,
    pub message: Option<String>,
    pub target_name: Option<String>,
}
