use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// A marketplace user as the backend stores it.
///
/// `id` is the backend's own row id; `clerk_id` is the identity provider's
/// user id and the key every user endpoint takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: i64,
    pub clerk_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub school: String,
}
