//! Wire envelopes for backend responses.
//!
//! Every endpoint except `get-user-listings` wraps its payload in an object
//! carrying `response_type`, where `"success"` is the only success value and
//! failures usually add an `error` string. Payload fields default so a
//! missing key decodes as empty rather than failing.

use serde::{Deserialize, Serialize};

use super::{Listing, UserProfile};

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Response to `get-listings`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListingsResponse {
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Vec<Listing>,
}

/// Response to `get-listing-by-id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListingResponse {
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub listing: Option<Listing>,
}

/// Response to `get-user`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserResponse {
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user_data: Option<UserProfile>,
}

/// Response to `get-user-listings`, which carries no `response_type`.
///
/// A body without a `listings` key decodes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserListingsResponse {
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// Response to the add/update/delete mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MutationResponse {
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub error: Option<String>,
}
