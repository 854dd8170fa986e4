use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A marketplace listing as the backend stores it.
///
/// The backend owns the record; copies held by the client are transient and
/// re-fetched rather than mutated in place. Field names match the wire format
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Listing {
    pub id: i64,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub condition: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub available: bool,
}
