use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3232";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Success discriminator carried by every backend response envelope.
pub const RESPONSE_SUCCESS: &str = "success";

/// Listings shown per page on the home grid.
pub const PAGE_CAPACITY: usize = 8;
/// Listings shown per page on a profile's own-listings rail.
pub const RAIL_CAPACITY: usize = 4;

pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Furniture",
    "Appliances",
    "Clothing & Accessories",
    "Books",
    "Decor",
    "Tickets & Event Passes",
    "Other",
];

pub const CONDITIONS: [&str; 5] = ["New", "Like New", "Good", "Fair", "Poor"];

pub const SCHOOLS: [&str; 2] = ["Brown", "RISD"];

/// Backend endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const GET_LISTINGS: &str = "get-listings";
    pub const GET_LISTING_BY_ID: &str = "get-listing-by-id";
    pub const ADD_LISTING: &str = "add-listing";
    pub const UPDATE_LISTING: &str = "update-listing";
    pub const DELETE_LISTING: &str = "delete-listing";
    pub const GET_USER: &str = "get-user";
    pub const ADD_USER: &str = "add-user";
    pub const UPDATE_USER: &str = "update-user";
    pub const GET_USER_LISTINGS: &str = "get-user-listings";
}
