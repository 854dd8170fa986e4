//! Listing queries against the backend's GET endpoints.

use std::collections::HashSet;

use tracing::debug;

use crate::backend::{ensure_success, Backend};
use crate::config::endpoints;
use crate::error::{BearlyError, Result};
use crate::filter::FilterSpec;
use crate::models::{
    Listing, ListingResponse, ListingsResponse, MutationResponse, UserListingsResponse,
};

// ---------------------------------------------------------------------------
// ListingDraft
// ---------------------------------------------------------------------------

/// Parameters for the add/update listing endpoints.
///
/// `price` stays a string so the value is sent exactly as the seller entered
/// it. `tags` are sent comma-joined in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub condition: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub available: bool,
}

impl ListingDraft {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("seller_id", self.seller_id.clone()),
            ("title", self.title.clone()),
            ("available", self.available.to_string()),
            ("description", self.description.clone()),
            ("price", self.price.clone()),
            ("category", self.category.clone()),
            ("condition", self.condition.clone()),
            ("image_url", self.image_url.clone()),
            ("tags", self.tags.join(",")),
        ]
    }
}

// ---------------------------------------------------------------------------
// ListingQuery
// ---------------------------------------------------------------------------

/// Query interface for marketplace listings.
pub struct ListingQuery<'a> {
    backend: &'a Backend,
}

impl<'a> ListingQuery<'a> {
    /// Create a new `ListingQuery` bound to the given transport.
    pub fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    // -- Search --------------------------------------------------------------

    /// Fetch the listings matching a filter spec.
    ///
    /// Without search text this is a single request whose result array is
    /// returned verbatim (an empty array is a valid result, not an error).
    /// With search text, two requests run concurrently against the same
    /// filtered base, one matching titles and one matching tags, and the
    /// merged result is deduplicated by id with title matches first. If
    /// either request fails the whole search fails; no partial results are
    /// surfaced.
    pub async fn search(&self, spec: &FilterSpec) -> Result<Vec<Listing>> {
        let base = spec.base_query();

        let Some(text) = spec.search_text.as_deref() else {
            let response: ListingsResponse =
                self.backend.get(endpoints::GET_LISTINGS, &base).await?;
            ensure_success(
                endpoints::GET_LISTINGS,
                &response.response_type,
                response.error.as_deref(),
            )?;
            return Ok(response.result);
        };

        let mut by_title = base.clone();
        by_title.push(("title", text.to_string()));
        let mut by_tags = base;
        by_tags.push(("tags", text.to_string()));

        let title_fut = self
            .backend
            .get::<ListingsResponse, _>(endpoints::GET_LISTINGS, &by_title);
        let tags_fut = self
            .backend
            .get::<ListingsResponse, _>(endpoints::GET_LISTINGS, &by_tags);
        let (title_response, tags_response) = tokio::try_join!(title_fut, tags_fut)?;

        ensure_success(
            endpoints::GET_LISTINGS,
            &title_response.response_type,
            title_response.error.as_deref(),
        )?;
        ensure_success(
            endpoints::GET_LISTINGS,
            &tags_response.response_type,
            tags_response.error.as_deref(),
        )?;

        debug!(
            by_title = title_response.result.len(),
            by_tags = tags_response.result.len(),
            "merging dual-field search results"
        );
        Ok(merge_by_id(title_response.result, tags_response.result))
    }

    // -- Single listing lookup -----------------------------------------------

    /// Retrieve a single listing by its id.
    pub async fn get_by_id(&self, listing_id: i64) -> Result<Listing> {
        let query = [("listing_id", listing_id.to_string())];
        let response: ListingResponse = self
            .backend
            .get(endpoints::GET_LISTING_BY_ID, &query)
            .await?;
        ensure_success(
            endpoints::GET_LISTING_BY_ID,
            &response.response_type,
            response.error.as_deref(),
        )?;
        response.listing.ok_or_else(|| {
            BearlyError::Rejected(format!(
                "{} returned no listing for id {listing_id}",
                endpoints::GET_LISTING_BY_ID
            ))
        })
    }

    // -- Seller's listings ---------------------------------------------------

    /// All listings belonging to a seller, including unavailable ones.
    ///
    /// The endpoint has no success envelope; a body without a `listings`
    /// key is treated as an empty list.
    pub async fn by_seller(&self, seller_id: &str) -> Result<Vec<Listing>> {
        let query = [("seller_id", seller_id.to_string())];
        let response: UserListingsResponse = self
            .backend
            .get(endpoints::GET_USER_LISTINGS, &query)
            .await?;
        Ok(response.listings)
    }

    // -- Mutations -----------------------------------------------------------

    /// Publish a new listing.
    pub async fn create(&self, draft: &ListingDraft) -> Result<()> {
        let pairs = draft.query_pairs();
        let response: MutationResponse =
            self.backend.get(endpoints::ADD_LISTING, &pairs).await?;
        ensure_success(
            endpoints::ADD_LISTING,
            &response.response_type,
            response.error.as_deref(),
        )
    }

    /// Rewrite every field of an existing listing.
    pub async fn update(&self, listing_id: i64, draft: &ListingDraft) -> Result<()> {
        let mut pairs = draft.query_pairs();
        pairs.push(("listing_id", listing_id.to_string()));
        let response: MutationResponse =
            self.backend.get(endpoints::UPDATE_LISTING, &pairs).await?;
        ensure_success(
            endpoints::UPDATE_LISTING,
            &response.response_type,
            response.error.as_deref(),
        )
    }

    /// Flip only the availability flag, used by the mark-as-sold flows.
    pub async fn set_available(&self, listing_id: i64, available: bool) -> Result<()> {
        let pairs = [
            ("listing_id", listing_id.to_string()),
            ("available", available.to_string()),
        ];
        let response: MutationResponse =
            self.backend.get(endpoints::UPDATE_LISTING, &pairs).await?;
        ensure_success(
            endpoints::UPDATE_LISTING,
            &response.response_type,
            response.error.as_deref(),
        )
    }

    /// Delete a listing.
    ///
    /// Deleting an id that no longer exists comes back as a rejection from
    /// the backend, never a transport error.
    pub async fn delete(&self, listing_id: i64) -> Result<()> {
        let query = [("listing_id", listing_id.to_string())];
        let response: MutationResponse =
            self.backend.get(endpoints::DELETE_LISTING, &query).await?;
        ensure_success(
            endpoints::DELETE_LISTING,
            &response.response_type,
            response.error.as_deref(),
        )
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Merge title matches and tag matches, deduplicating by listing id.
///
/// Title matches come first; the first occurrence of an id wins.
fn merge_by_id(title_matches: Vec<Listing>, tag_matches: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::with_capacity(title_matches.len() + tag_matches.len());
    let mut merged = Vec::with_capacity(title_matches.len() + tag_matches.len());
    for listing in title_matches.into_iter().chain(tag_matches) {
        if seen.insert(listing.id) {
            merged.push(listing);
        }
    }
    merged
}
