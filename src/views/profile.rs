//! Profile page state: the user's details plus their listings rail.

use tracing::warn;

use crate::config::RAIL_CAPACITY;
use crate::error::{BearlyError, Result};
use crate::models::{Listing, UserProfile};
use crate::views::{delete_listing_with_image, ModalState};
use crate::BearlySdk;

// ---------------------------------------------------------------------------
// ProfileView
// ---------------------------------------------------------------------------

/// State behind a profile page, the signed-in user's own or another
/// seller's.
///
/// The same container serves both: the public seller page simply never
/// invokes the owner actions. The listings rail shows every listing of the
/// profile including sold ones, paged client-side with bounded prev/next.
#[derive(Debug, Clone)]
pub struct ProfileView {
    profile: UserProfile,
    listings: Vec<Listing>,
    rail_page: usize,
    modal: ModalState,
}

impl ProfileView {
    /// Fetch the profile and its listings.
    ///
    /// The profile must load; a failing listings fetch degrades to an empty
    /// rail so the page still renders.
    pub async fn load(sdk: &BearlySdk, clerk_id: &str) -> Result<ProfileView> {
        let profile = sdk.users().get(clerk_id).await?;
        let listings = fetch_rail(sdk, clerk_id).await;
        Ok(ProfileView {
            profile,
            listings,
            rail_page: 1,
            modal: ModalState::Closed,
        })
    }

    // -- Accessors -----------------------------------------------------------

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    // -- Rail pagination -----------------------------------------------------

    pub fn rail_page(&self) -> usize {
        self.rail_page
    }

    pub fn rail_page_count(&self) -> usize {
        self.listings.len().div_ceil(RAIL_CAPACITY)
    }

    /// The slice of listings visible on the current rail page.
    pub fn current_rail_items(&self) -> &[Listing] {
        let start = (self.rail_page - 1) * RAIL_CAPACITY;
        if start >= self.listings.len() {
            return &[];
        }
        let end = (start + RAIL_CAPACITY).min(self.listings.len());
        &self.listings[start..end]
    }

    /// Advance the rail one page; does nothing on the last page.
    pub fn next_rail_page(&mut self) {
        if self.rail_page < self.rail_page_count() {
            self.rail_page += 1;
        }
    }

    /// Back up the rail one page; does nothing on the first page.
    pub fn prev_rail_page(&mut self) {
        if self.rail_page > 1 {
            self.rail_page -= 1;
        }
    }

    // -- Modal ---------------------------------------------------------------

    pub fn open_edit_profile(&mut self) {
        self.modal = ModalState::EditingProfile;
    }

    pub fn open_edit_listing(&mut self, listing_id: i64) {
        self.modal = ModalState::EditingListing(listing_id);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    // -- Owner actions -------------------------------------------------------

    /// Flip a rail listing between available and sold.
    pub async fn set_listing_available(
        &mut self,
        sdk: &BearlySdk,
        listing_id: i64,
        available: bool,
    ) -> Result<()> {
        sdk.listings().set_available(listing_id, available).await?;
        if let Some(listing) = self
            .listings
            .iter_mut()
            .find(|listing| listing.id == listing_id)
        {
            listing.available = available;
        }
        Ok(())
    }

    /// Delete one of this profile's listings and refresh the rail.
    pub async fn delete_listing(&mut self, sdk: &BearlySdk, listing_id: i64) -> Result<()> {
        let listing = self
            .listings
            .iter()
            .find(|listing| listing.id == listing_id)
            .cloned()
            .ok_or_else(|| {
                BearlyError::Validation(format!("listing {listing_id} is not on this profile"))
            })?;
        delete_listing_with_image(sdk, &listing).await?;
        self.refresh_listings(sdk).await;
        Ok(())
    }

    /// Re-fetch the rail, clamping the page if the set shrank.
    pub async fn refresh_listings(&mut self, sdk: &BearlySdk) {
        self.listings = fetch_rail(sdk, &self.profile.clerk_id).await;
        self.rail_page = self.rail_page.clamp(1, self.rail_page_count().max(1));
    }

    /// Re-fetch the profile details, e.g. after the edit form saved.
    pub async fn refresh_profile(&mut self, sdk: &BearlySdk) -> Result<()> {
        self.profile = sdk.users().get(&self.profile.clerk_id).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a profile's listings, degrading to an empty rail on failure.
async fn fetch_rail(sdk: &BearlySdk, clerk_id: &str) -> Vec<Listing> {
    match sdk.listings().by_seller(clerk_id).await {
        Ok(listings) => listings,
        Err(err) => {
            warn!(seller = clerk_id, error = %err, "listings fetch failed, showing empty rail");
            Vec::new()
        }
    }
}
