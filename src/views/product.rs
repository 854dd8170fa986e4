//! Product detail page state.

use tracing::warn;

use crate::error::Result;
use crate::models::{Listing, UserProfile};
use crate::views::{delete_listing_with_image, ModalState};
use crate::BearlySdk;

// ---------------------------------------------------------------------------
// ProductView
// ---------------------------------------------------------------------------

/// State behind the product detail page.
///
/// The listing itself must load or the page has nothing to show; the seller
/// lookup is allowed to fail, in which case the page renders the listing
/// with a missing-seller placeholder.
#[derive(Debug, Clone)]
pub struct ProductView {
    listing: Listing,
    seller: Option<UserProfile>,
    modal: ModalState,
}

impl ProductView {
    /// Fetch the listing and, best effort, its seller.
    pub async fn load(sdk: &BearlySdk, listing_id: i64) -> Result<ProductView> {
        let listing = sdk.listings().get_by_id(listing_id).await?;
        let seller = match sdk.users().get(&listing.seller_id).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(
                    seller = %listing.seller_id,
                    error = %err,
                    "seller lookup failed, showing listing without seller"
                );
                None
            }
        };
        Ok(ProductView {
            listing,
            seller,
            modal: ModalState::Closed,
        })
    }

    // -- Accessors -----------------------------------------------------------

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn seller(&self) -> Option<&UserProfile> {
        self.seller.as_ref()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Whether `clerk_id` owns this listing and sees the owner actions.
    pub fn is_owner(&self, clerk_id: &str) -> bool {
        self.listing.seller_id == clerk_id
    }

    // -- Modal ---------------------------------------------------------------

    pub fn open_edit_listing(&mut self) {
        self.modal = ModalState::EditingListing(self.listing.id);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    // -- Seller contact ------------------------------------------------------

    /// The seller's email address, for the copy-address action.
    pub fn seller_email(&self) -> Option<&str> {
        self.seller.as_ref().map(|seller| seller.email.as_str())
    }

    /// Prefilled purchase-inquiry text for the copy-template action.
    pub fn inquiry_template(&self) -> String {
        format!(
            "Hi,\n  \n  I'm interested in buying your item: {} for ${}.\n  \n  Best regards,\n  [Your Name]",
            self.listing.title, self.listing.price
        )
    }

    // -- Owner actions -------------------------------------------------------

    /// Take the listing off the grid without deleting it.
    pub async fn mark_sold(&mut self, sdk: &BearlySdk) -> Result<()> {
        sdk.listings().set_available(self.listing.id, false).await?;
        self.listing.available = false;
        Ok(())
    }

    /// Re-fetch the listing after an edit saved from the modal.
    pub async fn reload(&mut self, sdk: &BearlySdk) -> Result<()> {
        self.listing = sdk.listings().get_by_id(self.listing.id).await?;
        Ok(())
    }

    /// Delete the listing and its stored image. Success means the caller
    /// navigates away from the now-dangling page.
    pub async fn delete(&self, sdk: &BearlySdk) -> Result<()> {
        delete_listing_with_image(sdk, &self.listing).await
    }
}
