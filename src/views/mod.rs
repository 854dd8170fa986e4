//! Page-level state containers.
//!
//! Everything the pages own besides rendering: the fetched data, the modal
//! overlay state, and the operations each page performs against the SDK.

use tracing::debug;

use crate::error::Result;
use crate::models::Listing;
use crate::storage::object_name_from_url;
use crate::BearlySdk;

pub mod product;
pub mod profile;

pub use product::ProductView;
pub use profile::ProfileView;

// ---------------------------------------------------------------------------
// ModalState
// ---------------------------------------------------------------------------

/// Which overlay a page is showing.
///
/// A page shows nothing or exactly one editing surface; matching on this is
/// exhaustive, so a new surface cannot be added without every page handling
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    CreatingListing,
    EditingListing(i64),
    EditingProfile,
}

// ---------------------------------------------------------------------------
// Shared flows
// ---------------------------------------------------------------------------

/// Delete a listing, removing its stored image first.
///
/// A failed image removal aborts the flow so the backend never drops a row
/// whose image was left behind half-referenced. Listings without an image
/// skip the storage step.
pub(crate) async fn delete_listing_with_image(sdk: &BearlySdk, listing: &Listing) -> Result<()> {
    if let Some(object_name) = object_name_from_url(&listing.image_url) {
        match sdk.storage() {
            Some(storage) => storage.remove(object_name).await?,
            None => debug!(
                object = object_name,
                "no object storage configured, skipping image removal"
            ),
        }
    }
    sdk.listings().delete(listing.id).await
}
