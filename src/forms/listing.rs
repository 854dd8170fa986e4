//! Listing create/edit form.

use std::sync::LazyLock;

use futures::future::join_all;
use regex::Regex;
use tracing::warn;

use crate::config::{CATEGORIES, CONDITIONS};
use crate::error::{BearlyError, Result};
use crate::models::Listing;
use crate::queries::ListingDraft;
use crate::storage::{upload_file_name, ObjectStorage};
use crate::BearlySdk;

/// A price edit is accepted only while the text stays a currency amount:
/// optional digits, an optional dot, and at most two decimals.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d{0,2}$").expect("Invalid regex pattern"));

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// An image file picked for upload.
#[derive(Debug, Clone, Default)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// ListingForm
// ---------------------------------------------------------------------------

/// State container for the create/edit listing form.
///
/// Field edits go through setters so the form can hold its invariants: the
/// price text never leaves the currency pattern and tags stay deduplicated.
/// [`submit`](Self::submit) uploads the attachments, issues the mutation,
/// and resets the form only when the whole flow succeeded, so a failed
/// submission keeps everything the seller typed.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    seller_id: String,
    editing: Option<i64>,
    title: String,
    description: String,
    price: String,
    category: String,
    condition: String,
    image_url: String,
    available: bool,
    tags: Vec<String>,
    pending_tag: String,
    attachments: Vec<Attachment>,
}

impl ListingForm {
    /// An empty form publishing a new listing for `seller_id`.
    pub fn new(seller_id: impl Into<String>) -> ListingForm {
        ListingForm {
            seller_id: seller_id.into(),
            available: true,
            ..ListingForm::default()
        }
    }

    /// A form prefilled from an existing listing. Submitting updates that
    /// listing in place.
    pub fn edit(seller_id: impl Into<String>, listing: &Listing) -> ListingForm {
        ListingForm {
            seller_id: seller_id.into(),
            editing: Some(listing.id),
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price.to_string(),
            category: listing.category.clone(),
            condition: listing.condition.clone(),
            image_url: listing.image_url.clone(),
            available: listing.available,
            tags: listing.tags.clone(),
            pending_tag: String::new(),
            attachments: Vec::new(),
        }
    }

    // -- Field edits ---------------------------------------------------------

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Apply a price-box edit. Returns whether the edit was accepted; a
    /// rejected edit leaves the previous text in place.
    pub fn set_price(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if PRICE_RE.is_match(&text) {
            self.price = text;
            true
        } else {
            false
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.condition = condition.into();
    }

    // -- Tags ----------------------------------------------------------------

    /// Track the tag input box. Nothing joins the tag list until committed.
    pub fn set_pending_tag(&mut self, text: impl Into<String>) {
        self.pending_tag = text.into();
    }

    /// Commit the pending tag, trimming it and suppressing duplicates.
    ///
    /// Returns whether a tag was added; the input box is cleared only then.
    pub fn commit_tag(&mut self) -> bool {
        let tag = self.pending_tag.trim().to_string();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.pending_tag.clear();
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    // -- Attachments ---------------------------------------------------------

    pub fn add_attachment(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.attachments.push(Attachment {
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    // -- Accessors -----------------------------------------------------------

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn pending_tag(&self) -> &str {
        &self.pending_tag
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    // -- Submission ----------------------------------------------------------

    /// Check the local constraints without touching the network.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.price.trim().is_empty() {
            missing.push("price");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        if self.condition.trim().is_empty() {
            missing.push("condition");
        }
        if !missing.is_empty() {
            return Err(BearlyError::Validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )));
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(BearlyError::Validation(format!(
                "unknown category {:?}",
                self.category
            )));
        }
        if !CONDITIONS.contains(&self.condition.as_str()) {
            return Err(BearlyError::Validation(format!(
                "unknown condition {:?}",
                self.condition
            )));
        }
        Ok(())
    }

    /// Upload the attachments and publish the listing.
    ///
    /// Uploads run concurrently; a failed upload is logged and that image is
    /// simply absent from the listing. The first successfully uploaded URL
    /// becomes `image_url`, falling back to the pre-existing URL when
    /// editing. On success the form resets; on any failure it is left
    /// untouched so the seller can retry.
    pub async fn submit(&mut self, sdk: &BearlySdk) -> Result<()> {
        self.validate()?;

        let uploaded = upload_attachments(sdk.storage(), &self.attachments).await;
        let image_url = uploaded
            .into_iter()
            .next()
            .unwrap_or_else(|| self.image_url.clone());

        let draft = ListingDraft {
            seller_id: self.seller_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            condition: self.condition.clone(),
            image_url,
            tags: self.tags.clone(),
            available: self.available,
        };

        match self.editing {
            Some(listing_id) => sdk.listings().update(listing_id, &draft).await?,
            None => sdk.listings().create(&draft).await?,
        }

        self.reset();
        Ok(())
    }

    /// Back to an empty create-mode form for the same seller.
    pub fn reset(&mut self) {
        *self = ListingForm::new(self.seller_id.clone());
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Upload every attachment concurrently, returning the public URLs of the
/// ones that succeeded, in attachment order.
async fn upload_attachments(
    storage: Option<&dyn ObjectStorage>,
    attachments: &[Attachment],
) -> Vec<String> {
    let Some(storage) = storage else {
        if !attachments.is_empty() {
            warn!(
                count = attachments.len(),
                "no object storage configured, submitting without images"
            );
        }
        return Vec::new();
    };

    let uploads = attachments.iter().map(|attachment| {
        let object_name = upload_file_name(&attachment.file_name);
        async move {
            match storage.upload(&object_name, &attachment.bytes).await {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(
                        file = %attachment.file_name,
                        error = %err,
                        "image upload failed, continuing without it"
                    );
                    None
                }
            }
        }
    });

    join_all(uploads).await.into_iter().flatten().collect()
}
