//! Bearly Used client SDK for Rust.
//!
//! Provides a high-level client for the Bearly Used student marketplace.
//! Listings and profiles live in the marketplace backend and are reached
//! over plain HTTP GET endpoints; listing images live in an object store
//! behind the [`ObjectStorage`] trait; sign-in state comes from an identity
//! provider behind the [`Identity`](identity::Identity) trait. On top of the
//! query interfaces sit the state containers the pages are built from: the
//! search session, the create/edit forms, and the product and profile views.
//!
//! # Quick start
//!
//! ```no_run
//! use bearly_sdk::{BearlySdk, SearchSession};
//!
//! # async fn run() -> bearly_sdk::Result<()> {
//! let sdk = BearlySdk::builder()
//!     .base_url("http://localhost:3232")
//!     .build()?;
//!
//! // Restore a grid view from the address bar and fetch it
//! let mut session = SearchSession::hydrate("category=Books&priceSort=PRICE_ASC");
//! let plan = session.refresh();
//! sdk.run_search(&mut session, plan).await;
//!
//! for listing in session.current_page_items() {
//!     println!("{} (${})", listing.title, listing.price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod identity;
pub mod models;
pub mod queries;
pub mod session;
pub mod storage;
pub mod views;

pub use error::{BearlyError, Result};
pub use filter::{FilterSpec, PriceRange, SortOrder, PRICE_RANGES};
pub use forms::{Attachment, ListingForm, ProfileForm};
pub use identity::{Gate, Identity, SignedInUser};
pub use models::{Listing, UserProfile};
pub use queries::{ListingDraft, ProfileDraft};
pub use session::{Applied, FetchPlan, SearchSession, SessionStatus};
pub use storage::ObjectStorage;
pub use views::{ModalState, ProductView, ProfileView};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use backend::Backend;

// ---------------------------------------------------------------------------
// BearlySdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BearlySdk`] instance.
///
/// Use [`BearlySdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BearlySdkBuilder::build) to create the SDK.
pub struct BearlySdkBuilder {
    base_url: String,
    timeout: Duration,
    storage: Option<Arc<dyn ObjectStorage>>,
}

impl Default for BearlySdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            storage: None,
        }
    }
}

impl BearlySdkBuilder {
    /// Set the backend base URL.
    ///
    /// Defaults to the local development server, `http://localhost:3232`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout applied to every backend call.
    ///
    /// Defaults to 30 seconds. There are no retries; a timed-out request
    /// surfaces as a network error for that one action.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach the object storage collaborator holding listing images.
    ///
    /// Without one, form submissions skip image uploads and deletions skip
    /// image removal.
    pub fn storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the SDK, constructing the shared HTTP client.
    pub fn build(self) -> Result<BearlySdk> {
        let backend = Backend::new(self.base_url, self.timeout)?;
        Ok(BearlySdk {
            backend,
            storage: self.storage,
        })
    }
}

// ---------------------------------------------------------------------------
// BearlySdk
// ---------------------------------------------------------------------------

/// The main entry point for the Bearly Used SDK.
///
/// Wraps the HTTP transport and the optional object-storage collaborator,
/// and exposes domain-specific query interfaces as lightweight borrowing
/// wrappers.
///
/// Created via [`BearlySdk::builder()`].
pub struct BearlySdk {
    backend: Backend,
    storage: Option<Arc<dyn ObjectStorage>>,
}

impl BearlySdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> BearlySdkBuilder {
        BearlySdkBuilder::default()
    }

    // -- Query accessors -----------------------------------------------------

    /// Access the listing query interface.
    ///
    /// Returns a lightweight wrapper that borrows the shared transport and
    /// provides the search gateway plus the listing mutations.
    pub fn listings(&self) -> queries::listings::ListingQuery<'_> {
        queries::listings::ListingQuery::new(&self.backend)
    }

    /// Access the user profile query interface.
    pub fn users(&self) -> queries::users::UserQuery<'_> {
        queries::users::UserQuery::new(&self.backend)
    }

    // -- Collaborators -------------------------------------------------------

    /// The object storage collaborator, when one was configured.
    pub fn storage(&self) -> Option<&dyn ObjectStorage> {
        self.storage.as_deref()
    }

    /// Resolve the startup gate for the given identity.
    ///
    /// Routes to sign-in, onboarding, or the ready application depending on
    /// whether anyone is signed in and whether the backend knows them.
    pub async fn resolve_gate(&self, identity: &dyn Identity) -> Result<Gate> {
        let users = self.users();
        identity::resolve_gate(identity, &users).await
    }

    // -- Search --------------------------------------------------------------

    /// Run a fetch plan from a [`SearchSession`] and apply the outcome.
    ///
    /// A failed fetch lands in the session as the failed status rather than
    /// an error return: the grid degrades to its empty view, it does not
    /// crash.
    pub async fn run_search(&self, session: &mut SearchSession, plan: FetchPlan) -> Applied {
        let outcome = self.listings().search(&plan.spec).await;
        session.apply(plan.seq, outcome)
    }

    /// The backend base URL this SDK talks to.
    pub fn base_url(&self) -> &str {
        self.backend.base_url()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BearlySdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BearlySdk(base_url={}, storage={})",
            self.backend.base_url(),
            if self.storage.is_some() {
                "configured"
            } else {
                "none"
            }
        )
    }
}
