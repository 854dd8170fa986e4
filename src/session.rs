//! Search session: the filter/sort/pagination state machine behind the
//! listing grid.
//!
//! The session owns a single [`FilterSpec`] value and the result set derived
//! from it. Every transition mutates the spec, resets the page to 1 unless
//! the transition is itself a page change, and hands back a [`FetchPlan`]
//! the caller runs against the gateway. Completed fetches come back through
//! [`SearchSession::apply`], which uses the plan's sequence number to discard
//! stale responses: a slow early fetch can never overwrite a newer one.
//!
//! Search text is two fields: `pending_search` tracks keystrokes and changes
//! nothing, `submit_search` moves the pending text into the spec and is the
//! only search transition that fetches.

use tracing::{debug, warn};

use crate::config::PAGE_CAPACITY;
use crate::error::Result;
use crate::filter::{FilterSpec, PriceRange, SortOrder};
use crate::models::Listing;

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Fetch lifecycle of the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch for the newest spec is in flight.
    Loading,
    /// Results are current and non-empty.
    Loaded,
    /// Results are current and empty. Rendered as a distinct "no results"
    /// view, never as a bare empty grid.
    NoResults,
    /// The newest fetch failed; results degraded to empty.
    Failed,
}

// ---------------------------------------------------------------------------
// FetchPlan
// ---------------------------------------------------------------------------

/// Snapshot handed to the gateway: the spec to fetch and the sequence number
/// guarding its response.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub seq: u64,
    pub spec: FilterSpec,
}

/// What [`SearchSession::apply`] did with a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The outcome replaced the session's results.
    Fresh,
    /// An outcome with a newer sequence number had already been applied;
    /// this one was discarded untouched.
    Stale,
}

// ---------------------------------------------------------------------------
// SearchSession
// ---------------------------------------------------------------------------

/// State container for one listing-grid view.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    spec: FilterSpec,
    pending_search: String,
    results: Vec<Listing>,
    status: SessionStatus,
    last_issued: u64,
    applied_seq: u64,
}

impl SearchSession {
    /// Start a session from a URL query string, empty or otherwise.
    ///
    /// The session starts idle; callers fetch the initial view with
    /// [`refresh`](Self::refresh).
    pub fn hydrate(query: &str) -> SearchSession {
        let spec = FilterSpec::decode(query);
        SearchSession {
            pending_search: spec.search_text.clone().unwrap_or_default(),
            spec,
            ..SearchSession::default()
        }
    }

    // -- Accessors -----------------------------------------------------------

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    /// Keystrokes typed into the search box but not yet submitted.
    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    /// Query string for the address bar, re-derived after every transition.
    pub fn url_query(&self) -> String {
        self.spec.encode()
    }

    // -- Derived pagination --------------------------------------------------

    pub fn page(&self) -> usize {
        self.spec.page
    }

    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(PAGE_CAPACITY)
    }

    /// The slice of results visible on the current page.
    pub fn current_page_items(&self) -> &[Listing] {
        let start = (self.spec.page - 1) * PAGE_CAPACITY;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + PAGE_CAPACITY).min(self.results.len());
        &self.results[start..end]
    }

    // -- Transitions ---------------------------------------------------------

    pub fn set_category(&mut self, category: impl Into<String>) -> FetchPlan {
        self.spec.category = Some(category.into());
        self.reset_page_and_plan()
    }

    pub fn clear_category(&mut self) -> FetchPlan {
        self.spec.category = None;
        self.reset_page_and_plan()
    }

    pub fn set_price(&mut self, range: PriceRange) -> FetchPlan {
        self.spec.price = Some(range);
        self.reset_page_and_plan()
    }

    pub fn clear_price(&mut self) -> FetchPlan {
        self.spec.price = None;
        self.reset_page_and_plan()
    }

    pub fn set_sort(&mut self, order: SortOrder) -> FetchPlan {
        self.spec.sort = order;
        self.reset_page_and_plan()
    }

    pub fn clear_sort(&mut self) -> FetchPlan {
        self.set_sort(SortOrder::None)
    }

    /// Track search-box keystrokes. Changes nothing until submitted.
    pub fn set_pending_search(&mut self, text: impl Into<String>) {
        self.pending_search = text.into();
    }

    /// Submit the pending search text.
    ///
    /// Whitespace-only text clears the search, matching an emptied box
    /// submitting an unfiltered query.
    pub fn submit_search(&mut self) -> FetchPlan {
        let text = self.pending_search.trim();
        self.spec.search_text = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.reset_page_and_plan()
    }

    /// Move to a page, clamped to `[1, page_count]`. Leaves every filter
    /// untouched.
    pub fn set_page(&mut self, page: usize) -> FetchPlan {
        self.spec.page = page.clamp(1, self.page_count().max(1));
        self.plan()
    }

    /// Reset category, price, and sort. Submitted search text survives.
    pub fn clear_all(&mut self) -> FetchPlan {
        self.spec.category = None;
        self.spec.price = None;
        self.spec.sort = SortOrder::None;
        self.reset_page_and_plan()
    }

    /// Re-fetch the current spec unchanged, e.g. after a mutation elsewhere.
    pub fn refresh(&mut self) -> FetchPlan {
        self.plan()
    }

    // -- Fetch lifecycle -----------------------------------------------------

    /// Accept a completed fetch.
    ///
    /// An outcome older than one already applied is discarded. An outcome
    /// that is newest-applied but older than the newest issued plan replaces
    /// the data while the session stays loading. Failures degrade the view
    /// to empty. After a successful apply the page is clamped to the last
    /// valid page in case the result set shrank under it.
    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<Listing>>) -> Applied {
        if seq <= self.applied_seq {
            warn!(seq, applied = self.applied_seq, "discarding stale search response");
            return Applied::Stale;
        }
        self.applied_seq = seq;
        let newest = seq == self.last_issued;

        match outcome {
            Ok(listings) => {
                debug!(seq, count = listings.len(), "applying search results");
                self.results = listings;
                self.spec.page = self.spec.page.clamp(1, self.page_count().max(1));
                if newest {
                    self.status = if self.results.is_empty() {
                        SessionStatus::NoResults
                    } else {
                        SessionStatus::Loaded
                    };
                }
            }
            Err(err) => {
                warn!(seq, error = %err, "search fetch failed");
                if newest {
                    self.results.clear();
                    self.spec.page = 1;
                    self.status = SessionStatus::Failed;
                }
            }
        }
        Applied::Fresh
    }

    // -- Helpers -------------------------------------------------------------

    fn reset_page_and_plan(&mut self) -> FetchPlan {
        self.spec.page = 1;
        self.plan()
    }

    fn plan(&mut self) -> FetchPlan {
        self.last_issued += 1;
        self.status = SessionStatus::Loading;
        FetchPlan {
            seq: self.last_issued,
            spec: self.spec.clone(),
        }
    }
}
