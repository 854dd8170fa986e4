//! Filter state and the URL query-string codec.
//!
//! [`FilterSpec`] is the single value object describing what the listing grid
//! shows: category, price range, sort order, submitted search text, and page
//! number. `encode`/`decode` translate it to and from a URL query string so a
//! view is shareable and the back button restores it. Decoding never fails:
//! malformed pairs and unknown keys or values leave the field unset.
//!
//! # Example
//!
//! ```rust
//! use bearly_sdk::{FilterSpec, PriceRange, SortOrder};
//!
//! let mut spec = FilterSpec::default();
//! spec.category = Some("Books".to_string());
//! spec.price = Some(PriceRange::FiveToTen);
//! spec.sort = SortOrder::Ascending;
//!
//! let query = spec.encode();
//! assert_eq!(FilterSpec::decode(&query), spec);
//! ```

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Price sort applied by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Wire value for the `sorter`/`priceSort` parameters, `None` when unset.
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            SortOrder::None => None,
            SortOrder::Ascending => Some("PRICE_ASC"),
            SortOrder::Descending => Some("PRICE_DESC"),
        }
    }

    /// Unknown values decode as unset rather than failing.
    pub fn from_wire(value: &str) -> SortOrder {
        match value {
            "PRICE_ASC" => SortOrder::Ascending,
            "PRICE_DESC" => SortOrder::Descending,
            _ => SortOrder::None,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceRange
// ---------------------------------------------------------------------------

/// One of the fixed price brackets offered by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    Free,
    UnderFive,
    FiveToTen,
    TenToTwenty,
    TwentyToThirty,
    ThirtyPlus,
}

/// Every bracket, in the order the filter bar offers them.
pub const PRICE_RANGES: [PriceRange; 6] = [
    PriceRange::Free,
    PriceRange::UnderFive,
    PriceRange::FiveToTen,
    PriceRange::TenToTwenty,
    PriceRange::TwentyToThirty,
    PriceRange::ThirtyPlus,
];

impl PriceRange {
    /// Human-readable label, also the value of the `priceLabel` URL key.
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Free => "Free",
            PriceRange::UnderFive => "Less than $5",
            PriceRange::FiveToTen => "$5 - $10",
            PriceRange::TenToTwenty => "$10 - $20",
            PriceRange::TwentyToThirty => "$20 - $30",
            PriceRange::ThirtyPlus => "$30+",
        }
    }

    /// Inclusive minimum and optional inclusive maximum, in dollars.
    ///
    /// `Free` pins both bounds to zero; `ThirtyPlus` has no upper bound.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceRange::Free => (0.0, Some(0.0)),
            PriceRange::UnderFive => (0.01, Some(5.0)),
            PriceRange::FiveToTen => (5.0, Some(10.0)),
            PriceRange::TenToTwenty => (10.0, Some(20.0)),
            PriceRange::TwentyToThirty => (20.0, Some(30.0)),
            PriceRange::ThirtyPlus => (30.0, None),
        }
    }

    pub fn from_label(label: &str) -> Option<PriceRange> {
        PRICE_RANGES.iter().copied().find(|range| range.label() == label)
    }
}

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// Complete description of a listing-grid view.
///
/// `page` is always at least 1. `search_text` holds submitted text only;
/// keystrokes before submission live in the session's pending field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub price: Option<PriceRange>,
    pub sort: SortOrder,
    pub search_text: Option<String>,
    pub page: usize,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            category: None,
            price: None,
            sort: SortOrder::None,
            search_text: None,
            page: 1,
        }
    }
}

impl FilterSpec {
    // -- URL codec ----------------------------------------------------------

    /// Encode as a URL query string (no leading `?`).
    ///
    /// Unset fields and page 1 are omitted. The price bracket writes its
    /// label plus both bounds; the label alone round-trips, the bounds keep
    /// hand-edited URLs meaningful.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(range) = self.price {
            let (min, max) = range.bounds();
            pairs.push(("priceLabel", range.label().to_string()));
            pairs.push(("priceMin", min.to_string()));
            if let Some(max) = max {
                pairs.push(("priceMax", max.to_string()));
            }
        }
        if let Some(sorter) = self.sort.as_wire() {
            pairs.push(("priceSort", sorter.to_string()));
        }
        if let Some(text) = &self.search_text {
            pairs.push(("search", text.clone()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Decode a query string (with or without a leading `?`).
    ///
    /// There is no error path: anything unparseable or unrecognized simply
    /// leaves the corresponding field at its default.
    pub fn decode(query: &str) -> FilterSpec {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query).unwrap_or_default();

        let mut spec = FilterSpec::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" if !value.is_empty() => spec.category = Some(value),
                // The label is authoritative for the bracket; priceMin and
                // priceMax are redundant copies of its bounds.
                "priceLabel" => spec.price = PriceRange::from_label(&value),
                "priceSort" => spec.sort = SortOrder::from_wire(&value),
                "search" if !value.is_empty() => spec.search_text = Some(value),
                "page" => {
                    if let Ok(page) = value.parse::<usize>() {
                        if page >= 1 {
                            spec.page = page;
                        }
                    }
                }
                _ => {}
            }
        }
        spec
    }

    // -- Backend query ------------------------------------------------------

    /// Query pairs for the listing search endpoint, minus the search field.
    ///
    /// The search field is appended separately by the gateway because a
    /// single submitted text fans out into a by-title and a by-tag request.
    pub(crate) fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(range) = self.price {
            let (min, max) = range.bounds();
            pairs.push(("minPrice", min.to_string()));
            if let Some(max) = max {
                pairs.push(("maxPrice", max.to_string()));
            }
        }
        if let Some(sorter) = self.sort.as_wire() {
            pairs.push(("sorter", sorter.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}
