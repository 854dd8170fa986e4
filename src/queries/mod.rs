//! Query modules for the Bearly Used SDK.
//!
//! Each module provides a query struct that borrows the shared
//! [`Backend`](crate::backend::Backend) transport and exposes async methods
//! returning `Result<T>` with typed model payloads.

pub mod listings;
pub mod users;

pub use listings::{ListingDraft, ListingQuery};
pub use users::{ProfileDraft, UserQuery};
