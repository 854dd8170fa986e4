//! Form state containers for the create/edit surfaces.
//!
//! Each form collects locally validated input and owns its submission flow.
//! Validation failures never reach the network; submission failures leave
//! the form state untouched so the user can retry without retyping.

pub mod listing;
pub mod profile;

pub use listing::{Attachment, ListingForm};
pub use profile::ProfileForm;
