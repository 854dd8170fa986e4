pub mod listing;
pub mod responses;
pub mod user;

pub use listing::*;
pub use responses::*;
pub use user::*;
