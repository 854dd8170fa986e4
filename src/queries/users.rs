//! User profile queries against the backend's GET endpoints.

use crate::backend::{ensure_success, Backend};
use crate::config::endpoints;
use crate::error::{BearlyError, Result};
use crate::models::{MutationResponse, UserProfile, UserResponse};

// ---------------------------------------------------------------------------
// ProfileDraft
// ---------------------------------------------------------------------------

/// Parameters for the add/update user endpoints.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub clerk_id: String,
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub school: String,
}

// ---------------------------------------------------------------------------
// UserQuery
// ---------------------------------------------------------------------------

/// Query interface for marketplace user profiles.
pub struct UserQuery<'a> {
    backend: &'a Backend,
}

impl<'a> UserQuery<'a> {
    /// Create a new `UserQuery` bound to the given transport.
    pub fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    // -- Lookup --------------------------------------------------------------

    /// Retrieve a profile by the identity provider's user id.
    ///
    /// A signed-in user without a backend profile yet comes back as a
    /// rejection, which callers treat as the onboarding signal.
    pub async fn get(&self, clerk_id: &str) -> Result<UserProfile> {
        let query = [("clerk_id", clerk_id.to_string())];
        let response: UserResponse = self.backend.get(endpoints::GET_USER, &query).await?;
        ensure_success(
            endpoints::GET_USER,
            &response.response_type,
            response.error.as_deref(),
        )?;
        response.user_data.ok_or_else(|| {
            BearlyError::Rejected(format!(
                "{} returned no profile for {clerk_id}",
                endpoints::GET_USER
            ))
        })
    }

    // -- Mutations -----------------------------------------------------------

    /// Create a profile during onboarding.
    pub async fn create(&self, draft: &ProfileDraft) -> Result<()> {
        let pairs = [
            ("clerk_id", draft.clerk_id.clone()),
            ("email", draft.email.clone()),
            ("name", draft.name.clone()),
            ("phone_number", draft.phone_number.clone()),
            ("school", draft.school.clone()),
        ];
        let response: MutationResponse = self.backend.get(endpoints::ADD_USER, &pairs).await?;
        ensure_success(
            endpoints::ADD_USER,
            &response.response_type,
            response.error.as_deref(),
        )
    }

    /// Update an existing profile. The email address is fixed at onboarding
    /// and not part of the update surface.
    pub async fn update(&self, draft: &ProfileDraft) -> Result<()> {
        let pairs = [
            ("clerk_id", draft.clerk_id.clone()),
            ("name", draft.name.clone()),
            ("phone_number", draft.phone_number.clone()),
            ("school", draft.school.clone()),
        ];
        let response: MutationResponse = self.backend.get(endpoints::UPDATE_USER, &pairs).await?;
        ensure_success(
            endpoints::UPDATE_USER,
            &response.response_type,
            response.error.as_deref(),
        )
    }
}
