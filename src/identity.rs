//! Identity collaborator and the startup gate.
//!
//! Sign-in itself belongs to the identity provider; the SDK only needs to
//! know who is signed in and whether the backend has a profile for them.
//! A signed-in user without a profile is routed to onboarding before any
//! other view is reachable.

use tracing::debug;

use crate::error::{BearlyError, Result};
use crate::models::UserProfile;
use crate::queries::UserQuery;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignedInUser {
    /// Provider user id, the `clerk_id` of every user endpoint.
    pub id: String,
    pub email: String,
}

/// Source of the current sign-in state.
pub trait Identity: Send + Sync {
    /// The signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<SignedInUser>;
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Where the application routes on startup.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// No signed-in identity; only the sign-in surface is reachable.
    SignedOut,
    /// Signed in but the backend has no profile yet: profile setup is the
    /// only reachable view.
    NeedsProfile(SignedInUser),
    /// Signed in with a backend profile.
    Ready(UserProfile),
}

/// Resolve the startup gate for the current identity.
///
/// A rejected profile lookup means the backend has never seen this user, so
/// it routes to onboarding. Transport failures propagate instead; the caller
/// retries by reloading, not by re-onboarding an existing user.
pub async fn resolve_gate(identity: &dyn Identity, users: &UserQuery<'_>) -> Result<Gate> {
    let Some(signed_in) = identity.current_user() else {
        return Ok(Gate::SignedOut);
    };
    match users.get(&signed_in.id).await {
        Ok(profile) => Ok(Gate::Ready(profile)),
        Err(BearlyError::Rejected(reason)) => {
            debug!(user = %signed_in.id, %reason, "no backend profile, routing to onboarding");
            Ok(Gate::NeedsProfile(signed_in))
        }
        Err(err) => Err(err),
    }
}
