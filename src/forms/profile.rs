//! Profile setup/edit form.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SCHOOLS;
use crate::error::{BearlyError, Result};
use crate::identity::SignedInUser;
use crate::models::UserProfile;
use crate::queries::ProfileDraft;
use crate::BearlySdk;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("Invalid regex pattern"));

// ---------------------------------------------------------------------------
// ProfileForm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileMode {
    Setup,
    Edit,
}

/// State container for the onboarding and edit-profile forms.
///
/// The email address comes from the identity provider at onboarding and is
/// not editable afterwards; everything else is free text validated locally
/// before any request is made.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    mode: ProfileMode,
    clerk_id: String,
    email: String,
    name: String,
    phone_number: String,
    school: String,
}

impl ProfileForm {
    /// An empty onboarding form for a signed-in user without a profile.
    pub fn onboarding(signed_in: &SignedInUser) -> ProfileForm {
        ProfileForm {
            mode: ProfileMode::Setup,
            clerk_id: signed_in.id.clone(),
            email: signed_in.email.clone(),
            name: String::new(),
            phone_number: String::new(),
            school: String::new(),
        }
    }

    /// A form prefilled from the current profile. Submitting updates it.
    pub fn edit(profile: &UserProfile) -> ProfileForm {
        ProfileForm {
            mode: ProfileMode::Edit,
            clerk_id: profile.clerk_id.clone(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            phone_number: profile.phone_number.clone(),
            school: profile.school.clone(),
        }
    }

    // -- Field edits ---------------------------------------------------------

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn set_phone_number(&mut self, text: impl Into<String>) {
        self.phone_number = text.into();
    }

    pub fn set_school(&mut self, school: impl Into<String>) {
        self.school = school.into();
    }

    // -- Accessors -----------------------------------------------------------

    pub fn is_setup(&self) -> bool {
        self.mode == ProfileMode::Setup
    }

    pub fn clerk_id(&self) -> &str {
        &self.clerk_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    // -- Submission ----------------------------------------------------------

    /// Check the local constraints without touching the network.
    ///
    /// The backend additionally enforces the school email domain; that
    /// rejection comes back from submission, not from here.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone_number.trim().is_empty() {
            missing.push("phone number");
        }
        if self.school.trim().is_empty() {
            missing.push("school");
        }
        if !missing.is_empty() {
            return Err(BearlyError::Validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )));
        }
        if !PHONE_RE.is_match(&self.phone_number) {
            return Err(BearlyError::Validation(
                "phone number must match DDD-DDD-DDDD".to_string(),
            ));
        }
        if !SCHOOLS.contains(&self.school.as_str()) {
            return Err(BearlyError::Validation(format!(
                "unknown school {:?}",
                self.school
            )));
        }
        Ok(())
    }

    /// Create the profile (onboarding) or update it (edit).
    ///
    /// On success the free-text fields reset; on failure they are left
    /// untouched for a retry.
    pub async fn submit(&mut self, sdk: &BearlySdk) -> Result<()> {
        self.validate()?;

        let draft = ProfileDraft {
            clerk_id: self.clerk_id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            school: self.school.clone(),
        };

        match self.mode {
            ProfileMode::Setup => sdk.users().create(&draft).await?,
            ProfileMode::Edit => sdk.users().update(&draft).await?,
        }

        self.name.clear();
        self.phone_number.clear();
        self.school.clear();
        Ok(())
    }
}
