//! Shared test fixtures for the Bearly Used SDK integration tests.
//!
//! Provides a wiremock-backed fake of the marketplace backend speaking its
//! response envelopes, sample payload builders, and in-memory doubles for
//! the object-storage and identity collaborators.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bearly_sdk::{
    BearlyError, BearlySdk, Identity, ObjectStorage, Result, SignedInUser,
};
use wiremock::MockServer;

// -- SDK construction -------------------------------------------------------

/// An SDK pointed at the mock backend, without object storage.
pub fn sdk_for(server: &MockServer) -> BearlySdk {
    BearlySdk::builder().base_url(server.uri()).build().unwrap()
}

/// An SDK pointed at the mock backend with an in-memory object store.
pub fn sdk_with_storage(server: &MockServer, storage: Arc<MemoryStorage>) -> BearlySdk {
    BearlySdk::builder()
        .base_url(server.uri())
        .storage(storage)
        .build()
        .unwrap()
}

// -- Sample payloads ---------------------------------------------------------

/// A listing body in the backend's wire shape. Tests tweak individual fields
/// on the returned value where a scenario needs more than the defaults.
pub fn sample_listing(id: i64, title: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "seller_id": "user_abc123",
        "title": title,
        "description": "A well-loved item looking for a new home",
        "price": price,
        "category": "Other",
        "condition": "Good",
        "image_url": "",
        "tags": [],
        "available": true,
    })
}

/// A user profile body in the backend's wire shape.
pub fn sample_user(clerk_id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "clerk_id": clerk_id,
        "name": name,
        "email": "josiah_carberry@brown.edu",
        "phone_number": "401-555-0117",
        "school": "Brown",
    })
}

/// Success envelope for `get-listings`.
pub fn listings_success(listings: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "response_type": "success", "result": listings })
}

/// Success envelope for `get-listing-by-id`.
pub fn listing_success(listing: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "response_type": "success", "listing": listing })
}

/// Success envelope for `get-user`.
pub fn user_success(user: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "response_type": "success", "user_data": user })
}

/// Bare success envelope for the mutation endpoints.
pub fn mutation_success() -> serde_json::Value {
    serde_json::json!({ "response_type": "success" })
}

/// Failure envelope with an error message.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "response_type": "error", "error": message })
}

// -- Object storage double ---------------------------------------------------

/// In-memory object storage.
///
/// Records every upload and removal. Uploads whose object name ends with an
/// entry in `fail_uploads` fail instead of storing, and `fail_removals`
/// makes every removal fail.
#[derive(Default)]
pub struct MemoryStorage {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub removed: Mutex<Vec<String>>,
    pub fail_uploads: Mutex<Vec<String>>,
    pub fail_removals: Mutex<bool>,
}

impl MemoryStorage {
    pub fn new() -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::default())
    }

    /// Make uploads of this original file name fail.
    pub fn fail_upload_of(&self, original_name: &str) {
        self.fail_uploads.lock().unwrap().push(original_name.to_string());
    }

    pub fn fail_all_removals(&self) {
        *self.fail_removals.lock().unwrap() = true;
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn removed_names(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let failing = self.fail_uploads.lock().unwrap();
        if failing.iter().any(|name| file_name.ends_with(name.as_str())) {
            return Err(BearlyError::Storage(format!("upload of {file_name} failed")));
        }
        drop(failing);
        self.objects
            .lock()
            .unwrap()
            .insert(file_name.to_string(), bytes.to_vec());
        Ok(format!("http://storage.local/images/{file_name}"))
    }

    async fn remove(&self, file_name: &str) -> Result<()> {
        if *self.fail_removals.lock().unwrap() {
            return Err(BearlyError::Storage(format!("removal of {file_name} failed")));
        }
        self.objects.lock().unwrap().remove(file_name);
        self.removed.lock().unwrap().push(file_name.to_string());
        Ok(())
    }
}

// -- Identity double -----------------------------------------------------------

/// Identity provider double holding a fixed sign-in state.
pub struct MockIdentity(pub Option<SignedInUser>);

impl MockIdentity {
    pub fn signed_in(id: &str, email: &str) -> MockIdentity {
        MockIdentity(Some(SignedInUser {
            id: id.to_string(),
            email: email.to_string(),
        }))
    }

    pub fn signed_out() -> MockIdentity {
        MockIdentity(None)
    }
}

impl Identity for MockIdentity {
    fn current_user(&self) -> Option<SignedInUser> {
        self.0.clone()
    }
}
