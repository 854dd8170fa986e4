//! Object storage collaborator for listing images.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::error::Result;

// ---------------------------------------------------------------------------
// ObjectStorage
// ---------------------------------------------------------------------------

/// Store holding listing images.
///
/// The deployed application delegates to a hosted object store; tests supply
/// an in-memory double. Uploading returns the public URL the stored object is
/// reachable at, which is what the backend keeps in `image_url`.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `file_name` and return the object's public URL.
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String>;

    /// Remove a previously uploaded object.
    async fn remove(&self, file_name: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Naming helpers
// ---------------------------------------------------------------------------

/// Object name for an attachment: millisecond timestamp plus the original
/// file name, keeping repeated uploads of the same file distinct.
pub fn upload_file_name(original: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("{millis}-{original}")
}

/// Recover the object name from a stored public URL, its final path segment.
///
/// Returns `None` for an empty URL, which deletion flows read as "nothing to
/// remove".
pub fn object_name_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}
