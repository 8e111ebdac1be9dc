//! One-shot fetch of the remote user listing.

use crate::error::Result;
use rolodex_engine::UserRecord;

/// Fetch the full user listing from the remote endpoint.
///
/// Issued exactly once per session by [`crate::Directory`]. Non-success
/// statuses are errors; there is no retry, timeout, pagination, or auth.
pub async fn fetch_users(client: &reqwest::Client, endpoint: &str) -> Result<Vec<UserRecord>> {
    let users = client
        .get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<UserRecord>>()
        .await?;
    Ok(users)
}
