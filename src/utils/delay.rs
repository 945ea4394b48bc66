use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Sleeps for `duration` unless `token` is cancelled first.
///
/// An already-cancelled token resolves immediately with [`Error::Cancelled`],
/// so a torn-down caller never observes a late completion.
pub async fn cancellable_sleep(duration: Duration, token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("deferred operation cancelled");
            Err(Error::Cancelled)
        }
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}
