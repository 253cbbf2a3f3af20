use std::future::Future;
use std::time::Duration;

use dj_core::errors::{DomainError, DomainResult};

/// Run `work` under the request deadline.
///
/// An elapsed deadline drops the in-flight storage or peer call; effects it
/// already committed are kept.
pub async fn with_deadline<T, F>(deadline: Duration, work: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(deadline, work).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Request deadline exceeded");
            Err(DomainError::upstream(format!(
                "deadline of {}ms exceeded",
                deadline.as_millis()
            )))
        }
    }
}
