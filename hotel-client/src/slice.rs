//! Request state slice
//!
//! `{data, loading, error}` for one remote resource. A failed load stores
//! the flattened error string and leaves `data` as it was, so the caller
//! keeps showing the last good value and may simply try again.

use std::future::Future;

use tracing::warn;

use crate::ClientResult;

/// State of one remote resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slice<T> {
    data: T,
    loading: bool,
    error: Option<String>,
}

impl<T> Slice<T> {
    /// Create a slice holding `initial` data
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a request as started
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a request outcome; returns whether it succeeded
    pub fn resolve(&mut self, result: ClientResult<T>) -> bool {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
                true
            }
            Err(e) => {
                let message = e.message();
                warn!(error = %message, "request failed, keeping previous data");
                self.error = Some(message);
                false
            }
        }
    }

    /// Run one request against this slice
    pub async fn load<F>(&mut self, request: F) -> bool
    where
        F: Future<Output = ClientResult<T>>,
    {
        self.begin();
        let result = request.await;
        self.resolve(result)
    }

    /// Replace the data locally (optimistic updates, cache restore)
    pub fn set(&mut self, data: T) {
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[tokio::test]
    async fn test_load_success_replaces_data() {
        let mut slice = Slice::new(vec![1, 2]);
        let ok = slice.load(async { Ok(vec![3]) }).await;
        assert!(ok);
        assert_eq!(slice.data(), &vec![3]);
        assert!(!slice.is_loading());
        assert!(slice.error().is_none());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_data() {
        let mut slice = Slice::new(vec![1, 2]);
        let ok = slice
            .load(async { Err(ClientError::Internal("boom".into())) })
            .await;
        assert!(!ok);
        assert_eq!(slice.data(), &vec![1, 2]);
        assert!(!slice.is_loading());
        assert_eq!(slice.error(), Some("Internal error: boom"));
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut slice: Slice<Vec<i32>> = Slice::default();
        slice.resolve(Err(ClientError::PropertyNotSelected));
        assert!(slice.error().is_some());

        slice.begin();
        assert!(slice.is_loading());
        assert!(slice.error().is_none());
    }
}
