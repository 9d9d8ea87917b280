// src/core/cancellation_token.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a host flips to stop a reduction between stages.
///
/// Clones observe the same flag, so one clone can be handed to a Ctrl-C
/// handler while another is passed into the reducer.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    is_cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken {
            is_cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.is_cancelled.store(true, Ordering::SeqCst);
    }

    /// Sets the flag and reports whether it was already set, so a host can
    /// treat a repeated request as "stop now" instead of "stop between stages".
    pub fn request_cancel(&self) -> bool {
        self.is_cancelled.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancellation_requested());
    }

    #[test]
    fn test_cancel_is_visible_through_clones() {
        let token = CancellationToken::new();
        let other = token.clone();
        other.cancel();
        assert!(token.is_cancellation_requested());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancellationToken::new();
        let remote = token.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancellation_requested());
    }

    #[test]
    fn test_second_request_is_reported_as_repeat() {
        let token = CancellationToken::new();
        let handler = token.clone();
        assert!(!handler.request_cancel(), "first request only sets the flag");
        assert!(token.is_cancellation_requested());
        assert!(handler.request_cancel(), "second request must be seen as a repeat");
    }
}
