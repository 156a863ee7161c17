//! Cancellation primitive for in-flight generations.
//!
//! A `CancelHandle`/`CancelToken` pair over a `tokio::sync::watch` channel.
//! The polling loop checks the token at the top of every iteration and
//! races each wait against it, so a fired token interrupts both a pending
//! sleep and the next poll decision.

use tokio::sync::watch;

/// Caller-held handle that fires cancellation for its tokens.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Create another token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: Some(self.tx.subscribe()),
        }
    }
}

/// Observer side of a cancellation pair.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelToken {
    /// A token that can never fire, for callers without a cancellation
    /// source.
    pub fn disarmed() -> Self {
        Self { rx: None }
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolve once cancellation is signalled; pends forever on a disarmed
    /// token or when the handle is dropped without firing.
    pub async fn cancelled(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return std::future::pending().await;
        };
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return std::future::pending().await;
            }
        }
    }
}

/// Create a connected handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx: Some(rx) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_token_is_not_cancelled() {
        let (_handle, token) = cancel_pair();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_marks_all_tokens() {
        let (handle, token) = cancel_pair();
        let second = handle.token();
        handle.cancel();
        assert!(token.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[test]
    fn test_disarmed_token_never_cancels() {
        let token = CancelToken::disarmed();
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_signal() {
        let (handle, mut token) = cancel_pair();
        handle.cancel();
        // Must resolve immediately rather than hanging.
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("cancelled() should resolve once fired");
    }

    #[tokio::test]
    async fn test_cancelled_pends_until_signal() {
        let (handle, mut token) = cancel_pair();
        let pending =
            tokio::time::timeout(Duration::from_millis(50), token.cancelled()).await;
        assert!(pending.is_err(), "token must not resolve before cancel()");
        handle.cancel();
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("cancelled() should resolve once fired");
    }
}
