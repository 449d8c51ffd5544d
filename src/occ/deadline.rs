use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Deadline bounds how long a caller is willing to wait on a retry loop. It trips either when
/// the instant passes or when the caller cancels the token.
#[derive(Clone, Debug, Default)]
pub struct Deadline {
    at: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl Deadline {
    /// No deadline. The loop only ends on success or on a store error.
    pub fn none() -> Self {
        Deadline::default()
    }

    pub fn at(instant: Instant) -> Self {
        Deadline {
            at: Some(instant),
            cancel: None,
        }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn check(&self) -> Result<(), Expiry> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(Expiry::Cancelled);
            }
        }
        if let Some(at) = self.at {
            if Instant::now() >= at {
                return Err(Expiry::TimedOut);
            }
        }

        Ok(())
    }

    /// Resolves once the deadline trips. Never resolves for `Deadline::none()`.
    pub(crate) async fn expired(&self) -> Expiry {
        let timed_out = async {
            match self.at {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancelled => Expiry::Cancelled,
            _ = timed_out => Expiry::TimedOut,
        }
    }

    /// Runs `fut` unless the deadline trips first.
    pub(crate) async fn run<F: std::future::Future>(&self, fut: F) -> Result<F::Output, Expiry> {
        self.check()?;

        tokio::select! {
            biased;
            expiry = self.expired() => Err(expiry),
            output = fut => Ok(output),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Expiry {
    TimedOut,
    Cancelled,
}
