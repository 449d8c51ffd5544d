use std::convert::TryFrom;
use tokio::time::Duration;

#[derive(Clone, Default)]
pub struct OccOptions {
    /// Backoff before the first retry of a lost CAS. Doubles per further conflict.
    pub conflict_backoff_min: Option<Duration>,
    pub conflict_backoff_max: Option<Duration>,
    /// Cap on read-compute-CAS rounds per update. Unlike the other options, `None` means no cap.
    pub max_attempts: Option<u32>,
    /// Applied to every operation whose caller doesn't supply a timeout of its own.
    pub operation_timeout: Option<Duration>,
}

pub(crate) struct OccOptionsValidated {
    pub conflict_backoff_min: Duration,
    pub conflict_backoff_max: Duration,
    pub max_attempts: Option<u32>,
    pub operation_timeout: Duration,
}

impl OccOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.conflict_backoff_min > self.conflict_backoff_max {
            return Err("Conflict backoff minimum must not exceed the maximum");
        }
        if self.max_attempts == Some(0) {
            return Err("Max attempts must allow at least one attempt");
        }
        if self.operation_timeout == Duration::from_millis(0) {
            return Err("Operation timeout must be non-zero");
        }

        Ok(())
    }
}

impl TryFrom<OccOptions> for OccOptionsValidated {
    type Error = &'static str;

    fn try_from(options: OccOptions) -> Result<Self, Self::Error> {
        let values = OccOptionsValidated {
            conflict_backoff_min: options.conflict_backoff_min.unwrap_or(Duration::from_millis(1)),
            conflict_backoff_max: options.conflict_backoff_max.unwrap_or(Duration::from_millis(64)),
            max_attempts: options.max_attempts,
            operation_timeout: options.operation_timeout.unwrap_or(Duration::from_secs(5)),
        };

        values.validate()?;
        Ok(values)
    }
}
