mod backoff;
mod deadline;
mod retry;

pub use backoff::ConflictBackoff;
pub use deadline::Deadline;
pub use retry::Applied;
pub use retry::OccError;
pub use retry::OccRetry;
pub use retry::Rejection;
