mod commit;
mod counter;
mod keys;
mod log;

pub use commit::CommitTracker;
pub(crate) use commit::MAX_COMMITTABLE_OFFSET;
pub use counter::CounterService;
pub use log::LogEntry;
pub use log::LogService;
