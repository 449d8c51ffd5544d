//! This mod is meant to hold most of the code for the library's client-facing API.
mod node;
mod options;
mod wiring;

pub use node::AddInput;
pub use node::AddOutput;
pub use node::CommitOffsetsInput;
pub use node::CommitOffsetsOutput;
pub use node::ListCommittedOffsetsInput;
pub use node::ListCommittedOffsetsOutput;
pub use node::NodeError;
pub use node::PollInput;
pub use node::PollOutput;
pub use node::ReadInput;
pub use node::ReadOutput;
pub use node::SendInput;
pub use node::SendOutput;
pub use node::StateNode;
pub use node::UnfilledOffsetsInput;
pub use node::UnfilledOffsetsOutput;
pub use options::OccOptions;
pub use wiring::try_create_state_node;
pub use wiring::StateNodeConfig;
pub use wiring::StateNodeCreationError;
pub use wiring::StoreLocation;
