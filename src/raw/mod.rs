mod node;
mod queue;

pub use node::{Link, Node};
pub(crate) use queue::Queue;
