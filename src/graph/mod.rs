pub mod generators;
pub mod network;
pub mod traits;

pub use network::{Link, LinkQos, NetworkGraph, Node, NodeRole};
pub use traits::{MutableTopology, Topology};
