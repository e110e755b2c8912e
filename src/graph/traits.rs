use crate::graph::network::{Link, LinkQos, Node};
use crate::Result;

/// Trait representing a directed network topology with QoS-attributed links
pub trait Topology {
    /// Returns the number of nodes in the topology
    fn node_count(&self) -> usize;

    /// Returns the number of links in the topology
    fn link_count(&self) -> usize;

    /// Resolves a node id to its dense index, if the node exists
    fn node_index(&self, id: &str) -> Option<usize>;

    /// Returns the node stored at the given index
    fn node(&self, index: usize) -> &Node;

    /// Returns an iterator over the outgoing links of a node
    ///
    /// Parallel links between the same node pair are yielded individually.
    fn outgoing_links(&self, node: usize) -> Box<dyn Iterator<Item = &Link> + '_>;

    /// Returns true if the index refers to a node in the topology
    fn has_node(&self, index: usize) -> bool;

    /// Returns true if at least one link connects `from` to `to`
    fn has_link(&self, from: usize, to: usize) -> bool;
}

/// Trait for building a topology before handing it to the router
///
/// The router itself never mutates a topology; construction happens up
/// front through this seam, and every mutation is validated.
pub trait MutableTopology: Topology {
    /// Adds a node, returning its dense index
    ///
    /// Fails if a node with the same id already exists.
    fn add_node(&mut self, node: Node) -> Result<usize>;

    /// Adds a directed link between two existing nodes, returning its index
    ///
    /// Fails if the link id is taken or either endpoint id is unknown.
    /// Adding a second link between the same pair of nodes is allowed.
    fn add_link(&mut self, id: &str, source_id: &str, target_id: &str, qos: LinkQos)
        -> Result<usize>;
}
