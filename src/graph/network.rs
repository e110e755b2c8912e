use crate::graph::traits::{MutableTopology, Topology};
use crate::{Error, Result};
use std::collections::HashMap;

/// Advisory role tag for a node; never consulted by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeRole {
    Source,
    Target,
    #[default]
    Default,
}

/// A node in the network
///
/// The label and coordinates are display metadata carried for
/// collaborators; only the id participates in routing.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub role: NodeRole,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
            role: NodeRole::Default,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = role;
        self
    }
}

/// QoS attribute bundle of a link
///
/// `bandwidth` is in Mbps and expected positive; non-positive values are
/// tolerated and floored inside the cost model only. `latency` is in ms.
/// `reliability` is probability-like and consumed as supplied; clamping
/// into [0, 1] is the editing collaborator's contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkQos {
    pub bandwidth: f64,
    pub latency: f64,
    pub reliability: f64,
}

impl LinkQos {
    pub fn new(bandwidth: f64, latency: f64, reliability: f64) -> Self {
        LinkQos {
            bandwidth,
            latency,
            reliability,
        }
    }
}

/// A directed link between two interned node indices
#[derive(Debug, Clone)]
pub struct Link {
    pub id: String,
    pub source: usize,
    pub target: usize,
    pub qos: LinkQos,
}

/// A directed network graph with interned node ids and an adjacency index
///
/// String node ids are interned to dense indices at insertion, and each
/// node keeps the list of its outgoing link indices, so the search walks
/// adjacency directly instead of filtering the full link list. The graph
/// is treated as an immutable snapshot for the duration of one search.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    links: Vec<Link>,

    /// Node id -> dense node index
    node_index: HashMap<String, usize>,

    /// Link id -> link index, used only to reject duplicates
    link_index: HashMap<String, usize>,

    /// Outgoing link indices for each node
    outgoing: Vec<Vec<usize>>,
}

impl NetworkGraph {
    /// Creates a new empty network graph
    pub fn new() -> Self {
        NetworkGraph::default()
    }

    /// Creates a new network graph with preallocated capacity
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        NetworkGraph {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
            node_index: HashMap::with_capacity(nodes),
            link_index: HashMap::with_capacity(links),
            outgoing: Vec::with_capacity(nodes),
        }
    }

    /// Returns all links in insertion order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns all nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up a link by its id
    pub fn link(&self, id: &str) -> Option<&Link> {
        self.link_index.get(id).map(|&i| &self.links[i])
    }
}

impl Topology for NetworkGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn link_count(&self) -> usize {
        self.links.len()
    }

    fn node_index(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    fn outgoing_links(&self, node: usize) -> Box<dyn Iterator<Item = &Link> + '_> {
        match self.outgoing.get(node) {
            Some(indices) => Box::new(indices.iter().map(|&i| &self.links[i])),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, index: usize) -> bool {
        index < self.nodes.len()
    }

    fn has_link(&self, from: usize, to: usize) -> bool {
        match self.outgoing.get(from) {
            Some(indices) => indices.iter().any(|&i| self.links[i].target == to),
            None => false,
        }
    }
}

impl MutableTopology for NetworkGraph {
    fn add_node(&mut self, node: Node) -> Result<usize> {
        if self.node_index.contains_key(&node.id) {
            return Err(Error::DuplicateNode(node.id));
        }

        let index = self.nodes.len();
        self.node_index.insert(node.id.clone(), index);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        Ok(index)
    }

    fn add_link(
        &mut self,
        id: &str,
        source_id: &str,
        target_id: &str,
        qos: LinkQos,
    ) -> Result<usize> {
        if self.link_index.contains_key(id) {
            return Err(Error::DuplicateLink(id.to_string()));
        }

        let source = self
            .node_index(source_id)
            .ok_or_else(|| Error::DanglingLink {
                link: id.to_string(),
                node: source_id.to_string(),
            })?;
        let target = self
            .node_index(target_id)
            .ok_or_else(|| Error::DanglingLink {
                link: id.to_string(),
                node: target_id.to_string(),
            })?;

        let index = self.links.len();
        self.link_index.insert(id.to_string(), index);
        self.links.push(Link {
            id: id.to_string(),
            source,
            target,
            qos,
        });
        self.outgoing[source].push(index);
        Ok(index)
    }
}
