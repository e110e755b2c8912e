//! QoS Route - Constrained Shortest Path Routing over Network Graphs
//!
//! This library computes quality-of-service-aware routes between two
//! endpoints of a directed network graph. Each link carries a QoS bundle
//! (bandwidth, latency, reliability) which a weighted cost function
//! scalarizes into a single routing metric; the search then minimizes that
//! metric subject to a hard end-to-end latency budget.
//!
//! The core is a single-label, constraint-pruned variant of Dijkstra's
//! algorithm: relaxations that would exceed the latency budget are pruned
//! outright, and each node keeps one (cost, latency) label.

pub mod data_structures;
pub mod graph;
pub mod routing;
pub mod web;

pub use graph::network::NetworkGraph;
/// Re-export main types for convenient use
pub use routing::{
    constrained::ConstrainedRouter, cost::CostWeights, RouteQuery, RouteResult, RoutingAlgorithm,
};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node id: {0}")]
    UnknownNode(String),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("Duplicate link id: {0}")]
    DuplicateLink(String),

    #[error("Link {link} references unknown node id: {node}")]
    DanglingLink { link: String, node: String },

    #[error("Negative cost weight: {0}")]
    InvalidWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
