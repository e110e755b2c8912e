use crate::graph::Topology;
use crate::routing::cost::CostWeights;
use crate::Result;

/// Message attached to a result when no feasible route exists
pub const NO_PATH: &str = "No Possible Path";

/// One routing request: endpoints, latency budget, and cost tuning
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Id of the node the route starts from
    pub start: String,
    /// Id of the node the route must reach
    pub end: String,
    /// Hard additive budget on the summed link latency, in ms
    pub max_latency: f64,
    /// Scalarization weights for the link cost model
    pub weights: CostWeights,
}

impl RouteQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>, max_latency: f64) -> Self {
        RouteQuery {
            start: start.into(),
            end: end.into(),
            max_latency,
            weights: CostWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Outcome of a routing request
///
/// A routed outcome carries the ordered node ids from start to end
/// inclusive, the accumulated cost, and the accumulated latency. The
/// no-path outcome carries an empty path, an infinite-cost sentinel, zero
/// latency, and a human-readable error so a consuming UI can render an
/// explicit failure state.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Ordered node ids from start to end; empty when no route exists
    pub path: Vec<String>,
    /// Total scalarized cost of the route, or infinity when unrouted
    pub total_cost: f64,
    /// Total latency accrued along the route, in ms
    pub total_latency: f64,
    /// Present only on the no-path outcome
    pub error: Option<String>,
}

impl RouteResult {
    /// Builds the outcome for a found route
    pub fn routed(path: Vec<String>, total_cost: f64, total_latency: f64) -> Self {
        RouteResult {
            path,
            total_cost,
            total_latency,
            error: None,
        }
    }

    /// Builds the no-path outcome
    pub fn no_path() -> Self {
        RouteResult {
            path: Vec::new(),
            total_cost: f64::INFINITY,
            total_latency: 0.0,
            error: Some(NO_PATH.to_string()),
        }
    }

    /// Returns true if a route was found
    pub fn is_routed(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Trait for routing algorithms over a topology
pub trait RoutingAlgorithm<T: Topology> {
    /// Computes a route for the query, or fails on malformed input
    ///
    /// Infeasibility is not a failure: an unreachable end node yields
    /// `Ok` with [`RouteResult::no_path`]. `Err` is reserved for inputs
    /// the search cannot meaningfully start from, such as unknown node
    /// ids.
    fn route(&self, graph: &T, query: &RouteQuery) -> Result<RouteResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
