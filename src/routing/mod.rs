pub mod constrained;
pub mod cost;
pub mod traits;

pub use constrained::ConstrainedRouter;
pub use cost::{link_cost, CostWeights};
pub use traits::{RouteQuery, RouteResult, RoutingAlgorithm};
