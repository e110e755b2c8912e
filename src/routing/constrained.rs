use log::{debug, trace};

use crate::data_structures::Frontier;
use crate::graph::Topology;
use crate::routing::cost::link_cost;
use crate::routing::traits::{RouteQuery, RouteResult, RoutingAlgorithm};
use crate::{Error, Result};

/// Latency-constrained minimum-cost router
///
/// A single-label, constraint-pruned variant of Dijkstra's algorithm:
/// each node keeps one (cost, latency) label, relaxations whose
/// cumulative latency would exceed the budget are pruned before the
/// improvement test, and the frontier discards stale entries lazily.
///
/// Keeping a single label per node trades exactness for simplicity.
/// Feasibility depends on a second additive resource, so a node can have
/// two incomparable histories (cheaper but latency-heavy vs. costlier
/// with latency headroom) of which only one survives; in rare topologies
/// the surviving label is not on the true constrained optimum. Exact
/// resource-constrained search would keep a Pareto frontier of
/// non-dominated labels per node instead.
#[derive(Debug, Default)]
pub struct ConstrainedRouter;

impl ConstrainedRouter {
    /// Creates a new router instance
    pub fn new() -> Self {
        ConstrainedRouter
    }
}

impl<T: Topology> RoutingAlgorithm<T> for ConstrainedRouter {
    fn name(&self) -> &'static str {
        "ConstrainedDijkstra"
    }

    fn route(&self, graph: &T, query: &RouteQuery) -> Result<RouteResult> {
        for weight in [query.weights.alpha, query.weights.beta, query.weights.gamma] {
            if weight < 0.0 {
                return Err(Error::InvalidWeight(weight));
            }
        }

        let start = graph
            .node_index(&query.start)
            .ok_or_else(|| Error::UnknownNode(query.start.clone()))?;
        let end = graph
            .node_index(&query.end)
            .ok_or_else(|| Error::UnknownNode(query.end.clone()))?;

        if start == end {
            // Trivial route: stay on the start node
            return Ok(RouteResult::routed(vec![query.start.clone()], 0.0, 0.0));
        }

        let n = graph.node_count();

        // One label per node: best cost found so far, the latency accrued
        // along the path achieving it, and where that path came from
        let mut best_cost = vec![f64::INFINITY; n];
        let mut path_latency = vec![0.0; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];

        best_cost[start] = 0.0;

        let mut frontier = Frontier::new();
        frontier.push(start, 0.0);

        while let Some((u, cost_u)) = frontier.pop() {
            // Stale entry: a cheaper label was installed after this entry
            // was queued
            if cost_u > best_cost[u] {
                continue;
            }

            if u == end {
                debug!(
                    "reached {} at cost {:.3}, latency {:.1} ms",
                    query.end, cost_u, path_latency[end]
                );
                let path = reconstruct_path(graph, &predecessor, start, end);
                return Ok(RouteResult::routed(path, cost_u, path_latency[end]));
            }

            for link in graph.outgoing_links(u) {
                let v = link.target;
                let candidate_cost = best_cost[u] + link_cost(&link.qos, &query.weights);
                let candidate_latency = path_latency[u] + link.qos.latency;

                // Feasibility gate: relaxations over budget never touch
                // state or the frontier
                if candidate_latency > query.max_latency {
                    trace!(
                        "prune {}: latency {:.1} over budget {:.1}",
                        link.id,
                        candidate_latency,
                        query.max_latency
                    );
                    continue;
                }

                // Strict improvement; ties keep the earlier label
                if candidate_cost < best_cost[v] {
                    best_cost[v] = candidate_cost;
                    path_latency[v] = candidate_latency;
                    predecessor[v] = Some(u);
                    frontier.push(v, candidate_cost);
                }
            }
        }

        debug!("frontier exhausted without reaching {}", query.end);
        Ok(RouteResult::no_path())
    }
}

/// Walks predecessor links backward from the end node and maps the dense
/// indices back to node ids
///
/// Only called after the end node popped, so the chain is complete; an
/// accepted relaxation strictly improves a label, which precludes cycles
/// in the predecessor links.
fn reconstruct_path<T: Topology>(
    graph: &T,
    predecessor: &[Option<usize>],
    start: usize,
    end: usize,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        path.push(graph.node(current).id.clone());
        match predecessor[current] {
            Some(pred) => current = pred,
            None => break,
        }
    }

    path.push(graph.node(start).id.clone());
    path.reverse();
    path
}
