use qos_route::graph::generators::sample_network;
use qos_route::graph::Topology;
use qos_route::{ConstrainedRouter, CostWeights, RouteQuery, RoutingAlgorithm};

fn main() {
    let graph = sample_network();
    let router = ConstrainedRouter::new();

    println!("--- Routing on the sample network ---");
    println!(
        "Network has {} nodes and {} links",
        graph.node_count(),
        graph.link_count()
    );

    // Stock tuning, generous budget
    let query = RouteQuery::new("1", "5", 200.0).with_weights(CostWeights::default());
    report(&router, &graph, &query, "default weights, 200 ms budget");

    // Reliability ignored: the cheap wireless backup route wins
    let query = RouteQuery::new("1", "5", 200.0).with_weights(CostWeights::new(1000.0, 1.0, 0.0));
    report(&router, &graph, &query, "reliability ignored");

    // Tight budget: only the low-latency controller route fits
    let query = RouteQuery::new("1", "5", 40.0).with_weights(CostWeights::new(1000.0, 1.0, 0.0));
    report(&router, &graph, &query, "40 ms budget");

    // Unreachable: storage has no outbound links back to the sensor
    let query = RouteQuery::new("4", "1", 1000.0);
    report(&router, &graph, &query, "unreachable target");
}

fn report(
    router: &ConstrainedRouter,
    graph: &qos_route::NetworkGraph,
    query: &RouteQuery,
    scenario: &str,
) {
    println!("\n[{}] {} -> {}", scenario, query.start, query.end);
    match router.route(graph, query) {
        Ok(result) if result.is_routed() => {
            println!("  path: {}", result.path.join(" -> "));
            println!(
                "  cost: {:.2}, latency: {:.1} ms (budget {:.1} ms)",
                result.total_cost, result.total_latency, query.max_latency
            );
        }
        Ok(result) => {
            println!(
                "  {}",
                result.error.unwrap_or_else(|| "no route".to_string())
            );
        }
        Err(err) => println!("  error: {}", err),
    }
}
