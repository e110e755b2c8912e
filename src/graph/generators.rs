use crate::graph::network::{LinkQos, NetworkGraph, Node, NodeRole};
use crate::graph::traits::MutableTopology;
use rand::prelude::*;

/// Builds the demo network used by the sample deployments
///
/// Six nodes with three alternative two-hop routes from the sensor to the
/// main computer, each with a contrasting QoS profile:
/// - top route: high bandwidth, high latency, good reliability
/// - middle route: low bandwidth, low latency, excellent reliability
/// - bottom route: medium bandwidth, medium latency, poor reliability
/// plus a detour into storage off the aggregator.
pub fn sample_network() -> NetworkGraph {
    let mut graph = NetworkGraph::with_capacity(6, 7);

    let nodes = [
        Node::new("1", "Sensor A")
            .with_position(30.0, 175.0)
            .with_role(NodeRole::Source),
        Node::new("2", "Aggregator (High BW)").with_position(250.0, 100.0),
        Node::new("3", "Real-Time Controller").with_position(250.0, 250.0),
        Node::new("4", "Storage").with_position(520.0, 70.0),
        Node::new("5", "Main Computer")
            .with_position(550.0, 250.0)
            .with_role(NodeRole::Target),
        Node::new("6", "Wireless Backup").with_position(200.0, 400.0),
    ];
    for node in nodes {
        graph.add_node(node).expect("sample node ids are unique");
    }

    let links = [
        ("e1-2", "1", "2", LinkQos::new(1000.0, 40.0, 0.99)),
        ("e2-5", "2", "5", LinkQos::new(1000.0, 40.0, 0.99)),
        ("e1-3", "1", "3", LinkQos::new(10.0, 5.0, 0.999)),
        ("e3-5", "3", "5", LinkQos::new(10.0, 5.0, 0.999)),
        ("e1-6", "1", "6", LinkQos::new(100.0, 25.0, 0.7)),
        ("e6-5", "6", "5", LinkQos::new(100.0, 25.0, 0.7)),
        ("e2-4", "2", "4", LinkQos::new(500.0, 20.0, 0.9)),
    ];
    for (id, source, target, qos) in links {
        graph
            .add_link(id, source, target, qos)
            .expect("sample links reference existing nodes");
    }

    graph
}

/// Generates a random network with n nodes and roughly `links_per_node`
/// outgoing links per node
///
/// Link attributes are drawn uniformly: bandwidth 10-1000 Mbps, latency
/// 1-50 ms, reliability 0.5-1.0. Self-loops are skipped; parallel links
/// can occur and are kept.
pub fn generate_random_network(n: usize, links_per_node: usize) -> NetworkGraph {
    assert!(n > 1, "n must be at least 2");

    let mut graph = NetworkGraph::with_capacity(n, n * links_per_node);
    let mut rng = rand::thread_rng();

    for i in 0..n {
        graph
            .add_node(Node::new(format!("n{}", i), format!("Node {}", i)))
            .expect("generated node ids are unique");
    }

    let mut link_count = 0;
    for i in 0..n {
        for _ in 0..links_per_node {
            let target = rng.gen_range(0..n);
            if target == i {
                continue;
            }

            let qos = LinkQos::new(
                rng.gen_range(10.0..1000.0),
                rng.gen_range(1.0..50.0),
                rng.gen_range(0.5..1.0),
            );
            graph
                .add_link(
                    &format!("l{}", link_count),
                    &format!("n{}", i),
                    &format!("n{}", target),
                    qos,
                )
                .expect("generated links reference existing nodes");
            link_count += 1;
        }
    }

    graph
}
