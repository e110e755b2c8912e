use qos_route::graph::generators::{generate_random_network, sample_network};
use qos_route::graph::{LinkQos, MutableTopology, NetworkGraph, Node, NodeRole, Topology};
use qos_route::Error;

#[test]
fn test_node_ids_are_interned_in_insertion_order() {
    let mut graph = NetworkGraph::new();
    let a = graph.add_node(Node::new("a", "First")).unwrap();
    let b = graph.add_node(Node::new("b", "Second")).unwrap();

    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node_index("a"), Some(0));
    assert_eq!(graph.node_index("b"), Some(1));
    assert_eq!(graph.node_index("c"), None);
    assert_eq!(graph.node(1).label, "Second");
}

#[test]
fn test_duplicate_node_id_is_rejected() {
    let mut graph = NetworkGraph::new();
    graph.add_node(Node::new("a", "First")).unwrap();

    let err = graph.add_node(Node::new("a", "Again")).unwrap_err();
    assert!(matches!(err, Error::DuplicateNode(ref id) if id == "a"));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_link_endpoints_must_exist() {
    let mut graph = NetworkGraph::new();
    graph.add_node(Node::new("a", "A")).unwrap();

    let err = graph
        .add_link("e1", "a", "missing", LinkQos::new(100.0, 1.0, 1.0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DanglingLink { ref link, ref node } if link == "e1" && node == "missing"
    ));
    assert_eq!(graph.link_count(), 0);
}

#[test]
fn test_duplicate_link_id_is_rejected() {
    let mut graph = NetworkGraph::new();
    graph.add_node(Node::new("a", "A")).unwrap();
    graph.add_node(Node::new("b", "B")).unwrap();
    graph
        .add_link("e1", "a", "b", LinkQos::new(100.0, 1.0, 1.0))
        .unwrap();

    let err = graph
        .add_link("e1", "b", "a", LinkQos::new(100.0, 1.0, 1.0))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateLink(ref id) if id == "e1"));
    assert_eq!(graph.link_count(), 1);
}

#[test]
fn test_parallel_links_are_kept_and_iterated_separately() {
    let mut graph = NetworkGraph::new();
    let a = graph.add_node(Node::new("a", "A")).unwrap();
    let b = graph.add_node(Node::new("b", "B")).unwrap();
    graph
        .add_link("fast", "a", "b", LinkQos::new(10.0, 2.0, 0.9))
        .unwrap();
    graph
        .add_link("fat", "a", "b", LinkQos::new(1000.0, 30.0, 0.99))
        .unwrap();

    let outgoing: Vec<_> = graph.outgoing_links(a).collect();
    assert_eq!(outgoing.len(), 2);
    assert_eq!(outgoing[0].id, "fast");
    assert_eq!(outgoing[1].id, "fat");
    assert!(outgoing.iter().all(|link| link.target == b));

    assert!(graph.has_link(a, b));
    assert!(!graph.has_link(b, a));
}

#[test]
fn test_links_are_directed() {
    let mut graph = NetworkGraph::new();
    let a = graph.add_node(Node::new("a", "A")).unwrap();
    let b = graph.add_node(Node::new("b", "B")).unwrap();
    graph
        .add_link("e1", "a", "b", LinkQos::new(100.0, 1.0, 1.0))
        .unwrap();

    assert_eq!(graph.outgoing_links(a).count(), 1);
    assert_eq!(graph.outgoing_links(b).count(), 0);
}

#[test]
fn test_link_lookup_by_id() {
    let mut graph = NetworkGraph::new();
    graph.add_node(Node::new("a", "A")).unwrap();
    graph.add_node(Node::new("b", "B")).unwrap();
    graph
        .add_link("e1", "a", "b", LinkQos::new(250.0, 7.5, 0.95))
        .unwrap();

    let link = graph.link("e1").unwrap();
    assert_eq!(link.qos, LinkQos::new(250.0, 7.5, 0.95));
    assert!(graph.link("e2").is_none());
}

#[test]
fn test_sample_network_shape() {
    let graph = sample_network();

    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.link_count(), 7);

    let sensor = graph.node_index("1").unwrap();
    let computer = graph.node_index("5").unwrap();
    assert_eq!(graph.node(sensor).role, NodeRole::Source);
    assert_eq!(graph.node(computer).role, NodeRole::Target);

    // Three alternative first hops out of the sensor
    assert_eq!(graph.outgoing_links(sensor).count(), 3);
    // The main computer is a sink
    assert_eq!(graph.outgoing_links(computer).count(), 0);
}

#[test]
fn test_generated_network_is_well_formed() {
    let graph = generate_random_network(20, 3);

    assert_eq!(graph.node_count(), 20);
    assert!(graph.link_count() <= 20 * 3);

    for link in graph.links() {
        assert!(link.source != link.target, "self-loops are skipped");
        assert!(graph.has_node(link.source));
        assert!(graph.has_node(link.target));
        assert!(link.qos.bandwidth >= 10.0 && link.qos.bandwidth < 1000.0);
        assert!(link.qos.latency >= 1.0 && link.qos.latency < 50.0);
        assert!(link.qos.reliability >= 0.5 && link.qos.reliability < 1.0);
    }
}
