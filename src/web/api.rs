use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::graph::generators::sample_network;
use crate::graph::{LinkQos, MutableTopology, NetworkGraph, Node, NodeRole, Topology};
use crate::routing::{ConstrainedRouter, CostWeights, RouteQuery, RoutingAlgorithm};
use crate::web::models::*;
use crate::Error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/sample", post(create_sample_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/routes/:session_id", post(compute_route))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Upload a graph and open a session for it
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(graph): Json<WireGraph>,
) -> Result<Json<Session>, (StatusCode, Json<ErrorResponse>)> {
    // Validate eagerly so a malformed graph is rejected at upload, not at
    // first route
    if let Err(err) = convert_wire_graph(&graph) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "invalid_graph".to_string(),
                message: err.to_string(),
                details: None,
            }),
        ));
    }

    let session = Session::new(graph);
    let session_id = session.id;

    {
        let mut sessions = state.sessions.lock().unwrap();
        sessions.insert(session_id, session.clone());
    }

    Ok(Json(session))
}

/// Open a session seeded with the built-in demo topology
pub async fn create_sample_graph(
    State(state): State<AppState>,
) -> Result<Json<Session>, (StatusCode, Json<ErrorResponse>)> {
    let session = Session::new(convert_network_to_wire(&sample_network()));
    let session_id = session.id;

    {
        let mut sessions = state.sessions.lock().unwrap();
        sessions.insert(session_id, session.clone());
    }

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WireGraph>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Run a constrained route query against a session's graph
pub async fn compute_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let graph = {
        let sessions = state.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    // The graph was validated at upload; a failure here means the session
    // store was corrupted
    let network = match convert_wire_graph(&graph) {
        Ok(network) => network,
        Err(err) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "graph_conversion_failed".to_string(),
                    message: err.to_string(),
                    details: None,
                }),
            ));
        }
    };

    let query = RouteQuery::new(request.start.as_str(), request.end.as_str(), request.max_latency)
        .with_weights(CostWeights::new(request.alpha, request.beta, request.gamma));

    let router = ConstrainedRouter::new();
    let start_time = Instant::now();
    let result = router.route(&network, &query);
    let execution_time = start_time.elapsed();

    match result {
        Ok(route) => {
            let response = RouteResponse {
                request_id: Uuid::new_v4(),
                start: request.start,
                end: request.end,
                total_cost: route.is_routed().then_some(route.total_cost),
                total_latency: route.total_latency,
                path: route.path,
                error: route.error,
                execution_time_ms: execution_time.as_secs_f64() * 1000.0,
                timestamp: chrono::Utc::now(),
            };

            {
                let mut sessions = state.sessions.lock().unwrap();
                if let Some(session) = sessions.get_mut(&session_id) {
                    session.last_result = Some(response.clone());
                }
            }

            Ok(Json(response))
        }
        Err(err @ Error::UnknownNode(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "unknown_node".to_string(),
                message: err.to_string(),
                details: None,
            }),
        )),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "route_computation_failed".to_string(),
                message: err.to_string(),
                details: None,
            }),
        )),
    }
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Uuid>>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = state.sessions.lock().unwrap();
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn session_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: "Session not found".to_string(),
            details: None,
        }),
    )
}

fn parse_role(role: Option<&str>) -> NodeRole {
    match role {
        Some("source") => NodeRole::Source,
        Some("target") => NodeRole::Target,
        _ => NodeRole::Default,
    }
}

fn format_role(role: NodeRole) -> Option<String> {
    match role {
        NodeRole::Source => Some("source".to_string()),
        NodeRole::Target => Some("target".to_string()),
        NodeRole::Default => None,
    }
}

fn convert_wire_graph(wire: &WireGraph) -> crate::Result<NetworkGraph> {
    let mut network = NetworkGraph::with_capacity(wire.nodes.len(), wire.links.len());

    for node in &wire.nodes {
        network.add_node(
            Node::new(node.id.as_str(), node.label.as_str())
                .with_position(node.x.unwrap_or(0.0), node.y.unwrap_or(0.0))
                .with_role(parse_role(node.role.as_deref())),
        )?;
    }

    for link in &wire.links {
        network.add_link(
            &link.id,
            &link.source,
            &link.target,
            LinkQos::new(link.bandwidth, link.latency, link.reliability),
        )?;
    }

    Ok(network)
}

fn convert_network_to_wire(network: &NetworkGraph) -> WireGraph {
    let nodes = network
        .nodes()
        .iter()
        .map(|node| WireNode {
            id: node.id.clone(),
            label: node.label.clone(),
            x: Some(node.x),
            y: Some(node.y),
            role: format_role(node.role),
        })
        .collect();

    let links = network
        .links()
        .iter()
        .map(|link| WireLink {
            id: link.id.clone(),
            source: network.node(link.source).id.clone(),
            target: network.node(link.target).id.clone(),
            bandwidth: link.qos.bandwidth,
            latency: link.qos.latency,
            reliability: link.qos.reliability,
        })
        .collect();

    WireGraph { nodes, links }
}
