use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node as it crosses the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireNode {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Advisory role tag: "source", "target", or "default"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A directed link with its QoS attributes as it crosses the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireLink {
    pub id: String,
    pub source: String,
    pub target: String,
    pub bandwidth: f64,
    pub latency: f64,
    pub reliability: f64,
}

/// A complete network graph as it crosses the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireGraph {
    pub nodes: Vec<WireNode>,
    pub links: Vec<WireLink>,
}

/// Parameters for one route computation
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    pub max_latency: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

fn default_alpha() -> f64 {
    2000.0
}
fn default_beta() -> f64 {
    1.0
}
fn default_gamma() -> f64 {
    1000.0
}

/// Response containing the computed route
///
/// `total_cost` is absent (null) when no route exists, so the wire never
/// carries a non-finite JSON number.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub request_id: Uuid,
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
    pub total_cost: Option<f64>,
    pub total_latency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an uploaded graph and the latest route computed on it
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WireGraph,
    pub last_result: Option<RouteResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WireGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
