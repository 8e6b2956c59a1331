use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use timeuuid::{AtomicUuidV1Generator, NodeId, RandSource, SystemClock, ThreadRandom, Uuid};

use crate::server::{config::ServerConfig, error::Result};

pub type Generator = AtomicUuidV1Generator<SystemClock>;

/// Shared state: one process-wide generator.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<Generator>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let generator = match config.node_id {
            Some(node) => {
                Generator::from_components(node, ThreadRandom.rand() as u16, 0, SystemClock)
            }
            None => Generator::new(SystemClock, ThreadRandom),
        };
        Self {
            generator: Arc::new(generator),
        }
    }

    pub fn node(&self) -> NodeId {
        self.generator.node()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    /// Optional node override, 12 hex digits.
    pub node: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UuidResponse {
    pub uuid: Uuid,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/uuids/generate", get(generate_uuid))
        .route("/health", get(health))
        .with_state(state)
}

async fn generate_uuid(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<UuidResponse>> {
    let uuid = match params.node.as_deref() {
        Some(raw) => {
            let node: NodeId = raw.parse()?;
            state.generator.next_uuid_with_node(node)?
        }
        None => state.generator.next_uuid(),
    };
    tracing::debug!(%uuid, "generated UUID");
    Ok(Json(UuidResponse { uuid }))
}

async fn health() -> &'static str {
    "ok"
}
