use axum::{
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use queenspot_types::{DrawResponse, NewDeckResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub struct Api {
    simulator: Arc<crate::Simulator>,
}

#[derive(Deserialize)]
struct DrawParams {
    #[serde(default = "default_count")]
    count: u32,
}

fn default_count() -> u32 {
    1
}

impl Api {
    pub fn new(simulator: Arc<crate::Simulator>) -> Self {
        Self { simulator }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/deck/new/shuffle/", get(new_shuffle))
            .route("/deck/:deck_id/draw/", get(draw))
            .with_state(self.simulator.clone())
    }
}

async fn new_shuffle(AxumState(simulator): AxumState<Arc<crate::Simulator>>) -> Response {
    let (deck_id, remaining) = simulator.create_deck();
    debug!(%deck_id, remaining, "created deck");
    Json(NewDeckResponse {
        success: true,
        deck_id,
        shuffled: true,
        remaining,
    })
    .into_response()
}

async fn draw(
    AxumState(simulator): AxumState<Arc<crate::Simulator>>,
    Path(deck_id): Path<String>,
    Query(params): Query<DrawParams>,
) -> Response {
    let Some((cards, remaining)) = simulator.draw(&deck_id, params.count) else {
        debug!(%deck_id, "draw from unknown deck");
        return StatusCode::NOT_FOUND.into_response();
    };
    if cards.is_empty() {
        debug!(%deck_id, "draw from exhausted deck");
        return (StatusCode::BAD_REQUEST, "no cards left").into_response();
    }
    debug!(%deck_id, drawn = cards.len(), remaining, "drew cards");
    Json(DrawResponse {
        success: true,
        deck_id,
        cards,
        remaining,
    })
    .into_response()
}
