//! Route handlers.
//!
//! The flight table is reloaded on every request, so edits to the CSV are
//! picked up without a restart.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use skynear_core::flights::FlightTable;
use skynear_core::resolve::resolve;
use skynear_core::types::SkynearError;

use crate::web::AppState;

/// GET /aviao — the aircraft currently nearest the watch point.
pub async fn aviao_proximo(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let states = match state
        .provider
        .states_around(state.watch, state.box_delta)
        .await
    {
        Ok(s) => s,
        Err(e @ SkynearError::UpstreamAuth(_)) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"erro": "Erro ao obter token", "detalhes": e.to_string()})),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"erro": "Erro ao obter dados da API", "detalhes": e.to_string()})),
            )
                .into_response();
        }
    };

    let flights = match FlightTable::load(&state.flights_csv) {
        Ok(t) => t,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"erro": "Erro ao ler tabela de voos", "detalhes": e.to_string()})),
            )
                .into_response();
        }
    };

    match resolve(state.watch, &states, &flights, state.unseen.as_ref()) {
        Some(info) => Json(info).into_response(),
        None => Json(json!({"erro": "Nenhum avião encontrado"})).into_response(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
