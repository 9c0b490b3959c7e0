//! Route handlers for the lead-capture API.
//!
//! Every response is a JSON envelope. Failures carry
//! `{"success": false, "error": ...}`; the status code depends on the
//! route: simulation and admin reads answer 500, a login mismatch answers
//! 401, and the contact-status update keeps its historical 200 even on
//! failure.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;
use crate::store::NewLead;
use crate::tax;

fn failure(error: impl std::fmt::Display) -> Json<Value> {
    Json(json!({ "success": false, "error": error.to_string() }))
}

/// Missing or non-string fields become empty strings.
fn str_field(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Revenue arrives as a JSON number or a numeric string; anything else
/// counts as zero.
fn amount_field(body: &Value, key: &str) -> f64 {
    match body.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

// ============== Simulation ==============

/// POST /calcular — quote both fixed regimes and record the lead.
///
/// The lead row is a side effect: a store failure is logged and the quote
/// is still returned.
pub async fn calcular(State(state): State<Arc<AppState>>, body: String) -> Response {
    let dados: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, failure(e)).into_response(),
    };

    let faturamento = amount_field(&dados, "faturamento");

    let lead = NewLead {
        nome: str_field(&dados, "nome"),
        telefone: str_field(&dados, "telefone"),
        email: str_field(&dados, "email"),
        faturamento,
        tipo_empresa: str_field(&dados, "tipo_empresa"),
    };
    if let Err(e) = state.store.append(&lead) {
        tracing::error!("failed to record lead: {e}");
    }

    let regimes = tax::simulate_fixed_regimes(faturamento);
    Json(json!({
        "success": true,
        "simples_nacional": regimes.simples_nacional,
        "equiparacao_hospitalar": regimes.equiparacao_hospitalar,
    }))
    .into_response()
}

// ============== Admin ==============

/// POST /admin/login — single credential-pair check.
pub async fn admin_login(State(state): State<Arc<AppState>>, body: String) -> Response {
    let dados: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let usuario = str_field(&dados, "usuario");
    let senha = str_field(&dados, "senha");

    if state.check_admin(&usuario, &senha) {
        Json(json!({ "success": true })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "success": false }))).into_response()
    }
}

/// GET /admin/dados — full table dump with display-facing keys.
pub async fn admin_dados(State(state): State<Arc<AppState>>) -> Response {
    match state.store.read_all() {
        Ok(leads) => {
            let total = leads.len();
            Json(json!({ "success": true, "dados": leads, "total": total })).into_response()
        }
        Err(e) => {
            tracing::error!("failed to read leads: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, failure(e)).into_response()
        }
    }
}

/// GET /admin/estatisticas — distinct users, total rows, today's rows.
pub async fn admin_estatisticas(State(state): State<Arc<AppState>>) -> Response {
    match state.store.read_all() {
        Ok(leads) => {
            let hoje = chrono::Local::now().format("%d/%m/%Y").to_string();
            let cadastros_hoje = leads
                .iter()
                .filter(|l| l.data_cadastro.contains(&hoje))
                .count();
            let emails: HashSet<&str> = leads
                .iter()
                .map(|l| l.email.as_str())
                .filter(|e| !e.is_empty())
                .collect();

            Json(json!({
                "success": true,
                "total_usuarios": emails.len(),
                "total_simulacoes": leads.len(),
                "cadastros_hoje": cadastros_hoje,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!("failed to read leads: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, failure(e)).into_response()
        }
    }
}

/// POST /admin/marcar_contato — set the first matching lead's status.
///
/// Failure envelopes keep the 200 status this route has always answered.
pub async fn marcar_contato(State(state): State<Arc<AppState>>, body: String) -> Response {
    let dados: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let email = str_field(&dados, "email");
    let status = str_field(&dados, "status");

    match state.store.update_status_by_email(&email, &status) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => failure(e).into_response(),
    }
}

// ============== Ops ==============

/// GET /api/health — liveness plus a row count.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let total_registros = state.store.read_all().map(|l| l.len()).unwrap_or(0);
    Json(json!({ "status": "ok", "total_registros": total_registros })).into_response()
}
