//! Response model for the `/api/dashboard-data` endpoint.
//!
//! The endpoint answers with an ad-hoc JSON record. It is validated here,
//! once, into [`RefreshResponse`]; nothing past this boundary sees raw JSON.
//!
//! Only `success` is checked strictly. Summary and monthly rows are read
//! leniently: numbers may arrive as JSON numbers, numeric strings (SQL
//! `DECIMAL` columns) or `null`, and anything unreadable becomes zero or is
//! dropped rather than failing the refresh.

use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Message used when the server reports a failure without explaining it.
pub const GENERIC_FAILURE: &str = "Error al actualizar datos";

/// Raw body as sent by the server.
///
/// `success` defaults to `false` so that error bodies without the field
/// (e.g. `{"error": "No autorizado"}` on a 401) count as failures.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub estado_resultados: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

/// Executive summary KPIs shown in the summary cards.
///
/// All known fields default to zero. Any other keys the server adds are
/// kept in `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExecutiveSummary {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_ventas: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_gastos: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub saldo_bancos: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub clientes_activos: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub facturas_pendientes: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub conciliaciones_pendientes: u64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub utilidad_neta: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub margen_utilidad: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of the monthly income statement (last six months).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MonthlyResult {
    /// Month in `yyyy-MM` format.
    #[serde(default, deserialize_with = "lenient_text")]
    pub mes: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub ingresos: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub gastos: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub utilidad: f64,
}

/// Data carried by a successful refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub summary: Option<ExecutiveSummary>,
    pub monthly_results: Vec<MonthlyResult>,
    /// Server-side generation time (ISO-8601), if reported.
    pub server_timestamp: Option<String>,
}

/// Validated outcome of a refresh request.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshResponse {
    Success(DashboardData),
    Failure { message: String },
}

impl RefreshResponse {
    /// Decode a response body. Fails only if the body is not a JSON object;
    /// a server-reported failure is a valid `Failure`.
    pub fn decode(body: &str) -> Result<Self> {
        let payload: DashboardPayload = serde_json::from_str(body)?;
        Ok(payload.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RefreshResponse::Success(_))
    }
}

impl From<DashboardPayload> for RefreshResponse {
    fn from(payload: DashboardPayload) -> Self {
        if payload.success {
            RefreshResponse::Success(DashboardData {
                summary: payload.summary.and_then(summary_from_value),
                monthly_results: payload
                    .estado_resultados
                    .map(rows_from_value)
                    .unwrap_or_default(),
                server_timestamp: payload.timestamp.as_ref().and_then(text_from_value),
            })
        } else {
            let message = payload
                .error
                .as_ref()
                .and_then(text_from_value)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            RefreshResponse::Failure { message }
        }
    }
}

fn summary_from_value(value: Value) -> Option<ExecutiveSummary> {
    match value {
        Value::Object(_) => match serde_json::from_value(value) {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("Ignoring unreadable summary: {}", e);
                None
            }
        },
        Value::Null => None,
        other => {
            log::warn!("Ignoring summary that is not an object: {}", other);
            None
        }
    }
}

fn rows_from_value(value: Value) -> Vec<MonthlyResult> {
    match value {
        Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(row) => Some(row),
                Err(e) => {
                    log::warn!("Skipping unreadable monthly row: {}", e);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("Ignoring monthly results that are not a list: {}", other);
            Vec::new()
        }
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).unwrap_or(0.0))
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64)
        .unwrap_or(0))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_from_value).unwrap_or_default())
}
