//! Executive summary cards.

use crate::components::MiniChart;
use crate::state::AppState;
use dash_core::locale::{format_amount_es, format_percent_es};
use dash_core::response::ExecutiveSummary;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    /// Mini chart container ids, assigned to the cards in order
    #[props(default = Vec::new())]
    pub mini_charts: Vec<String>,
}

/// (title, formatted value) for every KPI card, in display order.
fn card_values(summary: &ExecutiveSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Ventas del mes", format_amount_es(summary.total_ventas)),
        ("Gastos del mes", format_amount_es(summary.total_gastos)),
        ("Utilidad neta", format_amount_es(summary.utilidad_neta)),
        ("Margen de utilidad", format_percent_es(summary.margen_utilidad)),
        ("Saldo en bancos", format_amount_es(summary.saldo_bancos)),
        ("Clientes activos", summary.clientes_activos.to_string()),
        ("Facturas vencidas", summary.facturas_pendientes.to_string()),
        (
            "Conciliaciones pendientes",
            summary.conciliaciones_pendientes.to_string(),
        ),
    ]
}

/// Grid of KPI cards. Shows zeros until the first successful refresh.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let state = use_context::<AppState>();
    let summary = state
        .data
        .read()
        .as_ref()
        .and_then(|d| d.summary.clone())
        .unwrap_or_default();

    let cards: Vec<_> = card_values(&summary)
        .into_iter()
        .enumerate()
        .map(|(i, (title, value))| (title, value, props.mini_charts.get(i).cloned()))
        .collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; margin: 12px 0;",
            for (title, value, chart_id) in cards {
                div {
                    key: "{title}",
                    class: "card",
                    style: "padding: 12px; border: 1px solid #E0E0E0; border-radius: 4px;",
                    div { style: "font-size: 12px; color: #616161;", "{title}" }
                    div { style: "font-size: 20px; font-weight: bold;", "{value}" }
                    if let Some(id) = chart_id {
                        MiniChart { id: id }
                    }
                }
            }
        }
    }
}
