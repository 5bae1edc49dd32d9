//! Monthly income statement table.

use crate::state::AppState;
use dash_core::locale::format_amount_es;
use dioxus::prelude::*;

/// Income, expenses and profit per month, as reported with the last refresh.
#[component]
pub fn MonthlyResults() -> Element {
    let state = use_context::<AppState>();
    let rows: Vec<_> = state
        .data
        .read()
        .as_ref()
        .map(|d| {
            d.monthly_results
                .iter()
                .map(|r| {
                    (
                        r.mes.clone(),
                        format_amount_es(r.ingresos),
                        format_amount_es(r.gastos),
                        format_amount_es(r.utilidad),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        table {
            class: "table table-sm",
            style: "margin-top: 12px;",
            thead {
                tr {
                    th { "Mes" }
                    th { "Ingresos" }
                    th { "Gastos" }
                    th { "Utilidad" }
                }
            }
            tbody {
                for (mes, ingresos, gastos, utilidad) in rows {
                    tr {
                        key: "{mes}",
                        td { "{mes}" }
                        td { "{ingresos}" }
                        td { "{gastos}" }
                        td { "{utilidad}" }
                    }
                }
            }
        }
    }
}
