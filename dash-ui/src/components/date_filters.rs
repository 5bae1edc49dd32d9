//! Date filter inputs.

use crate::state::AppState;
use dash_core::config::DateFilter;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateFiltersProps {
    pub filters: Vec<DateFilter>,
    /// Called with the id of the filter that changed
    pub onchange: EventHandler<String>,
}

/// One date input per configured filter. Renders nothing for an empty list.
#[component]
pub fn DateFilters(props: DateFiltersProps) -> Element {
    let state = use_context::<AppState>();
    let values = state.filter_values.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for filter in props.filters.iter().cloned() {
                label {
                    key: "{filter.id}",
                    style: "font-weight: bold;",
                    "{filter.label} "
                    input {
                        id: "{filter.id}",
                        class: "date-filter",
                        r#type: "date",
                        value: values.get(&filter.id).cloned().unwrap_or_default(),
                        onchange: {
                            let id = filter.id.clone();
                            let onchange = props.onchange;
                            let mut filter_values = state.filter_values;
                            move |evt: Event<FormData>| {
                                filter_values.write().insert(id.clone(), evt.value());
                                onchange.call(id.clone());
                            }
                        },
                    }
                }
            }
        }
    }
}
