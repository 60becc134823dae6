use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::pagination::{PageControl, StepDirection};
use crate::infra::config::AppConfig;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::dataset_service::DatasetService;
use crate::usecase::services::pager_service::PagerService;

pub const COLUMN_HEADERS: [&str; 6] = ["Name", "Company", "Phone", "Email", "Country", "Status"];

const CELL_STYLE: &str = "border-bottom: 1px solid #eee; padding: 10px 8px; text-align: left;";
const HEADER_CELL_STYLE: &str =
    "border-bottom: 1px solid #ddd; padding: 10px 8px; text-align: left; color: #8a8a8a;";

pub fn build_pager(config: &AppConfig) -> Result<PagerService> {
    let dataset_service = DatasetService::new(config.lookup_source());
    let customers = dataset_service
        .generate(config.pager.total_entries)
        .context("failed to generate customers")?;
    let pager = PagerService::new(config.pager, customers).context("failed to build pager")?;
    info!(
        total_entries = config.pager.total_entries,
        entries_per_page = config.pager.entries_per_page,
        total_pages = pager.state().total_pages(),
        "customer table ready"
    );
    Ok(pager)
}

fn load_pager() -> Result<PagerService> {
    let config = AppConfig::load().context("failed to load configuration")?;
    info!(lookups_csv = ?config.lookups_csv, "configuration loaded");
    build_pager(&config)
}

/// Arrow keys step like the `<` and `>` buttons.
pub fn key_direction(key: &Key) -> Option<StepDirection> {
    match key {
        Key::ArrowLeft => Some(StepDirection::Previous),
        Key::ArrowRight => Some(StepDirection::Next),
        _ => None,
    }
}

#[component]
fn CustomerRow(customer: CustomerRecord) -> Element {
    let status_class = format!("customer__status {}", customer.status.css_class());
    let status_label = customer.status.label();

    rsx! {
        tr {
            td { style: CELL_STYLE, "{customer.name}" }
            td { style: CELL_STYLE, "{customer.company}" }
            td { style: CELL_STYLE, "{customer.phone}" }
            td { style: CELL_STYLE, "{customer.email}" }
            td { style: CELL_STYLE, "{customer.country}" }
            td { style: CELL_STYLE,
                button { class: "{status_class}", "{status_label}" }
            }
        }
    }
}

#[component]
fn PaginationControl(
    control: PageControl,
    current_page: i64,
    on_navigate: EventHandler<i64>,
) -> Element {
    let label = control.label();
    let class = control.css_class();

    if control == PageControl::Ellipsis {
        return rsx! {
            span { class: "{class}", "{label}" }
        };
    }

    let target = control.target_page(current_page);
    rsx! {
        button {
            class: "{class}",
            disabled: !control.is_enabled(),
            onclick: move |_| {
                if let Some(page) = target {
                    on_navigate.call(page);
                }
            },
            "{label}"
        }
    }
}

#[component]
pub fn App() -> Element {
    let pager = use_hook(|| {
        load_pager()
            .map(|pager| Rc::new(RefCell::new(pager)))
            .map_err(|err| format!("{err:#}"))
    });
    let pager = match pager {
        Ok(pager) => pager,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to load customers: {err}" }
                }
            };
        }
    };

    let mut state = AppState::new(&pager.borrow());

    let pager_for_navigate = pager.clone();
    let on_navigate = use_callback(move |page: i64| {
        let result = pager_for_navigate
            .borrow_mut()
            .navigate_and_render(page, &mut state);
        match result {
            Ok(()) => state.status.set(None),
            Err(err) => state.status.set(Some(err.to_string())),
        }
    });

    let pager_for_keys = pager.clone();
    let on_key = move |event: KeyboardEvent| {
        let Some(direction) = key_direction(&event.key()) else {
            return;
        };
        let target = pager_for_keys.borrow().step_target(direction);
        if let Some(page) = target {
            on_navigate.call(page);
        }
    };

    let current_page = pager.borrow().state().current_page();
    let rows = (state.rows)();
    let controls = (state.controls)();
    let data_info = (state.data_info)();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 24px; outline: none;",
            tabindex: 0,
            onkeydown: on_key,
            table {
                id: "customer-table",
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for header in COLUMN_HEADERS {
                            th { style: HEADER_CELL_STYLE, "{header}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: CELL_STYLE, colspan: COLUMN_HEADERS.len(), "No customers" }
                        }
                    } else {
                        for (idx, customer) in rows.into_iter().enumerate() {
                            CustomerRow { key: "{idx}", customer }
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-top: 16px;",
                p { id: "data-info", "{data_info}" }
                div {
                    id: "pagination",
                    style: "display: inline-flex; gap: 6px; align-items: center;",
                    for (idx, control) in controls.into_iter().enumerate() {
                        PaginationControl {
                            key: "{idx}",
                            control,
                            current_page,
                            on_navigate,
                        }
                    }
                }
            }

            if let Some(message) = (state.status)() {
                p { style: "color: #b00020;", "{message}" }
            }
        }
    }
}
