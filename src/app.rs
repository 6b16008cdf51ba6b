use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::bike::{Bike, COLUMNS, SORTABLE_COLUMNS};
use crate::domain::entities::query::{SortDirection, PAGE_SIZES};
use crate::infra::fetch::catalog_source_for;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::source::CatalogSource;
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::query_service::QueryService;
use crate::{
    default_catalog_path, error_banner_style, page_count, page_range_label, root_container_style,
    table_cell_style, table_container_style, table_header_cell_style,
};

#[component]
pub fn App() -> Element {
    let AppState {
        mut records,
        mut load_failed,
        mut query,
        mut busy,
        mut status,
    } = AppState::new();

    use_effect(move || {
        *busy.write() = true;

        let load_result = run_blocking(|| -> anyhow::Result<Vec<Bike>> {
            let catalog_path = default_catalog_path()?;
            let source = catalog_source_for(&catalog_path.to_string_lossy())?;
            log::info!("loading catalog from {}", source.location());
            Ok(LoadService::new(source).load()?)
        });

        match load_result {
            Ok(loaded) => {
                *records.write() = Arc::new(loaded);
                *status.write() = "Catalog loaded".to_string();
            }
            Err(err) => {
                log::error!("catalog load failed: {err:#}");
                *load_failed.write() = true;
                *status.write() = "Catalog unavailable".to_string();
            }
        }

        *busy.write() = false;
    });

    let current_query = query();
    let page = QueryService::new(records()).query_page(&current_query);
    let total_matches = page.total_matches;
    let visible_rows = page.visible_rows;
    let range_label = page_range_label(
        current_query.page_index,
        current_query.page_size,
        total_matches,
    );
    let total_pages = page_count(total_matches, current_query.page_size);
    let has_previous = current_query.page_index > 0;
    let has_next = current_query.page_index + 1 < total_pages;
    let sort_key = current_query.sort_key.clone();
    let sort_direction = current_query.direction;
    let search_text = current_query.search.clone();
    let page_size = current_query.page_size;

    rsx! {
        div {
            style: "{root_container_style()}",

            h1 { style: "color: #1976d2; font-weight: bold;", "Bike Catalog" }

            if load_failed() {
                div {
                    style: "{error_banner_style()}",
                    "Unable to load the bike catalog. Please try again later."
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{search_text}",
                    disabled: busy(),
                    oninput: move |event| {
                        query.set(query().with_search(event.value()));
                    },
                }
                span { " {status}" }
            }

            div {
                style: "{table_container_style()}",
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            {COLUMNS.iter().map(|column| {
                                let column = *column;
                                let sortable = SORTABLE_COLUMNS.contains(&column);
                                let indicator = if sort_key == column {
                                    match sort_direction {
                                        SortDirection::Asc => " \u{25b2}",
                                        SortDirection::Desc => " \u{25bc}",
                                    }
                                } else {
                                    ""
                                };
                                rsx!(
                                    th {
                                        style: "{table_header_cell_style(sortable)}",
                                        onclick: move |_| {
                                            if sortable {
                                                query.set(query().with_sort_key(column));
                                            }
                                        },
                                        "{column}{indicator}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if visible_rows.is_empty() {
                            tr {
                                td {
                                    style: "{table_cell_style()}",
                                    colspan: COLUMNS.len(),
                                    "No matching bikes"
                                }
                            }
                        } else {
                            {visible_rows.iter().map(|bike| {
                                let row_key = bike.id();
                                let cells: Vec<String> = COLUMNS
                                    .iter()
                                    .map(|column| bike.text_or_default(column))
                                    .collect();
                                rsx!(
                                    tr {
                                        key: "{row_key}",
                                        {cells.into_iter().map(|cell| rsx!(
                                            td { style: "{table_cell_style()}", "{cell}" }
                                        ))}
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; justify-content: flex-end; \
                        margin-top: 12px; color: #1976d2;",
                label { "Rows per page " }
                select {
                    value: "{page_size}",
                    onchange: move |event| {
                        let Ok(next_size) = event.value().parse::<usize>() else {
                            return;
                        };
                        query.set(query().with_page_size(next_size));
                    },
                    {PAGE_SIZES.iter().map(|size| rsx!(
                        option { value: "{size}", "{size}" }
                    ))}
                }
                span { "{range_label}" }
                button {
                    disabled: !has_previous,
                    onclick: move |_| {
                        let current = query();
                        let previous = current.page_index.saturating_sub(1);
                        query.set(current.with_page_index(previous));
                    },
                    "Previous"
                }
                button {
                    disabled: !has_next,
                    onclick: move |_| {
                        let current = query();
                        let next = current.page_index + 1;
                        query.set(current.with_page_index(next));
                    },
                    "Next"
                }
            }
        }
    }
}
