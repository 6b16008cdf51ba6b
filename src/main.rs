use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


const CATALOG_FILE_NAME: &str = "bikes_response.json";

fn main() {
    env_logger::init();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Bike Catalog"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "bikecat", "bike-catalog")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join(CATALOG_FILE_NAME))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

pub fn page_count(total_matches: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_matches.div_ceil(page_size)
}

pub fn page_range_label(page_index: usize, page_size: usize, total_matches: usize) -> String {
    if total_matches == 0 || page_size == 0 {
        return "0 of 0".to_string();
    }

    let start = page_index.saturating_mul(page_size);
    if start >= total_matches {
        return format!("0 of {total_matches}");
    }

    let end = (start + page_size).min(total_matches);
    format!("{}-{} of {}", start + 1, end, total_matches)
}

pub fn root_container_style() -> &'static str {
    "font-family: 'Roboto', sans-serif; padding: 16px; background: #f5f5f5; min-height: 100vh;"
}

pub fn table_container_style() -> &'static str {
    "overflow: auto; background: #fff; border: 1px solid #e0e0e0; border-radius: 4px;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "border-bottom: 1px solid rgba(224, 224, 224, 1); padding: 8px 12px; text-align: left; \
         color: #1976d2; cursor: {cursor}; position: sticky; top: 0; background: #fff; z-index: 1;"
    )
}

pub fn table_cell_style() -> &'static str {
    "border-bottom: 1px solid rgba(224, 224, 224, 1); padding: 8px 12px; text-align: left;"
}

pub fn error_banner_style() -> &'static str {
    "background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 4px; \
     padding: 10px 14px; margin-bottom: 12px;"
}
