mod app;
mod domain;
mod infra;
mod ui;
mod usecase;


#[cfg(feature = "desktop")]
fn main() {
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Customers"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(app::App);
}

#[cfg(feature = "desktop")]
fn ensure_webview_data_dir(base_data_dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg(feature = "desktop")]
fn default_webview_data_dir() -> anyhow::Result<std::path::PathBuf> {
    let project_dirs = infra::config::project_dirs()?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
