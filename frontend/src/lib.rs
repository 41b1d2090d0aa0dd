pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: panic hook, console logging, runtime config, mount.
pub fn run() {
    console_error_panic_hook::set_once();
    let level = config::current().resolved_log_level();
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    log::info!("starting Velomart frontend");

    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::info!("runtime config loaded, api base {}", cfg.resolved_base_url());
    });

    router::mount_app();
}
