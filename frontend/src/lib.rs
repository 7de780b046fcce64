pub mod components;
pub mod config;
pub mod pages;
mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting SoftSell frontend (wasm)");

    router::mount_app();

    // Warm the runtime config; the lead sink waits on it only if a submit comes first.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });
}
