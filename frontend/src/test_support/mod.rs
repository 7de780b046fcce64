#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod fakes;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;
