use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ENV_GLOBAL: &str = "__SOFTSELL_ENV";
const CONFIG_GLOBAL: &str = "__SOFTSELL_CONFIG";
const CONFIG_URL: &str = "./config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "LEAD_ENDPOINT")]
    pub lead_endpoint: Option<String>,
}

impl RuntimeConfig {
    /// The configured endpoint, ignoring blank values.
    pub fn lead_endpoint(&self) -> Option<String> {
        normalize_endpoint(self.lead_endpoint.as_deref())
    }
}

static LEAD_ENDPOINT: OnceLock<Option<String>> = OnceLock::new();

fn normalize_endpoint(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__SOFTSELL_ENV (env.js) takes precedence over window.__SOFTSELL_CONFIG.
    read_global(ENV_GLOBAL, ["LEAD_ENDPOINT", "lead_endpoint"])
        .or_else(|| read_global(CONFIG_GLOBAL, ["lead_endpoint", "LEAD_ENDPOINT"]))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = web_sys::window()?.location().href().ok()?;
    let url = reqwest::Url::parse(&url).ok()?.join(CONFIG_URL).ok()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("no runtime config at {CONFIG_URL} ({})", resp.status());
        return None;
    }
    match resp.json::<RuntimeConfig>().await {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed {CONFIG_URL}: {err}");
            None
        }
    }
}

/// Resolves the lead endpoint once; later calls return the cached answer.
pub async fn init() {
    if LEAD_ENDPOINT.get().is_some() {
        return;
    }
    let endpoint = match normalize_endpoint(snapshot_from_globals().as_deref()) {
        Some(found) => Some(found),
        None => fetch_runtime_config()
            .await
            .and_then(|cfg| cfg.lead_endpoint()),
    };
    let _ = LEAD_ENDPOINT.set(endpoint);
}

/// `None` until [`init`] has run or when nothing is configured.
pub fn lead_endpoint() -> Option<String> {
    LEAD_ENDPOINT.get().cloned().flatten()
}

/// Where the lead endpoint comes from. Awaited on first use so the page can
/// mount before the runtime config has loaded.
#[async_trait(?Send)]
pub trait EndpointSource {
    async fn lead_endpoint(&self) -> Option<String>;
}

/// Reads the browser runtime config, loading it on first call.
pub struct RuntimeConfigSource;

#[async_trait(?Send)]
impl EndpointSource for RuntimeConfigSource {
    async fn lead_endpoint(&self) -> Option<String> {
        init().await;
        lead_endpoint()
    }
}
