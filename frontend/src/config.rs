use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,
    #[serde(default, alias = "STRAVA_CLIENT_ID")]
    pub strava_client_id: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills every unset field of `self` from `other`.
    pub fn merge(mut self, other: RuntimeConfig) -> Self {
        self.api_base_url = self.api_base_url.or(other.api_base_url);
        self.google_client_id = self.google_client_id.or(other.google_client_id);
        self.strava_client_id = self.strava_client_id.or(other.strava_client_id);
        self.log_level = self.log_level.or(other.log_level);
        self
    }

    /// True once every field has a value and `config.json` has nothing to add.
    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some()
            && self.google_client_id.is_some()
            && self.strava_client_id.is_some()
            && self.log_level.is_some()
    }

    pub fn resolved_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn resolved_log_level(&self) -> log::Level {
        parse_log_level(self.log_level.as_deref().unwrap_or("info"))
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn parse_log_level(raw: &str) -> log::Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        _ => log::Level::Info,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_object(key: &str) -> Option<RuntimeConfig> {
    // Optional globals injected by env.js, e.g.
    // window.__VELOMART_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &key.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_object(_key: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let env = read_window_object("__VELOMART_ENV");
    let cfg = read_window_object("__VELOMART_CONFIG");
    match (env, cfg) {
        (Some(env), Some(cfg)) => Some(env.merge(cfg)),
        (Some(env), None) => Some(env),
        (None, cfg) => cfg,
    }
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> Option<String> {
    None
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    // reqwest needs an absolute URL, so config.json is resolved against the page origin.
    let url = config_json_url()?;
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Window globals win field by field; `config.json` fills whatever they leave unset.
fn resolve(globals: RuntimeConfig, file: Option<RuntimeConfig>) -> RuntimeConfig {
    match file {
        Some(file) => globals.merge(file),
        None => globals,
    }
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals().unwrap_or_default();
    let file = if globals.is_complete() {
        None
    } else {
        fetch_runtime_config().await
    };
    let resolved = resolve(globals, file);
    let _ = RUNTIME_CONFIG.set(resolved.clone());
    resolved
}

pub async fn await_api_base_url() -> String {
    await_runtime_config().await.resolved_base_url()
}

/// Returns the cached configuration without waiting on `config.json`.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG
        .get()
        .cloned()
        .or_else(snapshot_from_globals)
        .unwrap_or_default()
}

pub async fn init() -> RuntimeConfig {
    await_runtime_config().await
}
