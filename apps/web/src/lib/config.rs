//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.STOREFRONT_CONFIG` (if present) so static
//! deployments can change endpoints without rebuilding. Configuration values
//! are public; do not store secrets here.

use leptos::prelude::use_context;
use storefront_auth::auth::DisplayPolicy;
use storefront_auth::config::{AppConfig, ConfigOverrides, normalize_value};

/// Loads config from build-time environment variables and applies runtime overrides.
pub fn load() -> AppConfig {
    let build_time = ConfigOverrides {
        base_url: option_env!("STOREFRONT_BASE_URL").map(str::to_string),
        sign_in_method: option_env!("STOREFRONT_SIGN_IN_METHOD").map(str::to_string),
        request_timeout_ms: option_env!("STOREFRONT_TIMEOUT_MS").and_then(parse_millis),
        toast_timeout_ms: option_env!("STOREFRONT_TOAST_TIMEOUT_MS").and_then(parse_millis),
        display_policy: option_env!("STOREFRONT_TOAST_POLICY").and_then(DisplayPolicy::parse),
    };

    let mut config = AppConfig::default().with_overrides(build_time);
    if let Some(runtime) = runtime_config() {
        config.apply_overrides(runtime);
    }
    config
}

/// The config provided by the app root, or a fresh load outside of it.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(load)
}

fn parse_millis(value: &str) -> Option<u64> {
    normalize_value(value)?.parse().ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<ConfigOverrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("STOREFRONT_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(ConfigOverrides {
        base_url: read_runtime_value(&object, "base_url"),
        sign_in_method: read_runtime_value(&object, "sign_in_method"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_millis),
        toast_timeout_ms: read_runtime_value(&object, "toast_timeout_ms")
            .as_deref()
            .and_then(parse_millis),
        display_policy: read_runtime_value(&object, "toast_policy")
            .as_deref()
            .and_then(DisplayPolicy::parse),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<ConfigOverrides> {
    None
}

/// Reads a string or number property as text.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_value(&text)
}
