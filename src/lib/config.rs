//! Build-time configuration for the auth provider with an optional runtime
//! override. In the browser the override is read from `window.REGISTRO_CONFIG`
//! (if present) so static deployments can point at another project without
//! rebuilding; native builds read the same keys from the process environment.
//! The anon key is public by design of the provider; never put a service key here.

use tracing::Level;

/// Key under `window` holding runtime overrides.
#[cfg(target_arch = "wasm32")]
const RUNTIME_CONFIG_KEY: &str = "REGISTRO_CONFIG";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth_url: String,
    pub anon_key: String,
    pub email_redirect_to: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let auth_url = option_env!("REGISTRO_AUTH_URL").unwrap_or("");
        let anon_key = option_env!("REGISTRO_AUTH_ANON_KEY").unwrap_or("");
        let email_redirect_to = option_env!("REGISTRO_EMAIL_REDIRECT_TO").unwrap_or("");
        let log_level = option_env!("REGISTRO_LOG_LEVEL").unwrap_or("info");

        let mut config = Self {
            auth_url: auth_url.to_string(),
            anon_key: anon_key.to_string(),
            email_redirect_to: email_redirect_to.to_string(),
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Resolves the configured log level, falling back to `INFO` on garbage.
    pub fn level(&self) -> Level {
        parse_log_level(&self.log_level).unwrap_or(Level::INFO)
    }

    /// Redirect target embedded in the confirmation email, if configured.
    pub fn redirect_to(&self) -> Option<&str> {
        let value = self.email_redirect_to.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// Accepts level names or their verbosity digits (`0` = error ... `4` = trace).
pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "0" | "error" => Some(Level::ERROR),
        "1" | "warn" => Some(Level::WARN),
        "2" | "info" => Some(Level::INFO),
        "3" | "debug" => Some(Level::DEBUG),
        "4" | "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[derive(Default)]
struct RuntimeConfig {
    auth_url: Option<String>,
    anon_key: Option<String>,
    email_redirect_to: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_url {
        config.auth_url = value;
    }
    if let Some(value) = runtime.anon_key {
        config.anon_key = value;
    }
    if let Some(value) = runtime.email_redirect_to {
        config.email_redirect_to = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        auth_url: read_runtime_value(&object, "auth_url"),
        anon_key: read_runtime_value(&object, "anon_key"),
        email_redirect_to: read_runtime_value(&object, "email_redirect_to"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    let read = |key: &str| {
        std::env::var(key)
            .ok()
            .and_then(|value| normalize_runtime_value(&value))
    };

    Some(RuntimeConfig {
        auth_url: read("REGISTRO_AUTH_URL"),
        anon_key: read("REGISTRO_AUTH_ANON_KEY"),
        email_redirect_to: read("REGISTRO_EMAIL_REDIRECT_TO"),
        log_level: read("REGISTRO_LOG_LEVEL"),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value,
        parse_log_level,
    };
    use tracing::Level;

    fn defaults() -> AppConfig {
        AppConfig {
            auth_url: "https://default.supabase.co".to_string(),
            anon_key: "default-anon".to_string(),
            email_redirect_to: String::new(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://project.supabase.co "),
            Some("https://project.supabase.co".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            auth_url: normalize_runtime_value(""),
            anon_key: normalize_runtime_value("  "),
            email_redirect_to: normalize_runtime_value(""),
            log_level: normalize_runtime_value(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.auth_url, "https://default.supabase.co");
        assert_eq!(config.anon_key, "default-anon");
        assert_eq!(config.redirect_to(), None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            auth_url: normalize_runtime_value("https://override.supabase.co"),
            anon_key: normalize_runtime_value("override-anon"),
            email_redirect_to: normalize_runtime_value("https://app.example/welcome"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.auth_url, "https://override.supabase.co");
        assert_eq!(config.anon_key, "override-anon");
        assert_eq!(config.redirect_to(), Some("https://app.example/welcome"));
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn load_reads_process_environment_on_native() {
        temp_env::with_vars(
            [
                ("REGISTRO_AUTH_URL", Some("https://env.supabase.co")),
                ("REGISTRO_AUTH_ANON_KEY", Some("env-anon")),
                ("REGISTRO_EMAIL_REDIRECT_TO", Some("   ")),
                ("REGISTRO_LOG_LEVEL", Some("3")),
            ],
            || {
                let config = AppConfig::load();
                assert_eq!(config.auth_url, "https://env.supabase.co");
                assert_eq!(config.anon_key, "env-anon");
                assert_eq!(config.redirect_to(), None);
                assert_eq!(config.level(), Level::DEBUG);
            },
        );
    }

    #[test]
    fn parse_log_level_accepts_names_and_digits() {
        assert_eq!(parse_log_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_log_level(" warn "), Some(Level::WARN));
        assert_eq!(parse_log_level("4"), Some(Level::TRACE));
        assert_eq!(parse_log_level("5"), None);
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let mut config = defaults();
        config.log_level = "verbose".to_string();
        assert_eq!(config.level(), Level::INFO);
    }
}
