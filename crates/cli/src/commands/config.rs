use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use fragrance_core::config::{AppConfig, LoadOptions};
use secrecy::ExposeSecret;
use toml::Value;

struct Field {
    key_path: &'static str,
    value: String,
    env_keys: &'static [&'static str],
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields = [
        Field {
            key_path: "server.bind_address",
            value: config.server.bind_address.clone(),
            env_keys: &["FRAGRANCE_SERVER_BIND_ADDRESS"],
        },
        Field {
            key_path: "server.port",
            value: config.server.port.to_string(),
            env_keys: &["FRAGRANCE_SERVER_PORT"],
        },
        Field {
            key_path: "server.graceful_shutdown_secs",
            value: config.server.graceful_shutdown_secs.to_string(),
            env_keys: &["FRAGRANCE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        },
        Field {
            key_path: "session.signing_secret",
            value: redact_secret(config.session.signing_secret.expose_secret()),
            env_keys: &["FRAGRANCE_SESSION_SIGNING_SECRET", "FRAGRANCE_SESSION_SECRET"],
        },
        Field {
            key_path: "session.ttl_secs",
            value: config.session.ttl_secs.to_string(),
            env_keys: &["FRAGRANCE_SESSION_TTL_SECS"],
        },
        Field {
            key_path: "recommendations.default_limit",
            value: config.recommendations.default_limit.to_string(),
            env_keys: &["FRAGRANCE_RECOMMENDATIONS_DEFAULT_LIMIT"],
        },
        Field {
            key_path: "recommendations.max_limit",
            value: config.recommendations.max_limit.to_string(),
            env_keys: &["FRAGRANCE_RECOMMENDATIONS_MAX_LIMIT"],
        },
        Field {
            key_path: "logging.level",
            value: config.logging.level.clone(),
            env_keys: &["FRAGRANCE_LOGGING_LEVEL", "FRAGRANCE_LOG_LEVEL"],
        },
        Field {
            key_path: "logging.format",
            value: format!("{:?}", config.logging.format).to_ascii_lowercase(),
            env_keys: &["FRAGRANCE_LOGGING_FORMAT", "FRAGRANCE_LOG_FORMAT"],
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, &field.value, source));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("fragrance.toml"), PathBuf::from("config/fragrance.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

fn redact_secret(secret: &str) -> String {
    if secret.trim().is_empty() {
        return "<empty>".to_string();
    }
    format!("<redacted, {} bytes>", secret.len())
}

#[cfg(test)]
mod tests {
    use super::{contains_path, redact_secret};

    #[test]
    fn secrets_are_never_echoed() {
        let rendered = redact_secret("0123456789abcdef0123456789abcdef");
        assert_eq!(rendered, "<redacted, 32 bytes>");
        assert_eq!(redact_secret("  "), "<empty>");
    }

    #[test]
    fn nested_keys_are_detected_in_file_doc() {
        let doc: toml::Value = "[session]\nttl_secs = 60\n".parse().expect("toml");
        assert!(contains_path(&doc, "session.ttl_secs"));
        assert!(!contains_path(&doc, "session.signing_secret"));
        assert!(!contains_path(&doc, "server.port"));
    }
}
