use std::env;
use std::fs;
use std::path::Path;

use rolodex_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

struct ConfigField {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in effective_fields(&config) {
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

fn effective_fields(config: &AppConfig) -> Vec<ConfigField> {
    let database = &config.database;
    let server = &config.server;

    vec![
        field("database.url", &["ROLODEX_DATABASE_URL"], database.url.clone()),
        field(
            "database.max_connections",
            &["ROLODEX_DATABASE_MAX_CONNECTIONS"],
            database.max_connections.to_string(),
        ),
        field(
            "database.timeout_secs",
            &["ROLODEX_DATABASE_TIMEOUT_SECS"],
            database.timeout_secs.to_string(),
        ),
        field(
            "database.run_migrations",
            &["ROLODEX_DATABASE_RUN_MIGRATIONS"],
            database.run_migrations.to_string(),
        ),
        field("server.bind_address", &["ROLODEX_SERVER_BIND_ADDRESS"], server.bind_address.clone()),
        field("server.port", &["ROLODEX_SERVER_PORT"], server.port.to_string()),
        field(
            "server.health_check_port",
            &["ROLODEX_SERVER_HEALTH_CHECK_PORT"],
            server.health_check_port.to_string(),
        ),
        field(
            "server.graceful_shutdown_secs",
            &["ROLODEX_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            server.graceful_shutdown_secs.to_string(),
        ),
        field(
            "server.cors_allowed_origin",
            &["ROLODEX_SERVER_CORS_ALLOWED_ORIGIN"],
            server.cors_allowed_origin.clone(),
        ),
        field(
            "logging.level",
            &["ROLODEX_LOGGING_LEVEL", "ROLODEX_LOG_LEVEL"],
            config.logging.level.clone(),
        ),
        field(
            "logging.format",
            &["ROLODEX_LOGGING_FORMAT", "ROLODEX_LOG_FORMAT"],
            format!("{:?}", config.logging.format),
        ),
    ]
}

fn field(key_path: &'static str, env_keys: &'static [&'static str], value: String) -> ConfigField {
    ConfigField { key_path, env_keys, value }
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
