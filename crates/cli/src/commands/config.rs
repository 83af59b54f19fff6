use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use toml::Value;

use crate::commands::{CommandResult, GlobalOptions};

struct Field<'a> {
    key_path: &'static str,
    value: String,
    env_keys: &'a [&'static str],
    from_flag: bool,
}

pub fn run(global: &GlobalOptions) -> CommandResult {
    let config = match global.load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure("config", error),
    };

    let config_file_path = detect_config_path(global.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields = [
        Field {
            key_path: "search.min_product_id",
            value: config.search.min_product_id.to_string(),
            env_keys: &["GROCER_SEARCH_MIN_PRODUCT_ID"],
            from_flag: false,
        },
        Field {
            key_path: "search.max_product_id",
            value: config.search.max_product_id.to_string(),
            env_keys: &["GROCER_SEARCH_MAX_PRODUCT_ID"],
            from_flag: false,
        },
        Field {
            key_path: "search.timeout_ms",
            value: config
                .search
                .timeout_ms
                .map(|timeout_ms| timeout_ms.to_string())
                .unwrap_or_else(|| "<unset>".to_string()),
            env_keys: &["GROCER_SEARCH_TIMEOUT_MS"],
            from_flag: false,
        },
        Field {
            key_path: "logging.level",
            value: config.logging.level.clone(),
            env_keys: &["GROCER_LOGGING_LEVEL", "GROCER_LOG_LEVEL"],
            from_flag: global.log_level.is_some(),
        },
        Field {
            key_path: "logging.format",
            value: config.logging.format.as_str().to_string(),
            env_keys: &["GROCER_LOGGING_FORMAT", "GROCER_LOG_FORMAT"],
            from_flag: false,
        },
    ];

    let mut lines = vec!["effective config (source precedence: flag > env > file > default):"
        .to_string()];
    for field in &fields {
        let source = field_source(field, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(format!("- {} = {} (source: {source})", field.key_path, field.value));
    }

    CommandResult::success("config", lines.join("\n"))
}

fn detect_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    [PathBuf::from("grocer.toml"), PathBuf::from("config/grocer.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    field: &Field<'_>,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if field.from_flag {
        return "flag".to_string();
    }

    let env_hit = field
        .env_keys
        .iter()
        .find(|env_key| env::var(env_key).map(|value| !value.trim().is_empty()).unwrap_or(false));
    if let Some(env_key) = env_hit {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, field.key_path) {
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
