use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use grocer_cli::commands::{config, list, search, stores, GlobalOptions};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn search_reports_every_store_for_product_seven() {
    with_env(&[], || {
        let result = search::run(&GlobalOptions::default(), "7");
        assert_eq!(result.exit_code, 0, "expected successful search");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "search");
        assert_eq!(payload["status"], "ok");
        assert_eq!(
            payload["message"],
            "product 7 is stocked at: Nueces St, Rio Grande, Dean Keaton"
        );
    });
}

#[test]
fn search_reports_single_store_for_product_two() {
    with_env(&[], || {
        let result = search::run(&GlobalOptions::default(), "2");
        assert_eq!(result.exit_code, 0, "expected successful search");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["message"], "product 2 is stocked at: Nueces St");
    });
}

#[test]
fn search_rejects_out_of_range_product_before_dispatch() {
    with_env(&[], || {
        let result = search::run(&GlobalOptions::default(), "11");
        assert_eq!(result.exit_code, 4, "expected invalid input code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "invalid_input");
    });
}

#[test]
fn search_rejects_malformed_product_number() {
    with_env(&[], || {
        let result = search::run(&GlobalOptions::default(), "mango");
        assert_eq!(result.exit_code, 4, "expected invalid input code");
        assert_eq!(parse_payload(&result.output)["error_class"], "invalid_input");
    });
}

#[test]
fn search_range_follows_environment() {
    with_env(&[("GROCER_SEARCH_MAX_PRODUCT_ID", "20")], || {
        let result = search::run(&GlobalOptions::default(), "11");
        assert_eq!(result.exit_code, 0, "11 should be searchable with a wider range");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["message"], "no stores stock product 11");
    });
}

#[test]
fn invalid_environment_is_a_config_failure() {
    with_env(&[("GROCER_LOG_LEVEL", "loud")], || {
        let result = search::run(&GlobalOptions::default(), "7");
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn missing_explicit_config_file_is_a_config_failure() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir");
        let global = GlobalOptions {
            config_path: Some(dir.path().join("absent.toml")),
            ..GlobalOptions::default()
        };

        let result = search::run(&global, "7");
        assert_eq!(result.exit_code, 2, "expected config failure for missing file");
    });
}

#[test]
fn list_prints_the_static_catalog() {
    let result = list::run();
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let message = payload["message"].as_str().unwrap_or_default();
    assert!(message.contains("Apple: 1"));
    assert!(message.contains("Mango: 10"));
}

#[test]
fn stores_output_is_identical_across_runs() {
    let first = stores::run();
    let second = stores::run();
    assert_eq!(first.exit_code, 0);

    let first_payload = parse_payload(&first.output);
    let second_payload = parse_payload(&second.output);
    assert_eq!(first_payload["message"], second_payload["message"]);

    let message = first_payload["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("Nueces St store contains the following products:\n1: Apple"));
    assert!(message.contains("Dean Keaton store contains the following products:\n5: Canteloupe"));
}

#[test]
fn config_attributes_sources() {
    with_env(&[("GROCER_SEARCH_TIMEOUT_MS", "250")], || {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("grocer.toml");
        fs::write(&path, "[search]\nmax_product_id = 12\n").expect("write config");

        let global = GlobalOptions {
            config_path: Some(path.clone()),
            log_level: Some("debug".to_string()),
        };
        let result = config::run(&global);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let message = payload["message"].as_str().unwrap_or_default();
        assert!(message.contains(&format!(
            "- search.max_product_id = 12 (source: file ({}))",
            path.display()
        )));
        assert!(
            message.contains("- search.timeout_ms = 250 (source: env (GROCER_SEARCH_TIMEOUT_MS))")
        );
        assert!(message.contains("- logging.level = debug (source: flag)"));
        assert!(message.contains("- search.min_product_id = 1 (source: default)"));
        assert!(message.contains("- logging.format = compact (source: default)"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "GROCER_SEARCH_MIN_PRODUCT_ID",
        "GROCER_SEARCH_MAX_PRODUCT_ID",
        "GROCER_SEARCH_TIMEOUT_MS",
        "GROCER_LOGGING_LEVEL",
        "GROCER_LOGGING_FORMAT",
        "GROCER_LOG_LEVEL",
        "GROCER_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
