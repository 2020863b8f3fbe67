//! Configuration resolution properties
//!
//! Fallback, omission, defaulting, expansion and ordering guarantees of `Configuration`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use taskforge_core::application::defaults;
use taskforge_core::{Configuration, ConfigurationLoader, ExecutionMode, SourceRequest};
use taskforge_infra_fs::FileSourceLoader;

/// No source and no default file: one worker on all queues plus one dispatcher
#[test]
fn test_fallback_default_configuration() {
    let loader = ConfigurationLoader::new(Arc::new(FileSourceLoader::new()))
        .with_default_path("non/existent/path");

    let config = loader
        .load(ExecutionMode::Fork, SourceRequest::Default)
        .unwrap();

    assert_eq!(config.processes().len(), 2);
    assert_eq!(config.workers().len(), 1);
    assert_eq!(config.dispatchers().len(), 1);

    assert_eq!(config.workers()[0].queues, vec!["*"]);
    assert_eq!(
        config.dispatchers()[0].batch_size,
        defaults::dispatcher::BATCH_SIZE
    );
}

/// A workers-only source never gets an implicit dispatcher
#[test]
fn test_omitted_dispatchers_mean_no_dispatchers() {
    let background_worker = json!({ "queues": "background", "polling_interval": 10 });
    let source = json!({ "workers": [background_worker.clone(), background_worker] });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();

    assert!(config.dispatchers().is_empty());
    assert_eq!(config.workers().len(), 2);
}

#[test]
fn test_hash_source_fills_defaults() {
    let background_worker = json!({ "queues": "background", "polling_interval": 10 });
    let source = json!({
        "workers": [background_worker.clone(), background_worker],
        "dispatchers": [{ "batch_size": 100 }]
    });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();

    assert_eq!(config.dispatchers().len(), 1);
    let dispatcher = &config.dispatchers()[0];
    assert_eq!(dispatcher.batch_size, 100);
    assert_eq!(
        dispatcher.polling_interval,
        defaults::dispatcher::POLLING_INTERVAL
    );
    assert_eq!(
        dispatcher.concurrency_maintenance.interval,
        defaults::dispatcher::concurrency_maintenance::INTERVAL
    );

    assert_eq!(config.workers().len(), 2);
    for worker in config.workers() {
        assert_eq!(worker.queues, vec!["background"]);
        assert_eq!(worker.polling_interval, Duration::from_secs(10));
        assert_eq!(worker.threads, defaults::worker::THREADS);
    }
}

#[test]
fn test_multiple_workers_with_the_same_configuration() {
    let source = json!({
        "workers": [{ "queues": "background", "polling_interval": 10, "processes": 3 }]
    });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();

    assert_eq!(config.workers().len(), 3);
    assert!(config.workers().iter().all(|w| w.queues == vec!["background"]));
    assert!(config
        .workers()
        .iter()
        .all(|w| w.polling_interval == Duration::from_secs(10)));
}

#[test]
fn test_processes_option_ignored_in_async_mode() {
    let source = json!({
        "workers": [{ "queues": "background", "polling_interval": 10, "processes": 3 }]
    });

    let config = Configuration::from_value(ExecutionMode::Async, &source).unwrap();

    assert_eq!(config.mode(), ExecutionMode::Async);
    assert_eq!(config.workers().len(), 1);
    assert_eq!(config.workers()[0].queues, vec!["background"]);
    assert_eq!(config.workers()[0].polling_interval, Duration::from_secs(10));
}

#[test]
fn test_expansion_preserves_entry_order() {
    let source = json!({
        "workers": [
            { "queues": "a", "processes": 2 },
            { "queues": "b", "processes": 2 }
        ]
    });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();

    let queues: Vec<&str> = config
        .workers()
        .iter()
        .map(|w| w.queues[0].as_str())
        .collect();
    assert_eq!(queues, vec!["a", "a", "b", "b"]);
}

#[test]
fn test_resolution_is_idempotent() {
    let source = json!({
        "workers": [
            { "queues": ["real_time", "background"], "threads": 3, "processes": 2 },
            { "queues": "*" }
        ],
        "dispatchers": [{ "batch_size": 250, "concurrency_maintenance": { "interval": 60 } }]
    });

    for mode in [ExecutionMode::Fork, ExecutionMode::Async] {
        let first = Configuration::from_value(mode, &source).unwrap();
        let second = Configuration::from_value(mode, &source).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_total_thread_capacity_sums_expanded_workers() {
    let source = json!({
        "workers": [
            { "queues": "background", "threads": 3, "processes": 2 },
            { "queues": "real_time" }
        ]
    });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();
    assert_eq!(
        config.total_thread_capacity(),
        3 * 2 + defaults::worker::THREADS
    );
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let source = json!({
        "workers": [{ "queues": "background", "priority": 10 }],
        "dispatchers": [{ "recurring_tasks": [] }],
        "supervisor": { "pidfile": "tmp/pids/taskforge.pid" }
    });

    let config = Configuration::from_value(ExecutionMode::Fork, &source).unwrap();
    assert_eq!(config.workers().len(), 1);
    assert_eq!(config.dispatchers().len(), 1);
}
