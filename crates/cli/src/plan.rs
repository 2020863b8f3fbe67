//! Launch plan rendering

use std::time::Duration;
use tabled::{Table, Tabled};
use taskforge_core::domain::ProcessSpec;
use taskforge_core::Configuration;

/// One row per unit the supervisor would launch
#[derive(Debug, Tabled)]
pub struct PlanRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub kind: String,
    pub queues: String,
    pub threads: String,
    pub polling: String,
    pub batch_size: String,
    pub maintenance: String,
}

impl PlanRow {
    fn from_process(index: usize, process: ProcessSpec<'_>) -> Self {
        let none = || "-".to_string();
        match process {
            ProcessSpec::Worker(worker) => Self {
                index,
                kind: process.kind().to_string(),
                queues: worker.queues.join(","),
                threads: worker.threads.to_string(),
                polling: seconds(worker.polling_interval),
                batch_size: none(),
                maintenance: none(),
            },
            ProcessSpec::Dispatcher(dispatcher) => Self {
                index,
                kind: process.kind().to_string(),
                queues: none(),
                threads: none(),
                polling: seconds(dispatcher.polling_interval),
                batch_size: dispatcher.batch_size.to_string(),
                maintenance: if dispatcher.concurrency_maintenance.enabled {
                    format!("every {}", seconds(dispatcher.concurrency_maintenance.interval))
                } else {
                    "off".to_string()
                },
            },
        }
    }
}

pub fn rows(config: &Configuration) -> Vec<PlanRow> {
    config
        .processes()
        .into_iter()
        .enumerate()
        .map(|(index, process)| PlanRow::from_process(index + 1, process))
        .collect()
}

pub fn table(config: &Configuration) -> String {
    Table::new(rows(config)).to_string()
}

fn seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}
