// SPDX-License-Identifier: MIT

//! Text/JSON rendering shared by the command handlers.

use crate::facade::Stats;
use clap::ValueEnum;
use hc_core::log_entry::LogEntry;
use hc_core::task::Task;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_task(task: &Task, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(task).unwrap_or_default()),
        OutputFormat::Text => println!(
            "#{} {} [{}] {} ({} step(s))",
            task.id, task.name, task.task_type, task.status, task.steps.len()
        ),
    }
}

pub fn print_tasks(tasks: &[Task], format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tasks).unwrap_or_default()),
        OutputFormat::Text => {
            if tasks.is_empty() {
                println!("No tasks");
                return;
            }
            for task in tasks {
                print_task(task, OutputFormat::Text);
            }
        }
    }
}

pub fn print_log(entry: &LogEntry, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry).unwrap_or_default()),
        OutputFormat::Text => {
            println!("[{}] #{} task={} {} {} — {}", entry.timestamp, entry.id, entry.task_id, entry.event, entry.status, entry.message)
        }
    }
}

pub fn print_logs(entries: &[LogEntry], format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries).unwrap_or_default()),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No log entries");
                return;
            }
            for entry in entries {
                print_log(entry, OutputFormat::Text);
            }
        }
    }
}

pub fn print_stats(stats: &Stats, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats).unwrap_or_default()),
        OutputFormat::Text => {
            println!("total tasks:     {}", stats.total_tasks);
            println!("active tasks:    {}", stats.active_tasks);
            println!("today's runs:    {}", stats.today_executions);
            println!("success rate:    {}", stats.success_rate);
        }
    }
}
