// SPDX-License-Identifier: MIT

//! Local CLI thin-client over the scheduler/store/logger core: the
//! sanctioned stand-in for the out-of-scope network admin API.

mod commands;
mod config;
mod exit_error;
mod facade;
mod output;

use clap::{Parser, Subcommand};
use config::RunnerConfig;
use exit_error::ExitError;
use facade::AdminFacade;
use hc_core::ids::{LogId, TaskId};
use hc_core::log_entry::LogStatus;
use hc_engine::{ChainRunner, Logger, TaskRunner};
use hc_executor::StepExecutor;
use hc_scheduler::Scheduler;
use hc_storage::Store;
use output::OutputFormat;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hookchain", about = "Local HTTP job-chain runner and scheduler")]
struct Cli {
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List, inspect, and manage scheduled tasks.
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Inspect and manage the execution log.
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },
    /// Print aggregate task/execution statistics.
    Stats,
}

#[derive(Subcommand)]
enum TaskCommand {
    List,
    Get { id: u64 },
    /// Create a task from a JSON body (see `hc_core::task::NewTask`).
    Create { body: String },
    /// Shallow-merge a JSON patch over an existing task.
    Update { id: u64, body: String },
    Delete { id: u64 },
    Pause { id: u64 },
    Resume { id: u64 },
    RunNow { id: u64 },
}

#[derive(Subcommand)]
enum LogCommand {
    List {
        #[arg(long)]
        task_id: Option<u64>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    Get { id: u64 },
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = RunnerConfig::from_env();
    config.init_tracing();

    let store = Arc::new(Store::new(&config.data_dir));
    let logger = Arc::new(Logger::new(store.clone()));
    let executor = StepExecutor::new(config.request_timeout);
    let task_runner = Arc::new(TaskRunner::new(ChainRunner::new(executor), logger.clone()));
    let scheduler = Arc::new(Scheduler::new(store.clone(), task_runner, logger, hc_core::SystemClock));

    if let Err(error) = scheduler.bootstrap() {
        eprintln!("failed to load tasks at startup: {error}");
        std::process::exit(1);
    }

    let facade = AdminFacade::new(scheduler.clone(), store, hc_core::SystemClock);

    let result = dispatch(&cli, &facade).await;
    scheduler.shutdown().await;

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(error.code);
    }
}

async fn dispatch(cli: &Cli, facade: &AdminFacade<hc_core::SystemClock>) -> Result<(), ExitError> {
    match &cli.command {
        Command::Task { command } => dispatch_task(command, facade, cli.format).await,
        Command::Log { command } => dispatch_log(command, facade, cli.format),
        Command::Stats => commands::stats::show(facade, cli.format),
    }
}

async fn dispatch_task(
    command: &TaskCommand,
    facade: &AdminFacade<hc_core::SystemClock>,
    format: OutputFormat,
) -> Result<(), ExitError> {
    match command {
        TaskCommand::List => commands::task::list(facade, format),
        TaskCommand::Get { id } => commands::task::get(facade, TaskId::new(*id), format),
        TaskCommand::Create { body } => commands::task::create(facade, body, format),
        TaskCommand::Update { id, body } => commands::task::update(facade, TaskId::new(*id), body, format),
        TaskCommand::Delete { id } => commands::task::delete(facade, TaskId::new(*id)),
        TaskCommand::Pause { id } => commands::task::pause(facade, TaskId::new(*id)),
        TaskCommand::Resume { id } => commands::task::resume(facade, TaskId::new(*id)),
        TaskCommand::RunNow { id } => commands::task::run_now(facade, TaskId::new(*id)).await,
    }
}

fn dispatch_log(
    command: &LogCommand,
    facade: &AdminFacade<hc_core::SystemClock>,
    format: OutputFormat,
) -> Result<(), ExitError> {
    match command {
        LogCommand::List { task_id, status, page, limit } => {
            let status = status
                .as_deref()
                .map(parse_log_status)
                .transpose()
                .map_err(|e| ExitError::new(400, e))?;
            commands::log::list(facade, (*task_id).map(TaskId::new), status, *page, *limit, format)
        }
        LogCommand::Get { id } => commands::log::get(facade, LogId::new(*id), format),
        LogCommand::Clear => commands::log::clear(facade),
    }
}

fn parse_log_status(raw: &str) -> Result<LogStatus, String> {
    match raw {
        "running" => Ok(LogStatus::Running),
        "success" => Ok(LogStatus::Success),
        "failure" => Ok(LogStatus::Failure),
        other => Err(format!("invalid log status \"{other}\" (expected running|success|failure)")),
    }
}
