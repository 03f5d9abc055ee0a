// SPDX-License-Identifier: MIT

//! `hookchain log ...` command handlers.

use crate::exit_error::ExitError;
use crate::facade::AdminFacade;
use crate::output::{self, OutputFormat};
use hc_core::clock::SystemClock;
use hc_core::ids::{LogId, TaskId};
use hc_core::log_entry::LogStatus;

pub fn list(
    facade: &AdminFacade<SystemClock>,
    task_id: Option<TaskId>,
    status: Option<LogStatus>,
    page: usize,
    limit: usize,
    format: OutputFormat,
) -> Result<(), ExitError> {
    let entries = facade.list_logs(task_id, status, page.max(1), limit)?;
    output::print_logs(&entries, format);
    Ok(())
}

pub fn get(facade: &AdminFacade<SystemClock>, id: LogId, format: OutputFormat) -> Result<(), ExitError> {
    let entry = facade.get_log(id)?;
    output::print_log(&entry, format);
    Ok(())
}

pub fn clear(facade: &AdminFacade<SystemClock>) -> Result<(), ExitError> {
    facade.clear_logs()?;
    println!("cleared logs");
    Ok(())
}
