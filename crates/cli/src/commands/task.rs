// SPDX-License-Identifier: MIT

//! `hookchain task ...` command handlers.

use crate::exit_error::ExitError;
use crate::facade::AdminFacade;
use crate::output::{self, OutputFormat};
use hc_core::clock::SystemClock;
use hc_core::ids::TaskId;
use hc_core::task::{NewTask, TaskPatch};

pub fn list(facade: &AdminFacade<SystemClock>, format: OutputFormat) -> Result<(), ExitError> {
    let tasks = facade.list_tasks()?;
    output::print_tasks(&tasks, format);
    Ok(())
}

pub fn get(facade: &AdminFacade<SystemClock>, id: TaskId, format: OutputFormat) -> Result<(), ExitError> {
    let task = facade.get_task(id)?;
    output::print_task(&task, format);
    Ok(())
}

pub fn create(facade: &AdminFacade<SystemClock>, body: &str, format: OutputFormat) -> Result<(), ExitError> {
    let new_task: NewTask = serde_json::from_str(body)
        .map_err(|e| ExitError::new(400, format!("invalid task body: {e}")))?;
    let id = facade.create_task(new_task)?;
    let task = facade.get_task(id)?;
    output::print_task(&task, format);
    Ok(())
}

pub fn update(facade: &AdminFacade<SystemClock>, id: TaskId, body: &str, format: OutputFormat) -> Result<(), ExitError> {
    let patch: TaskPatch = serde_json::from_str(body)
        .map_err(|e| ExitError::new(400, format!("invalid task patch: {e}")))?;
    if !facade.update_task(id, patch)? {
        return Err(ExitError::new(404, format!("task {id} not found")));
    }
    let task = facade.get_task(id)?;
    output::print_task(&task, format);
    Ok(())
}

pub fn delete(facade: &AdminFacade<SystemClock>, id: TaskId) -> Result<(), ExitError> {
    if !facade.delete_task(id)? {
        return Err(ExitError::new(404, format!("task {id} not found")));
    }
    println!("deleted task {id}");
    Ok(())
}

pub fn pause(facade: &AdminFacade<SystemClock>, id: TaskId) -> Result<(), ExitError> {
    if !facade.pause_task(id)? {
        return Err(ExitError::new(404, format!("task {id} not found")));
    }
    println!("paused task {id}");
    Ok(())
}

pub fn resume(facade: &AdminFacade<SystemClock>, id: TaskId) -> Result<(), ExitError> {
    if !facade.resume_task(id)? {
        return Err(ExitError::new(404, format!("task {id} not found")));
    }
    println!("resumed task {id}");
    Ok(())
}

pub async fn run_now(facade: &AdminFacade<SystemClock>, id: TaskId) -> Result<(), ExitError> {
    if !facade.run_task_now(id).await? {
        return Err(ExitError::new(404, format!("task {id} not found")));
    }
    println!("fired task {id}");
    Ok(())
}
