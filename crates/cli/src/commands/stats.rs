// SPDX-License-Identifier: MIT

//! `hookchain stats` command handler.

use crate::exit_error::ExitError;
use crate::facade::AdminFacade;
use crate::output::{self, OutputFormat};
use hc_core::clock::SystemClock;

pub fn show(facade: &AdminFacade<SystemClock>, format: OutputFormat) -> Result<(), ExitError> {
    let stats = facade.stats()?;
    output::print_stats(&stats, format);
    Ok(())
}
