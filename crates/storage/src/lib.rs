// SPDX-License-Identifier: MIT

//! Durable persistence for task definitions and execution logs.
//!
//! Two JSON arrays on disk (`tasks.json`, `logs.json`), each behind its own
//! mutex, written with a temp-file-then-rename so a reader never observes a
//! torn write.

mod atomic;
mod error;
mod store;

pub use error::StoreError;
pub use store::Store;
