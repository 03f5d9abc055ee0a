// SPDX-License-Identifier: MIT

//! Task and log identifiers.

crate::define_id! {
    /// Unique identifier for a task definition.
    ///
    /// Assigned once by the store at creation time (`max(existing_ids) + 1`)
    /// and never reused, even for tombstoned tasks.
    pub struct TaskId;
}

crate::define_id! {
    /// Unique identifier for a log entry.
    ///
    /// Assigned once by the store at append time.
    pub struct LogId;
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
