// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn task_id_displays_as_bare_integer() {
    assert_eq!(TaskId::new(7).to_string(), "7");
}

#[test]
fn task_id_round_trips_through_json() {
    let id = TaskId::new(42);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "42");
    let back: TaskId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn ids_order_by_value() {
    assert!(TaskId::new(1) < TaskId::new(2));
    assert!(LogId::new(10) > LogId::new(9));
}
