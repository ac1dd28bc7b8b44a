//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `demandex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use demandex_core::{AppStore, GoalService, MemorySlot, NewGoal};

fn main() {
    println!("demandex_core version={}", demandex_core::core_version());

    // In-memory store probe: one full create/list roundtrip without
    // touching the filesystem.
    let mut store = AppStore::open(MemorySlot::new());
    let mut goals = GoalService::new(&mut store);
    match goals.create(NewGoal {
        title: "probe".to_string(),
        ..NewGoal::default()
    }) {
        Ok(goal) => println!("demandex_core store probe goal_id={} goals={}", goal.id, goals.list().len()),
        Err(err) => eprintln!("demandex_core store probe failed: {err}"),
    }
}
