use demandex_core::{
    AppStore, HabitService, MemorySlot, NewHabit, NewTask, StoreError, TaskService, TaskStatus,
    ValidationError,
};

fn store() -> AppStore<MemorySlot> {
    AppStore::open(MemorySlot::new())
}

#[test]
fn new_task_starts_todo_and_counts_as_open() {
    let mut store = store();
    let mut tasks = TaskService::new(&mut store);

    let created = tasks
        .create(NewTask {
            title: "File taxes".to_string(),
            ..NewTask::default()
        })
        .unwrap();

    assert_eq!(created.status, TaskStatus::Todo);
    assert_eq!(tasks.open_tasks().len(), 1);
}

#[test]
fn status_transitions_update_the_open_filter() {
    let mut store = store();
    let mut tasks = TaskService::new(&mut store);

    let a = tasks
        .create(NewTask {
            title: "write report".to_string(),
            ..NewTask::default()
        })
        .unwrap();
    let b = tasks
        .create(NewTask {
            title: "review report".to_string(),
            ..NewTask::default()
        })
        .unwrap();

    tasks.set_status(a.id, TaskStatus::InProgress).unwrap();
    tasks.set_status(b.id, TaskStatus::Cancelled).unwrap();

    let open: Vec<_> = tasks.open_tasks().into_iter().map(|t| t.id).collect();
    assert_eq!(open, [a.id]);

    tasks.set_status(a.id, TaskStatus::Done).unwrap();
    assert!(tasks.open_tasks().is_empty());
}

#[test]
fn due_date_before_creation_is_rejected() {
    let mut store = store();
    let mut tasks = TaskService::new(&mut store);

    let err = tasks
        .create(NewTask {
            title: "time travel".to_string(),
            notes: None,
            due_at: Some(1),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::DueBeforeCreation { .. })
    ));
    assert!(tasks.list().is_empty());
}

#[test]
fn habit_check_ins_accumulate_in_order() {
    let mut store = store();
    let mut habits = HabitService::new(&mut store);

    let habit = habits
        .create(NewHabit {
            name: "morning walk".to_string(),
            target_per_week: 5,
        })
        .unwrap();
    assert!(habit.checkins.is_empty());

    habits.check_in(habit.id, 1_000).unwrap();
    habits.check_in(habit.id, 2_000).unwrap();
    habits.check_in(habit.id, 2_000).unwrap();

    let stored = &habits.list()[0];
    assert_eq!(stored.checkins, [1_000, 2_000, 2_000]);
    assert_eq!(stored.last_checkin(), Some(2_000));
}

#[test]
fn out_of_order_check_in_is_rejected_and_history_kept() {
    let mut store = store();
    let mut habits = HabitService::new(&mut store);

    let habit = habits
        .create(NewHabit {
            name: "meditation".to_string(),
            target_per_week: 7,
        })
        .unwrap();

    habits.check_in(habit.id, 5_000).unwrap();
    let err = habits.check_in(habit.id, 4_000).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::CheckinsOutOfOrder {
            previous: 5_000,
            next: 4_000
        })
    ));
    assert_eq!(habits.list()[0].checkins, [5_000]);
}

#[test]
fn weekly_target_outside_range_is_rejected() {
    let mut store = store();
    let mut habits = HabitService::new(&mut store);

    let err = habits
        .create(NewHabit {
            name: "sleep early".to_string(),
            target_per_week: 0,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::TargetPerWeekOutOfRange(0))
    ));
}
