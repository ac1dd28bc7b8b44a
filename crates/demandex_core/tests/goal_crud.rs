use demandex_core::{
    AppStore, Goal, GoalPatch, GoalService, GoalServiceError, MemorySlot, NewGoal, StoreError,
};
use uuid::Uuid;

fn store() -> AppStore<MemorySlot> {
    AppStore::open(MemorySlot::new())
}

#[test]
fn create_then_list_contains_exactly_that_goal() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let created = goals
        .create(NewGoal {
            title: "Save $1000".to_string(),
            ..NewGoal::default()
        })
        .unwrap();

    let listed = goals.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].title, "Save $1000");
    assert!(!listed[0].completed);
    assert!(listed[0].images.is_empty());
    assert!(listed[0].links.is_empty());
}

#[test]
fn edit_changes_only_supplied_fields() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let created = goals
        .create(NewGoal {
            title: "Learn Spanish".to_string(),
            description: Some("30 minutes daily".to_string()),
            notes: None,
        })
        .unwrap();

    goals
        .edit(
            created.id,
            GoalPatch {
                notes: Some(Some("Duolingo streak".to_string())),
                ..GoalPatch::default()
            },
        )
        .unwrap();

    let updated = goals.get(created.id).unwrap();
    assert_eq!(updated.title, "Learn Spanish");
    assert_eq!(updated.description.as_deref(), Some("30 minutes daily"));
    assert_eq!(updated.notes.as_deref(), Some("Duolingo streak"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(!updated.completed);
}

#[test]
fn duplicate_id_is_rejected_and_collection_unchanged() {
    let mut store = store();

    let original = Goal::with_id(Uuid::new_v4(), "original", 1_000);
    store.add_goal(original.clone()).unwrap();

    let mut impostor = Goal::with_id(original.id, "impostor", 2_000);
    impostor.completed = true;
    let err = store.add_goal(impostor).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateId(id) if id == original.id));
    assert_eq!(store.goals().len(), 1);
    assert_eq!(store.goals().get(original.id).unwrap().title, "original");
}

#[test]
fn remove_then_edit_or_remove_fails_with_not_found() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let created = goals
        .create(NewGoal {
            title: "short lived".to_string(),
            ..NewGoal::default()
        })
        .unwrap();

    let removed = goals.remove(created.id).unwrap();
    assert_eq!(removed.id, created.id);
    assert!(goals.list().is_empty());

    assert!(matches!(
        goals.edit(created.id, GoalPatch::default()),
        Err(GoalServiceError::GoalNotFound(id)) if id == created.id
    ));
    assert!(matches!(
        goals.remove(created.id),
        Err(GoalServiceError::GoalNotFound(id)) if id == created.id
    ));
}

#[test]
fn attachments_append_in_order_and_reject_bad_urls() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let created = goals
        .create(NewGoal {
            title: "Dream house".to_string(),
            ..NewGoal::default()
        })
        .unwrap();

    goals
        .attach_image(created.id, "https://example.com/a.png")
        .unwrap();
    goals
        .attach_image(created.id, "https://example.com/b.png")
        .unwrap();
    goals
        .attach_link(created.id, "http://example.com/listing")
        .unwrap();

    let err = goals.attach_image(created.id, "not a url").unwrap_err();
    assert!(matches!(err, GoalServiceError::InvalidUrl(value) if value == "not a url"));

    let goal = goals.get(created.id).unwrap();
    assert_eq!(
        goal.images,
        ["https://example.com/a.png", "https://example.com/b.png"]
    );
    assert_eq!(goal.links, ["http://example.com/listing"]);
}

#[test]
fn toggle_completed_flips_state_and_reports_it() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let created = goals
        .create(NewGoal {
            title: "Meditate".to_string(),
            ..NewGoal::default()
        })
        .unwrap();

    assert!(goals.toggle_completed(created.id).unwrap());
    assert!(goals.get(created.id).unwrap().completed);

    assert!(!goals.toggle_completed(created.id).unwrap());
    assert!(!goals.get(created.id).unwrap().completed);
}

#[test]
fn blank_title_is_rejected_on_create() {
    let mut store = store();
    let mut goals = GoalService::new(&mut store);

    let err = goals
        .create(NewGoal {
            title: "   ".to_string(),
            ..NewGoal::default()
        })
        .unwrap_err();

    assert!(matches!(
        err,
        GoalServiceError::Store(StoreError::Validation(_))
    ));
    assert!(goals.list().is_empty());
}
