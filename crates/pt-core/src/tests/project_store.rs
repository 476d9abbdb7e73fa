use crate::{Project, ProjectStatus, ProjectStore};

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

/// Record every snapshot the store pushes
fn recording_subscriber(store: &ProjectStore) -> Rc<RefCell<Vec<Vec<Project>>>> {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let snapshots_clone = Rc::clone(&snapshots);
    store.subscribe(move |projects| snapshots_clone.borrow_mut().push(projects));
    snapshots
}

// =========================================================================
// add_project
// =========================================================================

#[test]
fn given_empty_store_when_project_added_then_active_without_finish_date() {
    // Given
    let store = ProjectStore::new();

    // When
    let id = store.add_project("Book A", "desc", 4.0);

    // Then
    assert_eq!(store.len(), 1);
    let project = store.get(id).unwrap();
    assert_eq!(project.title, "Book A");
    assert_eq!(project.description, "desc");
    assert_eq!(project.rating, 4.0);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.date_finished.is_none());
}

#[test]
fn given_store_when_projects_added_then_ids_unique_and_order_kept() {
    let store = ProjectStore::new();

    let ids: Vec<Uuid> = (0..5)
        .map(|i| store.add_project(&format!("Project {}", i), "desc", 3.0))
        .collect();

    let titles: Vec<String> = store.projects().into_iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        vec!["Project 0", "Project 1", "Project 2", "Project 3", "Project 4"]
    );
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn given_subscriber_when_project_added_then_notified_with_full_copy() {
    // Given
    let store = ProjectStore::new();
    let snapshots = recording_subscriber(&store);

    // When
    store.add_project("A", "desc", 1.0);
    store.add_project("B", "desc", 2.0);

    // Then
    let snapshots = snapshots.borrow();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].len(), 1);
    assert_eq!(snapshots[1].len(), 2);
}

#[test]
fn given_subscriber_when_subscribed_then_not_called_immediately() {
    let store = ProjectStore::new();
    store.add_project("A", "desc", 1.0);

    let snapshots = recording_subscriber(&store);

    assert!(snapshots.borrow().is_empty());
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn given_subscriber_mutating_snapshot_when_next_change_then_store_unaffected() {
    // Given
    let store = ProjectStore::new();
    store.subscribe(|mut projects| {
        for project in projects.iter_mut() {
            project.title = "tampered".to_string();
            project.status = ProjectStatus::Finished;
        }
        projects.clear();
    });
    let snapshots = recording_subscriber(&store);

    // When
    store.add_project("A", "desc", 1.0);
    store.add_project("B", "desc", 2.0);

    // Then
    let snapshots = snapshots.borrow();
    assert_eq!(snapshots[1].len(), 2);
    assert_eq!(snapshots[1][0].title, "A");
    assert_eq!(snapshots[1][0].status, ProjectStatus::Active);
    assert_eq!(store.projects()[0].title, "A");
}

// =========================================================================
// move_project
// =========================================================================

#[test]
fn given_active_project_when_moved_to_finished_then_status_and_date_set() {
    // Given
    let store = ProjectStore::new();
    let id = store.add_project("A", "desc", 1.0);
    let snapshots = recording_subscriber(&store);

    // When
    let moved = store.move_project(id, ProjectStatus::Finished);

    // Then
    assert!(moved);
    let project = store.get(id).unwrap();
    assert_eq!(project.status, ProjectStatus::Finished);
    let finished = project.date_finished.unwrap();
    assert!(finished >= project.date_added);
    assert_eq!(snapshots.borrow().len(), 1);
}

#[test]
fn given_finished_project_when_moved_to_finished_again_then_idempotent() {
    // Given
    let store = ProjectStore::new();
    let id = store.add_project("A", "desc", 1.0);
    store.move_project(id, ProjectStatus::Finished);
    let finished_at = store.get(id).unwrap().date_finished;
    let snapshots = recording_subscriber(&store);

    // When
    let moved = store.move_project(id, ProjectStatus::Finished);

    // Then
    assert!(!moved);
    assert!(snapshots.borrow().is_empty());
    assert_eq!(store.get(id).unwrap().date_finished, finished_at);
}

#[test]
fn given_active_project_when_moved_to_active_then_no_notification() {
    let store = ProjectStore::new();
    let id = store.add_project("A", "desc", 1.0);
    let snapshots = recording_subscriber(&store);

    assert!(!store.move_project(id, ProjectStatus::Active));
    assert!(snapshots.borrow().is_empty());
}

#[test]
fn given_unknown_id_when_moved_then_nothing_changes() {
    // Given
    let store = ProjectStore::new();
    store.add_project("A", "desc", 1.0);
    let before = store.projects();
    let snapshots = recording_subscriber(&store);

    // When
    let moved = store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    // Then
    assert!(!moved);
    assert_eq!(store.projects(), before);
    assert!(snapshots.borrow().is_empty());
}

#[test]
fn given_finished_project_when_moved_back_then_active_and_date_kept() {
    let store = ProjectStore::new();
    let id = store.add_project("A", "desc", 1.0);
    store.move_project(id, ProjectStatus::Finished);
    let finished_at = store.get(id).unwrap().date_finished;

    assert!(store.move_project(id, ProjectStatus::Active));

    let project = store.get(id).unwrap();
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.date_finished, finished_at);
}

#[test]
fn given_moves_when_status_changes_then_collection_order_unchanged() {
    let store = ProjectStore::new();
    let a = store.add_project("A", "desc", 1.0);
    store.add_project("B", "desc", 1.0);
    store.add_project("C", "desc", 1.0);

    store.move_project(a, ProjectStatus::Finished);

    let titles: Vec<String> = store.projects().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    assert_eq!(store.projects_with_status(ProjectStatus::Active).len(), 2);
    assert_eq!(store.projects_with_status(ProjectStatus::Finished).len(), 1);
}

#[test]
fn given_payload_text_when_moved_by_str_then_parsed_as_id() {
    let store = ProjectStore::new();
    let id = store.add_project("A", "desc", 1.0);

    assert!(store.move_project_str(&id.to_string(), ProjectStatus::Finished));
    assert!(store.get(id).unwrap().is_finished());
}

#[test]
fn given_malformed_payload_when_moved_by_str_then_noop() {
    let store = ProjectStore::new();
    store.add_project("A", "desc", 1.0);
    let snapshots = recording_subscriber(&store);

    assert!(!store.move_project_str("0.123456789", ProjectStatus::Finished));
    assert!(!store.move_project_str("", ProjectStatus::Finished));
    assert!(snapshots.borrow().is_empty());
}

// =========================================================================
// Notification ordering and re-entrancy
// =========================================================================

#[test]
fn given_subscribers_when_changed_then_snapshot_length_matches_store() {
    let store = Rc::new(ProjectStore::new());
    let observed = Rc::new(RefCell::new(Vec::new()));

    let store_clone = Rc::clone(&store);
    let observed_clone = Rc::clone(&observed);
    store.subscribe(move |projects| {
        observed_clone
            .borrow_mut()
            .push((projects.len(), store_clone.len()));
    });

    store.add_project("A", "desc", 1.0);
    store.add_project("B", "desc", 1.0);

    assert_eq!(*observed.borrow(), vec![(1, 1), (2, 2)]);
}

#[test]
fn given_listener_that_moves_project_when_added_then_nested_change_applies() {
    // Given - a listener that finishes every newly added project, and a later
    // listener that records what it was handed next to the store's real state
    let store = Rc::new(ProjectStore::new());
    let store_clone = Rc::clone(&store);
    store.subscribe(move |projects| {
        for project in projects {
            if !project.is_finished() {
                store_clone.move_project(project.id, ProjectStatus::Finished);
            }
        }
    });
    let observed = Rc::new(RefCell::new(Vec::new()));
    let observed_clone = Rc::clone(&observed);
    let store_clone = Rc::clone(&store);
    store.subscribe(move |projects: Vec<Project>| {
        observed_clone
            .borrow_mut()
            .push((projects[0].status, store_clone.projects()[0].status));
    });

    // When
    let id = store.add_project("A", "desc", 1.0);

    // Then - every delivery, including the outer one that arrives last,
    // matches the store at the moment it was delivered
    assert!(store.get(id).unwrap().is_finished());
    assert_eq!(
        *observed.borrow(),
        vec![
            (ProjectStatus::Finished, ProjectStatus::Finished),
            (ProjectStatus::Finished, ProjectStatus::Finished),
        ]
    );
}
