use crate::{Project, ProjectStatus};

use chrono::{Duration, Utc};

#[test]
fn test_project_new() {
    let project = Project::new("Book A".to_string(), "desc".to_string(), 4.0);

    assert_eq!(project.title, "Book A");
    assert_eq!(project.description, "desc");
    assert_eq!(project.rating, 4.0);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.date_finished.is_none());
    assert!(!project.is_finished());
}

#[test]
fn test_project_new_ids_are_unique() {
    let a = Project::new("A".to_string(), "desc".to_string(), 1.0);
    let b = Project::new("A".to_string(), "desc".to_string(), 1.0);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_project_transition_to_finished_stamps_date() {
    let mut project = Project::new("A".to_string(), "desc".to_string(), 3.0);
    let now = Utc::now();

    assert!(project.transition(ProjectStatus::Finished, now));
    assert_eq!(project.status, ProjectStatus::Finished);
    assert_eq!(project.date_finished, Some(now));
    assert!(project.is_finished());
}

#[test]
fn test_project_transition_same_status_is_noop() {
    let mut project = Project::new("A".to_string(), "desc".to_string(), 3.0);
    let first = Utc::now();
    project.transition(ProjectStatus::Finished, first);

    let changed = project.transition(ProjectStatus::Finished, first + Duration::seconds(5));

    assert!(!changed);
    assert_eq!(project.date_finished, Some(first));
}

#[test]
fn test_project_transition_back_to_active_keeps_date_finished() {
    let mut project = Project::new("A".to_string(), "desc".to_string(), 3.0);
    let finished_at = Utc::now();
    project.transition(ProjectStatus::Finished, finished_at);

    assert!(project.transition(ProjectStatus::Active, finished_at + Duration::seconds(1)));
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.date_finished, Some(finished_at));
}

#[test]
fn test_project_serializes_with_optional_finish_date() {
    let project = Project::new("A".to_string(), "desc".to_string(), 2.0);

    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["status"], "active");
    assert!(value["date_finished"].is_null());
    assert_eq!(value["id"], project.id.to_string());
}
