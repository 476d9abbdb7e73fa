use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.as_str(), "finished");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("active").unwrap(),
        ProjectStatus::Active
    );
    assert_eq!(
        ProjectStatus::from_str("finished").unwrap(),
        ProjectStatus::Finished
    );
    assert!(ProjectStatus::from_str("archived").is_err());
    assert!(ProjectStatus::from_str("Active").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn test_project_status_display_matches_as_str() {
    for status in ProjectStatus::ALL {
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn test_project_status_serializes_snake_case() {
    let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
    assert_eq!(json, "\"finished\"");
}
