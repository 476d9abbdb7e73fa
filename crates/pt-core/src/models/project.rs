//! Project entity - a single tracked entry shown in one of the two lists.

use crate::ProjectStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project submitted through the input form.
///
/// Only `ProjectStore` creates and mutates projects; everything handed out to
/// views is a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub date_added: DateTime<Utc>,
    /// Set on every transition to Finished, never cleared
    pub date_finished: Option<DateTime<Utc>>,
    pub status: ProjectStatus,
}

impl Project {
    pub(crate) fn new(title: String, description: String, rating: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            rating,
            date_added: Utc::now(),
            date_finished: None,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }

    /// Apply a status change. Returns false when the status is unchanged.
    pub(crate) fn transition(&mut self, new_status: ProjectStatus, now: DateTime<Utc>) -> bool {
        if self.status == new_status {
            return false;
        }

        if new_status == ProjectStatus::Finished {
            self.date_finished = Some(now);
        }
        self.status = new_status;
        true
    }
}
