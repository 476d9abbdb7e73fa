use crate::{
    Component, Configurable, Draggable, Renderable, Result as ViewErrorResult,
    SINGLE_PROJECT_TEMPLATE, SharedDocument,
};

use pt_core::{DataTransfer, DropEffect, Project, TEXT_PLAIN};

use chrono::{DateTime, Utc};
use log::{debug, error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One rendered project inside a list. Rebuilt on every list render.
#[derive(Clone)]
pub struct ProjectItem {
    component: Component,
    document: SharedDocument,
    project: Project,
}

impl ProjectItem {
    pub fn new(
        document: SharedDocument,
        host_id: &str,
        project: Project,
    ) -> ViewErrorResult<Self> {
        let component = Component::new(
            &mut document.borrow_mut(),
            SINGLE_PROJECT_TEMPLATE,
            host_id,
            false,
            Some(&project.id.to_string()),
        )?;

        Ok(Self {
            component,
            document,
            project,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    /// "1 star" / "N stars"
    pub fn rating(&self) -> String {
        rating_label(self.project.rating)
    }

    /// Added date, plus the finished date for finished projects
    pub fn date_and_status(&self) -> String {
        match self.project.date_finished {
            Some(finished) if self.project.is_finished() => format!(
                "Added: {} -- Finished: {}",
                format_date(&self.project.date_added),
                format_date(&finished)
            ),
            _ => format!("Added: {}", format_date(&self.project.date_added)),
        }
    }
}

pub fn rating_label(rating: f64) -> String {
    if rating == 1.0 {
        "1 star".to_string()
    } else {
        format!("{} stars", rating)
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl Configurable for ProjectItem {
    fn configure(&self) {
        let mut document = self.document.borrow_mut();
        document.set_attribute(self.component.element(), "draggable", "true");
    }
}

impl Renderable for ProjectItem {
    fn render_content(&self) {
        let rating = self.rating();
        let date_and_status = self.date_and_status();

        let mut document = self.document.borrow_mut();
        let element = self.component.element();

        let slots = [
            ("h2", self.project.title.as_str()),
            ("h3", rating.as_str()),
            ("p", self.project.description.as_str()),
            ("span", date_and_status.as_str()),
        ];

        let mut missing = Vec::new();
        for (tag, text) in slots {
            match document.query_selector(element, tag) {
                Some(node) => document.set_text(node, text),
                None => missing.push(tag),
            }
        }

        if !missing.is_empty() {
            error!(
                "One or more elements not found in render_content for project {}: {:?}",
                self.project.id, missing
            );
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, &self.project.id.to_string());
        transfer.effect_allowed = DropEffect::Move;
    }

    fn drag_end_handler(&self, _transfer: &DataTransfer) {
        debug!("Drag ended for project {}", self.project.id);
    }
}
