use crate::{Project, ProjectStatus, State};

use std::cell::RefCell;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

/// The in-memory collection of projects for one session.
///
/// Construct one per session and hand it (usually as `Rc<ProjectStore>`) to
/// every view that reads or changes projects. All mutation goes through
/// `add_project` and `move_project`; both notify subscribers synchronously.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    state: State<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive a snapshot of all projects after every change.
    /// Not called on registration.
    pub fn subscribe<F>(&self, listener_fn: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        self.state.add_listener(listener_fn);
    }

    /// Append a new active project. Input is expected to be validated already.
    pub fn add_project(&self, title: &str, description: &str, rating: f64) -> Uuid {
        let project = Project::new(title.to_string(), description.to_string(), rating);
        let id = project.id;

        self.projects.borrow_mut().push(project);
        debug!("Added project {} ({} total)", id, self.len());

        self.update_listeners();
        id
    }

    /// Change a project's status.
    ///
    /// Unknown ids and unchanged statuses are ignored without notifying.
    /// Returns true when the project actually moved.
    pub fn move_project(&self, project_id: Uuid, new_status: ProjectStatus) -> bool {
        let moved = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|prj| prj.id == project_id) {
                Some(project) => project.transition(new_status, Utc::now()),
                None => {
                    debug!("Ignoring move of unknown project {}", project_id);
                    return false;
                }
            }
        };

        if moved {
            debug!("Moved project {} to {}", project_id, new_status);
            self.update_listeners();
        } else {
            debug!("Project {} is already {}", project_id, new_status);
        }

        moved
    }

    /// `move_project` for an id carried as text, such as a drag payload.
    /// Text that is not a valid id is treated like an unknown id.
    pub fn move_project_str(&self, project_id: &str, new_status: ProjectStatus) -> bool {
        match Uuid::parse_str(project_id.trim()) {
            Ok(id) => self.move_project(id, new_status),
            Err(e) => {
                debug!("Ignoring move of malformed project id {:?}: {}", project_id, e);
                false
            }
        }
    }

    /// Snapshot of every project in insertion order
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .borrow()
            .iter()
            .filter(|prj| prj.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, project_id: Uuid) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|prj| prj.id == project_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }

    fn update_listeners(&self) {
        // Each snapshot's borrow ends before its listener runs; listeners may
        // call back into the store
        self.state.notify_with(|| self.projects.borrow().clone());
    }
}
