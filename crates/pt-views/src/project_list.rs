use crate::{
    Component, Configurable, DragTarget, PROJECT_LIST_TEMPLATE, ProjectItem, Renderable,
    Result as ViewErrorResult, SharedDocument,
};

use pt_core::{DataTransfer, Project, ProjectStatus, ProjectStore, TEXT_PLAIN, Uuid};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error};

pub const APP_HOST_ID: &str = "app";
pub const DROPPABLE_CLASS: &str = "droppable";

/// One of the two project lists. Shows the projects whose status matches its
/// own and moves dropped projects to that status.
///
/// Cloning gives another handle to the same list.
#[derive(Clone)]
pub struct ProjectList {
    inner: Rc<ProjectListInner>,
}

struct ProjectListInner {
    list_type: ProjectStatus,
    component: Component,
    document: SharedDocument,
    store: Rc<ProjectStore>,
    assigned_projects: RefCell<Vec<Project>>,
    items: RefCell<Vec<ProjectItem>>,
}

impl ProjectList {
    /// Attach a new list at the end of the app host and wire it to the store
    pub fn new(
        document: SharedDocument,
        store: Rc<ProjectStore>,
        list_type: ProjectStatus,
    ) -> ViewErrorResult<Self> {
        let element_id = format!("{}-projects", list_type);
        let component = Component::new(
            &mut document.borrow_mut(),
            PROJECT_LIST_TEMPLATE,
            APP_HOST_ID,
            false,
            Some(&element_id),
        )?;

        let list = Self {
            inner: Rc::new(ProjectListInner {
                list_type,
                component,
                document,
                store,
                assigned_projects: RefCell::new(Vec::new()),
                items: RefCell::new(Vec::new()),
            }),
        };

        list.configure();
        list.render_content();
        Ok(list)
    }

    pub fn list_type(&self) -> ProjectStatus {
        self.inner.list_type
    }

    pub fn component(&self) -> &Component {
        &self.inner.component
    }

    /// Id of the `ul` that holds the items
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.inner.list_type)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.inner.list_type.as_str().to_uppercase())
    }

    pub fn assigned_projects(&self) -> Vec<Project> {
        self.inner.assigned_projects.borrow().clone()
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.inner.items.borrow().clone()
    }

    /// The rendered item for a project, if this list shows it
    pub fn item(&self, project_id: Uuid) -> Option<ProjectItem> {
        self.inner
            .items
            .borrow()
            .iter()
            .find(|item| item.project().id == project_id)
            .cloned()
    }

    /// Whether the list is currently marked as a drop target
    pub fn is_droppable(&self) -> bool {
        let document = self.inner.document.borrow();
        document
            .query_selector(self.inner.component.element(), "ul")
            .is_some_and(|ul| document.has_class(ul, DROPPABLE_CLASS))
    }

    fn set_droppable(&self, droppable: bool) {
        let mut document = self.inner.document.borrow_mut();
        match document.query_selector(self.inner.component.element(), "ul") {
            Some(ul) if droppable => document.add_class(ul, DROPPABLE_CLASS),
            Some(ul) => document.remove_class(ul, DROPPABLE_CLASS),
            None => error!("No list element in {} projects", self.inner.list_type),
        }
    }
}

impl ProjectListInner {
    fn on_projects_changed(&self, projects: Vec<Project>) {
        let relevant_projects: Vec<Project> = projects
            .into_iter()
            .filter(|prj| prj.status == self.list_type)
            .collect();

        *self.assigned_projects.borrow_mut() = relevant_projects;
        self.render_projects();
    }

    fn render_projects(&self) {
        let list_id = format!("{}-projects-list", self.list_type);

        {
            let mut document = self.document.borrow_mut();
            match document.get_element_by_id(&list_id) {
                Some(list_el) => document.remove_children(list_el),
                None => {
                    error!("List element {} not found, skipping render", list_id);
                    return;
                }
            }
        }

        let assigned = self.assigned_projects.borrow().clone();
        let mut items = Vec::with_capacity(assigned.len());

        for project in assigned {
            match ProjectItem::new(self.document.clone(), &list_id, project) {
                Ok(item) => {
                    item.configure();
                    item.render_content();
                    items.push(item);
                }
                Err(e) => error!("Failed to render project item in {}: {}", list_id, e),
            }
        }

        debug!("Rendered {} {} projects", items.len(), self.list_type);
        *self.items.borrow_mut() = items;
    }
}

impl Configurable for ProjectList {
    fn configure(&self) {
        let weak: Weak<ProjectListInner> = Rc::downgrade(&self.inner);

        self.inner.store.subscribe(move |projects: Vec<Project>| {
            if let Some(inner) = weak.upgrade() {
                inner.on_projects_changed(projects);
            }
        });
    }
}

impl Renderable for ProjectList {
    fn render_content(&self) {
        let list_id = self.list_id();
        let heading = self.heading();

        let mut document = self.inner.document.borrow_mut();
        let element = self.inner.component.element();

        match document.query_selector(element, "ul") {
            Some(ul) => document.set_id(ul, &list_id),
            None => error!("No list element in template for {}", list_id),
        }
        match document.query_selector(element, "h2") {
            Some(h2) => document.set_text(h2, &heading),
            None => error!("No heading element in template for {}", list_id),
        }
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, transfer: &DataTransfer) -> bool {
        if transfer.first_type() != Some(TEXT_PLAIN) {
            return false;
        }

        self.set_droppable(true);
        true
    }

    fn drop_handler(&self, transfer: &DataTransfer) {
        let Some(project_id) = transfer.get_data(TEXT_PLAIN) else {
            debug!("Drop on {} list without a project id", self.inner.list_type);
            return;
        };

        debug!("Dropped {} on {} list", project_id, self.inner.list_type);
        self.inner
            .store
            .move_project_str(project_id, self.inner.list_type);
    }

    fn drag_leave_handler(&self, _transfer: &DataTransfer) {
        self.set_droppable(false);
    }
}
