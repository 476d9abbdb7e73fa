use crate::{
    APP_HOST_ID, Document, Notifier, ProjectInput, ProjectList, Result as ViewErrorResult,
    SharedDocument, register_default_templates,
};

use pt_config::Config;
use pt_core::{ProjectStatus, ProjectStore};

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

/// Everything one tracker session needs: a document with the app host, the
/// session's store, the input form and both lists.
pub struct App {
    pub document: SharedDocument,
    pub store: Rc<ProjectStore>,
    pub input: ProjectInput,
    pub active_list: ProjectList,
    pub finished_list: ProjectList,
}

impl App {
    /// Build a session on a fresh document with the default templates
    pub fn bootstrap(config: &Config, notifier: Rc<dyn Notifier>) -> ViewErrorResult<Self> {
        let mut document = Document::new();
        register_default_templates(&mut document);

        let host = document.create_element("div");
        document.set_id(host, APP_HOST_ID);
        let root = document.root();
        document.append_child(root, host);

        Self::mount(Rc::new(RefCell::new(document)), config, notifier)
    }

    /// Build a session on a document that already has the templates and an
    /// `app` host element
    pub fn mount(
        document: SharedDocument,
        config: &Config,
        notifier: Rc<dyn Notifier>,
    ) -> ViewErrorResult<Self> {
        let store = Rc::new(ProjectStore::new());

        let input = ProjectInput::new(
            document.clone(),
            store.clone(),
            notifier,
            config.validation.clone(),
        )?;
        let active_list = ProjectList::new(document.clone(), store.clone(), ProjectStatus::Active)?;
        let finished_list =
            ProjectList::new(document.clone(), store.clone(), ProjectStatus::Finished)?;

        info!(
            "Project tracker ready ({} store listeners)",
            store.listener_count()
        );

        Ok(Self {
            document,
            store,
            input,
            active_list,
            finished_list,
        })
    }

    /// The list that shows projects with `status`
    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active_list,
            ProjectStatus::Finished => &self.finished_list,
        }
    }
}
