pub mod app;
pub mod component;
pub mod document;
pub mod drag_gesture;
pub mod error;
pub mod logger;
pub mod notifier;
pub mod project_input;
pub mod project_item;
pub mod project_list;
pub mod template;
pub mod view;

pub use app::App;
pub use component::Component;
pub use document::{Document, InsertPosition, NodeId, SharedDocument};
pub use drag_gesture::DragGesture;
pub use error::{Result, ViewError};
pub use notifier::{LogNotifier, Notifier};
pub use project_input::{
    FORM_ELEMENT_ID, INVALID_INPUT_MESSAGE, ProjectInput, parse_rating,
};
pub use project_item::{ProjectItem, rating_label};
pub use project_list::{APP_HOST_ID, DROPPABLE_CLASS, ProjectList};
pub use template::{
    ElementSpec, PROJECT_INPUT_TEMPLATE, PROJECT_LIST_TEMPLATE, SINGLE_PROJECT_TEMPLATE,
    register_default_templates,
};
pub use view::{Configurable, DragTarget, Draggable, Renderable};

#[cfg(test)]
mod tests;
