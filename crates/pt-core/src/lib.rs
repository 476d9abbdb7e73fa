pub mod data_transfer;
pub mod drag_phase;
pub mod drop_effect;
pub mod error;
pub mod models;
pub mod project_store;
pub mod state;
pub mod validation;

pub use data_transfer::{DataTransfer, TEXT_PLAIN};
pub use drag_phase::DragPhase;
pub use drop_effect::DropEffect;
pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use project_store::ProjectStore;
pub use state::{Listener, State};
pub use validation::{Validatable, ValidatableValue, validate};

pub use uuid::Uuid;

#[cfg(test)]
mod tests;
