use crate::{
    APP_HOST_ID, Component, Configurable, NodeId, Notifier, PROJECT_INPUT_TEMPLATE, Renderable,
    Result as ViewErrorResult, SharedDocument, ViewError,
};

use pt_config::ValidationConfig;
use pt_core::{ProjectStore, Uuid, Validatable, validate};

use std::rc::Rc;

use log::{debug, warn};

pub const FORM_ELEMENT_ID: &str = "user-input";
pub const INVALID_INPUT_MESSAGE: &str = "please enter valid input";

const TITLE_FIELD_ID: &str = "title";
const DESCRIPTION_FIELD_ID: &str = "description";
const RATING_FIELD_ID: &str = "rating";

/// The project submission form.
pub struct ProjectInput {
    component: Component,
    document: SharedDocument,
    store: Rc<ProjectStore>,
    notifier: Rc<dyn Notifier>,
    limits: ValidationConfig,
    title_input: NodeId,
    description_input: NodeId,
    rating_input: NodeId,
}

impl ProjectInput {
    /// Attach the form at the start of the app host
    pub fn new(
        document: SharedDocument,
        store: Rc<ProjectStore>,
        notifier: Rc<dyn Notifier>,
        limits: ValidationConfig,
    ) -> ViewErrorResult<Self> {
        let (component, title_input, description_input, rating_input) = {
            let mut doc = document.borrow_mut();
            let component = Component::new(
                &mut doc,
                PROJECT_INPUT_TEMPLATE,
                APP_HOST_ID,
                true,
                Some(FORM_ELEMENT_ID),
            )?;

            let field = |id: &str| {
                doc.query_selector_id(component.element(), id)
                    .ok_or_else(|| ViewError::element_not_found(id))
            };
            let title_input = field(TITLE_FIELD_ID)?;
            let description_input = field(DESCRIPTION_FIELD_ID)?;
            let rating_input = field(RATING_FIELD_ID)?;

            (component, title_input, description_input, rating_input)
        };

        let input = Self {
            component,
            document,
            store,
            notifier,
            limits,
            title_input,
            description_input,
            rating_input,
        };

        input.configure();
        input.render_content();
        Ok(input)
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn set_title(&self, value: &str) {
        self.document.borrow_mut().set_value(self.title_input, value);
    }

    pub fn set_description(&self, value: &str) {
        self.document
            .borrow_mut()
            .set_value(self.description_input, value);
    }

    pub fn set_rating(&self, value: &str) {
        self.document.borrow_mut().set_value(self.rating_input, value);
    }

    /// Current raw field values: title, description, rating
    pub fn field_values(&self) -> (String, String, String) {
        let document = self.document.borrow();
        (
            document.value(self.title_input).to_string(),
            document.value(self.description_input).to_string(),
            document.value(self.rating_input).to_string(),
        )
    }

    /// Read and validate the form. Alerts the user and returns None when any
    /// field is invalid.
    pub fn gather_user_input(&self) -> Option<(String, String, f64)> {
        let (entered_title, entered_description, entered_rating) = self.field_values();
        let rating = parse_rating(&entered_rating);

        let title_validatable = Validatable::new(entered_title.as_str())
            .named(TITLE_FIELD_ID)
            .required();
        let description_validatable = Validatable::new(entered_description.as_str())
            .named(DESCRIPTION_FIELD_ID)
            .required()
            .min_length(self.limits.description_min_length);
        let rating_validatable = Validatable::new(rating)
            .named(RATING_FIELD_ID)
            .required()
            .min(self.limits.rating_min)
            .max(self.limits.rating_max);

        let fields = [
            &title_validatable,
            &description_validatable,
            &rating_validatable,
        ];

        if fields.iter().all(|field| validate(field)) {
            Some((entered_title, entered_description, rating))
        } else {
            for field in fields {
                if let Err(e) = field.check() {
                    debug!("Rejected form input: {}", e);
                }
            }
            self.notifier.alert(INVALID_INPUT_MESSAGE);
            None
        }
    }

    /// Handle a form submission. Adds the project and clears the form when
    /// the input is valid; otherwise leaves the form as it was.
    pub fn submit_handler(&self) -> Option<Uuid> {
        let (title, description, rating) = self.gather_user_input()?;

        let id = self.store.add_project(&title, &description, rating);
        self.clear_inputs();
        Some(id)
    }

    fn clear_inputs(&self) {
        let mut document = self.document.borrow_mut();
        for input in [self.title_input, self.description_input, self.rating_input] {
            document.set_value(input, "");
        }
    }
}

impl Configurable for ProjectInput {
    /// `submit_handler` does all checking, so the form opts out of the
    /// host's built-in constraint validation
    fn configure(&self) {
        let mut document = self.document.borrow_mut();
        document.set_attribute(self.component.element(), "novalidate", "true");
        debug!("Project input form ready");
    }
}

impl Renderable for ProjectInput {
    // Everything the form shows comes from its template
    fn render_content(&self) {}
}

/// Numeric conversion of the rating field: blank is 0, anything that is not a
/// number is NaN (which then fails validation).
pub fn parse_rating(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    trimmed.parse::<f64>().unwrap_or_else(|_| {
        warn!("Rating {:?} is not a number", raw);
        f64::NAN
    })
}
