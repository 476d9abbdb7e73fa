use crate::Document;

use std::collections::BTreeMap;

pub const PROJECT_INPUT_TEMPLATE: &str = "project-input";
pub const PROJECT_LIST_TEMPLATE: &str = "project-list";
pub const SINGLE_PROJECT_TEMPLATE: &str = "single-project";

/// Declarative description of an element tree, used as template content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

fn form_control(label: &str, field_id: &str, input_type: &str) -> ElementSpec {
    ElementSpec::new("div")
        .with_class("form-control")
        .with_child(
            ElementSpec::new("label")
                .with_attribute("for", field_id)
                .with_text(label),
        )
        .with_child(
            ElementSpec::new("input")
                .with_id(field_id)
                .with_attribute("type", input_type),
        )
}

/// The input form: title, description and rating fields plus a submit button
pub fn project_input_template() -> ElementSpec {
    ElementSpec::new("form")
        .with_child(form_control("Title", "title", "text"))
        .with_child(form_control("Description", "description", "text"))
        .with_child(form_control("Rating", "rating", "number"))
        .with_child(
            ElementSpec::new("button")
                .with_attribute("type", "submit")
                .with_text("ADD PROJECT"),
        )
}

/// A titled list section
pub fn project_list_template() -> ElementSpec {
    ElementSpec::new("section")
        .with_class("projects")
        .with_child(ElementSpec::new("header").with_child(ElementSpec::new("h2")))
        .with_child(ElementSpec::new("ul"))
}

/// One list entry: title, rating, description and dates
pub fn single_project_template() -> ElementSpec {
    ElementSpec::new("li")
        .with_child(ElementSpec::new("h2"))
        .with_child(ElementSpec::new("h3"))
        .with_child(ElementSpec::new("p"))
        .with_child(ElementSpec::new("span"))
}

pub fn register_default_templates(document: &mut Document) {
    document.register_template(PROJECT_INPUT_TEMPLATE, project_input_template());
    document.register_template(PROJECT_LIST_TEMPLATE, project_list_template());
    document.register_template(SINGLE_PROJECT_TEMPLATE, single_project_template());
}
