use crate::{Document, InsertPosition, NodeId, Result as ViewErrorResult, ViewError};

/// A template instance attached to a host element.
///
/// Views own one of these instead of inheriting from a base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    host: NodeId,
    element: NodeId,
}

impl Component {
    /// Instantiate `template_id`, optionally give the new element an id, and
    /// attach it as the first or last child of the element `host_element_id`.
    #[track_caller]
    pub fn new(
        document: &mut Document,
        template_id: &str,
        host_element_id: &str,
        insert_at_start: bool,
        new_element_id: Option<&str>,
    ) -> ViewErrorResult<Self> {
        let host = document
            .get_element_by_id(host_element_id)
            .ok_or_else(|| ViewError::element_not_found(host_element_id))?;
        let element = document
            .instantiate(template_id)
            .ok_or_else(|| ViewError::template_not_found(template_id))?;

        if let Some(id) = new_element_id {
            document.set_id(element, id);
        }

        let component = Self { host, element };
        component.attach(document, insert_at_start);
        Ok(component)
    }

    fn attach(&self, document: &mut Document, insert_at_beginning: bool) {
        let position = if insert_at_beginning {
            InsertPosition::AfterBegin
        } else {
            InsertPosition::BeforeEnd
        };
        document.insert_adjacent(self.host, position, self.element);
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn element(&self) -> NodeId {
        self.element
    }
}
