
use crate::{APP_HOST_ID, Document, Notifier, SharedDocument, register_default_templates};

use std::cell::RefCell;
use std::rc::Rc;

/// Notifier that remembers every alert
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// A document with the default templates and an empty `app` host
pub(crate) fn app_document() -> SharedDocument {
    let mut document = Document::new();
    register_default_templates(&mut document);

    let host = document.create_element("div");
    document.set_id(host, APP_HOST_ID);
    let root = document.root();
    document.append_child(root, host);

    Rc::new(RefCell::new(document))
}
