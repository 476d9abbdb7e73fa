use crate::DropEffect;

/// Format used for project id payloads
pub const TEXT_PLAIN: &str = "text/plain";

/// Payload carried by one drag gesture, keyed by format.
///
/// Entries keep the order in which their formats were first set, so
/// `types()[0]` is the format the source set first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `format`, replacing any previous value for it
    pub fn set_data(&mut self, format: &str, data: &str) {
        match self.entries.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.entries.push((format.to_string(), data.to_string())),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, data)| data.as_str())
    }

    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }

    /// The first format set, which is what drop targets inspect
    pub fn first_type(&self) -> Option<&str> {
        self.entries.first().map(|(f, _)| f.as_str())
    }

    pub fn clear_data(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
