use log::warn;

/// Blocking, user-facing notification (a browser `alert`)
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Notifier for headless runs: writes the message to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!("{}", message);
    }
}
