use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "grocery_backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "grocery_backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "grocery_backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "grocery_backend", "{}", message);
    }
}
