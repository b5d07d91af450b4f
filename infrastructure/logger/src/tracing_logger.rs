use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under the `wishlists` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "wishlists", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "wishlists", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "wishlists", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "wishlists", "{}", message);
    }
}
