//! Server Error Broadcast
//!
//! Callback-registration channel for server-side (5xx) errors, so a toast
//! or any other surface can react without the data layer knowing about it.

use std::sync::{Arc, Mutex};

use crate::error::ApiError;

type Listener = Box<dyn Fn(&ApiError) + Send + Sync>;

/// Process-wide broadcast for API server errors.
///
/// Cheap to clone; clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct ErrorBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl ErrorBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every subsequent `emit`
    pub fn subscribe(&self, listener: impl Fn(&ApiError) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }

    /// Notify all listeners in subscription order
    pub fn emit(&self, error: &ApiError) {
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_all_subscribers_in_order() {
        let bus = ErrorBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let a = seen.clone();
        bus.subscribe(move |err| a.lock().unwrap().push(format!("a:{}", err.message)));
        let b = seen.clone();
        bus.subscribe(move |err| b.lock().unwrap().push(format!("b:{}", err.message)));

        bus.emit(&ApiError::new(Some(500), "boom"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["a:boom".to_string(), "b:boom".to_string()]
        );
    }

    #[test]
    fn clones_share_subscribers() {
        let bus = ErrorBus::new();
        let count = Arc::new(Mutex::new(0u32));

        let c = count.clone();
        bus.clone().subscribe(move |_| *c.lock().unwrap() += 1);
        bus.emit(&ApiError::network("offline"));

        assert_eq!(*count.lock().unwrap(), 1);
    }
}
