//! # Notification-recording observer.
//!
//! [`Collector`] stores everything it receives, in delivery order. It is the
//! assertion workhorse of this crate's test suite and handy as a probe when
//! debugging a composition.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::StreamError;
use crate::notify::{Notification, Observer};

/// Observer that records every notification it receives.
pub struct Collector<T> {
    notifications: Mutex<Vec<Notification<T>>>,
}

// Manual impl: an empty collector needs no `T: Default`.
impl<T: Send + 'static> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Collector<T> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Creates an empty collector as a shared handle.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns `true` if the terminal `Complete` notification was received.
    pub fn is_completed(&self) -> bool {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .any(|n| matches!(n, Notification::Complete))
    }

    /// Returns the terminal error, if one was received.
    pub fn error(&self) -> Option<StreamError> {
        self.notifications.lock().unwrap().iter().find_map(|n| match n {
            Notification::Error(e) => Some(e.clone()),
            _ => None,
        })
    }

    /// Returns `true` once any terminal notification was received.
    pub fn is_terminated(&self) -> bool {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .any(Notification::is_terminal)
    }
}

impl<T: Clone + Send + 'static> Collector<T> {
    /// Returns the recorded values, in delivery order.
    pub fn values(&self) -> Vec<T> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter_map(|n| match n {
                Notification::Value(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns every recorded notification, in delivery order.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Send + 'static> Observer<T> for Collector<T> {
    async fn on_notification(&self, notification: Notification<T>) {
        self.notifications.lock().unwrap().push(notification);
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_delivery_order() {
        let collector = Collector::new();
        collector.on_notification(Notification::Value(1)).await;
        collector.on_notification(Notification::Value(2)).await;
        collector.on_notification(Notification::Complete).await;

        assert_eq!(collector.values(), vec![1, 2]);
        assert!(collector.is_completed());
        assert!(collector.error().is_none());
    }

    #[tokio::test]
    async fn collects_types_without_a_default() {
        #[derive(Clone, Debug, PartialEq)]
        struct Reading(u32);

        let collector: Collector<Reading> = Collector::default();
        collector.on_notification(Notification::Value(Reading(7))).await;

        assert_eq!(collector.values(), vec![Reading(7)]);
        assert!(!collector.is_terminated());
    }
}
