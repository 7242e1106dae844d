//! Sources of primary-screen metrics.
//!
//! Providers hold a source rather than a snapshot and call [`ScreenSource::metrics`]
//! on every query, so a moved or resized taskbar is picked up on the next popup.

use crossbeam_channel::{unbounded, Receiver, Sender};
use position_types::{ScreenMetrics, UpdateRequest};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, trace};

use crate::error::{PositionError, Result};

/// Anything that can report the current primary-screen geometry
pub trait ScreenSource {
    fn metrics(&self) -> ScreenMetrics;
}

impl<S: ScreenSource + ?Sized> ScreenSource for &S {
    fn metrics(&self) -> ScreenMetrics {
        (**self).metrics()
    }
}

impl<S: ScreenSource + ?Sized> ScreenSource for Box<S> {
    fn metrics(&self) -> ScreenMetrics {
        (**self).metrics()
    }
}

impl<S: ScreenSource + ?Sized> ScreenSource for Arc<S> {
    fn metrics(&self) -> ScreenMetrics {
        (**self).metrics()
    }
}

/// Fixed metrics, for hosts that pass geometry in once (and for tests)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticScreen(pub ScreenMetrics);

/// Reject metrics containing NaN or infinities
pub fn check_metrics(metrics: &ScreenMetrics) -> Result<()> {
    let values = [
        metrics.screen_width,
        metrics.screen_height,
        metrics.work_area.left,
        metrics.work_area.top,
        metrics.work_area.width,
        metrics.work_area.height,
    ];
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PositionError::InvalidMetrics(format!("{:?}", metrics)))
    }
}

impl StaticScreen {
    /// Wrap metrics coming from untrusted input
    pub fn checked(metrics: ScreenMetrics) -> Result<Self> {
        check_metrics(&metrics)?;
        Ok(Self(metrics))
    }
}

impl ScreenSource for StaticScreen {
    fn metrics(&self) -> ScreenMetrics {
        self.0
    }
}

struct SharedScreenInner {
    metrics: RwLock<ScreenMetrics>,
    subscribers: Mutex<Vec<Sender<UpdateRequest>>>,
}

/// Host-updated metrics shared between the thread tracking display changes
/// and the thread placing popups.
///
/// Every clone refers to the same metrics. [`SharedScreen::update`] notifies
/// subscribers when the geometry actually changed.
#[derive(Clone)]
pub struct SharedScreen {
    inner: Arc<SharedScreenInner>,
}

impl SharedScreen {
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            inner: Arc::new(SharedScreenInner {
                metrics: RwLock::new(metrics),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Replace the current metrics.
    ///
    /// Subscribers get `Position` for any change, plus `Height` when the full
    /// screen height moved. Identical metrics send nothing. Non-finite
    /// metrics are rejected and leave the current ones in place.
    pub fn update(&self, metrics: ScreenMetrics) -> Result<()> {
        check_metrics(&metrics)?;

        let previous = {
            let mut current = self
                .inner
                .metrics
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, metrics)
        };

        if previous == metrics {
            trace!("Screen metrics unchanged, no update sent");
            return Ok(());
        }

        let mut requests = vec![UpdateRequest::Position];
        if previous.screen_height != metrics.screen_height {
            requests.push(UpdateRequest::Height);
        }

        debug!("Screen metrics changed: {:?} -> {:?}", previous, metrics);
        self.notify(&requests);
        Ok(())
    }

    /// Register a new listener for update requests
    pub fn subscribe(&self) -> Receiver<UpdateRequest> {
        let (tx, rx) = unbounded();
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        subscribers.retain(|existing| existing.receiver_count() > 0);
        subscribers.push(tx);
        rx
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, requests: &[UpdateRequest]) {
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Dropped receivers make send fail; forget those senders.
        subscribers.retain(|tx| requests.iter().all(|request| tx.send(*request).is_ok()));
        trace!("Notified {} subscriber(s) of {:?}", subscribers.len(), requests);
    }
}

impl ScreenSource for SharedScreen {
    fn metrics(&self) -> ScreenMetrics {
        *self
            .inner
            .metrics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
