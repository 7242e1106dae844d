//! Anchor-point computation for toast popups on the primary screen.
//!
//! A host builds a [`PositionProvider`] once per notification configuration
//! and asks it for a position each time a popup is shown. Screen geometry
//! comes from a [`ScreenSource`] that is re-read on every query.

pub mod config;
pub mod error;
pub mod primary_screen;
pub mod provider;
pub mod screen;
pub mod taskbar;
pub mod tracking;

pub use error::PositionError;
pub use position_types::{
    Corner, EjectDirection, Point, ScreenMetrics, TaskBarLocation, UpdateRequest, WorkArea,
};
pub use primary_screen::PrimaryScreenPositionProvider;
pub use provider::PositionProvider;
pub use screen::{check_metrics, ScreenSource, SharedScreen, StaticScreen};
pub use taskbar::detect_taskbar_location;
pub use tracking::TrackingPositionProvider;
