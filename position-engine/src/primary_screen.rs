//! Corner placement on the primary screen.
//!
//! Each corner is a horizontal and a vertical anchor. The anchors compute a
//! baseline inside the work area and switch to a full-screen formula when the
//! taskbar sits on the left (horizontal) or top (vertical) edge. A right or
//! bottom taskbar needs nothing: the work area already shrinks on those edges.

use position_types::{Corner, EjectDirection, Point, ScreenMetrics, TaskBarLocation};
use tracing::debug;

use crate::error::{PositionError, Result};
use crate::provider::PositionProvider;
use crate::screen::ScreenSource;
use crate::taskbar::detect_taskbar_location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HorizontalAnchor {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerticalAnchor {
    Top,
    Bottom,
}

fn anchors(corner: Corner) -> (HorizontalAnchor, VerticalAnchor) {
    match corner {
        Corner::TopLeft => (HorizontalAnchor::Left, VerticalAnchor::Top),
        Corner::TopRight => (HorizontalAnchor::Right, VerticalAnchor::Top),
        Corner::TopCenter => (HorizontalAnchor::Center, VerticalAnchor::Top),
        Corner::BottomLeft => (HorizontalAnchor::Left, VerticalAnchor::Bottom),
        Corner::BottomRight => (HorizontalAnchor::Right, VerticalAnchor::Bottom),
        Corner::BottomCenter => (HorizontalAnchor::Center, VerticalAnchor::Bottom),
    }
}

impl HorizontalAnchor {
    fn x(
        self,
        metrics: &ScreenMetrics,
        offset_x: f64,
        width: f64,
        taskbar: TaskBarLocation,
    ) -> f64 {
        let screen_width = metrics.screen_width;
        let work_width = metrics.work_area.width;
        let left_taskbar = taskbar == TaskBarLocation::Left;

        match (self, left_taskbar) {
            (HorizontalAnchor::Left, false) => offset_x,
            (HorizontalAnchor::Left, true) => (screen_width - work_width) + offset_x,
            (HorizontalAnchor::Right, false) => work_width - offset_x - width,
            (HorizontalAnchor::Right, true) => screen_width - width - offset_x,
            (HorizontalAnchor::Center, false) => (work_width - offset_x - width) / 2.0,
            (HorizontalAnchor::Center, true) => (screen_width - offset_x - width) / 2.0,
        }
    }
}

impl VerticalAnchor {
    fn y(
        self,
        metrics: &ScreenMetrics,
        offset_y: f64,
        height: f64,
        taskbar: TaskBarLocation,
    ) -> f64 {
        let screen_height = metrics.screen_height;
        let work_height = metrics.work_area.height;
        let top_taskbar = taskbar == TaskBarLocation::Top;

        match (self, top_taskbar) {
            (VerticalAnchor::Top, false) => offset_y,
            (VerticalAnchor::Top, true) => (screen_height - work_height) + offset_y,
            (VerticalAnchor::Bottom, false) => work_height - offset_y - height,
            (VerticalAnchor::Bottom, true) => screen_height - offset_y - height,
        }
    }
}

/// Places popups in a fixed corner of the primary screen.
///
/// Never raises update requests: the corner is fixed and metrics are re-read
/// on every call anyway.
#[derive(Debug, Clone)]
pub struct PrimaryScreenPositionProvider<S> {
    corner: Corner,
    offset_x: f64,
    offset_y: f64,
    eject_direction: EjectDirection,
    screen: S,
}

impl<S: ScreenSource> PrimaryScreenPositionProvider<S> {
    /// Offsets are pixel margins from the anchored edges. They are not
    /// checked here; see [`crate::config::PlacementConfig::build`] for the
    /// validated path.
    pub fn new(corner: Corner, offset_x: f64, offset_y: f64, screen: S) -> Self {
        Self {
            corner,
            offset_x,
            offset_y,
            eject_direction: corner.eject_direction(),
            screen,
        }
    }

    /// Build from an untyped corner value, failing for anything outside `0..=5`.
    pub fn from_raw_corner(
        raw_corner: i32,
        offset_x: f64,
        offset_y: f64,
        screen: S,
    ) -> Result<Self> {
        let corner =
            Corner::from_raw(raw_corner).ok_or(PositionError::InvalidCorner(raw_corner))?;
        Ok(Self::new(corner, offset_x, offset_y, screen))
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn offsets(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Taskbar edge as inferred from the current metrics
    pub fn taskbar_location(&self) -> TaskBarLocation {
        detect_taskbar_location(&self.screen.metrics())
    }
}

impl<S: ScreenSource> PositionProvider for PrimaryScreenPositionProvider<S> {
    fn position(&self, popup_width: f64, popup_height: f64) -> Point {
        let metrics = self.screen.metrics();
        let taskbar = detect_taskbar_location(&metrics);
        let (horizontal, vertical) = anchors(self.corner);

        let point = Point::new(
            horizontal.x(&metrics, self.offset_x, popup_width, taskbar),
            vertical.y(&metrics, self.offset_y, popup_height, taskbar),
        );

        debug!(
            "Placed {}x{} popup at ({}, {}) for {} with taskbar {:?}",
            popup_width, popup_height, point.x, point.y, self.corner, taskbar
        );

        point
    }

    fn eject_direction(&self) -> EjectDirection {
        self.eject_direction
    }

    /// Full screen height, not the work-area height
    fn height(&self) -> f64 {
        self.screen.metrics().screen_height
    }
}
