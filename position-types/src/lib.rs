//! Shared geometry and placement types for toast popups.
//!
//! Everything here is plain data: no screen access, no logging.

use serde::{Deserialize, Serialize};

/// Logical anchor a popup is biased toward on the primary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    TopCenter = 2,
    BottomLeft = 3,
    BottomRight = 4,
    BottomCenter = 5,
}

impl Corner {
    pub const ALL: [Corner; 6] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::TopCenter,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::BottomCenter,
    ];

    /// Convert a raw discriminant, e.g. one read from an untyped host setting.
    ///
    /// Returns `None` for anything outside `0..=5`.
    pub fn from_raw(value: i32) -> Option<Self> {
        usize::try_from(value).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parse a config name. Case, `-`, `_` and spaces are ignored, so
    /// `bottom-right`, `bottom_right` and `BottomRight` are all accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "topleft" => Some(Corner::TopLeft),
            "topright" => Some(Corner::TopRight),
            "topcenter" => Some(Corner::TopCenter),
            "bottomleft" => Some(Corner::BottomLeft),
            "bottomright" => Some(Corner::BottomRight),
            "bottomcenter" => Some(Corner::BottomCenter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::TopCenter => "top-center",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
            Corner::BottomCenter => "bottom-center",
        }
    }

    /// Direction new popups stack in. Top corners push downward, bottom corners upward.
    pub fn eject_direction(&self) -> EjectDirection {
        match self {
            Corner::TopLeft | Corner::TopRight | Corner::TopCenter => EjectDirection::ToBottom,
            Corner::BottomLeft | Corner::BottomRight | Corner::BottomCenter => {
                EjectDirection::ToTop
            }
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EjectDirection {
    ToTop,
    ToBottom,
}

/// Screen edge the taskbar is inferred to occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskBarLocation {
    Left,
    Top,
    Right,
    Bottom,
}

/// Absolute screen coordinate of a popup's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen region left over once OS-reserved areas such as the taskbar are excluded
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Primary screen size plus its work area, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub screen_width: f64,
    pub screen_height: f64,
    pub work_area: WorkArea,
}

impl ScreenMetrics {
    /// Metrics for a screen whose work area covers it entirely (no taskbar inset)
    pub fn full(screen_width: f64, screen_height: f64) -> Self {
        Self {
            screen_width,
            screen_height,
            work_area: WorkArea {
                left: 0.0,
                top: 0.0,
                width: screen_width,
                height: screen_height,
            },
        }
    }

    pub fn with_work_area(mut self, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.work_area = WorkArea { left, top, width, height };
        self
    }
}

/// Signals a provider may raise to ask its host to re-query it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateRequest {
    Position,
    EjectDirection,
    Height,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eject_direction_for_every_corner() {
        assert_eq!(Corner::TopLeft.eject_direction(), EjectDirection::ToBottom);
        assert_eq!(Corner::TopRight.eject_direction(), EjectDirection::ToBottom);
        assert_eq!(Corner::TopCenter.eject_direction(), EjectDirection::ToBottom);
        assert_eq!(Corner::BottomLeft.eject_direction(), EjectDirection::ToTop);
        assert_eq!(Corner::BottomRight.eject_direction(), EjectDirection::ToTop);
        assert_eq!(Corner::BottomCenter.eject_direction(), EjectDirection::ToTop);
    }

    #[test]
    fn test_from_raw_matches_discriminants() {
        for corner in Corner::ALL {
            assert_eq!(Corner::from_raw(corner as i32), Some(corner));
        }
    }

    #[test]
    fn test_from_raw_out_of_range() {
        assert_eq!(Corner::from_raw(6), None);
        assert_eq!(Corner::from_raw(-1), None);
        assert_eq!(Corner::from_raw(i32::MAX), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Corner::from_name("bottom-right"), Some(Corner::BottomRight));
        assert_eq!(Corner::from_name("bottom_right"), Some(Corner::BottomRight));
        assert_eq!(Corner::from_name("BottomRight"), Some(Corner::BottomRight));
        assert_eq!(Corner::from_name("TOP CENTER"), Some(Corner::TopCenter));
        assert_eq!(Corner::from_name("middle"), None);
        assert_eq!(Corner::from_name(""), None);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for corner in Corner::ALL {
            assert_eq!(Corner::from_name(corner.name()), Some(corner));
        }
    }

    #[test]
    fn test_full_metrics_have_no_inset() {
        let metrics = ScreenMetrics::full(1920.0, 1080.0);
        assert_eq!(metrics.work_area.left, 0.0);
        assert_eq!(metrics.work_area.top, 0.0);
        assert_eq!(metrics.work_area.width, 1920.0);
        assert_eq!(metrics.work_area.height, 1080.0);
    }

    #[test]
    fn test_corner_serializes_kebab_case() {
        let json = serde_json::to_string(&Corner::BottomCenter).unwrap();
        assert_eq!(json, "\"bottom-center\"");
        let json = serde_json::to_string(&EjectDirection::ToTop).unwrap();
        assert_eq!(json, "\"to-top\"");
    }
}
