//! Taskbar edge inference from work-area insets.
//!
//! Nothing reports where the taskbar actually is, so the edge is guessed from
//! how the work area sits inside the screen. A hidden taskbar and one on the
//! bottom edge look the same and both come back as `Bottom`.

use position_types::{ScreenMetrics, TaskBarLocation};

/// Infer the taskbar edge. Checks run in a fixed order and the first match
/// wins, so a work area inset on both left and top reports `Left`.
pub fn detect_taskbar_location(metrics: &ScreenMetrics) -> TaskBarLocation {
    let work_area = &metrics.work_area;

    if work_area.left > 0.0 {
        return TaskBarLocation::Left;
    }

    if work_area.top > 0.0 {
        return TaskBarLocation::Top;
    }

    if work_area.left == 0.0 && work_area.width < metrics.screen_width {
        return TaskBarLocation::Right;
    }

    TaskBarLocation::Bottom
}
