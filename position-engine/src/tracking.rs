use crossbeam_channel::Receiver;
use position_types::{Corner, EjectDirection, Point, TaskBarLocation, UpdateRequest};

use crate::primary_screen::PrimaryScreenPositionProvider;
use crate::provider::PositionProvider;
use crate::screen::SharedScreen;

/// Corner placement over host-updated metrics.
///
/// Same formulas as [`PrimaryScreenPositionProvider`], but hosts can
/// subscribe and get told to reposition when the [`SharedScreen`] changes.
pub struct TrackingPositionProvider {
    inner: PrimaryScreenPositionProvider<SharedScreen>,
}

impl TrackingPositionProvider {
    pub fn new(corner: Corner, offset_x: f64, offset_y: f64, screen: SharedScreen) -> Self {
        Self {
            inner: PrimaryScreenPositionProvider::new(corner, offset_x, offset_y, screen),
        }
    }

    pub fn corner(&self) -> Corner {
        self.inner.corner()
    }

    pub fn taskbar_location(&self) -> TaskBarLocation {
        self.inner.taskbar_location()
    }

    pub fn screen(&self) -> &SharedScreen {
        self.inner.screen()
    }
}

impl PositionProvider for TrackingPositionProvider {
    fn position(&self, popup_width: f64, popup_height: f64) -> Point {
        self.inner.position(popup_width, popup_height)
    }

    fn eject_direction(&self) -> EjectDirection {
        self.inner.eject_direction()
    }

    fn height(&self) -> f64 {
        self.inner.height()
    }

    fn subscribe(&self) -> Option<Receiver<UpdateRequest>> {
        Some(self.inner.screen().subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use position_types::ScreenMetrics;

    #[test]
    fn test_reposition_after_taskbar_moves() {
        let screen = SharedScreen::new(ScreenMetrics::full(1920.0, 1080.0));
        let provider = TrackingPositionProvider::new(Corner::TopLeft, 10.0, 10.0, screen.clone());
        let updates = provider.subscribe().unwrap();

        assert_eq!(provider.position(300.0, 80.0), Point::new(10.0, 10.0));

        let next = ScreenMetrics::full(1920.0, 1080.0).with_work_area(48.0, 0.0, 1872.0, 1080.0);
        screen.update(next).unwrap();

        assert_eq!(updates.try_recv(), Ok(UpdateRequest::Position));
        assert_eq!(provider.taskbar_location(), TaskBarLocation::Left);
        assert_eq!(provider.position(300.0, 80.0), Point::new(58.0, 10.0));
    }

    #[test]
    fn test_height_follows_screen() {
        let screen = SharedScreen::new(ScreenMetrics::full(1920.0, 1080.0));
        let provider = TrackingPositionProvider::new(Corner::BottomLeft, 0.0, 0.0, screen.clone());
        let updates = provider.subscribe().unwrap();

        screen.update(ScreenMetrics::full(2560.0, 1440.0)).unwrap();

        let received: Vec<_> = updates.try_iter().collect();
        assert!(received.contains(&UpdateRequest::Height));
        assert_eq!(provider.height(), 1440.0);
    }

    #[test]
    fn test_never_requests_eject_direction() {
        let screen = SharedScreen::new(ScreenMetrics::full(1920.0, 1080.0));
        let provider = TrackingPositionProvider::new(Corner::TopRight, 0.0, 0.0, screen.clone());
        let updates = provider.subscribe().unwrap();

        screen.update(ScreenMetrics::full(1280.0, 720.0)).unwrap();
        let next = ScreenMetrics::full(1280.0, 720.0).with_work_area(0.0, 40.0, 1280.0, 680.0);
        screen.update(next).unwrap();

        assert!(updates.try_iter().all(|r| r != UpdateRequest::EjectDirection));
        assert_eq!(provider.eject_direction(), EjectDirection::ToBottom);
    }
}
