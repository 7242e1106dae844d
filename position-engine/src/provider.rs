use crossbeam_channel::Receiver;
use position_types::{EjectDirection, Point, UpdateRequest};

/// Placement capability a notification host talks to.
///
/// Hosts hold providers as `Box<dyn PositionProvider>` and treat every
/// variant the same way: ask for a position once per popup shown, read the
/// eject direction to decide stacking, and listen for update requests when the
/// provider offers them.
pub trait PositionProvider {
    /// Top-left corner, in absolute screen coordinates, for a popup of the given size
    fn position(&self, popup_width: f64, popup_height: f64) -> Point;

    fn eject_direction(&self) -> EjectDirection;

    /// Height the host may lay popups out against
    fn height(&self) -> f64;

    /// Stream of requests to re-query this provider.
    ///
    /// `None` means the provider is static and never asks.
    fn subscribe(&self) -> Option<Receiver<UpdateRequest>> {
        None
    }

    /// Release anything held for the host. Called once at host shutdown.
    fn dispose(&mut self) {}
}
