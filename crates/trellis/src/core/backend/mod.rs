use std::fmt::Debug;

use crate::event::Event;

/// The platform side of the run loop: something that collects window events
/// and presents finished frames. Platform integrations (a native window, a
/// test script) implement this.
pub trait EventSource: Debug {
    /// Drain the events that arrived since the last poll, oldest first.
    fn poll(&mut self) -> Vec<Event>;

    /// The frame has been drawn and can be shown.
    fn present(&mut self) {}
}
