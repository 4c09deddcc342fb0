//! Widget events.
//!
//! Perch widgets only react to pointer taps. A host's input layer resolves a
//! press-and-release into a [`PointEvent`] and delivers it either through
//! [`Widget::event`](super::Widget::event) wrapped in a [`WidgetEvent`], or
//! straight to a [`Tappable`] widget.

use perch_render::Point;

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A pointer event at a single location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position relative to the receiving widget.
    pub position: Point,
    /// Position relative to the canvas.
    pub absolute_position: Point,
}

impl PointEvent {
    /// Create an event for a widget that sits at the canvas origin, where
    /// local and canvas coordinates coincide.
    pub fn new(position: Point) -> Self {
        Self::with_positions(position, position)
    }

    /// Create an event with distinct local and canvas positions.
    pub fn with_positions(position: Point, absolute_position: Point) -> Self {
        Self {
            base: EventBase::new(),
            position,
            absolute_position,
        }
    }
}

/// Events delivered through [`Widget::event`](super::Widget::event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// Primary-button tap.
    Tapped(PointEvent),
    /// Secondary-button tap (right click, long press).
    TappedSecondary(PointEvent),
}

impl WidgetEvent {
    /// The pointer data carried by this event.
    pub fn point(&self) -> &PointEvent {
        match self {
            Self::Tapped(e) | Self::TappedSecondary(e) => e,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.point().base.is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Tapped(e) | Self::TappedSecondary(e) => e.base.accept(),
        }
    }
}

/// Widgets that respond to taps.
pub trait Tappable {
    /// Handle a primary tap.
    fn tapped(&mut self, event: &PointEvent);

    /// Handle a secondary tap.
    fn tapped_secondary(&mut self, event: &PointEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept() {
        let mut event = WidgetEvent::Tapped(PointEvent::new(Point::new(3.0, 4.0)));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        assert_eq!(event.point().position, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_point_event_positions() {
        let event = PointEvent::with_positions(Point::new(1.0, 2.0), Point::new(11.0, 12.0));
        assert_eq!(event.position, Point::new(1.0, 2.0));
        assert_eq!(event.absolute_position, Point::new(11.0, 12.0));

        let origin = PointEvent::new(Point::new(5.0, 5.0));
        assert_eq!(origin.position, origin.absolute_position);
    }
}
