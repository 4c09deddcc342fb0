//! The overlay stack.

use perch_core::logging::targets;
use perch_core::ObjectId;

/// Ordered stack of overlay ids, bottom first.
///
/// The most recently added overlay is on top. Adding an id that is already
/// present, or removing one that is absent, is a no-op reported by the
/// `bool` return.
#[derive(Debug, Default, Clone)]
pub struct OverlayStack {
    entries: Vec<ObjectId>,
}

impl OverlayStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `id` on top. Returns `false` if it was already present.
    pub fn add(&mut self, id: ObjectId) -> bool {
        if self.entries.contains(&id) {
            tracing::trace!(target: targets::CANVAS, ?id, "overlay already present");
            return false;
        }
        self.entries.push(id);
        tracing::debug!(target: targets::CANVAS, ?id, depth = self.entries.len(), "overlay added");
        true
    }

    /// Remove `id` wherever it sits. Returns `false` if it was absent.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.entries.iter().position(|&entry| entry == id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(target: targets::CANVAS, ?id, depth = self.entries.len(), "overlay removed");
                true
            }
            None => {
                tracing::trace!(target: targets::CANVAS, ?id, "overlay not present");
                false
            }
        }
    }

    /// Check whether `id` is on the stack.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.contains(&id)
    }

    /// The topmost overlay.
    pub fn top(&self) -> Option<ObjectId> {
        self.entries.last().copied()
    }

    /// Number of overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no overlays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The overlay ids, bottom first.
    pub fn ids(&self) -> &[ObjectId] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::ObjectBase;

    struct Marker;

    #[test]
    fn test_add_is_idempotent() {
        let a = ObjectBase::new::<Marker>();
        let mut stack = OverlayStack::new();

        assert!(stack.add(a.id()));
        assert!(!stack.add(a.id()));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let a = ObjectBase::new::<Marker>();
        let mut stack = OverlayStack::new();
        stack.add(a.id());

        assert!(stack.remove(a.id()));
        assert!(!stack.remove(a.id()));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_order() {
        let a = ObjectBase::new::<Marker>();
        let b = ObjectBase::new::<Marker>();
        let c = ObjectBase::new::<Marker>();
        let mut stack = OverlayStack::new();

        stack.add(a.id());
        stack.add(b.id());
        stack.add(c.id());
        assert_eq!(stack.top(), Some(c.id()));

        // Removing from the middle keeps the others in order.
        stack.remove(b.id());
        assert_eq!(stack.ids(), &[a.id(), c.id()]);
        assert!(!stack.contains(b.id()));
        assert_eq!(stack.top(), Some(c.id()));
    }
}
