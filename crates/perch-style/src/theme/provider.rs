//! Live theme access.

use std::sync::Arc;

use parking_lot::RwLock;
use perch_core::logging::targets;
use perch_core::Signal;
use perch_render::Color;

use super::{Theme, ThemeMode};

/// Source of the theme values overlays are laid out and painted with.
///
/// Implementations are queried on every layout and refresh, never cached by
/// the caller, so a provider whose values change is honored immediately.
pub trait ThemeProvider: Send + Sync {
    /// Uniform padding between a container's edge and its content.
    fn padding(&self) -> f32;

    /// Background fill for popups and other surfaces.
    fn background_color(&self) -> Color;

    /// Shadow tint, also used for the modal overlay.
    fn shadow_color(&self) -> Color;
}

impl ThemeProvider for Theme {
    fn padding(&self) -> f32 {
        self.padding
    }

    fn background_color(&self) -> Color {
        self.palette.background
    }

    fn shadow_color(&self) -> Color {
        self.palette.shadow
    }
}

struct HandleInner {
    theme: RwLock<Theme>,
    changed: Signal<ThemeMode>,
}

/// A shared, swappable theme.
///
/// Cloning the handle shares the same theme. [`set_theme`](Self::set_theme)
/// replaces it for every holder and emits [`changed`](Self::changed).
#[derive(Clone)]
pub struct ThemeHandle {
    inner: Arc<HandleInner>,
}

impl ThemeHandle {
    /// Create a handle around an initial theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                theme: RwLock::new(theme),
                changed: Signal::new(),
            }),
        }
    }

    /// A copy of the current theme.
    pub fn theme(&self) -> Theme {
        self.inner.theme.read().clone()
    }

    /// Replace the current theme.
    pub fn set_theme(&self, theme: Theme) {
        let mode = theme.mode;
        *self.inner.theme.write() = theme;
        tracing::debug!(target: targets::THEME, ?mode, "theme replaced");
        self.inner.changed.emit(mode);
    }

    /// Modify the current theme in place.
    pub fn update(&self, f: impl FnOnce(&mut Theme)) {
        let mode = {
            let mut theme = self.inner.theme.write();
            f(&mut theme);
            theme.mode
        };
        tracing::debug!(target: targets::THEME, ?mode, "theme updated");
        self.inner.changed.emit(mode);
    }

    /// Signal emitted after the theme changes, with the new mode.
    pub fn changed(&self) -> &Signal<ThemeMode> {
        &self.inner.changed
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("theme", &*self.inner.theme.read())
            .finish()
    }
}

impl ThemeProvider for ThemeHandle {
    fn padding(&self) -> f32 {
        self.inner.theme.read().padding
    }

    fn background_color(&self) -> Color {
        self.inner.theme.read().palette.background
    }

    fn shadow_color(&self) -> Color {
        self.inner.theme.read().palette.shadow
    }
}
