//! Table zoom and fit-to-width state.

pub const MIN_ZOOM: u16 = 50;
pub const MAX_ZOOM: u16 = 150;
pub const ZOOM_STEP: u16 = 25;
pub const DEFAULT_ZOOM: u16 = 100;

/// Pixels of overflow ignored before the wrapper counts as scrollable
pub const SCROLL_TOLERANCE_PX: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    level: u16,
    fit_width: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { level: DEFAULT_ZOOM, fit_width: false }
    }
}

impl ZoomState {
    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn is_fit_width(&self) -> bool {
        self.fit_width
    }

    pub fn can_zoom_in(&self) -> bool {
        self.fit_width || self.level < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.fit_width || self.level > MIN_ZOOM
    }

    pub fn zoom_in(&mut self) {
        self.fit_width = false;
        self.level = (self.level + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.fit_width = false;
        self.level = self.level.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Leaving fit mode restores the zoom level in use before it.
    pub fn toggle_fit_width(&mut self) {
        self.fit_width = !self.fit_width;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Text for the zoom indicator
    pub fn label(&self) -> String {
        if self.fit_width {
            "Fit".to_string()
        } else {
            format!("{}%", self.level)
        }
    }

    /// Extra classes for the table wrapper
    pub fn wrapper_classes(&self) -> Vec<String> {
        if self.fit_width {
            vec!["fit-width".to_string()]
        } else if self.level != DEFAULT_ZOOM {
            vec![format!("zoom-{}", self.level)]
        } else {
            Vec::new()
        }
    }
}

/// True when the table overflows its wrapper by more than the tolerance
pub fn is_scrollable(scroll_width: i32, client_width: i32) -> bool {
    scroll_width > client_width + SCROLL_TOLERANCE_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut zoom = ZoomState::default();
        assert_eq!(zoom.label(), "100%");

        for _ in 0..10 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.level(), MAX_ZOOM);
        assert!(!zoom.can_zoom_in());

        for _ in 0..10 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.level(), MIN_ZOOM);
        assert!(!zoom.can_zoom_out());
        assert_eq!(zoom.wrapper_classes(), vec!["zoom-50".to_string()]);
    }

    #[test]
    fn test_steps_of_twenty_five() {
        let mut zoom = ZoomState::default();
        zoom.zoom_out();
        assert_eq!(zoom.level(), 75);
        zoom.zoom_in();
        zoom.zoom_in();
        assert_eq!(zoom.level(), 125);
    }

    #[test]
    fn test_fit_width_restores_previous_zoom() {
        let mut zoom = ZoomState::default();
        zoom.zoom_in();
        zoom.toggle_fit_width();
        assert!(zoom.is_fit_width());
        assert_eq!(zoom.label(), "Fit");
        assert_eq!(zoom.wrapper_classes(), vec!["fit-width".to_string()]);

        zoom.toggle_fit_width();
        assert_eq!(zoom.label(), "125%");
    }

    #[test]
    fn test_zooming_leaves_fit_mode() {
        let mut zoom = ZoomState::default();
        zoom.toggle_fit_width();
        zoom.zoom_out();
        assert!(!zoom.is_fit_width());
        assert_eq!(zoom.level(), 75);
    }

    #[test]
    fn test_default_zoom_adds_no_class() {
        assert!(ZoomState::default().wrapper_classes().is_empty());
    }

    #[test]
    fn test_scrollable_tolerance() {
        assert!(!is_scrollable(801, 800));
        assert!(is_scrollable(802, 800));
        assert!(!is_scrollable(600, 800));
    }
}
