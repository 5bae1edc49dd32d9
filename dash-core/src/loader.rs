//! Loading overlay state.

/// DOM id of the overlay element.
pub const LOADER_ID: &str = "loader";

/// Screen-reader label inside the spinner.
pub const LOADER_LABEL: &str = "Cargando...";

/// The single full-page overlay shown while a refresh is in flight.
///
/// The element does not exist until the first `show` call; after that it is
/// reused and only its visibility changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderOverlay {
    created: bool,
    visible: bool,
}

impl LoaderOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, show: bool) {
        self.created = true;
        self.visible = show;
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS `display` value for the overlay element.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_lazily() {
        let mut loader = LoaderOverlay::new();
        assert!(!loader.is_created());
        loader.show(false);
        assert!(loader.is_created());
        assert!(!loader.is_visible());
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut loader = LoaderOverlay::new();
        loader.show(true);
        loader.show(true);
        assert!(loader.is_visible());
        assert_eq!(loader.display(), "block");
        loader.show(false);
        loader.show(false);
        assert_eq!(loader.display(), "none");
    }
}
