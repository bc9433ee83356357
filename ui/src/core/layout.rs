//! Layout state for the full-width insights page.

/// Viewport width above which the full-width section gets percentage side
/// padding.
pub const WIDE_VIEWPORT_MIN_PX: f64 = 1600.0;

const WIDE_SIDE_PADDING: &str = "5%";

/// Mutable layout facts for the insights page. The view derives the wrapper
/// class and the section style from this on every render.
///
/// Once the wide padding has been applied it stays applied: shrinking the
/// viewport back under the threshold does not clear it, mirroring the page's
/// long-standing behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    fluid: bool,
    wide_padding: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate the layout for the current viewport width. Runs when the
    /// page mounts and again on every window resize.
    pub fn apply(&mut self, viewport_width: f64) {
        // One-time swap to the fluid wrapper; repeated calls are no-ops.
        self.fluid = true;
        if viewport_width > WIDE_VIEWPORT_MIN_PX {
            self.wide_padding = true;
        }
    }

    /// Class for the inner content wrapper: fixed-width until the first
    /// `apply`, fluid afterwards.
    pub fn container_class(&self) -> &'static str {
        if self.fluid {
            "container-fluid"
        } else {
            "container"
        }
    }

    /// Inline style for the full-width section; empty while no padding
    /// applies.
    pub fn section_style(&self) -> String {
        if self.wide_padding {
            format!("padding-left: {WIDE_SIDE_PADDING}; padding-right: {WIDE_SIDE_PADDING};")
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_fixed_width_wrapper() {
        let layout = LayoutState::new();
        assert_eq!(layout.container_class(), "container");
        assert_eq!(layout.section_style(), "");
    }

    #[test]
    fn first_apply_swaps_to_the_fluid_wrapper() {
        let mut layout = LayoutState::new();
        layout.apply(1000.0);
        assert_eq!(layout.container_class(), "container-fluid");
        assert_eq!(layout.section_style(), "");

        // Reapplying is a no-op.
        layout.apply(1000.0);
        assert_eq!(layout.container_class(), "container-fluid");
    }

    #[test]
    fn wide_viewports_get_side_padding() {
        let mut layout = LayoutState::new();
        layout.apply(2000.0);
        assert_eq!(
            layout.section_style(),
            "padding-left: 5%; padding-right: 5%;"
        );
    }

    #[test]
    fn threshold_width_is_not_wide() {
        let mut layout = LayoutState::new();
        layout.apply(WIDE_VIEWPORT_MIN_PX);
        assert_eq!(layout.section_style(), "");
    }

    #[test]
    fn padding_is_not_cleared_when_the_viewport_shrinks() {
        let mut layout = LayoutState::new();
        layout.apply(2000.0);
        layout.apply(1200.0);
        assert_eq!(
            layout.section_style(),
            "padding-left: 5%; padding-right: 5%;"
        );
    }
}
