//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use floatpane::{FloatingPanel, Margins, PanelPosition, Rect, Size};

/// Standard host rectangle used across tests (800x600 at origin)
pub fn host() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

/// Create a 100x50 panel with uniform 10pt margins at the given position
pub fn test_panel(position: PanelPosition) -> FloatingPanel {
    let mut panel = FloatingPanel::new(position, Size::new(100.0, 50.0));
    panel.set_margins(Margins::all(10.0));
    panel
}

/// All positions except `Custom`
pub fn non_custom_positions() -> impl Iterator<Item = PanelPosition> {
    PanelPosition::ALL.into_iter().filter(|p| !p.is_custom())
}
