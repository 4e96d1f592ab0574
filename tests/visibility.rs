//! Tests for the show/hide state machine and offscreen offsets
//!
//! Covers sign conventions per position, axis flags for corners, and the
//! round-trip guarantee that showing restores the origin offset exactly.

mod common;

use common::{non_custom_positions, test_panel};
use floatpane::{
    hidden_offset, AxisFlags, LayoutDirection, Margins, Offset, PanelPosition, Size,
    OFFSCREEN_PADDING,
};

const LTR: LayoutDirection = LayoutDirection::LeftToRight;

// ============================================================================
// Offset Sign Tests
// ============================================================================

#[test]
fn test_leading_offset_magnitude_and_sign() {
    let offset = hidden_offset(
        PanelPosition::Leading,
        Size::new(100.0, 50.0),
        Margins {
            top: 10.0,
            leading: 10.0,
            bottom: 10.0,
            trailing: 10.0,
        },
        LTR,
        AxisFlags::default(),
    );

    assert_eq!(offset.dy, 0.0, "side panel never travels vertically");
    assert!(offset.dx < 0.0, "leading exits left");
    assert_eq!(offset.dx, -(100.0 + 10.0 + 10.0 + OFFSCREEN_PADDING));
}

#[test]
fn test_vertical_offsets_exclude_horizontal_padding() {
    let offset = hidden_offset(
        PanelPosition::Top,
        Size::new(100.0, 50.0),
        Margins::all(10.0),
        LTR,
        AxisFlags::default(),
    );

    assert_eq!(offset.dx, 0.0);
    // height + top + bottom margins; the padding is horizontal-only
    assert_eq!(offset.dy, -(50.0 + 10.0 + 10.0));
}

#[test]
fn test_each_edge_exits_toward_its_own_side() {
    let size = Size::new(100.0, 50.0);
    let margins = Margins::all(10.0);
    let flags = AxisFlags::default();

    let cases = [
        (PanelPosition::Leading, -1.0, 0.0),
        (PanelPosition::Left, -1.0, 0.0),
        (PanelPosition::Trailing, 1.0, 0.0),
        (PanelPosition::Right, 1.0, 0.0),
        (PanelPosition::Top, 0.0, -1.0),
        (PanelPosition::Bottom, 0.0, 1.0),
    ];

    // signum() maps +0.0 to 1.0, so classify zero explicitly
    fn sign(v: f32) -> f32 {
        if v > 0.0 {
            1.0
        } else if v < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    for (position, dx_sign, dy_sign) in cases {
        let offset = hidden_offset(position, size, margins, LTR, flags);
        assert_eq!(
            sign(offset.dx),
            dx_sign,
            "{:?} dx sign mismatch: {:?}",
            position,
            offset
        );
        assert_eq!(
            sign(offset.dy),
            dy_sign,
            "{:?} dy sign mismatch: {:?}",
            position,
            offset
        );
    }
}

#[test]
fn test_corner_diagonal_exit_with_both_axes() {
    let size = Size::new(100.0, 50.0);
    let margins = Margins::all(10.0);
    let both = AxisFlags {
        along_x: true,
        along_y: true,
    };

    let offset = hidden_offset(PanelPosition::TopTrailing, size, margins, LTR, both);
    assert!(offset.dx > 0.0, "topTrailing exits right: {:?}", offset);
    assert!(offset.dy < 0.0, "topTrailing exits up: {:?}", offset);

    let offset = hidden_offset(PanelPosition::BottomLeading, size, margins, LTR, both);
    assert!(offset.dx < 0.0, "bottomLeading exits left: {:?}", offset);
    assert!(offset.dy > 0.0, "bottomLeading exits down: {:?}", offset);
}

#[test]
fn test_corner_default_flags_slide_horizontally() {
    let offset = hidden_offset(
        PanelPosition::BottomRight,
        Size::new(100.0, 50.0),
        Margins::all(10.0),
        LTR,
        AxisFlags::default(),
    );
    assert!(offset.dx > 0.0);
    assert_eq!(offset.dy, 0.0, "Y travel is opt-in for corners");
}

// ============================================================================
// State Machine Tests
// ============================================================================

#[test]
fn test_show_after_hide_restores_origin_exactly() {
    for position in non_custom_positions() {
        let mut panel = test_panel(position);

        panel.hide();
        let hidden = panel.target_offset();
        assert_ne!(
            hidden,
            Offset::ZERO,
            "{:?} hidden target should move the panel",
            position
        );

        panel.show();
        assert_eq!(
            panel.target_offset(),
            Offset::ZERO,
            "{:?} show must restore exactly (0,0)",
            position
        );
    }
}

#[test]
fn test_repeated_transitions_are_stable() {
    let mut panel = test_panel(PanelPosition::Trailing);

    panel.hide();
    let first = panel.target_offset();
    panel.hide();
    assert_eq!(panel.target_offset(), first, "hide is idempotent");

    panel.show();
    panel.show();
    assert_eq!(panel.target_offset(), Offset::ZERO, "show is idempotent");
}

#[test]
fn test_custom_panel_refuses_to_hide() {
    let mut panel = test_panel(PanelPosition::Custom);

    panel.hide();
    assert!(panel.is_visible(), "hide is a no-op for custom positions");

    panel.toggle();
    assert!(panel.is_visible(), "toggle cannot hide a custom panel");
    assert_eq!(panel.target_offset(), Offset::ZERO);
}

#[test]
fn test_new_hide_request_overrides_target() {
    // Reposition while hidden: the target simply becomes the new vector,
    // no intermediate state exists.
    let mut panel = test_panel(PanelPosition::Leading);
    panel.hide();
    assert!(panel.target_offset().dx < 0.0);

    panel.set_position(PanelPosition::Trailing);
    assert!(
        panel.target_offset().dx > 0.0,
        "hidden target follows the new position immediately"
    );
}

#[test]
fn test_hide_flags_respected_through_panel() {
    let mut panel = test_panel(PanelPosition::TopLeading);
    panel.set_hide_flags(AxisFlags {
        along_x: false,
        along_y: true,
    });
    panel.hide();

    let offset = panel.target_offset();
    assert_eq!(offset.dx, 0.0);
    assert!(offset.dy < 0.0, "topLeading exits up when only Y is enabled");
}
