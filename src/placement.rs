//! Position and size resolution
//!
//! Pure functions that turn a preset position plus margins into edge rules,
//! and optionally into a concrete frame within a host rectangle. These are
//! the single source of truth shared by the stateful panel model and by
//! callers that feed a constraint solver directly.

use crate::geometry::{Margins, Rect, Size};
use crate::position::{HorizontalAnchor, LayoutDirection, PanelPosition, VerticalAnchor};

/// Edge-anchoring rule for one axis.
///
/// Insets are measured inward from the named host edge. `Fill` pins both
/// edges, so the panel stretches across the axis and any requested size on
/// that axis is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRule {
    /// Fixed inset from the host's start edge (left or top)
    Start(f32),
    /// Fixed inset from the host's end edge (right or bottom)
    End(f32),
    /// Both edges pinned: full stretch minus the two insets
    Fill { start: f32, end: f32 },
    /// No rule; the caller owns placement on this axis (`Custom` only)
    Unconstrained,
}

impl AxisRule {
    /// Whether this axis carries an active rule
    pub fn is_active(&self) -> bool {
        !matches!(self, AxisRule::Unconstrained)
    }
}

/// Resolved edge rules for both axes.
///
/// Invariant: for non-custom positions exactly one rule is active per axis;
/// for `Custom` both axes are `Unconstrained`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub horizontal: AxisRule,
    pub vertical: AxisRule,
}

impl Placement {
    /// Placement with no active rules (caller-managed)
    pub const UNCONSTRAINED: Self = Self {
        horizontal: AxisRule::Unconstrained,
        vertical: AxisRule::Unconstrained,
    };
}

/// Which components of a requested size survive resolution.
///
/// An axis that resolves to `Fill` already pins both edges, so its size
/// component is dropped rather than fought over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    pub apply_width: bool,
    pub apply_height: bool,
}

/// Resolve the edge rules for a position.
///
/// Corner positions pin one edge per axis; edge positions fill one axis and
/// pin one edge of the other; `Custom` generates nothing. The result is a
/// pure function of the inputs and fully supersedes any previous placement.
pub fn resolve_placement(
    position: PanelPosition,
    margins: Margins,
    direction: LayoutDirection,
) -> Placement {
    let horizontal = match position.horizontal_anchor(direction) {
        Some(HorizontalAnchor::Start) => AxisRule::Start(margins.leading),
        Some(HorizontalAnchor::End) => AxisRule::End(margins.trailing),
        Some(HorizontalAnchor::Fill) => AxisRule::Fill {
            start: margins.leading,
            end: margins.trailing,
        },
        None => AxisRule::Unconstrained,
    };

    let vertical = match position.vertical_anchor() {
        Some(VerticalAnchor::Start) => AxisRule::Start(margins.top),
        Some(VerticalAnchor::End) => AxisRule::End(margins.bottom),
        Some(VerticalAnchor::Fill) => AxisRule::Fill {
            start: margins.top,
            end: margins.bottom,
        },
        None => AxisRule::Unconstrained,
    };

    Placement {
        horizontal,
        vertical,
    }
}

/// Decide which size components apply for a position.
pub fn size_policy(position: PanelPosition) -> SizePolicy {
    match position {
        // Full-width bars: horizontal edges already fix both sides
        PanelPosition::Top | PanelPosition::Bottom => SizePolicy {
            apply_width: false,
            apply_height: true,
        },
        // Full-height sidebars: vertical edges already fix both sides
        PanelPosition::Leading
        | PanelPosition::Trailing
        | PanelPosition::Left
        | PanelPosition::Right => SizePolicy {
            apply_width: true,
            apply_height: false,
        },
        PanelPosition::TopLeading
        | PanelPosition::TopTrailing
        | PanelPosition::BottomLeading
        | PanelPosition::BottomTrailing
        | PanelPosition::TopLeft
        | PanelPosition::TopRight
        | PanelPosition::BottomLeft
        | PanelPosition::BottomRight
        | PanelPosition::Custom => SizePolicy {
            apply_width: true,
            apply_height: true,
        },
    }
}

/// Resolve a concrete frame in host coordinates.
///
/// The requested size is a soft constraint: margins and edge pinning always
/// win, so an oversized request shrinks to the space the host leaves
/// available rather than violating a margin. Returns `None` for `Custom`,
/// where the caller owns placement entirely.
pub fn resolve_frame(
    position: PanelPosition,
    size: Size,
    margins: Margins,
    host: Rect,
    direction: LayoutDirection,
) -> Option<Rect> {
    if position.is_custom() {
        return None;
    }

    let placement = resolve_placement(position, margins, direction);

    let (x, width) = resolve_axis(
        placement.horizontal,
        host.x,
        host.width,
        size.width,
        margins.leading,
        margins.trailing,
    );
    let (y, height) = resolve_axis(
        placement.vertical,
        host.y,
        host.height,
        size.height,
        margins.top,
        margins.bottom,
    );

    Some(Rect::new(x, y, width, height))
}

/// Resolve one axis of a frame: pinned edge position plus soft-clamped extent.
fn resolve_axis(
    rule: AxisRule,
    origin: f32,
    extent: f32,
    requested: f32,
    start_margin: f32,
    end_margin: f32,
) -> (f32, f32) {
    let available = (extent - start_margin - end_margin).max(0.0);
    match rule {
        AxisRule::Start(inset) => (origin + inset, requested.clamp(0.0, available)),
        AxisRule::End(inset) => {
            let length = requested.clamp(0.0, available);
            (origin + extent - inset - length, length)
        }
        AxisRule::Fill { start, end } => (origin + start, (extent - start - end).max(0.0)),
        AxisRule::Unconstrained => (origin, requested),
    }
}
