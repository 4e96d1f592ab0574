//! Panel positions and direction-aware anchor resolution
//!
//! `PanelPosition` is the full preset set: four edges, eight corners (both
//! the mirroring `leading`/`trailing` family and the physical `left`/`right`
//! family), and `Custom`. Every consumer matches it exhaustively so adding a
//! variant is a compile error at each dispatch site.

use serde::{Deserialize, Serialize};

/// Preset position of a floating panel within its host.
///
/// `Leading`/`Trailing` variants mirror under right-to-left layout;
/// `Left`/`Right` variants always bind to the physical host edge. `Custom`
/// means the caller manages placement entirely: no rules are generated and
/// hide/show geometry is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelPosition {
    Top,
    Bottom,
    Leading,
    Trailing,
    Left,
    Right,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Custom,
}

/// Writing direction of the host layout.
///
/// The explicit "mirror for RTL" switch: `Leading`/`Trailing` positions
/// resolve against it, `Left`/`Right` positions bypass it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Resolved anchor for the horizontal axis after direction mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HorizontalAnchor {
    /// Pin the left edge
    Start,
    /// Pin the right edge
    End,
    /// Pin both edges (full-width stretch)
    Fill,
}

/// Resolved anchor for the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerticalAnchor {
    /// Pin the top edge
    Start,
    /// Pin the bottom edge
    End,
    /// Pin both edges (full-height stretch)
    Fill,
}

impl PanelPosition {
    /// All preset positions for iteration
    pub const ALL: [PanelPosition; 15] = [
        PanelPosition::Top,
        PanelPosition::Bottom,
        PanelPosition::Leading,
        PanelPosition::Trailing,
        PanelPosition::Left,
        PanelPosition::Right,
        PanelPosition::TopLeading,
        PanelPosition::TopTrailing,
        PanelPosition::BottomLeading,
        PanelPosition::BottomTrailing,
        PanelPosition::TopLeft,
        PanelPosition::TopRight,
        PanelPosition::BottomLeft,
        PanelPosition::BottomRight,
        PanelPosition::Custom,
    ];

    /// Whether this is the caller-managed position
    pub fn is_custom(&self) -> bool {
        matches!(self, PanelPosition::Custom)
    }

    /// Edge positions stretch across one full axis of the host
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            PanelPosition::Top
                | PanelPosition::Bottom
                | PanelPosition::Leading
                | PanelPosition::Trailing
                | PanelPosition::Left
                | PanelPosition::Right
        )
    }

    /// Corner positions pin exactly one edge per axis
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            PanelPosition::TopLeading
                | PanelPosition::TopTrailing
                | PanelPosition::BottomLeading
                | PanelPosition::BottomTrailing
                | PanelPosition::TopLeft
                | PanelPosition::TopRight
                | PanelPosition::BottomLeft
                | PanelPosition::BottomRight
        )
    }

    /// Resolve the horizontal anchor, applying direction mirroring to the
    /// `Leading`/`Trailing` family. Returns `None` for `Custom`.
    pub(crate) fn horizontal_anchor(&self, direction: LayoutDirection) -> Option<HorizontalAnchor> {
        let mirrored = direction == LayoutDirection::RightToLeft;
        match self {
            PanelPosition::Top | PanelPosition::Bottom => Some(HorizontalAnchor::Fill),
            PanelPosition::Leading | PanelPosition::TopLeading | PanelPosition::BottomLeading => {
                Some(if mirrored {
                    HorizontalAnchor::End
                } else {
                    HorizontalAnchor::Start
                })
            }
            PanelPosition::Trailing
            | PanelPosition::TopTrailing
            | PanelPosition::BottomTrailing => Some(if mirrored {
                HorizontalAnchor::Start
            } else {
                HorizontalAnchor::End
            }),
            PanelPosition::Left | PanelPosition::TopLeft | PanelPosition::BottomLeft => {
                Some(HorizontalAnchor::Start)
            }
            PanelPosition::Right | PanelPosition::TopRight | PanelPosition::BottomRight => {
                Some(HorizontalAnchor::End)
            }
            PanelPosition::Custom => None,
        }
    }

    /// Resolve the vertical anchor. Vertical placement never mirrors.
    /// Returns `None` for `Custom`.
    pub(crate) fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        match self {
            PanelPosition::Top
            | PanelPosition::TopLeading
            | PanelPosition::TopTrailing
            | PanelPosition::TopLeft
            | PanelPosition::TopRight => Some(VerticalAnchor::Start),
            PanelPosition::Bottom
            | PanelPosition::BottomLeading
            | PanelPosition::BottomTrailing
            | PanelPosition::BottomLeft
            | PanelPosition::BottomRight => Some(VerticalAnchor::End),
            PanelPosition::Leading
            | PanelPosition::Trailing
            | PanelPosition::Left
            | PanelPosition::Right => Some(VerticalAnchor::Fill),
            PanelPosition::Custom => None,
        }
    }
}
