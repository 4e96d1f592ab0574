//! Offscreen offset calculation for the hidden state
//!
//! Computes the translation that moves a panel fully outside its host's
//! visible bounds. The engine only produces target offsets; interpolating
//! toward them is the animation driver's job.

use serde::{Deserialize, Serialize};

use crate::geometry::{Margins, Offset, Size};
use crate::position::{HorizontalAnchor, LayoutDirection, PanelPosition, VerticalAnchor};

/// Extra horizontal travel past the host edge so no sliver of the panel
/// stays visible on displays with rounded or irregular edges.
pub const OFFSCREEN_PADDING: f32 = 20.0;

/// Which axes a corner panel travels along when hiding.
///
/// Edge positions ignore these flags: they always slide along their own
/// axis and zero the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisFlags {
    pub along_x: bool,
    pub along_y: bool,
}

impl Default for AxisFlags {
    fn default() -> Self {
        Self {
            along_x: true,
            along_y: false,
        }
    }
}

/// Compute the translation that parks a panel outside the host.
///
/// Base magnitudes cover the panel plus both margins on each axis (plus
/// [`OFFSCREEN_PADDING`] horizontally); the sign sends the panel toward its
/// anchored edge, so a `TopLeading` panel exits left and/or up. `Custom`
/// returns [`Offset::ZERO`]: the caller's own geometry stays authoritative.
pub fn hidden_offset(
    position: PanelPosition,
    panel_size: Size,
    margins: Margins,
    direction: LayoutDirection,
    flags: AxisFlags,
) -> Offset {
    let base_dx = panel_size.width + margins.horizontal() + OFFSCREEN_PADDING;
    let base_dy = panel_size.height + margins.vertical();

    // Sign toward the anchored edge; Fill axes have no exit direction.
    let dx = match position.horizontal_anchor(direction) {
        Some(HorizontalAnchor::Start) => -base_dx,
        Some(HorizontalAnchor::End) => base_dx,
        Some(HorizontalAnchor::Fill) | None => 0.0,
    };
    let dy = match position.vertical_anchor() {
        Some(VerticalAnchor::Start) => -base_dy,
        Some(VerticalAnchor::End) => base_dy,
        Some(VerticalAnchor::Fill) | None => 0.0,
    };

    match position {
        PanelPosition::Custom => Offset::ZERO,
        // Full-width bars slide vertically only
        PanelPosition::Top | PanelPosition::Bottom => Offset::new(0.0, dy),
        // Full-height sidebars slide horizontally only
        PanelPosition::Leading
        | PanelPosition::Trailing
        | PanelPosition::Left
        | PanelPosition::Right => Offset::new(dx, 0.0),
        // Corners: each axis independently toggled by the caller's flags
        PanelPosition::TopLeading
        | PanelPosition::TopTrailing
        | PanelPosition::BottomLeading
        | PanelPosition::BottomTrailing
        | PanelPosition::TopLeft
        | PanelPosition::TopRight
        | PanelPosition::BottomLeft
        | PanelPosition::BottomRight => Offset::new(
            if flags.along_x { dx } else { 0.0 },
            if flags.along_y { dy } else { 0.0 },
        ),
    }
}
