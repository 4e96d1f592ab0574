//! Floating panel state
//!
//! `FloatingPanel` owns the current position, margins, size, and visibility.
//! All derived geometry (placement rules, frames, hide offsets) is recomputed
//! from these fields on demand; every reposition fully supersedes the previous
//! placement, nothing is cached or merged.
//!
//! Visibility is a two-state machine: `Visible` targets offset `(0,0)`,
//! `Hidden` targets the computed offscreen offset. A new transition simply
//! replaces the target; any in-flight animation is the driver's concern.

use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;
use crate::geometry::{Margins, Offset, Rect, Size};
use crate::offscreen::{hidden_offset, AxisFlags};
use crate::placement::{resolve_frame, resolve_placement, size_policy, Placement, SizePolicy};
use crate::position::{LayoutDirection, PanelPosition};

/// Damped-spring parameters handed to the animation driver.
///
/// The engine does not interpolate anything; it carries these alongside the
/// target offset so the driver can play the transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringTiming {
    pub duration_secs: f32,
    pub damping_ratio: f32,
    pub initial_velocity: f32,
}

impl Default for SpringTiming {
    fn default() -> Self {
        Self {
            duration_secs: 0.42,
            damping_ratio: 0.8,
            initial_velocity: 1.0,
        }
    }
}

/// Panel visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// A floating panel pinned to an edge or corner of its host.
///
/// Fields may be set directly; the mutator methods exist for the transitions
/// that carry extra behavior (logging, the `Custom` hide no-op).
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingPanel {
    pub position: PanelPosition,
    pub margins: Margins,
    pub size: Size,
    pub direction: LayoutDirection,
    pub hide_flags: AxisFlags,
    pub visibility: Visibility,
    pub spring: SpringTiming,
}

impl FloatingPanel {
    /// Create a visible panel at the given position
    pub fn new(position: PanelPosition, size: Size) -> Self {
        Self {
            position,
            margins: Margins::ZERO,
            size,
            direction: LayoutDirection::default(),
            hide_flags: AxisFlags::default(),
            visibility: Visibility::Visible,
            spring: SpringTiming::default(),
        }
    }

    /// Build a panel from a configuration document
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            position: config.position,
            margins: config.margins,
            size: config.size,
            direction: config.direction,
            hide_flags: config.hide_flags,
            visibility: Visibility::Visible,
            spring: config.spring,
        }
    }

    /// Move the panel to a new preset position.
    ///
    /// The previous placement is discarded entirely; callers should re-query
    /// `placement()`/`frame()` afterwards.
    pub fn set_position(&mut self, position: PanelPosition) {
        tracing::debug!(from = ?self.position, to = ?position, "panel repositioned");
        self.position = position;
    }

    /// Replace the margins
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    /// Replace the requested size
    pub fn resize(&mut self, size: Size) {
        tracing::debug!(width = size.width, height = size.height, "panel resized");
        self.size = size;
    }

    /// Switch the host's layout direction
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Set the hide-travel axes used by corner positions
    pub fn set_hide_flags(&mut self, flags: AxisFlags) {
        self.hide_flags = flags;
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Transition to `Visible`. The target offset becomes `(0,0)`.
    pub fn show(&mut self) {
        if self.visibility != Visibility::Visible {
            tracing::debug!(position = ?self.position, "panel shown");
        }
        self.visibility = Visibility::Visible;
    }

    /// Transition to `Hidden`. The target offset becomes the offscreen vector.
    ///
    /// For `Custom` positions this is an explicit no-op: the caller owns the
    /// panel's geometry, so default hide/show travel does not apply.
    pub fn hide(&mut self) {
        if self.position.is_custom() {
            tracing::debug!("hide ignored for custom position");
            return;
        }
        if self.visibility != Visibility::Hidden {
            tracing::debug!(position = ?self.position, "panel hidden");
        }
        self.visibility = Visibility::Hidden;
    }

    /// Toggle between `Visible` and `Hidden`
    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Visible => self.hide(),
            Visibility::Hidden => self.show(),
        }
    }

    /// Current edge rules for this panel
    pub fn placement(&self) -> Placement {
        resolve_placement(self.position, self.margins, self.direction)
    }

    /// Which components of the requested size apply at this position
    pub fn size_policy(&self) -> SizePolicy {
        size_policy(self.position)
    }

    /// Concrete resting frame within the host, `None` for `Custom`
    pub fn frame(&self, host: Rect) -> Option<Rect> {
        resolve_frame(self.position, self.size, self.margins, host, self.direction)
    }

    /// Translation target for the current visibility state.
    ///
    /// `(0,0)` when visible; the offscreen vector when hidden. The animation
    /// driver interpolates the panel's transform toward this value using
    /// [`SpringTiming`].
    pub fn target_offset(&self) -> Offset {
        match self.visibility {
            Visibility::Visible => Offset::ZERO,
            Visibility::Hidden => hidden_offset(
                self.position,
                self.size,
                self.margins,
                self.direction,
                self.hide_flags,
            ),
        }
    }
}
