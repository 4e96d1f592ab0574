//! Primitive layout types shared across the engine
//!
//! All types here are plain value types: no constraint objects are held,
//! derived geometry is recomputed from these inputs on demand.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in host coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Right edge X coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge Y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Requested panel size in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fixed gaps enforced between panel edges and host edges.
///
/// `leading`/`trailing` are the horizontal insets and are physical:
/// `leading` is the left-edge gap, `trailing` the right-edge gap. Direction
/// mirroring changes which edge a position anchors, never the insets.
/// All values are non-negative by contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Margins {
    /// No margins
    pub const ZERO: Self = Self {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    /// Create uniform margins
    pub fn all(size: f32) -> Self {
        Self {
            top: size,
            leading: size,
            bottom: size,
            trailing: size,
        }
    }

    /// Create horizontal/vertical margins
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }

    /// Total horizontal inset (leading + trailing)
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total vertical inset (top + bottom)
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Translation vector applied to a panel's resting frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}
