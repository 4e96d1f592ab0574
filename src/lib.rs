//! floatpane - floating panel layout engine
//!
//! This crate computes the geometry for a floating panel pinned to an edge
//! or corner of a host rectangle: declarative edge rules ([`Placement`]),
//! soft-constrained sizing, and the offscreen translation used for
//! slide-to-hide animation. It holds no constraint objects and runs no
//! animations; an external constraint solver and animation driver consume
//! its output.

pub mod config;
pub mod geometry;
pub mod offscreen;
pub mod panel;
pub mod placement;
pub mod position;

// Re-export commonly used types
pub use config::PanelConfig;
pub use geometry::{Margins, Offset, Rect, Size};
pub use offscreen::{hidden_offset, AxisFlags, OFFSCREEN_PADDING};
pub use panel::{FloatingPanel, SpringTiming, Visibility};
pub use placement::{
    resolve_frame, resolve_placement, size_policy, AxisRule, Placement, SizePolicy,
};
pub use position::{LayoutDirection, PanelPosition};
