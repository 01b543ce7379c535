// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output contract toward the pane renderer.
//!
//! The carousel does not draw. Each time its translate changes it hands a
//! [`StripFrame`] to the host's [`PaneRenderer`], which positions the pane
//! strip and may scale individual panes with [`pane_scale`].

use crate::geometry::Dimensions;
use crate::position::Transition;

/// Smallest scale applied to the active pane when a drag spans a full width.
pub const MIN_DRAG_SCALE: f64 = 0.9;

/// Everything the renderer needs to present the strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripFrame {
    /// Horizontal translate of the pane strip, in pixels.
    pub translate: f64,
    /// Measured viewport size.
    pub dimensions: Dimensions,
    /// How to move from the previous translate to this one.
    pub transition: Transition,
    /// Host opted into drag-proportional pane scaling.
    pub scale_on_drag: bool,
    /// Distance from the committed translate while a drag is open.
    pub drag_offset: Option<f64>,
}

/// Host-side renderer of the pane strip.
pub trait PaneRenderer {
    /// Presents `frame`.
    fn render(&mut self, frame: &StripFrame);
}

impl<R: PaneRenderer + ?Sized> PaneRenderer for &mut R {
    fn render(&mut self, frame: &StripFrame) {
        (**self).render(frame);
    }
}

/// Scale for pane `pane_index` when `active_index` is the committed pane.
///
/// Returns `1.0` unless scaling is enabled, a drag is open, and the pane is
/// the active one. The active pane then shrinks linearly with drag distance,
/// reaching [`MIN_DRAG_SCALE`] at one viewport width.
#[must_use]
pub fn pane_scale(frame: &StripFrame, pane_index: usize, active_index: usize) -> f64 {
    let Some(offset) = frame.drag_offset else {
        return 1.0;
    };
    if !frame.scale_on_drag || pane_index != active_index || frame.dimensions.is_unmeasured() {
        return 1.0;
    }
    let distance = if offset < 0.0 { -offset } else { offset };
    let progress = (distance / frame.dimensions.width()).min(1.0);
    1.0 - (1.0 - MIN_DRAG_SCALE) * progress
}
