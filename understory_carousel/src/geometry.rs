// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport measurement.
//!
//! The carousel never computes its own size. Hosts implement [`GeometryProbe`]
//! over whatever layout primitive they have (a DOM element, a layout node, a
//! window region) and the carousel asks it for the current [`Dimensions`]
//! whenever a resize is signalled.

use kurbo::Size;

/// Measured size of the carousel viewport in pixels.
///
/// Before the first measurement both extents are zero, which makes every
/// index map to a translate of zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions(pub Size);

impl Dimensions {
    /// Zero-sized dimensions, used until the viewport is first measured.
    pub const ZERO: Self = Self(Size::ZERO);

    /// Creates dimensions from a width and height in pixels.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self(Size::new(width, height))
    }

    /// Width of one pane.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.0.width
    }

    /// Height of the viewport.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.0.height
    }

    /// Returns `true` if the viewport has not produced a usable width yet.
    #[must_use]
    pub fn is_unmeasured(&self) -> bool {
        self.0.width.is_nan() || self.0.width <= 0.0
    }
}

impl From<Size> for Dimensions {
    fn from(size: Size) -> Self {
        Self(size)
    }
}

/// Black-box measurement of the rendered viewport.
pub trait GeometryProbe {
    /// Returns the current viewport size, or `None` when the render surface
    /// is not attached.
    fn measure(&self) -> Option<Size>;

    /// Measures and normalizes into [`Dimensions`].
    ///
    /// A detached surface, or a non-finite or negative extent, degrades to
    /// zero so that positioning falls back to a translate of zero.
    fn dimensions(&self) -> Dimensions {
        match self.measure() {
            Some(size) => Dimensions::new(sanitize(size.width), sanitize(size.height)),
            None => Dimensions::ZERO,
        }
    }
}

impl GeometryProbe for Size {
    fn measure(&self) -> Option<Size> {
        Some(*self)
    }
}

impl GeometryProbe for Option<Size> {
    fn measure(&self) -> Option<Size> {
        *self
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}
