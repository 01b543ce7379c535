// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: turns touch and mouse input into horizontal drag sessions.
//!
//! ## Usage
//!
//! 1) On pointer-down, call [`PointerTracker::begin`] with the index that is active
//!    at that moment.
//! 2) On every pointer-move, call [`PointerTracker::move_to`]; while a session is
//!    open this moves the engine's current translate with the pointer.
//! 3) On pointer-up or pointer-leave, call [`PointerTracker::end`]; the first call
//!    snaps the engine's index and closes the session, later calls do nothing.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_carousel::pointer::{PointerInput, PointerTracker};
//! use understory_carousel::position::PositionEngine;
//!
//! let mut engine = PositionEngine::new(1, 5, Duration::from_millis(300));
//! engine.set_position_by_index(300.0);
//!
//! let mut tracker = PointerTracker::default();
//! tracker.begin(engine.index(), PointerInput::Mouse(Point::new(200.0, 10.0)));
//! tracker.move_to(&mut engine, PointerInput::Mouse(Point::new(50.0, 12.0)));
//! assert_eq!(engine.current_translate(), -450.0);
//!
//! let release = tracker.end(&mut engine, 100.0).unwrap();
//! assert_eq!(release.moved_by, -150.0);
//! assert_eq!(engine.index(), 2);
//! assert!(tracker.end(&mut engine, 100.0).is_none());
//! ```

use kurbo::Point;

use crate::position::PositionEngine;

/// One pointer sample from either input family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerInput<'a> {
    /// Mouse position.
    Mouse(Point),
    /// Active touch points, in the order the platform reports them.
    Touch(&'a [Point]),
}

impl PointerInput<'_> {
    /// Horizontal coordinate of the sample.
    ///
    /// Touch input uses the first touch point. A touch sample without any
    /// points (as reported on touch-end) has no coordinate.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        match self {
            Self::Mouse(p) => Some(p.x),
            Self::Touch(points) => points.first().map(|p| p.x),
        }
    }
}

impl From<Point> for PointerInput<'_> {
    fn from(p: Point) -> Self {
        Self::Mouse(p)
    }
}

/// State of an open drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer X where the drag began.
    pub start_x: f64,
    /// Pane that was active when the drag began.
    pub start_index: usize,
    /// Pointer X of the most recent move.
    pub last_x: f64,
}

/// Outcome of closing a drag session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragRelease {
    /// Pane that was active when the drag began.
    pub start_index: usize,
    /// Distance the strip moved away from its committed translate.
    pub moved_by: f64,
    /// Index the engine settled on.
    pub index: usize,
}

/// Tracks a single horizontal drag session.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    session: Option<DragSession>,
}

impl PointerTracker {
    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Opens a drag session at the input's horizontal coordinate.
    ///
    /// Returns the session, or `None` if the input carries no coordinate. A
    /// session that is already open is replaced.
    pub fn begin(&mut self, index: usize, input: PointerInput<'_>) -> Option<DragSession> {
        let x = input.x()?;
        let session = DragSession {
            start_x: x,
            start_index: index,
            last_x: x,
        };
        self.session = Some(session);
        Some(session)
    }

    /// Moves the engine's current translate with the pointer.
    ///
    /// Returns the new translate, or `None` when no session is open or the input
    /// has no coordinate.
    pub fn move_to(
        &mut self,
        engine: &mut PositionEngine,
        input: PointerInput<'_>,
    ) -> Option<f64> {
        let session = self.session.as_mut()?;
        let x = input.x()?;
        session.last_x = x;
        let translate = engine.committed_translate() + (x - session.start_x);
        engine.track(translate);
        Some(translate)
    }

    /// Closes the session and snaps the engine's index.
    ///
    /// Only the first call after [`begin`](Self::begin) has an effect.
    pub fn end(&mut self, engine: &mut PositionEngine, threshold: f64) -> Option<DragRelease> {
        let session = self.session.take()?;
        let moved_by = engine.moved_by();
        let index = engine.snap_on_release(moved_by, threshold);
        Some(DragRelease {
            start_index: session.start_index,
            moved_by,
            index,
        })
    }

    /// Drops the session without snapping.
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
