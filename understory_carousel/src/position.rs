// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position engine: the authoritative pane index and the pixel translate of the strip.
//!
//! ## Model
//!
//! Panes are laid out edge to edge along X, each one viewport wide. Showing pane
//! `i` means translating the strip by `i * -width`. The engine keeps two
//! translates:
//!
//! - the *committed* translate, which always equals `index * -width` once a
//!   transition has been applied, and
//! - the *current* translate, which follows the pointer while a drag is open and
//!   otherwise equals the committed one.
//!
//! Drag deltas are measured against the committed translate, so a drag never
//! reads a value it wrote itself.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_carousel::position::PositionEngine;
//!
//! let mut engine = PositionEngine::new(1, 5, Duration::from_millis(300));
//! assert_eq!(engine.set_position_by_index(300.0), -300.0);
//!
//! // A release 150px to the left of where the drag started moves forward one pane.
//! engine.snap_on_release(-150.0, 100.0);
//! assert_eq!(engine.index(), 2);
//! assert_eq!(engine.set_position_by_index(300.0), -600.0);
//! ```

use core::time::Duration;

/// How the next translate change should be presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump straight to the new translate (pointer tracking, resize).
    #[default]
    Instant,
    /// Ease toward the new translate over the given duration.
    Settle(Duration),
}

impl Transition {
    /// Returns `true` when the change should be eased.
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Settle(d) if !d.is_zero())
    }
}

/// Direction of a single-pane step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index zero.
    Previous,
    /// Toward the last pane.
    Next,
}

/// Returns the strip translate that shows pane `index` for a viewport of `width` pixels.
///
/// An unmeasured (zero) width yields zero for every index.
#[must_use]
pub fn translate_for_index(index: usize, width: f64) -> f64 {
    if width > 0.0 {
        index as f64 * -width
    } else {
        0.0
    }
}

/// Decides the index to settle on after a drag of `moved_by` pixels.
///
/// A negative `moved_by` is a drag to the left, which reveals the next pane.
/// The index only changes when the drag strictly exceeds `threshold` and the
/// target exists; otherwise `index` comes back unchanged.
#[must_use]
pub fn snap_index(index: usize, pane_count: usize, moved_by: f64, threshold: f64) -> usize {
    if moved_by < -threshold {
        step_index(index, pane_count, Direction::Next)
    } else if moved_by > threshold {
        step_index(index, pane_count, Direction::Previous)
    } else {
        index
    }
}

/// Moves `index` one pane in `direction`, stopping at either end of the strip.
#[must_use]
pub fn step_index(index: usize, pane_count: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next if index + 1 < pane_count => index + 1,
        Direction::Previous if index > 0 => index - 1,
        _ => index,
    }
}

/// Authoritative index and translate state shared by every input source.
#[derive(Clone, Debug)]
pub struct PositionEngine {
    index: usize,
    pane_count: usize,
    current_translate: f64,
    committed_translate: f64,
    transition: Transition,
    settle: Duration,
}

impl PositionEngine {
    /// Creates an engine showing `start_index` out of `pane_count` panes.
    ///
    /// The start index is clamped into the pane range. Translates stay at zero
    /// until [`set_position_by_index`](Self::set_position_by_index) runs with a
    /// measured width.
    #[must_use]
    pub fn new(start_index: usize, pane_count: usize, settle: Duration) -> Self {
        Self {
            index: clamp_index(start_index, pane_count),
            pane_count,
            current_translate: 0.0,
            committed_translate: 0.0,
            transition: Transition::Instant,
            settle,
        }
    }

    /// Index of the committed pane.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of panes in the strip.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    /// Translate that should be on screen right now.
    #[must_use]
    pub fn current_translate(&self) -> f64 {
        self.current_translate
    }

    /// Translate of the last committed position.
    #[must_use]
    pub fn committed_translate(&self) -> f64 {
        self.committed_translate
    }

    /// Presentation of the most recent translate change.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Duration used by [`Self::enable_settle`].
    #[must_use]
    pub fn settle_duration(&self) -> Duration {
        self.settle
    }

    /// Eases the next translate change.
    pub fn enable_settle(&mut self) {
        self.transition = Transition::Settle(self.settle);
    }

    /// Applies the next translate change instantly.
    pub fn disable_settle(&mut self) {
        self.transition = Transition::Instant;
    }

    /// Commits the translate for the current index and returns it.
    ///
    /// Both translates are set to `index * -width`; calling this twice with the
    /// same width leaves the state unchanged.
    pub fn set_position_by_index(&mut self, width: f64) -> f64 {
        let translate = translate_for_index(self.index, width);
        self.current_translate = translate;
        self.committed_translate = translate;
        translate
    }

    /// Moves the current translate to follow the pointer.
    ///
    /// The committed translate is untouched and tracking is never eased.
    pub fn track(&mut self, translate: f64) {
        self.transition = Transition::Instant;
        self.current_translate = translate;
    }

    /// Distance the current translate has moved away from the committed one.
    #[must_use]
    pub fn moved_by(&self) -> f64 {
        self.current_translate - self.committed_translate
    }

    /// Updates the index after a drag released `moved_by` pixels from its start.
    ///
    /// Returns the index to settle on. See [`snap_index`].
    pub fn snap_on_release(&mut self, moved_by: f64, threshold: f64) -> usize {
        self.index = snap_index(self.index, self.pane_count, moved_by, threshold);
        self.index
    }

    /// Moves the index one pane in `direction`, bounded by the strip ends.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.index = step_index(self.index, self.pane_count, direction);
        self.index
    }

    /// Overwrites the index, clamped into the pane range.
    pub fn set_index(&mut self, index: usize) -> usize {
        self.index = clamp_index(index, self.pane_count);
        self.index
    }

    /// Replaces the pane count, clamping the index if the strip shrank.
    pub fn set_pane_count(&mut self, pane_count: usize) {
        self.pane_count = pane_count;
        self.index = clamp_index(self.index, pane_count);
    }
}

fn clamp_index(index: usize, pane_count: usize) -> usize {
    index.min(pane_count.saturating_sub(1))
}
