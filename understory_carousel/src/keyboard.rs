// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation: arrow keys step one pane at a time.

use crate::position::{Direction, PositionEngine};

/// Maps a key name, as reported by `KeyboardEvent.key` style APIs, to a step.
///
/// Only the horizontal arrows navigate; every other key returns `None`.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Previous),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

/// Applies a bounded one-pane step with a settle transition.
///
/// Returns the resulting index, which equals the previous one at either end
/// of the strip.
pub fn navigate(engine: &mut PositionEngine, direction: Direction) -> usize {
    engine.enable_settle();
    engine.step(direction)
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;
    use crate::position::Transition;

    #[test]
    fn only_horizontal_arrows_navigate() {
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Next));
        for key in ["ArrowUp", "ArrowDown", "Enter", "a", ""] {
            assert_eq!(direction_for_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn navigate_steps_and_settles() {
        let mut engine = PositionEngine::new(1, 3, Duration::from_millis(300));
        assert_eq!(navigate(&mut engine, Direction::Next), 2);
        assert_eq!(navigate(&mut engine, Direction::Next), 2);
        assert_eq!(
            engine.transition(),
            Transition::Settle(Duration::from_millis(300))
        );
        assert_eq!(navigate(&mut engine, Direction::Previous), 1);
    }
}
