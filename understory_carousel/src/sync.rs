// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciliation of a host-controlled active index.
//!
//! The host may own an "active index" that it updates independently of the
//! carousel's own gestures. [`ExternalSync`] remembers the last value it
//! observed and only acts when the host supplies a *different* value; at that
//! point the host wins and the engine is moved to the new index. Between host
//! changes, drag and keyboard outcomes own the index.

use crate::position::PositionEngine;

/// Remembers the last observed host value.
#[derive(Clone, Debug, Default)]
pub struct ExternalSync {
    observed: Option<Option<usize>>,
}

impl ExternalSync {
    /// Starts out having observed `initial`, which the caller has already applied.
    #[must_use]
    pub fn new(initial: Option<usize>) -> Self {
        Self {
            observed: Some(initial),
        }
    }

    /// The last host value seen, if any observation has happened.
    #[must_use]
    pub fn last_observed(&self) -> Option<Option<usize>> {
        self.observed
    }

    /// Observes the host's active index.
    ///
    /// When the value changed since the previous observation, is non-null, and
    /// differs from the engine's index, the engine is moved with a settle
    /// transition and the committed translate for `width` is returned.
    /// Otherwise nothing changes and `None` is returned.
    pub fn observe(
        &mut self,
        external: Option<usize>,
        engine: &mut PositionEngine,
        width: f64,
    ) -> Option<f64> {
        if self.observed == Some(external) {
            return None;
        }
        self.observed = Some(external);
        let target = external?;
        if target == engine.index() {
            return None;
        }
        engine.enable_settle();
        engine.set_index(target);
        Some(engine.set_position_by_index(width))
    }
}
