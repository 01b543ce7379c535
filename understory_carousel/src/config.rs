// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters.

use core::fmt;
use core::time::Duration;

/// Default drag distance, in pixels, that commits a pane change.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Default duration of the settle transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Parameters of a [`Carousel`](crate::Carousel).
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of panes in the strip.
    pub pane_count: usize,
    /// Index shown before any gesture, unless `active_index` is set.
    pub start_index: usize,
    /// Host-controlled index; wins over `start_index` when present.
    pub active_index: Option<usize>,
    /// Minimum drag distance, in pixels, that commits a pane change.
    pub threshold: f64,
    /// Duration of the settle transition.
    pub transition: Duration,
    /// Forwarded to the renderer to enable drag-proportional pane scaling.
    pub scale_on_drag: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            pane_count: 0,
            start_index: 0,
            active_index: None,
            threshold: DEFAULT_THRESHOLD,
            transition: DEFAULT_TRANSITION,
            scale_on_drag: false,
        }
    }
}

impl CarouselConfig {
    /// Default configuration for a strip of `pane_count` panes.
    #[must_use]
    pub fn new(pane_count: usize) -> Self {
        Self {
            pane_count,
            ..Self::default()
        }
    }

    /// Sets the start index.
    #[must_use]
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Sets the host-controlled index.
    #[must_use]
    pub fn with_active_index(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    /// Sets the drag threshold in pixels.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the settle transition duration.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the settle transition duration from seconds.
    ///
    /// Fails for negative, NaN, or unrepresentable values.
    pub fn try_with_transition_secs(mut self, secs: f64) -> Result<Self, ConfigError> {
        self.transition =
            Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTransition(secs))?;
        Ok(self)
    }

    /// Enables drag-proportional pane scaling in the renderer.
    #[must_use]
    pub fn with_scale_on_drag(mut self, scale: bool) -> Self {
        self.scale_on_drag = scale;
        self
    }

    /// Index the carousel starts on.
    #[must_use]
    pub fn initial_index(&self) -> usize {
        self.active_index.unwrap_or(self.start_index)
    }

    /// Checks that the numeric parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.threshold));
        }
        Ok(())
    }

    /// Returns a copy with an unusable threshold replaced by the default.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            self.threshold = DEFAULT_THRESHOLD;
        }
        self
    }
}

/// Rejected configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The drag threshold is below zero.
    NegativeThreshold(f64),
    /// The drag threshold is NaN or infinite.
    NonFiniteThreshold,
    /// The transition length in seconds is negative, NaN, or too large.
    InvalidTransition(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeThreshold(t) => write!(f, "drag threshold {t} must not be negative"),
            Self::NonFiniteThreshold => f.write_str("drag threshold must be finite"),
            Self::InvalidTransition(secs) => {
                write!(f, "transition of {secs}s is not a valid duration")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
