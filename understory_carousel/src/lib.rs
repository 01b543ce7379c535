// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless single-pane carousel engine.
//!
//! A carousel shows one pane of an ordered strip at a time. The user moves
//! between panes by dragging with a mouse or finger, by pressing the horizontal
//! arrow keys, or the host moves it by supplying an active index. This crate
//! merges those three sources into one committed index and one pixel translate,
//! and tells a renderer where the strip should be.
//!
//! It does not draw, measure, or own an event loop. Hosts provide:
//!
//! - a [`PaneRenderer`] that receives a [`StripFrame`] whenever the strip moves,
//! - a [`FrameScheduler`] that delivers display frames while a drag is open,
//! - a [`GeometryProbe`] that measures the viewport,
//! - a [`ListenerRegistry`] for the global resize and key-down listeners.
//!
//! ## Pieces
//!
//! - [`position`]: the authoritative index and translate, with the snapping rule
//!   applied on release.
//! - [`pointer`]: touch/mouse normalization and the drag session.
//! - [`frame`]: the render loop and its single cancellation token.
//! - [`sync`]: reconciliation of the host's active index.
//! - [`keyboard`]: arrow-key navigation.
//! - [`listeners`]: listener registration scoped to a guard.
//! - [`render`]: the renderer contract and the drag scale helper.
//! - [`Carousel`]: all of the above behind one API.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_carousel::{
//!     Carousel, CarouselConfig, FrameHandle, FrameScheduler, PaneRenderer, StripFrame,
//! };
//!
//! #[derive(Default)]
//! struct Strip(f64);
//! impl PaneRenderer for Strip {
//!     fn render(&mut self, frame: &StripFrame) {
//!         self.0 = frame.translate;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Clock(u64);
//! impl FrameScheduler for Clock {
//!     fn request_frame(&mut self) -> FrameHandle {
//!         self.0 += 1;
//!         FrameHandle(self.0)
//!     }
//!     fn cancel_frame(&mut self, _: FrameHandle) {}
//! }
//!
//! let config = CarouselConfig::new(5).with_start_index(1);
//! let mut carousel = Carousel::new(config, Strip::default(), Clock::default());
//! carousel.on_resize(&Size::new(300.0, 200.0));
//! assert_eq!(carousel.renderer().0, -300.0);
//!
//! // Drag 150px to the left and let go.
//! carousel.pointer_down(Point::new(250.0, 50.0).into());
//! carousel.pointer_move(Point::new(100.0, 50.0).into());
//! carousel.on_animation_frame(FrameHandle(1));
//! assert_eq!(carousel.renderer().0, -450.0);
//! carousel.pointer_up();
//!
//! assert_eq!(carousel.index(), 2);
//! assert_eq!(carousel.renderer().0, -600.0);
//! ```
//!
//! ## Callbacks
//!
//! `on_slide_start` and `on_slide_complete` fire only for user gestures (drags
//! and arrow keys). An arrow key at either end of the strip fires both with the
//! unchanged index. Host-driven moves and resizes are silent.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo and tracing.
//! - `libm`: use Kurbo's `libm` backend for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod keyboard;
pub mod listeners;
pub mod pointer;
pub mod position;
pub mod render;
pub mod sync;

pub use carousel::{Carousel, CarouselState};
pub use config::{CarouselConfig, ConfigError};
pub use frame::{FrameHandle, FrameScheduler};
pub use geometry::{Dimensions, GeometryProbe};
pub use listeners::{ListenerGuard, ListenerId, ListenerKind, ListenerRegistry};
pub use pointer::PointerInput;
pub use position::{Direction, Transition};
pub use render::{PaneRenderer, StripFrame, pane_scale};
