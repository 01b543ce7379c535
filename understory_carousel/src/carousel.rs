// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel widget: one state machine fed by pointer, keyboard, and host input.

use alloc::boxed::Box;
use core::fmt;

use crate::config::{CarouselConfig, ConfigError};
use crate::frame::{FrameHandle, FrameOutcome, FrameScheduler, RenderLoop};
use crate::geometry::{Dimensions, GeometryProbe};
use crate::keyboard;
use crate::listeners::{ListenerGuard, ListenerKind, ListenerRegistry};
use crate::pointer::{PointerInput, PointerTracker};
use crate::position::{Direction, PositionEngine, Transition};
use crate::render::{PaneRenderer, StripFrame};
use crate::sync::ExternalSync;

type SlideCallback = Box<dyn FnMut(usize)>;

/// Snapshot of the carousel's observable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselState {
    /// Committed pane index.
    pub index: usize,
    /// Translate currently on screen.
    pub translate: f64,
    /// A drag session is open.
    pub dragging: bool,
    /// Presentation of the most recent translate change.
    pub transition: Transition,
}

/// Headless single-pane carousel.
///
/// `R` receives a [`StripFrame`] every time the strip moves and `S` provides
/// the display-frame clock used while dragging.
///
/// Gesture callbacks:
/// - `on_slide_start(index)` fires once when a drag opens and once per
///   directional key press, with the index active at that moment.
/// - `on_slide_complete(index)` fires once when a drag is released and once per
///   directional key press, with the settled index.
///
/// A key press at either end of the strip still fires both callbacks, with the
/// unchanged index. Host-driven changes ([`sync_active_index`](Self::sync_active_index),
/// [`go_to`](Self::go_to)) and resizes never fire them.
pub struct Carousel<R, S> {
    config: CarouselConfig,
    engine: PositionEngine,
    pointer: PointerTracker,
    sync: ExternalSync,
    frames: RenderLoop,
    dimensions: Dimensions,
    renderer: R,
    scheduler: S,
    on_slide_start: Option<SlideCallback>,
    on_slide_complete: Option<SlideCallback>,
}

impl<R: PaneRenderer, S: FrameScheduler> Carousel<R, S> {
    /// Creates a carousel, replacing an unusable threshold with the default.
    pub fn new(config: CarouselConfig, renderer: R, scheduler: S) -> Self {
        let config = config.sanitized();
        let engine = PositionEngine::new(
            config.initial_index(),
            config.pane_count,
            config.transition,
        );
        Self {
            sync: ExternalSync::new(config.active_index),
            config,
            engine,
            pointer: PointerTracker::default(),
            frames: RenderLoop::default(),
            dimensions: Dimensions::ZERO,
            renderer,
            scheduler,
            on_slide_start: None,
            on_slide_complete: None,
        }
    }

    /// Creates a carousel from a configuration that must pass validation.
    pub fn try_new(
        config: CarouselConfig,
        renderer: R,
        scheduler: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, renderer, scheduler))
    }

    /// Registers the callback fired when a gesture starts.
    pub fn on_slide_start(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_slide_start = Some(Box::new(callback));
    }

    /// Registers the callback fired when a gesture settles.
    pub fn on_slide_complete(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_slide_complete = Some(Box::new(callback));
    }

    /// Registers global listeners and performs the first measurement.
    ///
    /// Hand the returned guard to [`unmount`](Self::unmount) when tearing the
    /// carousel down; dropping it early also unregisters the listeners.
    pub fn mount<G: ListenerRegistry>(
        &mut self,
        registry: G,
        probe: &impl GeometryProbe,
    ) -> ListenerGuard<G> {
        let guard = ListenerGuard::register(registry, &ListenerKind::MOUNTED);
        self.on_resize(probe);
        guard
    }

    /// Tears the carousel down: cancels any outstanding frame, discards an open
    /// drag without callbacks, and unregisters the listeners held by `guard`.
    pub fn unmount<G: ListenerRegistry>(&mut self, guard: ListenerGuard<G>) {
        self.frames.stop(&mut self.scheduler);
        if self.pointer.cancel().is_some() {
            self.engine.set_position_by_index(self.dimensions.width());
        }
        guard.release();
        tracing::debug!(index = self.engine.index(), "carousel unmounted");
    }

    /// Observable state.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.engine.index(),
            translate: self.engine.current_translate(),
            dragging: self.pointer.is_dragging(),
            transition: self.engine.transition(),
        }
    }

    /// Committed pane index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.engine.index()
    }

    /// Last measured viewport size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns `true` while a display-frame request is outstanding.
    #[must_use]
    pub fn is_render_loop_running(&self) -> bool {
        self.frames.is_running()
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Opens a drag session at the pointer.
    ///
    /// Fires `on_slide_start` with the current index and starts the render loop.
    pub fn pointer_down(&mut self, input: PointerInput<'_>) {
        let index = self.engine.index();
        let Some(session) = self.pointer.begin(index, input) else {
            return;
        };
        tracing::trace!(index, x = session.start_x, "drag started");
        if let Some(callback) = self.on_slide_start.as_mut() {
            callback(index);
        }
        self.frames.start(&mut self.scheduler);
    }

    /// Moves an open drag with the pointer. Ignored when no drag is open.
    ///
    /// The renderer sees the new translate on the next display frame.
    pub fn pointer_move(&mut self, input: PointerInput<'_>) {
        if let Some(translate) = self.pointer.move_to(&mut self.engine, input) {
            tracing::trace!(translate, "drag moved");
        }
    }

    /// Releases an open drag and settles on the snapped index.
    ///
    /// Calls after the first release are ignored.
    pub fn pointer_up(&mut self) {
        if !self.pointer.is_dragging() {
            return;
        }
        self.frames.stop(&mut self.scheduler);
        if self.frames.last_rendered() != Some(self.engine.current_translate()) {
            // Pointer moved after the last frame; show where it let go while the
            // session is still open so the frame carries its drag offset.
            self.render();
        }
        let Some(release) = self.pointer.end(&mut self.engine, self.config.threshold) else {
            return;
        };
        self.engine.enable_settle();
        let translate = self.engine.set_position_by_index(self.dimensions.width());
        self.render();
        tracing::debug!(
            from = release.start_index,
            index = release.index,
            moved_by = release.moved_by,
            translate,
            "drag settled"
        );
        if let Some(callback) = self.on_slide_complete.as_mut() {
            callback(release.index);
        }
    }

    /// Pointer left the viewport; releases the drag if one is open.
    pub fn pointer_leave(&mut self) {
        if self.pointer.is_dragging() {
            self.pointer_up();
        }
    }

    /// Handles a delivered display frame.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) {
        let dragging = self.pointer.is_dragging();
        match self.frames.on_frame(handle, dragging, &mut self.scheduler) {
            FrameOutcome::Stale => tracing::trace!(?handle, "stale frame ignored"),
            FrameOutcome::Render { rearmed } => {
                tracing::trace!(?handle, rearmed, "drag frame");
                self.render();
            }
        }
    }

    /// Handles a key press by name. Returns `true` if the key navigated.
    ///
    /// Only `ArrowLeft` and `ArrowRight` are handled; other keys have no effect.
    pub fn key_down(&mut self, key: &str) -> bool {
        match keyboard::direction_for_key(key) {
            Some(direction) => {
                self.navigate(direction);
                true
            }
            None => false,
        }
    }

    /// Steps one pane in `direction` as a keyboard gesture.
    pub fn navigate(&mut self, direction: Direction) {
        if let Some(callback) = self.on_slide_start.as_mut() {
            callback(self.engine.index());
        }
        let index = keyboard::navigate(&mut self.engine, direction);
        let translate = self.engine.set_position_by_index(self.dimensions.width());
        self.render();
        tracing::debug!(?direction, index, translate, "keyboard step");
        if let Some(callback) = self.on_slide_complete.as_mut() {
            callback(index);
        }
    }

    /// Re-measures the viewport and repositions without easing.
    pub fn on_resize(&mut self, probe: &impl GeometryProbe) {
        self.engine.disable_settle();
        self.dimensions = probe.dimensions();
        let translate = self.engine.set_position_by_index(self.dimensions.width());
        self.render();
        tracing::debug!(
            width = self.dimensions.width(),
            height = self.dimensions.height(),
            translate,
            "viewport resized"
        );
    }

    /// Observes the host-controlled index.
    ///
    /// A changed, non-null value that differs from the current index moves the
    /// carousel there with a settle transition. No gesture callbacks fire.
    pub fn sync_active_index(&mut self, active_index: Option<usize>) {
        self.config.active_index = active_index;
        let width = self.dimensions.width();
        if let Some(translate) = self.sync.observe(active_index, &mut self.engine, width) {
            self.render();
            tracing::debug!(index = self.engine.index(), translate, "synced to host index");
        }
    }

    /// Moves to `index` (clamped) with a settle transition, without callbacks.
    pub fn go_to(&mut self, index: usize) {
        self.engine.enable_settle();
        self.engine.set_index(index);
        let translate = self.engine.set_position_by_index(self.dimensions.width());
        self.render();
        tracing::debug!(index = self.engine.index(), translate, "moved to index");
    }

    /// Replaces the number of panes, clamping the index and repositioning instantly.
    pub fn set_pane_count(&mut self, pane_count: usize) {
        self.config.pane_count = pane_count;
        self.engine.set_pane_count(pane_count);
        self.engine.disable_settle();
        self.engine.set_position_by_index(self.dimensions.width());
        self.render();
    }

    fn render(&mut self) {
        let frame = StripFrame {
            translate: self.engine.current_translate(),
            dimensions: self.dimensions,
            transition: self.engine.transition(),
            scale_on_drag: self.config.scale_on_drag,
            drag_offset: self.pointer.is_dragging().then(|| self.engine.moved_by()),
        };
        self.renderer.render(&frame);
        self.frames.mark_rendered(frame.translate);
    }
}

impl<R: fmt::Debug, S: fmt::Debug> fmt::Debug for Carousel<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("pointer", &self.pointer)
            .field("sync", &self.sync)
            .field("frames", &self.frames)
            .field("dimensions", &self.dimensions)
            .field("renderer", &self.renderer)
            .field("scheduler", &self.scheduler)
            .field("on_slide_start", &self.on_slide_start.is_some())
            .field("on_slide_complete", &self.on_slide_complete.is_some())
            .finish()
    }
}
