// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-synchronized render loop.
//!
//! While a drag is open the carousel pushes its current translate to the
//! renderer once per display frame. The host owns the actual frame clock and
//! exposes it through [`FrameScheduler`]; the carousel owns a [`RenderLoop`],
//! which holds at most one outstanding [`FrameHandle`]. That handle is the
//! loop's cancellation token: it is acquired when a drag starts, replaced each
//! frame while the drag lasts, and cancelled when the drag ends or the widget
//! unmounts.
//!
//! Handles delivered to [`RenderLoop::on_frame`] that do not match the
//! outstanding one are stale and ignored, so a frame that the host failed to
//! cancel cannot render after a commit.

/// Opaque identifier of a requested frame callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host-side frame clock.
pub trait FrameScheduler {
    /// Requests a callback on the next display frame.
    ///
    /// When that frame arrives the host calls
    /// [`Carousel::on_animation_frame`](crate::Carousel::on_animation_frame)
    /// with the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a previously requested frame.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// What to do with a delivered frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The handle was not the outstanding one; do nothing.
    Stale,
    /// Render the current translate. `rearmed` reports whether another frame
    /// was requested.
    Render {
        /// A follow-up frame is pending.
        rearmed: bool,
    },
}

/// Owner of the single outstanding frame request.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    pending: Option<FrameHandle>,
    last_rendered: Option<f64>,
}

impl RenderLoop {
    /// Returns `true` while a frame request is outstanding.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// The outstanding frame request.
    #[must_use]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Starts the loop, replacing any request that is still outstanding.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        self.stop(scheduler);
        self.pending = Some(scheduler.request_frame());
    }

    /// Cancels the outstanding request. Returns `true` if one was cancelled.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Handles a delivered frame.
    ///
    /// A matching frame always renders. It re-arms only while `dragging`, so the
    /// loop ends on the first frame after the drag closed, after flushing it.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        dragging: bool,
        scheduler: &mut impl FrameScheduler,
    ) -> FrameOutcome {
        if self.pending != Some(handle) {
            return FrameOutcome::Stale;
        }
        self.pending = None;
        if dragging {
            self.pending = Some(scheduler.request_frame());
        }
        FrameOutcome::Render {
            rearmed: self.pending.is_some(),
        }
    }

    /// Records the translate most recently handed to the renderer.
    pub fn mark_rendered(&mut self, translate: f64) {
        self.last_rendered = Some(translate);
    }

    /// Translate most recently handed to the renderer.
    #[must_use]
    pub fn last_rendered(&self) -> Option<f64> {
        self.last_rendered
    }
}
