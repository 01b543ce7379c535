// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `understory_carousel`.
//!
//! These drive a `Carousel` the way a host would: pointer and key events,
//! display frames from a fake clock, and host index changes, while recording
//! what the renderer and the gesture callbacks observe.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_carousel::{
    Carousel, CarouselConfig, ConfigError, FrameHandle, FrameScheduler, ListenerId, ListenerKind,
    ListenerRegistry, PaneRenderer, PointerInput, StripFrame, Transition,
};

#[derive(Default, Debug)]
struct Frames(Vec<StripFrame>);

impl Frames {
    fn last(&self) -> StripFrame {
        *self.0.last().expect("renderer saw at least one frame")
    }
}

impl PaneRenderer for Frames {
    fn render(&mut self, frame: &StripFrame) {
        self.0.push(*frame);
    }
}

#[derive(Default, Debug)]
struct Clock {
    next: u64,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl Clock {
    /// Delivers the most recent request, as a display would on the next frame.
    fn tick(&mut self) -> Option<FrameHandle> {
        self.pending.pop()
    }
}

impl FrameScheduler for Clock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Default, Debug)]
struct Registry {
    next: u64,
    live: Vec<(ListenerKind, ListenerId)>,
}

impl ListenerRegistry for Registry {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.live.push((kind, id));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.live.retain(|(_, live)| *live != id);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Start(usize),
    Complete(usize),
}

type Log = Rc<RefCell<Vec<Event>>>;

const VIEWPORT: Size = Size::new(300.0, 200.0);

fn carousel(config: CarouselConfig) -> (Carousel<Frames, Clock>, Log) {
    let mut carousel = Carousel::new(config, Frames::default(), Clock::default());
    let log = Log::default();
    let start = log.clone();
    carousel.on_slide_start(move |i| start.borrow_mut().push(Event::Start(i)));
    let complete = log.clone();
    carousel.on_slide_complete(move |i| complete.borrow_mut().push(Event::Complete(i)));
    carousel.on_resize(&VIEWPORT);
    (carousel, log)
}

fn mouse(x: f64) -> PointerInput<'static> {
    PointerInput::Mouse(Point::new(x, 40.0))
}

fn drag(carousel: &mut Carousel<Frames, Clock>, from: f64, to: f64) {
    carousel.pointer_down(mouse(from));
    carousel.pointer_move(mouse(to));
    pump_frame(carousel);
    carousel.pointer_up();
}

fn pump_frame(carousel: &mut Carousel<Frames, Clock>) {
    let handle = carousel
        .scheduler_mut()
        .tick()
        .expect("render loop has a pending frame");
    carousel.on_animation_frame(handle);
}

#[test]
fn drag_keyboard_scenario() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(1));
    assert_eq!(carousel.state().translate, -300.0);

    // Drag 150px left: past the threshold, one pane forward.
    drag(&mut carousel, 250.0, 100.0);
    assert_eq!(carousel.index(), 2);
    assert_eq!(carousel.state().translate, -600.0);
    assert_eq!(
        *log.borrow(),
        [Event::Start(1), Event::Complete(2)],
        "start fires with the pre-drag index, complete with the snapped one"
    );

    // Drag 50px right: under the threshold, snaps back.
    log.borrow_mut().clear();
    drag(&mut carousel, 100.0, 150.0);
    assert_eq!(carousel.index(), 2);
    assert_eq!(carousel.state().translate, -600.0);
    assert_eq!(*log.borrow(), [Event::Start(2), Event::Complete(2)]);

    // Arrow right at the last pane stays put but still reports.
    carousel.go_to(4);
    log.borrow_mut().clear();
    assert!(carousel.key_down("ArrowRight"));
    assert_eq!(carousel.index(), 4);
    assert_eq!(carousel.state().translate, -1200.0);
    assert_eq!(*log.borrow(), [Event::Start(4), Event::Complete(4)]);
}

#[test]
fn render_loop_tracks_pointer_until_release() {
    let (mut carousel, _) = carousel(CarouselConfig::new(5).with_start_index(2));

    carousel.pointer_down(mouse(200.0));
    assert!(carousel.is_render_loop_running());

    for (x, expected) in [(180.0, -620.0), (120.0, -680.0), (60.0, -740.0)] {
        carousel.pointer_move(mouse(x));
        pump_frame(&mut carousel);
        let frame = carousel.renderer().last();
        assert_eq!(frame.translate, expected);
        assert_eq!(frame.transition, Transition::Instant);
        assert_eq!(frame.drag_offset, Some(expected + 600.0));
    }

    carousel.pointer_up();
    assert!(!carousel.is_render_loop_running());
    assert!(carousel.scheduler().pending.is_empty());
    let settled = carousel.renderer().last();
    assert_eq!(settled.translate, -900.0);
    assert_eq!(
        settled.transition,
        Transition::Settle(std::time::Duration::from_millis(300))
    );
    assert_eq!(settled.drag_offset, None);
}

#[test]
fn release_flushes_unrendered_pointer_position() {
    let (mut carousel, _) = carousel(CarouselConfig::new(5).with_start_index(2));

    carousel.pointer_down(mouse(200.0));
    carousel.pointer_move(mouse(170.0));
    // No frame arrives before release.
    let before = carousel.renderer().0.len();
    carousel.pointer_up();

    let frames = &carousel.renderer().0[before..];
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].translate, -630.0);
    assert_eq!(frames[0].transition, Transition::Instant);
    assert_eq!(frames[0].drag_offset, Some(-30.0));
    assert_eq!(frames[1].translate, -600.0);
    assert!(frames[1].transition.is_animated());
}

#[test]
fn release_cancels_pending_frame() {
    let (mut carousel, _) = carousel(CarouselConfig::new(5));

    carousel.pointer_down(mouse(200.0));
    let handle = carousel.scheduler().pending.last().copied().unwrap();
    carousel.pointer_up();

    assert_eq!(carousel.scheduler().cancelled, [handle]);
    // A host that delivers the cancelled frame anyway is ignored.
    let rendered = carousel.renderer().0.len();
    carousel.on_animation_frame(handle);
    assert_eq!(carousel.renderer().0.len(), rendered);
}

#[test]
fn extra_releases_and_moves_outside_drag_are_ignored() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(1));
    let rendered = carousel.renderer().0.len();

    carousel.pointer_move(mouse(10.0));
    carousel.pointer_up();
    carousel.pointer_leave();

    assert_eq!(carousel.renderer().0.len(), rendered);
    assert!(log.borrow().is_empty());
    assert_eq!(carousel.state().translate, -300.0);
}

#[test]
fn pointer_leave_releases_open_drag() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(1));

    carousel.pointer_down(mouse(100.0));
    carousel.pointer_move(mouse(260.0));
    carousel.pointer_leave();
    carousel.pointer_up();

    assert_eq!(carousel.index(), 0);
    assert_eq!(*log.borrow(), [Event::Start(1), Event::Complete(0)]);
}

#[test]
fn touch_input_uses_first_touch() {
    let (mut carousel, _) = carousel(CarouselConfig::new(3));
    let down = [Point::new(250.0, 5.0), Point::new(10.0, 5.0)];
    let moved = [Point::new(90.0, 5.0)];

    carousel.pointer_down(PointerInput::Touch(&down));
    carousel.pointer_move(PointerInput::Touch(&moved));
    // Touch-end carries no points; release does not need a coordinate.
    carousel.pointer_move(PointerInput::Touch(&[]));
    carousel.pointer_up();

    assert_eq!(carousel.index(), 1);
}

#[test]
fn host_index_overrides_without_callbacks() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5));

    carousel.sync_active_index(Some(3));
    assert_eq!(carousel.index(), 3);
    assert_eq!(carousel.state().translate, -900.0);
    assert!(carousel.state().transition.is_animated());

    // Same host value again, after a gesture moved the carousel: gesture wins.
    carousel.key_down("ArrowLeft");
    carousel.sync_active_index(Some(3));
    assert_eq!(carousel.index(), 2);

    // Null means no host control.
    carousel.sync_active_index(None);
    assert_eq!(carousel.index(), 2);

    assert_eq!(*log.borrow(), [Event::Start(3), Event::Complete(2)]);
}

#[test]
fn active_index_at_construction_wins() {
    let (mut carousel, _) = carousel(
        CarouselConfig::new(5)
            .with_start_index(1)
            .with_active_index(Some(4)),
    );
    assert_eq!(carousel.index(), 4);
    carousel.sync_active_index(Some(4));
    assert_eq!(carousel.index(), 4);
}

#[test]
fn non_directional_keys_do_nothing() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(2));
    let rendered = carousel.renderer().0.len();

    for key in ["ArrowUp", "Enter", "x"] {
        assert!(!carousel.key_down(key));
    }

    assert_eq!(carousel.renderer().0.len(), rendered);
    assert!(log.borrow().is_empty());
}

#[test]
fn resize_repositions_instantly_and_silently() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(3));
    carousel.key_down("ArrowLeft");
    log.borrow_mut().clear();

    carousel.on_resize(&Size::new(500.0, 400.0));

    let frame = carousel.renderer().last();
    assert_eq!(frame.translate, -1000.0);
    assert_eq!(frame.transition, Transition::Instant);
    assert_eq!(frame.dimensions.height(), 400.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn unmeasured_viewport_degrades_to_zero_translate() {
    let mut carousel = Carousel::new(
        CarouselConfig::new(5).with_start_index(3),
        Frames::default(),
        Clock::default(),
    );
    carousel.on_resize(&None::<Size>);
    assert_eq!(carousel.state().translate, 0.0);

    carousel.key_down("ArrowRight");
    assert_eq!(carousel.index(), 4);
    assert_eq!(carousel.state().translate, 0.0);

    carousel.on_resize(&VIEWPORT);
    assert_eq!(carousel.state().translate, -1200.0);
}

#[test]
fn unmount_releases_listeners() {
    let registry = Rc::new(RefCell::new(Registry::default()));
    let mut carousel = Carousel::new(
        CarouselConfig::new(4).with_start_index(1),
        Frames::default(),
        Clock::default(),
    );

    for _ in 0..2 {
        let mut host = registry.borrow_mut();
        let guard = carousel.mount(&mut *host, &VIEWPORT);
        assert_eq!(guard.len(), 2);
        assert!(guard.id(ListenerKind::Resize).is_some());
        carousel.unmount(guard);
        assert!(host.live.is_empty());
    }

    assert_eq!(carousel.state().translate, -300.0);
    assert_eq!(registry.borrow().next, 4);
}

#[test]
fn unmount_cancels_drag_without_callbacks() {
    let (mut carousel, log) = carousel(CarouselConfig::new(5).with_start_index(1));
    let mut registry = Registry::default();
    let guard = carousel.mount(&mut registry, &VIEWPORT);
    carousel.pointer_down(mouse(200.0));
    carousel.pointer_move(mouse(20.0));
    log.borrow_mut().clear();

    carousel.unmount(guard);
    assert!(registry.live.is_empty());

    assert!(!carousel.is_render_loop_running());
    assert!(!carousel.state().dragging);
    assert_eq!(carousel.index(), 1);
    assert_eq!(carousel.state().translate, -300.0);
    carousel.pointer_up();
    assert!(log.borrow().is_empty());
}

#[test]
fn shrinking_strip_clamps_index() {
    let (mut carousel, _) = carousel(CarouselConfig::new(5).with_start_index(4));
    carousel.set_pane_count(2);
    assert_eq!(carousel.index(), 1);
    assert_eq!(carousel.state().translate, -300.0);
    assert_eq!(carousel.renderer().last().transition, Transition::Instant);
}

#[test]
fn scale_flag_is_forwarded() {
    let (mut carousel, _) = carousel(CarouselConfig::new(3).with_scale_on_drag(true));
    carousel.pointer_down(mouse(200.0));
    carousel.pointer_move(mouse(50.0));
    pump_frame(&mut carousel);

    let frame = carousel.renderer().last();
    assert!(frame.scale_on_drag);
    let scale = understory_carousel::pane_scale(&frame, 0, carousel.index());
    assert!((scale - 0.95).abs() < 1e-12, "scale {scale}");
}

#[test]
fn release_flush_keeps_drag_scale() {
    let (mut carousel, _) = carousel(CarouselConfig::new(3).with_scale_on_drag(true));
    carousel.pointer_down(mouse(200.0));
    carousel.pointer_move(mouse(50.0));
    let before = carousel.renderer().0.len();
    carousel.pointer_up();

    let flushed = carousel.renderer().0[before];
    assert_eq!(flushed.translate, -150.0);
    let scale = understory_carousel::pane_scale(&flushed, 0, 0);
    assert!((scale - 0.95).abs() < 1e-12, "scale {scale}");
}

#[test]
fn invalid_config_is_rejected_by_try_new() {
    let err = Carousel::try_new(
        CarouselConfig::new(3).with_threshold(-1.0),
        Frames::default(),
        Clock::default(),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::NegativeThreshold(-1.0));

    let carousel = Carousel::new(
        CarouselConfig::new(3).with_threshold(-1.0),
        Frames::default(),
        Clock::default(),
    );
    assert_eq!(carousel.config().threshold, 100.0);
}
