//! Integration tests for the interaction controller
//!
//! Thumb drags, arrow clicks and long-presses, track paging, wheel
//! forwarding, and strict session teardown.

use overbar_core::config::OverlayConfig;
use overbar_core::events::{PointerEvent, PointerId, PointerKind, WidgetPart};
use overbar_core::geometry::{Rect, Size};
use overbar_core::region::Region;
use overbar_engine::Engine;
use overbar_platform::fake::{FakeDocument, FakeNode};
use overbar_platform::{HostDocument, Notification};

const REGION: Region<u64> = Region::Element(1);
// Host widget handle of the tracked element (the window widget is 0).
const WIDGET: usize = 1;

fn pump(engine: &mut Engine<FakeDocument>, host: &mut FakeDocument) {
    while host.take_frame_request() {
        engine.on_frame(host).unwrap();
    }
}

fn frame(engine: &mut Engine<FakeDocument>, host: &mut FakeDocument) {
    assert!(host.take_frame_request());
    engine.on_frame(host).unwrap();
}

/// 500px region with 2000px of content and a 300px track (100px arrows):
/// movable range 225, scroll range 1500.
fn scrollable_host() -> (Engine<FakeDocument>, FakeDocument) {
    let mut host = FakeDocument::new(Size {
        width: 800.0,
        height: 600.0,
    });
    host.insert_node(
        1,
        FakeNode::scrollable(2000.0, Rect::new(0.0, 50.0, 400.0, 500.0)),
    );
    let mut engine = Engine::new(OverlayConfig {
        arrow_height: 100.0,
        ..Default::default()
    });
    engine.bootstrap(&mut host).unwrap();
    pump(&mut engine, &mut host);
    (engine, host)
}

fn press(
    engine: &mut Engine<FakeDocument>,
    host: &mut FakeDocument,
    part: WidgetPart,
    event: PointerEvent,
) {
    engine.notify(
        host,
        Notification::PointerDown {
            widget: WIDGET,
            part,
            event,
        },
    );
}

fn deltas_for(host: &FakeDocument, region: Region<u64>) -> Vec<f32> {
    host.scroll_log
        .iter()
        .filter(|(r, _)| *r == region)
        .map(|(_, delta)| *delta)
        .collect()
}

#[test]
fn thumb_drag_scales_pointer_delta_into_scroll_range() {
    let (mut engine, mut host) = scrollable_host();

    press(
        &mut engine,
        &mut host,
        WidgetPart::Thumb,
        PointerEvent::mouse(9, 394.0, 200.0),
    );
    assert!(engine.is_interacting());
    assert_eq!(host.captured, Some((WIDGET, PointerId(9))));
    assert!(host.widget(WIDGET).active);

    // 30px of thumb travel across a 225px movable range is 200px of scroll.
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(9, 394.0, 230.0)),
    );
    assert!((host.metrics(REGION).offset - 200.0).abs() < 1e-3);

    // A huge swing clamps to the bottom of the range.
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(9, 394.0, 800.0)),
    );
    assert_eq!(host.metrics(REGION).offset, 1500.0);

    engine.notify(
        &mut host,
        Notification::PointerUp(PointerEvent::mouse(9, 394.0, 800.0)),
    );
    assert!(!engine.is_interacting());
    assert_eq!(host.captured, None);
    assert!(!host.widget(WIDGET).active);

    // The session is over: further moves change nothing.
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(9, 394.0, 100.0)),
    );
    assert_eq!(host.metrics(REGION).offset, 1500.0);
}

#[test]
fn moves_of_other_pointers_do_not_steer_a_drag() {
    let (mut engine, mut host) = scrollable_host();
    press(
        &mut engine,
        &mut host,
        WidgetPart::Thumb,
        PointerEvent::mouse(9, 394.0, 200.0),
    );
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(4, 394.0, 300.0)),
    );
    assert_eq!(host.metrics(REGION).offset, 0.0);
}

#[test]
fn touch_pointers_do_not_start_drags() {
    let (mut engine, mut host) = scrollable_host();
    press(
        &mut engine,
        &mut host,
        WidgetPart::Thumb,
        PointerEvent {
            id: PointerId(3),
            kind: PointerKind::Touch,
            x: 394.0,
            y: 200.0,
        },
    );
    assert!(!engine.is_interacting());
    assert_eq!(host.captured, None);
}

#[test]
fn capture_loss_ends_the_drag() {
    let (mut engine, mut host) = scrollable_host();
    press(
        &mut engine,
        &mut host,
        WidgetPart::Thumb,
        PointerEvent::mouse(9, 394.0, 200.0),
    );
    engine.notify(
        &mut host,
        Notification::CaptureLost {
            widget: WIDGET,
            pointer: PointerId(9),
        },
    );
    assert!(!engine.is_interacting());
    assert!(!host.widget(WIDGET).active);

    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(9, 394.0, 500.0)),
    );
    assert_eq!(host.metrics(REGION).offset, 0.0);
}

#[test]
fn track_press_pages_away_from_the_thumb() {
    let (mut engine, mut host) = scrollable_host();

    // Thumb spans 150..225 in viewport coordinates (container top 50,
    // arrow 100, thumb 75). A press below it pages down by 90% of the
    // visible extent.
    press(
        &mut engine,
        &mut host,
        WidgetPart::Track,
        PointerEvent::mouse(2, 394.0, 400.0),
    );
    let deltas = deltas_for(&host, REGION);
    assert_eq!(deltas.len(), 1);
    assert!((deltas[0] - 450.0).abs() < 1e-3);
    assert!((host.metrics(REGION).offset - 450.0).abs() < 1e-3);

    // Above the thumb's cached rectangle: pages back up.
    press(
        &mut engine,
        &mut host,
        WidgetPart::Track,
        PointerEvent::mouse(2, 394.0, 160.0),
    );
    assert!(host.metrics(REGION).offset.abs() < 1e-3);
    assert!(!engine.is_interacting());
}

#[test]
fn arrow_long_press_repeats_until_pointer_up() {
    let (mut engine, mut host) = scrollable_host();

    press(
        &mut engine,
        &mut host,
        WidgetPart::DownArrow,
        PointerEvent::mouse(5, 394.0, 580.0),
    );
    // One immediate click step.
    assert_eq!(deltas_for(&host, REGION), vec![100.0]);
    assert!(engine.is_interacting());

    // Nothing more until the long-press delay elapses.
    for timer in host.advance(499) {
        engine.on_timer(&mut host, timer).unwrap();
    }
    assert_eq!(deltas_for(&host, REGION).len(), 1);

    for timer in host.advance(1) {
        engine.on_timer(&mut host, timer).unwrap();
    }
    // Three frames, one fixed step each.
    frame(&mut engine, &mut host);
    frame(&mut engine, &mut host);
    frame(&mut engine, &mut host);
    assert_eq!(deltas_for(&host, REGION), vec![100.0, 15.0, 15.0, 15.0]);

    engine.notify(
        &mut host,
        Notification::PointerUp(PointerEvent::mouse(5, 100.0, 100.0)),
    );
    assert!(!engine.is_interacting());

    // The loop's last frame request fires empty; no step follows.
    pump(&mut engine, &mut host);
    assert_eq!(deltas_for(&host, REGION), vec![100.0, 15.0, 15.0, 15.0]);
}

#[test]
fn pointer_up_before_the_delay_cancels_the_repeat() {
    let (mut engine, mut host) = scrollable_host();

    press(
        &mut engine,
        &mut host,
        WidgetPart::UpArrow,
        PointerEvent::mouse(5, 394.0, 60.0),
    );
    assert_eq!(deltas_for(&host, REGION), vec![-100.0]);

    engine.notify(
        &mut host,
        Notification::PointerUp(PointerEvent::mouse(5, 394.0, 60.0)),
    );
    // The delay timer is gone; nothing ever fires.
    assert!(host.advance(10_000).is_empty());
    pump(&mut engine, &mut host);
    assert_eq!(deltas_for(&host, REGION), vec![-100.0]);
}

#[test]
fn wheel_over_the_widget_scrolls_the_region() {
    let (mut engine, mut host) = scrollable_host();

    engine.notify(
        &mut host,
        Notification::Wheel {
            widget: WIDGET,
            delta: 120.0,
        },
    );
    engine.notify(
        &mut host,
        Notification::Wheel {
            widget: WIDGET,
            delta: -40.0,
        },
    );
    assert_eq!(host.metrics(REGION).offset, 80.0);
    assert!(!engine.is_interacting());
}

#[test]
fn degenerate_geometry_makes_dragging_a_no_op() {
    // Min thumb larger than the track: no movable range.
    let mut host = FakeDocument::new(Size {
        width: 800.0,
        height: 600.0,
    });
    host.insert_node(
        1,
        FakeNode::scrollable(2000.0, Rect::new(0.0, 50.0, 400.0, 500.0)),
    );
    let mut engine = Engine::new(OverlayConfig {
        arrow_height: 100.0,
        min_thumb: 400.0,
        ..Default::default()
    });
    engine.bootstrap(&mut host).unwrap();
    pump(&mut engine, &mut host);

    press(
        &mut engine,
        &mut host,
        WidgetPart::Thumb,
        PointerEvent::mouse(9, 394.0, 200.0),
    );
    // The session starts, but every move short-circuits.
    assert!(engine.is_interacting());
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(9, 394.0, 300.0)),
    );
    assert_eq!(host.metrics(REGION).offset, 0.0);
}
