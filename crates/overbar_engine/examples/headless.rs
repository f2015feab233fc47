//! Headless engine session against the fake host
//!
//! Walks the full lifecycle without a real document: bootstrap and initial
//! scan, a mutation-driven rescan, a thumb drag, and an arrow long-press.
//!
//! Run with: cargo run -p overbar_engine --example headless

use anyhow::Result;
use overbar_core::config::OverlayConfig;
use overbar_core::events::{PointerEvent, WidgetPart};
use overbar_core::geometry::{Rect, Size};
use overbar_core::region::Region;
use overbar_engine::Engine;
use overbar_platform::fake::{FakeDocument, FakeNode};
use overbar_platform::{HostDocument, Notification};

fn pump(engine: &mut Engine<FakeDocument>, host: &mut FakeDocument) -> Result<()> {
    while host.take_frame_request() {
        engine.on_frame(host)?;
    }
    Ok(())
}

fn settle_timers(engine: &mut Engine<FakeDocument>, host: &mut FakeDocument, ms: u64) -> Result<()> {
    for timer in host.advance(ms) {
        engine.on_timer(host, timer)?;
    }
    pump(engine, host)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut host = FakeDocument::new(Size {
        width: 1280.0,
        height: 720.0,
    });
    host.insert_node(
        1,
        FakeNode::scrollable(4000.0, Rect::new(0.0, 0.0, 600.0, 720.0)),
    );

    let mut engine = Engine::new(OverlayConfig::default());
    engine.bootstrap(&mut host)?;
    pump(&mut engine, &mut host)?;
    tracing::info!(widgets = engine.widget_count(), "initial scan done");

    // A mutation drops a new overflowing panel into the tree.
    host.insert_node(
        2,
        FakeNode::scrollable(2000.0, Rect::new(640.0, 100.0, 400.0, 400.0)),
    );
    engine.notify(&mut host, Notification::Mutation);
    settle_timers(&mut engine, &mut host, 500)?;
    tracing::info!(widgets = engine.widget_count(), "after rescan");

    // Drag the first panel's thumb a third of the way down its track.
    engine.notify(
        &mut host,
        Notification::PointerDown {
            widget: 1,
            part: WidgetPart::Thumb,
            event: PointerEvent::mouse(1, 594.0, 120.0),
        },
    );
    engine.notify(
        &mut host,
        Notification::PointerMove(PointerEvent::mouse(1, 594.0, 320.0)),
    );
    engine.notify(
        &mut host,
        Notification::PointerUp(PointerEvent::mouse(1, 594.0, 320.0)),
    );
    engine.notify(&mut host, Notification::Scroll(Region::Element(1)));
    pump(&mut engine, &mut host)?;
    tracing::info!(
        offset = host.metrics(Region::Element(1)).offset,
        thumb_offset = host.widget(1).thumb.offset,
        "after drag"
    );

    // Hold the second panel's down arrow past the long-press delay, then
    // let the repeat loop run for a bounded number of frames. (Don't pump
    // here: the loop re-requests a frame every step until pointer-up.)
    engine.notify(
        &mut host,
        Notification::PointerDown {
            widget: 2,
            part: WidgetPart::DownArrow,
            event: PointerEvent::mouse(1, 1030.0, 480.0),
        },
    );
    for timer in host.advance(500) {
        engine.on_timer(&mut host, timer)?;
    }
    for _ in 0..10 {
        if host.take_frame_request() {
            engine.on_frame(&mut host)?;
        }
    }
    engine.notify(
        &mut host,
        Notification::PointerUp(PointerEvent::mouse(1, 1030.0, 480.0)),
    );
    pump(&mut engine, &mut host)?;
    tracing::info!(
        offset = host.metrics(Region::Element(2)).offset,
        "after long-press"
    );

    Ok(())
}
