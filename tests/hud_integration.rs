// SPDX-License-Identifier: MPL-2.0
//! End-to-end timing of the HUD lane driving a manager and its surface.

use iced::futures::channel::mpsc;
use iced::futures::StreamExt;
use iced_hud::ui::notifications::{
    LaneEvent, Manager, Notification, NotificationId, Severity, Surface, SurfaceConfig,
};
use std::time::Duration;
use tokio::time::Instant;

const TOLERANCE: Duration = Duration::from_millis(50);

fn record(severity: Severity, message: &str, millis: u64) -> Notification {
    Notification::builder(severity, message)
        .duration(Duration::from_millis(millis))
        .build()
        .unwrap()
}

/// Applies the next lane event to `manager` and returns it with its offset.
async fn next_event(
    events: &mut mpsc::UnboundedReceiver<LaneEvent>,
    manager: &mut Manager,
    start: Instant,
) -> (LaneEvent, Duration) {
    let event = events.next().await.expect("lane stopped early");
    manager.apply(event.clone());
    (event, start.elapsed())
}

fn assert_near(actual: Duration, expected_ms: u64) {
    let expected = Duration::from_millis(expected_ms);
    let delta = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(
        delta <= TOLERANCE,
        "expected ~{expected:?}, got {actual:?}"
    );
}

fn presented(event: &LaneEvent) -> NotificationId {
    match event {
        LaneEvent::Present(record) => record.id(),
        other => panic!("expected Present, got {other:?}"),
    }
}

fn expired(event: &LaneEvent) -> NotificationId {
    match event {
        LaneEvent::Expire(id) => *id,
        other => panic!("expected Expire, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn second_banner_waits_for_first_and_cooldown() {
    let mut manager = Manager::default();
    let handle = manager.handle();
    let (sink, mut events) = mpsc::unbounded();
    tokio::spawn(manager.take_lane().unwrap().run(sink));

    let saved = record(Severity::Success, "Saved", 3_000);
    let undo = record(Severity::Info, "Undo available", 2_000);
    let (saved_id, undo_id) = (saved.id(), undo.id());

    let start = Instant::now();
    handle.show(saved).unwrap();
    let late = handle.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        late.show(undo).unwrap();
    });

    let (event, at) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(presented(&event), saved_id);
    assert_near(at, 0);
    assert_eq!(manager.current_id(), Some(saved_id));

    let (event, at) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(expired(&event), saved_id);
    assert_near(at, 3_000);
    assert_eq!(manager.current_id(), None);

    let (event, at) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(presented(&event), undo_id);
    assert_near(at, 4_100);

    let (event, at) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(expired(&event), undo_id);
    assert_near(at, 6_100);
    assert_eq!(manager.current_id(), None);
}

#[tokio::test(start_paused = true)]
async fn records_are_shown_one_at_a_time_in_call_order() {
    let mut manager = Manager::default();
    let cooldown = manager.timing().cooldown;
    let (sink, mut events) = mpsc::unbounded();
    tokio::spawn(manager.take_lane().unwrap().run(sink));

    let durations = [800_u64, 2_000, 1_200, 500];
    let records: Vec<_> = durations
        .iter()
        .enumerate()
        .map(|(index, millis)| record(Severity::Info, &format!("banner {index}"), *millis))
        .collect();
    let ids: Vec<_> = records.iter().map(Notification::id).collect();

    let start = Instant::now();
    for record in records {
        manager.show(record).unwrap();
    }

    let mut expected_at = 0_u64;
    for (id, millis) in ids.iter().zip(durations) {
        let (event, at) = next_event(&mut events, &mut manager, start).await;
        assert_eq!(presented(&event), *id);
        assert_near(at, expected_at);

        let (event, at) = next_event(&mut events, &mut manager, start).await;
        assert_eq!(expired(&event), *id);
        assert_near(at, expected_at + millis);
        assert_eq!(manager.current_id(), None);

        expected_at += millis + cooldown.as_millis() as u64;
    }
}

#[tokio::test(start_paused = true)]
async fn tapped_banner_is_not_cleared_twice() {
    let mut manager = Manager::default();
    let (sink, mut events) = mpsc::unbounded();
    tokio::spawn(manager.take_lane().unwrap().run(sink));

    let first = record(Severity::Success, "first", 1_000);
    let second = record(Severity::Success, "second", 1_000);
    let (first_id, second_id) = (first.id(), second.id());
    manager.show(first).unwrap();
    manager.show(second).unwrap();
    let start = Instant::now();

    let (event, _) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(presented(&event), first_id);
    assert!(manager.tap(first_id));
    assert_eq!(manager.current_id(), None);

    // The lane still expires the first record on schedule; that is a no-op.
    let (event, _) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(expired(&event), first_id);

    let (event, _) = next_event(&mut events, &mut manager, start).await;
    assert_eq!(presented(&event), second_id);
    assert_eq!(manager.current_id(), Some(second_id));
}

#[tokio::test(start_paused = true)]
async fn surface_follows_the_lane() {
    let mut manager = Manager::default();
    let mut surface = Surface::new(manager.subscribe(), SurfaceConfig::default());
    let (sink, mut events) = mpsc::unbounded();
    tokio::spawn(manager.take_lane().unwrap().run(sink));

    let saved = record(Severity::Success, "Saved", 1_000);
    let id = saved.id();
    manager.show(saved).unwrap();
    let start = Instant::now();

    next_event(&mut events, &mut manager, start).await;
    assert!(surface.refresh(std::time::Instant::now()));
    assert_eq!(surface.entering_id(), Some(id));

    next_event(&mut events, &mut manager, start).await;
    assert!(surface.refresh(std::time::Instant::now()));
    assert_eq!(surface.entering_id(), None);
    assert_eq!(surface.exiting_ids(), vec![id]);
}
