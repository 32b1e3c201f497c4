use std::time::Duration;

use widget_rs::toast::{
    DismissReason, ManualClock, ToastConfig, ToastEvent, ToastId, ToastKind, ToastManager,
    ToastOptions, ToastPhase, ToastPosition,
};

fn manager_with(config: ToastConfig) -> (ToastManager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let manager = ToastManager::new(config, clock.clone()).expect("manager");
    (manager, clock)
}

fn show(manager: &mut ToastManager<ManualClock>, message: &str, kind: ToastKind) -> ToastId {
    manager
        .show(message, kind, ToastOptions::default())
        .expect("toast id")
}

fn unknown_id() -> ToastId {
    serde_json::from_str("9999").expect("id")
}

#[test]
fn visible_count_never_exceeds_cap() {
    let (mut manager, _clock) = manager_with(ToastConfig::default().with_max_toasts(3));

    for i in 0..10 {
        show(&mut manager, &format!("message {i}"), ToastKind::Info);
        assert!(manager.visible_count() <= 3);
    }

    let visible: Vec<&str> = manager.visible().map(|toast| toast.message()).collect();
    assert_eq!(visible, vec!["message 7", "message 8", "message 9"]);
}

#[test]
fn eviction_dismisses_oldest_visible_toast() {
    let (mut manager, _clock) = manager_with(ToastConfig::default().with_max_toasts(2));
    let oldest = show(&mut manager, "one", ToastKind::Info);
    show(&mut manager, "two", ToastKind::Info);
    manager.drain_events();

    let newest = show(&mut manager, "three", ToastKind::Info);
    let events = manager.drain_events();
    assert_eq!(
        events,
        vec![
            ToastEvent::Shown {
                id: newest,
                position: ToastPosition::TopRight
            },
            ToastEvent::Dismissing {
                id: oldest,
                reason: DismissReason::Evicted
            },
        ]
    );
    assert_eq!(
        manager.get(oldest).map(|toast| toast.phase()),
        Some(ToastPhase::Dismissing)
    );
}

#[test]
fn duplicate_show_returns_same_id_and_single_toast() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let first = show(&mut manager, "Saved", ToastKind::Success);
    let second = show(&mut manager, "Saved", ToastKind::Success);

    assert_eq!(first, second);
    assert_eq!(manager.visible_count(), 1);
}

#[test]
fn same_message_with_different_kind_is_not_a_duplicate() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let info = show(&mut manager, "Heads up", ToastKind::Info);
    let warning = show(&mut manager, "Heads up", ToastKind::Warning);

    assert_ne!(info, warning);
    assert_eq!(manager.visible_count(), 2);
}

#[test]
fn duplicates_allowed_when_prevention_disabled() {
    let (mut manager, _clock) =
        manager_with(ToastConfig::default().with_prevent_duplicates(false));
    let first = show(&mut manager, "Saved", ToastKind::Success);
    let second = show(&mut manager, "Saved", ToastKind::Success);

    assert_ne!(first, second);
    assert_eq!(manager.visible_count(), 2);
}

#[test]
fn duplicate_show_resets_existing_timer() {
    let (mut manager, clock) = manager_with(ToastConfig::default().with_timeout_ms(1_000));
    let id = show(&mut manager, "Saved", ToastKind::Success);

    clock.advance_ms(800);
    show(&mut manager, "Saved", ToastKind::Success);
    assert!(
        manager
            .drain_events()
            .contains(&ToastEvent::TimerReset { id })
    );

    clock.advance_ms(800);
    manager.tick();
    assert!(manager.get(id).is_some_and(|toast| toast.visible()));

    clock.advance_ms(200);
    manager.tick();
    assert!(!manager.get(id).is_some_and(|toast| toast.visible()));
}

#[test]
fn hidden_toast_no_longer_blocks_duplicates() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let first = show(&mut manager, "Retry", ToastKind::Error);
    manager.hide(first);

    let second = show(&mut manager, "Retry", ToastKind::Error);
    assert_ne!(first, second);
}

#[test]
fn hide_is_idempotent() {
    let (mut manager, clock) = manager_with(ToastConfig::default().with_transition_ms(300));
    let id = show(&mut manager, "bye", ToastKind::Info);
    manager.drain_events();

    manager.hide(id);
    manager.hide(id);
    assert_eq!(
        manager.drain_events(),
        vec![ToastEvent::Dismissing {
            id,
            reason: DismissReason::Manual
        }]
    );

    clock.advance_ms(300);
    manager.tick();
    manager.hide(id);
    manager.tick();
    assert_eq!(manager.drain_events(), vec![ToastEvent::Removed { id }]);
    assert!(manager.get(id).is_none());
}

#[test]
fn unknown_ids_are_ignored() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    show(&mut manager, "keep", ToastKind::Info);
    manager.drain_events();

    let missing = unknown_id();
    manager.hide(missing);
    manager.reset_timer(missing);
    manager.pause_timer(missing);
    manager.resume_timer(missing);

    assert!(manager.drain_events().is_empty());
    assert_eq!(manager.visible_count(), 1);
    assert!(manager.time_remaining(missing).is_none());
}

#[test]
fn persistent_toast_survives_indefinitely() {
    let (mut manager, clock) = manager_with(ToastConfig::default());
    let id = manager
        .show(
            "Read me",
            ToastKind::Warning,
            ToastOptions::default().persistent(),
        )
        .expect("id");

    clock.advance(Duration::from_secs(24 * 60 * 60));
    assert!(!manager.tick());
    assert!(manager.get(id).is_some_and(|toast| toast.visible()));
    assert!(manager.time_remaining(id).is_none());

    manager.hide(id);
    assert!(!manager.get(id).is_some_and(|toast| toast.visible()));
}

#[test]
fn zero_config_timeout_makes_every_toast_persistent() {
    let (mut manager, clock) = manager_with(ToastConfig::default().with_timeout_ms(0));
    let id = show(&mut manager, "sticky", ToastKind::Info);

    clock.advance(Duration::from_secs(3_600));
    manager.tick();
    assert!(manager.get(id).is_some_and(|toast| toast.is_persistent()));
    assert_eq!(manager.visible_count(), 1);
}

#[test]
fn reset_timer_is_noop_for_persistent_toasts() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let id = manager
        .show("sticky", ToastKind::Info, ToastOptions::default().persistent())
        .expect("id");
    manager.drain_events();

    manager.reset_timer(id);
    assert!(manager.drain_events().is_empty());
}

#[test]
fn reset_timer_restores_original_timeout() {
    let (mut manager, clock) = manager_with(ToastConfig::default());
    let id = manager
        .show(
            "custom",
            ToastKind::Info,
            ToastOptions::default().with_timeout_ms(2_000),
        )
        .expect("id");

    clock.advance_ms(1_500);
    assert_eq!(manager.time_remaining(id), Some(Duration::from_millis(500)));
    manager.reset_timer(id);
    assert_eq!(manager.time_remaining(id), Some(Duration::from_millis(2_000)));
}

#[test]
fn expiry_runs_exit_transition_then_removes() {
    let (mut manager, clock) = manager_with(
        ToastConfig::default()
            .with_timeout_ms(1_000)
            .with_transition_ms(250),
    );
    let id = show(&mut manager, "tick tock", ToastKind::Info);
    manager.drain_events();

    clock.advance_ms(1_000);
    assert!(manager.tick());
    assert_eq!(
        manager.drain_events(),
        vec![ToastEvent::Dismissing {
            id,
            reason: DismissReason::Expired
        }]
    );

    clock.advance_ms(250);
    assert!(manager.tick());
    assert_eq!(manager.drain_events(), vec![ToastEvent::Removed { id }]);
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn zero_transition_removes_on_hide() {
    let (mut manager, _clock) = manager_with(ToastConfig::default().with_transition_ms(0));
    let id = show(&mut manager, "instant", ToastKind::Info);
    manager.hide(id);
    assert!(manager.get(id).is_none());
}

#[test]
fn hide_all_dismisses_every_visible_toast() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    for kind in [ToastKind::Info, ToastKind::Success, ToastKind::Error] {
        show(&mut manager, "status", kind);
    }
    assert_eq!(manager.visible_count(), 3);

    manager.hide_all();
    assert_eq!(manager.visible_count(), 0);
    assert_eq!(manager.active_count(), 3);
}

#[test]
fn per_toast_position_overrides_config() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let id = manager
        .show(
            "down here",
            ToastKind::Info,
            ToastOptions::default().with_position(ToastPosition::BottomCenter),
        )
        .expect("id");

    let stacked: Vec<ToastId> = manager
        .stack(ToastPosition::BottomCenter)
        .map(|toast| toast.id())
        .collect();
    assert_eq!(stacked, vec![id]);
    assert_eq!(manager.stack(ToastPosition::TopRight).count(), 0);
}

#[test]
fn toast_keeps_title_and_closable_flag() {
    let (mut manager, _clock) = manager_with(ToastConfig::default());
    let id = manager
        .show(
            "File written",
            ToastKind::Success,
            ToastOptions::default()
                .with_title("Export")
                .with_closable(false),
        )
        .expect("id");

    let toast = manager.get(id).expect("toast");
    assert_eq!(toast.title(), Some("Export"));
    assert!(!toast.closable());
    assert_eq!(toast.kind(), ToastKind::Success);
}

#[test]
fn unrepresentable_timeout_never_expires() {
    let (mut manager, clock) = manager_with(ToastConfig::default());
    let id = manager
        .show(
            "forever",
            ToastKind::Info,
            ToastOptions::default().with_timeout(Duration::MAX),
        )
        .expect("id");

    manager.reset_timer(id);
    manager.pause_timer(id);
    manager.resume_timer(id);
    clock.advance(Duration::from_secs(365 * 24 * 60 * 60));
    manager.tick();

    assert!(manager.get(id).is_some_and(|toast| toast.visible()));
    assert!(manager.time_remaining(id).is_none());
    assert!(manager.next_deadline().is_none());

    let duplicate = manager
        .show("forever", ToastKind::Info, ToastOptions::default())
        .expect("id");
    assert_eq!(duplicate, id);
}
