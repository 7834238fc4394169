use crate::{NotificationCenter, NotificationEvent, Severity};

use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::test(start_paused = true)]
async fn given_notification_when_posted_then_visible_immediately() {
    let center = NotificationCenter::new(TIMEOUT);

    let id = center.notify("Saved", Severity::Success);

    let active = center.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, id);
    assert_eq!(active[0].message, "Saved");
    assert_eq!(active[0].severity, Severity::Success);
}

#[tokio::test(start_paused = true)]
async fn given_notification_when_timeout_elapses_then_removed_without_interaction() {
    let center = NotificationCenter::new(TIMEOUT);
    center.info("Hello");

    tokio::time::sleep(TIMEOUT - Duration::from_millis(1)).await;
    assert_eq!(center.active().len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(center.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_several_notifications_when_one_dismissed_then_others_remain_in_order() {
    let center = NotificationCenter::new(TIMEOUT);
    let first = center.info("first");
    let second = center.error("second");
    let third = center.success("third");

    assert!(center.dismiss(second));

    let ids: Vec<_> = center.active().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[tokio::test(start_paused = true)]
async fn given_dismissed_notification_when_timer_fires_then_nothing_else_removed() {
    let center = NotificationCenter::new(TIMEOUT);
    let early = center.info("early");
    assert!(center.dismiss(early));

    tokio::time::sleep(Duration::from_secs(1)).await;
    let late = center.info("late");

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let ids: Vec<_> = center.active().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![late]);
}

#[tokio::test(start_paused = true)]
async fn given_duplicate_messages_when_posted_then_both_kept_with_distinct_ids() {
    let center = NotificationCenter::new(TIMEOUT);

    let a = center.error("Network error");
    let b = center.error("Network error");

    assert_ne!(a, b);
    assert_eq!(center.active().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn given_subscriber_when_posted_and_expired_then_receives_both_events() {
    let center = NotificationCenter::new(TIMEOUT);
    let mut rx = center.subscribe();

    let id = center.info("ping");

    match rx.recv().await.unwrap() {
        NotificationEvent::Posted(n) => assert_eq!(n.id, id),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(rx.recv().await.unwrap(), NotificationEvent::Dismissed(id));
}

#[test]
fn given_unknown_id_when_dismissed_then_returns_false() {
    let center = NotificationCenter::default();

    assert!(!center.dismiss(42));
}

#[test]
fn given_no_runtime_when_notify_then_item_kept_until_dismissed() {
    let center = NotificationCenter::default();

    let id = center.info("offline");

    assert_eq!(center.active().len(), 1);
    assert!(center.dismiss(id));
    assert!(center.active().is_empty());
}

#[test]
fn test_severity_parse() {
    assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
    assert!("fatal".parse::<Severity>().is_err());
}
