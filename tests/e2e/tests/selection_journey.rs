//! Batch planning journeys across modes, caps, and persisted progress

use repasso_e2e_tests::harness::{days_later, fixed_now};
use repasso_e2e_tests::mocks::{vocab_pool, MemoryStore};

use chrono::{DateTime, Duration, Utc};
use repasso_core::{
    RawResponse, ReviewState, ReviewStateWriter, ReviewableItem, SchedulerError, SessionConfig,
    SessionMode, SessionPlanner,
};

const LEARNER: &str = "learner-1";

fn config(mode: SessionMode, target: usize, new_cap: usize) -> SessionConfig {
    SessionConfig {
        target_batch_size: target,
        new_item_cap: new_cap,
        mode,
    }
}

/// Reviewed state overdue by `days`, with the given mastery level
fn overdue_state(now: DateTime<Utc>, days: i64, mastery: u8) -> ReviewState {
    let mut state = ReviewState::new_item(now - Duration::days(60));
    state.repetitions = 3;
    state.interval_days = 10;
    state.correct_count = 3;
    state.consecutive_correct = 3;
    state.mastery_level = mastery;
    state.last_reviewed_at = Some(now - Duration::days(days + 10));
    state.next_review_at = Some(now - Duration::days(days));
    state
}

fn scheduled_ahead(now: DateTime<Utc>, days: i64) -> ReviewState {
    let mut state = overdue_state(now, 0, 85);
    state.next_review_at = Some(now + Duration::days(days));
    state
}

#[test]
fn struggling_overdue_items_fill_the_batch() {
    let now = fixed_now();
    let pool = vocab_pool(5);
    let mut store = MemoryStore::new();

    // Two struggling and overdue, three scheduled in the future
    for (i, item) in pool.iter().enumerate() {
        let state = if i < 2 {
            overdue_state(now, 10, 40)
        } else {
            scheduled_ahead(now, 5)
        };
        store.seed(LEARNER, &item.item_id, state);
    }

    let batch = SessionPlanner::new(&store)
        .get_next_batch(LEARNER, &pool, &config(SessionMode::DueOnly, 2, 0), now)
        .unwrap();

    let ids: Vec<&str> = batch.iter().map(|i| i.item_id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&pool[0].item_id.as_str()));
    assert!(ids.contains(&pool[1].item_id.as_str()));
}

#[test]
fn empty_pool_is_a_normal_outcome() {
    let store = MemoryStore::new();
    let batch = SessionPlanner::new(&store)
        .get_next_batch(
            LEARNER,
            &[],
            &config(SessionMode::DueOnly, 10, 0),
            fixed_now(),
        )
        .unwrap();
    assert!(batch.is_empty());
}

#[test]
fn zero_batch_size_is_an_invalid_config() {
    let store = MemoryStore::new();
    let err = SessionPlanner::new(&store)
        .get_next_batch(
            LEARNER,
            &vocab_pool(3),
            &config(SessionMode::DueOnly, 0, 0),
            fixed_now(),
        )
        .unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}

#[test]
fn review_all_shows_everything_regardless_of_due_dates() {
    let now = fixed_now();
    let pool = vocab_pool(4);
    let mut store = MemoryStore::new();
    store.seed(LEARNER, &pool[0].item_id, scheduled_ahead(now, 30));
    store.seed(LEARNER, &pool[1].item_id, overdue_state(now, 3, 90));
    // pool[2] and pool[3] never seen

    let batch = SessionPlanner::new(&store)
        .get_next_batch(LEARNER, &pool, &config(SessionMode::ReviewAll, 1, 0), now)
        .unwrap();

    let ids: Vec<&str> = batch.iter().map(|i| i.item_id.as_str()).collect();
    let expected: Vec<&str> = pool.iter().map(|i| i.item_id.as_str()).collect();
    assert_eq!(ids, expected, "full pool in pool order");
}

#[test]
fn practice_mixed_admits_new_items_under_the_cap() {
    let now = fixed_now();
    let pool = vocab_pool(6);
    let mut store = MemoryStore::new();
    // One due item; the other five never seen
    store.seed(LEARNER, &pool[0].item_id, overdue_state(now, 2, 50));

    let batch = SessionPlanner::new(&store)
        .get_next_batch(
            LEARNER,
            &pool,
            &config(SessionMode::PracticeMixed, 6, 2),
            now,
        )
        .unwrap();

    let ids: Vec<&str> = batch.iter().map(|i| i.item_id.as_str()).collect();
    assert!(ids.contains(&pool[0].item_id.as_str()));
    assert_eq!(ids.len(), 3, "one due item plus two capped new items");
}

#[test]
fn seeded_planner_is_deterministic() {
    let now = fixed_now();
    let pool = vocab_pool(20);
    let mut store = MemoryStore::new();
    for item in &pool {
        store.seed(LEARNER, &item.item_id, overdue_state(now, 2, 85));
    }
    let cfg = config(SessionMode::DueOnly, 5, 0);

    let a = SessionPlanner::with_seed(&store, 99)
        .get_next_batch(LEARNER, &pool, &cfg, now)
        .unwrap();
    let b = SessionPlanner::with_seed(&store, 99)
        .get_next_batch(LEARNER, &pool, &cfg, now)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn reviewing_an_item_removes_it_from_the_due_batch() {
    let now = fixed_now();
    let pool = vocab_pool(3);
    let mut store = MemoryStore::new();
    for item in &pool {
        store.seed(LEARNER, &item.item_id, overdue_state(now, 1, 70));
    }
    let cfg = config(SessionMode::DueOnly, 10, 0);

    let before = SessionPlanner::new(&store)
        .get_next_batch(LEARNER, &pool, &cfg, now)
        .unwrap();
    assert_eq!(before.len(), 3);

    // Review the first item; it gets scheduled into the future
    let reviewed_id = before[0].item_id.clone();
    let next = SessionPlanner::new(&store)
        .record_outcome(
            LEARNER,
            &pool,
            &reviewed_id,
            &RawResponse::Checked(true),
            now,
        )
        .unwrap();
    store.save(LEARNER, &reviewed_id, &next).unwrap();

    let after = SessionPlanner::new(&store)
        .get_next_batch(LEARNER, &pool, &cfg, now)
        .unwrap();
    assert_eq!(after.len(), 2);
    assert!(after.iter().all(|i| i.item_id != reviewed_id));

    // It comes due again once its interval elapses
    let later = days_later(now, i64::from(next.interval_days));
    let eventually = SessionPlanner::new(&store)
        .get_next_batch(LEARNER, &pool, &cfg, later)
        .unwrap();
    assert!(eventually.iter().any(|i| i.item_id == reviewed_id));
}

#[test]
fn pool_stats_track_session_progress() {
    let now = fixed_now();
    let pool: Vec<ReviewableItem> = vocab_pool(4);
    let mut store = MemoryStore::new();
    store.seed(LEARNER, &pool[0].item_id, overdue_state(now, 2, 85));
    store.seed(LEARNER, &pool[1].item_id, overdue_state(now, 2, 40));

    let stats = SessionPlanner::new(&store)
        .pool_stats(LEARNER, &pool, now)
        .unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.due, 2);
    assert_eq!(stats.new_items, 2);
    assert_eq!(stats.mastered, 1);
    assert!((stats.average_mastery - 31.25).abs() < f64::EPSILON);
}
