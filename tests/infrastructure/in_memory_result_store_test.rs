use std::sync::Arc;
use std::time::Duration;

use bscribe::application::ports::{ResultStore, ResultStoreError};
use bscribe::domain::{JobKey, JobResult, Transcript};
use bscribe::infrastructure::store::{InMemoryResultStore, spawn_eviction_task};

fn success(text: &str) -> JobResult {
    JobResult::Success(Transcript::new(text))
}

#[test]
fn given_empty_store_when_getting_then_returns_none() {
    let store = InMemoryResultStore::new();

    assert!(store.get(&JobKey::from_raw("missing.wav")).is_none());
    assert!(store.is_empty());
}

#[test]
fn given_recorded_result_when_getting_then_returns_it() {
    let store = InMemoryResultStore::new();
    let key = JobKey::from_raw("abc.wav");

    store.put(key.clone(), success("hello")).unwrap();

    assert_eq!(store.get(&key), Some(success("hello")));
    assert_eq!(store.len(), 1);
}

#[test]
fn given_completed_key_when_writing_again_then_rejects_and_keeps_first_result() {
    let store = InMemoryResultStore::new();
    let key = JobKey::from_raw("abc.wav");
    store.put(key.clone(), success("first")).unwrap();

    let second = store.put(key.clone(), JobResult::Failure("second".to_string()));

    assert!(matches!(second, Err(ResultStoreError::AlreadyCompleted(k)) if k == key));
    assert_eq!(store.get(&key), Some(success("first")));
}

#[test]
fn given_concurrent_writers_on_distinct_keys_when_all_finish_then_no_cross_contamination() {
    let store = Arc::new(InMemoryResultStore::new());

    let handles: Vec<_> = (0..16)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..100 {
                    let id = format!("{}-{}", t, i);
                    store.put(JobKey::from_raw(id.clone()), success(&id)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 1600);
    for t in 0..16 {
        for i in 0..100 {
            let id = format!("{}-{}", t, i);
            assert_eq!(store.get(&JobKey::from_raw(id.clone())), Some(success(&id)));
        }
    }
}

#[test]
fn given_racing_writers_on_same_key_when_all_finish_then_exactly_one_write_wins() {
    let store = Arc::new(InMemoryResultStore::new());
    let key = JobKey::from_raw("contested.wav");

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            let key = key.clone();
            std::thread::spawn(move || store.put(key, success(&t.to_string())).is_ok())
        })
        .collect();
    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(wins, 1);
    assert!(store.get(&key).is_some());
}

#[test]
fn given_no_ttl_when_evicting_then_nothing_is_removed() {
    let store = InMemoryResultStore::with_ttl(None);
    store.put(JobKey::from_raw("a"), success("a")).unwrap();

    assert_eq!(store.evict_expired(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn given_expired_entry_when_getting_then_behaves_as_pending() {
    let store = InMemoryResultStore::with_ttl(Some(Duration::from_millis(20)));
    let key = JobKey::from_raw("old.wav");
    store.put(key.clone(), success("old")).unwrap();

    std::thread::sleep(Duration::from_millis(40));

    assert!(store.get(&key).is_none());
}

#[test]
fn given_mixed_ages_when_evicting_then_only_expired_entries_are_removed() {
    let store = InMemoryResultStore::with_ttl(Some(Duration::from_millis(50)));
    store.put(JobKey::from_raw("old"), success("old")).unwrap();
    std::thread::sleep(Duration::from_millis(80));
    store.put(JobKey::from_raw("new"), success("new")).unwrap();

    let evicted = store.evict_expired();

    assert_eq!(evicted, 1);
    assert_eq!(store.len(), 1);
    assert!(store.get(&JobKey::from_raw("new")).is_some());
}

#[tokio::test]
async fn given_eviction_task_when_ttl_elapses_then_entries_are_swept() {
    let store = Arc::new(InMemoryResultStore::with_ttl(Some(Duration::from_millis(20))));
    store.put(JobKey::from_raw("a"), success("a")).unwrap();

    let handle = spawn_eviction_task(Arc::clone(&store), Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(150)).await;
    handle.abort();

    assert!(store.is_empty());
}
