//! Integration Tests for the response cache
//!
//! Exercises the public `Cache` handle together with its reaper: expiry
//! timing and behaviour under concurrent callers.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pokedex::Cache;

// == Expiry Scenarios ==

#[tokio::test]
async fn test_entry_visible_then_reaped() {
    let cache = Cache::new(Duration::from_millis(100));

    cache.put("a", vec![1, 2, 3]);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(cache.get("a"), Some(vec![1, 2, 3]));

    // Sweeps run at 100ms, 200ms, ...; by 300ms one has seen the entry past its TTL
    tokio::time::sleep(Duration::from_millis(290)).await;
    assert_eq!(cache.get("a"), None);
}

#[tokio::test]
async fn test_entry_gone_after_first_sweep() {
    let cache = Cache::new(Duration::from_millis(100));

    // The reaper's first poll happens after this put, so its first sweep
    // lands more than one TTL after the entry was stamped
    cache.put("key", b"value".to_vec());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(cache.get("key"), Some(b"value".to_vec()));

    tokio::time::sleep(Duration::from_millis(140)).await;
    assert_eq!(cache.get("key"), None);
}

#[tokio::test]
async fn test_no_premature_expiry() {
    let ttl = Duration::from_millis(400);
    let cache = Cache::new(ttl);

    cache.put("steady", b"payload".to_vec());

    // Poll well inside the first TTL period
    for _ in 0..5 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("steady"), Some(b"payload".to_vec()));
    }
}

#[tokio::test]
async fn test_overwrite_restarts_entry_age() {
    let cache = Cache::new(Duration::from_millis(200));

    cache.put("k", b"old".to_vec());
    tokio::time::sleep(Duration::from_millis(150)).await;
    cache.put("k", b"new".to_vec());

    // The sweep at 200ms sees an age of ~50ms
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(cache.get("k"), Some(b"new".to_vec()));
}

#[tokio::test]
async fn test_empty_payload_is_not_a_miss() {
    let cache = Cache::new(Duration::from_secs(60));

    cache.put("x", Vec::new());

    assert_eq!(cache.get("x"), Some(Vec::new()));
    assert_eq!(cache.get("y"), None);
}

// == Concurrency ==

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_writers_and_readers() {
    const THREADS: usize = 8;
    const KEYS_PER_THREAD: usize = 200;

    let cache = Cache::new(Duration::from_secs(60));

    thread::scope(|scope| {
        for t in 0..THREADS {
            let cache = cache.clone();
            scope.spawn(move || {
                for i in 0..KEYS_PER_THREAD {
                    let key = format!("https://pokeapi.co/api/v2/pokemon/{}-{}", t, i);
                    let payload = format!("{}:{}", t, i).into_bytes();
                    cache.put(key.clone(), payload.clone());
                    // Own writes are immediately visible
                    assert_eq!(cache.get(&key), Some(payload));
                    // Reads of other threads' keys must never see torn data
                    let neighbour = (t + 1) % THREADS;
                    let other = format!("https://pokeapi.co/api/v2/pokemon/{}-{}", neighbour, i);
                    if let Some(bytes) = cache.get(&other) {
                        assert_eq!(bytes, format!("{}:{}", neighbour, i).into_bytes());
                    }
                }
            });
        }
    });

    assert_eq!(cache.len(), THREADS * KEYS_PER_THREAD);
    for t in 0..THREADS {
        for i in 0..KEYS_PER_THREAD {
            let key = format!("https://pokeapi.co/api/v2/pokemon/{}-{}", t, i);
            assert_eq!(cache.get(&key), Some(format!("{}:{}", t, i).into_bytes()));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_overwrites_keep_one_entry() {
    let cache = Arc::new(Cache::new(Duration::from_secs(60)));

    let handles: Vec<_> = (0..16u8)
        .map(|n| {
            let cache = Arc::clone(&cache);
            tokio::task::spawn_blocking(move || {
                for _ in 0..100 {
                    cache.put("shared", vec![n; 32]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.len(), 1);
    let payload = cache.get("shared").unwrap();
    // Whole payload comes from a single writer
    assert_eq!(payload.len(), 32);
    assert!(payload.iter().all(|b| *b == payload[0]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_reaper_runs_alongside_callers() {
    let cache = Cache::new(Duration::from_millis(20));

    let writer = {
        let cache = cache.clone();
        tokio::task::spawn_blocking(move || {
            for i in 0..2000 {
                cache.put(format!("key{}", i % 50), vec![1; 8]);
                let _ = cache.get(&format!("key{}", (i + 7) % 50));
            }
        })
    };
    writer.await.unwrap();

    // With no more writes, the reaper eventually empties the cache
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(cache.is_empty());
    assert!(cache.stats().reaped > 0);
}
