//! Concurrent use from threads and blocking tasks.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use vaultkit::{Alphabet, random_id, validate_password};

#[test]
fn test_parallel_generation_from_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..200)
                    .map(|_| random_id(24, Alphabet::AlphaNum).expect("generate"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("thread") {
            assert_eq!(id.len(), 24);
            assert!(seen.insert(id), "duplicate identifier");
        }
    }
    assert_eq!(seen.len(), 1_600);
}

#[tokio::test]
async fn test_shared_hasher_across_blocking_tasks() {
    let kit = helpers::TestKit::new();
    let hasher = Arc::new(kit.hasher);

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            let hasher = Arc::clone(&hasher);
            tokio::task::spawn_blocking(move || {
                let password = format!("Passw0rd!{i}");
                assert!(validate_password(&password, 8));
                let hash = hasher.hash_password(&password).expect("hash");
                (password, hash)
            })
        })
        .collect();

    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.expect("join"));
    }

    for (i, (password, hash)) in results.iter().enumerate() {
        assert!(hasher.verify_password(password, hash));
        let other = &results[(i + 1) % results.len()].0;
        assert!(!hasher.verify_password(other, hash));
    }
}
