//! The kernel holds no mutable state, so one instance can serve many
//! request handlers at once.

use std::sync::Arc;

use fedkernel::{Direction, Kernel, KernelConfig};
use fedkernel_testkit::{all_vectors, event_from_vector, redact_vector};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redaction() {
    let kernel = Arc::new(Kernel::new(KernelConfig::default()));

    let mut handles = Vec::new();
    for round in 0..8 {
        for vector in all_vectors() {
            let kernel = Arc::clone(&kernel);
            handles.push(tokio::spawn(async move {
                let expected = redact_vector(&vector);
                let (pruned, hash) = kernel.redact_and_hash(event_from_vector(&vector)).unwrap();
                (round, vector.name, expected, pruned, hash)
            }));
        }
    }

    let mut first_hashes = std::collections::HashMap::new();
    for handle in handles {
        let (_round, name, expected, pruned, hash) = handle.await.unwrap();
        let actual = fedkernel::core::canonical_content(pruned.content()).unwrap();
        assert_eq!(String::from_utf8(actual).unwrap(), expected, "{}", name);

        let first = *first_hashes.entry(name).or_insert(hash);
        assert_eq!(first, hash, "hash differs across tasks for {}", name);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pagination() {
    let kernel = Arc::new(Kernel::new(KernelConfig {
        max_limit: Some(50),
    }));

    let mut handles = Vec::new();
    for i in 0u64..64 {
        let kernel = Arc::clone(&kernel);
        handles.push(tokio::spawn(async move {
            let dir = if i % 2 == 0 { "f" } else { "b" };
            let query = format!("dir={}&from=s{}_{}&limit={}", dir, i, i + 1, i);
            let config = kernel.paginate_query(&query).unwrap();
            (i, config.direction(), config.from_token().copied(), kernel.effective_limit(&config))
        }));
    }

    for handle in handles {
        let (i, direction, from, limit) = handle.await.unwrap();
        let expected_dir = if i % 2 == 0 { Direction::Forward } else { Direction::Backward };
        assert_eq!(direction, expected_dir);
        assert_eq!(from.map(|t| t.presence_key), Some(i + 1));
        let expected_limit = if i == 0 { 50 } else { i.min(50) };
        assert_eq!(limit, Some(expected_limit));
    }
}

#[tokio::test]
async fn test_rejections_do_not_poison_kernel() {
    let kernel = Arc::new(Kernel::new(KernelConfig::default()));

    let bad = {
        let kernel = Arc::clone(&kernel);
        tokio::spawn(async move { kernel.paginate_query("dir=sideways").is_err() })
    };
    assert!(bad.await.unwrap());

    let config = kernel.paginate_query("dir=b").unwrap();
    assert_eq!(config.direction(), Direction::Backward);
}
