// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::thread;

use crate::config::RuntimeConfig;
use crate::container::GuardedContainer;
use crate::runtime::Runtime;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, MockHostMemory, MockHostMemoryBehaviour, mock_runtime,
};

const N: usize = 32;

#[test]
fn test_replacing_containers_does_not_grow_host_usage() {
    let (runtime, host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::None);

    let first: Vec<_> = (0..N as u64)
        .map(|i| GuardedContainer::new_in(i, &runtime).expect("Failed to new_in()"))
        .collect();

    let high_water = runtime.pool_stats().high_water;
    let reservations = host.reserve_count();
    assert_eq!(high_water, N);

    drop(first);

    let second: Vec<_> = (0..N as u64)
        .map(|i| GuardedContainer::new_in(i * 2, &runtime).expect("Failed to new_in()"))
        .collect();

    let stats = runtime.pool_stats();
    assert_eq!(stats.high_water, high_water);
    assert_eq!(host.reserve_count(), reservations);
    assert_eq!(stats.reuse_hits, N);

    drop(second);
}

#[test]
fn test_rekey_churn_needs_one_spare_block() {
    let (runtime, host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::None);

    let mut containers: Vec<_> = (0..N as u32)
        .map(|i| GuardedContainer::new_in(i, &runtime).expect("Failed to new_in()"))
        .collect();

    for _ in 0..10 {
        for container in containers.iter_mut() {
            container.rekey().expect("Failed to rekey()");
        }
    }

    // A write acquires the new block before releasing the old one.
    assert_eq!(host.reserve_count(), N + 1);
    assert_eq!(runtime.pool_stats().high_water, N + 1);
}

#[test]
fn test_drain_after_teardown_returns_everything() {
    let (runtime, host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::None);

    let containers: Vec<_> = (0..8u16)
        .map(|i| GuardedContainer::new_in(i, &runtime).expect("Failed to new_in()"))
        .collect();
    drop(containers);

    assert_eq!(runtime.drain_pool(), 8);
    assert_eq!(host.outstanding(), 0);
}

#[test]
fn test_containers_on_many_threads_share_pool() {
    let (runtime, host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::None);

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let runtime = runtime.clone();
            thread::spawn(move || {
                let mut container =
                    GuardedContainer::new_in(t, &runtime).expect("Failed to new_in()");

                for _ in 0..50 {
                    container.increment().expect("Failed to increment()");
                }

                container.get().expect("Failed to get()")
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("Failed to join()"), t as u64 + 50);
    }

    // Eight live containers, each needing at most one spare during a write.
    assert!(host.reserve_count() <= 16);
    assert_eq!(runtime.pool_stats().live, host.outstanding());
}

#[test]
fn test_rekey_on_many_threads_with_bounded_pool() {
    let host = Arc::new(MockHostMemory::new(MockHostMemoryBehaviour::None));
    let entropy = Arc::new(MockEntropySource::new(MockEntropySourceBehaviour::None));
    let runtime = Runtime::with_sources(
        RuntimeConfig::default().with_pool_retain_limit(Some(1)),
        host.clone(),
        entropy,
    )
    .expect("Failed to with_sources()");

    let handles: Vec<_> = (0..6u32)
        .map(|t| {
            let runtime = runtime.clone();
            thread::spawn(move || {
                let mut container =
                    GuardedContainer::new_in(t, &runtime).expect("Failed to new_in()");

                for _ in 0..40 {
                    container.rekey().expect("Failed to rekey()");
                    let stats = runtime.pool_stats();
                    assert!(stats.high_water <= stats.host_reservations);
                }

                container.get().expect("Failed to get()")
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("Failed to join()"), t as u32);
    }

    let stats = runtime.pool_stats();
    assert_eq!(stats.pooled, 1);
    assert_eq!(stats.live, 1);
    assert_eq!(stats.live, host.outstanding());
    assert!(stats.high_water <= 6 * 2 + 1);
}
