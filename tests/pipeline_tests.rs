// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end runs of the scan pipeline against in-memory collaborators

mod helpers;

use std::time::Duration;

use alloy_rpc_types::Log;
use coinscan::{
    AppType, BlockRange, CoinType, EventScanner, Pacing, PoolScanner, RecordSink, ScanError,
    ScanSummary,
};
use helpers::*;
use proptest::prelude::*;

fn scanner<K: RecordSink>(
    logs: Vec<Log>,
    loader: MockPoolLoader,
    sink: K,
) -> PoolScanner<MockLogSource, MockPoolLoader, K> {
    PoolScanner::new(
        EventScanner::new(MockLogSource::new(logs), 2_000),
        loader,
        sink,
    )
    .with_block_range(BlockRange::Fixed { from: 0, to: 1_000 })
    .with_pacing(Pacing::none())
}

#[tokio::test]
async fn test_creator_coin_paired_with_usdc() {
    let known = pool_key(HOOK_A, USDC, TOKEN_X);
    let unknown = pool_key(UNKNOWN_HOOK, TOKEN_Y, TOKEN_Z);
    let logs = vec![initialize_log(&known, 10), initialize_log(&unknown, 11)];

    let mut pipeline = scanner(logs, MockPoolLoader::new(), CollectingSink::default());
    let summary = pipeline.run().await.unwrap();

    assert_eq!(
        summary,
        ScanSummary {
            keys: 2,
            emitted: 1,
            skipped: 1,
            failed: 0
        }
    );

    let records = &pipeline.sink().records;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.coin_type, CoinType::ZoraCreatorCoin);
    assert_eq!(record.app_type, AppType::Tba);
    assert_eq!(record.address, TOKEN_X);
    assert_eq!(record.id, known.pool_id());
    // Subject is currency1, priced in currency0
    assert_eq!(record.price, "0.25");
}

#[tokio::test]
async fn test_unpaired_coin_defaults_to_currency0() {
    let key = pool_key(HOOK_B, TOKEN_Y, TOKEN_Z);

    let mut pipeline = scanner(
        vec![initialize_log(&key, 1)],
        MockPoolLoader::new(),
        CollectingSink::default(),
    );
    pipeline.run().await.unwrap();

    let records = &pipeline.sink().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].coin_type, CoinType::ZoraV4Coin);
    assert_eq!(records[0].app_type, AppType::Zora);
    assert_eq!(records[0].address, TOKEN_Y);
    assert_eq!(records[0].price, "4");
}

#[tokio::test]
async fn test_native_currency_counts_as_base_pairing() {
    // currency0 is native ether, canonicalized to WETH by the loader
    let key = pool_key(HOOK_B, alloy_primitives::Address::ZERO, TOKEN_X);

    let mut pipeline = scanner(
        vec![initialize_log(&key, 1)],
        MockPoolLoader::new(),
        CollectingSink::default(),
    );
    pipeline.run().await.unwrap();

    let record = &pipeline.sink().records[0];
    assert_eq!(record.app_type, AppType::Tba);
    assert_eq!(record.address, TOKEN_X);
}

#[tokio::test]
async fn test_loader_failure_is_isolated() {
    let first = pool_key(HOOK_A, USDC, TOKEN_X);
    let second = pool_key(HOOK_B, WETH, TOKEN_Y);
    let logs = vec![initialize_log(&first, 1), initialize_log(&second, 2)];

    let loader = MockPoolLoader::new().failing_for(&first);
    let mut pipeline = scanner(logs, loader, CollectingSink::default());
    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.emitted, 1);
    let records = &pipeline.sink().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address, TOKEN_Y);
}

#[tokio::test]
async fn test_log_fetch_failure_is_fatal() {
    let key = pool_key(HOOK_A, USDC, TOKEN_X);
    let source = MockLogSource::new(vec![initialize_log(&key, 1)]).failing_logs();

    let mut pipeline = PoolScanner::new(
        EventScanner::new(source, 2_000),
        MockPoolLoader::new(),
        CollectingSink::default(),
    )
    .with_block_range(BlockRange::Fixed { from: 0, to: 10 })
    .with_pacing(Pacing::none());

    let result = pipeline.run().await;

    assert!(matches!(result, Err(ScanError::LogFetch(_))));
    assert!(pipeline.sink().records.is_empty());
}

#[tokio::test]
async fn test_head_failure_is_fatal_for_trailing_range() {
    let source = MockLogSource::new(vec![]).failing_head();

    let mut pipeline = PoolScanner::new(
        EventScanner::new(source, 2_000),
        MockPoolLoader::new(),
        CollectingSink::default(),
    )
    .with_block_range(BlockRange::Trailing { blocks: 1_000 })
    .with_pacing(Pacing::none());

    assert!(matches!(
        pipeline.run().await,
        Err(ScanError::LatestBlock(_))
    ));
}

#[tokio::test]
async fn test_trailing_range_is_one_request() {
    let key = pool_key(HOOK_A, USDC, TOKEN_X);
    let old = pool_key(HOOK_B, TOKEN_Y, TOKEN_Z);
    let source =
        MockLogSource::new(vec![initialize_log(&old, 3_999), initialize_log(&key, 4_500)])
            .with_head(5_000);

    let mut pipeline = PoolScanner::new(
        EventScanner::new(source, 2_000),
        MockPoolLoader::new(),
        CollectingSink::default(),
    )
    .with_block_range(BlockRange::Trailing { blocks: 1_000 })
    .with_pacing(Pacing::none());

    let summary = pipeline.run().await.unwrap();

    // [head - 1000, head] fits in one 2000-block request
    assert_eq!(pipeline.scanner().source().requests(), vec![(4_000, 5_000)]);
    assert_eq!(summary.keys, 1);
    assert_eq!(pipeline.sink().records[0].address, TOKEN_X);
}

#[tokio::test]
async fn test_inverted_fixed_range_rejected() {
    let mut pipeline = scanner(vec![], MockPoolLoader::new(), CollectingSink::default())
        .with_block_range(BlockRange::Fixed { from: 10, to: 9 });

    assert!(matches!(
        pipeline.run().await,
        Err(ScanError::InvalidRange { from: 10, to: 9 })
    ));
}

#[tokio::test]
async fn test_undecodable_log_is_skipped() {
    let key = pool_key(HOOK_A, USDC, TOKEN_X);
    let logs = vec![garbage_log(1), initialize_log(&key, 2)];

    let mut pipeline = scanner(logs, MockPoolLoader::new(), CollectingSink::default());
    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.keys, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.emitted, 1);
}

#[tokio::test]
async fn test_rejected_hooks_are_never_loaded() {
    let logs = vec![
        initialize_log(&pool_key(UNKNOWN_HOOK, USDC, TOKEN_X), 1),
        initialize_log(&pool_key(alloy_primitives::Address::ZERO, USDC, TOKEN_Y), 2),
    ];

    let mut pipeline = scanner(logs, MockPoolLoader::new(), CollectingSink::default());
    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.skipped, 2);
    assert!(pipeline.sink().records.is_empty());
}

#[tokio::test]
async fn test_sink_failure_is_fatal() {
    let key = pool_key(HOOK_A, USDC, TOKEN_X);
    let mut pipeline = scanner(vec![initialize_log(&key, 1)], MockPoolLoader::new(), BrokenSink);

    assert!(matches!(pipeline.run().await, Err(ScanError::Emit { .. })));
}

#[tokio::test]
async fn test_records_follow_log_order() {
    let keys = [
        pool_key(HOOK_A, USDC, TOKEN_X),
        pool_key(HOOK_B, TOKEN_Y, TOKEN_Z),
        pool_key(HOOK_A, WETH, TOKEN_Z),
    ];
    let logs = keys
        .iter()
        .enumerate()
        .map(|(i, k)| initialize_log(k, i as u64))
        .collect();

    let mut pipeline = scanner(logs, MockPoolLoader::new(), CollectingSink::default());
    pipeline.run().await.unwrap();

    let ids: Vec<_> = pipeline.sink().records.iter().map(|r| r.id).collect();
    let expected: Vec<_> = keys.iter().map(|k| k.pool_id()).collect();
    assert_eq!(ids, expected);
}

mod pacing {
    use super::*;
    use tokio::time::Instant;

    fn paced(
        logs: Vec<Log>,
        loader: MockPoolLoader,
    ) -> PoolScanner<MockLogSource, MockPoolLoader, CollectingSink> {
        PoolScanner::new(
            EventScanner::new(MockLogSource::new(logs), 2_000),
            loader,
            CollectingSink::default(),
        )
        .with_block_range(BlockRange::Fixed { from: 0, to: 100 })
        .with_pacing(Pacing::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_standard_interval_between_pools() {
        let keys = [
            pool_key(HOOK_A, USDC, TOKEN_X),
            pool_key(HOOK_B, USDC, TOKEN_Y),
            pool_key(HOOK_A, WETH, TOKEN_Z),
        ];
        let logs = keys.iter().map(|k| initialize_log(k, 1)).collect();

        let start = Instant::now();
        let mut pipeline = paced(logs, MockPoolLoader::new());
        pipeline.run().await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_applies_to_skipped_pools() {
        let logs = vec![
            initialize_log(&pool_key(HOOK_A, USDC, TOKEN_X), 1),
            initialize_log(&pool_key(UNKNOWN_HOOK, USDC, TOKEN_Y), 2),
            garbage_log(3),
            initialize_log(&pool_key(HOOK_B, USDC, TOKEN_Z), 4),
        ];

        let start = Instant::now();
        let mut pipeline = paced(logs, MockPoolLoader::new());
        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.emitted, 2);
        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_adds_backoff_before_next_pool() {
        let first = pool_key(HOOK_A, USDC, TOKEN_X);
        let second = pool_key(HOOK_B, USDC, TOKEN_Y);
        let logs = vec![initialize_log(&first, 1), initialize_log(&second, 2)];

        let start = Instant::now();
        let mut pipeline = paced(logs, MockPoolLoader::new().failing_for(&first));
        pipeline.run().await.unwrap();

        // 15s backoff after the failure plus the 10s standard wait
        assert_eq!(start.elapsed(), Duration::from_secs(25));
    }
}

fn hook_strategy() -> impl Strategy<Value = alloy_primitives::Address> {
    prop_oneof![Just(HOOK_A), Just(HOOK_B), Just(UNKNOWN_HOOK)]
}

proptest! {
    /// Property: emitted records equal keys that are both classifiable and loadable
    #[test]
    fn prop_emitted_count(pools in prop::collection::vec((hook_strategy(), any::<bool>()), 0..12)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();

        let tokens = [TOKEN_X, TOKEN_Y, TOKEN_Z];
        let mut loader = MockPoolLoader::new();
        let mut logs = Vec::new();
        let mut expected = 0;

        for (i, (hooks, fails)) in pools.iter().enumerate() {
            // Vary the fee so every key has its own pool id
            let mut key = pool_key(*hooks, USDC, tokens[i % tokens.len()]);
            key.fee = alloy_primitives::aliases::U24::from(i as u32);
            if *fails {
                loader = loader.failing_for(&key);
            } else if *hooks != UNKNOWN_HOOK {
                expected += 1;
            }
            logs.push(initialize_log(&key, i as u64));
        }

        let mut pipeline = scanner(logs, loader, CollectingSink::default());
        let summary = runtime.block_on(pipeline.run()).unwrap();

        prop_assert_eq!(summary.emitted, expected);
        prop_assert_eq!(pipeline.sink().records.len(), expected);
        prop_assert_eq!(summary.emitted + summary.skipped + summary.failed, pools.len());
    }
}
