/// Integration tests against a live archive node
///
/// Run with: cargo test --test rpc_history -- --ignored --nocapture --test-threads=1
///
/// Required environment variables:
/// - RPC_URL: archive RPC endpoint (defaults to http://localhost:8545)
use alloy::providers::ProviderBuilder;
use pool_tick_history::{
    analyze_pool_history, ChartRenderer, Config, PoolStateReader, QueryError, RpcPoolReader,
    TerminalChartRenderer, TickField, TickSampler,
};
use std::time::Instant;

fn get_rpc_url() -> String {
    std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string())
}

fn reader(config: &Config) -> RpcPoolReader<impl alloy::providers::Provider> {
    let provider = ProviderBuilder::new().connect_http(get_rpc_url().parse().unwrap());
    RpcPoolReader::new(provider, config.pool_address)
}

#[tokio::test]
#[ignore] // Requires archive RPC access
async fn test_resolve_reference_blocks() {
    let config = Config::default();
    let reader = reader(&config);

    assert!(reader.is_connected().await);

    let start = reader.get_block(config.start_block).await.unwrap();
    let end = reader.get_block(config.end_block).await.unwrap();

    println!("Start block {} hash {} ts {}", start.number, start.hash, start.timestamp);
    println!("End block {} hash {} ts {}", end.number, end.hash, end.timestamp);

    assert_eq!(start.number, config.start_block);
    assert_eq!(end.number, config.end_block);
    assert!(end.timestamp > start.timestamp);
}

#[tokio::test]
#[ignore] // Requires archive RPC access
async fn test_unknown_block_is_not_found() {
    let config = Config::default();
    let reader = reader(&config);

    let err = reader.get_block(u64::MAX / 2).await.unwrap_err();

    assert!(matches!(err, QueryError::BlockNotFound(_)));
}

#[tokio::test]
#[ignore] // Requires archive RPC access
async fn test_sample_window_at_start_block() {
    let config = Config::default();
    let reader = reader(&config);
    let block = reader.get_block(config.start_block).await.unwrap();

    let started = Instant::now();
    let sampler = TickSampler::new(&reader, config.tick_window);
    let distribution = sampler.sample_field(&block, TickField::Liquidity).await;
    println!("Sampled {} ticks in {:?}", distribution.len(), started.elapsed());

    assert_eq!(distribution.len(), config.tick_window.len());
    assert!(distribution.values().all(|v| *v >= 0));

    let mut renderer = TerminalChartRenderer::stdout();
    renderer
        .render_bar_chart(&pool_tick_history::BarChart::liquidity(&distribution, block.number))
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires archive RPC access
async fn test_full_run() {
    let config = Config {
        endpoint_url: get_rpc_url(),
        ..Config::default()
    };
    let reader = reader(&config);

    let report = analyze_pool_history(&reader, &mut TerminalChartRenderer::stdout(), &config)
        .await
        .unwrap();

    println!(
        "USDC Balance: {}, WETH Balance: {}",
        report.balance.quote_amount, report.balance.base_amount
    );
    assert!(report.pool_liquidity.is_some());
    assert_eq!(report.liquidity.len(), 51);
    assert_eq!(report.fees.len(), 51);
}
