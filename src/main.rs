use alloy::providers::ProviderBuilder;
use eyre::Result;
use pool_tick_history::{analyze_pool_history, Config, RpcPoolReader, TerminalChartRenderer};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    println!("Pool: {}", config.pool_address);
    println!("Blocks: {} -> {}", config.start_block, config.end_block);
    println!(
        "Tick window: [{}, {}]",
        config.tick_window.lower, config.tick_window.upper
    );

    let provider = ProviderBuilder::new().connect_http(config.endpoint_url.parse()?);
    let reader = RpcPoolReader::new(provider, config.pool_address);
    let mut renderer = TerminalChartRenderer::stdout();

    let report = analyze_pool_history(&reader, &mut renderer, &config).await?;

    println!(
        "USDC Balance: {}, WETH Balance: {}",
        report.balance.quote_amount, report.balance.base_amount
    );

    Ok(())
}
