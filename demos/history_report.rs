/// Example: run the full historical analysis and dump the report as JSON
///
/// Usage: RPC_URL=http://archive-node:8545 cargo run --example history_report > report.json
///
/// Charts go to stderr so stdout only carries the JSON report.

use alloy::providers::ProviderBuilder;
use eyre::Result;
use pool_tick_history::{analyze_pool_history, Config, RpcPoolReader, TerminalChartRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    let provider = ProviderBuilder::new().connect_http(config.endpoint_url.parse()?);
    let reader = RpcPoolReader::new(provider, config.pool_address);
    let mut renderer = TerminalChartRenderer::new(std::io::stderr());

    let report = analyze_pool_history(&reader, &mut renderer, &config).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
