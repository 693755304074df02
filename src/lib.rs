pub mod chart;
pub mod config;
pub mod contracts;
pub mod error;
pub mod position;
pub mod reader;
pub mod sampler;
pub mod tick_math;
pub mod types;

pub use chart::{BarChart, ChartRenderer, TerminalChartRenderer};
pub use config::Config;
pub use error::{AnalysisError, ConfigError, QueryError};
pub use position::{compute_balance, position_balance};
pub use reader::{PoolStateReader, RpcPoolReader};
pub use sampler::TickSampler;
pub use types::{
    BlockHandle, PoolHistoryReport, PositionBalance, PositionRange, TickDistribution, TickField,
    TickRecord, TickWindow,
};

/// Reconstruct the pool's tick distributions between two blocks
///
/// # Steps
/// 1. Validate `config` and check that the node is reachable
/// 2. Resolve the start and end blocks
/// 3. Sample liquidity at the start block and render it
/// 4. Sample the fee field at the end block and render it
/// 5. Fold the start-block liquidity over the configured position range
///
/// Connectivity and block lookup failures abort the run before any tick is
/// queried. Individual tick failures only show up as zero bars.
///
/// # Example
/// ```no_run
/// use alloy::providers::ProviderBuilder;
/// use pool_tick_history::{analyze_pool_history, Config, RpcPoolReader, TerminalChartRenderer};
///
/// # async fn run() -> eyre::Result<()> {
/// let config = Config::from_env();
/// let provider = ProviderBuilder::new().connect_http(config.endpoint_url.parse()?);
/// let reader = RpcPoolReader::new(provider, config.pool_address);
///
/// let report =
///     analyze_pool_history(&reader, &mut TerminalChartRenderer::stdout(), &config).await?;
/// println!("{:?}", report.balance);
/// # Ok(())
/// # }
/// ```
pub async fn analyze_pool_history<R, C>(
    reader: &R,
    renderer: &mut C,
    config: &Config,
) -> Result<PoolHistoryReport, AnalysisError>
where
    R: PoolStateReader,
    C: ChartRenderer,
{
    config.validate()?;

    if !reader.is_connected().await {
        return Err(AnalysisError::NotConnected(config.endpoint_url.clone()));
    }
    tracing::info!("Connected to {}", config.endpoint_url);

    let start_block = resolve_block(reader, config.start_block).await?;
    let end_block = resolve_block(reader, config.end_block).await?;

    let pool_liquidity = match reader.pool_liquidity(&start_block).await {
        Ok(liquidity) => {
            tracing::info!("Pool liquidity at block {}: {liquidity}", start_block.number);
            Some(liquidity)
        }
        Err(e) => {
            tracing::warn!("Failed to read pool liquidity at block {}: {e}", start_block.number);
            None
        }
    };

    let sampler = TickSampler::new(reader, config.tick_window);

    let liquidity = sampler.sample_field(&start_block, TickField::Liquidity).await;
    renderer.render_bar_chart(&BarChart::liquidity(&liquidity, start_block.number))?;

    let fees = sampler.sample_field(&end_block, TickField::FeeGrowth).await;
    renderer.render_bar_chart(&BarChart::fees(&fees, start_block.number, end_block.number))?;

    let balance = position_balance(&liquidity, config.position);
    tracing::info!(
        "Position [{}, {}]: quote {}, base {}",
        config.position.lower,
        config.position.upper,
        balance.quote_amount,
        balance.base_amount
    );

    Ok(PoolHistoryReport {
        pool_address: config.pool_address,
        start_block,
        end_block,
        pool_liquidity,
        liquidity,
        fees,
        position: config.position,
        balance,
    })
}

async fn resolve_block<R: PoolStateReader>(
    reader: &R,
    number: u64,
) -> Result<BlockHandle, AnalysisError> {
    let block = reader.get_block(number).await.map_err(|source| match source {
        QueryError::BlockNotFound(block) => AnalysisError::BlockNotFound(block),
        source => AnalysisError::BlockLookup {
            block: number,
            source,
        },
    })?;
    tracing::debug!("Resolved block {} ({})", block.number, block.hash);
    Ok(block)
}
