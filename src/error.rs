use thiserror::Error;

/// Errors raised by a single state query against the node.
///
/// Per-tick failures are absorbed by the sampler; block lookups surface
/// to the run as fatal [`AnalysisError`]s.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Transport, node or revert failure while executing the call.
    #[error("RPC error: {0}")]
    Rpc(String),
    /// The requested block height does not exist on the node.
    #[error("Block {0} not found")]
    BlockNotFound(u64),
    /// The tick cannot be encoded as an `int24` argument.
    #[error("Tick {0} is outside the int24 range")]
    InvalidTick(i32),
    /// A returned field does not fit the sampled integer type.
    #[error("Field {field} of tick {tick} does not fit in i128")]
    Overflow { tick: i32, field: &'static str },
}

/// Invalid compiled-in or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tick window [{lower}, {upper}] is empty")]
    EmptyTickWindow { lower: i32, upper: i32 },
    #[error("Tick {0} is outside [MIN_TICK, MAX_TICK]")]
    TickOutOfRange(i32),
}

/// Fatal errors that stop a run before any chart is drawn.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Unable to connect to Ethereum node at {0}, check the RPC endpoint")]
    NotConnected(String),
    #[error("Unable to find block {0}")]
    BlockNotFound(u64),
    #[error("Failed to look up block {block}: {source}")]
    BlockLookup {
        block: u64,
        #[source]
        source: QueryError,
    },
    #[error("Chart rendering failed: {0}")]
    Render(#[from] std::io::Error),
}
