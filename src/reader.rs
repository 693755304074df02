/// Historical pool state queries over JSON-RPC
///
/// Every state query is an `eth_call` pinned to a block that was resolved
/// first with `eth_getBlockByNumber`, so the node must serve archive state
/// for the requested heights.

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::providers::Provider;
use alloy_primitives::aliases::I24;
use alloy_primitives::Address;

use crate::contracts::IUniswapV3Pool;
use crate::error::QueryError;
use crate::types::{BlockHandle, TickRecord};

/// Read access to the ledger and to the pool's contract state.
///
/// Calls are awaited one at a time by the sampler; implementations need
/// not be safe for overlapping use.
#[allow(async_fn_in_trait)]
pub trait PoolStateReader {
    /// Whether the node answers requests at all
    async fn is_connected(&self) -> bool;

    /// Resolve a block height, failing with [`QueryError::BlockNotFound`]
    /// when the node does not know it
    async fn get_block(&self, number: u64) -> Result<BlockHandle, QueryError>;

    /// Aggregate in-range liquidity of the pool at `block`
    async fn pool_liquidity(&self, block: &BlockHandle) -> Result<u128, QueryError>;

    /// The `ticks(tick)` record at `block`
    async fn tick_record(&self, tick: i32, block: &BlockHandle) -> Result<TickRecord, QueryError>;
}

/// [`PoolStateReader`] backed by an alloy provider
#[derive(Debug, Clone)]
pub struct RpcPoolReader<P> {
    provider: P,
    pool_address: Address,
}

impl<P: Provider> RpcPoolReader<P> {
    pub fn new(provider: P, pool_address: Address) -> Self {
        Self {
            provider,
            pool_address,
        }
    }

    fn pool(&self) -> IUniswapV3Pool::IUniswapV3PoolInstance<&P> {
        IUniswapV3Pool::new(self.pool_address, &self.provider)
    }
}

impl<P: Provider> PoolStateReader for RpcPoolReader<P> {
    async fn is_connected(&self) -> bool {
        match self.provider.get_block_number().await {
            Ok(head) => {
                tracing::debug!("Connected to node, head block {head}");
                true
            }
            Err(e) => {
                tracing::debug!("Connectivity check failed: {e}");
                false
            }
        }
    }

    async fn get_block(&self, number: u64) -> Result<BlockHandle, QueryError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .await
            .map_err(|e| QueryError::Rpc(e.to_string()))?
            .ok_or(QueryError::BlockNotFound(number))?;

        Ok(BlockHandle {
            number: block.header.inner.number,
            hash: block.header.hash,
            timestamp: block.header.inner.timestamp,
        })
    }

    async fn pool_liquidity(&self, block: &BlockHandle) -> Result<u128, QueryError> {
        self.pool()
            .liquidity()
            .block(BlockId::number(block.number))
            .call()
            .await
            .map_err(|e| QueryError::Rpc(e.to_string()))
    }

    async fn tick_record(&self, tick: i32, block: &BlockHandle) -> Result<TickRecord, QueryError> {
        let tick_arg = I24::try_from(tick).map_err(|_| QueryError::InvalidTick(tick))?;

        let ret = self
            .pool()
            .ticks(tick_arg)
            .block(BlockId::number(block.number))
            .call()
            .await
            .map_err(|e| QueryError::Rpc(e.to_string()))?;

        Ok(TickRecord::from_call(tick, ret))
    }
}
