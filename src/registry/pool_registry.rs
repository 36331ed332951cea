//! In-memory registry of pools keyed by pair.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::{
    AddLiquidityQuote, Amount, BasisPoints, Direction, Liquidity, LiquidityQuote, PairId,
    PoolSnapshot, RemoveLiquidityQuote, SlippageBound, SwapQuote, SwapSpec,
};
use crate::engine::{LiquidityEngine, SwapQuoteEngine};
use crate::error::{AmmError, Result};
use crate::pool::Pool;
use crate::traits::FromConfig;

type PoolHandle = Arc<RwLock<Pool>>;

/// Maps pair identifiers to pools and serialises mutations per pool.
///
/// # Locking
///
/// The map sits behind one [`RwLock`] that is only write-locked to add a
/// pool.  Each pool has its own [`RwLock`]:
///
/// - quoting takes the pool's read lock just long enough to copy the
///   state, then prices the copy without holding any lock;
/// - applying takes the pool's write lock, so mutations of one pool are
///   serialised while other pools stay independent.
///
/// Quote and application are separate steps; a quote applied after the
/// pool moved on is rejected with [`AmmError::StaleQuote`].
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::domain::{Amount, BasisPoints, Direction, SwapSpec};
/// use hydra_cpmm::registry::PoolRegistry;
///
/// let registry = PoolRegistry::new();
/// let pair = "ETH/USDC".parse().expect("valid pair");
/// registry
///     .create_pool(&pair, Amount::new(1_000_000), Amount::new(1_000_000), BasisPoints::new(30))
///     .expect("new pool");
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
/// let quote = registry.get_quote(&pair, spec, Direction::AToB, None).expect("quote");
/// assert_eq!(quote.output_amount(), Amount::new(996));
///
/// let snapshot = registry.apply_quote(&pair, &quote).expect("fresh");
/// assert_eq!(snapshot.version, 1);
/// ```
#[derive(Debug)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PairId, PoolHandle>>,
    default_slippage: BasisPoints,
    high_impact: BasisPoints,
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolRegistry {
    /// Creates an empty registry with the default thresholds (0.5%
    /// slippage tolerance, 5% high-impact warning).
    #[must_use]
    pub fn new() -> Self {
        let defaults = EngineConfig::default();
        Self::with_thresholds(defaults.default_slippage_bps, defaults.high_impact_bps)
    }

    /// Creates an empty registry with explicit thresholds.
    #[must_use]
    pub fn with_thresholds(default_slippage: BasisPoints, high_impact: BasisPoints) -> Self {
        Self {
            pools: RwLock::new(HashMap::new()),
            default_slippage,
            high_impact,
        }
    }

    /// Slippage tolerance used by [`default_bound`](Self::default_bound).
    #[must_use]
    pub const fn default_slippage(&self) -> BasisPoints {
        self.default_slippage
    }

    /// Impact magnitude above which quotes are logged as high impact.
    #[must_use]
    pub const fn high_impact_threshold(&self) -> BasisPoints {
        self.high_impact
    }

    /// Creates and registers a live pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAlreadyExists`] if the pair or its reverse is
    ///   already registered.
    /// - Any error of [`Pool::create`].
    pub fn create_pool(
        &self,
        pair: &PairId,
        reserve_a: Amount,
        reserve_b: Amount,
        fee_bps: BasisPoints,
    ) -> Result<PoolSnapshot> {
        self.register(Pool::create(pair.clone(), reserve_a, reserve_b, fee_bps)?)
    }

    /// Registers an already-built pool (live or empty).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if the pair or its reverse
    /// is already registered.
    pub fn register(&self, pool: Pool) -> Result<PoolSnapshot> {
        let pair = pool.pair().clone();
        let mut pools = self.pools.write();
        if pools.contains_key(&pair) || pools.contains_key(&pair.reversed()) {
            return Err(AmmError::PoolAlreadyExists(pair));
        }
        let snapshot = pool.snapshot();
        pools.insert(pair, Arc::new(RwLock::new(pool)));
        info!(
            pair = %snapshot.pair,
            reserve_a = %snapshot.reserve_a,
            reserve_b = %snapshot.reserve_b,
            fee = %snapshot.fee,
            lp_supply = %snapshot.total_lp_supply,
            "pool registered"
        );
        Ok(snapshot)
    }

    /// Prices a swap on `pair`, optionally bounded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`SwapQuoteEngine::quote`].
    pub fn get_quote(
        &self,
        pair: &PairId,
        spec: SwapSpec,
        direction: Direction,
        bound: Option<SlippageBound>,
    ) -> Result<SwapQuote> {
        let pool = self.read_pool(pair)?;
        let quote = SwapQuoteEngine::quote(&pool, spec, direction, bound.as_ref())?;
        debug!(
            %pair,
            %direction,
            %spec,
            input = %quote.input_amount(),
            output = %quote.output_amount(),
            impact = %quote.price_impact(),
            version = quote.pool_version(),
            "swap quoted"
        );
        if quote.is_high_impact(self.high_impact) {
            warn!(
                %pair,
                impact = %quote.price_impact(),
                threshold = %self.high_impact,
                "high price impact"
            );
        }
        Ok(quote)
    }

    /// Builds the registry's default bound for a quote: its output less
    /// [`default_slippage`](Self::default_slippage).
    ///
    /// # Errors
    ///
    /// Any error of [`SlippageBound::from_tolerance`].
    pub fn default_bound(&self, quote: &SwapQuote) -> Result<SlippageBound> {
        SlippageBound::from_tolerance(quote.output_amount(), self.default_slippage)
    }

    /// Applies a swap quote to `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`Pool::apply_swap`]; the pool is unchanged on error.
    pub fn apply_quote(&self, pair: &PairId, quote: &SwapQuote) -> Result<PoolSnapshot> {
        let handle = self.handle(pair)?;
        let mut pool = handle.write();
        let snapshot = pool.apply_swap(quote).inspect_err(|e| log_rejection(pair, e))?;
        info!(
            %pair,
            direction = %quote.direction(),
            input = %quote.input_amount(),
            output = %quote.output_amount(),
            fee = %quote.fee_amount(),
            version = snapshot.version,
            "swap applied"
        );
        Ok(snapshot)
    }

    /// Prices a deposit on `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`LiquidityEngine::quote_add`].
    pub fn get_add_liquidity_quote(
        &self,
        pair: &PairId,
        desired_a: Amount,
        desired_b: Amount,
    ) -> Result<AddLiquidityQuote> {
        let pool = self.read_pool(pair)?;
        let quote = LiquidityEngine::quote_add(&pool, desired_a, desired_b)?;
        debug!(
            %pair,
            deposit_a = %quote.deposit_a(),
            deposit_b = %quote.deposit_b(),
            minted = %quote.lp_minted(),
            version = quote.pool_version(),
            "deposit quoted"
        );
        Ok(quote)
    }

    /// Prices burning `lp_tokens` on `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`LiquidityEngine::quote_remove`].
    pub fn get_remove_liquidity_quote(
        &self,
        pair: &PairId,
        lp_tokens: Liquidity,
    ) -> Result<RemoveLiquidityQuote> {
        let pool = self.read_pool(pair)?;
        let quote = LiquidityEngine::quote_remove(&pool, lp_tokens)?;
        debug!(
            %pair,
            burned = %quote.lp_burned(),
            withdraw_a = %quote.withdraw_a(),
            withdraw_b = %quote.withdraw_b(),
            version = quote.pool_version(),
            "withdrawal quoted"
        );
        Ok(quote)
    }

    /// Prices burning `percent` of a held LP balance on `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`LiquidityEngine::quote_remove_percent`].
    pub fn get_remove_liquidity_percent_quote(
        &self,
        pair: &PairId,
        held: Liquidity,
        percent: BasisPoints,
    ) -> Result<RemoveLiquidityQuote> {
        let pool = self.read_pool(pair)?;
        LiquidityEngine::quote_remove_percent(&pool, held, percent)
    }

    /// Applies a deposit or withdrawal quote to `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - Any error of [`Pool::apply_liquidity`]; the pool is unchanged on
    ///   error.
    pub fn apply_liquidity(
        &self,
        pair: &PairId,
        quote: impl Into<LiquidityQuote>,
    ) -> Result<PoolSnapshot> {
        let quote = quote.into();
        let handle = self.handle(pair)?;
        let mut pool = handle.write();
        let snapshot = pool
            .apply_liquidity(&quote)
            .inspect_err(|e| log_rejection(pair, e))?;
        info!(
            %pair,
            %quote,
            lp_supply = %snapshot.total_lp_supply,
            version = snapshot.version,
            "liquidity applied"
        );
        Ok(snapshot)
    }

    /// Returns the current state of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if `pair` is not registered.
    pub fn get_pool_snapshot(&self, pair: &PairId) -> Result<PoolSnapshot> {
        Ok(self.handle(pair)?.read().snapshot())
    }

    /// Returns `true` if `pair` is registered (in this orientation).
    #[must_use]
    pub fn contains(&self, pair: &PairId) -> bool {
        self.pools.read().contains_key(pair)
    }

    /// Lists registered pairs in lexicographic order.
    #[must_use]
    pub fn pairs(&self) -> Vec<PairId> {
        let mut pairs: Vec<PairId> = self.pools.read().keys().cloned().collect();
        pairs.sort();
        pairs
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    fn handle(&self, pair: &PairId) -> Result<PoolHandle> {
        self.pools
            .read()
            .get(pair)
            .cloned()
            .ok_or_else(|| AmmError::PoolNotFound(pair.clone()))
    }

    fn read_pool(&self, pair: &PairId) -> Result<Pool> {
        Ok(self.handle(pair)?.read().clone())
    }
}

fn log_rejection(pair: &PairId, error: &AmmError) {
    match error {
        AmmError::StaleQuote { quoted, current } => {
            warn!(%pair, quoted, current, "stale quote rejected");
        }
        other => warn!(%pair, error = %other, "quote rejected"),
    }
}

impl FromConfig<EngineConfig> for PoolRegistry {
    /// Builds a registry holding every configured pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`EngineConfig::validate`] or
    /// [`Pool::from_config`].
    fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let registry = Self::with_thresholds(config.default_slippage_bps, config.high_impact_bps);
        for pool_config in &config.pools {
            registry.register(Pool::from_config(pool_config)?)?;
        }
        info!(pools = registry.len(), "registry loaded from config");
        Ok(registry)
    }
}
