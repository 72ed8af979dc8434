//! Refresh driver: fetches every source and routes results into the
//! dashboard service.

use std::sync::Arc;

use log::{debug, warn};

use stakefolio_chain_data::{
    BondedSource, ConfigProvider, LiquidBalanceSource, PriceSource, SessionProvider,
    UnbondingSource, WithdrawableSource,
};

use super::dashboard_service::DashboardService;
use crate::symbols::SymbolSetResolver;

/// Runs one refresh cycle against the chain data sources.
///
/// A cycle reads the wallet session, resolves the tracked symbol set from
/// the chain configuration, fetches the four category sources and the
/// reference price concurrently, and applies each result to the
/// [`DashboardService`] as it is. Source failures degrade their own category
/// and never abort the cycle, so `refresh` itself is infallible.
pub struct DashboardRefresher {
    dashboard_service: Arc<DashboardService>,
    session_provider: Arc<dyn SessionProvider>,
    config_provider: Arc<dyn ConfigProvider>,
    bonded_source: Arc<dyn BondedSource>,
    liquid_source: Arc<dyn LiquidBalanceSource>,
    unbonding_source: Arc<dyn UnbondingSource>,
    withdrawable_source: Arc<dyn WithdrawableSource>,
    price_source: Arc<dyn PriceSource>,
    symbol_resolver: SymbolSetResolver,
    network: String,
    chain_id: String,
}

impl DashboardRefresher {
    /// Creates a new DashboardRefresher instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dashboard_service: Arc<DashboardService>,
        session_provider: Arc<dyn SessionProvider>,
        config_provider: Arc<dyn ConfigProvider>,
        bonded_source: Arc<dyn BondedSource>,
        liquid_source: Arc<dyn LiquidBalanceSource>,
        unbonding_source: Arc<dyn UnbondingSource>,
        withdrawable_source: Arc<dyn WithdrawableSource>,
        price_source: Arc<dyn PriceSource>,
        network: impl Into<String>,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            dashboard_service,
            session_provider,
            config_provider,
            bonded_source,
            liquid_source,
            unbonding_source,
            withdrawable_source,
            price_source,
            symbol_resolver: SymbolSetResolver::new(),
            network: network.into(),
            chain_id: chain_id.into(),
        }
    }

    /// Run one refresh cycle.
    ///
    /// When no wallet is connected only the session is pushed; no source is
    /// queried. Otherwise all fetches run concurrently and every result is
    /// applied, successes and failures alike.
    pub async fn refresh(&self) {
        let session = self.session_provider.current_session();
        self.dashboard_service.set_session(session.clone());

        let Some(address) = session.address() else {
            debug!("No wallet connected, skipping source refresh");
            return;
        };

        let config = match self
            .config_provider
            .bonding_config(&self.network, &self.chain_id)
            .await
        {
            Ok(config) => config,
            Err(error) => {
                warn!("Failed to load bonding config: {}", error);
                None
            }
        };
        let symbols = self.symbol_resolver.resolve(config.as_ref());
        self.dashboard_service.set_symbols(symbols.clone());

        let (bonded, liquid, unbonding, withdrawable, price) = futures::join!(
            self.bonded_source.bonded_positions(address),
            self.liquid_source.balances(address, symbols.as_slice()),
            self.unbonding_source.unbonding_requests(address),
            self.withdrawable_source.withdrawable_records(address),
            self.price_source.reference_price(),
        );

        self.dashboard_service.apply_bonded(address, bonded);
        self.dashboard_service.apply_liquid(address, liquid);
        self.dashboard_service.apply_unbonding(address, unbonding);
        self.dashboard_service.apply_withdrawable(address, withdrawable);

        match price {
            Ok(price) => self.dashboard_service.set_reference_price(price),
            // Price is display only; keep the last known value on failure.
            Err(error) => warn!("Reference price fetch failed: {}", error),
        }
    }
}
