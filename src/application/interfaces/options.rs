use crate::error::AppError;
use crate::model::requests::{
    OptionChainRequest, OptionGreeksRequest, OptionSymbolRequest, OptionsMultiOrderRequest,
    OptionsOrderRequest, SyntheticFutureRequest,
};
use crate::presentation::options::{
    OptionChain, OptionGreeks, OptionSymbol, OptionsMultiOrderResponse, OptionsOrderResponse,
    SyntheticFuture,
};
use async_trait::async_trait;

/// Interface for option analytics and option orders
#[async_trait]
pub trait OptionsService: Send + Sync {
    /// Implied volatility and greeks of a contract
    async fn option_greeks(&self, request: &OptionGreeksRequest)
    -> Result<OptionGreeks, AppError>;

    /// Resolves a strike from underlying, expiry and offset
    async fn option_symbol(&self, request: &OptionSymbolRequest)
    -> Result<OptionSymbol, AppError>;

    /// Places an order on a strike resolved server-side
    async fn options_order(
        &self,
        request: &OptionsOrderRequest,
    ) -> Result<OptionsOrderResponse, AppError>;

    /// Places a multi-leg option strategy
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - if there are no legs, or a leg has no expiry
    async fn options_multi_order(
        &self,
        request: &OptionsMultiOrderRequest,
    ) -> Result<OptionsMultiOrderResponse, AppError>;

    /// Option chain around ATM
    async fn option_chain(&self, request: &OptionChainRequest) -> Result<OptionChain, AppError>;

    /// Futures price implied by ATM put-call parity
    async fn synthetic_future(
        &self,
        request: &SyntheticFutureRequest,
    ) -> Result<SyntheticFuture, AppError>;
}
