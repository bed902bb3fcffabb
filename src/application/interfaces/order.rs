use crate::error::AppError;
use crate::model::requests::{
    BasketOrderRequest, ModifyOrderRequest, OpenPositionRequest, OrderRefRequest,
    PlaceOrderRequest, SmartOrderRequest, SplitOrderRequest, StrategyRequest,
};
use crate::model::responses::{
    BasketOrderResponse, CancelAllResponse, MessageResponse, OrderResponse, SplitOrderResponse,
};
use crate::presentation::account::{OpenPosition, Order};
use async_trait::async_trait;

/// Interface for order placement and management
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Places a regular order (`placeorder`)
    async fn place_order(&self, order: &PlaceOrderRequest) -> Result<OrderResponse, AppError>;

    /// Places an order sized to reach a target position (`placesmartorder`)
    async fn place_smart_order(&self, order: &SmartOrderRequest)
    -> Result<OrderResponse, AppError>;

    /// Places several orders at once (`basketorder`)
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - if the basket is empty
    async fn basket_order(
        &self,
        basket: &BasketOrderRequest,
    ) -> Result<BasketOrderResponse, AppError>;

    /// Splits a large order into smaller ones (`splitorder`)
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - if the split size is zero
    async fn split_order(&self, order: &SplitOrderRequest)
    -> Result<SplitOrderResponse, AppError>;

    /// Modifies an open order (`modifyorder`)
    async fn modify_order(&self, order: &ModifyOrderRequest) -> Result<OrderResponse, AppError>;

    /// Cancels one order (`cancelorder`)
    async fn cancel_order(&self, order: &OrderRefRequest) -> Result<OrderResponse, AppError>;

    /// Cancels every open order of a strategy (`cancelallorder`)
    async fn cancel_all_orders(
        &self,
        strategy: &StrategyRequest,
    ) -> Result<CancelAllResponse, AppError>;

    /// Squares off every position of a strategy (`closeposition`)
    async fn close_position(&self, strategy: &StrategyRequest)
    -> Result<MessageResponse, AppError>;

    /// Current state of one order (`orderstatus`)
    async fn order_status(&self, order: &OrderRefRequest) -> Result<Order, AppError>;

    /// Net open quantity of a symbol under a strategy (`openposition`)
    async fn open_position(&self, query: &OpenPositionRequest)
    -> Result<OpenPosition, AppError>;
}
