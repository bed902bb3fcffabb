use crate::error::AppError;
use crate::model::requests::MarginRequest;
use crate::presentation::account::{
    AnalyzerStatus, Funds, Holdings, Margin, OrderBook, PositionBook, TradeBook,
};
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Available cash and margin usage
    async fn funds(&self) -> Result<Funds, AppError>;

    /// The day's orders with counters
    async fn order_book(&self) -> Result<OrderBook, AppError>;

    /// The day's executions
    async fn trade_book(&self) -> Result<TradeBook, AppError>;

    /// Net positions
    async fn position_book(&self) -> Result<PositionBook, AppError>;

    /// Delivery holdings with portfolio totals
    async fn holdings(&self) -> Result<Holdings, AppError>;

    /// Whether orders are currently simulated
    async fn analyzer_status(&self) -> Result<AnalyzerStatus, AppError>;

    /// Switches between analyze (`true`) and live (`false`) mode
    async fn analyzer_toggle(&self, analyze: bool) -> Result<AnalyzerStatus, AppError>;

    /// Margin required for a set of positions
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - if no position is given
    async fn margin(&self, request: &MarginRequest) -> Result<Margin, AppError>;
}
