use crate::error::AppError;
use crate::model::requests::{
    ExpiryRequest, HistoryRequest, MultiQuotesRequest, SearchRequest, SymbolRequest,
};
use crate::presentation::market::{
    Depth, History, Intervals, MultiQuote, Quote, SymbolInfo, SymbolList,
};
use async_trait::async_trait;

/// Interface for market data
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Level 1 quote of one symbol
    async fn quotes(&self, symbol: &SymbolRequest) -> Result<Quote, AppError>;

    /// Quotes of several symbols in one call
    async fn multi_quotes(&self, request: &MultiQuotesRequest)
    -> Result<Vec<MultiQuote>, AppError>;

    /// Order book depth of one symbol
    async fn depth(&self, symbol: &SymbolRequest) -> Result<Depth, AppError>;

    /// Candle history, sorted and deduplicated, in IST
    async fn history(&self, request: &HistoryRequest) -> Result<History, AppError>;

    /// Candle intervals the broker supports
    async fn intervals(&self) -> Result<Intervals, AppError>;

    /// Instrument master record of one symbol
    async fn symbol(&self, symbol: &SymbolRequest) -> Result<SymbolInfo, AppError>;

    /// Free text instrument search
    async fn search(&self, request: &SearchRequest) -> Result<SymbolList, AppError>;

    /// Expiry dates of an underlying's futures or options
    async fn expiry(&self, request: &ExpiryRequest) -> Result<Vec<String>, AppError>;

    /// Instrument master, optionally for one exchange (HTTP GET)
    async fn instruments(&self, exchange: Option<&str>) -> Result<SymbolList, AppError>;
}
