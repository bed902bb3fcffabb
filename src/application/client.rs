/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::options::OptionsService;
use crate::application::interfaces::order::OrderService;
use crate::application::interfaces::utility::UtilityService;
use crate::error::AppError;
use crate::model::http::{HttpClient, NoPayload};
use crate::model::requests::{
    AnalyzerToggleRequest, BasketOrderRequest, ExpiryRequest, HistoryRequest, HolidaysRequest,
    MarginRequest, ModifyOrderRequest, MultiQuotesRequest, OpenPositionRequest,
    OptionChainRequest, OptionGreeksRequest, OptionSymbolRequest, OptionsMultiOrderRequest,
    OptionsOrderRequest, OrderRefRequest, PlaceOrderRequest, SearchRequest, SmartOrderRequest,
    SplitOrderRequest, StrategyRequest, SymbolRequest, SyntheticFutureRequest, TelegramRequest,
    TimingsRequest,
};
use crate::model::responses::{
    BasketOrderResponse, CancelAllResponse, DataResponse, MessageResponse, OrderResponse,
    ResultsResponse, SplitOrderResponse,
};
use crate::presentation::account::{
    AnalyzerStatus, Funds, Holdings, Margin, OpenPosition, Order, OrderBook, PositionBook,
    TradeBook,
};
use crate::presentation::market::{
    Depth, History, Intervals, MultiQuote, Quote, SymbolInfo, SymbolList,
};
use crate::presentation::options::{
    OptionChain, OptionGreeks, OptionSymbol, OptionsMultiOrderResponse, OptionsOrderResponse,
    SyntheticFuture,
};
use crate::presentation::utility::{Holidays, MarketTimings};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// OpenAlgo REST client
///
/// Implements every service interface; each method issues exactly one
/// request. Cloning is cheap and clones share the rate limiter.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from environment variables and `.env`
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Posts any payload to any endpoint and returns the raw JSON
    ///
    /// `apikey` is added to `payload`, which must serialize to a JSON object.
    pub async fn post_raw<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<Value, AppError> {
        info!("POST {}", endpoint);
        self.http_client.post_value(endpoint, payload).await
    }

    async fn data<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<T, AppError> {
        let response: DataResponse<T> = self.http_client.post(endpoint, payload).await?;
        debug!("{} returned data (mode: {:?})", endpoint, response.mode);
        Ok(response.data)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config().rest_api.base_url())
            .finish()
    }
}

#[async_trait]
impl OrderService for Client {
    async fn place_order(&self, order: &PlaceOrderRequest) -> Result<OrderResponse, AppError> {
        info!(
            "Placing {} order: {} {} {} on {}",
            order.price_type, order.action, order.quantity, order.symbol, order.exchange
        );
        let response: OrderResponse = self.http_client.post("placeorder", order).await?;
        debug!("Order placed: {:?}", response.orderid);
        Ok(response)
    }

    async fn place_smart_order(
        &self,
        order: &SmartOrderRequest,
    ) -> Result<OrderResponse, AppError> {
        info!(
            "Placing smart order: {} {} towards position {}",
            order.order.action, order.order.symbol, order.position_size
        );
        self.http_client.post("placesmartorder", order).await
    }

    async fn basket_order(
        &self,
        basket: &BasketOrderRequest,
    ) -> Result<BasketOrderResponse, AppError> {
        basket.validate()?;
        info!("Placing basket of {} orders", basket.orders.len());
        let response: BasketOrderResponse = self.http_client.post("basketorder", basket).await?;
        debug!("Basket results: {}", response.results.len());
        Ok(response)
    }

    async fn split_order(
        &self,
        order: &SplitOrderRequest,
    ) -> Result<SplitOrderResponse, AppError> {
        order.validate()?;
        info!(
            "Splitting {} {} into chunks of {}",
            order.quantity, order.symbol, order.split_size
        );
        self.http_client.post("splitorder", order).await
    }

    async fn modify_order(&self, order: &ModifyOrderRequest) -> Result<OrderResponse, AppError> {
        info!("Modifying order {}", order.order_id);
        self.http_client.post("modifyorder", order).await
    }

    async fn cancel_order(&self, order: &OrderRefRequest) -> Result<OrderResponse, AppError> {
        info!("Cancelling order {}", order.order_id);
        self.http_client.post("cancelorder", order).await
    }

    async fn cancel_all_orders(
        &self,
        strategy: &StrategyRequest,
    ) -> Result<CancelAllResponse, AppError> {
        info!("Cancelling all orders of strategy {}", strategy.strategy);
        let response: CancelAllResponse = self.http_client.post("cancelallorder", strategy).await?;
        debug!(
            "Cancelled: {}, failed: {}",
            response.canceled_orders.len(),
            response.failed_cancellations.len()
        );
        Ok(response)
    }

    async fn close_position(
        &self,
        strategy: &StrategyRequest,
    ) -> Result<MessageResponse, AppError> {
        info!("Closing positions of strategy {}", strategy.strategy);
        self.http_client.post("closeposition", strategy).await
    }

    async fn order_status(&self, order: &OrderRefRequest) -> Result<Order, AppError> {
        info!("Getting status of order {}", order.order_id);
        self.data("orderstatus", order).await
    }

    async fn open_position(
        &self,
        query: &OpenPositionRequest,
    ) -> Result<OpenPosition, AppError> {
        info!("Getting open position: {} {}", query.symbol, query.exchange);
        self.http_client.post("openposition", query).await
    }
}

#[async_trait]
impl AccountService for Client {
    async fn funds(&self) -> Result<Funds, AppError> {
        info!("Getting funds");
        self.data("funds", &NoPayload {}).await
    }

    async fn order_book(&self) -> Result<OrderBook, AppError> {
        info!("Getting order book");
        let book: OrderBook = self.data("orderbook", &NoPayload {}).await?;
        debug!("Order book: {} orders", book.orders.len());
        Ok(book)
    }

    async fn trade_book(&self) -> Result<TradeBook, AppError> {
        info!("Getting trade book");
        self.data("tradebook", &NoPayload {}).await
    }

    async fn position_book(&self) -> Result<PositionBook, AppError> {
        info!("Getting position book");
        self.data("positionbook", &NoPayload {}).await
    }

    async fn holdings(&self) -> Result<Holdings, AppError> {
        info!("Getting holdings");
        self.data("holdings", &NoPayload {}).await
    }

    async fn analyzer_status(&self) -> Result<AnalyzerStatus, AppError> {
        info!("Getting analyzer status");
        self.data("analyzer", &NoPayload {}).await
    }

    async fn analyzer_toggle(&self, analyze: bool) -> Result<AnalyzerStatus, AppError> {
        info!("Switching analyzer mode to {}", analyze);
        self.data("analyzer/toggle", &AnalyzerToggleRequest { mode: analyze })
            .await
    }

    async fn margin(&self, request: &MarginRequest) -> Result<Margin, AppError> {
        if request.positions.is_empty() {
            return Err(AppError::InvalidInput(
                "margin calculation requires at least one position".to_string(),
            ));
        }
        info!("Calculating margin for {} positions", request.positions.len());
        self.data("margin", request).await
    }
}

#[async_trait]
impl MarketService for Client {
    async fn quotes(&self, symbol: &SymbolRequest) -> Result<Quote, AppError> {
        info!("Getting quote: {} {}", symbol.symbol, symbol.exchange);
        self.data("quotes", symbol).await
    }

    async fn multi_quotes(
        &self,
        request: &MultiQuotesRequest,
    ) -> Result<Vec<MultiQuote>, AppError> {
        if request.symbols.is_empty() {
            return Err(AppError::InvalidInput(
                "multi quotes requires at least one symbol".to_string(),
            ));
        }
        info!("Getting quotes for {} symbols", request.symbols.len());
        let response: ResultsResponse<MultiQuote> =
            self.http_client.post("multiquotes", request).await?;
        Ok(response.results)
    }

    async fn depth(&self, symbol: &SymbolRequest) -> Result<Depth, AppError> {
        info!("Getting depth: {} {}", symbol.symbol, symbol.exchange);
        self.data("depth", symbol).await
    }

    async fn history(&self, request: &HistoryRequest) -> Result<History, AppError> {
        info!(
            "Getting {} history for {} {} from {} to {}",
            request.interval, request.symbol, request.exchange, request.start_date, request.end_date
        );
        let rows: Value = self.data("history", request).await?;
        let history = History::from_value(rows)?;
        debug!("History: {} candles", history.len());
        Ok(history)
    }

    async fn intervals(&self) -> Result<Intervals, AppError> {
        info!("Getting supported intervals");
        self.data("intervals", &NoPayload {}).await
    }

    async fn symbol(&self, symbol: &SymbolRequest) -> Result<SymbolInfo, AppError> {
        info!("Getting symbol info: {} {}", symbol.symbol, symbol.exchange);
        self.data("symbol", symbol).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<SymbolList, AppError> {
        info!("Searching symbols: {}", request.query);
        let list: SymbolList = self.data("search", request).await?;
        debug!("Search matched {} symbols", list.len());
        Ok(list)
    }

    async fn expiry(&self, request: &ExpiryRequest) -> Result<Vec<String>, AppError> {
        info!(
            "Getting {} expiries for {} {}",
            request.instrument_type, request.symbol, request.exchange
        );
        self.data("expiry", request).await
    }

    async fn instruments(&self, exchange: Option<&str>) -> Result<SymbolList, AppError> {
        info!("Downloading instruments for {}", exchange.unwrap_or("all exchanges"));
        let query: Vec<(&str, &str)> = exchange.map(|e| ("exchange", e)).into_iter().collect();
        let response: DataResponse<SymbolList> =
            self.http_client.get("instruments", &query).await?;
        debug!("Instruments: {} records", response.data.len());
        Ok(response.data)
    }
}

#[async_trait]
impl OptionsService for Client {
    async fn option_greeks(
        &self,
        request: &OptionGreeksRequest,
    ) -> Result<OptionGreeks, AppError> {
        info!("Getting option greeks: {} {}", request.symbol, request.exchange);
        self.http_client.post("optiongreeks", request).await
    }

    async fn option_symbol(
        &self,
        request: &OptionSymbolRequest,
    ) -> Result<OptionSymbol, AppError> {
        info!(
            "Resolving option symbol: {} {} {} {}",
            request.underlying, request.expiry_date, request.offset, request.option_type
        );
        self.http_client.post("optionsymbol", request).await
    }

    async fn options_order(
        &self,
        request: &OptionsOrderRequest,
    ) -> Result<OptionsOrderResponse, AppError> {
        if request.split_size == Some(0) {
            return Err(AppError::InvalidInput(
                "split size must be greater than zero".to_string(),
            ));
        }
        info!(
            "Placing option order: {} {} {} {} x{}",
            request.action, request.underlying, request.offset, request.option_type, request.quantity
        );
        let response: OptionsOrderResponse = self.http_client.post("optionsorder", request).await?;
        debug!("Option order placed on {:?}: {:?}", response.symbol, response.order_id);
        Ok(response)
    }

    async fn options_multi_order(
        &self,
        request: &OptionsMultiOrderRequest,
    ) -> Result<OptionsMultiOrderResponse, AppError> {
        request.validate()?;
        info!(
            "Placing {}-leg option order on {}",
            request.legs.len(),
            request.underlying
        );
        self.http_client.post("optionsmultiorder", request).await
    }

    async fn option_chain(&self, request: &OptionChainRequest) -> Result<OptionChain, AppError> {
        info!(
            "Getting option chain: {} {}",
            request.underlying, request.expiry_date
        );
        self.http_client.post("optionchain", request).await
    }

    async fn synthetic_future(
        &self,
        request: &SyntheticFutureRequest,
    ) -> Result<SyntheticFuture, AppError> {
        info!(
            "Getting synthetic future: {} {}",
            request.underlying, request.expiry_date
        );
        self.http_client.post("syntheticfuture", request).await
    }
}

#[async_trait]
impl UtilityService for Client {
    async fn holidays(&self, year: i32) -> Result<Holidays, AppError> {
        info!("Getting market holidays for {}", year);
        self.data("market/holidays", &HolidaysRequest { year }).await
    }

    async fn timings(&self, date: &str) -> Result<MarketTimings, AppError> {
        info!("Getting market timings for {}", date);
        self.data(
            "market/timings",
            &TimingsRequest {
                date: date.to_string(),
            },
        )
        .await
    }

    async fn telegram(&self, request: &TelegramRequest) -> Result<MessageResponse, AppError> {
        if !(1..=10).contains(&request.priority) {
            return Err(AppError::InvalidInput(format!(
                "telegram priority must be between 1 and 10, got {}",
                request.priority
            )));
        }
        info!("Sending telegram notification to {}", request.username);
        self.http_client.post("telegram/notify", request).await
    }
}
