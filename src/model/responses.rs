/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::presentation::serialization::{
    null_as_empty_vec, number_as_string_opt, string_as_int_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Standard `{"status": "success", "data": ...}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Payload
    pub data: T,
    /// `live` or `analyze`, sent by some endpoints
    #[serde(default)]
    pub mode: Option<String>,
}

/// `{"status": "success", "results": [...]}` envelope used by `multiquotes`
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsResponse<T> {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Per-item results
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Acknowledgement of an order operation
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Broker order id
    #[serde(default, deserialize_with = "number_as_string_opt")]
    pub orderid: Option<String>,
    /// `live` or `analyze`
    #[serde(default)]
    pub mode: Option<String>,
    /// Additional message
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of one order of a basket
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BasketOrderResult {
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// `success` or `error`
    #[serde(default)]
    pub status: Option<String>,
    /// Broker order id
    #[serde(default, deserialize_with = "number_as_string_opt")]
    pub orderid: Option<String>,
    /// Error detail
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement of `basketorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BasketOrderResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Per-order outcomes in request order
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub results: Vec<BasketOrderResult>,
}

/// Outcome of one child order of a split
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SplitOrderResult {
    /// Child order number, starting at 1
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub order_num: Option<i64>,
    /// Child quantity
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub quantity: Option<i64>,
    /// `success` or `error`
    #[serde(default)]
    pub status: Option<String>,
    /// Broker order id
    #[serde(default, deserialize_with = "number_as_string_opt")]
    pub orderid: Option<String>,
    /// Error detail
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement of `splitorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SplitOrderResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Child orders
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub results: Vec<SplitOrderResult>,
    /// Quantity per child
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub split_size: Option<i64>,
    /// Quantity requested
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub total_quantity: Option<i64>,
}

/// Acknowledgement of `cancelallorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CancelAllResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Summary message
    #[serde(default)]
    pub message: Option<String>,
    /// Ids of cancelled orders
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub canceled_orders: Vec<serde_json::Value>,
    /// Ids of orders that could not be cancelled
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub failed_cancellations: Vec<serde_json::Value>,
}

/// Response carrying only a status and message
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Message
    #[serde(default)]
    pub message: Option<String>,
}
