use crate::error::AppError;
use crate::model::requests::TelegramRequest;
use crate::model::responses::MessageResponse;
use crate::presentation::utility::{Holidays, MarketTimings};
use async_trait::async_trait;

/// Interface for market calendar and notifications
#[async_trait]
pub trait UtilityService: Send + Sync {
    /// Market holidays of a year
    async fn holidays(&self, year: i32) -> Result<Holidays, AppError>;

    /// Trading sessions of a day, `date` as `YYYY-MM-DD`
    async fn timings(&self, date: &str) -> Result<MarketTimings, AppError>;

    /// Sends a telegram message through the OpenAlgo bot
    async fn telegram(&self, request: &TelegramRequest) -> Result<MessageResponse, AppError>;
}
