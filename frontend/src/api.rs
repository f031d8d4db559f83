use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::draft::TransactionDraft;
use crate::error::ApiError;
use crate::model::{decoded, CategorySummary, DailyBalancePoint, Lenient, MonthlyBalancePoint, Transaction};

pub const TRANSACTIONS_PATH: &str = "get_transactions";
pub const DAILY_BALANCE_PATH: &str = "get_daily_balance";
pub const MONTHLY_BALANCE_PATH: &str = "get_monthly_balance";
pub const SUMMARY_PATH: &str = "get_summary";
pub const ADD_TRANSACTION_PATH: &str = "add_transaction";

/// Thin wrapper over the five backend endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Records that cannot be decoded are dropped so one bad row does not
    /// blank the list.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let records: Vec<Lenient<Transaction>> = self.get_json(TRANSACTIONS_PATH).await?;
        let (transactions, skipped) = decoded(records);
        if skipped > 0 {
            log::warn!("skipped {} undecodable transaction(s)", skipped);
        }
        Ok(transactions)
    }

    pub async fn daily_balance(&self) -> Result<Vec<DailyBalancePoint>, ApiError> {
        self.get_json(DAILY_BALANCE_PATH).await
    }

    pub async fn monthly_balance(&self) -> Result<Vec<MonthlyBalancePoint>, ApiError> {
        self.get_json(MONTHLY_BALANCE_PATH).await
    }

    pub async fn summary(&self) -> Result<Vec<CategorySummary>, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    /// Posts the draft as typed. Only the status of the response is inspected.
    pub async fn add_transaction(&self, draft: &TransactionDraft) -> Result<(), ApiError> {
        let url = self.config.url(ADD_TRANSACTION_PATH);
        let request = Request::post(&url)
            .json(draft)
            .map_err(ApiError::from_body)?;
        let resp = request.send().await.map_err(ApiError::from_send)?;
        check_status(&resp)?;
        log::info!("created transaction via {}", url);
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::from_send)?;
        check_status(&resp)?;
        let body = resp.json::<T>().await.map_err(ApiError::from_body)?;
        log::debug!("fetched {}", url);
        Ok(body)
    }
}

fn check_status(resp: &Response) -> Result<(), ApiError> {
    match ApiError::from_status(resp.status()) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
