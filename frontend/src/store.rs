//! The four collections fetched from the backend.
//!
//! Each `StoreAction` replaces exactly one collection, so every field has a
//! single writer: the fetch for its endpoint.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::draft::{DraftAction, TransactionDraft};
use crate::error::{ApiError, Notice};
use crate::model::{CategorySummary, DailyBalancePoint, MonthlyBalancePoint, Transaction};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataStore {
    pub transactions: Vec<Transaction>,
    pub daily_balance: Vec<DailyBalancePoint>,
    pub monthly_balance: Vec<MonthlyBalancePoint>,
    pub summary: Vec<CategorySummary>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    ReplaceTransactions(Vec<Transaction>),
    ReplaceDailyBalance(Vec<DailyBalancePoint>),
    ReplaceMonthlyBalance(Vec<MonthlyBalancePoint>),
    ReplaceSummary(Vec<CategorySummary>),
}

impl Reducible for DataStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::ReplaceTransactions(list) => next.transactions = list,
            StoreAction::ReplaceDailyBalance(list) => next.daily_balance = list,
            StoreAction::ReplaceMonthlyBalance(list) => next.monthly_balance = list,
            StoreAction::ReplaceSummary(list) => next.summary = list,
        }
        Rc::new(next)
    }
}

/// Outcome of one fetch: the replacing action, or the notice to show instead.
pub fn fetch_outcome<T>(
    result: Result<Vec<T>, ApiError>,
    action: &'static str,
    replace: impl FnOnce(Vec<T>) -> StoreAction,
) -> Result<StoreAction, Notice> {
    match result {
        Ok(list) => {
            log::info!("{}: {} record(s)", action, list.len());
            Ok(replace(list))
        }
        Err(error) => {
            log::warn!("{} failed: {}", action, error);
            Err(Notice::new(action, error))
        }
    }
}

/// Outcome of a submission: the draft reset to apply before refetching, or
/// the notice to show. A failed submission keeps the draft and skips the
/// refetch.
pub fn submit_outcome(
    result: Result<(), ApiError>,
    submitted: TransactionDraft,
) -> Result<DraftAction, Notice> {
    match result {
        Ok(()) => Ok(DraftAction::ClearIfUnchanged(submitted)),
        Err(error) => {
            log::warn!("adding transaction failed: {}", error);
            Err(Notice::new("salvar a transação", error))
        }
    }
}

fn apply(
    outcome: Result<StoreAction, Notice>,
    store: &UseReducerDispatcher<DataStore>,
    notice: &UseStateHandle<Option<Notice>>,
) {
    match outcome {
        Ok(action) => store.dispatch(action),
        Err(failure) => notice.set(Some(failure)),
    }
}

/// Starts the four fetches independently; each lands whenever it completes.
///
/// A failed fetch leaves its collection as it was.
pub fn refresh_all(
    api: &ApiClient,
    store: UseReducerDispatcher<DataStore>,
    notice: UseStateHandle<Option<Notice>>,
) {
    {
        let (api, store, notice) = (api.clone(), store.clone(), notice.clone());
        spawn_local(async move {
            let outcome = fetch_outcome(
                api.transactions().await,
                "carregar as transações",
                StoreAction::ReplaceTransactions,
            );
            apply(outcome, &store, &notice);
        });
    }
    {
        let (api, store, notice) = (api.clone(), store.clone(), notice.clone());
        spawn_local(async move {
            let outcome = fetch_outcome(
                api.daily_balance().await,
                "carregar o saldo diário",
                StoreAction::ReplaceDailyBalance,
            );
            apply(outcome, &store, &notice);
        });
    }
    {
        let (api, store, notice) = (api.clone(), store.clone(), notice.clone());
        spawn_local(async move {
            let outcome = fetch_outcome(
                api.monthly_balance().await,
                "carregar o saldo mensal",
                StoreAction::ReplaceMonthlyBalance,
            );
            apply(outcome, &store, &notice);
        });
    }
    let api = api.clone();
    spawn_local(async move {
        let outcome = fetch_outcome(
            api.summary().await,
            "carregar o resumo",
            StoreAction::ReplaceSummary,
        );
        apply(outcome, &store, &notice);
    });
}
