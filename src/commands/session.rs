//! Per-user UI state: current page, transfer draft and history view

use tracing::debug;

use crate::config::Config;
use crate::models::{HistoryQuery, Route, Transaction, TransferDraft};
use crate::services::history_service::HistoryService;
use crate::services::transfer_service::TransferService;
use crate::utils::{HistoryError, OutcomeSource};

/// Where the history list is in its fetch lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loaded(Vec<Transaction>),
    Failed(HistoryError),
}

/// State of the history page. Discarded when the user navigates away.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryView {
    pub load: LoadState,
    pub query: HistoryQuery,
    pub page: usize,
}

pub struct Session {
    pub config: Config,
    pub route: Route,
    pub draft: TransferDraft,
    pub history: HistoryView,
    pub show_balance: bool,
    pub transfers: TransferService,
    pub loader: HistoryService,
}

impl Session {
    pub fn new(
        config: Config,
        submit_outcomes: Box<dyn OutcomeSource>,
        load_outcomes: Box<dyn OutcomeSource>,
    ) -> Self {
        let transfers = TransferService::new(&config, submit_outcomes);
        let loader = HistoryService::new(&config, load_outcomes);
        Session {
            config,
            route: Route::Root,
            draft: TransferDraft::default(),
            history: HistoryView::default(),
            show_balance: true,
            transfers,
            loader,
        }
    }

    /// Switch pages. Leaving the transfer page abandons the draft and leaving
    /// history throws away the loaded list and filters.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }

        debug!("Navigating {} -> {}", self.route, route);
        match self.route {
            Route::Transfer => self.draft = TransferDraft::default(),
            Route::History => self.history = HistoryView::default(),
            _ => {}
        }
        self.route = route;
    }

    /// Fetch the history list unless a fetch already happened for this view
    pub async fn ensure_history_loaded(&mut self) -> Result<&[Transaction], HistoryError> {
        if self.history.load == LoadState::Idle {
            self.history.load = match self.loader.load().await {
                Ok(list) => LoadState::Loaded(list),
                Err(e) => LoadState::Failed(e),
            };
        }

        match &self.history.load {
            LoadState::Loaded(list) => Ok(list),
            LoadState::Failed(e) => Err(e.clone()),
            LoadState::Idle => Err(HistoryError::NotLoaded),
        }
    }

    /// Throw away the history view and fetch again
    pub async fn reload_history(&mut self) -> Result<&[Transaction], HistoryError> {
        self.history = HistoryView::default();
        self.ensure_history_loaded().await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::utils::FixedOutcome;
    use chrono::NaiveDate;
    use std::time::Duration;

    /// Session with no delays, a pinned clock (2025-06-19 17:00) and scripted outcomes
    pub fn session(submit: FixedOutcome, load: FixedOutcome) -> Session {
        let config = Config {
            submit_delay: Duration::ZERO,
            load_delay: Duration::ZERO,
            now: NaiveDate::from_ymd_opt(2025, 6, 19).and_then(|d| d.and_hms_opt(17, 0, 0)),
            ..Config::default()
        };
        Session::new(config, Box::new(submit), Box::new(load))
    }
}
