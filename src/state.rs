// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion::CompletionClient;
use crate::services::exchange_log::ExchangeLog;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completions: CompletionClient,
    pub exchange_log: Option<ExchangeLog>,
}

impl AppState {
    pub fn new(config: &AppConfig, exchange_log: Option<ExchangeLog>) -> Self {
        Self {
            completions: CompletionClient::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                config.openai_base_url.clone(),
            ),
            exchange_log,
        }
    }
}
