use std::sync::Arc;

use debtpilot_core::payoff::{PayoffService, PayoffServiceTrait, SimulationOptions};
use debtpilot_core::utils::time_utils::SystemClock;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub payoff_service: Arc<dyn PayoffServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let options = SimulationOptions {
        priority_mode: config.priority_mode,
    };
    tracing::info!("Payoff engine priority mode: {:?}", options.priority_mode);
    let payoff_service = Arc::new(PayoffService::new(Arc::new(SystemClock), options));
    Arc::new(AppState { payoff_service })
}
