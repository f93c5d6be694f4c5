use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use debtpilot_core::payoff::{DebtPlanSummary, PayoffComparison, PayoffMilestone, PayoffStrategy};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CompareRequest, PayoffRequest},
};

fn run_simulation(state: &AppState, request: &PayoffRequest) -> ApiResult<PayoffStrategy> {
    let ordering = request.ordering()?;
    let strategy = state.payoff_service.simulate(
        &request.debts,
        request.extra_payment,
        &ordering,
        request.priority_mode,
    )?;
    Ok(strategy)
}

async fn simulate_payoff(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PayoffRequest>,
) -> ApiResult<Json<PayoffStrategy>> {
    let strategy = run_simulation(&state, &request)?;
    Ok(Json(strategy))
}

async fn compare_strategies(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<Json<PayoffComparison>> {
    let comparison = state
        .payoff_service
        .compare(&request.debts, request.extra_payment)?;
    Ok(Json(comparison))
}

async fn get_milestones(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PayoffRequest>,
) -> ApiResult<Json<Vec<PayoffMilestone>>> {
    let strategy = run_simulation(&state, &request)?;
    Ok(Json(state.payoff_service.milestones(&strategy)))
}

async fn get_plan_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PayoffRequest>,
) -> ApiResult<Json<DebtPlanSummary>> {
    let ordering = request.ordering()?;
    let summary = state.payoff_service.plan_summary(
        &request.debts,
        request.extra_payment,
        &ordering,
        request.priority_mode,
    )?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debt-payoff/simulate", post(simulate_payoff))
        .route("/debt-payoff/compare", post(compare_strategies))
        .route("/debt-payoff/milestones", post(get_milestones))
        .route("/debt-payoff/summary", post(get_plan_summary))
}
