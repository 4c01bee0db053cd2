//! Dashboard Data Routes
//!
//! - GET /api/v1/dashboard     - Sample snapshot
//! - GET /api/v1/revenue/chart - Revenue chart series

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::data::DashboardData;
use crate::render::{revenue_chart, LineChart};

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardData> {
    Json(state.data.snapshot())
}

/// GET /api/v1/revenue/chart
pub async fn get_revenue_chart(State(state): State<Arc<AppState>>) -> Json<LineChart> {
    Json(revenue_chart(&state.data.data().revenue_history))
}
