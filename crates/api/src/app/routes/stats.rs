use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use unipos_core::{Money, money};

use crate::app::AppState;
use crate::app::dto::StatsResponse;
use crate::app::errors::ApiError;
use crate::context::CurrentUser;

/// `GET /stats`: exact decimal folds over sales, cost of goods, and
/// expenses. Pure read, no side effects.
pub async fn get_stats(
    Extension(state): Extension<Arc<AppState>>,
    Extension(_current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    let sales = state.store.scan_sales();
    let expenses = state.store.scan_expenses();

    let total_sales = money::total(sales.iter().map(|s| s.total));
    let total_cogs = money::total(sales.iter().map(|s| s.cogs.unwrap_or(Money::ZERO)));
    let total_expenses = money::total(expenses.iter().map(|e| e.amount));
    let gross_profit = total_sales - total_cogs;

    let stats = StatsResponse {
        total_sales,
        total_cogs,
        total_expenses,
        gross_profit,
        net_profit: gross_profit - total_expenses,
        sales_count: sales.len(),
        product_count: state.store.scan_products().len(),
    };

    Ok((StatusCode::OK, Json(stats)).into_response())
}
