use crate::calculator::{self, Operation};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{CalculateQuery, CalculateResponse};
use crate::routes;
use axum::{extract::Query, http::StatusCode, Json};

/// GET /api/calculate handler - Four-operation integer calculator
///
/// Query parameters:
/// - a, b: integer operands
/// - operation: one of add, subtract, multiply, divide
///
/// Division by zero, unknown operations and overflow are reported as 400s.
#[utoipa::path(
    get,
    path = routes::CALCULATE,
    params(
        ("a" = i64, Query, description = "Left operand"),
        ("b" = i64, Query, description = "Right operand"),
        ("operation" = String, Query, description = "One of: add, subtract, multiply, divide")
    ),
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Unknown operation, division by zero or overflow", body = ErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn calculate_handler(
    Query(query): Query<CalculateQuery>,
) -> Result<(StatusCode, Json<CalculateResponse>), ApiError> {
    let op: Operation = query.operation.parse().inspect_err(|e| {
        tracing::warn!("Rejected calculation: {}", e);
    })?;

    let result = calculator::calculate(query.a, query.b, op).inspect_err(|e| {
        tracing::warn!("Rejected calculation {} {} {}: {}", query.a, op, query.b, e);
    })?;

    Ok((
        StatusCode::OK,
        Json(CalculateResponse {
            a: query.a,
            b: query.b,
            operation: op.to_string(),
            result,
        }),
    ))
}
