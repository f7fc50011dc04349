//! Payment API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::api::AppResult;
use crate::core::ServerState;
use shared::Mutation;
use shared::models::{CustomerId, Payment, PaymentCreate, PaymentUpdate};

/// GET /api/customers/:id/payments - 客户的付款信息
pub async fn list(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> AppResult<Json<Vec<Payment>>> {
    let Path(customer_id) = path?;
    Ok(Json(state.payments.find_for_customer(customer_id)?))
}

/// GET /api/customers/:id/payments/:business_id
pub async fn get_by_key(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, String)>, PathRejection>,
) -> AppResult<Json<Payment>> {
    let Path((customer_id, business_id)) = path?;
    Ok(Json(state.payments.find_by_key(customer_id, &business_id)?))
}

/// POST /api/customers/:id/payments - 登记付款信息 (卡号仅保留后四位)
pub async fn create(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
    payload: Result<Json<PaymentCreate>, JsonRejection>,
) -> AppResult<Json<Mutation<Payment>>> {
    let Path(customer_id) = path?;
    let Json(payload) = payload?;
    let payment = state.payments.create(customer_id, payload)?;

    tracing::info!(customer_id, business_id = %payment.business_id, "Payment details added");
    Ok(Json(Mutation::Added(payment)))
}

/// PUT/PATCH /api/customers/:id/payments/:business_id
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, String)>, PathRejection>,
    payload: Result<Json<PaymentUpdate>, JsonRejection>,
) -> AppResult<Json<Mutation<Payment>>> {
    let Path((customer_id, business_id)) = path?;
    let Json(payload) = payload?;
    let payment = state.payments.update(customer_id, &business_id, payload)?;

    tracing::info!(customer_id, business_id = %business_id, "Payment details updated");
    Ok(Json(Mutation::Updated(payment)))
}

/// DELETE /api/customers/:id/payments/:business_id
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, String)>, PathRejection>,
) -> AppResult<Json<Mutation<Payment>>> {
    let Path((customer_id, business_id)) = path?;
    let payment = state.payments.delete(customer_id, &business_id)?;

    tracing::info!(customer_id, business_id = %business_id, "Payment details deleted");
    Ok(Json(Mutation::Deleted(payment)))
}
