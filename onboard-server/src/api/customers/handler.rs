//! Customer API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use crate::api::AppResult;
use crate::core::ServerState;
use shared::models::{Customer, CustomerCreate, CustomerFilter, CustomerId, CustomerUpdate};
use shared::{Keyed, Mutation, Selection};

/// GET /api/customers - 获取所有客户
pub async fn list(State(state): State<ServerState>) -> Json<Keyed<CustomerId, Customer>> {
    Json(Keyed::new(state.customers.find_all()))
}

/// GET /api/customers/search - 按字段等值查询客户
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<CustomerFilter>, QueryRejection>,
) -> AppResult<Json<Selection<CustomerFilter, Customer>>> {
    let Query(filter) = query?;
    let selection = state.customers.search(&filter);
    Ok(Json(Selection {
        query: filter,
        selection,
    }))
}

/// GET /api/customers/:id - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> AppResult<Json<Customer>> {
    let Path(id) = path?;
    Ok(Json(state.customers.find_by_id(id)?))
}

/// POST /api/customers - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> AppResult<Json<Mutation<Customer>>> {
    let Json(payload) = payload?;
    let customer = state.customers.create(payload)?;

    tracing::info!(customer_id = customer.id, "Customer created");
    Ok(Json(Mutation::Added(customer)))
}

/// PUT/PATCH /api/customers/:id - 更新客户 (仅覆盖提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
    payload: Result<Json<CustomerUpdate>, JsonRejection>,
) -> AppResult<Json<Mutation<Customer>>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let customer = state.customers.update(id, payload)?;

    tracing::info!(customer_id = id, "Customer updated");
    Ok(Json(Mutation::Updated(customer)))
}

/// DELETE /api/customers/:id - 删除客户
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> AppResult<Json<Mutation<Customer>>> {
    let Path(id) = path?;
    let customer = state.customers.delete(id)?;

    tracing::info!(customer_id = id, "Customer deleted");
    Ok(Json(Mutation::Deleted(customer)))
}
