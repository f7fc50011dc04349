//! Contract API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use crate::api::AppResult;
use crate::core::ServerState;
use shared::models::{ContractFilter, ContractId, CustomerId, Terms, TermsCreate, TermsUpdate};
use shared::{Keyed, Mutation};

/// GET /api/customers/:id/contracts - 客户的合同 (可按 status / product 过滤)
pub async fn list(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
    query: Result<Query<ContractFilter>, QueryRejection>,
) -> AppResult<Json<Keyed<ContractId, Terms>>> {
    let Path(customer_id) = path?;
    let Query(filter) = query?;
    let contracts = state.contracts.find_for_customer(customer_id, &filter)?;
    Ok(Json(Keyed::new(contracts)))
}

/// GET /api/customers/:id/contracts/:contract_id
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, ContractId)>, PathRejection>,
) -> AppResult<Json<Terms>> {
    let Path((customer_id, contract_id)) = path?;
    Ok(Json(state.contracts.find_by_id(customer_id, contract_id)?))
}

/// POST /api/customers/:id/contracts - 创建合同 (客户和商户必须存在)
pub async fn create(
    State(state): State<ServerState>,
    path: Result<Path<CustomerId>, PathRejection>,
    payload: Result<Json<TermsCreate>, JsonRejection>,
) -> AppResult<Json<Mutation<Terms>>> {
    let Path(customer_id) = path?;
    let Json(payload) = payload?;
    let terms = state.contracts.create(customer_id, payload)?;

    tracing::info!(
        customer_id,
        contract_id = terms.contract_id,
        product = %terms.product,
        fee = terms.fee,
        "Contract created"
    );
    Ok(Json(Mutation::Added(terms)))
}

/// PUT/PATCH /api/customers/:id/contracts/:contract_id
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, ContractId)>, PathRejection>,
    payload: Result<Json<TermsUpdate>, JsonRejection>,
) -> AppResult<Json<Mutation<Terms>>> {
    let Path((customer_id, contract_id)) = path?;
    let Json(payload) = payload?;
    let terms = state.contracts.update(customer_id, contract_id, payload)?;

    tracing::info!(customer_id, contract_id, "Contract updated");
    Ok(Json(Mutation::Updated(terms)))
}

/// POST /api/customers/:id/contracts/:contract_id/sign - 签署合同
pub async fn sign(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, ContractId)>, PathRejection>,
) -> AppResult<Json<Mutation<Terms>>> {
    let Path((customer_id, contract_id)) = path?;
    let terms = state.contracts.sign(customer_id, contract_id)?;

    tracing::info!(customer_id, contract_id, "Contract signed");
    Ok(Json(Mutation::Updated(terms)))
}

/// DELETE /api/customers/:id/contracts/:contract_id
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<(CustomerId, ContractId)>, PathRejection>,
) -> AppResult<Json<Mutation<Terms>>> {
    let Path((customer_id, contract_id)) = path?;
    let terms = state.contracts.delete(customer_id, contract_id)?;

    tracing::info!(customer_id, contract_id, "Contract deleted");
    Ok(Json(Mutation::Deleted(terms)))
}
