//! Business API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::api::AppResult;
use crate::core::ServerState;
use shared::models::{Business, BusinessCreate, BusinessUpdate, Location, LocationUpdate};
use shared::{Keyed, Mutation};

/// GET /api/businesses - 获取所有商户
pub async fn list(State(state): State<ServerState>) -> Json<Keyed<String, Business>> {
    Json(Keyed::new(state.businesses.find_all()))
}

/// GET /api/businesses/:legal_id - 获取单个商户
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Business>> {
    let Path(legal_id) = path?;
    Ok(Json(state.businesses.find_by_id(&legal_id)?))
}

/// POST /api/businesses - 创建商户 (客户必须存在，至少一个门店)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BusinessCreate>, JsonRejection>,
) -> AppResult<Json<Mutation<Business>>> {
    let Json(payload) = payload?;
    let business = state.businesses.create(payload)?;

    tracing::info!(
        legal_id = %business.legal_id,
        customer_id = business.customer_id,
        locations = business.locations.len(),
        "Business created"
    );
    Ok(Json(Mutation::Added(business)))
}

/// PUT/PATCH /api/businesses/:legal_id - 更新商户
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<BusinessUpdate>, JsonRejection>,
) -> AppResult<Json<Mutation<Business>>> {
    let Path(legal_id) = path?;
    let Json(payload) = payload?;
    let business = state.businesses.update(&legal_id, payload)?;

    tracing::info!(legal_id = %legal_id, "Business updated");
    Ok(Json(Mutation::Updated(business)))
}

/// DELETE /api/businesses/:legal_id - 删除商户
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Mutation<Business>>> {
    let Path(legal_id) = path?;
    let business = state.businesses.delete(&legal_id)?;

    tracing::info!(legal_id = %legal_id, "Business deleted");
    Ok(Json(Mutation::Deleted(business)))
}

// ── Locations ───────────────────────────────────────────────────────

/// GET /api/businesses/:legal_id/locations
pub async fn list_locations(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Keyed<usize, Location>>> {
    let Path(legal_id) = path?;
    let locations = state.businesses.list_locations(&legal_id)?;
    Ok(Json(Keyed::new(locations.into_iter().enumerate().collect())))
}

/// GET /api/businesses/:legal_id/locations/:position
pub async fn get_location(
    State(state): State<ServerState>,
    path: Result<Path<(String, usize)>, PathRejection>,
) -> AppResult<Json<Location>> {
    let Path((legal_id, position)) = path?;
    Ok(Json(state.businesses.get_location(&legal_id, position)?))
}

/// POST /api/businesses/:legal_id/locations - 追加门店
pub async fn add_location(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Location>, JsonRejection>,
) -> AppResult<Json<Mutation<Location>>> {
    let Path(legal_id) = path?;
    let Json(payload) = payload?;
    let (position, location) = state.businesses.add_location(&legal_id, payload)?;

    tracing::info!(legal_id = %legal_id, position, "Location added");
    Ok(Json(Mutation::Added(location)))
}

/// PUT/PATCH /api/businesses/:legal_id/locations/:position
pub async fn update_location(
    State(state): State<ServerState>,
    path: Result<Path<(String, usize)>, PathRejection>,
    payload: Result<Json<LocationUpdate>, JsonRejection>,
) -> AppResult<Json<Mutation<Location>>> {
    let Path((legal_id, position)) = path?;
    let Json(payload) = payload?;
    let location = state
        .businesses
        .update_location(&legal_id, position, payload)?;

    tracing::info!(legal_id = %legal_id, position, "Location updated");
    Ok(Json(Mutation::Updated(location)))
}

/// DELETE /api/businesses/:legal_id/locations/:position - 删除门店 (不能删除最后一个)
pub async fn remove_location(
    State(state): State<ServerState>,
    path: Result<Path<(String, usize)>, PathRejection>,
) -> AppResult<Json<Mutation<Location>>> {
    let Path((legal_id, position)) = path?;
    let location = state.businesses.remove_location(&legal_id, position)?;

    tracing::info!(legal_id = %legal_id, position, "Location removed");
    Ok(Json(Mutation::Deleted(location)))
}
