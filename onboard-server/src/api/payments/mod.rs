//! Payment API 模块 - 每个 (客户, 商户) 一条付款信息

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers/{id}/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{business_id}",
            get(handler::get_by_key)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
