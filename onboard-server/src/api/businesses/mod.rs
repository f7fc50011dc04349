//! Business API 模块
//!
//! 门店 (location) 以其在商户门店列表中的位置 (从 0 开始) 寻址。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/businesses", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{legal_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{legal_id}/locations",
            get(handler::list_locations).post(handler::add_location),
        )
        .route(
            "/{legal_id}/locations/{position}",
            get(handler::get_location)
                .put(handler::update_location)
                .patch(handler::update_location)
                .delete(handler::remove_location),
        )
}
