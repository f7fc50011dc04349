//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`customers`] - 客户管理接口 (含条件查询)
//! - [`businesses`] - 商户及门店管理接口
//! - [`contracts`] - 客户合同接口 (含签署)
//! - [`payments`] - 客户付款信息接口
//!
//! 变更类接口返回 `{"added"|"updated"|"deleted": 记录}`，
//! 查询类接口返回记录本身或 `{"items": {id: 记录}}`。

pub mod businesses;
pub mod contracts;
pub mod customers;
pub mod health;
pub mod payments;

// Re-export common types for handlers
pub use crate::utils::AppResult;
