use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::core::{Config, Result, ServerError};
use crate::store::repository::{
    BusinessRepository, ContractRepository, CustomerRepository, PaymentRepository, Stores,
};
use crate::store::seed::seed_demo_data;

/// 服务器状态 - 持有配置和各实体仓库的共享引用
///
/// 所有字段均为 `Arc` 或可廉价克隆的句柄，克隆 `ServerState` 只是浅拷贝。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | stores | 各实体的内存存储 |
/// | customers / businesses / contracts / payments | 仓库 (校验 + 外键检查) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub stores: Stores,
    pub customers: CustomerRepository,
    pub businesses: BusinessRepository,
    pub contracts: ContractRepository,
    pub payments: PaymentRepository,
    started_at: Instant,
}

/// Record counts per entity kind
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StoreCounts {
    pub customers: usize,
    pub businesses: usize,
    pub contracts: usize,
    pub payments: usize,
}

impl ServerState {
    /// 创建空的服务器状态
    pub fn new(config: Config) -> Self {
        let stores = Stores::new();
        Self {
            customers: CustomerRepository::new(stores.customers.clone()),
            businesses: BusinessRepository::new(
                stores.businesses.clone(),
                stores.customers.clone(),
            ),
            contracts: ContractRepository::new(
                stores.contracts.clone(),
                stores.customers.clone(),
                stores.businesses.clone(),
            ),
            payments: PaymentRepository::new(
                stores.payments.clone(),
                stores.customers.clone(),
                stores.businesses.clone(),
            ),
            stores,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态，按配置写入演示数据
    pub fn initialize(config: &Config) -> Result<Self> {
        let state = Self::new(config.clone());
        if config.seed_demo_data {
            seed_demo_data(&state.stores.customers)
                .map_err(|e| ServerError::Init(format!("demo data: {e}")))?;
        }
        Ok(state)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            customers: self.stores.customers.len(),
            businesses: self.stores.businesses.len(),
            contracts: self.stores.contracts.len(),
            payments: self.stores.payments.len(),
        }
    }
}
