//! 测试用的内存仓储

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cuba_errors::{AppError, AppResult};

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

#[derive(Default)]
struct State {
    next_id: i32,
    rows: BTreeMap<ProductId, Product>,
    calls: usize,
}

/// 行为与 `PostgresProductRepository` 一致的内存实现
///
/// 记录调用次数，`failing` 构造的实例每次调用都返回数据库错误
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
    failure: Option<String>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            state: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// 仓储被调用的次数
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn enter(&self) -> AppResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        match &self.failure {
            Some(message) => Err(AppError::database(message.clone())),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let state = self.enter()?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let state = self.enter()?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, product: &NewProduct) -> AppResult<Product> {
        let mut state = self.enter()?;
        state.next_id += 1;
        let created = product.clone().with_id(ProductId(state.next_id));
        state.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut state = self.enter()?;
        match state.rows.get_mut(&product.id) {
            Some(row) => {
                row.name = product.name.clone();
                row.price = product.price;
                Ok(())
            }
            None => Err(AppError::not_found("Product not found")),
        }
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        let mut state = self.enter()?;
        state.rows.remove(&id);
        Ok(())
    }
}
