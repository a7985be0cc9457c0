//! 商品仓储接口

use async_trait::async_trait;
use cuba_errors::AppResult;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::value_objects::ProductId;

/// 商品仓储接口
///
/// 失败立即返回，不做重试
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 查询全部商品，顺序由数据库决定；没有记录时返回空列表
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 根据 ID 查找商品，不存在时返回 `None`
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 创建商品，返回带数据库分配 ID 的实体
    async fn create(&self, product: &NewProduct) -> AppResult<Product>;

    /// 整体替换名称和价格；没有匹配行时返回 `AppError::NotFound`
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 删除商品；ID 不存在也视为成功
    async fn delete(&self, id: ProductId) -> AppResult<()>;
}
