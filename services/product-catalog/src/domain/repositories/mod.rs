//! 仓储接口

mod product_repository;

pub use product_repository::ProductRepository;
