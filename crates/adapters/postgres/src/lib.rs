//! cuba-adapter-postgres - PostgreSQL 适配器

mod connection;
mod health;

pub use connection::*;
pub use health::*;
