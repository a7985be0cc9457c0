//! 标识符

use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 商品 ID，由数据库在创建时分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ProductId(pub i32);

impl FromStr for ProductId {
    type Err = ParseIntError;

    /// 十进制整数，允许前导 `+`/`-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self)
    }
}
