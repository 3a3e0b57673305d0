use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Catalog内の書籍ID。Catalogが採番し、ユーザー入力からは生成しない。
/// 永続化データからは正の整数のみ受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct BookId(u64);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// 次の採番値。u64を使い切った場合はNone。
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<u64> for BookId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Err(DomainError::ZeroId),
            v => Ok(Self(v)),
        }
    }
}

impl From<BookId> for u64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// シェルからの生入力を想定し、前後の空白は無視する。
impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
