use std::fmt;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// 统一的时间戳类型，携带自身的时区偏移。
pub type Timestamp = DateTime<FixedOffset>;

/// 一天中的小时（0-23），按时间戳自身的偏移计算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Hour(u32);

impl Hour {
    pub const MAX: u32 = 23;

    pub fn new(value: u32) -> DomainResult<Self> {
        if value > Self::MAX {
            return Err(DomainError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// 取时间戳在其本地偏移下的小时。
    pub fn of(timestamp: &Timestamp) -> Self {
        Self(timestamp.hour())
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl TryFrom<u32> for Hour {
    type Error = DomainError;

    fn try_from(value: u32) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Hour> for u32 {
    fn from(value: Hour) -> Self {
        value.0
    }
}
