//! 领域模型错误定义

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 小时超出 0-23 范围
    #[error("invalid hour: {0}")]
    InvalidHour(u32),
}

/// 领域层结果类型
pub type DomainResult<T> = Result<T, DomainError>;
