use std::io;

use thiserror::Error;

/// 问候用例错误。
#[derive(Debug, Error)]
pub enum GreetingError {
    /// 写入输出失败，原始 I/O 错误作为 source 保留
    #[error("failed to write greeting: {0}")]
    Write(#[source] io::Error),
}

impl GreetingError {
    /// 底层 I/O 错误的种类。
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            GreetingError::Write(err) => err.kind(),
        }
    }

    pub fn into_io_error(self) -> io::Error {
        match self {
            GreetingError::Write(err) => err,
        }
    }
}
