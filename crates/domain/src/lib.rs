//! 问候语核心领域模型
//!
//! 包含时间戳、小时值对象以及按小时划分的问候语。

pub mod errors;
pub mod message;
pub mod value_objects;

// 重新导出常用类型
pub use errors::*;
pub use message::*;
pub use value_objects::*;
