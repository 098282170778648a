//! 应用层实现。
//!
//! 围绕领域模型的问候用例：从注入的时钟读取当前时间，
//! 选出对应的问候语并写入调用方提供的输出。

pub mod clock;
pub mod error;
pub mod greeting;

pub use clock::{Clock, ClockFunc, FixedClock, SystemClock};
pub use error::GreetingError;
pub use greeting::Greeting;
