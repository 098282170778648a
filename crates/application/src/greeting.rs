//! 问候用例
//!
//! 读取时钟、按小时选择问候语并写入输出。每次调用相互独立，
//! 输出只在调用期间借用。

use std::io::Write;

use domain::{Hour, Message};

use crate::clock::Clock;
use crate::error::GreetingError;

/// 问候服务，持有一个时钟。
///
/// `Greeting::<SystemClock>::default()` 使用系统时间。
#[derive(Debug, Clone, Default)]
pub struct Greeting<C> {
    clock: C,
}

impl<C: Clock> Greeting<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// 只选择问候语，不写出。
    pub fn message(&self) -> Message {
        Message::for_hour(Hour::of(&self.clock.now()))
    }

    /// 将当前时间对应的问候语写入 `sink`。
    ///
    /// 写入失败时原样返回底层错误，不重试。
    pub fn greet<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), GreetingError> {
        let now = self.clock.now();
        let hour = Hour::of(&now);
        let message = Message::for_hour(hour);

        tracing::debug!(%now, hour = hour.value(), ?message, "选择问候语");

        sink.write_all(message.as_str().as_bytes()).map_err(GreetingError::Write)
    }
}
