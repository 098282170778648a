//! 问候命令入口
//!
//! 按当前时间向标准输出写出问候语。

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use application::{Clock, ClockFunc, Greeting, SystemClock};
use config::GreetingConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = GreetingConfig::load().context("加载配置失败")?;

    // 初始化日志，输出到 stderr，stdout 只留给问候语
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let clock: Arc<dyn Clock> = match config.fixed_timestamp()? {
        Some(at) => {
            tracing::info!(%at, "使用固定时间");
            Arc::new(ClockFunc(move || at))
        }
        None => Arc::new(SystemClock),
    };

    let greeting = Greeting::new(clock);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    greeting.greet(&mut out).context("写出问候语失败")?;
    if config.newline {
        out.write_all(b"\n").context("写出问候语失败")?;
    }
    out.flush().context("写出问候语失败")?;
    Ok(())
}
