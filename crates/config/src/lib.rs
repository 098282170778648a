//! 问候命令的配置
//!
//! 加载顺序：默认值 -> 可选配置文件（GREETING_CONFIG_FILE）-> 环境变量（GREETING_*）。

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// 不带时区的固定时间格式，按 UTC 解释
pub const FIXED_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "GREETING_";

/// 指定配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "GREETING_CONFIG_FILE";

/// 问候命令配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// 日志过滤规则，未设置 RUST_LOG 时使用
    pub log_filter: String,
    /// 固定时间，设置后替代系统时钟
    #[serde(default)]
    pub fixed_time: Option<String>,
    /// 问候语后是否追加换行
    #[serde(default = "default_newline")]
    pub newline: bool,
}

fn default_newline() -> bool {
    true
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            fixed_time: None,
            newline: default_newline(),
        }
    }
}

impl GreetingConfig {
    /// 按默认顺序组装配置来源
    pub fn figment() -> Figment {
        let mut fig = Figment::from(Serialized::defaults(GreetingConfig::default()));
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            fig = merge_file(fig, &path);
        }
        fig.merge(Env::prefixed(ENV_PREFIX).ignore(&["config_file"]))
    }

    /// 从环境加载并校验
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// 默认值之上叠加指定文件，再叠加环境变量
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let fig = merge_file(
            Figment::from(Serialized::defaults(GreetingConfig::default())),
            path,
        );
        Self::from_figment(fig.merge(Env::prefixed(ENV_PREFIX).ignore(&["config_file"])))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: GreetingConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        self.fixed_timestamp()?;
        Ok(())
    }

    /// 解析固定时间，支持 RFC 3339 或 `YYYY/MM/DD HH:MM:SS`（UTC）
    pub fn fixed_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>, ConfigError> {
        self.fixed_time
            .as_deref()
            .map(parse_fixed_time)
            .transpose()
    }
}

fn merge_file(fig: Figment, path: &str) -> Figment {
    if path.ends_with(".yml") || path.ends_with(".yaml") {
        fig.merge(Yaml::file(path))
    } else if path.ends_with(".json") {
        fig.merge(Json::file(path))
    } else {
        fig.merge(Toml::file(path))
    }
}

fn parse_fixed_time(value: &str) -> Result<DateTime<FixedOffset>, ConfigError> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at);
    }
    NaiveDateTime::parse_from_str(value, FIXED_TIME_FORMAT)
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|err| ConfigError::InvalidFixedTime {
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid fixed time {value:?}: {reason}")]
    InvalidFixedTime { value: String, reason: String },
    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}
