//! 按小时选择的问候语
//!
//! | 小时      | 问候语     |
//! |-----------|------------|
//! | 0 - 3     | こんばんは |
//! | 4 - 9     | おはよう   |
//! | 10 - 16   | こんにちは |
//! | 17 - 23   | こんばんは |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Hour;

/// 三种固定问候语。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Message {
    Morning,
    Afternoon,
    Evening,
}

impl Message {
    pub const ALL: [Message; 3] = [Message::Morning, Message::Afternoon, Message::Evening];

    /// 区间下界均为闭区间：4 点起为早上，10 点起为下午，17 点起为晚上。
    pub fn for_hour(hour: Hour) -> Self {
        match hour.value() {
            4..=9 => Message::Morning,
            10..=16 => Message::Afternoon,
            _ => Message::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Morning => "おはよう",
            Message::Afternoon => "こんにちは",
            Message::Evening => "こんばんは",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_at(hour: u32) -> Message {
        Message::for_hour(Hour::new(hour).unwrap())
    }

    #[test]
    fn test_morning_hours() {
        for hour in 4..=9 {
            assert_eq!(message_at(hour), Message::Morning, "hour {hour}");
        }
    }

    #[test]
    fn test_afternoon_hours() {
        for hour in 10..=16 {
            assert_eq!(message_at(hour), Message::Afternoon, "hour {hour}");
        }
    }

    #[test]
    fn test_evening_hours() {
        for hour in (17..=23).chain(0..=3) {
            assert_eq!(message_at(hour), Message::Evening, "hour {hour}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(message_at(3), Message::Evening);
        assert_eq!(message_at(4), Message::Morning);
        assert_eq!(message_at(9), Message::Morning);
        assert_eq!(message_at(10), Message::Afternoon);
        assert_eq!(message_at(16), Message::Afternoon);
        assert_eq!(message_at(17), Message::Evening);
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::Morning.to_string(), "おはよう");
        assert_eq!(Message::Afternoon.as_str(), "こんにちは");
        assert_eq!(Message::Evening.as_str(), "こんばんは");
    }

    #[test]
    fn test_message_serde_names() {
        assert_eq!(serde_json::to_string(&Message::Morning).unwrap(), "\"morning\"");
        let parsed: Message = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(parsed, Message::Evening);
    }

    #[test]
    fn test_every_message_is_reachable() {
        for message in Message::ALL {
            assert!((0..=23).any(|hour| message_at(hour) == message));
        }
    }
}
