//! 时间工具函数
//!
//! 所有时间戳以 RFC 3339 字符串 (UTC) 存储，日期以 ISO (YYYY-MM-DD) 存储。
//! ISO 日期按字典序比较即按时间先后比较。

use chrono::{NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// 当前 UTC 时间的 RFC 3339 字符串
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// 今天的 ISO 日期 (UTC)
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时间字符串 (HH:MM)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_and_times() {
        assert!(parse_date("2026-08-25").is_ok());
        assert!(parse_date("25/08/2026").is_err());
        assert!(parse_time("19:30").is_ok());
        assert!(parse_time("7pm").is_err());
    }
}
