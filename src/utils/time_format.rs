use chrono::{DateTime, SecondsFormat, Utc};

/// 格式化为 ISO-8601 UTC 时间戳，精确到毫秒 (例如: "2024-01-02T03:04:05.678Z")
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&time), "2024-01-02T03:04:05.000Z");
    }
}
