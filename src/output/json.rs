use crate::error::Result;
use crate::models::FileRecord;

/// 将记录列表序列化为顶层 JSON 数组（两空格缩进）
pub fn to_json(records: &[FileRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample;

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let (records, _) = sample();
        let output = to_json(&records).unwrap();

        let decoded: Vec<FileRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_field_order_and_null_extension() {
        let (records, _) = sample();
        let output = to_json(&records[..1]).unwrap();

        let expected = "[\n  {\n    \"path\": \"Makefile\",\n    \"name\": \"Makefile\",\n    \"extension\": null,\n    \"language\": \"makefile\",\n    \"lines\": 3,\n    \"size\": 18,\n    \"content\": \"all:\\n\\tcargo build\\n\"\n  }\n]";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
