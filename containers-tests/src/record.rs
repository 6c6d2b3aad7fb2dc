//! Property chains over loosely-shaped json records.

use containers::{safe_prop, Optional};
use serde_json::Value;

// overflow and non-integer ages are absent, same as a missing field
pub fn age_in_ten_years(record: &Value) -> Optional<i64> {
    safe_prop("age", record)
        .map(Value::as_i64)
        .map(|age| age.and_then(|years| years.checked_add(10)))
        .maybe(Optional::absent(), Optional::new)
}

pub fn shout_name(record: &Value) -> Optional<String> {
    safe_prop("name", record)
        .map(Value::as_str)
        .maybe(Optional::absent(), Optional::new)
        .map(str::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_age_is_absent() {
        crate::init_logging();
        assert!(age_in_ten_years(&json!({ "name": "Boris" })).is_nothing());
    }

    #[test]
    fn present_age() {
        assert_eq!(
            age_in_ten_years(&json!({ "name": "Boris", "age": 31 })),
            Optional::of(41)
        );
        assert!(age_in_ten_years(&json!({ "age": "old" })).is_nothing());
    }

    #[test]
    fn overflowing_age_is_absent() {
        assert!(age_in_ten_years(&json!({ "age": i64::MAX })).is_nothing());
        assert_eq!(
            age_in_ten_years(&json!({ "age": i64::MAX - 10 })),
            Optional::of(i64::MAX)
        );
    }

    #[test]
    fn names() {
        assert_eq!(shout_name(&json!({ "name": "Boris" })), Optional::of("BORIS".to_string()));
        assert!(shout_name(&json!({})).is_nothing());
    }

    #[test]
    fn non_string_name_is_absent() {
        assert!(shout_name(&json!({ "name": 42 })).is_nothing());
        assert!(shout_name(&json!({ "name": null })).is_nothing());
    }

    #[test]
    fn null_record_deserializes_absent() {
        let record: Optional<Value> = serde_json::from_value(json!(null)).unwrap();
        assert!(record.is_nothing());
    }
}
