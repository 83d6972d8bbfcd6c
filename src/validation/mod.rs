//! 요청 본문 검증 모듈
//!
//! 와이어에서 들어온 비정형 JSON 페이로드를 타입 구조체로 변환하기 전에
//! 선언적 스키마로 검증하는 모듈입니다. 와이어 페이로드의 형태를 그대로
//! 신뢰하지 않고, 항상 스키마를 통과한 정규화 결과만 도메인 계층에 전달합니다.
//!
//! ## 검증 계약
//!
//! - 입력: 비정형 `serde_json::Value` 와 [`Schema`] (필드 규칙 목록)
//! - 출력: 정규화된 JSON 객체 (기본값 적용, 선언되지 않은 필드 제거)
//!   또는 필드명을 포함한 첫 번째 에러 메시지
//! - 필드 규칙은 선언 순서대로(위에서 아래로) 평가되며,
//!   첫 실패에서 즉시 중단합니다
//! - 순수 동기 함수이며 I/O 나 부수효과가 없습니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::validation::{FieldRule, Schema};
//!
//! let schema = Schema::new(vec![
//!     FieldRule::string("name").length(2, 50).required(),
//!     FieldRule::number("price").positive().required(),
//!     FieldRule::integer("stock").min(0).default(0),
//! ]);
//!
//! let normalized = schema.validate(&payload)?;
//! ```

use serde_json::{Map, Value};

pub mod schemas;

/// 필드 값의 종류와 종류별 제약 조건
///
/// 각 변형은 타입 검사와 해당 타입에서 의미 있는 범위 검사를 함께 수행합니다.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// 문자열 필드. 길이 하한/상한은 유니코드 문자 수 기준입니다.
    Str {
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
    /// 실수 필드. `positive`이면 0보다 커야 합니다.
    Number { positive: bool },
    /// 정수 필드. 소수부가 있는 숫자는 거부합니다.
    Integer { min: Option<i64> },
    /// 문자열 배열 필드. 모든 원소가 문자열이어야 합니다.
    StringArray,
}

/// 하나의 필드에 대한 검증 규칙
///
/// 빌더 메서드를 체이닝하여 선언적으로 구성합니다.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    default: Option<Value>,
}

impl FieldRule {
    /// 문자열 필드 규칙 생성
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Str {
                min_len: None,
                max_len: None,
            },
            required: false,
            default: None,
        }
    }

    /// 실수 필드 규칙 생성
    pub fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number { positive: false },
            required: false,
            default: None,
        }
    }

    /// 정수 필드 규칙 생성
    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer { min: None },
            required: false,
            default: None,
        }
    }

    /// 문자열 배열 필드 규칙 생성
    pub fn string_array(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::StringArray,
            required: false,
            default: None,
        }
    }

    /// 문자열 길이 범위 제약을 설정합니다 (문자 수 기준)
    pub fn length(mut self, min: usize, max: usize) -> Self {
        if let FieldKind::Str { min_len, max_len } = &mut self.kind {
            *min_len = Some(min);
            *max_len = Some(max);
        }
        self
    }

    /// 0보다 큰 값만 허용합니다
    pub fn positive(mut self) -> Self {
        if let FieldKind::Number { positive } = &mut self.kind {
            *positive = true;
        }
        self
    }

    /// 정수 하한을 설정합니다
    pub fn min(mut self, minimum: i64) -> Self {
        if let FieldKind::Integer { min } = &mut self.kind {
            *min = Some(minimum);
        }
        self
    }

    /// 필수 필드로 표시합니다
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 필드 누락 시 적용할 기본값을 설정합니다
    ///
    /// 생성 스키마에서만 사용합니다. 부분 업데이트 스키마는
    /// 기본값을 주입하지 않아야 합니다.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// 값을 규칙에 따라 검사하고 정규화된 값을 반환합니다
    fn check(&self, value: &Value) -> Result<Value, String> {
        match &self.kind {
            FieldKind::Str { min_len, max_len } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| format!("\"{}\" must be a string", self.name))?;

                let char_count = s.chars().count();
                if let Some(min) = min_len {
                    if char_count < *min {
                        return Err(format!(
                            "\"{}\" length must be at least {} characters long",
                            self.name, min
                        ));
                    }
                }
                if let Some(max) = max_len {
                    if char_count > *max {
                        return Err(format!(
                            "\"{}\" length must be at most {} characters long",
                            self.name, max
                        ));
                    }
                }

                Ok(Value::String(s.to_string()))
            }
            FieldKind::Number { positive } => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| format!("\"{}\" must be a number", self.name))?;

                if *positive && n <= 0.0 {
                    return Err(format!("\"{}\" must be a positive number", self.name));
                }

                Ok(value.clone())
            }
            FieldKind::Integer { min } => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| format!("\"{}\" must be a number", self.name))?;

                if n.fract() != 0.0 {
                    return Err(format!("\"{}\" must be an integer", self.name));
                }

                let n = n as i64;
                if let Some(min) = min {
                    if n < *min {
                        return Err(format!(
                            "\"{}\" must be greater than or equal to {}",
                            self.name, min
                        ));
                    }
                }

                Ok(Value::from(n))
            }
            FieldKind::StringArray => {
                let items = value
                    .as_array()
                    .ok_or_else(|| format!("\"{}\" must be an array", self.name))?;

                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        return Err(format!("\"{}[{}]\" must be a string", self.name, index));
                    }
                }

                Ok(value.clone())
            }
        }
    }
}

/// 하나의 요청 본문에 대한 검증 스키마
///
/// 필드 규칙의 순서 있는 목록과, 정규화 결과에 최소한 존재해야 하는
/// 필드 수(부분 업데이트용)로 구성됩니다.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRule>,
    min_fields: usize,
}

impl Schema {
    /// 필드 규칙 목록으로 스키마를 생성합니다
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self {
            fields,
            min_fields: 0,
        }
    }

    /// 정규화 결과에 최소한 존재해야 하는 필드 수를 설정합니다
    ///
    /// 부분 업데이트 스키마에서 `min_fields(1)`로 빈 페이로드를 거부합니다.
    pub fn min_fields(mut self, count: usize) -> Self {
        self.min_fields = count;
        self
    }

    /// 페이로드를 스키마에 따라 검증하고 정규화된 객체를 반환합니다
    ///
    /// 규칙은 선언 순서대로 평가되며 첫 번째 실패에서 중단합니다.
    /// 스키마에 선언되지 않은 필드는 결과에서 제거됩니다.
    ///
    /// # Arguments
    ///
    /// * `payload` - 와이어에서 역직렬화된 비정형 JSON 값
    ///
    /// # Returns
    ///
    /// * `Ok(Map)` - 정규화된 필드 맵 (기본값 적용 완료)
    /// * `Err(String)` - 필드명을 포함한 첫 번째 검증 에러 메시지
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, String> {
        let body = payload
            .as_object()
            .ok_or_else(|| "request body must be a JSON object".to_string())?;

        let mut normalized = Map::new();

        for rule in &self.fields {
            match body.get(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        return Err(format!("\"{}\" is required", rule.name));
                    }
                    if let Some(default) = &rule.default {
                        normalized.insert(rule.name.to_string(), default.clone());
                    }
                }
                Some(value) => {
                    let checked = rule.check(value)?;
                    normalized.insert(rule.name.to_string(), checked);
                }
            }
        }

        if normalized.len() < self.min_fields {
            return Err("at least one field must be provided".to_string());
        }

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new(vec![
            FieldRule::string("name").length(2, 50).required(),
            FieldRule::number("price").positive().required(),
            FieldRule::integer("stock").min(0).default(0),
            FieldRule::string_array("tags").default(json!([])),
        ])
    }

    #[test]
    fn test_valid_payload_is_normalized_with_defaults() {
        let payload = json!({ "name": "Keyboard", "price": 49.9 });
        let normalized = sample_schema().validate(&payload).unwrap();

        assert_eq!(normalized.get("name"), Some(&json!("Keyboard")));
        assert_eq!(normalized.get("price"), Some(&json!(49.9)));
        assert_eq!(normalized.get("stock"), Some(&json!(0)));
        assert_eq!(normalized.get("tags"), Some(&json!([])));
    }

    #[test]
    fn test_unknown_fields_are_stripped() {
        let payload = json!({ "name": "Keyboard", "price": 10, "rating": 5 });
        let normalized = sample_schema().validate(&payload).unwrap();

        assert!(!normalized.contains_key("rating"));
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let payload = json!({ "name": "Keyboard" });
        let error = sample_schema().validate(&payload).unwrap_err();

        assert_eq!(error, "\"price\" is required");
    }

    #[test]
    fn test_wrong_type_names_the_field() {
        let payload = json!({ "name": 123, "price": 10 });
        let error = sample_schema().validate(&payload).unwrap_err();

        assert_eq!(error, "\"name\" must be a string");
    }

    #[test]
    fn test_evaluation_short_circuits_top_to_bottom() {
        // name 과 price 가 모두 잘못되어도 먼저 선언된 name 에러만 보고
        let payload = json!({ "name": 123, "price": -1 });
        let error = sample_schema().validate(&payload).unwrap_err();

        assert!(error.contains("name"));
    }

    #[test]
    fn test_string_length_bounds() {
        let schema = Schema::new(vec![FieldRule::string("name").length(2, 50).required()]);

        let error = schema.validate(&json!({ "name": "a" })).unwrap_err();
        assert_eq!(error, "\"name\" length must be at least 2 characters long");

        let long_name = "x".repeat(51);
        let error = schema.validate(&json!({ "name": long_name })).unwrap_err();
        assert_eq!(error, "\"name\" length must be at most 50 characters long");
    }

    #[test]
    fn test_positive_number_rejects_zero_and_negative() {
        let schema = Schema::new(vec![FieldRule::number("price").positive().required()]);

        let error = schema.validate(&json!({ "price": 0 })).unwrap_err();
        assert_eq!(error, "\"price\" must be a positive number");

        let error = schema.validate(&json!({ "price": -3.5 })).unwrap_err();
        assert_eq!(error, "\"price\" must be a positive number");

        assert!(schema.validate(&json!({ "price": 0.01 })).is_ok());
    }

    #[test]
    fn test_integer_rejects_fractional_values() {
        let schema = Schema::new(vec![FieldRule::integer("stock").min(0).required()]);

        let error = schema.validate(&json!({ "stock": 1.5 })).unwrap_err();
        assert_eq!(error, "\"stock\" must be an integer");

        let error = schema.validate(&json!({ "stock": -1 })).unwrap_err();
        assert_eq!(error, "\"stock\" must be greater than or equal to 0");

        // 소수부가 없는 실수 표현은 정수로 정규화
        let normalized = schema.validate(&json!({ "stock": 10.0 })).unwrap();
        assert_eq!(normalized.get("stock"), Some(&json!(10)));
    }

    #[test]
    fn test_string_array_checks_every_element() {
        let schema = Schema::new(vec![FieldRule::string_array("tags").required()]);

        let error = schema
            .validate(&json!({ "tags": ["usb", 42] }))
            .unwrap_err();
        assert_eq!(error, "\"tags[1]\" must be a string");

        assert!(schema.validate(&json!({ "tags": ["usb", "wireless"] })).is_ok());
        assert!(schema.validate(&json!({ "tags": [] })).is_ok());
    }

    #[test]
    fn test_min_fields_rejects_empty_update() {
        let schema = Schema::new(vec![
            FieldRule::string("name").length(2, 50),
            FieldRule::number("price").positive(),
        ])
        .min_fields(1);

        let error = schema.validate(&json!({})).unwrap_err();
        assert_eq!(error, "at least one field must be provided");

        // 선언되지 않은 필드만 있는 페이로드도 빈 것으로 취급
        let error = schema.validate(&json!({ "rating": 5 })).unwrap_err();
        assert_eq!(error, "at least one field must be provided");

        assert!(schema.validate(&json!({ "price": 9.9 })).is_ok());
    }

    #[test]
    fn test_update_schema_does_not_inject_defaults() {
        let schema = Schema::new(vec![
            FieldRule::string("name").length(2, 50),
            FieldRule::integer("stock").min(0),
        ])
        .min_fields(1);

        let normalized = schema.validate(&json!({ "name": "Mouse" })).unwrap();
        assert_eq!(normalized.len(), 1);
        assert!(!normalized.contains_key("stock"));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let schema = sample_schema();

        assert!(schema.validate(&json!([1, 2, 3])).is_err());
        assert!(schema.validate(&json!("name")).is_err());
        assert!(schema.validate(&json!(null)).is_err());
    }

    #[test]
    fn test_null_field_treated_as_missing() {
        let payload = json!({ "name": "Keyboard", "price": 10, "stock": null });
        let normalized = sample_schema().validate(&payload).unwrap();

        // null 은 누락과 동일하게 처리되어 기본값이 적용됩니다
        assert_eq!(normalized.get("stock"), Some(&json!(0)));
    }

    #[test]
    fn test_boolean_is_not_a_number() {
        let schema = Schema::new(vec![FieldRule::number("price").required()]);
        let error = schema.validate(&json!({ "price": true })).unwrap_err();

        assert_eq!(error, "\"price\" must be a number");
    }
}
