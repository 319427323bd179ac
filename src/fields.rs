//! Field Fallback Rules
//!
//! Records arrive as loosely-typed JSON whose field names vary between
//! backend versions. Each displayed field is described by a [`FieldRule`]:
//! an ordered list of accessor attempts evaluated first-match-wins, ending
//! in a fixed default.

use serde_json::{Number, Value};

/// One way of pulling a value out of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// The field, when its value is truthy
    Truthy(&'static str),
    /// The field, when present and not null (zero counts)
    Present(&'static str),
    /// Length of an array field, when non-zero
    Length(&'static str),
    /// `"{first} {last}"` when both parts are truthy
    FullName(&'static str, &'static str),
}

impl Accessor {
    /// Attempt this accessor against a record
    pub fn resolve(&self, record: &Value) -> Option<Value> {
        match *self {
            Accessor::Truthy(field) => record.get(field).filter(|v| is_truthy(v)).cloned(),
            Accessor::Present(field) => record.get(field).filter(|v| !v.is_null()).cloned(),
            Accessor::Length(field) => match record.get(field) {
                Some(Value::Array(items)) if !items.is_empty() => Some(Value::from(items.len())),
                _ => None,
            },
            Accessor::FullName(first, last) => {
                let first = record.get(first).filter(|v| is_truthy(v))?;
                let last = record.get(last).filter(|v| is_truthy(v))?;
                Some(Value::String(format!("{} {}", display(first), display(last))))
            }
        }
    }
}

/// Ordered accessor attempts with a terminating default
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub attempts: &'static [Accessor],
    pub default: &'static str,
}

impl FieldRule {
    pub const fn new(attempts: &'static [Accessor], default: &'static str) -> Self {
        Self { attempts, default }
    }

    /// First matching value, if any attempt matched
    pub fn resolve(&self, record: &Value) -> Option<Value> {
        self.attempts.iter().find_map(|a| a.resolve(record))
    }

    /// Display text of the first match, or the default
    pub fn text(&self, record: &Value) -> String {
        match self.resolve(record) {
            Some(value) => display(&value),
            None => self.default.to_string(),
        }
    }
}

/// JavaScript truthiness: null, false, 0 and "" are falsy; arrays and
/// objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value the way a view child renders it: strings verbatim,
/// numbers in their shortest form, null and booleans as nothing.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) | Value::Object(_) => String::new(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display).collect(),
    }
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_display() {
        assert_eq!(display(&json!("Running")), "Running");
        assert_eq!(display(&json!(45)), "45");
        assert_eq!(display(&json!(45.0)), "45");
        assert_eq!(display(&json!(2.5)), "2.5");
        assert_eq!(display(&json!(null)), "");
        assert_eq!(display(&json!(true)), "");
        assert_eq!(display(&json!(["a", 1])), "a1");
    }

    #[test]
    fn test_first_match_wins() {
        const RULE: FieldRule =
            FieldRule::new(&[Accessor::Truthy("user_name"), Accessor::Truthy("user")], "N/A");

        assert_eq!(RULE.text(&json!({"user_name": "tony", "user": "ignored"})), "tony");
        assert_eq!(RULE.text(&json!({"user_name": "", "user": "steve"})), "steve");
        assert_eq!(RULE.text(&json!({"user": null})), "N/A");
        assert_eq!(RULE.text(&json!({})), "N/A");
    }

    #[test]
    fn test_present_keeps_zero() {
        const RULE: FieldRule = FieldRule::new(&[Accessor::Present("duration")], "");
        assert_eq!(RULE.text(&json!({"duration": 0})), "0");
        assert_eq!(RULE.text(&json!({"duration": null})), "");
    }

    #[test]
    fn test_length_and_full_name() {
        const MEMBERS: FieldRule = FieldRule::new(
            &[Accessor::Truthy("member_count"), Accessor::Length("members")],
            "0",
        );
        assert_eq!(MEMBERS.text(&json!({"members": [1, 2, 3]})), "3");
        assert_eq!(MEMBERS.text(&json!({"member_count": 0, "members": []})), "0");
        assert_eq!(MEMBERS.text(&json!({"member_count": 7, "members": [1]})), "7");

        let full = Accessor::FullName("first_name", "last_name");
        assert_eq!(
            full.resolve(&json!({"first_name": "Diana", "last_name": "Prince"})),
            Some(json!("Diana Prince"))
        );
        assert_eq!(full.resolve(&json!({"first_name": "Diana"})), None);
    }
}
