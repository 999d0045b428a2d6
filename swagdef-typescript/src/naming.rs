//! TypeScript identifier rules.

use swagdef_schema::EnumValue;

/// Replace `.` and `-` in a property key with `_`.
pub fn normalize_key(key: &str) -> String {
    key.replace(['.', '-'], "_")
}

/// Derive an enum member name from its value.
///
/// Names that start with a digit, and the empty name, get a `_` prefix.
pub fn enum_member_name(value: &EnumValue) -> String {
    let name = value.to_string();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Whether `name` can be written unquoted as a member name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first == '$' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Render a member name, quoting it when it is not a plain identifier.
pub fn member_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Render a string literal with JSON escaping, which TypeScript accepts.
pub fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("com.docker.label"), "com_docker_label");
        assert_eq!(normalize_key("x-request-id"), "x_request_id");
        assert_eq!(normalize_key("plain"), "plain");
    }

    #[test]
    fn test_enum_member_name() {
        assert_eq!(enum_member_name(&EnumValue::String("red".into())), "red");
        assert_eq!(enum_member_name(&EnumValue::String("123".into())), "_123");
        assert_eq!(enum_member_name(&EnumValue::String(String::new())), "_");
        assert_eq!(enum_member_name(&EnumValue::Number(404.into())), "_404");
        assert_eq!(enum_member_name(&EnumValue::Boolean(true)), "true");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_1"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("blue-green"));
        assert!(!is_identifier("a b"));
    }

    #[test]
    fn test_member_name_quotes_when_needed() {
        assert_eq!(member_name("name"), "name");
        assert_eq!(member_name("blue-green"), "\"blue-green\"");
        assert_eq!(member_name("_1.5"), "\"_1.5\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
