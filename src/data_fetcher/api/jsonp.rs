//! Unwrapping of the feed's JSONP-or-JSON hybrid payloads

use crate::error::AppError;
use serde_json::Value;

/// Parses a feed body into JSON.
///
/// Bodies starting with `{` or `[` are parsed as plain JSON. Anything else is
/// treated as `callback(<json>);` and the text strictly between the first `(`
/// and the last `)` is parsed, whatever the callback is called.
///
/// # Example
/// ```
/// use bcci_feed::data_fetcher::api::unwrap_jsonp;
///
/// let value = unwrap_jsonp("oncomptetion({\"a\": 1});").unwrap();
/// assert_eq!(value, serde_json::json!({"a": 1}));
/// ```
pub fn unwrap_jsonp(text: &str) -> Result<Value, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::jsonp_parse("response body is empty"));
    }

    // Must run before paren slicing: plain JSON may hold "(...)" inside strings.
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| AppError::jsonp_parse(format!("invalid JSON body: {e}")));
    }

    match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str(&trimmed[start + 1..end]).map_err(|e| {
                AppError::jsonp_parse(format!("invalid JSON inside callback wrapper: {e}"))
            })
        }
        (None, None) => serde_json::from_str(trimmed).map_err(|e| {
            AppError::jsonp_parse(format!("no callback wrapper and not valid JSON: {e}"))
        }),
        _ => Err(AppError::jsonp_parse("unbalanced callback wrapper")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_standard_callback() {
        assert_eq!(
            unwrap_jsonp(r#"callback({"key": "value"});"#).unwrap(),
            json!({"key": "value"})
        );
    }

    #[test]
    fn test_passes_through_plain_json() {
        assert_eq!(
            unwrap_jsonp(r#"{"key": "value"}"#).unwrap(),
            json!({"key": "value"})
        );
        assert_eq!(unwrap_jsonp("  [1, 2, 3]\n").unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_plain_json_with_parentheses_is_untouched() {
        assert_eq!(
            unwrap_jsonp(r#"{"graph": "(some data)", "id": 1}"#).unwrap(),
            json!({"graph": "(some data)", "id": 1})
        );
        assert_eq!(unwrap_jsonp(r#"{"a":"(x)"}"#).unwrap(), json!({"a": "(x)"}));
    }

    #[test]
    fn test_any_callback_name_is_accepted() {
        assert_eq!(
            unwrap_jsonp(r#"onScoringMatchsummary({"status": true});"#).unwrap(),
            json!({"status": true})
        );
        assert_eq!(
            unwrap_jsonp("\n  oncomptetion({\"note\": \"rain (delayed)\"})\n").unwrap(),
            json!({"note": "rain (delayed)"})
        );
    }

    #[test]
    fn test_bare_scalar_without_wrapper() {
        assert_eq!(unwrap_jsonp("42").unwrap(), json!(42));
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(matches!(unwrap_jsonp(""), Err(AppError::JsonpParse(_))));
        assert!(matches!(unwrap_jsonp("   \n"), Err(AppError::JsonpParse(_))));
    }

    #[test]
    fn test_garbage_between_parentheses_fails() {
        let err = unwrap_jsonp("callback(not json);").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_html_error_page_fails() {
        assert!(unwrap_jsonp("<html><body>Bad Gateway</body></html>").is_err());
        assert!(unwrap_jsonp("callback)(").is_err());
    }
}
