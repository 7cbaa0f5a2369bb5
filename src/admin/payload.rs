//! Request payload shaping.
//!
//! Create and update calls send `{"<resource>": {...}}`. Callers may pass
//! either the bare fields or an already wrapped object; both produce the
//! same body. GET and DELETE calls carry their parameters in the query
//! string instead.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::admin::errors::AdminError;

/// Wraps `data` as `{resource: data}`, or reuses `data[resource]` when the
/// caller already wrapped it. A `null` member counts as not wrapped and is
/// dropped from the fields.
///
/// # Example
///
/// ```rust
/// use shopify_admin::admin::wrap_payload;
/// use serde_json::json;
///
/// let bare = wrap_payload("product", json!({"title": "Hat"}));
/// let wrapped = wrap_payload("product", json!({"product": {"title": "Hat"}}));
/// assert_eq!(bare, wrapped);
/// assert_eq!(bare, json!({"product": {"title": "Hat"}}));
/// ```
#[must_use]
pub fn wrap_payload(resource: &str, data: Value) -> Value {
    let inner = match data {
        Value::Object(mut map) => match map.remove(resource) {
            Some(inner) if !inner.is_null() => inner,
            _ => Value::Object(map),
        },
        other => other,
    };

    let mut outer = Map::new();
    outer.insert(resource.to_string(), inner);
    Value::Object(outer)
}

/// Wraps `data` like [`wrap_payload`] and sets `id` on the inner object.
///
/// A non-object inner value is replaced by `{"id": id}`.
#[must_use]
pub fn wrap_payload_with_id(resource: &str, id: u64, data: Value) -> Value {
    let mut payload = wrap_payload(resource, data);

    if let Some(inner) = payload.get_mut(resource) {
        match inner {
            Value::Object(map) => {
                map.insert("id".to_string(), Value::from(id));
            }
            other => {
                *other = serde_json::json!({ "id": id });
            }
        }
    }

    payload
}

/// Converts a JSON object of parameters into query pairs.
///
/// - strings are used verbatim
/// - numbers and booleans use their JSON text
/// - arrays are comma-joined (`ids=1,2,3`)
/// - nulls are skipped
/// - nested objects are sent as compact JSON
///
/// `null` as a whole means no parameters.
///
/// # Errors
///
/// Returns [`AdminError::InvalidParams`] if `params` is neither an object
/// nor null.
pub fn query_from_params(params: &Value) -> Result<BTreeMap<String, String>, AdminError> {
    let map = match params {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Object(map) => map,
        other => {
            return Err(AdminError::InvalidParams {
                reason: format!("expected a JSON object, got {other}"),
            })
        }
    };

    Ok(map
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
        .collect())
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_bare_and_prewrapped_payloads() {
        assert_eq!(
            wrap_payload("webhook", json!({"topic": "orders/create"})),
            json!({"webhook": {"topic": "orders/create"}})
        );
        assert_eq!(
            wrap_payload(
                "webhook",
                json!({"webhook": {"topic": "orders/create"}, "ignored": true})
            ),
            json!({"webhook": {"topic": "orders/create"}})
        );
    }

    #[test]
    fn test_wrap_treats_null_member_as_bare_fields() {
        assert_eq!(
            wrap_payload("product", json!({"product": null, "title": "Hat"})),
            json!({"product": {"title": "Hat"}})
        );
        assert_eq!(
            wrap_payload("product", json!({"product": null})),
            json!({"product": {}})
        );
    }

    #[test]
    fn test_wrap_non_object_data() {
        assert_eq!(wrap_payload("order", json!([1, 2])), json!({"order": [1, 2]}));
    }

    #[test]
    fn test_wrap_with_id_sets_inner_id() {
        assert_eq!(
            wrap_payload_with_id("variant", 55, json!({"price": "9.99", "id": 1})),
            json!({"variant": {"price": "9.99", "id": 55}})
        );
        assert_eq!(
            wrap_payload_with_id("variant", 55, json!({"variant": {"price": "9.99"}})),
            json!({"variant": {"price": "9.99", "id": 55}})
        );
        assert_eq!(
            wrap_payload_with_id("variant", 55, Value::Null),
            json!({"variant": {"id": 55}})
        );
    }

    #[test]
    fn test_query_from_params_flattens_values() {
        let query = query_from_params(&json!({
            "title": "red shirt",
            "limit": 50,
            "published": true,
            "ids": [1, 2, 3],
            "vendor": null,
            "filter": {"a": 1}
        }))
        .unwrap();

        assert_eq!(query.get("title").map(String::as_str), Some("red shirt"));
        assert_eq!(query.get("limit").map(String::as_str), Some("50"));
        assert_eq!(query.get("published").map(String::as_str), Some("true"));
        assert_eq!(query.get("ids").map(String::as_str), Some("1,2,3"));
        assert_eq!(query.get("filter").map(String::as_str), Some(r#"{"a":1}"#));
        assert!(!query.contains_key("vendor"));
    }

    #[test]
    fn test_query_from_params_accepts_null_and_rejects_scalars() {
        assert!(query_from_params(&Value::Null).unwrap().is_empty());
        assert!(matches!(
            query_from_params(&json!("limit=5")),
            Err(AdminError::InvalidParams { .. })
        ));
    }
}
