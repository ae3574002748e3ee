//! Structural schema for module configuration documents.
//!
//! The schema is a JSON Schema (draft 2020-12) document compiled once with
//! the `jsonschema` crate. Every violated keyword yields one
//! `<dotted.path>: <reason>` string and validation never stops early.
//!
//! Error order is fixed: properties in declared order (a missing required
//! property is reported at its declared position), array items by index,
//! then undeclared keys in the document's key order. One message is kept
//! per path.
//!
//! A document that passes is guaranteed to deserialize into
//! [`ModuleDocument`](crate::domain::ModuleDocument).

use std::sync::LazyLock;

use jsonschema::Validator;
use serde_json::{Map, Value, json};

use crate::domain::value_objects::{FieldType, ScreenKind};

/// Path label used for errors on the document root itself.
pub const ROOT_PATH: &str = "config";

/// API operations with a declared slot; others are accepted as strings.
pub const KNOWN_API_OPERATIONS: [&str; 5] = ["create", "update", "search", "view", "workflow"];

const FIELD_FLAGS: [&str; 7] = [
    "searchable",
    "filterable",
    "showInResults",
    "showInView",
    "showInInboxResults",
    "inboxSearchable",
    "inline",
];

static MODULE_CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(build_module_config_schema);

static MODULE_CONFIG_VALIDATOR: LazyLock<Result<Validator, String>> = LazyLock::new(|| {
    jsonschema::validator_for(&MODULE_CONFIG_SCHEMA).map_err(|e| e.to_string())
});

/// The JSON Schema for a complete module configuration document.
pub fn module_config_schema() -> &'static Value {
    &MODULE_CONFIG_SCHEMA
}

fn non_empty_string() -> Value {
    json!({"type": "string", "minLength": 1})
}

fn pattern(source: &str) -> Value {
    json!({"type": "string", "minLength": 1, "pattern": source})
}

fn build_module_config_schema() -> Value {
    let screen = json!({
        "type": "object",
        "properties": {
            "enabled": {"type": "boolean"},
            "roles": {"type": "array", "items": non_empty_string()},
            "filters": {"type": "array", "items": {"type": "string"}},
            "types": {"type": "array", "items": {"type": "string"}},
            "sections": {"type": "array", "items": non_empty_string()},
            "businessService": non_empty_string(),
            "minSearchFields": {"type": "integer", "minimum": 0}
        },
        "required": ["enabled"]
    });

    let mut screens = Map::new();
    for kind in ScreenKind::ALL {
        screens.insert(kind.as_str().to_string(), screen.clone());
    }

    let mut api = Map::new();
    for op in KNOWN_API_OPERATIONS {
        api.insert(op.to_string(), pattern("^/"));
    }

    let mut field = Map::new();
    field.insert("name".into(), pattern("^[a-zA-Z][a-zA-Z0-9]*$"));
    field.insert(
        "type".into(),
        json!({"type": "string", "enum": FieldType::names()}),
    );
    field.insert("label".into(), non_empty_string());
    field.insert("required".into(), json!({"type": "boolean"}));
    for flag in FIELD_FLAGS {
        field.insert(flag.into(), json!({"type": "boolean"}));
    }
    field.insert("description".into(), json!({"type": "string"}));
    field.insert("key".into(), json!({"type": "string"}));
    field.insert("helpText".into(), json!({"type": "string"}));
    field.insert("section".into(), json!({"type": "string"}));
    field.insert(
        "validation".into(),
        json!({
            "type": "object",
            "properties": {
                "pattern": {"type": "string"},
                "minLength": {"type": "integer", "minimum": 0},
                "maxLength": {"type": "integer", "minimum": 1},
                "min": {"type": "number"},
                "max": {"type": "number"},
                "step": {"type": "number", "minimum": 0}
            },
            "additionalProperties": false
        }),
    );
    field.insert(
        "options".into(),
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "code": non_empty_string(),
                    "name": non_empty_string()
                },
                "required": ["code", "name"],
                "additionalProperties": false
            }
        }),
    );
    field.insert(
        "mdms".into(),
        json!({
            "type": "object",
            "properties": {
                "masterName": non_empty_string(),
                "moduleName": non_empty_string(),
                "localePrefix": {"type": "string"}
            },
            "required": ["masterName", "moduleName"],
            "additionalProperties": false
        }),
    );

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Module configuration",
        "type": "object",
        "properties": {
            "module": {
                "type": "object",
                "properties": {
                    "name": non_empty_string(),
                    "code": pattern("^[a-z0-9-]+$"),
                    "description": {"type": "string"},
                    "version": pattern(r"^\d+\.\d+\.\d+$")
                },
                "required": ["name", "code"],
                "additionalProperties": false
            },
            "entity": {
                "type": "object",
                "properties": {
                    "name": pattern("^[A-Z][a-zA-Z0-9]*$"),
                    "apiPath": pattern("^/"),
                    "primaryKey": non_empty_string(),
                    "displayField": non_empty_string()
                },
                "required": ["name", "apiPath", "primaryKey", "displayField"],
                "additionalProperties": false
            },
            "screens": {
                "type": "object",
                "properties": screens,
                "minProperties": 1,
                "additionalProperties": false
            },
            "fields": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": field,
                    "required": ["name", "type", "label", "required"]
                },
                "minItems": 1
            },
            "api": {
                "type": "object",
                "properties": api,
                "additionalProperties": {"type": "string"}
            },
            "auth": {
                "type": "object",
                "properties": {
                    "required": {"type": "boolean"},
                    "roles": {"type": "array", "items": non_empty_string()}
                },
                "required": ["required"],
                "additionalProperties": false
            },
            "workflow": {
                "type": "object",
                "properties": {
                    "enabled": {"type": "boolean"},
                    "businessService": non_empty_string()
                },
                "required": ["enabled"],
                "additionalProperties": false
            },
            "i18n": {
                "type": "object",
                "properties": {
                    "prefix": pattern("^[A-Z_]+_$"),
                    "generateKeys": {"type": "boolean"}
                },
                "additionalProperties": false
            }
        },
        "required": ["module", "entity", "screens", "fields"]
    })
}

// ── Error mapping ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug)]
struct Violation {
    segments: Vec<Segment>,
    rank: u8,
    reason: String,
}

/// Check `value` against the module schema, returning every violation.
pub fn check(value: &Value) -> Vec<String> {
    let validator = match &*MODULE_CONFIG_VALIDATOR {
        Ok(validator) => validator,
        Err(e) => return vec![format!("{ROOT_PATH}: schema does not compile: {e}")],
    };
    let schema = module_config_schema();

    let mut violations = Vec::new();
    for error in validator.iter_errors(value) {
        let instance_pointer = error.instance_path.to_string();
        let schema_pointer = error.schema_path.to_string();
        let segments = locate(value, &instance_pointer);
        let instance = value.pointer(&instance_pointer).unwrap_or(&Value::Null);

        let Some((keyword, keyword_pointer, parent_pointer)) = keyword_of(&schema_pointer) else {
            violations.push(Violation {
                segments,
                rank: u8::MAX,
                reason: error.to_string(),
            });
            continue;
        };
        let keyword_value = schema.pointer(keyword_pointer).unwrap_or(&Value::Null);
        let parent = schema.pointer(parent_pointer).unwrap_or(&Value::Null);

        match keyword.as_str() {
            "required" => {
                for name in keyword_value.as_array().into_iter().flatten() {
                    let Some(name) = name.as_str() else { continue };
                    if instance.get(name).is_none() {
                        violations.push(Violation {
                            segments: child(&segments, name),
                            rank: 0,
                            reason: "is required".to_string(),
                        });
                    }
                }
            }
            "additionalProperties" => {
                let declared = parent.get("properties").and_then(Value::as_object);
                for key in instance.as_object().into_iter().flat_map(Map::keys) {
                    if declared.is_some_and(|d| d.contains_key(key)) {
                        continue;
                    }
                    violations.push(Violation {
                        segments: child(&segments, key),
                        rank: 0,
                        reason: "unknown property".to_string(),
                    });
                }
            }
            other => violations.push(Violation {
                segments,
                rank: rank_of(other),
                reason: reason_for(other, keyword_value, instance)
                    .unwrap_or_else(|| error.to_string()),
            }),
        }
    }

    violations.sort_by_cached_key(|v| (order_key(schema, value, &v.segments), v.rank));
    violations.dedup_by(|later, earlier| later.segments == earlier.segments);
    violations
        .into_iter()
        .map(|v| format!("{}: {}", render(&v.segments), v.reason))
        .collect()
}

/// Last non-index segment of a schema pointer, with the pointer to it and
/// to the schema object that holds it.
fn keyword_of(schema_pointer: &str) -> Option<(String, &str, &str)> {
    let mut end = schema_pointer.len();
    loop {
        let start = schema_pointer[..end].rfind('/')?;
        let segment = &schema_pointer[start + 1..end];
        if segment.parse::<usize>().is_err() {
            return Some((
                unescape(segment),
                &schema_pointer[..end],
                &schema_pointer[..start],
            ));
        }
        end = start;
    }
}

fn rank_of(keyword: &str) -> u8 {
    match keyword {
        "type" => 0,
        "minLength" | "minimum" | "minItems" | "minProperties" => 1,
        "pattern" => 2,
        "enum" => 3,
        _ => 4,
    }
}

fn reason_for(keyword: &str, limit: &Value, instance: &Value) -> Option<String> {
    let reason = match keyword {
        "type" => {
            let expected = match limit {
                Value::Array(types) => types
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" or "),
                other => other.as_str()?.to_string(),
            };
            format!("expected {expected}, found {}", type_name(instance))
        }
        "minLength" => match limit.as_u64()? {
            1 => "must not be empty".to_string(),
            n => format!("must be at least {n} characters"),
        },
        "pattern" => format!("must match pattern {}", limit.as_str()?),
        "enum" => {
            let allowed: Vec<String> = limit
                .as_array()?
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
                .collect();
            format!("must be one of {}", allowed.join(", "))
        }
        "minimum" => format!("must be >= {limit}"),
        "minItems" => format!("must contain at least {} item(s)", limit.as_u64()?),
        "minProperties" => {
            let n = limit.as_u64()?;
            format!("must define at least {n} entr{}", if n == 1 { "y" } else { "ies" })
        }
        _ => return None,
    };
    Some(reason)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Split a JSON pointer into keys and array indices, using the document to
/// tell them apart.
fn locate(doc: &Value, pointer: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Some(doc);
    for raw in pointer.split('/').skip(1) {
        let raw = unescape(raw);
        let index = match current {
            Some(Value::Array(_)) => raw.parse::<usize>().ok(),
            _ => None,
        };
        current = match (current, index) {
            (Some(Value::Array(items)), Some(i)) => items.get(i),
            (Some(Value::Object(map)), _) => map.get(&raw),
            _ => None,
        };
        segments.push(match index {
            Some(i) => Segment::Index(i),
            None => Segment::Key(raw),
        });
    }
    segments
}

fn child(segments: &[Segment], key: &str) -> Vec<Segment> {
    let mut out = segments.to_vec();
    out.push(Segment::Key(key.to_string()));
    out
}

fn render(segments: &[Segment]) -> String {
    let mut path = String::new();
    for segment in segments {
        match segment {
            Segment::Key(key) if path.is_empty() => path.push_str(key),
            Segment::Key(key) => {
                path.push('.');
                path.push_str(key);
            }
            Segment::Index(i) => {
                if path.is_empty() {
                    path.push_str(ROOT_PATH);
                }
                path.push_str(&format!("[{i}]"));
            }
        }
    }
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path
    }
}

/// Position of each path segment: declared properties first, in schema
/// order, then undeclared keys in document order; array items by index.
fn order_key(schema: &Value, doc: &Value, segments: &[Segment]) -> Vec<usize> {
    let mut key = Vec::with_capacity(segments.len());
    let mut node = Some(schema);
    let mut current = Some(doc);
    for segment in segments {
        match segment {
            Segment::Index(i) => {
                key.push(*i);
                node = node.and_then(|n| n.get("items"));
                current = current.and_then(|c| c.get(*i));
            }
            Segment::Key(name) => {
                let declared = node
                    .and_then(|n| n.get("properties"))
                    .and_then(Value::as_object);
                match declared.and_then(|d| d.keys().position(|k| k == name)) {
                    Some(i) => {
                        key.push(i);
                        node = declared.and_then(|d| d.get(name));
                    }
                    None => {
                        let offset = declared.map_or(0, Map::len);
                        let in_doc = current
                            .and_then(Value::as_object)
                            .and_then(|m| m.keys().position(|k| k == name))
                            .unwrap_or(usize::MAX - offset);
                        key.push(offset + in_doc);
                        node = node
                            .and_then(|n| n.get("additionalProperties"))
                            .filter(|n| n.is_object());
                    }
                }
                current = current.and_then(|c| c.get(name.as_str()));
            }
        }
    }
    key
}
