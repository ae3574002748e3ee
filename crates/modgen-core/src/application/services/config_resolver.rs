//! Configuration resolution.
//!
//! Builds one configuration document from up to five layers, lowest first:
//!
//! 1. built-in defaults
//! 2. API-spec fragment
//! 3. preset seed
//! 4. explicit document
//! 5. command-line overrides
//!
//! Objects merge key by key, scalars and arrays replace, and `fields` merges
//! by field `name`. Inputs are borrowed and never modified.

use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use crate::{
    domain::{ModuleConfig, ScreenKind, naming},
    error::ModgenResult,
};

/// Roles given to screens that an override enables from nothing.
pub const OVERRIDE_SCREEN_ROLES: [&str; 1] = ["ADMIN"];

/// Values taken from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub name: Option<String>,
    pub code: Option<String>,
    pub entity: Option<String>,
    /// When set, exactly these screens end up enabled.
    pub screens: Option<Vec<ScreenKind>>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The layers of one resolution. Every layer is optional.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub api_fragment: Option<Value>,
    pub preset: Option<Value>,
    pub explicit: Option<Value>,
    pub overrides: Overrides,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver;

impl ConfigResolver {
    pub fn new() -> Self {
        Self
    }

    /// Lowest layer. Only keys with a fixed default appear here.
    pub fn defaults() -> Value {
        json!({
            "module": {"version": "1.0.0"},
            "api": {},
            "auth": {"required": false, "roles": []},
            "workflow": {"enabled": false},
            "i18n": {"generateKeys": true}
        })
    }

    /// A complete configuration for `entity` with one enabled screen.
    pub fn synthesize(entity: &str, kind: ScreenKind) -> Value {
        let kebab = naming::to_kebab_case(entity);
        let camel = naming::to_camel_case(entity);
        let workflow = if kind == ScreenKind::Inbox {
            json!({"enabled": true, "businessService": format!("{kebab}-approval")})
        } else {
            json!({"enabled": false})
        };

        json!({
            "module": {
                "name": format!("{entity} Management"),
                "code": format!("{kebab}-mgmt"),
                "description": format!("{entity} management system"),
                "version": "1.0.0"
            },
            "entity": {
                "name": entity,
                "apiPath": format!("/{kebab}-service/v1"),
                "primaryKey": format!("{camel}Id"),
                "displayField": "name"
            },
            "screens": {
                kind.as_str(): {"enabled": true, "roles": ["ADMIN", "USER"]}
            },
            "fields": default_fields(),
            "api": {
                "create": format!("/{kebab}/_create"),
                "update": format!("/{kebab}/_update"),
                "search": format!("/{kebab}/_search"),
                "view": format!("/{kebab}/_view")
            },
            "auth": {"required": true, "roles": ["ADMIN", "USER"]},
            "workflow": workflow,
            "i18n": {"generateKeys": true}
        })
    }

    /// Merge all layers into one document. Does not validate.
    #[instrument(skip_all)]
    pub fn resolve_document(&self, request: &ResolveRequest) -> Value {
        let mut document = Self::defaults();
        let layers = [
            ("api-fragment", request.api_fragment.as_ref()),
            ("preset", request.preset.as_ref()),
            ("explicit", request.explicit.as_ref()),
        ];
        for (layer, value) in layers {
            if let Some(value) = value {
                debug!(layer, "merging layer");
                document = merge(&document, value);
            }
        }
        apply_overrides(&document, &request.overrides)
    }

    /// Merge and validate.
    pub fn resolve(&self, request: &ResolveRequest) -> ModgenResult<ModuleConfig> {
        let document = self.resolve_document(request);
        Ok(ModuleConfig::from_value(&document)?)
    }
}

fn default_fields() -> Value {
    json!([
        {
            "name": "name", "type": "text", "label": "Name", "required": true,
            "searchable": true, "showInResults": true, "showInView": true,
            "validation": {"maxLength": 100}
        },
        {
            "name": "description", "type": "textarea", "label": "Description", "required": false,
            "showInView": true,
            "validation": {"maxLength": 500}
        },
        {
            "name": "status", "type": "dropdown", "label": "Status", "required": true,
            "filterable": true, "showInResults": true, "showInView": true,
            "options": [{"code": "ACTIVE", "name": "Active"}, {"code": "INACTIVE", "name": "Inactive"}]
        }
    ])
}

/// `higher` layered over `lower`, as a new value.
pub fn merge(lower: &Value, higher: &Value) -> Value {
    match (lower, higher) {
        (Value::Object(low), Value::Object(high)) => {
            let mut out = low.clone();
            for (key, high_value) in high {
                let merged = match (key.as_str(), out.get(key)) {
                    ("fields", Some(low_value)) => merge_fields(low_value, high_value),
                    (_, Some(low_value)) => merge(low_value, high_value),
                    (_, None) => high_value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        (_, high) => high.clone(),
    }
}

/// Fields matched by `name`: higher fields first, each merged over its
/// lower namesake, then lower-only fields in their original order.
fn merge_fields(lower: &Value, higher: &Value) -> Value {
    let (Some(low), Some(high)) = (lower.as_array(), higher.as_array()) else {
        return higher.clone();
    };
    let name_of = |field: &Value| field.get("name").and_then(Value::as_str).map(str::to_string);

    let mut out: Vec<Value> = high
        .iter()
        .map(|field| {
            let twin = name_of(field)
                .and_then(|name| low.iter().find(|l| name_of(l).as_deref() == Some(name.as_str())));
            match twin {
                Some(twin) => merge(twin, field),
                None => field.clone(),
            }
        })
        .collect();

    let high_names: Vec<String> = high.iter().filter_map(name_of).collect();
    out.extend(
        low.iter()
            .filter(|field| name_of(field).is_none_or(|name| !high_names.contains(&name)))
            .cloned(),
    );
    Value::Array(out)
}

fn apply_overrides(document: &Value, overrides: &Overrides) -> Value {
    let mut doc = document.clone();
    let Some(root) = doc.as_object_mut() else {
        return doc;
    };

    if let Some(name) = &overrides.name {
        set(root, "module", "name", json!(name));
    }
    if let Some(code) = &overrides.code {
        set(root, "module", "code", json!(code));
    }
    if let Some(entity) = &overrides.entity {
        set(root, "entity", "name", json!(entity));
    }
    if let Some(kinds) = &overrides.screens {
        select_screens(root, kinds);
    }
    doc
}

/// Disable every configured screen, then enable exactly `kinds`.
fn select_screens(root: &mut Map<String, Value>, kinds: &[ScreenKind]) {
    let Some(screens) = section(root, "screens") else {
        return;
    };
    for screen in screens.values_mut() {
        if let Some(screen) = screen.as_object_mut() {
            screen.insert("enabled".into(), json!(false));
        }
    }
    for kind in kinds {
        match screens.get_mut(kind.as_str()).and_then(Value::as_object_mut) {
            Some(screen) => {
                screen.insert("enabled".into(), json!(true));
            }
            None => {
                screens.insert(
                    kind.as_str().into(),
                    json!({"enabled": true, "roles": OVERRIDE_SCREEN_ROLES}),
                );
            }
        }
    }
}

/// The object at `key`, created when absent. A non-object value is left
/// alone for the validator to report.
fn section<'a>(root: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    root.entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}

fn set(root: &mut Map<String, Value>, key: &str, property: &str, value: Value) {
    if let Some(map) = section(root, key) {
        map.insert(property.to_string(), value);
    }
}
