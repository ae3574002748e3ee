//! Names derived from a [`ModuleConfig`], computed once per render.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{entities::module_config::ModuleConfig, naming};

/// Every case form of one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    pub original: String,
    pub camel: String,
    pub pascal: String,
    pub kebab: String,
    pub constant: String,
}

impl NameVariants {
    pub fn of(name: &str) -> Self {
        Self {
            original: name.to_string(),
            camel: naming::to_camel_case(name),
            pascal: naming::to_pascal_case(name),
            kebab: naming::to_kebab_case(name),
            constant: naming::to_constant_case(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldNaming {
    pub name: String,
    pub localization_key: String,
    pub constant: String,
    pub pascal: String,
    pub kebab: String,
}

/// Case variants of the entity and module code, plus one canonical
/// localization key per field.
///
/// Templates reach it as `naming`; `naming.keys[field.name]` is the same
/// string the `localization_key` helper produces for that field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNamingContext {
    pub entity: NameVariants,
    pub module: NameVariants,
    pub i18n_prefix: String,
    pub fields: Vec<FieldNaming>,
    pub keys: BTreeMap<String, String>,
}

impl DerivedNamingContext {
    pub fn derive(config: &ModuleConfig) -> Self {
        let prefix = config.i18n.prefix.clone();
        let fields: Vec<FieldNaming> = config
            .fields
            .iter()
            .map(|f| FieldNaming {
                name: f.name.clone(),
                localization_key: naming::to_localization_key(&f.name, &prefix),
                constant: naming::to_constant_case(&f.name),
                pascal: naming::to_pascal_case(&f.name),
                kebab: naming::to_kebab_case(&f.name),
            })
            .collect();
        let keys = fields
            .iter()
            .map(|f| (f.name.clone(), f.localization_key.clone()))
            .collect();

        Self {
            entity: NameVariants::of(&config.entity.name),
            module: NameVariants::of(&config.module.code),
            i18n_prefix: prefix,
            fields,
            keys,
        }
    }

    /// Localization key of a configured field.
    pub fn key(&self, field_name: &str) -> Option<&str> {
        self.keys.get(field_name).map(String::as_str)
    }

    /// Key for any label under the module prefix.
    pub fn label_key(&self, name: &str) -> String {
        naming::to_localization_key(name, &self.i18n_prefix)
    }
}
