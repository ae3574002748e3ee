//! Localization bundles.
//!
//! Bundles are built directly rather than through a template: they are
//! data, and their key order must follow the configuration exactly.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;
use tracing::{debug, instrument};

use super::{GeneratedFile, GeneratorSuite, layout};
use crate::application::templates::TemplateId;
use crate::domain::{DerivedNamingContext, Locale, ModuleConfig, ScreenKind, naming};
use crate::error::{Context, ModgenResult};

/// An ordered key → text table for one locale.
///
/// Inserting an existing key replaces its text but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationBundle {
    entries: Vec<(String, String)>,
}

impl LocalizationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((key, text)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> ModgenResult<String> {
        serde_json::to_string_pretty(self).context("serializing localization bundle")
    }
}

impl Serialize for LocalizationBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, text) in &self.entries {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

const HINDI_GLOSSARY: &[(&str, &str)] = &[
    ("Employee", "कर्मचारी"),
    ("Project", "परियोजना"),
    ("Vehicle", "वाहन"),
    ("Document", "दस्तावेज़"),
    ("User", "उपयोगकर्ता"),
    ("Management", "प्रबंधन"),
    ("System", "सिस्टम"),
    ("Name", "नाम"),
    ("Email", "ईमेल"),
    ("Phone", "फोन"),
    ("Address", "पता"),
    ("Date", "दिनांक"),
    ("Time", "समय"),
    ("Status", "स्थिति"),
    ("Type", "प्रकार"),
    ("Category", "श्रेणी"),
    ("Description", "विवरण"),
    ("Amount", "राशि"),
    ("Number", "संख्या"),
    ("Code", "कोड"),
    ("Create", "बनाएं"),
    ("Edit", "संपादित करें"),
    ("Update", "अपडेट करें"),
    ("Delete", "हटाएं"),
    ("View", "देखें"),
    ("Search", "खोजें"),
    ("Clear", "साफ़ करें"),
    ("Submit", "जमा करें"),
    ("Cancel", "रद्द करें"),
    ("Save", "सेव करें"),
    ("Active", "सक्रिय"),
    ("Inactive", "निष्क्रिय"),
    ("Workflow", "वर्कफ़्लो"),
    ("Comments", "टिप्पणियाँ"),
];

/// Text for `locale`: Hindi locales look `text` up in the glossary and fall
/// back to the English text; every other locale gets `text` unchanged.
pub fn translate(text: &str, locale: &Locale) -> String {
    if !locale.is_hindi() {
        return text.to_string();
    }
    HINDI_GLOSSARY
        .iter()
        .find(|(en, _)| *en == text)
        .map(|(_, hi)| hi.to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Heading text for a section name: `ownerDetails` → `Owner Details`.
fn section_title(section: &str) -> String {
    naming::to_kebab_case(section)
        .split('-')
        .filter(|word| !word.is_empty())
        .map(naming::to_pascal_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn documents_enabled(config: &ModuleConfig) -> bool {
    config
        .extra
        .get("documents")
        .and_then(|d| d.get("enabled"))
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

/// A phrase with an English and a Hindi wording around one term.
fn phrase(locale: &Locale, term: &str, en: impl Fn(&str) -> String, hi: impl Fn(&str) -> String) -> String {
    if locale.is_hindi() {
        hi(&translate(term, locale))
    } else {
        en(term)
    }
}

fn fixed(locale: &Locale, en: &str, hi: &str) -> String {
    let text = if locale.is_hindi() { hi } else { en };
    text.to_string()
}

impl GeneratorSuite {
    /// The key → text table for one locale.
    #[instrument(skip_all, fields(locale = %locale))]
    pub fn localization_bundle(&self, config: &ModuleConfig, locale: &Locale) -> LocalizationBundle {
        let naming = DerivedNamingContext::derive(config);
        let prefix = naming.i18n_prefix.as_str();
        let entity = config.entity.name.as_str();
        let mut bundle = LocalizationBundle::new();

        bundle.insert(format!("{prefix}MODULE_NAME"), translate(&config.module.name, locale));
        bundle.insert(
            format!("{prefix}MODULE_DESCRIPTION"),
            translate(&config.module.description, locale),
        );
        bundle.insert(format!("{prefix}TITLE"), translate(entity, locale));
        bundle.insert(
            format!("{prefix}SUBTITLE"),
            phrase(locale, entity, |e| format!("{e} Management"), |e| format!("{e} प्रबंधन")),
        );

        bundle.insert(
            format!("{prefix}CREATE_TITLE"),
            phrase(locale, entity, |e| format!("New {e}"), |e| format!("नया {e}")),
        );
        bundle.insert(
            format!("{prefix}CREATE_SUBTITLE"),
            phrase(locale, entity, |e| format!("{e} Details"), |e| format!("{e} विवरण")),
        );
        bundle.insert(
            format!("{prefix}SEARCH_TITLE"),
            phrase(locale, entity, |e| format!("Search {e}"), |e| format!("{e} खोजें")),
        );
        bundle.insert(
            format!("{prefix}VIEW_HEADER"),
            phrase(locale, entity, |e| format!("{e} Details"), |e| format!("{e} विवरण")),
        );
        bundle.insert(
            format!("{prefix}INBOX_HEADER"),
            phrase(locale, entity, |e| format!("{e} Inbox"), |e| format!("{e} इनबॉक्स")),
        );
        bundle.insert(
            naming.label_key(&format!("search{entity}s")),
            phrase(locale, entity, |e| format!("Search {e}s"), |e| format!("{e} खोजें")),
        );
        bundle.insert(
            naming.label_key(&format!("add{entity}")),
            phrase(locale, entity, |e| format!("Add {e}"), |e| format!("{e} जोड़ें")),
        );

        for action in ["Create", "Edit", "Update", "Delete", "View", "Search", "Clear", "Submit", "Cancel", "Save"] {
            bundle.insert(
                naming.label_key(&action.to_ascii_lowercase()),
                translate(action, locale),
            );
        }

        bundle.insert(
            format!("{prefix}CREATED_SUCCESSFULLY"),
            phrase(
                locale,
                entity,
                |e| format!("{e} created successfully"),
                |e| format!("{e} सफलतापूर्वक बनाया गया"),
            ),
        );
        bundle.insert(
            format!("{prefix}UPDATED_SUCCESSFULLY"),
            phrase(
                locale,
                entity,
                |e| format!("{e} updated successfully"),
                |e| format!("{e} सफलतापूर्वक अपडेट किया गया"),
            ),
        );
        bundle.insert(
            format!("{prefix}CREATION_FAILED"),
            phrase(
                locale,
                entity,
                |e| format!("Failed to create {e}"),
                |e| format!("{e} बनाने में त्रुटि"),
            ),
        );
        bundle.insert(
            format!("{prefix}NO_RESULTS_FOUND"),
            fixed(locale, "No results found", "कोई परिणाम नहीं मिला"),
        );
        bundle.insert(
            format!("{prefix}REQUIRED_FIELD"),
            fixed(locale, "This field is required", "यह फ़ील्ड आवश्यक है"),
        );
        bundle.insert(
            format!("{prefix}PATTERN_ERR_MSG"),
            fixed(locale, "Invalid format", "गलत प्रारूप"),
        );
        bundle.insert(format!("{prefix}GO_BACK"), fixed(locale, "Go Back", "वापस जाएं"));

        for kind in [ScreenKind::Create, ScreenKind::View] {
            if !config.screens.is_enabled(kind) {
                continue;
            }
            for section in config.screens.sections(kind) {
                bundle.insert(
                    format!("{prefix}{}", naming::section_segment(&section)),
                    translate(&section_title(&section), locale),
                );
            }
        }
        if documents_enabled(config) {
            bundle.insert(
                format!("{prefix}DOCUMENTS_SECTION"),
                translate("Documents", locale),
            );
        }

        for (field, field_naming) in config.fields.iter().zip(&naming.fields) {
            let key = &field_naming.localization_key;
            bundle.insert(key.clone(), translate(&field.label, locale));
            bundle.insert(
                format!("{key}_ERROR"),
                phrase(locale, &field.label, |l| format!("{l} error"), |l| format!("{l} में त्रुटि")),
            );
            bundle.insert(
                format!("{key}_PLACEHOLDER"),
                phrase(locale, &field.label, |l| format!("Enter {l}"), |l| format!("{l} दर्ज करें")),
            );
            if let Some(help) = field.help_text.as_deref().filter(|h| !h.is_empty()) {
                bundle.insert(format!("{key}_HELP"), translate(help, locale));
            }
            for option in field.options.iter().flatten() {
                bundle.insert(format!("{key}_{}", option.code), translate(&option.name, locale));
            }
        }

        let filters = config
            .screens
            .get(ScreenKind::Inbox)
            .filter(|screen| screen.enabled)
            .and_then(|screen| screen.filters.as_deref())
            .unwrap_or_default();
        for filter in filters {
            let key = naming.label_key(filter);
            if bundle.get(&key).is_none() {
                bundle.insert(key, translate(&section_title(filter), locale));
            }
        }

        if config.workflow.is_enabled() {
            bundle.insert(format!("{prefix}WORKFLOW_TITLE"), translate("Workflow", locale));
            bundle.insert(
                format!("{prefix}CURRENT_STATE"),
                fixed(locale, "Current State", "वर्तमान अवस्था"),
            );
            bundle.insert(
                format!("{prefix}NEXT_ACTIONS"),
                fixed(locale, "Next Actions", "अगली कार्यवाहियाँ"),
            );
            bundle.insert(format!("{prefix}COMMENTS"), translate("Comments", locale));
            bundle.insert(format!("{prefix}WORKFLOW_SECTION"), translate("Workflow", locale));
            bundle.insert(
                format!("{prefix}TAKE_ACTION"),
                fixed(locale, "Take Action", "कार्रवाई करें"),
            );
            bundle.insert(
                format!("{prefix}ASSIGNED_TO"),
                fixed(locale, "Assigned To", "सौंपा गया"),
            );
            bundle.insert(
                format!("{prefix}INBOX_ASSIGNED_TO_ME"),
                fixed(locale, "Assigned to me", "मुझे सौंपा गया"),
            );
            bundle.insert(
                format!("{prefix}INBOX_ASSIGNED_TO_ALL"),
                fixed(locale, "Assigned to all", "सभी को सौंपा गया"),
            );
        }

        debug!(keys = bundle.len(), "localization bundle built");
        bundle
    }

    /// `localization/config.js`, listing the generated locales.
    pub fn localization_config(
        &self,
        config: &ModuleConfig,
        locales: &[Locale],
    ) -> ModgenResult<String> {
        self.render(
            TemplateId::LocalizationConfig,
            config,
            json!({ "locales": locales }),
        )
    }

    /// One JSON bundle per locale followed by the loader config.
    pub fn localization_files(
        &self,
        config: &ModuleConfig,
        locales: &[Locale],
    ) -> ModgenResult<Vec<GeneratedFile>> {
        let mut files = Vec::with_capacity(locales.len() + 1);
        for locale in locales {
            let bundle = self.localization_bundle(config, locale);
            files.push(GeneratedFile::new(
                layout::locale_bundle(locale)?,
                bundle.to_json_pretty()?,
            ));
        }
        files.push(GeneratedFile::new(
            layout::localization_config()?,
            self.localization_config(config, locales)?,
        ));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::test_support;
    use crate::application::ports::MockTemplateRenderer;
    use std::sync::Arc;

    fn suite() -> GeneratorSuite {
        GeneratorSuite::new(Arc::new(MockTemplateRenderer::new()))
    }

    fn en() -> Locale {
        Locale::new("en_IN").unwrap()
    }

    fn hi() -> Locale {
        Locale::new("hi_IN").unwrap()
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut bundle = LocalizationBundle::new();
        bundle.insert("A", "1");
        bundle.insert("B", "2");
        bundle.insert("A", "3");
        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(bundle.get("A"), Some("3"));
    }

    #[test]
    fn json_keeps_insertion_order() {
        let mut bundle = LocalizationBundle::new();
        bundle.insert("Z", "last letter");
        bundle.insert("A", "first letter");
        let json = bundle.to_json_pretty().unwrap();
        assert!(json.find("\"Z\"").unwrap() < json.find("\"A\"").unwrap());
    }

    #[test]
    fn field_keys_use_canonical_derivation() {
        let bundle = suite().localization_bundle(&test_support::full_vehicle(), &en());
        assert_eq!(
            bundle.get("VEHICLE_REGISTRATION_NUMBER"),
            Some("Registration Number")
        );
        assert_eq!(
            bundle.get("VEHICLE_REGISTRATION_NUMBER_PLACEHOLDER"),
            Some("Enter Registration Number")
        );
        assert_eq!(bundle.get("VEHICLE_FUEL_TYPE_HELP"), Some("Primary fuel"));
        assert_eq!(bundle.get("VEHICLE_FUEL_TYPE_PETROL"), Some("Petrol"));
        assert_eq!(bundle.get("VEHICLE_SEARCH_VEHICLES"), Some("Search Vehicles"));
        assert_eq!(bundle.get("VEHICLE_WORKFLOW_TITLE"), Some("Workflow"));
    }

    #[test]
    fn screen_labels_have_bundle_keys() {
        let mut value = test_support::vehicle_value();
        value["screens"]["create"] =
            json!({"enabled": true, "roles": ["ADMIN"], "sections": ["basic", "ownerDetails"]});
        value["screens"]["view"] = json!({"enabled": true, "roles": ["ADMIN"]});
        value["documents"] = json!({"enabled": true});
        let config = ModuleConfig::from_value(&value).unwrap();
        let bundle = suite().localization_bundle(&config, &en());

        assert_eq!(bundle.get("VEHICLE_BASIC_SECTION"), Some("Basic"));
        assert_eq!(bundle.get("VEHICLE_OWNER_DETAILS_SECTION"), Some("Owner Details"));
        assert_eq!(bundle.get("VEHICLE_DOCUMENTS_SECTION"), Some("Documents"));
        assert_eq!(bundle.get("VEHICLE_GO_BACK"), Some("Go Back"));
        assert_eq!(bundle.get("VEHICLE_TAKE_ACTION"), None);
    }

    #[test]
    fn workflow_bundles_carry_action_and_inbox_labels() {
        let bundle = suite().localization_bundle(&test_support::full_vehicle(), &en());
        assert_eq!(bundle.get("VEHICLE_TAKE_ACTION"), Some("Take Action"));
        assert_eq!(bundle.get("VEHICLE_WORKFLOW_SECTION"), Some("Workflow"));
        assert_eq!(bundle.get("VEHICLE_ASSIGNED_TO"), Some("Assigned To"));
    }

    #[test]
    fn module_keys_are_all_reserved() {
        let config = test_support::full_vehicle();
        let bundle = suite().localization_bundle(&config, &en());
        let derived = DerivedNamingContext::derive(&config);
        let sections = config
            .screens
            .sections(ScreenKind::Create)
            .into_iter()
            .chain(config.screens.sections(ScreenKind::View))
            .collect::<Vec<_>>();
        let reserved = naming::reserved_localization_segments(
            &config.entity.name,
            sections.iter().map(String::as_str),
            true,
        );

        for key in bundle.keys() {
            let from_field = derived
                .fields
                .iter()
                .any(|f| key.starts_with(f.localization_key.as_str()));
            if from_field {
                continue;
            }
            let segment = key.strip_prefix("VEHICLE_").unwrap();
            assert!(reserved.contains(segment), "{key} is not reserved");
        }
    }

    #[test]
    fn workflow_keys_only_when_enabled() {
        let bundle = suite().localization_bundle(&test_support::vehicle(), &en());
        assert_eq!(bundle.get("VEHICLE_WORKFLOW_TITLE"), None);
    }

    #[test]
    fn hindi_uses_glossary_with_english_fallback() {
        let bundle = suite().localization_bundle(&test_support::full_vehicle(), &hi());
        assert_eq!(bundle.get("VEHICLE_TITLE"), Some("वाहन"));
        assert_eq!(
            bundle.get("VEHICLE_REGISTRATION_NUMBER"),
            Some("Registration Number")
        );
    }

    #[test]
    fn bundles_have_same_keys_across_locales() {
        let config = test_support::full_vehicle();
        let en_keys: Vec<String> = suite()
            .localization_bundle(&config, &en())
            .keys()
            .map(str::to_string)
            .collect();
        let hi_keys: Vec<String> = suite()
            .localization_bundle(&config, &hi())
            .keys()
            .map(str::to_string)
            .collect();
        assert_eq!(en_keys, hi_keys);
    }
}
