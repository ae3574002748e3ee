//! Domain value objects: ScreenKind, FieldType, Locale.
//!
//! # Design
//!
//! Pure value types with a canonical string form, a `FromStr` parser and
//! serde names that match the configuration document. Declaration order of
//! [`ScreenKind`] is significant: it is the order screens are validated,
//! generated and reported in.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ScreenKind ────────────────────────────────────────────────────────────────

/// A generated UI flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Create,
    Search,
    Inbox,
    View,
    Response,
}

impl ScreenKind {
    /// Every screen kind in declaration order.
    pub const ALL: [ScreenKind; 5] = [
        Self::Create,
        Self::Search,
        Self::Inbox,
        Self::View,
        Self::Response,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Search => "search",
            Self::Inbox => "inbox",
            Self::View => "view",
            Self::Response => "response",
        }
    }

    /// Title-cased form used in generated file and component names.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Search => "Search",
            Self::Inbox => "Inbox",
            Self::View => "View",
            Self::Response => "Response",
        }
    }

    /// Whether a screen configuration file is generated for this kind.
    pub const fn has_config(&self) -> bool {
        !matches!(self, Self::Response)
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "search" => Ok(Self::Search),
            "inbox" => Ok(Self::Inbox),
            "view" => Ok(Self::View),
            "response" => Ok(Self::Response),
            other => Err(DomainError::UnknownScreenKind(other.to_string())),
        }
    }
}

// ── FieldType ─────────────────────────────────────────────────────────────────

/// Input control type of a configured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "textarea")]
    TextArea,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "multiselect")]
    MultiSelect,
    #[serde(rename = "radioordropdown")]
    RadioOrDropdown,
    #[serde(rename = "mobileNumber")]
    MobileNumber,
    #[serde(rename = "amount")]
    Amount,
    #[serde(rename = "locationdropdown")]
    LocationDropdown,
    #[serde(rename = "apidropdown")]
    ApiDropdown,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "component")]
    Component,
}

impl FieldType {
    pub const ALL: [FieldType; 19] = [
        Self::Text,
        Self::Number,
        Self::Date,
        Self::DateTime,
        Self::Email,
        Self::Url,
        Self::Password,
        Self::TextArea,
        Self::Dropdown,
        Self::Radio,
        Self::Checkbox,
        Self::MultiSelect,
        Self::RadioOrDropdown,
        Self::MobileNumber,
        Self::Amount,
        Self::LocationDropdown,
        Self::ApiDropdown,
        Self::File,
        Self::Component,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Email => "email",
            Self::Url => "url",
            Self::Password => "password",
            Self::TextArea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::MultiSelect => "multiselect",
            Self::RadioOrDropdown => "radioordropdown",
            Self::MobileNumber => "mobileNumber",
            Self::Amount => "amount",
            Self::LocationDropdown => "locationdropdown",
            Self::ApiDropdown => "apidropdown",
            Self::File => "file",
            Self::Component => "component",
        }
    }

    /// Types that cannot render without a list of choices.
    pub const fn requires_choices(&self) -> bool {
        matches!(self, Self::Dropdown | Self::Radio | Self::MultiSelect)
    }

    /// Canonical names in declaration order, for schema enums and messages.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(FieldType::as_str).collect()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFieldType(s.to_string()))
    }
}

// ── Locale ────────────────────────────────────────────────────────────────────

/// A localization bundle locale such as `en_IN` or `hi_IN`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidLocale(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether bundles for this locale use the Hindi glossary.
    pub fn is_hindi(&self) -> bool {
        self.0.to_ascii_lowercase().starts_with("hi")
    }

    /// Locales generated when the caller does not choose any.
    pub fn defaults() -> Vec<Locale> {
        vec![Self("en_IN".into()), Self("hi_IN".into())]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_kind_order_is_declaration_order() {
        let mut shuffled = vec![ScreenKind::View, ScreenKind::Create, ScreenKind::Response];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![ScreenKind::Create, ScreenKind::View, ScreenKind::Response]
        );
    }

    #[test]
    fn screen_kind_parses_case_insensitively() {
        assert_eq!(ScreenKind::from_str("Inbox").unwrap(), ScreenKind::Inbox);
        assert!(ScreenKind::from_str("dashboard").is_err());
    }

    #[test]
    fn field_type_round_trips_through_str() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::from_str(t.as_str()).unwrap(), t);
        }
        assert!(FieldType::from_str("slider").is_err());
    }

    #[test]
    fn field_type_serde_names_match_as_str() {
        let json = serde_json::to_string(&FieldType::MobileNumber).unwrap();
        assert_eq!(json, "\"mobileNumber\"");
    }

    #[test]
    fn locale_detects_hindi() {
        assert!(Locale::new("hi_IN").unwrap().is_hindi());
        assert!(!Locale::new("en_IN").unwrap().is_hindi());
        assert!(Locale::new("en IN").is_err());
    }
}
