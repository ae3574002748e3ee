//! Identifier case conversions and localization key synthesis.
//!
//! Every template helper, every generator and the validator's derived
//! messages call into this module. There is exactly one implementation of
//! each rule; nothing else in the workspace re-derives a case form.
//!
//! All functions are total: the empty string maps to the empty string.
//!
//! | Function                | `"mobileNumber"`  | `"vehicle-type"` |
//! |-------------------------|-------------------|------------------|
//! | [`to_pascal_case`]      | `MobileNumber`    | `VehicleType`    |
//! | [`to_camel_case`]       | `mobileNumber`    | `vehicleType`    |
//! | [`to_kebab_case`]       | `mobile-number`   | `vehicle-type`   |
//! | [`to_constant_case`]    | `MOBILE_NUMBER`   | `VEHICLE-TYPE`   |
//! | [`localization_segment`]| `MOBILE_NUMBER`   | `VEHICLE-TYPE`   |
//!
//! [`to_constant_case`] and [`localization_segment`] agree on plain
//! camelCase input but differ on runs of capitals: `"HTTPServer"` becomes
//! `H_T_T_P_SERVER` as a constant and `HTTPSERVER` as a localization
//! segment. Constants are used for code identifiers; every localization key
//! goes through [`to_localization_key`].

use std::collections::BTreeSet;

/// Prefix applied by [`to_localization_key`] when the caller passes none.
pub const DEFAULT_LOCALIZATION_PREFIX: &str = "MODULE_";

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Capitalise the first character, then collapse every run of `-`, `_` or
/// whitespace and uppercase the character that follows it.
///
/// A trailing separator run is dropped. Everything else is kept as-is.
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    out.extend(first.to_uppercase());

    let mut pending_upper = false;
    for c in chars {
        if is_separator(c) {
            pending_upper = true;
        } else if pending_upper {
            out.extend(c.to_uppercase());
            pending_upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// [`to_pascal_case`] with the first character lower-cased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace every ASCII capital with `-` plus its lowercase form, then drop a
/// single leading `-`.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    match out.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

/// Prefix every ASCII capital with `_`, drop a single leading `_`, then
/// uppercase everything.
pub fn to_constant_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    let trimmed = out.strip_prefix('_').unwrap_or(&out);
    trimmed.to_uppercase()
}

/// The key body used by [`to_localization_key`]: `_` is inserted only where
/// a lowercase ASCII letter is immediately followed by an uppercase one,
/// then the whole string is uppercased.
pub fn localization_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c);
    }
    out.to_uppercase()
}

/// Canonical localization key for `name` under `prefix`.
///
/// An empty prefix falls back to [`DEFAULT_LOCALIZATION_PREFIX`]. An empty
/// name yields an empty key rather than a bare prefix.
pub fn to_localization_key(name: &str, prefix: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let prefix = if prefix.is_empty() {
        DEFAULT_LOCALIZATION_PREFIX
    } else {
        prefix
    };
    format!("{prefix}{}", localization_segment(name))
}

/// Localization prefix derived from an entity name, e.g. `VehicleType` →
/// `VEHICLE_TYPE_`.
pub fn default_prefix_for(entity_name: &str) -> String {
    if entity_name.is_empty() {
        return DEFAULT_LOCALIZATION_PREFIX.to_string();
    }
    format!("{}_", localization_segment(entity_name))
}

/// Localization key segments every bundle writes for the module itself.
pub const FIXED_LOCALIZATION_SEGMENTS: [&str; 27] = [
    "MODULE_NAME",
    "MODULE_DESCRIPTION",
    "TITLE",
    "SUBTITLE",
    "CREATE_TITLE",
    "CREATE_SUBTITLE",
    "SEARCH_TITLE",
    "VIEW_HEADER",
    "INBOX_HEADER",
    "CREATE",
    "EDIT",
    "UPDATE",
    "DELETE",
    "VIEW",
    "SEARCH",
    "CLEAR",
    "SUBMIT",
    "CANCEL",
    "SAVE",
    "CREATED_SUCCESSFULLY",
    "UPDATED_SUCCESSFULLY",
    "CREATION_FAILED",
    "NO_RESULTS_FOUND",
    "REQUIRED_FIELD",
    "PATTERN_ERR_MSG",
    "GO_BACK",
    "DOCUMENTS_SECTION",
];

/// Segments only written when a workflow is enabled.
pub const WORKFLOW_LOCALIZATION_SEGMENTS: [&str; 9] = [
    "WORKFLOW_TITLE",
    "WORKFLOW_SECTION",
    "CURRENT_STATE",
    "NEXT_ACTIONS",
    "COMMENTS",
    "TAKE_ACTION",
    "ASSIGNED_TO",
    "INBOX_ASSIGNED_TO_ME",
    "INBOX_ASSIGNED_TO_ALL",
];

/// Key segment of a form or view section heading, e.g. `ownerDetails` →
/// `OWNER_DETAILS_SECTION`.
pub fn section_segment(section: &str) -> String {
    format!("{}_SECTION", to_constant_case(section))
}

/// Every key segment a bundle writes that does not come from a field.
pub fn reserved_localization_segments<'a>(
    entity_name: &str,
    sections: impl IntoIterator<Item = &'a str>,
    workflow: bool,
) -> BTreeSet<String> {
    let mut reserved: BTreeSet<String> = FIXED_LOCALIZATION_SEGMENTS
        .iter()
        .map(|s| s.to_string())
        .collect();
    if workflow {
        reserved.extend(WORKFLOW_LOCALIZATION_SEGMENTS.iter().map(|s| s.to_string()));
    }
    reserved.insert(localization_segment(&format!("add{entity_name}")));
    reserved.insert(localization_segment(&format!("search{entity_name}s")));
    reserved.extend(sections.into_iter().map(section_segment));
    reserved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_constant_case(""), "");
        assert_eq!(localization_segment(""), "");
        assert_eq!(to_localization_key("", "EMP_"), "");
    }

    #[test]
    fn pascal_case_collapses_separator_runs() {
        assert_eq!(to_pascal_case("vehicle"), "Vehicle");
        assert_eq!(to_pascal_case("vehicle-type"), "VehicleType");
        assert_eq!(to_pascal_case("vehicle__type  name"), "VehicleTypeName");
        assert_eq!(to_pascal_case("mobileNumber"), "MobileNumber");
        assert_eq!(to_pascal_case("trailing-"), "Trailing");
    }

    #[test]
    fn pascal_case_preserves_interior_characters() {
        assert_eq!(to_pascal_case("HTTPServer"), "HTTPServer");
        assert_eq!(to_pascal_case("a1b2"), "A1b2");
    }

    #[test]
    fn camel_case_lowers_first_character() {
        assert_eq!(to_camel_case("Vehicle"), "vehicle");
        assert_eq!(to_camel_case("vehicle-type"), "vehicleType");
        assert_eq!(to_camel_case("HTTPServer"), "hTTPServer");
    }

    #[test]
    fn kebab_case_splits_on_capitals() {
        assert_eq!(to_kebab_case("VehicleType"), "vehicle-type");
        assert_eq!(to_kebab_case("vehicleType"), "vehicle-type");
        assert_eq!(to_kebab_case("vehicle-mgmt"), "vehicle-mgmt");
        assert_eq!(to_kebab_case("HTTP"), "h-t-t-p");
    }

    #[test]
    fn constant_case_splits_on_every_capital() {
        assert_eq!(to_constant_case("mobileNumber"), "MOBILE_NUMBER");
        assert_eq!(to_constant_case("VehicleType"), "VEHICLE_TYPE");
        assert_eq!(to_constant_case("HTTPServer"), "H_T_T_P_SERVER");
    }

    #[test]
    fn localization_key_only_splits_lower_to_upper() {
        assert_eq!(to_localization_key("mobileNumber", "VEHICLE_"), "VEHICLE_MOBILE_NUMBER");
        assert_eq!(to_localization_key("name", "EMP_"), "EMP_NAME");
        assert_eq!(to_localization_key("HTTPServer", "X_"), "X_HTTPSERVER");
        assert_eq!(to_localization_key("address2Line", "X_"), "X_ADDRESS2LINE");
        assert_eq!(
            to_localization_key("registrationNumber", "VEHICLE_"),
            "VEHICLE_REGISTRATION_NUMBER"
        );
    }

    #[test]
    fn localization_key_defaults_prefix() {
        assert_eq!(to_localization_key("status", ""), "MODULE_STATUS");
    }

    #[test]
    fn localization_and_constant_forms_diverge_on_capital_runs() {
        assert_eq!(localization_segment("ABc"), "ABC");
        assert_eq!(to_constant_case("ABc"), "A_BC");
    }

    #[test]
    fn default_prefix_derives_from_entity() {
        assert_eq!(default_prefix_for("Vehicle"), "VEHICLE_");
        assert_eq!(default_prefix_for("VehicleType"), "VEHICLE_TYPE_");
        assert_eq!(default_prefix_for(""), "MODULE_");
    }

    #[test]
    fn camel_pascal_round_trip_is_stable() {
        let samples = [
            "vehicle",
            "Vehicle",
            "registrationNumber",
            "HTTPServer",
            "a",
            "Z9",
            "x1Y2z3",
            "ALLCAPS",
            "0lead",
        ];
        for s in samples {
            let once = to_camel_case(s);
            let again = to_camel_case(&to_pascal_case(&once));
            assert_eq!(again, once, "round trip diverged for {s:?}");
        }
    }

    #[test]
    fn field_order_does_not_change_keys() {
        let forward: Vec<_> = ["name", "mobileNumber", "status"]
            .iter()
            .map(|n| to_localization_key(n, "EMP_"))
            .collect();
        let mut backward: Vec<_> = ["status", "mobileNumber", "name"]
            .iter()
            .map(|n| to_localization_key(n, "EMP_"))
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn reserved_segments_cover_entity_labels_and_sections() {
        let reserved = reserved_localization_segments("GPSDevice", ["basic", "ownerDetails"], false);
        assert!(reserved.contains("ADD_GPSDEVICE"));
        assert!(reserved.contains("SEARCH_GPSDEVICES"));
        assert!(reserved.contains("OWNER_DETAILS_SECTION"));
        assert!(reserved.contains("TITLE"));
        assert!(!reserved.contains("COMMENTS"));

        let with_workflow = reserved_localization_segments("GPSDevice", Vec::<&str>::new(), true);
        assert!(with_workflow.contains("COMMENTS"));
    }
}
