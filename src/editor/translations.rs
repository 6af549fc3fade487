use crate::value::{record_or_empty, without_key};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub label: &'static str,
}

pub const PRIMARY_LOCALE: Locale = Locale {
    code: "en-US",
    label: "English",
};

pub const SECONDARY_LOCALE: Locale = Locale {
    code: "sq",
    label: "Shqip",
};

/// The editable locales, primary first.
pub const LOCALES: [Locale; 2] = [PRIMARY_LOCALE, SECONDARY_LOCALE];

pub fn find_locale(code: &str) -> Option<Locale> {
    LOCALES.into_iter().find(|l| l.code == code)
}

/// Sets one translated property.
///
/// An empty value deletes the property; a locale left without properties is removed,
/// and a map left without locales becomes unset (`None`). Unknown locale codes and blank
/// property keys leave the value unchanged. Locales outside the editable set that are
/// already present (e.g. from an imported draft) are kept untouched.
pub fn set_property(
    current: Option<&Value>,
    locale: &str,
    property: &str,
    value: &str,
) -> Option<Value> {
    let property = property.trim();
    if find_locale(locale).is_none() || property.is_empty() {
        return current.cloned();
    }

    let mut map = record_or_empty(current);
    let mut locale_record = record_or_empty(map.get(locale));
    if value.is_empty() {
        locale_record = without_key(locale_record, property);
    } else {
        locale_record.insert(property.to_string(), Value::String(value.to_string()));
    }

    if locale_record.is_empty() {
        map = without_key(map, locale);
    } else {
        map.insert(locale.to_string(), Value::Object(locale_record));
    }

    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}

/// Codes of the editable locales that currently hold at least one property.
pub fn populated_locales(current: Option<&Value>) -> Vec<&'static str> {
    let map = record_or_empty(current);
    LOCALES
        .iter()
        .filter(|l| {
            map.get(l.code)
                .and_then(Value::as_object)
                .is_some_and(|props| !props.is_empty())
        })
        .map(|l| l.code)
        .collect()
}
