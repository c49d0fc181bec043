//! Option lists for the "Add translation" form.
//!
//! Target locales are split into two groups: locales that already have a
//! language pack installed come first, every other known locale follows
//! after a disabled separator. The source locale is never offered.

use crate::catalog::LocaleInfo;
use std::collections::{BTreeMap, HashSet};

/// The locale every translation is authored from.
pub const SOURCE_LOCALE: &str = "en_US";

/// Label of the non-selectable option between the two groups.
pub const SEPARATOR_LABEL: &str = "──────────";

/// One entry of the target-language `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    /// Locale code, empty for the separator
    pub value: String,
    /// Native name when known, otherwise the code itself
    pub label: String,
    /// Only the separator is disabled
    pub disabled: bool,
}

impl LocaleOption {
    fn locale(code: &str, translations: &BTreeMap<String, LocaleInfo>) -> Self {
        Self {
            value: code.to_string(),
            label: resolve_label(code, translations),
            disabled: false,
        }
    }

    fn separator() -> Self {
        Self {
            value: String::new(),
            label: SEPARATOR_LABEL.to_string(),
            disabled: true,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.disabled && self.value.is_empty()
    }
}

/// One entry of the source-plugin `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOption {
    pub slug: String,
    pub name: String,
}

/// Builds the ordered target-language options.
///
/// Installed locales form the preferred group, the remaining known locales
/// the second group. Each group is sorted by label using ordinal string
/// comparison. A separator is emitted only when both groups are non-empty.
pub fn build_target_language_options(
    installed_locales: &[String],
    translations: &BTreeMap<String, LocaleInfo>,
    source_locale: &str,
) -> Vec<LocaleOption> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(source_locale);

    let mut preferred: Vec<LocaleOption> = installed_locales
        .iter()
        .map(String::as_str)
        .filter(|code| seen.insert(*code))
        .map(|code| LocaleOption::locale(code, translations))
        .collect();

    let mut remaining: Vec<LocaleOption> = translations
        .keys()
        .map(String::as_str)
        .filter(|code| seen.insert(*code))
        .map(|code| LocaleOption::locale(code, translations))
        .collect();

    sort_by_label(&mut preferred);
    sort_by_label(&mut remaining);

    let separator = (!preferred.is_empty() && !remaining.is_empty()).then(LocaleOption::separator);

    preferred
        .into_iter()
        .chain(separator)
        .chain(remaining)
        .collect()
}

/// Builds the source-plugin options: entries without a display name are
/// dropped, the rest are sorted by display name.
pub fn build_source_plugin_options(plugins: &BTreeMap<String, String>) -> Vec<PluginOption> {
    let mut options: Vec<PluginOption> = plugins
        .iter()
        .filter(|(_, name)| !name.trim().is_empty())
        .map(|(slug, name)| PluginOption {
            slug: slug.clone(),
            name: name.clone(),
        })
        .collect();

    options.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
    options
}

fn resolve_label(code: &str, translations: &BTreeMap<String, LocaleInfo>) -> String {
    translations
        .get(code)
        .and_then(|info| info.native_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(code)
        .to_string()
}

fn sort_by_label(options: &mut [LocaleOption]) {
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
}
