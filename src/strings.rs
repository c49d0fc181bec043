/// All user-facing strings of the admin pages
///
/// Strings are stored in their raw, unescaped form. When rendering HTML,
/// pass them through `esc_html()` or `esc_attr()`.
#[derive(Debug, Clone)]
pub struct AdminStrings {
    // ==================== Menu ====================
    /// Title of the top-level menu entry
    pub menu_translations: &'static str,

    /// Submenu entry for the listing page
    pub menu_all_translations: &'static str,

    /// Submenu entry for the create form
    pub menu_add_translation: &'static str,

    // ==================== Listing Page ====================
    /// Heading of the listing page
    pub list_heading: &'static str,

    /// Shown when no translation exists yet
    pub list_empty: &'static str,

    /// Link from the listing page to the create form
    pub list_add_new: &'static str,

    // ==================== Create Page ====================
    /// Heading of the create form
    pub add_heading: &'static str,

    /// Label of the source plugin selector
    pub field_source: &'static str,

    /// First, empty choice of the source plugin selector
    pub field_source_placeholder: &'static str,

    /// Label of the fixed source language
    pub field_source_language: &'static str,

    /// Label of the target language selector
    pub field_target_language: &'static str,

    /// First, empty choice of the target language selector
    pub field_target_placeholder: &'static str,

    /// Submit button
    pub add_submit: &'static str,

    /// Generic message shown after a failed submission
    pub add_error: &'static str,

    // ==================== Detail Page ====================
    /// Heading of the detail page
    pub view_heading: &'static str,

    /// Shown when the requested translation does not exist
    pub view_not_found: &'static str,

    /// Column/field labels
    pub field_id: &'static str,
    pub field_created_at: &'static str,

    // ==================== Security ====================
    /// Shown when a form nonce is missing or expired
    pub nonce_expired: &'static str,
}

// ==================== English Strings ====================

/// English strings (canonical)
pub const ENGLISH_STRINGS: AdminStrings = AdminStrings {
    // Menu
    menu_translations: "Translations",
    menu_all_translations: "All translations",
    menu_add_translation: "Add translation",

    // Listing
    list_heading: "Translations",
    list_empty: "No translations yet.",
    list_add_new: "Add translation",

    // Create
    add_heading: "Add translation",
    field_source: "Source",
    field_source_placeholder: "Select a plugin",
    field_source_language: "Source language",
    field_target_language: "Target language",
    field_target_placeholder: "Select a language",
    add_submit: "Create translation",
    add_error: "Please select a source plugin and a target language.",

    // Detail
    view_heading: "Translation",
    view_not_found: "Translation not found.",
    field_id: "ID",
    field_created_at: "Created",

    // Security
    nonce_expired: "The link you followed has expired.",
};

// ==================== French Strings ====================

/// French strings
pub const FRENCH_STRINGS: AdminStrings = AdminStrings {
    // Menu
    menu_translations: "Traductions",
    menu_all_translations: "Toutes les traductions",
    menu_add_translation: "Ajouter une traduction",

    // Listing
    list_heading: "Traductions",
    list_empty: "Aucune traduction pour le moment.",
    list_add_new: "Ajouter une traduction",

    // Create
    add_heading: "Ajouter une traduction",
    field_source: "Source",
    field_source_placeholder: "Choisir une extension",
    field_source_language: "Langue source",
    field_target_language: "Langue cible",
    field_target_placeholder: "Choisir une langue",
    add_submit: "Créer la traduction",
    add_error: "Veuillez choisir une extension source et une langue cible.",

    // Detail
    view_heading: "Traduction",
    view_not_found: "Traduction introuvable.",
    field_id: "ID",
    field_created_at: "Créée le",

    // Security
    nonce_expired: "Le lien que vous avez suivi a expiré.",
};

/// Strings for a UI locale code (e.g., "fr_FR" or "fr").
///
/// Only the language part is matched. Unknown locales fall back to English.
pub fn get_strings(locale: &str) -> &'static AdminStrings {
    let language = locale.split(['_', '-']).next().unwrap_or_default();
    match language.to_ascii_lowercase().as_str() {
        "fr" => &FRENCH_STRINGS,
        _ => &ENGLISH_STRINGS,
    }
}
