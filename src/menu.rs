//! Admin menu registration.
//!
//! The menu set is fixed: one top-level "Translations" entry with two
//! submenus. The detail page has a slug and a route but no menu entry.

use crate::security::MANAGE_OPTIONS;
use crate::strings::AdminStrings;

/// Slug of the top-level menu and the listing page.
pub const MENU_SLUG: &str = "i18nly-translations";

/// Slug of the create form.
pub const ADD_SLUG: &str = "i18nly-add-translation";

/// Slug of the detail page (not listed in the menu).
pub const VIEW_SLUG: &str = "i18nly-view-translation";

/// A registered admin menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPage {
    pub menu_title: &'static str,
    pub capability: &'static str,
    pub menu_slug: &'static str,
}

impl MenuPage {
    /// Route serving this page
    pub fn path(&self) -> String {
        admin_path(self.menu_slug)
    }
}

/// The admin menu: a top-level entry and its submenus, in display order.
#[derive(Debug, Clone)]
pub struct AdminMenu {
    pub top_level: MenuPage,
    pub submenus: Vec<MenuPage>,
}

impl AdminMenu {
    pub fn register(strings: &AdminStrings) -> Self {
        Self {
            top_level: MenuPage {
                menu_title: strings.menu_translations,
                capability: MANAGE_OPTIONS,
                menu_slug: MENU_SLUG,
            },
            submenus: vec![
                MenuPage {
                    menu_title: strings.menu_all_translations,
                    capability: MANAGE_OPTIONS,
                    menu_slug: MENU_SLUG,
                },
                MenuPage {
                    menu_title: strings.menu_add_translation,
                    capability: MANAGE_OPTIONS,
                    menu_slug: ADD_SLUG,
                },
            ],
        }
    }

    /// Capability required to open the page served at `path`.
    ///
    /// Pages without a menu entry (the detail page, the root redirect)
    /// require the top-level menu's capability.
    pub fn capability_for(&self, path: &str) -> &'static str {
        self.submenus
            .iter()
            .find(|page| page.path() == path)
            .map(|page| page.capability)
            .unwrap_or(self.top_level.capability)
    }
}

/// Path of the admin page with the given slug
pub fn admin_path(slug: &str) -> String {
    format!("/admin/{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::ENGLISH_STRINGS;

    #[test]
    fn test_register_menu_structure() {
        let menu = AdminMenu::register(&ENGLISH_STRINGS);

        assert_eq!(menu.top_level.menu_title, "Translations");
        assert_eq!(menu.top_level.menu_slug, "i18nly-translations");

        assert_eq!(menu.submenus.len(), 2);
        assert_eq!(menu.submenus[0].menu_title, "All translations");
        assert_eq!(menu.submenus[0].menu_slug, "i18nly-translations");
        assert_eq!(menu.submenus[1].menu_title, "Add translation");
        assert_eq!(menu.submenus[1].menu_slug, "i18nly-add-translation");
    }

    #[test]
    fn test_all_entries_require_manage_options() {
        let menu = AdminMenu::register(&ENGLISH_STRINGS);

        assert_eq!(menu.top_level.capability, MANAGE_OPTIONS);
        assert!(menu.submenus.iter().all(|page| page.capability == MANAGE_OPTIONS));
    }

    #[test]
    fn test_paths() {
        let menu = AdminMenu::register(&ENGLISH_STRINGS);

        assert_eq!(menu.top_level.path(), "/admin/i18nly-translations");
        assert_eq!(menu.submenus[1].path(), "/admin/i18nly-add-translation");
        assert_eq!(admin_path(VIEW_SLUG), "/admin/i18nly-view-translation");
    }

    #[test]
    fn test_capability_for_listed_page_reads_its_entry() {
        let mut menu = AdminMenu::register(&ENGLISH_STRINGS);
        menu.submenus[1].capability = "edit_translations";

        assert_eq!(menu.capability_for("/admin/i18nly-add-translation"), "edit_translations");
        assert_eq!(menu.capability_for("/admin/i18nly-translations"), MANAGE_OPTIONS);
    }

    #[test]
    fn test_capability_for_unlisted_page_uses_top_level() {
        let mut menu = AdminMenu::register(&ENGLISH_STRINGS);
        menu.top_level.capability = "edit_translations";

        assert_eq!(menu.capability_for("/admin/i18nly-view-translation"), "edit_translations");
        assert_eq!(menu.capability_for("/"), "edit_translations");
    }
}
