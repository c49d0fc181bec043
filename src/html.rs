//! HTML escaping and page templates for the admin screens.

use crate::db::TranslationRecord;
use crate::menu::{admin_path, AdminMenu, ADD_SLUG, VIEW_SLUG};
use crate::options::{LocaleOption, PluginOption, SOURCE_LOCALE};
use crate::strings::AdminStrings;
use std::fmt::Write;

/// Form field carrying the CSRF nonce.
pub const NONCE_FIELD: &str = "_i18nly_nonce";

/// Escape text for use between HTML tags.
pub fn esc_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for use inside a double-quoted attribute value.
///
/// The same five characters as [`esc_html`] are replaced, so either is safe
/// in both positions; the two names document intent at the call site.
pub fn esc_attr(text: &str) -> String {
    esc_html(text)
}

/// Link to the detail page of a translation
pub fn view_url(id: i64) -> String {
    format!("{}?translation_id={}", admin_path(VIEW_SLUG), id)
}

/// Wraps page content with the admin navigation.
fn layout(menu: &AdminMenu, current_slug: &str, title: &str, body: &str) -> String {
    let mut nav = String::new();
    for page in &menu.submenus {
        let current = if page.menu_slug == current_slug {
            r#" class="current" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(
            nav,
            r#"<li><a href="{}"{}>{}</a></li>"#,
            esc_attr(&page.path()),
            current,
            esc_html(page.menu_title)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} &lsaquo; {menu_title}</title>
</head>
<body class="i18nly-admin">
<nav id="adminmenu" aria-label="{menu_title}">
<a class="menu-top" href="{top_href}">{menu_title}</a>
<ul class="wp-submenu">{nav}</ul>
</nav>
<div class="wrap">
{body}
</div>
</body>
</html>
"#,
        title = esc_html(title),
        menu_title = esc_html(menu.top_level.menu_title),
        top_href = esc_attr(&menu.top_level.path()),
        nav = nav,
        body = body,
    )
}

// ==================== Listing Page ====================

pub fn render_list_page(
    strings: &AdminStrings,
    menu: &AdminMenu,
    records: &[TranslationRecord],
) -> String {
    let mut body = format!(
        r#"<h1>{}</h1>
<a href="{}" class="page-title-action">{}</a>
"#,
        esc_html(strings.list_heading),
        esc_attr(&admin_path(ADD_SLUG)),
        esc_html(strings.list_add_new)
    );

    body.push_str(r#"<div id="i18nly-translations-list" class="i18nly-translations-list">"#);

    if records.is_empty() {
        let _ = write!(body, "<p>{}</p>", esc_html(strings.list_empty));
    } else {
        let _ = write!(
            body,
            r#"<table class="wp-list-table widefat striped">
<thead><tr><th scope="col">{}</th><th scope="col">{}</th><th scope="col">{}</th><th scope="col">{}</th></tr></thead>
<tbody>"#,
            esc_html(strings.field_id),
            esc_html(strings.field_source),
            esc_html(strings.field_target_language),
            esc_html(strings.field_created_at)
        );
        for record in records {
            let _ = write!(
                body,
                r#"<tr><td><a href="{}">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                esc_attr(&view_url(record.id)),
                record.id,
                esc_html(&record.source_slug),
                esc_html(&record.target_language),
                esc_html(&format_timestamp(record))
            );
        }
        body.push_str("</tbody>\n</table>");
    }

    body.push_str("</div>");

    layout(menu, menu.top_level.menu_slug, strings.list_heading, &body)
}

// ==================== Create Page ====================

pub struct AddPageContext<'a> {
    pub plugins: &'a [PluginOption],
    pub locales: &'a [LocaleOption],
    pub nonce: &'a str,
    pub show_error: bool,
}

pub fn render_add_page(strings: &AdminStrings, menu: &AdminMenu, ctx: &AddPageContext<'_>) -> String {
    let mut body = format!("<h1>{}</h1>\n", esc_html(strings.add_heading));

    if ctx.show_error {
        let _ = write!(
            body,
            r#"<div class="notice notice-error"><p>{}</p></div>"#,
            esc_html(strings.add_error)
        );
        body.push('\n');
    }

    let mut plugin_options = format!(
        r#"<option value="">{}</option>"#,
        esc_html(strings.field_source_placeholder)
    );
    for plugin in ctx.plugins {
        let _ = write!(
            plugin_options,
            r#"<option value="{}">{}</option>"#,
            esc_attr(&plugin.slug),
            esc_html(&plugin.name)
        );
    }

    let mut locale_options = format!(
        r#"<option value="">{}</option>"#,
        esc_html(strings.field_target_placeholder)
    );
    for option in ctx.locales {
        let disabled = if option.disabled { " disabled" } else { "" };
        let _ = write!(
            locale_options,
            r#"<option value="{}"{}>{}</option>"#,
            esc_attr(&option.value),
            disabled,
            esc_html(&option.label)
        );
    }

    let _ = write!(
        body,
        r#"<form id="i18nly-translation-create" method="post" action="{action}">
<input type="hidden" name="{nonce_field}" value="{nonce}">
<table class="form-table" role="presentation">
<tr><th scope="row"><label for="i18nly-source-slug">{source_label}</label></th>
<td><select id="i18nly-source-slug" name="source_slug" required>{plugin_options}</select></td></tr>
<tr><th scope="row">{source_language_label}</th>
<td><code>{source_locale}</code></td></tr>
<tr><th scope="row"><label for="i18nly-target-language">{target_label}</label></th>
<td><select id="i18nly-target-language" name="target_language" required>{locale_options}</select></td></tr>
</table>
<p class="submit"><button type="submit" class="button button-primary">{submit}</button></p>
</form>"#,
        action = esc_attr(&admin_path(ADD_SLUG)),
        nonce_field = NONCE_FIELD,
        nonce = esc_attr(ctx.nonce),
        source_label = esc_html(strings.field_source),
        plugin_options = plugin_options,
        source_language_label = esc_html(strings.field_source_language),
        source_locale = esc_html(SOURCE_LOCALE),
        target_label = esc_html(strings.field_target_language),
        locale_options = locale_options,
        submit = esc_html(strings.add_submit),
    );

    layout(menu, ADD_SLUG, strings.add_heading, &body)
}

// ==================== Detail Page ====================

pub fn render_view_page(
    strings: &AdminStrings,
    menu: &AdminMenu,
    record: Option<&TranslationRecord>,
) -> String {
    let mut body = format!("<h1>{}</h1>\n", esc_html(strings.view_heading));

    match record {
        None => {
            let _ = write!(
                body,
                r#"<div id="i18nly-translation-view" class="notice notice-warning"><p>{}</p></div>"#,
                esc_html(strings.view_not_found)
            );
        }
        Some(record) => {
            let _ = write!(
                body,
                r#"<table id="i18nly-translation-view" class="form-table" role="presentation">
<tr><th scope="row">{}</th><td>{}</td></tr>
<tr><th scope="row">{}</th><td>{}</td></tr>
<tr><th scope="row">{}</th><td>{}</td></tr>
<tr><th scope="row">{}</th><td>{}</td></tr>
<tr><th scope="row">{}</th><td>{}</td></tr>
</table>"#,
                esc_html(strings.field_id),
                record.id,
                esc_html(strings.field_source),
                esc_html(&record.source_slug),
                esc_html(strings.field_source_language),
                esc_html(SOURCE_LOCALE),
                esc_html(strings.field_target_language),
                esc_html(&record.target_language),
                esc_html(strings.field_created_at),
                esc_html(&format_timestamp(record))
            );
        }
    }

    layout(menu, VIEW_SLUG, strings.view_heading, &body)
}

fn format_timestamp(record: &TranslationRecord) -> String {
    record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
