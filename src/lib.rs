//! I18nly: an admin workspace for tracking plugin translation workflows.
//!
//! A translation record pairs an installed plugin with a target locale. The
//! admin pages list records, offer a form to create one and show a single
//! record; the host site's plugins and locales come from [`catalog`].

pub mod admin;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod html;
pub mod menu;
pub mod options;
pub mod security;
pub mod server;
pub mod strings;
