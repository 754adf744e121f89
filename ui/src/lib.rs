//! Shared UI crate for Avatarkit. The pure layout logic, the Dioxus
//! components, and the picker orchestration all live here; the launcher
//! crates only add routing and platform chrome.

pub mod components;
pub mod core;
pub mod i18n;
pub mod picker;
pub mod snapshot;
pub mod views;
