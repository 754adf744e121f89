#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the avatar
  primitives and the demo playgrounds) remain present in the unified shared
  theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".button--danger",
    // Avatar primitives
    ".avatar {",
    ".avatar__inner",
    ".avatar__initials",
    ".avatar__image",
    // Composite components
    ".avatar-line",
    ".avatar-line__slot",
    ".avatar-badge",
    ".avatar-badge__primary",
    ".avatar-badge__secondary",
    ".avatar-header",
    ".avatar-header__rule",
    ".avatar-header__row",
    ".avatar-header__name",
    // Demo playgrounds
    ".playground__canvas",
    ".playground__controls",
    ".playground__control",
    ".playground__meta",
    // Picker & snapshot panels
    ".picker-menu",
    ".snapshot-panel",
    ".snapshot-panel__meta",
    // Utility
    ".visually-hidden",
];

#[test]
fn all_required_selectors_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing selectors in shared theme:\n  {}",
        missing.join("\n  ")
    );
}
