#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  dashboard cards, the surface widget, and the activity editor) remain present
  in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for cards, tables, export panels, etc).
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
    ".button--accent",
    ".button--ghost",
    // Dashboard cards
    ".dashboard__cards",
    ".dashboard-card",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__controls",
    ".dashboard-card__placeholder",
    // Surface widget
    ".heatmap-surface",
    ".heatmap-surface__plot",
    ".heatmap-surface--empty",
    ".heatmap-surface__placeholder",
    // Reports
    ".report-controls",
    ".report-cards__grid",
    ".report-card",
    ".report-card__date",
    ".report-card__label",
    // Export panel
    ".report-export__summary",
    ".report-export__actions",
    ".report-export__meta",
    ".report-export__meta--success",
    ".report-export__meta--error",
    // Activity editor
    ".activity-card",
    ".activity-feedback",
    ".activity-table",
    ".activity-table__input",
    ".activity-sync--pending",
    ".activity-sync--synced",
    ".activity-actions",
    ".activity-conflict",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn conflict_block_consistency() {
    // Ensure the conflict panel's action row ships with its container.
    let has_panel = THEME_CSS.contains(".activity-conflict");
    let has_actions = THEME_CSS.contains(".activity-conflict__actions");
    assert!(
        has_panel && has_actions,
        "Conflict panel sub‑selectors missing (panel: {has_panel}, actions: {has_actions})"
    );
}
