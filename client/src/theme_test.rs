use super::*;

#[test]
fn spacing_scales_by_eight_pixels() {
    assert_eq!(spacing(0), "0px");
    assert_eq!(spacing(1), "8px");
    assert_eq!(spacing(3), "24px");
}

#[test]
fn css_variables_declares_palette_and_radius() {
    let css = THEME.css_variables();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-primary: #2563eb;"));
    assert!(css.contains("--color-error: #ef4444;"));
    assert!(css.contains("--radius: 12px;"));
    assert!(css.contains("--space-2: 16px;"));
}

#[test]
fn stylesheet_places_variables_before_rules() {
    let css = THEME.stylesheet();
    let vars_at = css.find(":root").unwrap();
    let body_at = css.find("body {").unwrap();
    let form_at = css.find(".form-error").unwrap();
    assert!(vars_at < body_at);
    assert!(body_at < form_at);
}
