//! Static theme values and the stylesheet built from them.
//!
//! Colors, radius and spacing are exposed as CSS custom properties on `:root`
//! so component rules only reference `var(--...)` names.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Base spacing unit in pixels.
pub const SPACING_UNIT_PX: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub border_radius: &'static str,
}

pub const THEME: Theme = Theme {
    colors: Palette {
        primary: "#2563eb",
        primary_hover: "#1746a2",
        background: "#f7f8fa",
        card: "#fff",
        border: "#e5e7eb",
        text: "#222",
        error: "#ef4444",
        success: "#22c55e",
    },
    border_radius: "12px",
};

/// `factor` spacing units as a CSS length.
pub fn spacing(factor: u32) -> String {
    format!("{}px", factor * SPACING_UNIT_PX)
}

impl Theme {
    /// `:root` block declaring every theme value as a custom property.
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let vars = [
            ("color-primary", c.primary.to_owned()),
            ("color-primary-hover", c.primary_hover.to_owned()),
            ("color-background", c.background.to_owned()),
            ("color-card", c.card.to_owned()),
            ("color-border", c.border.to_owned()),
            ("color-text", c.text.to_owned()),
            ("color-error", c.error.to_owned()),
            ("color-success", c.success.to_owned()),
            ("radius", self.border_radius.to_owned()),
            ("space-1", spacing(1)),
            ("space-2", spacing(2)),
            ("space-3", spacing(3)),
            ("space-4", spacing(4)),
        ];
        let mut out = String::from(":root {\n");
        for (name, value) in vars {
            out.push_str("  --");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }

    /// Full stylesheet: variables, global reset, then component rules.
    pub fn stylesheet(&self) -> String {
        let mut css = self.css_variables();
        css.push_str(GLOBAL_STYLE);
        css.push_str(COMPONENT_STYLE);
        css
    }
}

const GLOBAL_STYLE: &str = r"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}
body {
  font-family: 'Inter', Arial, Helvetica, sans-serif;
  background: var(--color-background);
  color: var(--color-text);
  min-height: 100vh;
  -webkit-font-smoothing: antialiased;
}
a {
  color: inherit;
  text-decoration: none;
}
button {
  font-family: inherit;
  cursor: pointer;
}
";

const COMPONENT_STYLE: &str = r"
.auth-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--color-background);
}
.auth-card,
.panel {
  background: var(--color-card);
  padding: 2.5rem 2rem;
  border-radius: var(--radius);
  box-shadow: 0 2px 16px rgba(0, 0, 0, 0.04);
  width: 100%;
  max-width: 350px;
}
.panel {
  max-width: 640px;
  margin: var(--space-4) auto;
}
.auth-card__title,
.panel__title {
  margin-bottom: 1.5rem;
  font-weight: 600;
  font-size: 1.5rem;
  text-align: center;
}
.form-input {
  width: 100%;
  padding: 0.75rem;
  margin-bottom: 1rem;
  border: 1px solid var(--color-border);
  border-radius: 8px;
  font-size: 1rem;
  background: #fafbfc;
}
.form-button {
  width: 100%;
  padding: 0.75rem;
  background: var(--color-primary);
  color: #fff;
  border: none;
  border-radius: 8px;
  font-weight: 600;
  font-size: 1rem;
  margin-bottom: 0.5rem;
  transition: background 0.2s;
}
.form-button:hover {
  background: var(--color-primary-hover);
}
.form-button:disabled {
  opacity: 0.6;
  cursor: wait;
}
.form-error {
  color: var(--color-error);
  margin-bottom: 1rem;
  text-align: center;
  font-size: 0.95rem;
}
.form-success {
  color: var(--color-success);
  margin-bottom: 1rem;
  text-align: center;
  font-size: 0.95rem;
}
.auth-card__footer {
  text-align: center;
  margin-top: 1rem;
  font-size: 0.95rem;
}
.auth-card__footer a {
  color: var(--color-primary);
  font-weight: 600;
}
.nav-bar {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-3);
  background: var(--color-card);
  border-bottom: 1px solid var(--color-border);
}
.nav-bar__brand {
  font-weight: 600;
  margin-right: var(--space-2);
}
.nav-bar__link--active {
  color: var(--color-primary);
  font-weight: 600;
}
.nav-bar__spacer {
  flex: 1;
}
.nav-bar__logout {
  background: none;
  border: 1px solid var(--color-border);
  border-radius: 8px;
  padding: var(--space-1) var(--space-2);
}
.post-list {
  list-style: none;
  margin-bottom: var(--space-3);
}
.post-list__item {
  padding: var(--space-1) 0;
  border-bottom: 1px solid var(--color-border);
  word-break: break-all;
}
.muted {
  color: #6b7280;
  text-align: center;
  margin-bottom: 1rem;
}
";
