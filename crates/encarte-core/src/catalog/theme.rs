//! Theme presets.

use serde::Serialize;

/// Id of the theme a fresh flyer starts with.
pub const DEFAULT_THEME_ID: &str = "oferta-do-dia";

/// A background/foreground colour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleRole {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl StyleRole {
    const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Named style roles used by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeStyle {
    /// Banner strip at the top.
    pub header: StyleRole,
    /// Page body behind the product grid.
    pub body: StyleRole,
    /// Section headings.
    pub text: StyleRole,
    /// Badges and highlights.
    pub accent: StyleRole,
}

/// A selectable visual preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    /// Label in the theme selector.
    pub name: &'static str,
    /// Banner headline.
    pub title: &'static str,
    pub style: ThemeStyle,
    /// Artwork that replaces the generated header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'static str>,
}

/// The built-in presets, in selector order.
pub static BUILTIN_THEMES: [Theme; 4] = [
    Theme {
        id: DEFAULT_THEME_ID,
        name: "Oferta do Dia",
        title: "OFERTA DO DIA",
        style: ThemeStyle {
            header: StyleRole::new("#dc2626", "#ffffff"),
            body: StyleRole::new("#fef2f2", "#7f1d1d"),
            text: StyleRole::new("#fef2f2", "#7f1d1d"),
            accent: StyleRole::new("#facc15", "#7f1d1d"),
        },
        banner: None,
    },
    Theme {
        id: "fim-de-semana",
        name: "Fim de Semana",
        title: "ESPECIAL FIM DE SEMANA",
        style: ThemeStyle {
            header: StyleRole::new("#16a34a", "#ffffff"),
            body: StyleRole::new("#f0fdf4", "#14532d"),
            text: StyleRole::new("#f0fdf4", "#14532d"),
            accent: StyleRole::new("#facc15", "#14532d"),
        },
        banner: None,
    },
    Theme {
        id: "quarta-carne",
        name: "Quarta da Carne",
        title: "QUARTA DA CARNE",
        style: ThemeStyle {
            header: StyleRole::new("#991b1b", "#ffffff"),
            body: StyleRole::new("#f5f5f4", "#1c1917"),
            text: StyleRole::new("#f5f5f4", "#1c1917"),
            accent: StyleRole::new("#dc2626", "#ffffff"),
        },
        banner: None,
    },
    Theme {
        id: "sextou",
        name: "Sextou de Ofertas",
        title: "SEXTOU DE OFERTAS",
        style: ThemeStyle {
            header: StyleRole::new("#9333ea", "#ffffff"),
            body: StyleRole::new("#faf5ff", "#581c87"),
            text: StyleRole::new("#faf5ff", "#581c87"),
            accent: StyleRole::new("#facc15", "#581c87"),
        },
        banner: None,
    },
];

/// Ordered, non-empty, read-only set of themes.
#[derive(Debug, Clone, Copy)]
pub struct ThemeCatalog {
    themes: &'static [Theme],
}

impl ThemeCatalog {
    /// Wrap a theme list. Returns `None` for an empty list.
    pub fn new(themes: &'static [Theme]) -> Option<Self> {
        if themes.is_empty() {
            None
        } else {
            Some(Self { themes })
        }
    }

    /// The presets shipped with the app.
    pub fn builtin() -> Self {
        Self {
            themes: &BUILTIN_THEMES,
        }
    }

    /// Get all themes in selector order.
    pub fn all(&self) -> &'static [Theme] {
        self.themes
    }

    /// Look up a theme by id.
    pub fn get(&self, id: &str) -> Option<&'static Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// First entry; the fallback for unknown ids.
    pub fn default_theme(&self) -> &'static Theme {
        &self.themes[0]
    }

    /// Look up a theme, falling back to the first entry for unknown ids.
    pub fn resolve(&self, id: &str) -> &'static Theme {
        self.get(id).unwrap_or_else(|| self.default_theme())
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let ids: Vec<&str> = ThemeCatalog::builtin().all().iter().map(|t| t.id).collect();
        assert_eq!(ids, ["oferta-do-dia", "fim-de-semana", "quarta-carne", "sextou"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUILTIN_THEMES.len());
    }

    #[test]
    fn test_resolve_known() {
        let theme = ThemeCatalog::builtin().resolve("sextou");
        assert_eq!(theme.title, "SEXTOU DE OFERTAS");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_first() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.resolve("natal").id, DEFAULT_THEME_ID);
        assert_eq!(catalog.resolve("").id, DEFAULT_THEME_ID);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        static NONE: [Theme; 0] = [];
        assert!(ThemeCatalog::new(&NONE).is_none());
        assert!(ThemeCatalog::new(&BUILTIN_THEMES[2..]).is_some());
    }
}
