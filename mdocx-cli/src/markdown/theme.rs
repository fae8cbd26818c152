// ABOUTME: Markdown colour themes: built-in palettes and TOML theme files
// ABOUTME: Resolves a theme name or path into styles for each markdown element

use super::RenderError;
use crate::constants::env::COLORFGBG;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Markdown elements that receive their own style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Text,
    Heading,
    HeadingMinor,
    Emphasis,
    Strong,
    Strikethrough,
    Code,
    Link,
    Quote,
    Rule,
    Bullet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub heading: Color,
    pub heading_minor: Color,
    pub emphasis: Color,
    pub strong: Color,
    pub code: Color,
    pub code_background: Color,
    pub link: Color,
    pub quote: Color,
    pub rule: Color,
    pub bullet: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownTheme {
    pub name: String,
    /// `None` disables all styling
    pub palette: Option<Palette>,
    /// syntect theme for fenced code; `None` leaves code unhighlighted
    pub code_theme: Option<String>,
}

pub const BUILTIN_THEMES: &[&str] = &["auto", "dark", "light", "dracula", "notty"];

impl MarkdownTheme {
    /// Resolve a theme name, or a path to a TOML theme file.
    ///
    /// An empty name picks light or dark from the terminal background.
    pub fn resolve(theme: &str) -> Result<Self, RenderError> {
        let theme = theme.trim();
        if let Some(builtin) = Self::builtin(theme) {
            return Ok(builtin);
        }

        let path = Path::new(theme);
        if !path.is_file() {
            return Err(RenderError::UnknownTheme(theme.to_string()));
        }
        Self::from_file(path)
    }

    fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "" | "auto" => Self::builtin(auto_theme_name(std::env::var(COLORFGBG).ok().as_deref())),
            "dark" => Some(Self {
                name: "dark".to_string(),
                palette: Some(Palette {
                    text: Color::Rgb(208, 208, 208),
                    heading: Color::Rgb(255, 95, 175),
                    heading_minor: Color::Rgb(175, 135, 255),
                    emphasis: Color::Rgb(215, 215, 175),
                    strong: Color::Rgb(255, 255, 255),
                    code: Color::Rgb(255, 135, 95),
                    code_background: Color::Rgb(48, 48, 48),
                    link: Color::Rgb(95, 175, 255),
                    quote: Color::Rgb(138, 138, 138),
                    rule: Color::Rgb(88, 88, 88),
                    bullet: Color::Rgb(255, 95, 175),
                }),
                code_theme: Some("base16-ocean.dark".to_string()),
            }),
            "light" => Some(Self {
                name: "light".to_string(),
                palette: Some(Palette {
                    text: Color::Rgb(48, 48, 48),
                    heading: Color::Rgb(175, 0, 135),
                    heading_minor: Color::Rgb(95, 0, 175),
                    emphasis: Color::Rgb(88, 88, 88),
                    strong: Color::Rgb(0, 0, 0),
                    code: Color::Rgb(175, 0, 0),
                    code_background: Color::Rgb(238, 238, 238),
                    link: Color::Rgb(0, 95, 175),
                    quote: Color::Rgb(108, 108, 108),
                    rule: Color::Rgb(178, 178, 178),
                    bullet: Color::Rgb(175, 0, 135),
                }),
                code_theme: Some("InspiredGitHub".to_string()),
            }),
            "dracula" => Some(Self {
                name: "dracula".to_string(),
                palette: Some(Palette {
                    text: Color::Rgb(248, 248, 242),
                    heading: Color::Rgb(189, 147, 249),
                    heading_minor: Color::Rgb(139, 233, 253),
                    emphasis: Color::Rgb(241, 250, 140),
                    strong: Color::Rgb(255, 184, 108),
                    code: Color::Rgb(80, 250, 123),
                    code_background: Color::Rgb(68, 71, 90),
                    link: Color::Rgb(139, 233, 253),
                    quote: Color::Rgb(98, 114, 164),
                    rule: Color::Rgb(98, 114, 164),
                    bullet: Color::Rgb(255, 121, 198),
                }),
                code_theme: Some("base16-eighties.dark".to_string()),
            }),
            "notty" => Some(Self {
                name: "notty".to_string(),
                palette: None,
                code_theme: None,
            }),
            _ => None,
        }
    }

    fn from_file(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ThemeFile = toml::from_str(&content).map_err(|e| RenderError::ThemeFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let base_name = file.base.as_deref().unwrap_or("auto");
        let mut theme = Self::builtin(base_name)
            .ok_or_else(|| RenderError::UnknownTheme(base_name.to_string()))?;

        theme.name = path.display().to_string();
        if let Some(palette) = theme.palette.as_mut() {
            file.apply_colors(palette)?;
        }
        if let Some(code_theme) = file.code_theme {
            theme.code_theme = Some(code_theme);
        }

        log::debug!("Loaded markdown theme from {}", path.display());
        Ok(theme)
    }

    pub fn style(&self, role: Role) -> Style {
        let Some(palette) = &self.palette else {
            return Style::default();
        };

        match role {
            Role::Text => Style::default().fg(palette.text),
            Role::Heading => Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
            Role::HeadingMinor => Style::default()
                .fg(palette.heading_minor)
                .add_modifier(Modifier::BOLD),
            Role::Emphasis => Style::default()
                .fg(palette.emphasis)
                .add_modifier(Modifier::ITALIC),
            Role::Strong => Style::default()
                .fg(palette.strong)
                .add_modifier(Modifier::BOLD),
            Role::Strikethrough => Style::default().add_modifier(Modifier::CROSSED_OUT),
            Role::Code => Style::default()
                .fg(palette.code)
                .bg(palette.code_background),
            Role::Link => Style::default()
                .fg(palette.link)
                .add_modifier(Modifier::UNDERLINED),
            Role::Quote => Style::default()
                .fg(palette.quote)
                .add_modifier(Modifier::ITALIC),
            Role::Rule => Style::default().fg(palette.rule),
            Role::Bullet => Style::default().fg(palette.bullet),
        }
    }
}

/// Pick light or dark from a `COLORFGBG` value such as `15;0`
pub fn auto_theme_name(colorfgbg: Option<&str>) -> &'static str {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(7) | Some(15) => "light",
        _ => "dark",
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    base: Option<String>,
    code_theme: Option<String>,
    text: Option<String>,
    heading: Option<String>,
    heading_minor: Option<String>,
    emphasis: Option<String>,
    strong: Option<String>,
    code: Option<String>,
    code_background: Option<String>,
    link: Option<String>,
    quote: Option<String>,
    rule: Option<String>,
    bullet: Option<String>,
}

impl ThemeFile {
    fn apply_colors(&self, palette: &mut Palette) -> Result<(), RenderError> {
        let overrides = [
            ("text", &self.text, &mut palette.text),
            ("heading", &self.heading, &mut palette.heading),
            ("heading_minor", &self.heading_minor, &mut palette.heading_minor),
            ("emphasis", &self.emphasis, &mut palette.emphasis),
            ("strong", &self.strong, &mut palette.strong),
            ("code", &self.code, &mut palette.code),
            ("code_background", &self.code_background, &mut palette.code_background),
            ("link", &self.link, &mut palette.link),
            ("quote", &self.quote, &mut palette.quote),
            ("rule", &self.rule, &mut palette.rule),
            ("bullet", &self.bullet, &mut palette.bullet),
        ];

        for (key, value, slot) in overrides {
            if let Some(value) = value {
                *slot = Color::from_str(value).map_err(|_| RenderError::InvalidColor {
                    key,
                    value: value.clone(),
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn theme_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_themes_resolve() {
        for name in ["dark", "light", "dracula", "notty", "DARK"] {
            let theme = MarkdownTheme::resolve(name).unwrap();
            assert_eq!(theme.name, name.to_lowercase());
        }
    }

    #[test]
    fn test_auto_theme_name() {
        assert_eq!(auto_theme_name(Some("0;15")), "light");
        assert_eq!(auto_theme_name(Some("0;default;7")), "light");
        assert_eq!(auto_theme_name(Some("15;0")), "dark");
        assert_eq!(auto_theme_name(Some("garbage")), "dark");
        assert_eq!(auto_theme_name(None), "dark");
    }

    #[test]
    fn test_unknown_theme() {
        let result = MarkdownTheme::resolve("no-such-theme-anywhere");
        assert!(matches!(result, Err(RenderError::UnknownTheme(name)) if name == "no-such-theme-anywhere"));
    }

    #[test]
    fn test_notty_has_no_styles() {
        let theme = MarkdownTheme::resolve("notty").unwrap();
        assert_eq!(theme.style(Role::Heading), Style::default());
        assert_eq!(theme.style(Role::Code), Style::default());
        assert!(theme.code_theme.is_none());
    }

    #[test]
    fn test_theme_file_overrides() {
        let file = theme_file(
            r##"
base = "dark"
heading = "#ff0000"
link = "blue"
bullet = "42"
code_theme = "InspiredGitHub"
"##,
        );

        let theme = MarkdownTheme::resolve(file.path().to_str().unwrap()).unwrap();
        let palette = theme.palette.as_ref().unwrap();
        assert_eq!(palette.heading, Color::Rgb(255, 0, 0));
        assert_eq!(palette.link, Color::Blue);
        assert_eq!(palette.bullet, Color::Indexed(42));
        assert_eq!(theme.code_theme.as_deref(), Some("InspiredGitHub"));
    }

    #[test]
    fn test_theme_file_invalid_color() {
        let file = theme_file("heading = \"not-a-colour\"\n");
        let result = MarkdownTheme::resolve(file.path().to_str().unwrap());
        assert!(matches!(result, Err(RenderError::InvalidColor { key: "heading", .. })));
    }

    #[test]
    fn test_theme_file_unknown_key() {
        let file = theme_file("headline = \"red\"\n");
        let result = MarkdownTheme::resolve(file.path().to_str().unwrap());
        assert!(matches!(result, Err(RenderError::ThemeFile { .. })));
    }

    #[test]
    fn test_theme_file_unknown_base() {
        let file = theme_file("base = \"solarized\"\n");
        let result = MarkdownTheme::resolve(file.path().to_str().unwrap());
        assert!(matches!(result, Err(RenderError::UnknownTheme(name)) if name == "solarized"));
    }
}
