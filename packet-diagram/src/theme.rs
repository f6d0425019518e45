use serde::Deserialize;

pub const DEFAULT_BACKGROUND_COLOR: &str = "white";
pub const DEFAULT_TEXT_COLOR: &str = "black";
pub const DEFAULT_TEXT_SIZE: &str = "16pt";
pub const DEFAULT_TEXT_FONT_FAMILY: &str = "Sans Serif";
pub const DEFAULT_AXIS_TITLE_TEXT_SIZE: &str = "8pt";

/// Theme section of a definition document. Every value is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeSpec {
    /// Name of a predefined theme. Only `default` is known.
    #[serde(default)]
    pub predefined: Option<String>,
    #[serde(default)]
    pub background: Option<BackgroundSpec>,
    #[serde(default)]
    pub text: Option<TextSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BackgroundSpec {
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TextSpec {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub axis_title_size: Option<String>,
}

/// Fully resolved theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background_color: String,
    pub text_color: String,
    /// CSS font size for labels, e.g. `16pt`.
    pub text_size: String,
    pub font_family: String,
    /// CSS font size for axis titles.
    pub axis_title_size: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            text_size: DEFAULT_TEXT_SIZE.to_string(),
            font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
            axis_title_size: DEFAULT_AXIS_TITLE_TEXT_SIZE.to_string(),
        }
    }
}

impl ThemeSpec {
    /// Merge the explicit values over the defaults.
    pub fn resolve(&self) -> Theme {
        let defaults = Theme::default();
        let background = self.background.clone().unwrap_or_default();
        let text = self.text.clone().unwrap_or_default();
        Theme {
            background_color: background.color.unwrap_or(defaults.background_color),
            text_color: text.color.unwrap_or(defaults.text_color),
            text_size: text.size.unwrap_or(defaults.text_size),
            font_family: text.font_family.unwrap_or(defaults.font_family),
            axis_title_size: text.axis_title_size.unwrap_or(defaults.axis_title_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_resolves_to_defaults() {
        assert_eq!(ThemeSpec::default().resolve(), Theme::default());
    }

    #[test]
    fn axis_title_size_is_independent_of_text_size() {
        let spec = ThemeSpec {
            text: Some(TextSpec {
                size: Some("20px".into()),
                axis_title_size: Some("10px".into()),
                ..TextSpec::default()
            }),
            ..ThemeSpec::default()
        };
        let theme = spec.resolve();
        assert_eq!(theme.text_size, "20px");
        assert_eq!(theme.axis_title_size, "10px");
        assert_eq!(theme.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn partial_background_keeps_text_defaults() {
        let spec = ThemeSpec {
            background: Some(BackgroundSpec {
                color: Some("#eee".into()),
            }),
            ..ThemeSpec::default()
        };
        let theme = spec.resolve();
        assert_eq!(theme.background_color, "#eee");
        assert_eq!(theme.font_family, DEFAULT_TEXT_FONT_FAMILY);
    }
}
