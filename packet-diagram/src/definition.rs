use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::dimension::MAX_PIXELS;
use crate::error::DefinitionError;
use crate::field::{self, Field, FieldWidth};
use crate::theme::{Theme, ThemeSpec};

pub const DEFAULT_OCTETS_PER_LINE: u32 = 4;
pub const DEFAULT_X_AXIS_BITS_HEIGHT: u32 = 30;
pub const DEFAULT_X_AXIS_BITS_UNIT: u32 = 32;
pub const DEFAULT_X_AXIS_BITS_ORIGIN: u32 = 0;
pub const DEFAULT_X_AXIS_OCTETS_HEIGHT: u32 = 20;
pub const DEFAULT_Y_AXIS_BITS_ORIGIN: u32 = 0;
pub const DEFAULT_Y_AXIS_OCTETS_ORIGIN: u32 = 0;
pub const DEFAULT_CELL_WIDTH: u32 = 30;
pub const DEFAULT_CELL_HEIGHT: u32 = 30;
pub const DEFAULT_BREAK_MARK_WIDTH: u32 = 10;
pub const DEFAULT_BREAK_MARK_HEIGHT: u32 = 10;

/// Serialization format of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// Pick the format from a file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// A definition document as written, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Definition {
    #[serde(default)]
    pub theme: Option<ThemeSpec>,
    #[serde(default)]
    pub octets_per_line: Option<u32>,
    #[serde(default)]
    pub x_axis: XAxisSpec,
    #[serde(default)]
    pub y_axis: YAxisSpec,
    #[serde(default)]
    pub cell: SizeSpec,
    #[serde(default)]
    pub break_mark: SizeSpec,
    #[serde(default)]
    pub placements: Vec<PlacementSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct XAxisSpec {
    #[serde(default)]
    pub bits: Option<XAxisBitsSpec>,
    #[serde(default)]
    pub octets: Option<XAxisOctetsSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct YAxisSpec {
    #[serde(default)]
    pub bits: Option<YAxisColumnSpec>,
    #[serde(default)]
    pub octets: Option<YAxisColumnSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct XAxisBitsSpec {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub direction: Option<BitDirection>,
    #[serde(default)]
    pub origin: Option<u32>,
    #[serde(default)]
    pub unit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct XAxisOctetsSpec {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct YAxisColumnSpec {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub origin: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SizeSpec {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlacementSpec {
    pub label: String,
    #[serde(default)]
    pub bits: Option<u32>,
    #[serde(default)]
    pub variable_length: Option<VariableLengthSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct VariableLengthSpec {
    pub max_bits: u32,
}

/// Numbering direction of the X bit axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// X bit axis settings. Present only when the axis is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XBitsAxis {
    pub height: u32,
    pub direction: BitDirection,
    pub origin: u32,
    pub unit: u32,
}

/// X octet axis settings. Present only when the axis is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XOctetsAxis {
    pub height: u32,
}

/// One Y axis column. `width: None` means sized from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YAxisColumn {
    pub width: Option<u32>,
    pub origin: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A definition with every default applied and every field validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    pub theme: Theme,
    pub octets_per_line: u32,
    pub x_bits: Option<XBitsAxis>,
    pub x_octets: Option<XOctetsAxis>,
    pub y_bits: Option<YAxisColumn>,
    pub y_octets: Option<YAxisColumn>,
    pub cell: Size,
    pub break_mark: Size,
    pub fields: Vec<Field>,
}

impl DiagramConfig {
    pub fn bits_per_row(&self) -> u32 {
        self.octets_per_line * 8
    }

    pub fn total_bits(&self) -> u64 {
        field::total_bits(&self.fields)
    }

    pub fn total_octets(&self) -> u64 {
        self.total_bits() / 8
    }

    /// Rows of the grid. Resolved configs keep this within the pixel limit,
    /// so it always fits `u32`.
    pub fn total_rows(&self) -> u32 {
        u32::try_from(field::total_rows(self.total_bits(), self.bits_per_row())).unwrap_or(u32::MAX)
    }

    /// Reject geometry that would not fit on a canvas addressed in `i32`.
    fn check_extent(&self) -> Result<(), DefinitionError> {
        let lengths = [
            (self.cell.width, "cell width"),
            (self.cell.height, "cell height"),
            (self.break_mark.width, "break-mark width"),
            (self.break_mark.height, "break-mark height"),
            (self.x_bits.map_or(0, |a| a.height), "x-axis bits height"),
            (self.x_octets.map_or(0, |a| a.height), "x-axis octets height"),
            (self.y_bits.and_then(|c| c.width).unwrap_or(0), "y-axis bits width"),
            (self.y_octets.and_then(|c| c.width).unwrap_or(0), "y-axis octets width"),
        ];
        for (value, what) in lengths {
            within_limit(u64::from(value), what)?;
        }

        let rows = field::total_rows(self.total_bits(), self.bits_per_row());
        within_limit(
            u64::from(self.bits_per_row()) * u64::from(self.cell.width) + u64::from(self.break_mark.width / 2),
            "grid width",
        )?;
        within_limit(rows.saturating_mul(u64::from(self.cell.height)), "grid height")
    }

    /// Parse and resolve a YAML definition.
    pub fn from_yaml_str(s: &str) -> Result<DiagramConfig, DefinitionError> {
        let def: Definition = serde_yaml::from_str(s)?;
        def.resolve()
    }

    /// Parse and resolve a TOML definition.
    pub fn from_toml_str(s: &str) -> Result<DiagramConfig, DefinitionError> {
        let def: Definition = toml::from_str(s)?;
        def.resolve()
    }
}

/// Read a definition document and resolve it.
pub fn load_definition<R: Read>(mut reader: R, format: Format) -> Result<DiagramConfig, DefinitionError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    match format {
        Format::Yaml => DiagramConfig::from_yaml_str(&text),
        Format::Toml => DiagramConfig::from_toml_str(&text),
    }
}

fn shown(show: Option<bool>) -> bool {
    show.unwrap_or(true)
}

fn within_limit(pixels: u64, what: &str) -> Result<(), DefinitionError> {
    if pixels > u64::from(MAX_PIXELS) {
        return Err(DefinitionError::Invalid(format!(
            "{what} of {pixels}px exceeds the {MAX_PIXELS}px limit"
        )));
    }
    Ok(())
}

fn positive(value: Option<u32>, default: u32, what: &str) -> Result<u32, DefinitionError> {
    match value.unwrap_or(default) {
        0 => Err(DefinitionError::Invalid(format!("{what} must be positive"))),
        v => Ok(v),
    }
}

impl PlacementSpec {
    fn to_field(&self) -> Result<Field, DefinitionError> {
        let width = match (self.bits, &self.variable_length) {
            (Some(bits), None) => FieldWidth::Fixed(bits),
            (None, Some(v)) => FieldWidth::Variable { max_bits: v.max_bits },
            (None, None) => {
                return Err(DefinitionError::MissingWidth {
                    label: self.label.clone(),
                })
            }
            (Some(_), Some(_)) => {
                return Err(DefinitionError::AmbiguousWidth {
                    label: self.label.clone(),
                })
            }
        };
        if width.bits() == 0 {
            return Err(DefinitionError::ZeroWidth {
                label: self.label.clone(),
            });
        }
        Ok(Field {
            label: self.label.clone(),
            width,
        })
    }
}

impl Definition {
    /// Validate the document and merge it over the defaults.
    pub fn resolve(&self) -> Result<DiagramConfig, DefinitionError> {
        let theme_spec = self.theme.clone().unwrap_or_default();
        if let Some(name) = &theme_spec.predefined {
            if name != "default" {
                return Err(DefinitionError::Invalid(format!(
                    "unknown predefined theme '{name}'"
                )));
            }
        }

        let octets_per_line = positive(self.octets_per_line, DEFAULT_OCTETS_PER_LINE, "octets-per-line")?;
        if octets_per_line.checked_mul(8).is_none() {
            return Err(DefinitionError::Invalid(format!(
                "octets-per-line {octets_per_line} is too large"
            )));
        }

        let x_bits = match &self.x_axis.bits {
            Some(spec) if shown(spec.show) => Some(XBitsAxis {
                height: spec.height.unwrap_or(DEFAULT_X_AXIS_BITS_HEIGHT),
                direction: spec.direction.unwrap_or_default(),
                origin: spec.origin.unwrap_or(DEFAULT_X_AXIS_BITS_ORIGIN),
                unit: positive(spec.unit, DEFAULT_X_AXIS_BITS_UNIT, "x-axis bits unit")?,
            }),
            _ => None,
        };
        let x_octets = match &self.x_axis.octets {
            Some(spec) if shown(spec.show) => Some(XOctetsAxis {
                height: spec.height.unwrap_or(DEFAULT_X_AXIS_OCTETS_HEIGHT),
            }),
            _ => None,
        };
        let y_column = |spec: &Option<YAxisColumnSpec>, default_origin: u32| match spec {
            Some(spec) if shown(spec.show) => Some(YAxisColumn {
                width: spec.width,
                origin: spec.origin.unwrap_or(default_origin),
            }),
            _ => None,
        };

        let fields = self
            .placements
            .iter()
            .map(PlacementSpec::to_field)
            .collect::<Result<Vec<_>, _>>()?;

        let config = DiagramConfig {
            theme: theme_spec.resolve(),
            octets_per_line,
            x_bits,
            x_octets,
            y_bits: y_column(&self.y_axis.bits, DEFAULT_Y_AXIS_BITS_ORIGIN),
            y_octets: y_column(&self.y_axis.octets, DEFAULT_Y_AXIS_OCTETS_ORIGIN),
            cell: Size {
                width: positive(self.cell.width, DEFAULT_CELL_WIDTH, "cell width")?,
                height: positive(self.cell.height, DEFAULT_CELL_HEIGHT, "cell height")?,
            },
            break_mark: Size {
                width: self.break_mark.width.unwrap_or(DEFAULT_BREAK_MARK_WIDTH),
                height: self.break_mark.height.unwrap_or(DEFAULT_BREAK_MARK_HEIGHT),
            },
            fields,
        };
        config.check_extent()?;
        Ok(config)
    }
}
