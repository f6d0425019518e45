use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("reading definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed TOML definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("placement '{label}' needs either `bits` or `variable-length`")]
    MissingWidth { label: String },

    #[error("placement '{label}' sets both `bits` and `variable-length`")]
    AmbiguousWidth { label: String },

    #[error("placement '{label}' has zero width")]
    ZeroWidth { label: String },

    #[error("invalid definition: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unsupported text size unit: {0}")]
    UnsupportedUnit(String),

    #[error("malformed text size: {0}")]
    MalformedSize(String),

    #[error("text size too large: {0}")]
    TooLarge(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dimension error: {0}")]
    Unit(#[from] UnitError),

    #[error("writing SVG: {0}")]
    Write(#[from] std::fmt::Error),
}
