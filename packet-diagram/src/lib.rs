pub mod error;
pub mod field;
pub mod theme;
pub mod definition;
pub mod units;
pub mod dimension;
pub mod layout;
pub mod axis;
pub mod observe;
pub mod style;
pub mod render;
pub mod svg;

pub use definition::{load_definition, Definition, DiagramConfig, Format};
pub use error::{DefinitionError, RenderError, UnitError};
pub use render::{render, render_svg, render_with, Scene};
