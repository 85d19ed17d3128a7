//! Page rendering and static site generation for folio portfolios.
//!
//! [`Renderer`] turns validated content into HTML documents; [`StaticBuilder`]
//! writes every page, the stylesheet and the static files to an output directory.

pub mod assets;
pub mod builder;
pub mod nav;
pub mod renderer;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{is_built, BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use nav::{LinkKind, NavConfig, NavLink, Navigation};
pub use renderer::{Document, PageStatus, RenderError, Renderer, SiteMeta};
pub use templates::TemplateEngine;
