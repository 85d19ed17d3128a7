//! Content model for folio portfolio sites.
//!
//! This crate loads the project catalog (`projects.json`) and the profile
//! document (`home.md`), validates both once, and exposes them as read-only
//! values that the renderers borrow.

pub mod catalog;
pub mod frontmatter;
pub mod markdown;
pub mod profile;
pub mod record;
pub mod site;

pub use catalog::{Catalog, CatalogError, RecordNotFound};
pub use frontmatter::{extract_frontmatter, FrontmatterError};
pub use markdown::render_markdown;
pub use profile::{Certification, Contact, Education, Profile, ProfileError, Publication, SkillGroup};
pub use record::{ProjectRecord, RecordError};
pub use site::{ContentError, SiteContent, CATALOG_FILE, PROFILE_FILE};
