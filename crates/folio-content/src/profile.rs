//! Biographical content for the home page.
//!
//! The profile lives in `home.md`: YAML frontmatter for the structured
//! sections, followed by a Markdown body for the "About" section.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::markdown::render_markdown;
use crate::record::PLACEHOLDER_URL;

/// Everything the home page shows about the site owner.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Full name, shown in the hero
    pub name: String,

    /// Role line under the name
    pub headline: String,

    /// Short pitch under the headline
    #[serde(default)]
    pub summary: Option<String>,

    /// Slugs of projects to feature, in display order
    #[serde(default)]
    pub featured: Vec<String>,

    #[serde(default)]
    pub publications: Vec<Publication>,

    #[serde(default)]
    pub certifications: Vec<Certification>,

    #[serde(default)]
    pub education: Vec<Education>,

    /// Skills grouped by category
    #[serde(default)]
    pub skills: Vec<SkillGroup>,

    #[serde(default)]
    pub contact: Contact,

    /// Rendered Markdown body
    #[serde(skip_deserializing)]
    pub about_html: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Publication {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Image path, usually under the static directory
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub dates: String,
    #[serde(default, alias = "logoUrl")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.github.is_none() && self.linkedin.is_none()
    }
}

/// Errors that can occur when loading a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Profile frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Profile is missing its frontmatter block")]
    MissingFrontmatter,

    #[error("Profile field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Profile field `{field}` has an invalid link: {url}")]
    InvalidLink { field: &'static str, url: String },
}

impl Profile {
    /// Parse a profile document.
    pub fn parse(source: &str) -> Result<Self, ProfileError> {
        let (meta, body) = extract_frontmatter::<Profile>(source)?;
        let mut profile = meta.ok_or(ProfileError::MissingFrontmatter)?;

        if profile.name.trim().is_empty() {
            return Err(ProfileError::EmptyField("name"));
        }
        if profile.headline.trim().is_empty() {
            return Err(ProfileError::EmptyField("headline"));
        }

        profile.normalize_links()?;
        profile.about_html = render_markdown(body);

        Ok(profile)
    }

    fn normalize_links(&mut self) -> Result<(), ProfileError> {
        for publication in &mut self.publications {
            publication.url = normalize_link("publications.url", &publication.url)?.ok_or_else(
                || ProfileError::InvalidLink {
                    field: "publications.url",
                    url: publication.url.clone(),
                },
            )?;
        }
        for cert in &mut self.certifications {
            cert.image = normalize_optional("certifications.image", cert.image.take())?;
        }
        for edu in &mut self.education {
            edu.logo_url = normalize_optional("education.logo_url", edu.logo_url.take())?;
        }
        self.contact.github = normalize_optional("contact.github", self.contact.github.take())?;
        self.contact.linkedin =
            normalize_optional("contact.linkedin", self.contact.linkedin.take())?;

        Ok(())
    }

    /// Load a profile document from disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let source = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&source)
    }
}

/// Absolute http(s) URLs are kept as written. Anything without a scheme is a
/// site path and gets a single leading `/`, so it can be mounted under the
/// site's base URL at render time.
fn normalize_link(field: &'static str, url: &str) -> Result<Option<String>, ProfileError> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_URL {
        return Ok(None);
    }

    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return Ok(Some(trimmed.to_string()));
    }

    if trimmed.contains(':') {
        return Err(ProfileError::InvalidLink {
            field,
            url: trimmed.to_string(),
        });
    }

    Ok(Some(format!("/{}", trimmed.trim_start_matches('/'))))
}

fn normalize_optional(
    field: &'static str,
    url: Option<String>,
) -> Result<Option<String>, ProfileError> {
    match url {
        Some(url) => normalize_link(field, &url),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = r#"---
name: Thomas Compton
headline: Senior Data Scientist | NLP & LLM Engineer
featured: [debate-simulator, ocr-evaluation]
publications:
  - title: Holistic evaluations of topic models
    url: https://arxiv.org/abs/2507.23364
education:
  - degree: MSc Social Research
    school: University of York
    dates: 2022 - 2023
skills:
  - category: NLP & ML
    items: [spaCy, BERTopic]
contact:
  email: someone@example.com
---

I apply computational methods to *historical* texts.
"#;

    #[test]
    fn parses_frontmatter_sections() {
        let profile = Profile::parse(HOME).unwrap();

        assert_eq!(profile.name, "Thomas Compton");
        assert_eq!(profile.featured, vec!["debate-simulator", "ocr-evaluation"]);
        assert_eq!(profile.publications.len(), 1);
        assert_eq!(profile.education[0].school, "University of York");
        assert_eq!(profile.education[0].logo_url, None);
        assert_eq!(profile.skills[0].items, vec!["spaCy", "BERTopic"]);
        assert_eq!(profile.contact.email.as_deref(), Some("someone@example.com"));
        assert!(profile.certifications.is_empty());
    }

    #[test]
    fn renders_about_body() {
        let profile = Profile::parse(HOME).unwrap();

        assert!(profile.about_html.contains("<em>historical</em>"));
    }

    #[test]
    fn requires_frontmatter() {
        let err = Profile::parse("# Hello").unwrap_err();

        assert!(matches!(err, ProfileError::MissingFrontmatter));
    }

    #[test]
    fn rejects_blank_name() {
        let err = Profile::parse("---\nname: ''\nheadline: Engineer\n---\n").unwrap_err();

        assert!(matches!(err, ProfileError::EmptyField("name")));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = Profile::parse("---\nname: A\nheadline: B\nhobbies: []\n---\n").unwrap_err();

        assert!(matches!(err, ProfileError::Frontmatter(_)));
    }

    #[test]
    fn normalizes_profile_links() {
        let profile = Profile::parse(
            "---
name: A
headline: B
publications:
  - title: Preprint
    url: https://arxiv.org/abs/2508.19099
  - title: Essay
    url: Self-Help.pdf
certifications:
  - title: Hugging Face
    image: https://cdn.example.com/cert.webp
  - title: Local
    image: /image.webp
  - title: Pending
    image: '#'
education:
  - degree: MSc
    school: York
    dates: 2022 - 2023
    logoUrl: york.png
contact:
  github: '#'
---
",
        )
        .unwrap();

        assert_eq!(profile.publications[0].url, "https://arxiv.org/abs/2508.19099");
        assert_eq!(profile.publications[1].url, "/Self-Help.pdf");
        assert_eq!(
            profile.certifications[0].image.as_deref(),
            Some("https://cdn.example.com/cert.webp")
        );
        assert_eq!(profile.certifications[1].image.as_deref(), Some("/image.webp"));
        assert_eq!(profile.certifications[2].image, None);
        assert_eq!(profile.education[0].logo_url.as_deref(), Some("/york.png"));
        assert_eq!(profile.contact.github, None);
    }

    #[test]
    fn rejects_unsupported_link_schemes() {
        let err = Profile::parse(
            "---\nname: A\nheadline: B\npublications:\n  - title: X\n    url: 'javascript:alert(1)'\n---\n",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ProfileError::InvalidLink { field: "publications.url", .. }
        ));
    }

    #[test]
    fn publication_needs_a_real_link() {
        let err = Profile::parse(
            "---\nname: A\nheadline: B\npublications:\n  - title: X\n    url: '#'\n---\n",
        )
        .unwrap_err();

        assert!(matches!(err, ProfileError::InvalidLink { .. }));
    }
}
