//! Project records and their load-time validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Value authors use in place of a link that does not exist yet.
pub(crate) const PLACEHOLDER_URL: &str = "#";

/// A single project in the catalog.
///
/// Records are only constructed from a [`RawRecord`] that passed validation,
/// so optional links are either absent or point somewhere real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Unique lookup key (`debate-simulator`)
    pub slug: String,

    /// Display name
    pub title: String,

    /// One-line summary shown under the title
    pub tagline: Option<String>,

    /// Free-text description
    pub description: String,

    /// Skill tags in authored order, duplicates kept
    pub skills: Vec<String>,

    /// Interactive demonstration
    pub demo_url: Option<String>,

    /// Source repository
    pub github_url: Option<String>,
}

/// A record as authored in `projects.json`, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "link")]
    pub demo_url: Option<String>,
    #[serde(default, alias = "github")]
    pub github_url: Option<String>,
}

/// Reasons a raw record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid slug {0:?}: expected lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("Project {0:?} has an empty title")]
    EmptyTitle(String),

    #[error("Project {slug:?} has an invalid {field}: {url:?}")]
    InvalidUrl {
        slug: String,
        field: &'static str,
        url: String,
    },
}

impl TryFrom<RawRecord> for ProjectRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        if !is_valid_slug(&raw.slug) {
            return Err(RecordError::InvalidSlug(raw.slug));
        }

        let title = raw.title.trim().to_string();
        if title.is_empty() {
            return Err(RecordError::EmptyTitle(raw.slug));
        }

        let demo_url = normalize_url(&raw.slug, "demoUrl", raw.demo_url)?;
        let github_url = normalize_url(&raw.slug, "githubUrl", raw.github_url)?;

        let tagline = raw
            .tagline
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            slug: raw.slug,
            title,
            tagline,
            description: raw.description.trim().to_string(),
            skills: raw.skills,
            demo_url,
            github_url,
        })
    }
}

/// Check a slug against `lowercase-words-with-hyphens`.
pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"))
        .is_match(slug)
}

/// Map blank and placeholder links to `None`; reject anything that is not
/// an absolute http(s) URL or a site-relative path.
fn normalize_url(
    slug: &str,
    field: &'static str,
    url: Option<String>,
) -> Result<Option<String>, RecordError> {
    let Some(url) = url else {
        return Ok(None);
    };

    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_URL {
        return Ok(None);
    }

    if trimmed.starts_with("https://") || trimmed.starts_with("http://") || trimmed.starts_with('/')
    {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(RecordError::InvalidUrl {
            slug: slug.to_string(),
            field,
            url: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(slug: &str) -> RawRecord {
        RawRecord {
            slug: slug.to_string(),
            title: "OCR Accuracy Evaluation".to_string(),
            tagline: None,
            description: "Benchmarked WER and CER across OCR engines.".to_string(),
            skills: vec!["EasyOCR".to_string(), "Tesseract".to_string()],
            demo_url: None,
            github_url: None,
        }
    }

    #[test]
    fn accepts_minimal_record() {
        let record = ProjectRecord::try_from(raw("ocr-evaluation")).unwrap();

        assert_eq!(record.slug, "ocr-evaluation");
        assert!(record.demo_url.is_none());
        assert!(record.github_url.is_none());
    }

    #[test]
    fn placeholder_links_become_absent() {
        let mut input = raw("bible-searcher");
        input.demo_url = Some("  ".to_string());
        input.github_url = Some("#".to_string());

        let record = ProjectRecord::try_from(input).unwrap();

        assert_eq!(record.demo_url, None);
        assert_eq!(record.github_url, None);
    }

    #[test]
    fn keeps_real_links() {
        let mut input = raw("debate-simulator");
        input.demo_url = Some("https://huggingface.co/spaces/x/y".to_string());
        input.github_url = Some("https://github.com/x/y".to_string());

        let record = ProjectRecord::try_from(input).unwrap();

        assert_eq!(
            record.demo_url.as_deref(),
            Some("https://huggingface.co/spaces/x/y")
        );
        assert_eq!(record.github_url.as_deref(), Some("https://github.com/x/y"));
    }

    #[test]
    fn rejects_relative_garbage_links() {
        let mut input = raw("pdf-to-speech");
        input.github_url = Some("github.com/x/y".to_string());

        let err = ProjectRecord::try_from(input).unwrap_err();

        assert!(matches!(err, RecordError::InvalidUrl { field: "githubUrl", .. }));
    }

    #[test]
    fn rejects_bad_slugs() {
        for slug in ["", "Has Caps", "double--hyphen", "-leading", "trailing-", "a/b"] {
            let err = ProjectRecord::try_from(raw(slug)).unwrap_err();
            assert_eq!(err, RecordError::InvalidSlug(slug.to_string()));
        }
    }

    #[test]
    fn rejects_blank_title() {
        let mut input = raw("hansard-ocr-dataset");
        input.title = "   ".to_string();

        let err = ProjectRecord::try_from(input).unwrap_err();

        assert_eq!(err, RecordError::EmptyTitle("hansard-ocr-dataset".to_string()));
    }

    #[test]
    fn drops_blank_tagline_and_keeps_duplicate_skills() {
        let mut input = raw("literature-review-tools");
        input.tagline = Some(" ".to_string());
        input.skills = vec!["RAG".to_string(), "FAISS".to_string(), "RAG".to_string()];

        let record = ProjectRecord::try_from(input).unwrap();

        assert_eq!(record.tagline, None);
        assert_eq!(record.skills, vec!["RAG", "FAISS", "RAG"]);
    }
}
