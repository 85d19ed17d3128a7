//! Frontmatter extraction.

use serde::de::DeserializeOwned;

/// Extract YAML frontmatter from a Markdown document.
///
/// Returns the parsed frontmatter and the remaining content after the frontmatter block.
pub fn extract_frontmatter<T: DeserializeOwned>(
    source: &str,
) -> Result<(Option<T>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: T = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Meta {
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn extracts_valid_frontmatter() {
        let source = "---\nname: Thomas\ntags: [nlp, ocr]\n---\n\nI build things.\n";

        let (meta, content) = extract_frontmatter::<Meta>(source).unwrap();
        let meta = meta.unwrap();

        assert_eq!(meta.name, "Thomas");
        assert_eq!(meta.tags, vec!["nlp", "ocr"]);
        assert_eq!(content, "I build things.\n");
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown";

        let (meta, content) = extract_frontmatter::<Meta>(source).unwrap();

        assert!(meta.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let result = extract_frontmatter::<Meta>("---\nname: Test\n# No closing");

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = extract_frontmatter::<Meta>("---\nname: [oops\n---\n");

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
