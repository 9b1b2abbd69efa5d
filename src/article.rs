//! Article files as handed over by the newsroom.
//!
//! An article either opens with a `+++` delimited TOML block carrying
//! `title` and `image_url`, or its first non-empty line is the title
//! (a leading markdown `#` is dropped) and the rest is the body.

use crate::error::{Result, SangbadError};
use crate::types::metrics::ContentInput;
use serde::Deserialize;
use std::path::Path;

const FRONT_MATTER_DELIMITER: &str = "+++";

pub const ARTICLE_EXTENSIONS: [&str; 2] = ["txt", "md"];

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    title: Option<String>,
    image_url: Option<String>,
}

/// Values supplied on the command line; they win over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub title: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

pub fn parse_article(text: &str, overrides: Overrides<'_>) -> Result<ContentInput> {
    let text = text.trim_start_matches('\u{feff}');

    let (front, body) = match split_front_matter(text)? {
        Some((raw, body)) => {
            let front: FrontMatter = toml::from_str(raw)
                .map_err(|e| SangbadError::ArticleParse(format!("front matter: {e}")))?;
            (front, body.to_string())
        }
        None if overrides.title.is_some() => (FrontMatter::default(), text.to_string()),
        None => {
            let (title, body) = split_title_line(text);
            (
                FrontMatter {
                    title,
                    image_url: None,
                },
                body.to_string(),
            )
        }
    };

    Ok(ContentInput {
        content: body.trim().to_string(),
        title: overrides
            .title
            .map(str::to_string)
            .or(front.title)
            .unwrap_or_default()
            .trim()
            .to_string(),
        image_url: overrides
            .image_url
            .map(str::to_string)
            .or(front.image_url)
            .unwrap_or_default()
            .trim()
            .to_string(),
    })
}

pub fn read_article(path: &Path, overrides: Overrides<'_>) -> Result<ContentInput> {
    if !path.exists() {
        return Err(SangbadError::PathNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_article(&text, overrides).map_err(|e| match e {
        SangbadError::ArticleParse(msg) => {
            SangbadError::ArticleParse(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn is_article_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ARTICLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn split_front_matter(text: &str) -> Result<Option<(&str, &str)>> {
    let mut lines = text.split_inclusive('\n');
    let first = match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_DELIMITER => first,
        _ => return Ok(None),
    };

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Ok(Some((&text[start..offset], &text[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(SangbadError::ArticleParse(
        "front matter is missing its closing +++".to_string(),
    ))
}

fn split_title_line(text: &str) -> (Option<String>, &str) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let title = trimmed.trim_start_matches('#').trim().to_string();
        return (Some(title), &text[offset..]);
    }
    (None, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn front_matter_supplies_title_and_image() {
        let text = "+++\ntitle = \"ঢাকায় বৃষ্টি\"\nimage_url = \"https://cdn.example/r.jpg\"\n+++\nআজ সারাদিন বৃষ্টি হবে।\n";
        let input = parse_article(text, Overrides::default()).expect("article should parse");
        assert_eq!(input.title, "ঢাকায় বৃষ্টি");
        assert_eq!(input.image_url, "https://cdn.example/r.jpg");
        assert_eq!(input.content, "আজ সারাদিন বৃষ্টি হবে।");
    }

    #[test]
    fn first_line_is_title_without_front_matter() {
        let text = "\n# বাজেট ঘোষণা\n\nসংসদে নতুন বাজেট পেশ।\n";
        let input = parse_article(text, Overrides::default()).expect("article should parse");
        assert_eq!(input.title, "বাজেট ঘোষণা");
        assert_eq!(input.content, "সংসদে নতুন বাজেট পেশ।");
        assert!(input.image_url.is_empty());
    }

    #[test]
    fn title_override_keeps_whole_text_as_content() {
        let text = "প্রথম লাইন।\nদ্বিতীয় লাইন।";
        let overrides = Overrides {
            title: Some("শিরোনাম"),
            image_url: Some("img.jpg"),
        };
        let input = parse_article(text, overrides).expect("article should parse");
        assert_eq!(input.title, "শিরোনাম");
        assert_eq!(input.content, text);
        assert_eq!(input.image_url, "img.jpg");
    }

    #[test]
    fn overrides_win_over_front_matter() {
        let text = "+++\ntitle = \"পুরনো\"\n+++\nলেখা";
        let overrides = Overrides {
            title: Some("নতুন"),
            image_url: None,
        };
        let input = parse_article(text, overrides).expect("article should parse");
        assert_eq!(input.title, "নতুন");
        assert_eq!(input.content, "লেখা");
    }

    #[test]
    fn empty_article_is_empty_input() {
        let input = parse_article("", Overrides::default()).expect("empty should parse");
        assert_eq!(input, ContentInput::default());
    }

    #[test]
    fn unclosed_front_matter_is_rejected() {
        let err = parse_article("+++\ntitle = \"x\"\nbody", Overrides::default())
            .expect_err("unclosed front matter should fail");
        assert!(err.to_string().contains("closing +++"));
    }

    #[test]
    fn invalid_front_matter_is_rejected() {
        let err = parse_article("+++\ntitle = \n+++\nbody", Overrides::default())
            .expect_err("bad toml should fail");
        assert!(err.to_string().contains("front matter"));
    }

    #[test]
    fn read_article_reports_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = read_article(&dir.path().join("missing.md"), Overrides::default())
            .expect_err("missing file should fail");
        assert!(matches!(err, SangbadError::PathNotFound(_)));

        let path = dir.path().join("a.md");
        fs::write(&path, "শিরোনাম\nলেখা").expect("article should write");
        let input = read_article(&path, Overrides::default()).expect("article should read");
        assert_eq!(input.title, "শিরোনাম");
    }

    #[test]
    fn article_extensions_are_case_insensitive() {
        assert!(is_article_file(Path::new("news/a.MD")));
        assert!(is_article_file(Path::new("news/b.txt")));
        assert!(!is_article_file(Path::new("news/c.json")));
        assert!(!is_article_file(Path::new("news/README")));
    }
}
