//! Post loading and the content model
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::frontmatter;

/// One published post: frontmatter fields plus the rendered body
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub tags: String,
    pub html: String,
}

/// Load every `.md` file under `dir` as a post, newest first.
///
/// Files without a `title` in their frontmatter are skipped. A missing
/// directory is an empty site, not an error.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>, Error> {
    let mut posts = Vec::new();
    if !dir.exists() {
        return Ok(posts);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        let (meta, body) = frontmatter::extract(&text);

        let Some(title) = meta.get("title").filter(|t| !t.is_empty()) else {
            debug!(path = %path.display(), "skipping post without a title");
            continue;
        };
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        posts.push(Post {
            slug,
            title: title.clone(),
            date: meta.get("date").cloned().unwrap_or_default(),
            category: meta.get("category").cloned().unwrap_or_default(),
            excerpt: meta.get("excerpt").cloned().unwrap_or_default(),
            tags: meta.get("tags").cloned().unwrap_or_default(),
            html: crate::render(body),
        });
    }

    // Date strings are ISO-style, so plain string order is date order;
    // slug keeps equal dates stable across filesystems
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_empty() {
        let posts = load_posts(Path::new("/nonexistent/posts")).expect("load");
        assert!(posts.is_empty());
    }
}
