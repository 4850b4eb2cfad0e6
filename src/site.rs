//! Whole-site assembly: post pages, index, categories, about, feed,
//! sitemap
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{Datelike, Utc};
use tracing::info;

use crate::config::{SiteConfig, Soul};
use crate::error::Error;
use crate::post::{self, Post};
use crate::slug::slugify;
use crate::{feed, sitemap, template};

/// Build the whole static site under `root`. Expects `config/`,
/// `templates/` and `content/posts/` there; writes the generated pages
/// next to them.
pub fn build_site(root: &Path) -> Result<(), Error> {
    let config = SiteConfig::load(&root.join("config").join("persona.json"))?;
    let tmpl = fs::read_to_string(root.join("templates").join("base.html"))?;
    let soul = Soul::load(&root.join("config").join("soul.json"));
    let posts = post::load_posts(&root.join("content").join("posts"))?;
    info!(root = %root.display(), posts = posts.len(), "building site");

    fs::create_dir_all(root.join("posts"))?;
    fs::create_dir_all(root.join("category"))?;

    for post in &posts {
        let content = format!(
            r#"<article>
    <div class="post-header">
        <h1>{title}</h1>
        <div class="post-meta">{date} &middot; {category}</div>
    </div>
    <div class="post-content">
        {body}
    </div>
</article>"#,
            title = post.title,
            date = post.date,
            category = post.category,
            body = post.html,
        );
        let page = render_page(&tmpl, &config, &post.title, &content, &post.excerpt);
        fs::write(root.join("posts").join(format!("{}.html", post.slug)), page)?;
    }
    info!(count = posts.len(), "built post pages");

    let homepage = render_page(
        &tmpl,
        &config,
        "Home",
        &post_list_html(&posts, &config.base_url),
        "",
    );
    fs::write(root.join("index.html"), homepage)?;

    let mut by_category: BTreeMap<&str, Vec<&Post>> = BTreeMap::new();
    for post in &posts {
        if !post.category.is_empty() {
            by_category.entry(&post.category).or_default().push(post);
        }
    }
    for (name, group) in &by_category {
        let listed: Vec<Post> = group.iter().map(|p| (*p).clone()).collect();
        let content = format!(
            "<h1 class=\"category-title\">{}</h1>\n{}",
            name,
            post_list_html(&listed, &config.base_url)
        );
        let page = render_page(&tmpl, &config, name, &content, "");
        fs::write(
            root.join("category").join(format!("{}.html", slugify(name))),
            page,
        )?;
    }
    info!(count = by_category.len(), "built category pages");

    let about = render_page(
        &tmpl,
        &config,
        "About",
        &about_html(&config, &soul),
        &format!("About {}", config.site_name),
    );
    fs::write(root.join("about.html"), about)?;

    fs::write(root.join("feed.xml"), feed::rss(&posts, &config))?;
    fs::write(root.join("sitemap.xml"), sitemap::xml(&posts, &config))?;
    fs::write(root.join(".nojekyll"), "")?;

    info!("build complete");
    Ok(())
}

/// Fill the base template for one page: navigation, footer, palette
/// slots, and the page content itself
fn render_page(
    tmpl: &str,
    config: &SiteConfig,
    page_title: &str,
    content: &str,
    meta_description: &str,
) -> String {
    let base_url = &config.base_url;

    let mut nav = vec![format!("<a href=\"{base_url}/\">home</a>")];
    for category in &config.categories {
        nav.push(format!(
            "<a href=\"{base_url}/category/{}.html\">{}</a>",
            slugify(category),
            category.to_lowercase()
        ));
    }
    nav.push(format!("<a href=\"{base_url}/about.html\">about</a>"));

    let mut footer_lines = Vec::new();
    if !config.footer_icon.is_empty() {
        footer_lines.push(format!(
            "<img src=\"{base_url}/{}\" alt=\"{}\" class=\"footer-icon\"><br>",
            config.footer_icon, config.author_name
        ));
    }
    let mut footer_parts = vec![format!(
        "&copy; {} {}",
        Utc::now().year(),
        config.display_author()
    )];
    if !config.blogroll.is_empty() {
        let links: Vec<String> = config
            .blogroll
            .iter()
            .map(|entry| format!("<a href=\"{}\">{}</a>", entry.url, entry.name))
            .collect();
        footer_parts.push(format!("Friends: {}", links.join(" &middot; ")));
    }
    footer_parts.push(format!("<a href=\"{base_url}/feed.xml\">RSS</a>"));
    footer_lines.push(footer_parts.join(" &middot; "));

    let meta_description = if meta_description.is_empty() {
        config.tagline.clone()
    } else {
        meta_description.to_string()
    };

    template::fill(
        tmpl,
        &[
            ("page_title", page_title.to_string()),
            ("site_name", config.site_name.clone()),
            ("tagline", config.tagline.clone()),
            ("meta_description", meta_description),
            ("base_url", base_url.clone()),
            ("nav_links", nav.join("\n")),
            ("content", content.to_string()),
            ("footer_content", footer_lines.join("\n")),
            ("color_bg_primary", config.color("bg_primary", "#ffffff")),
            ("color_bg_secondary", config.color("bg_secondary", "#f5f5f5")),
            ("color_text_primary", config.color("text_primary", "#222222")),
            (
                "color_text_secondary",
                config.color("text_secondary", "#666666"),
            ),
            ("color_accent", config.color("accent", "#0066cc")),
            ("color_accent_hover", config.color("accent_hover", "#004499")),
            ("color_border", config.color("border", "#e0e0e0")),
            ("color_code_bg", config.color("code_bg", "#f0f0f0")),
            ("font_body", config.font("body", "Georgia, serif")),
            ("font_heading", config.font("heading", "Georgia, serif")),
        ],
    )
}

/// The post list used by the homepage and category pages
fn post_list_html(posts: &[Post], base_url: &str) -> String {
    if posts.is_empty() {
        return "<p>No posts yet. Check back soon!</p>".to_string();
    }
    let items: Vec<String> = posts
        .iter()
        .map(|post| {
            let category_html = if post.category.is_empty() {
                String::new()
            } else {
                format!(
                    "<span class=\"post-category\"><a href=\"{base_url}/category/{}.html\">{}</a></span>",
                    slugify(&post.category),
                    post.category
                )
            };
            format!(
                r#"<li class="post-item">
    <div class="post-date">{date}{category}</div>
    <h2 class="post-title"><a href="{base_url}/posts/{slug}.html">{title}</a></h2>
    <p class="post-excerpt">{excerpt}</p>
</li>"#,
                date = post.date,
                category = category_html,
                slug = post.slug,
                title = post.title,
                excerpt = post.excerpt,
            )
        })
        .collect();
    format!(
        "<ul class=\"post-list\">\n{}\n</ul>",
        items.join("\n")
    )
}

/// About page content: configured text and portrait, then the soul
/// file's interests and opinions, then the blogroll
fn about_html(config: &SiteConfig, soul: &Soul) -> String {
    let base_url = &config.base_url;
    let mut parts = vec!["<div class=\"about-content\">".to_string()];

    if !config.about_portrait.is_empty() {
        parts.push(format!(
            "<img src=\"{base_url}/{}\" alt=\"{}\" class=\"about-portrait\">",
            config.about_portrait, config.author_name
        ));
    }
    for paragraph in config
        .about_text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
    {
        parts.push(format!("<p>{}</p>", paragraph.trim()));
    }

    if !soul.current_interests.is_empty() {
        parts.push("<h2>What I'm Exploring Lately</h2>".to_string());
        parts.push("<ul>".to_string());
        for interest in &soul.current_interests {
            parts.push(format!("<li>{interest}</li>"));
        }
        parts.push("</ul>".to_string());
    }

    if !soul.developing_opinions.is_empty() {
        parts.push("<h2>Developing Thoughts</h2>".to_string());
        parts.push("<ul>".to_string());
        for opinion in &soul.developing_opinions {
            parts.push(format!(
                "<li><strong>{}</strong>: {}</li>",
                opinion.topic, opinion.stance
            ));
        }
        parts.push("</ul>".to_string());
    }

    if !config.blogroll.is_empty() {
        parts.push("<h2>Friends &amp; Neighbors</h2>".to_string());
        parts.push("<ul>".to_string());
        for entry in &config.blogroll {
            parts.push(format!(
                "<li><a href=\"{}\">{}</a> &mdash; {}</li>",
                entry.url, entry.name, entry.description
            ));
        }
        parts.push("</ul>".to_string());
    }

    parts.push("</div>".to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_post_list_message() {
        assert_eq!(
            post_list_html(&[], ""),
            "<p>No posts yet. Check back soon!</p>"
        );
    }

    #[test]
    fn test_about_html_sections() {
        let config = SiteConfig {
            about_text: "First paragraph.\n\nSecond paragraph.".to_string(),
            ..Default::default()
        };
        let soul = Soul {
            current_interests: vec!["tide pools".to_string()],
            ..Default::default()
        };
        let html = about_html(&config, &soul);
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
        assert!(html.contains("What I'm Exploring Lately"));
        assert!(html.contains("<li>tide pools</li>"));
        // No soul opinions, no section for them
        assert!(!html.contains("Developing Thoughts"));
    }
}
