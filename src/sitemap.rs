//! Sitemap generation
use crate::config::SiteConfig;
use crate::post::Post;
use crate::slug::slugify;

/// Build the `sitemap.xml` document: home, about, every post, every
/// category page
pub fn xml(posts: &[Post], config: &SiteConfig) -> String {
    let base_url = &config.base_url;
    let mut urls = vec![
        format!("  <url><loc>{base_url}/</loc></url>"),
        format!("  <url><loc>{base_url}/about.html</loc></url>"),
    ];
    for post in posts {
        urls.push(format!(
            "  <url><loc>{base_url}/posts/{}.html</loc></url>",
            post.slug
        ));
    }
    for category in &config.categories {
        urls.push(format!(
            "  <url><loc>{base_url}/category/{}.html</loc></url>",
            slugify(category)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
        urls.join("\n")
    )
}
