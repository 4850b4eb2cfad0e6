//! RSS 2.0 feed generation
use chrono::Utc;

use crate::config::SiteConfig;
use crate::post::Post;
use crate::renderer::escape_html;

/// The feed carries at most this many of the newest posts
const FEED_LIMIT: usize = 20;

/// Build the `feed.xml` document for the newest posts
pub fn rss(posts: &[Post], config: &SiteConfig) -> String {
    let base_url = &config.base_url;
    let items: Vec<String> = posts
        .iter()
        .take(FEED_LIMIT)
        .map(|post| {
            format!(
                r#"    <item>
      <title>{title}</title>
      <link>{base}/posts/{slug}.html</link>
      <guid>{base}/posts/{slug}.html</guid>
      <pubDate>{date}</pubDate>
      <category>{category}</category>
      <description>{description}</description>
    </item>"#,
                title = escape_html(&post.title),
                base = base_url,
                slug = post.slug,
                date = post.date,
                category = escape_html(&post.category),
                description = escape_html(&post.excerpt),
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>{title}</title>
    <link>{base}</link>
    <description>{description}</description>
    <atom:link href="{base}/feed.xml" rel="self" type="application/rss+xml"/>
    <language>en-us</language>
    <lastBuildDate>{build_date}</lastBuildDate>
{items}
  </channel>
</rss>"#,
        title = escape_html(&config.site_name),
        base = base_url,
        description = escape_html(&config.tagline),
        build_date = Utc::now().format("%a, %d %b %Y %H:%M:%S +0000"),
        items = items.join("\n"),
    )
}
