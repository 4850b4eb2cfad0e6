//! Minimal `{name}` placeholder templating
//!
//! Only the keys handed in are substituted; every other brace in the
//! template (CSS rules, say) passes through untouched.

pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::fill;

    #[test]
    fn test_known_keys_are_replaced() {
        let out = fill(
            "<title>{page_title}</title>",
            &[("page_title", "Home".to_string())],
        );
        assert_eq!(out, "<title>Home</title>");
    }

    #[test]
    fn test_css_braces_survive() {
        let tmpl = "body { color: {color_accent}; margin: 0; }";
        let out = fill(tmpl, &[("color_accent", "#0066cc".to_string())]);
        assert_eq!(out, "body { color: #0066cc; margin: 0; }");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        let out = fill("{known} {unknown}", &[("known", "x".to_string())]);
        assert_eq!(out, "x {unknown}");
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = fill("{base_url}/a {base_url}/b", &[("base_url", "https://s".to_string())]);
        assert_eq!(out, "https://s/a https://s/b");
    }
}
