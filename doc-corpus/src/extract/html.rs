//! HTML page → plain text.
//!
//! `<script>` and `<style>` elements are removed with their content, comments
//! are dropped, every other tag becomes a space, and whitespace runs collapse
//! to a single space.

use std::sync::OnceLock;

use regex::Regex;

fn hidden_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->")
            .expect("valid hidden-block regex")
    })
}

fn tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Extracts visible text from an HTML document.
pub fn extract_text(html: &str) -> String {
    let without_hidden = hidden_blocks().replace_all(html, " ");
    let without_tags = tags().replace_all(&without_hidden, " ");
    whitespace()
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_and_collapses_whitespace() {
        let html = "<html><script>x()</script><p>Hello  world</p></html>";
        assert_eq!(extract_text(html), "Hello world");
    }

    #[test]
    fn drops_style_attributes_and_comments() {
        let html = r#"<!DOCTYPE html>
<html>
  <head>
    <style type="text/css">.hidden { display: none; }</style>
    <SCRIPT src="js/ageSlider.js"></SCRIPT>
  </head>
  <body class="bg-white">
    <!-- nav -->
    <h1>Stage 1</h1><p>Cancer is <b>confined</b>
       to the prostate.</p>
  </body>
</html>"#;
        assert_eq!(
            extract_text(html),
            "Stage 1 Cancer is confined to the prostate."
        );
    }

    #[test]
    fn empty_and_tag_only_pages_yield_empty_text() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("<div><span></span></div>"), "");
    }
}
