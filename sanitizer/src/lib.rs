use std::collections::{HashMap, HashSet};

use ammonia::Builder;
use anyhow::Result;
use regex_lite::Regex;

const ALLOWED_TAGS: [&str; 19] = [
    "p", "b", "i", "u", "em", "strong", "a", "ul", "ol", "li", "br", "h1", "h2", "h3",
    "blockquote", "code", "pre", "div", "span",
];
const GENERIC_ATTRIBUTES: [&str; 2] = ["class", "style"];
const LINK_ATTRIBUTES: [&str; 3] = ["href", "title", "target"];
const IMAGE_ATTRIBUTES: [&str; 4] = ["src", "alt", "width", "height"];

/// HTML allowlist cleaning for project descriptions.
pub struct Sanitizer {
    builder: Builder<'static>,
    tag_pattern: Regex,
    line_break_pattern: Regex,
}

impl Sanitizer {
    pub fn new() -> Result<Self> {
        pf_log::info(Some("⚡"), "[Sanitizer] Initializing component");

        let mut builder = Builder::default();
        builder
            .tags(HashSet::from(ALLOWED_TAGS))
            .generic_attributes(HashSet::from(GENERIC_ATTRIBUTES))
            .tag_attributes(HashMap::from([
                ("a", HashSet::from_iter(LINK_ATTRIBUTES)),
                ("img", HashSet::from_iter(IMAGE_ATTRIBUTES)),
            ]))
            .strip_comments(false);

        Ok(Self {
            builder,
            tag_pattern: Regex::new(r"<[^<]+?>")?,
            line_break_pattern: Regex::new(r"(?i)<br\s*/?\s*>")?,
        })
    }

    /// Parses `raw` as an HTML fragment and serializes back only allowed
    /// tags and attributes. Comments survive; script and style content
    /// does not.
    pub fn clean(&self, raw: &str) -> String {
        self.builder.clean(raw).to_string()
    }

    /// Number of visible characters: tags removed, entities decoded, outer
    /// whitespace trimmed.
    pub fn text_length(&self, html: &str) -> usize {
        if html.is_empty() {
            return 0;
        }
        let text = self.tag_pattern.replace_all(html, "");
        html_escape::decode_html_entities(&text)
            .trim()
            .chars()
            .count()
    }

    /// Turns stored markup back into the plain text shown in the editor.
    pub fn markup_to_newlines(&self, html: &str) -> String {
        let html = html.replace("<br>\r\n", "<br>").replace("<br>\n", "<br>");
        self.line_break_pattern.replace_all(&html, "\n").into_owned()
    }
}

/// Makes typed line breaks survive cleaning as `<br>` elements.
pub fn newlines_to_markup(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new().unwrap()
    }

    #[test]
    fn strips_disallowed_markup() {
        let s = sanitizer();
        assert_eq!(
            s.clean("<p onclick=\"steal()\">hi<script>alert(1)</script><img src=\"x.png\"></p>"),
            "<p>hi</p>"
        );
        assert_eq!(s.clean("<table><tr><td>cell</td></tr></table>"), "cell");
    }

    #[test]
    fn keeps_allowed_attributes() {
        let s = sanitizer();
        let link = s.clean("<a href=\"https://x.io\" target=\"_blank\" onclick=\"y()\">x</a>");
        assert!(link.contains("href=\"https://x.io\""));
        assert!(link.contains("target=\"_blank\""));
        assert!(!link.contains("onclick"));

        let span = s.clean("<span class=\"c\" style=\"color: red\" id=\"z\">x</span>");
        assert!(span.contains("class=\"c\""));
        assert!(span.contains("style=\"color: red\""));
        assert!(!span.contains("id="));
    }

    #[test]
    fn keeps_comments() {
        assert_eq!(
            sanitizer().clean("<!-- note --><b>x</b>"),
            "<!-- note --><b>x</b>"
        );
    }

    #[test]
    fn repairs_malformed_input() {
        let s = sanitizer();
        assert_eq!(s.clean("<p><b>open"), "<p><b>open</b></p>");
        assert_eq!(s.clean("a < b"), "a &lt; b");
        assert_eq!(s.clean(""), "");
    }

    #[test]
    fn clean_is_idempotent() {
        let s = sanitizer();
        for input in [
            "<p>hi</p>",
            "<a href=\"https://x.io\" target=\"_blank\">x</a>",
            "<p><b>open<i>nested",
            "x<br>y<br/>z<BR />",
            "<!-- c --><div class=\"a\"><script>bad()</script>ok &amp; fine</div>",
            "<h1>t</h1><blockquote>q</blockquote><pre><code>fn main() {}</code></pre>",
            "5 > 3 && 2 < 4",
        ] {
            let once = s.clean(input);
            assert_eq!(s.clean(&once), once, "input: {input}");
        }
    }

    #[test]
    fn counts_visible_characters() {
        let s = sanitizer();
        assert_eq!(s.text_length(&s.clean("<p>hi</p>")), 2);
        assert_eq!(s.text_length(&s.clean("  <b>a</b>&amp;<br>b  ")), 3);
        assert_eq!(s.text_length(&s.clean("caf&eacute;")), 4);
        assert_eq!(s.text_length(""), 0);
        assert_eq!(s.text_length(&s.clean(&"a".repeat(100))), 100);
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(newlines_to_markup("a\nb\r\nc"), "a<br>b<br>c");
        assert_eq!(newlines_to_markup("no breaks"), "no breaks");
    }

    #[test]
    fn line_breaks_become_newlines() {
        let s = sanitizer();
        assert_eq!(
            s.markup_to_newlines("a<br/>b<BR />c<br >d<br>\ne<br>\r\nf"),
            "a\nb\nc\nd\ne\nf"
        );
    }

    #[test]
    fn newline_round_trip() {
        let s = sanitizer();
        for typed in ["line one\nline two\n\nline four", "trailing\n", "single"] {
            let stored = s.clean(&newlines_to_markup(typed));
            assert_eq!(s.markup_to_newlines(&stored), typed);
        }
    }
}
