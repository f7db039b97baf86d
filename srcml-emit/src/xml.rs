//! Markup fragment construction
//!
//! Centralizes all tag formation so that fragments are balanced by
//! construction: `element` derives the closing tag from the first
//! whitespace-delimited token of the opening spec (attributes are never
//! repeated in the closing tag), `append` only concatenates fragments
//! that are themselves balanced, and `join` interposes separators
//! between parts so no caller ever trims a trailing separator off the
//! accumulated text.
//!
//! Escaping is the caller's responsibility: `element` and `text` embed
//! their input verbatim, and producers of literal text apply `escape`
//! exactly once before handing it over. `text` rejects raw angle
//! brackets in debug builds to catch a missed escape early.
//!
//! ## Example
//!
//! ```text
//! element("literal type=\"string\"", text("\"hi\""))
//!     => <literal type="string">"hi"</literal>
//! ```

use std::fmt;

/// Escapes `&`, `<`, `>` in literal text
///
/// Applied once per literal by the producer; applying it twice
/// double-escapes, so the formatter itself never calls it.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A well-formed sequence of nested tagged elements, as text
///
/// The construction API keeps the balance invariant: every opening tag
/// produced here carries its matching closing tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// The empty fragment
    pub fn new() -> Self {
        Fragment(String::new())
    }

    /// Literal text content; must already be escaped
    pub fn text(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        debug_assert!(
            !s.contains('<') && !s.contains('>'),
            "literal text must be escaped before embedding: {:?}",
            s
        );
        Fragment(s.to_string())
    }

    /// `<spec>body</name>` where `name` is the first token of `spec`
    pub fn element(spec: &str, body: Fragment) -> Self {
        Fragment(format!("<{}>{}</{}>", spec, body.0, tag_name(spec)))
    }

    /// Self-closing `<spec/>` element
    pub fn empty_element(spec: &str) -> Self {
        Fragment(format!("<{}/>", spec))
    }

    /// Appends another fragment after this one
    pub fn append(&mut self, other: Fragment) {
        self.0.push_str(&other.0);
    }

    /// Concatenates `parts` with `sep` between consecutive parts; the
    /// first part never receives a leading separator and the last never a
    /// trailing one
    pub fn join(parts: impl IntoIterator<Item = Fragment>, sep: &Fragment) -> Fragment {
        let mut out = Fragment::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.append(sep.clone());
            }
            out.append(part);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this fragment already opens with `<tag>`
    pub fn starts_with_element(&self, tag: &str) -> bool {
        self.0.starts_with(&format!("<{}>", tag))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Forms one element per `(tag-spec, body)` pair and concatenates them in
/// order; a `None` tag-spec skips its pair, which is how optional clauses
/// are conditionally omitted
pub fn form<'a>(pairs: impl IntoIterator<Item = (Option<&'a str>, Fragment)>) -> Fragment {
    let mut out = Fragment::new();
    for (spec, body) in pairs {
        if let Some(spec) = spec {
            out.append(Fragment::element(spec, body));
        }
    }
    out
}

/// First whitespace-delimited token of a tag spec, i.e. the tag name
fn tag_name(spec: &str) -> &str {
    spec.split_whitespace().next().unwrap_or(spec)
}

/// Checks that every opening tag in `s` has a matching closing tag with
/// proper nesting; self-closing elements and comments are skipped
///
/// This is a diagnostic for tests and debugging, not a validator the
/// emitter depends on: fragments are balanced by construction.
pub fn is_balanced(s: &str) -> bool {
    let mut stack: Vec<String> = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find('<') {
        rest = &rest[start..];
        if let Some(comment) = rest.strip_prefix("<!--") {
            match comment.find("-->") {
                Some(end) => rest = &comment[end + 3..],
                None => return false,
            }
            continue;
        }
        let end = match rest.find('>') {
            Some(end) => end,
            None => return false,
        };
        let inner = &rest[1..end];
        rest = &rest[end + 1..];
        if let Some(close) = inner.strip_prefix('/') {
            if stack.pop().as_deref() != Some(close) {
                return false;
            }
        } else if !inner.ends_with('/') {
            stack.push(tag_name(inner).to_string());
        }
    }
    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_closes_with_the_first_token_of_the_spec() {
        let frag = Fragment::element("literal type=\"string\"", Fragment::text("\"hi\""));
        assert_eq!(frag.as_str(), "<literal type=\"string\">\"hi\"</literal>");
    }

    #[test]
    fn form_skips_pairs_with_no_tag() {
        let frag = form([
            (Some("name"), Fragment::text("x")),
            (None, Fragment::text("dropped")),
            (Some("name"), Fragment::text("y")),
        ]);
        assert_eq!(frag.as_str(), "<name>x</name><name>y</name>");
    }

    #[test]
    fn join_never_produces_a_leading_or_trailing_separator() {
        let sep = Fragment::element("operator", Fragment::text(","));
        let parts = vec![Fragment::text("a"), Fragment::text("b")];
        let joined = Fragment::join(parts, &sep);
        assert_eq!(joined.as_str(), "a<operator>,</operator>b");
        assert_eq!(Fragment::join(Vec::new(), &sep).as_str(), "");
    }

    #[test]
    fn escape_rewrites_reserved_characters_once() {
        assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        // A second pass double-escapes; callers must apply it exactly once.
        assert_eq!(escape(&escape("<")), "&amp;lt;");
    }

    #[test]
    fn balance_checker_accepts_nesting_and_rejects_mismatches() {
        assert!(is_balanced("<a><b>text</b></a>"));
        assert!(is_balanced("<decl><type ref=\"prev\"/><name>y</name></decl>"));
        assert!(is_balanced("<unit>x</unit> <!-- path.py -->"));
        assert!(!is_balanced("<a><b></a></b>"));
        assert!(!is_balanced("<a>"));
    }
}
