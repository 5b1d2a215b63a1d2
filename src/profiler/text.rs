// * Text Normalizer: plain-text rendering of raw HTML.
// * Regex-based by design; malformed markup degrades to whatever text
// * survives tag stripping instead of failing.

use regex::Regex;
use std::sync::LazyLock;

// * Block-level elements whose contents never count as page text
static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap());
static RE_NOSCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<noscript\b[^>]*>.*?</noscript>").unwrap());

// * Chrome blocks stripped from the content view only
static RE_NAV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<nav\b[^>]*>.*?</nav>").unwrap());
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<header\b[^>]*>.*?</header>").unwrap());
static RE_FOOTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<footer\b[^>]*>.*?</footer>").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// * Full visible text: scripts and styles removed, tags stripped.
pub fn visible_text(html: &str) -> String {
    let stripped = strip_hidden_blocks(html);
    finish(&stripped)
}

// * Content view used by the text analyzers: additionally drops
// * navigation, header, and footer blocks before tag stripping.
pub fn content_text(html: &str) -> String {
    let stripped = strip_hidden_blocks(html);
    let stripped = RE_NAV.replace_all(&stripped, " ");
    let stripped = RE_HEADER.replace_all(&stripped, " ");
    let stripped = RE_FOOTER.replace_all(&stripped, " ");
    finish(&stripped)
}

fn strip_hidden_blocks(html: &str) -> String {
    let stripped = RE_SCRIPT.replace_all(html, " ");
    let stripped = RE_STYLE.replace_all(&stripped, " ");
    RE_NOSCRIPT.replace_all(&stripped, " ").into_owned()
}

fn finish(fragment: &str) -> String {
    let text = RE_TAG.replace_all(fragment, " ");
    let text = decode_entities(&text);
    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

// * Decodes the four named entities common enough to skew word statistics.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        let html = "<div>\n  <p>Hello   <b>world</b></p>\n</div>";
        assert_eq!(visible_text(html), "Hello world");
    }

    #[test]
    fn test_script_and_style_removed() {
        let html = "<script>var x = 1;</script><style>.a{color:red}</style><p>Kept</p>";
        assert_eq!(visible_text(html), "Kept");
    }

    #[test]
    fn test_content_text_drops_chrome_blocks() {
        let html = "<nav><a href='/'>Home</a></nav><main><p>Body copy</p></main><footer>Legal</footer>";
        let text = content_text(html);
        assert_eq!(text, "Body copy");
        // * The visible view keeps navigation and footer text
        assert!(visible_text(html).contains("Home"));
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<p>Fish&nbsp;&amp;&nbsp;Chips &lt;fresh&gt;</p>";
        assert_eq!(visible_text(html), "Fish & Chips <fresh>");
    }

    #[test]
    fn test_malformed_html_degrades_gracefully() {
        let html = "<div><p>Unclosed tags <b>still yield text";
        assert_eq!(visible_text(html), "Unclosed tags still yield text");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(visible_text(""), "");
        assert_eq!(content_text(""), "");
    }
}
