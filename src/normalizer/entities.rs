use std::borrow::Cow;

/// Turn HTML-escaped text back into literal characters.
///
/// Uses `html-escape`'s full entity table, so named, decimal and hex
/// references all decode. Absent input decodes to an empty string.
pub fn decode_html_entities(text: Option<&str>) -> String {
    match text {
        Some(text) => match html_escape::decode_html_entities(text) {
            Cow::Borrowed(plain) => plain.to_string(),
            Cow::Owned(decoded) => decoded,
        },
        None => String::new(),
    }
}

/// Drop anything between `<` and `>`, leaving the text nodes.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Tags separate words: "<p>a</p><p>b</p>" is two words.
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_common_entities() {
        assert_eq!(
            decode_html_entities(Some("&amp;&lt;&gt;&quot;&#39;")),
            "&<>\"'"
        );
    }

    #[test]
    fn test_decodes_named_and_hex_entities() {
        assert_eq!(decode_html_entities(Some("caf&eacute; &#x2014; ok")), "café — ok");
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(decode_html_entities(None), "");
    }

    #[test]
    fn test_plain_text_unchanged_and_idempotent() {
        let plain = "Rust & friends? No entities here.";
        let once = decode_html_entities(Some(plain));
        assert_eq!(once, plain);
        assert_eq!(decode_html_entities(Some(&once)), once);
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<p>Hello <b>world</b></p><p>again</p>")
                .split_whitespace()
                .collect::<Vec<_>>(),
            vec!["Hello", "world", "again"]
        );
    }

    #[test]
    fn test_strip_tags_keeps_stray_gt() {
        assert_eq!(strip_tags("a > b"), "a > b");
    }
}
