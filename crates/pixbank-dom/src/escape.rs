//! HTML escaping for text and attribute values.

/// Escape a text node for element content: `&`, `<`, `>`.
pub fn escape_text(input: &str) -> String {
    escape_with(input, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape a value destined for a double-quoted attribute: `&`, `<`,
/// `>`, `"`.
pub fn escape_attribute(input: &str) -> String {
    escape_with(input, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

fn escape_with(input: &str, entity: fn(char) -> Option<&'static str>) -> String {
    if !input.chars().any(|ch| entity(ch).is_some()) {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match entity(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_text("Saldo atual"), "Saldo atual");
    }

    #[test]
    fn non_ascii_text_is_untouched() {
        assert_eq!(escape_text("Ícone usuário"), "Ícone usuário");
    }

    #[test]
    fn markup_characters_become_entities() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn attribute_values_also_escape_quotes() {
        assert_eq!(escape_attribute(r#"say "pix""#), "say &quot;pix&quot;");
        assert_eq!(escape_text(r#"say "pix""#), r#"say "pix""#);
    }
}
