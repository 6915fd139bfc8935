//! Entity decoding for question and choice text.

/// Decodes entity-escaped text into canonical plain text.
///
/// Literal markup characters are kept as-is. Entities are decoded repeatedly
/// until nothing changes, so double-escaped input such as `&amp;quot;`
/// collapses fully and `normalize(normalize(x)) == normalize(x)`.
/// Non-breaking spaces become ordinary spaces.
pub fn normalize(text: &str) -> String {
    let mut current = text.to_string();

    loop {
        let next = html_escape::decode_html_entities(&current).replace('\u{a0}', " ");
        if next == current {
            return current;
        }
        current = next;
    }
}
