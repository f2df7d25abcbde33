/// Encode a title for an HTML heading.
///
/// The markup characters get their usual references. Characters from U+00A0
/// to U+00FF and everything outside the Basic Multilingual Plane are written
/// as decimal references.
///
/// ```
/// use mkmd_core::utils::html::html_encode;
///
/// assert_eq!(html_encode("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(html_encode("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// assert_eq!(html_encode("Café"), "Caf&#233;");
/// ```
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{a0}'..='\u{ff}' | '\u{10000}'..=char::MAX => {
                out.push_str(&format!("&#{};", u32::from(ch)))
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Decode HTML character references, named or numeric.
/// Unknown references are kept as written.
///
/// ```
/// use mkmd_core::utils::html::html_decode;
///
/// assert_eq!(html_decode("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(html_decode("&#65;&#x42;"), "AB");
/// assert_eq!(html_decode("&bogus; & more"), "&bogus; & more");
/// ```
pub fn html_decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
