// src/domain/article/slug.rs

/// Derive a URL slug from an article title.
///
/// The title is lowercased and trimmed, every character that is not an ASCII
/// word character, whitespace or `-` is dropped, and each run of whitespace
/// and hyphens becomes a single `-`. The result can be empty (e.g. for titles
/// written entirely in non-Latin scripts); callers treat that as "no slug".
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.trim_matches(is_slug_space).chars() {
        if is_slug_space(c) || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        }
    }

    if pending_separator {
        slug.push('-');
    }

    slug
}

/// Whitespace as browsers' regular expressions see it: Unicode white space
/// plus the byte order mark, minus NEL.
fn is_slug_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// True when `value` is already in the form [`generate_slug`] produces.
pub fn is_normalized(value: &str) -> bool {
    generate_slug(value) == value
}
