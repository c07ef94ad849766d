//! Campaign search helpers.

/// Trim a user-provided search term, treating blank input as no search.
pub fn normalize_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Build a case-insensitive `ILIKE` substring pattern from a raw term.
///
/// `%`, `_` and `\` are escaped so they match literally (PostgreSQL's
/// default `ILIKE` escape character is `\`).
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
