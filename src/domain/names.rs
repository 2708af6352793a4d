/// Canonical player key: first letter upper case, the rest lower case.
///
/// Names that only differ in case are the same player ("o'brien" and
/// "O'Brien" both become "O'brien").
pub fn canonical_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
