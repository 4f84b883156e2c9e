//! Source-to-fragment file name mapping

/// Computes the fragment file name a source file corresponds to.
///
/// The transformation is mechanical: strip `source_ext` from the end of the
/// name if present, replace every space with an underscore, drop every literal
/// parenthesis, then append `fragment_ext`. Extensions are given without the
/// leading dot.
///
/// Pure and total: any input produces a name. Malformed input simply yields a
/// name that is unlikely to exist on disk, which downstream correlation
/// reports as "no counterpart".
pub fn fragment_name(source_name: &str, source_ext: &str, fragment_ext: &str) -> String {
    let suffix = format!(".{source_ext}");
    let stem = source_name.strip_suffix(&suffix).unwrap_or(source_name);
    let mapped: String = stem
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    format!("{mapped}.{fragment_ext}")
}
