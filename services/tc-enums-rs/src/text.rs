/// Lowercase one char at a time, keeping only the first char of each mapping.
///
/// `str::to_lowercase` expands 'İ' to "i\u{307}", which would stop "MİD" from
/// matching "mid". Taking the first char keeps lookups length-preserving.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars()
        .flat_map(|c| c.to_lowercase().next())
        .collect()
}
