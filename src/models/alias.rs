//! Free-text normalization and alias lookup shared by the enumerations.

/// Normalizes user input before alias matching.
///
/// Trims, uppercases, strips the acute accents and diaeresis used in
/// Spanish vowels, and collapses runs of whitespace into a single space.
pub(crate) fn normalize(input: &str) -> String {
    let upper: String = input
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' | 'Ü' => 'U',
            other => other,
        })
        .collect();

    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Looks up a normalized input in a closed alias table.
pub(crate) fn lookup<T: Copy>(table: &[(T, &[&str])], normalized: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized))
        .map(|(value, _)| *value)
}
