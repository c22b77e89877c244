use std::mem;

/// Returns the Levenshtein distance between two token sequences.
///
/// The distance is the minimum number of single-token insertions, deletions
/// and substitutions that turn `source` into `target`. It is symmetric, zero
/// only for equal sequences, and satisfies the triangle inequality.
///
/// Only two rows of the Wagner–Fischer table are kept, and the shorter
/// sequence always spans the columns, so memory use is
/// `O(min(source.len(), target.len()))`.
///
/// # Example
/// ```
/// use semset::distance::edit_distance;
///
/// assert_eq!(edit_distance(&[1, 2, 3], &[1, 3]), 1);
/// assert_eq!(edit_distance::<u8>(&[], &[7, 7]), 2);
/// ```
#[must_use]
pub fn edit_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    if source == target {
        return 0;
    }
    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let (rows, columns) = if target.len() > source.len() {
        (target, source)
    } else {
        (source, target)
    };

    let mut previous: Vec<usize> = (0..=columns.len()).collect();
    let mut current = vec![0; columns.len() + 1];

    for (i, row_token) in rows.iter().enumerate() {
        current[0] = i + 1;

        for (j, column_token) in columns.iter().enumerate() {
            current[j + 1] = if row_token == column_token {
                previous[j]
            } else {
                // insertion, deletion, substitution
                1 + current[j].min(previous[j + 1]).min(previous[j])
            };
        }

        mem::swap(&mut previous, &mut current);
    }

    previous[columns.len()]
}

/// Returns the Levenshtein distance between two strings, counted in `char`s.
///
/// Multi-byte characters count as one token each, so `"café"` and `"cafe"`
/// are one substitution apart.
///
/// # Example
/// ```
/// use semset::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("cot", "cost"), 1);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
#[must_use]
pub fn levenshtein(source: &str, target: &str) -> usize {
    if source == target {
        return 0;
    }

    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    edit_distance(&source, &target)
}
