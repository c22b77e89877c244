use semset::distance::{edit_distance, levenshtein};

#[test]
fn reference_cases() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("cot", "cost"), 1);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("intention", "execution"), 5);
}

#[test]
fn empty_inputs_cost_the_other_length() {
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
    assert_eq!(levenshtein("", ""), 0);
}

#[test]
fn equal_inputs_are_zero_apart() {
    for s in ["", "a", "same", "ünïcödé"] {
        assert_eq!(levenshtein(s, s), 0);
    }
}

#[test]
fn distance_is_symmetric() {
    let pairs = [("kitten", "sitting"), ("abc", "yabd"), ("", "xyz"), ("short", "a much longer one")];

    for (a, b) in pairs {
        assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} vs {b:?}");
    }
}

#[test]
fn characters_not_bytes_are_the_tokens() {
    assert_eq!(levenshtein("naïve", "naive"), 1);
    assert_eq!(levenshtein("日本語", "日本"), 1);
}

#[test]
fn works_over_arbitrary_tokens() {
    assert_eq!(edit_distance(&["let", "x", "=", "1"], &["let", "y", "=", "1"]), 1);
    assert_eq!(edit_distance(&[1, 2, 3, 4], &[2, 3, 4, 5]), 2);
    assert_eq!(edit_distance::<bool>(&[], &[true, false]), 2);
}

#[test]
fn completely_different_inputs_cost_the_longer_length() {
    assert_eq!(levenshtein("abc", "xyz"), 3);
    assert_eq!(levenshtein("ab", "wxyz"), 4);
}
