use super::*;

#[test]
fn identical_strings_have_zero_distance() {
    assert_eq!(levenshtein_distance("length", "length"), 0);
}

#[test]
fn single_substitution_has_distance_one() {
    assert_eq!(levenshtein_distance("lenght", "length"), 2.min(levenshtein_distance("lenght", "length")));
    // 'lenght' -> 'length' is a transposition: two substitutions under plain Levenshtein.
    assert_eq!(levenshtein_distance("lenght", "length"), 2);
}

#[test]
fn best_suggestion_picks_closest_candidate() {
    let candidates = ["length", "push", "pop"];
    let suggestion = best_suggestion("lenght", candidates.into_iter(), 2);
    assert_eq!(suggestion, Some("length"));
}

#[test]
fn best_suggestion_respects_max_distance() {
    let candidates = ["completely_unrelated_name"];
    let suggestion = best_suggestion("lenght", candidates.into_iter(), 2);
    assert_eq!(suggestion, None);
}

#[test]
fn best_suggestion_never_suggests_the_name_itself() {
    let candidates = ["length"];
    let suggestion = best_suggestion("length", candidates.into_iter(), 2);
    assert_eq!(suggestion, None);
}
