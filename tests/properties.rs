use std::collections::HashSet;

use quickcheck::quickcheck;
use safestream::*;

quickcheck! {
    fn map_identity_preserves_elements(xs: Vec<i32>) -> bool {
        map(Some(&xs), |x| *x) == xs
    }

    fn filter_keeps_exactly_the_matching_elements(xs: Vec<i32>) -> bool {
        let kept = filter(Some(&xs), |x| **x % 2 == 0);
        let expected: Vec<&i32> = xs.iter().filter(|x| **x % 2 == 0).collect();
        kept == expected
    }

    fn match_helpers_answer_vacuously_for_absent_input(threshold: i32) -> bool {
        !any_match(None::<Vec<i32>>, |x| x > threshold)
            && all_match(None::<Vec<i32>>, |x| x > threshold)
            && none_match(None::<Vec<i32>>, |x| x > threshold)
    }

    fn none_match_negates_any_match(xs: Vec<i32>, threshold: i32) -> bool {
        none_match(Some(&xs), |x| *x > threshold) == !any_match(Some(&xs), |x| *x > threshold)
    }

    fn count_matches_length(xs: Vec<u8>) -> bool {
        count(Some(&xs)) == xs.len()
    }

    fn sort_is_stable(xs: Vec<(u8, u8)>) -> bool {
        let sorted = sort(Some(xs.clone()), |a, b| a.0.cmp(&b.0));
        let mut expected = xs;
        expected.sort_by_key(|pair| pair.0);
        sorted == expected
    }

    fn distinct_keeps_first_occurrences_in_order(xs: Vec<u8>) -> bool {
        let uniq = distinct(Some(xs.clone()));
        let mut seen = HashSet::new();
        let expected: Vec<u8> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
        uniq == expected
    }

    fn find_first_agrees_with_the_source(xs: Vec<i32>) -> bool {
        find_first(Some(&xs)) == xs.first()
    }

    fn joined_string_has_one_field_per_element(xs: Vec<u16>) -> bool {
        let joined = join_to_string(Some(&xs), ",");
        if xs.is_empty() {
            joined.is_empty()
        } else {
            joined.split(',').count() == xs.len()
        }
    }
}
