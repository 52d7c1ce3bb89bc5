use safestream::testing::*;
use safestream::*;

#[test]
fn find_first_returns_none_for_absent_collection() {
    assert_eq!(find_first(None::<Vec<u32>>), None);
}

#[test]
fn find_first_returns_none_for_empty_list() {
    assert_eq!(find_first(Some(Vec::<u32>::new())), None);
}

#[test]
fn find_first_returns_the_first_element() {
    let orgs = organizations(3);
    assert_eq!(find_first(Some(&orgs)), Some(&orgs[0]));
}

#[test]
fn find_first_or_falls_back_when_absent() {
    assert_eq!(find_first_or(None::<Vec<u32>>, 42), 42);
}

#[test]
fn find_first_or_ignores_the_fallback_when_present() {
    assert_eq!(find_first_or(Some(vec![7, 8]), 42), 7);
}

#[test]
fn find_first_or_default_falls_back_to_default() {
    assert_eq!(find_first_or_default(None::<Vec<u32>>), 0);
    assert_eq!(find_first_or_default(Some(Vec::<String>::new())), String::new());
}

#[test]
fn find_first_or_default_returns_the_first_element_when_present() {
    assert_eq!(find_first_or_default(Some(vec![5, 6])), 5);
}

#[test]
fn find_any_returns_none_for_absent_collection() {
    assert_eq!(find_any(None::<Vec<u32>>), None);
}

#[test]
fn find_any_returns_an_element_of_the_collection() {
    let numbers = natural_numbers(10);
    let found = find_any(Some(&numbers)).copied();
    assert!(found.is_some_and(|n| numbers.contains(&n)));
}

#[test]
fn find_any_matches_find_first_on_deterministic_sources() {
    let orgs = organizations(5);
    assert_eq!(find_any(Some(&orgs)), find_first(Some(&orgs)));
}

#[test]
fn find_any_or_falls_back_when_empty() {
    assert_eq!(find_any_or(Some(Vec::<u32>::new()), 9), 9);
}

#[test]
fn find_any_or_default_falls_back_to_default() {
    assert_eq!(find_any_or_default(None::<Vec<String>>), String::new());
}
