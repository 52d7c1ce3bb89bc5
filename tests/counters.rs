use std::collections::HashSet;

use safestream::testing::*;
use safestream::*;

#[test]
fn count_is_zero_for_absent_collection() {
    assert_eq!(count(None::<Vec<u32>>), 0);
}

#[test]
fn count_is_zero_for_empty_list() {
    assert_eq!(count(Some(Vec::<u32>::new())), 0);
}

#[test]
fn count_is_zero_for_empty_set() {
    assert_eq!(count(Some(HashSet::<u32>::new())), 0);
}

#[test]
fn count_reports_the_number_of_elements() {
    assert_eq!(count(Some(organizations(7))), 7);
}

#[test]
fn count_keeps_duplicates() {
    let data = TestDataBuilder::new().add_repeated('x', 4).build();
    assert_eq!(count(Some(data)), 4);
}
