use safestream::SafeStreamExt;
use safestream::testing::*;

#[test]
fn safe_stream_chains_like_any_iterator() {
    let maybe_scores: Option<Vec<u32>> = Some(vec![70, 95, 88]);
    let high: Vec<u32> = maybe_scores
        .safe_stream()
        .filter(|score| *score >= 80)
        .collect();
    assert_collections_equal(&high, &[95, 88]);
}

#[test]
fn safe_stream_on_absent_input_yields_nothing() {
    let absent: Option<Vec<u32>> = None;
    assert_eq!(absent.safe_stream().count(), 0);
}

#[test]
fn safe_stream_borrows_through_as_ref() {
    let stored: Option<Vec<u32>> = Some(vec![1, 2, 3]);
    let total: u32 = stored.as_ref().safe_stream().sum();
    assert_eq!(total, 6);
    assert_eq!(stored, Some(vec![1, 2, 3]));
}

#[test]
fn safe_stream_works_over_fixtures() {
    let orgs = Some(organizations(3));
    let names: Vec<String> = orgs.safe_stream().map(|org| org.name).collect();
    assert_collections_equal(
        &names,
        &[
            "Organization 1".to_string(),
            "Organization 2".to_string(),
            "Organization 3".to_string(),
        ],
    );
}
