use safestream::*;

#[test]
fn join_returns_empty_string_for_absent_collection() {
    assert_eq!(join_to_string(None::<Vec<&str>>, ","), "");
}

#[test]
fn join_returns_empty_string_for_empty_list() {
    assert_eq!(join_to_string(Some(Vec::<String>::new()), ","), "");
}

#[test]
fn join_single_element_has_no_delimiter() {
    assert_eq!(join_to_string(Some(vec!["solo"]), ","), "solo");
}

#[test]
fn join_preserves_iteration_order() {
    assert_eq!(join_to_string(Some(vec!["a", "b", "c"]), "-"), "a-b-c");
}

#[test]
fn join_renders_numbers() {
    assert_eq!(join_to_string(Some(vec![1, 2, 3]), ", "), "1, 2, 3");
}

#[test]
fn join_renders_absent_elements_as_null() {
    let mixed = vec![Some("a"), None, Some("b")];
    assert_eq!(join_to_string(Some(mixed), ","), "a,null,b");
}

#[test]
fn join_renders_owned_optional_strings() {
    let mixed: Vec<Option<String>> = vec![None, Some("x".to_string())];
    assert_eq!(join_to_string(Some(mixed), ";"), "null;x");
}

#[test]
fn join_with_empty_delimiter_concatenates() {
    assert_eq!(join_to_string(Some(vec![7, 8, 9]), ""), "789");
}

#[test]
fn join_borrowed_elements() {
    let words = vec!["safe".to_string(), "stream".to_string()];
    assert_eq!(join_to_string(Some(&words), " "), "safe stream");
}
