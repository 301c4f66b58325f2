use crate::db::lessons::build_search_filter;

#[test]
fn blank_query_matches_the_whole_catalogue() {
    assert!(build_search_filter("").is_empty());
    assert!(build_search_filter("   ").is_empty());
}

#[test]
fn text_query_matches_subject_and_location() {
    let filter = build_search_filter("math");
    let clauses = filter.get_array("$or").unwrap();
    assert_eq!(clauses.len(), 2);

    let subject = clauses[0].as_document().unwrap();
    let regex = subject.get_document("subject").unwrap();
    assert_eq!(regex.get_str("$regex").unwrap(), "math");
    assert_eq!(regex.get_str("$options").unwrap(), "i");
}

#[test]
fn numeric_query_also_matches_spaces_and_price() {
    let filter = build_search_filter("5");
    let clauses = filter.get_array("$or").unwrap();
    assert_eq!(clauses.len(), 4);

    let spaces = clauses[2].as_document().unwrap();
    assert_eq!(spaces.get_i32("spaces").unwrap(), 5);

    let price = clauses[3].as_document().unwrap();
    assert_eq!(price.get_f64("price").unwrap(), 5.0);
}

#[test]
fn fractional_query_matches_price_but_not_spaces() {
    let filter = build_search_filter("12.5");
    let clauses = filter.get_array("$or").unwrap();
    assert_eq!(clauses.len(), 3);

    let price = clauses[2].as_document().unwrap();
    assert_eq!(price.get_f64("price").unwrap(), 12.5);
}

#[test]
fn regex_metacharacters_are_escaped_not_interpreted() {
    let filter = build_search_filter("c++ (advanced)");
    let clauses = filter.get_array("$or").unwrap();

    let subject = clauses[0].as_document().unwrap();
    let pattern = subject
        .get_document("subject")
        .unwrap()
        .get_str("$regex")
        .unwrap();

    assert_eq!(pattern, regex::escape("c++ (advanced)"));
    assert!(pattern.contains(r"\+\+"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let filter = build_search_filter("  music  ");
    let clauses = filter.get_array("$or").unwrap();
    let subject = clauses[0].as_document().unwrap();
    assert_eq!(
        subject.get_document("subject").unwrap().get_str("$regex").unwrap(),
        "music"
    );
}
