use super::*;

#[test]
fn test_part_display_drops_trailing_zero() {
    let part = Part { name: "top", length: 95.0, width: 40.0 };

    assert_eq!(part.to_string(), "top: 95 x 40");
}

#[test]
fn test_part_display_keeps_fraction() {
    let part = Part { name: "legs (2)", length: 26.5, width: 20.0 };

    assert_eq!(part.to_string(), "legs (2): 26.5 x 20");
}

#[test]
fn test_catalog_order() {
    let names: Vec<&str> = PART_CATALOG.iter().map(|g| g.name).collect();
    assert_eq!(names, ["table", "bench"]);

    let table = find_group("table").unwrap();
    let table_parts: Vec<&str> = table.parts.iter().map(|p| p.name).collect();
    assert_eq!(table_parts, ["top", "legs (2)", "leg bases (2)", "spanners (2)"]);
}

#[test]
fn test_find_group_missing() {
    assert!(find_group("chair").is_none());
}

#[test]
fn test_render_catalog() {
    let text = render_catalog(PART_CATALOG);

    let expected = "\
table
  top: 95 x 40
  legs (2): 26.5 x 20
  leg bases (2): 29 x 4.5
  spanners (2): 45.5 x 6
bench
  top: 95 x 15
  spanner: 68 x 6
  legs (2): 16.5 x 15
";
    assert_eq!(text, expected);
}
