use crate::generator::converter::type_resolver::map_type;

#[test]
fn test_primitive_table() {
  let cases = [
    ("Array", "Array"),
    ("array", "Array"),
    ("List", "Array"),
    ("boolean", "boolean"),
    ("string", "string"),
    ("char", "string"),
    ("binary", "string"),
    ("ByteArray", "string"),
    ("UUID", "string"),
    ("date", "string"),
    ("int", "number"),
    ("float", "number"),
    ("number", "number"),
    ("long", "number"),
    ("short", "number"),
    ("double", "number"),
    ("integer", "number"),
    ("object", "any"),
    ("Map", "any"),
    ("File", "any"),
    ("DateTime", "Date"),
    ("Error", "Error"),
  ];

  for (source, expected) in cases {
    assert_eq!(map_type(Some(source), None), expected, "type {source}");
  }
}

#[test]
fn test_mapping_is_deterministic() {
  for source in ["string", "integer", "DateTime", "List"] {
    let first = map_type(Some(source), None);
    for _ in 0..3 {
      assert_eq!(map_type(Some(source), None), first);
    }
    assert_ne!(first, "any", "{source}");
  }
}

#[test]
fn test_missing_type_is_any() {
  assert_eq!(map_type(None, None), "any");
  assert_eq!(map_type(None, Some("int64")), "any");
}

#[test]
fn test_unknown_type_is_any() {
  assert_eq!(map_type(Some("tuple"), None), "any");
  assert_eq!(map_type(Some(""), None), "any");
  assert_eq!(map_type(Some("String"), None), "any");
}

#[test]
fn test_int64_string_format_maps_to_number() {
  assert_eq!(map_type(Some("string"), Some("int64")), map_type(Some("integer"), None));
  assert_eq!(map_type(Some("string"), Some("uint64")), "number");
}

#[test]
fn test_other_formats_do_not_override_type() {
  assert_eq!(map_type(Some("string"), Some("int32")), "string");
  assert_eq!(map_type(Some("string"), Some("date-time")), "string");
  assert_eq!(map_type(Some("integer"), Some("int64")), "number");
  assert_eq!(map_type(Some("boolean"), Some("int64")), "boolean");
}
