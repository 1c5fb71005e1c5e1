use std::{collections::HashMap, sync::LazyLock};

/// Target type used when a source type is absent or unknown.
pub(crate) const ANY_TYPE: &str = "any";
pub(crate) const NUMBER_TYPE: &str = "number";
pub(crate) const STRING_TYPE: &str = "string";

/// Maps source type names to TypeScript target types.
static PRIMITIVE_TYPES: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
  [
    ("Array", "Array"),
    ("array", "Array"),
    ("List", "Array"),
    ("boolean", "boolean"),
    ("string", STRING_TYPE),
    ("int", NUMBER_TYPE),
    ("float", NUMBER_TYPE),
    ("number", NUMBER_TYPE),
    ("long", NUMBER_TYPE),
    ("short", NUMBER_TYPE),
    ("char", STRING_TYPE),
    ("double", NUMBER_TYPE),
    ("object", ANY_TYPE),
    ("integer", NUMBER_TYPE),
    ("Map", ANY_TYPE),
    ("date", STRING_TYPE),
    ("DateTime", "Date"),
    ("binary", STRING_TYPE),
    ("ByteArray", STRING_TYPE),
    ("UUID", STRING_TYPE),
    ("File", ANY_TYPE),
    ("Error", "Error"),
  ]
  .into_iter()
  .collect()
});

/// Resolves a source `type`/`format` pair to a target type name.
///
/// Total over all inputs: a missing or unrecognized type yields `any`. The format only matters
/// for 64-bit integers carried as strings, which map to `number`.
pub(crate) fn map_type(source_type: Option<&str>, source_format: Option<&str>) -> &'static str {
  let Some(source_type) = source_type else {
    return ANY_TYPE;
  };

  if source_type == STRING_TYPE && matches!(source_format, Some("int64" | "uint64")) {
    return NUMBER_TYPE;
  }

  PRIMITIVE_TYPES.get(source_type).copied().unwrap_or(ANY_TYPE)
}
