/// Extracts the referenced schema name from a `$ref` path.
///
/// The name is the final `/`-separated segment (`#/components/schemas/Pet` yields `Pet`). The
/// path is not validated, so a value without any separator is returned unchanged.
pub fn get_ref_name(ref_path: &str) -> &str {
  ref_path.rsplit_once('/').map_or(ref_path, |(_, name)| name)
}

/// Returns true if the `$ref` path points into the current document (`#/...`).
///
/// External and remote references are never resolved; callers only use this to report them.
pub fn is_local_ref(ref_path: &str) -> bool {
  ref_path.starts_with("#/")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_ref_name() {
    assert_eq!(get_ref_name("#/components/schemas/Pet"), "Pet");
    assert_eq!(get_ref_name("#/components/schemas/Order.Item"), "Order.Item");
    assert_eq!(get_ref_name("other.yaml#/components/schemas/Tag"), "Tag");
  }

  #[test]
  fn test_get_ref_name_without_separator() {
    assert_eq!(get_ref_name("Pet"), "Pet");
    assert_eq!(get_ref_name(""), "");
  }

  #[test]
  fn test_get_ref_name_trailing_separator() {
    assert_eq!(get_ref_name("#/components/schemas/"), "");
  }

  #[test]
  fn test_is_local_ref() {
    assert!(is_local_ref("#/components/schemas/Pet"));
    assert!(!is_local_ref("other.yaml#/components/schemas/Tag"));
    assert!(!is_local_ref("https://example.com/schemas/Pet"));
    assert!(!is_local_ref("Pet"));
  }
}
