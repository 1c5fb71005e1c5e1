use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::{Captures, Regex};

// Compile static regexes only once.
static SNAKE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+([A-Za-z0-9_])|-+([A-Za-z0-9_])").unwrap());
static CAMEL_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z]|[A-Z0-9]+)([A-Z0-9]|$)").unwrap());
static TS_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static INVALID_TYPE_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]").unwrap());
static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII and reduces everything that is not a word character to single
/// underscores, trimmed at both ends.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");
  collapsed.trim_matches('_').to_string()
}

/// Converts `snake_case` or `kebab-case` text into `camelCase`.
///
/// Each run of underscores or hyphens followed by a word character collapses into that
/// character upper-cased. Text without separators is returned unchanged.
pub fn snake_to_camel(input: &str) -> String {
  SNAKE_SEPARATOR_RE
    .replace_all(input, |caps: &Captures| {
      caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|letter| letter.as_str().to_uppercase())
        .unwrap_or_default()
    })
    .into_owned()
}

/// Converts `camelCase` text into `snake_case`.
///
/// An underscore is inserted between a lower-case letter (or an upper-case/digit run) and the
/// upper-case letter or digit that follows it, then the whole string is lower-cased.
pub fn camel_to_snake(input: &str) -> String {
  CAMEL_BOUNDARY_RE
    .replace_all(input, |caps: &Captures| {
      let head = &caps[1];
      match caps.get(2).map(|m| m.as_str()) {
        Some(tail) if !tail.is_empty() => format!("{head}_{tail}"),
        _ => head.to_string(),
      }
    })
    .to_lowercase()
}

/// Renders a property name as a TypeScript object key, quoting it when it is not a plain
/// identifier.
pub fn to_property_key(name: &str) -> String {
  if TS_IDENTIFIER_RE.is_match(name) {
    name.to_string()
  } else {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
  }
}

/// Converts a component schema name into a TypeScript type name and module stem.
///
/// Non-ASCII letters are transliterated, characters that cannot appear in an identifier become
/// `_`, and a leading digit gets a `_` prefix. Valid names pass through untouched, so `Pet` stays
/// `Pet`.
pub fn to_type_name(name: &str) -> String {
  let ascii = any_ascii(name);
  let mut ident = INVALID_TYPE_CHARS_RE.replace_all(&ascii, "_").into_owned();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts free text such as an API title into a `PascalCase` TypeScript namespace name.
///
/// Returns `Api` when nothing usable remains, and prefixes names that would start with a digit.
pub fn to_namespace_name(input: &str) -> String {
  let sanitized = sanitize(input);
  let mut ident: String = sanitized.split('_').map(|word| word.to_pascal_case()).collect();

  if ident.is_empty() {
    return "Api".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert_str(0, "Api");
  }

  ident
}

/// Appends `2`, `3`, ... to `base_name` until the result is not in `used_names`.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }

  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}
