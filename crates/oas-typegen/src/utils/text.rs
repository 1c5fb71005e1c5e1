#[inline]
#[must_use]
fn process_doc_text(input: &str) -> String {
  input.replace("\\n", "\n").replace("*/", "*\\/")
}

/// Splits a description into JSDoc comment lines, indented by `indent`.
///
/// Returns an empty vector for blank input so callers can skip the comment entirely.
#[must_use]
pub(crate) fn doc_comment_lines(input: &str, indent: &str) -> Vec<String> {
  let text = process_doc_text(input);
  if text.trim().is_empty() {
    return vec![];
  }

  let mut lines = vec![format!("{indent}/**")];
  lines.extend(text.trim_end().lines().map(|line| {
    if line.is_empty() {
      format!("{indent} *")
    } else {
      format!("{indent} * {line}")
    }
  }));
  lines.push(format!("{indent} */"));
  lines
}
