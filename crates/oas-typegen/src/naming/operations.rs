use crate::openapi::Operation;

/// Returns the display name of an operation: its `operationId`, or the HTTP method when the
/// document omits one.
pub fn operation_name(method: &str, operation: &Operation) -> String {
  operation
    .operation_id
    .as_deref()
    .filter(|id| !id.is_empty())
    .map_or_else(|| method.to_string(), str::to_string)
}
