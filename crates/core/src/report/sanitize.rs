//! Strip server-managed keys from client-supplied report bodies.

use serde_json::Value;

/// Keys a client may never set on a report. The server fills them in.
pub const PROTECTED_FIELDS: &[&str] = &["id", "creator", "status", "creationDate", "endMessage"];

/// Remove `names` from a JSON object body. Returns how many keys were
/// dropped. Non-object bodies are left untouched.
pub fn strip_fields(body: &mut Value, names: &[&str]) -> usize {
    let Some(object) = body.as_object_mut() else {
        return 0;
    };
    let mut removed = 0;
    for name in names {
        if object.remove(*name).is_some() {
            removed += 1;
        }
    }
    removed
}

/// [`strip_fields`] with [`PROTECTED_FIELDS`].
pub fn strip_protected_fields(body: &mut Value) -> usize {
    let removed = strip_fields(body, PROTECTED_FIELDS);
    if removed > 0 {
        tracing::debug!(removed, "Dropped server-managed keys from report body");
    }
    removed
}
