use std::path::Path;

use uuid::Uuid;

/// Build a collision-resistant stored name that keeps the original extension.
pub fn generate_stored_name(original_name: &str) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
        _ => Uuid::new_v4().to_string(),
    }
}

/// Check that a stored name refers to a single entry inside the uploads
/// directory. Returns the name on success.
pub fn validate_stored_name(name: &str) -> Option<&str> {
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return None;
    }
    // also rejects NUL
    if name.chars().any(|c| c.is_control()) {
        return None;
    }
    Some(name)
}
