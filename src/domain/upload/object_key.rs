use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectKeyError {
    #[error("path escapes the uploads root")]
    EscapesRoot,
    #[error("empty object key")]
    Empty,
}

/// Resolves a request path relative to the uploads root, lexically.
///
/// `.` and empty segments are dropped and `..` pops the previous segment;
/// popping past the root is an escape. NUL bytes and backslashes are treated
/// as escapes as well.
pub fn normalize_object_key(raw: &str) -> Result<String, ObjectKeyError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop().ok_or(ObjectKeyError::EscapesRoot)?;
            }
            s if s.contains('\0') || s.contains('\\') => return Err(ObjectKeyError::EscapesRoot),
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(ObjectKeyError::Empty);
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_pass_through() {
        assert_eq!(normalize_object_key("poster-1-u.jpg").unwrap(), "poster-1-u.jpg");
        assert_eq!(normalize_object_key("a/b/c.png").unwrap(), "a/b/c.png");
    }

    #[test]
    fn dots_and_empty_segments_are_resolved() {
        assert_eq!(normalize_object_key("/a//./b.png").unwrap(), "a/b.png");
        assert_eq!(normalize_object_key("a/../b.png").unwrap(), "b.png");
    }

    #[test]
    fn escaping_the_root_is_refused() {
        assert_eq!(normalize_object_key("../etc/passwd"), Err(ObjectKeyError::EscapesRoot));
        assert_eq!(normalize_object_key("a/../../b"), Err(ObjectKeyError::EscapesRoot));
        assert_eq!(normalize_object_key("..\\windows"), Err(ObjectKeyError::EscapesRoot));
        assert_eq!(normalize_object_key("a\0.png"), Err(ObjectKeyError::EscapesRoot));
    }

    #[test]
    fn empty_key() {
        assert_eq!(normalize_object_key(""), Err(ObjectKeyError::Empty));
        assert_eq!(normalize_object_key("a/.."), Err(ObjectKeyError::Empty));
    }
}
