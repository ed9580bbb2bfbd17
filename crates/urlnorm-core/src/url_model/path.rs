//! Segment-structural path normalization.

/// Collapses `.` and `..` segments of an absolute path.
///
/// `/./` is removed until none remain, then `..` pops the previous segment.
/// Popping past the root is ignored. Empty segments (`//`) are kept, and no
/// percent-decoding or case-folding happens.
pub fn normalize_path(path: &str) -> String {
    let mut collapsed = path.to_string();
    while collapsed.contains("/./") {
        collapsed = collapsed.replace("/./", "/");
    }

    let rest = collapsed.strip_prefix('/').unwrap_or(&collapsed);
    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        if segment == ".." {
            segments.pop();
        } else {
            segments.push(segment);
        }
    }

    format!("/{}", segments.join("/"))
}
