//! Route labels for request spans and metrics.

/// Collapse record ids so every product or user shares one label,
/// e.g. `/products/42` becomes `/products/{id}`.
pub(super) fn route_label(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    let mut label = String::with_capacity(path.len());

    for segment in trimmed.split('/') {
        label.push('/');

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            label.push_str("{id}");
        } else {
            label.push_str(segment);
        }
    }

    label
}
