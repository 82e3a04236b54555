//! HTTP span helpers.

/// Collapse numeric path segments so spans group by route rather than by
/// customer or product.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            template.push('/');
        }

        if !segment.is_empty() && segment.parse::<i64>().is_ok() {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }
    }

    template
}
