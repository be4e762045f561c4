use std::path::{Component, MAIN_SEPARATOR, Path};

/// Splits a path into its named components, root to leaf.
///
/// `/root/blah/wer` becomes `["root", "blah", "wer"]`. The root and any
/// prefix are dropped. Paths ending in a separator are not supported.
#[must_use]
pub fn decompose(path: &Path) -> Vec<String> {
    debug_assert!(
        path.parent().is_none() || !path.to_string_lossy().ends_with(MAIN_SEPARATOR),
        "path must not end in a separator: {}",
        path.display()
    );

    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
