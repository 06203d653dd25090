//! Unix-style path strings: parsing into components and joining.
//!
//! Paths are plain `/`-delimited strings. Nothing here touches the filesystem and
//! no `.`/`..` normalization is performed.

mod parsed;

pub use parsed::ParsedPath;

/// The only recognized path delimiter.
pub const DELIMITER: char = '/';

/// Joins two path fragments with a single delimiter.
///
/// Empty or `None` fragments are skipped. A delimiter is inserted only when `a` is
/// non-empty and does not already end with one, so `"/usr/"` + `"foo"` gives
/// `"/usr/foo"`, not `"/usr//foo"`.
///
/// ```
/// use file_helper::path_join;
///
/// assert_eq!(path_join(Some("/usr"), Some("foo")), "/usr/foo");
/// assert_eq!(path_join(Some("/usr/"), Some("foo")), "/usr/foo");
/// assert_eq!(path_join(None, Some("foo")), "foo");
/// assert_eq!(path_join(Some(""), None), "");
/// ```
pub fn path_join(a: Option<&str>, b: Option<&str>) -> String {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();

    let mut result = String::with_capacity(a.len() + b.len() + 1);
    result.push_str(a);
    if !b.is_empty() {
        if !result.is_empty() && !result.ends_with(DELIMITER) {
            result.push(DELIMITER);
        }
        result.push_str(b);
    }
    result
}
