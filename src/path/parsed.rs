use std::fmt;
use std::ops::Index;

use super::DELIMITER;
use crate::core::Result;

/// A path string split into its non-empty components.
///
/// Besides the components, the parser remembers whether the input started or ended
/// with the delimiter and splits the last component into base name and extension.
///
/// ### Invariants
///
/// 1. Components are never empty and never contain the delimiter.
/// 2. Joining the components with the delimiter, prefixed by one when
///    `starts_with_slash` is set, reproduces the input minus any trailing delimiter
///    and with repeated delimiters collapsed.
///
/// ### Example
///
/// ```
/// use file_helper::ParsedPath;
///
/// let mut parsed = ParsedPath::new();
/// parsed.parse("/usr/foo.txt").unwrap();
///
/// assert_eq!(parsed.num_parts(), 2);
/// assert_eq!(&parsed[0], "usr");
/// assert_eq!(parsed.file_base_name(), "foo");
/// assert_eq!(parsed.file_extension(), "txt");
/// assert_eq!(parsed.generate_path_string(Some(1)), "/usr");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    parts: Vec<String>,
    starts_with_slash: bool,
    ends_with_slash: bool,
    file_base_name: String,
    file_extension: String,
}

impl ParsedPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path`, replacing any previously parsed state.
    ///
    /// Any string is accepted, including the empty one. The only failure is running
    /// out of memory while storing the components.
    pub fn parse(&mut self, path: &str) -> Result<()> {
        self.clear();

        self.starts_with_slash = path.starts_with(DELIMITER);
        self.ends_with_slash = path.ends_with(DELIMITER);

        for part in path.split(DELIMITER).filter(|part| !part.is_empty()) {
            self.parts.try_reserve(1)?;
            let mut owned = String::new();
            owned.try_reserve_exact(part.len())?;
            owned.push_str(part);
            self.parts.push(owned);
        }

        if let Some(last) = self.parts.last() {
            match last.rfind('.') {
                Some(offset) => {
                    self.file_base_name = last[..offset].to_string();
                    self.file_extension = last[offset + 1..].to_string();
                }
                None => self.file_base_name = last.clone(),
            }
        }

        Ok(())
    }

    /// Resets to the freshly constructed, empty state.
    pub fn clear(&mut self) {
        self.parts.clear();
        self.starts_with_slash = false;
        self.ends_with_slash = false;
        self.file_base_name.clear();
        self.file_extension.clear();
    }

    /// Rebuilds a path string from the first `num_parts` components.
    ///
    /// `None`, or a count larger than the number of components, uses all of them.
    /// The result starts with the delimiter iff the parsed input did; it never ends
    /// with one unless it is the lone leading delimiter.
    pub fn generate_path_string(&self, num_parts: Option<usize>) -> String {
        let count = num_parts.map_or(self.parts.len(), |n| n.min(self.parts.len()));

        let mut result = String::new();
        if self.starts_with_slash {
            result.push(DELIMITER);
        }
        for (ii, part) in self.parts[..count].iter().enumerate() {
            if ii > 0 {
                result.push(DELIMITER);
            }
            result.push_str(part);
        }
        result
    }

    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&str> {
        self.parts.get(index).map(String::as_str)
    }

    pub fn starts_with_slash(&self) -> bool {
        self.starts_with_slash
    }

    pub fn ends_with_slash(&self) -> bool {
        self.ends_with_slash
    }

    /// Last component up to (not including) its final `.`, or all of it.
    pub fn file_base_name(&self) -> &str {
        &self.file_base_name
    }

    /// Last component after its final `.`; empty when there is no `.`.
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }
}

impl Index<usize> for ParsedPath {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.parts[index]
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_path_string(None))
    }
}
