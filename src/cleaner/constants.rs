//! Constants and predicates for deciding which files get cleaned.

use std::path::Path;

/// File extensions (with leading dot) whose files are normalized; everything else is left alone
pub const ELIGIBLE_EXTENSIONS: &[&str] = &[".config", ".cs", ".csproj", ".py", ".sln"];

/// UTF-8 byte-order-mark (EF BB BF on disk)
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Whitespace trimmed from both ends of a file: space, tab, LF, CR, form feed, vertical tab
pub const TRIMMED_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// True if the path's extension is exactly one of [`ELIGIBLE_EXTENSIONS`] (case-sensitive).
///
/// Leading dots of the file name never start an extension, so `.cs`, `..cs`
/// and `Makefile` have none.
pub fn is_eligible_path(path: &Path) -> bool {
    extension_with_dot(path).is_some_and(|ext| ELIGIBLE_EXTENSIONS.contains(&ext))
}

/// Extension of the final path component including its dot, e.g. `.cs`.
fn extension_with_dot(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let stem = name.trim_start_matches('.');
    stem.rfind('.').map(|i| &stem[i..])
}
