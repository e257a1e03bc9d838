//! Maps a section's English display name to its canonical content file.
//!
//! `"3. Visual Identity System"` becomes `content/3-visual-identity-system.md`. The mapping is
//! pure string manipulation: it never touches the filesystem and is the same for every locale.

use crate::error::ResolveError;

/// Directory component every canonical path starts with.
pub const CANONICAL_DIR: &str = "content";

/// Extension of every content file.
pub const CONTENT_EXTENSION: &str = "md";

/// Resolve a `"<n>. <Title>"` display name to `content/<n>-<slug>.md`.
///
/// # Errors
///
/// Returns [`ResolveError::MissingSeparator`] if the name has no `.`.
pub fn resolve(section_name: &str) -> Result<String, ResolveError> {
    Ok(format!(
        "{CANONICAL_DIR}/{}",
        canonical_file_name(section_name)?
    ))
}

/// The `<n>-<slug>.md` file name part of [`resolve`].
///
/// # Errors
///
/// Returns [`ResolveError::MissingSeparator`] if the name has no `.`.
pub fn canonical_file_name(section_name: &str) -> Result<String, ResolveError> {
    let (number, title) = section_name
        .split_once('.')
        .ok_or_else(|| ResolveError::MissingSeparator(section_name.to_string()))?;
    Ok(format!(
        "{}-{}.{CONTENT_EXTENSION}",
        number.trim(),
        slugify(title)
    ))
}

/// Lowercase and hyphenate spaces; all other punctuation is kept verbatim.
fn slugify(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "-")
}

#[must_use]
/// Leading `<n>` of a canonical file name, i.e. everything before the first `-`.
pub fn numeric_prefix(file_name: &str) -> &str {
    file_name
        .split_once('-')
        .map_or(file_name, |(number, _)| number)
}

#[cfg(test)]
#[path = "tests/resolve.rs"]
mod tests;
