//! Pure name-transform helpers.
//!
//! A name transform maps a source artifact name to the target name a
//! composed task intends to produce. Transforms are pure string functions
//! and never touch the filesystem.

/// Boxed name-transform function stored by a composed task.
pub type NameTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Transform that keeps the source name unchanged.
pub fn identity() -> impl Fn(&str) -> String + Send + Sync + 'static {
    |source: &str| source.to_string()
}

/// Transform that replaces the final extension with `ext`.
///
/// `ext` is given without the leading dot. Names without an extension
/// (including dotfiles like `.env`) get the extension appended instead.
pub fn replace_extension(ext: impl Into<String>) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let ext = ext.into();
    move |source: &str| match source.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{}.{}", stem, ext),
        _ => format!("{}.{}", source, ext),
    }
}

/// Transform that inserts `suffix` before the final extension.
///
/// `app.js` with suffix `min` becomes `app.min.js`; names without an
/// extension get the suffix appended.
pub fn add_suffix(suffix: impl Into<String>) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let suffix = suffix.into();
    move |source: &str| match source.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}.{}.{}", stem, suffix, ext),
        _ => format!("{}.{}", source, suffix),
    }
}
