//! Naming of stored upload files.
//!
//! Uploaded images are stored as `<field>-<unix_millis>-<random>.<ext>` and
//! referenced by the URL path `/uploads/<file>`.

use std::path::Path;

use rand::Rng;

/// URL prefix under which stored uploads are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Upper bound (exclusive) of the random component of a stored name.
const RANDOM_SUFFIX_BOUND: u32 = 1_000_000_000;

/// Generate a stored file name for an upload received in `field_name`.
pub fn stored_file_name(field_name: &str, original_name: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);
    stored_file_name_with(field_name, original_name, millis, suffix)
}

/// Deterministic form of [`stored_file_name`].
pub fn stored_file_name_with(
    field_name: &str,
    original_name: Option<&str>,
    millis: i64,
    suffix: u32,
) -> String {
    match original_name.and_then(extension) {
        Some(ext) => format!("{field_name}-{millis}-{suffix}.{ext}"),
        None => format!("{field_name}-{millis}-{suffix}"),
    }
}

/// Extension of a client-supplied file name.
///
/// Only the last path component is considered. Dotfiles, trailing dots and
/// extensions containing anything other than ASCII alphanumerics yield
/// `None`.
pub fn extension(original_name: &str) -> Option<&str> {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Public URL path of a stored file.
pub fn public_url(stored_name: &str) -> String {
    format!("{UPLOAD_URL_PREFIX}/{stored_name}")
}
