pub mod table;

use color_eyre::eyre::{Report, Result, WrapErr};
use indicatif::{style::ProgressStyle, ProgressBar};
use std::path::Path;

// ----------------------------------------------------------------------------
// MIME Types
// ----------------------------------------------------------------------------

/// Guess a MIME type from a file extension.
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "txt" => "text/plain",
        "json" | "jsonld" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        _ => return None,
    };

    Some(mime)
}

/// MIME type to upload a file under.
///
/// `.mp4` resolves to `video/mp4` even when the generic guess comes up
/// empty; everything else unresolved falls back to a generic binary type.
pub fn upload_mime_type(path: &Path) -> &'static str {
    if let Some(mime) = guess_mime_type(path) {
        return mime;
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Check whether a MIME type is video content.
pub fn is_video(mime: &str) -> bool {
    mime.starts_with("video/")
}

// ----------------------------------------------------------------------------
// Progress
// ----------------------------------------------------------------------------

/// Progress bar for sequential multi-item transfers.
pub fn progress_bar(len: u64) -> Result<ProgressBar, Report> {
    let style =
        ProgressStyle::with_template("{bar:40} {pos}/{len} ({percent}%) | Elapsed: {elapsed_precise}")
            .wrap_err("Failed to create progress bar from template.")?;

    let progress_bar = ProgressBar::new(len);
    progress_bar.set_style(style);

    Ok(progress_bar)
}
