// SPDX-License-Identifier: MPL-2.0
//! Detection domain types shared by both analysis panels.
//!
//! The image and audio flows are the same pattern with different parameters,
//! so everything that distinguishes them lives in [`Modality`]: accepted MIME
//! types, endpoint path, dialog filters, and localization key suffixes. The
//! rest of this module is modality-agnostic: the current file selection,
//! pre-flight validation, and the verdict reported by the server.

pub mod client;

pub use client::{DetectionClient, DetectionResponse};

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Maximum accepted upload size in bytes (10 MiB), matching the server limit.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// The two kinds of media the detection service can analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Image,
    Audio,
}

impl Modality {
    /// MIME types the detection endpoint accepts for this modality.
    #[must_use]
    pub const fn accepted_mime_types(self) -> &'static [&'static str] {
        match self {
            Modality::Image => &["image/jpeg", "image/png"],
            Modality::Audio => &["audio/wav", "audio/mpeg"],
        }
    }

    /// Path of the detection endpoint, relative to the server base URL.
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Modality::Image => "/detect/image",
            Modality::Audio => "/detect/audio",
        }
    }

    /// File extensions offered in the file dialog filter.
    #[must_use]
    pub const fn dialog_extensions(self) -> &'static [&'static str] {
        match self {
            Modality::Image => &["jpg", "jpeg", "png"],
            Modality::Audio => &["wav", "mp3"],
        }
    }

    /// Suffix used to build modality-specific localization keys
    /// (e.g. `error-no-file-image`).
    #[must_use]
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Modality::Image => "image",
            Modality::Audio => "audio",
        }
    }

    /// Routes a file to the panel matching its extension family.
    ///
    /// Returns `None` for extensions belonging to neither modality; the
    /// caller decides where those go (validation happens at submit, not
    /// here, so unrecognized files must still be selectable).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)?;

        if Self::Image.dialog_extensions().contains(&extension.as_str()) {
            Some(Self::Image)
        } else if Self::Audio.dialog_extensions().contains(&extension.as_str()) {
            Some(Self::Audio)
        } else {
            None
        }
    }
}

/// Maps a file extension to the MIME type used for validation and upload.
///
/// Desktop files carry no MIME type of their own, so it is derived from the
/// extension at selection time. Unknown extensions map to the generic octet
/// stream type, which no modality accepts.
#[must_use]
pub fn mime_from_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// The user's current file selection for one panel.
///
/// Replaced wholesale on the next pick or drop; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Source path, read again at upload time.
    pub path: PathBuf,
    /// Display name shown next to the drop zone.
    pub name: String,
    /// MIME type derived from the extension.
    pub mime_type: String,
    /// Size in bytes, taken from file metadata at selection time.
    pub size_bytes: u64,
}

impl SelectedFile {
    /// Builds a selection from a path, reading its size from metadata.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if metadata.is_dir() {
            return Err(Error::Io(format!(
                "{} is a directory",
                path.to_string_lossy()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or("application/octet-stream", mime_from_extension)
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            mime_type,
            size_bytes: metadata.len(),
        })
    }
}

/// Reasons a submission can fail.
///
/// Covers all three error classes surfaced in a panel's error region:
/// pre-flight validation (no request is sent), server-reported application
/// errors, and transport failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit pressed with no file selected.
    NoFileSelected,
    /// The selection's MIME type is outside the accepted set.
    UnsupportedFileType,
    /// The selection exceeds [`MAX_UPLOAD_BYTES`].
    FileTooLarge,
    /// The server answered with `success: false`; payload is its message.
    Server(String),
    /// The request or response parsing failed; payload is the failure text.
    Network(String),
}

impl SubmitError {
    /// Returns the localization key for this error.
    ///
    /// Validation messages name the expected media kind, so two of the keys
    /// are modality-specific.
    #[must_use]
    pub fn i18n_key(&self, modality: Modality) -> String {
        match self {
            SubmitError::NoFileSelected => format!("error-no-file-{}", modality.key_suffix()),
            SubmitError::UnsupportedFileType => {
                format!("error-invalid-type-{}", modality.key_suffix())
            }
            SubmitError::FileTooLarge => "error-file-too-large".to_string(),
            SubmitError::Server(_) => "error-server".to_string(),
            SubmitError::Network(_) => "error-network".to_string(),
        }
    }

    /// Returns the message detail for errors that carry one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Server(detail) | SubmitError::Network(detail) => Some(detail),
            _ => None,
        }
    }

    /// Whether this error was produced before any network activity.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::NoFileSelected
                | SubmitError::UnsupportedFileType
                | SubmitError::FileTooLarge
        )
    }
}

/// Checks a selection against the modality's constraints.
///
/// Runs entirely before any network activity; a failure short-circuits the
/// submit without entering the loading state.
pub fn validate_submission(
    modality: Modality,
    selection: Option<&SelectedFile>,
) -> std::result::Result<(), SubmitError> {
    let file = selection.ok_or(SubmitError::NoFileSelected)?;

    if !modality
        .accepted_mime_types()
        .contains(&file.mime_type.as_str())
    {
        return Err(SubmitError::UnsupportedFileType);
    }

    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(SubmitError::FileTooLarge);
    }

    Ok(())
}

/// Binary verdict derived from the server's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    /// Case-insensitive comparison against "REAL"; anything else is fake.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("real") {
            Verdict::Real
        } else {
            Verdict::Fake
        }
    }

    /// Localization key of the verdict headline for the given modality.
    #[must_use]
    pub fn i18n_key(self, modality: Modality) -> String {
        let outcome = match self {
            Verdict::Real => "real",
            Verdict::Fake => "fake",
        };
        format!("verdict-{}-{}", outcome, modality.key_suffix())
    }
}

/// A successful detection outcome, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    /// The label exactly as the server sent it.
    pub label: String,
    /// Confidence on a 0-100 scale, as sent by the server.
    pub confidence: f64,
}

impl DetectionReport {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.label)
    }
}

/// Formats a confidence value for display, without a percent sign.
///
/// Whole numbers drop the fractional part (`87` rather than `87.0`);
/// fractional values are shown as sent.
#[must_use]
pub fn format_confidence(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Converts a confidence value to a bar fill on a 0-100 scale.
///
/// The displayed text shows the server value as-given, but a proportional
/// layout cannot express out-of-range fractions, so the fill saturates.
#[must_use]
pub fn confidence_fill(value: f64) -> u16 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file(name: &str, mime: &str, size: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/tmp/{name}")),
            name: name.to_string(),
            mime_type: mime.to_string(),
            size_bytes: size,
        }
    }

    #[test]
    fn mime_mapping_covers_accepted_extensions() {
        assert_eq!(mime_from_extension("jpg"), "image/jpeg");
        assert_eq!(mime_from_extension("JPEG"), "image/jpeg");
        assert_eq!(mime_from_extension("png"), "image/png");
        assert_eq!(mime_from_extension("wav"), "audio/wav");
        assert_eq!(mime_from_extension("mp3"), "audio/mpeg");
        assert_eq!(mime_from_extension("txt"), "application/octet-stream");
    }

    #[test]
    fn modality_from_path_routes_by_extension_family() {
        assert_eq!(
            Modality::from_path(Path::new("photo.PNG")),
            Some(Modality::Image)
        );
        assert_eq!(
            Modality::from_path(Path::new("clip.wav")),
            Some(Modality::Audio)
        );
        assert_eq!(Modality::from_path(Path::new("notes.txt")), None);
        assert_eq!(Modality::from_path(Path::new("no-extension")), None);
    }

    #[test]
    fn validation_requires_a_selection() {
        let result = validate_submission(Modality::Image, None);
        assert_eq!(result, Err(SubmitError::NoFileSelected));
    }

    #[test]
    fn validation_rejects_wrong_mime_type() {
        let file = sample_file("notes.txt", "application/octet-stream", 100);
        let result = validate_submission(Modality::Image, Some(&file));
        assert_eq!(result, Err(SubmitError::UnsupportedFileType));

        // An image is not a valid audio submission either
        let image = sample_file("photo.png", "image/png", 100);
        let result = validate_submission(Modality::Audio, Some(&image));
        assert_eq!(result, Err(SubmitError::UnsupportedFileType));
    }

    #[test]
    fn validation_rejects_oversized_file() {
        let file = sample_file("big.png", "image/png", MAX_UPLOAD_BYTES + 1);
        let result = validate_submission(Modality::Image, Some(&file));
        assert_eq!(result, Err(SubmitError::FileTooLarge));
    }

    #[test]
    fn validation_accepts_file_at_exact_size_limit() {
        let file = sample_file("exact.png", "image/png", MAX_UPLOAD_BYTES);
        assert!(validate_submission(Modality::Image, Some(&file)).is_ok());
    }

    #[test]
    fn validation_accepts_valid_audio_file() {
        let file = sample_file("clip.wav", "audio/wav", 2 * 1024 * 1024);
        assert!(validate_submission(Modality::Audio, Some(&file)).is_ok());
    }

    #[test]
    fn type_check_runs_before_size_check() {
        let file = sample_file("huge.txt", "application/octet-stream", MAX_UPLOAD_BYTES + 1);
        let result = validate_submission(Modality::Image, Some(&file));
        assert_eq!(result, Err(SubmitError::UnsupportedFileType));
    }

    #[test]
    fn verdict_matches_real_case_insensitively() {
        assert_eq!(Verdict::from_label("REAL"), Verdict::Real);
        assert_eq!(Verdict::from_label("real"), Verdict::Real);
        assert_eq!(Verdict::from_label("Real"), Verdict::Real);
        assert_eq!(Verdict::from_label("FAKE"), Verdict::Fake);
        assert_eq!(Verdict::from_label("anything else"), Verdict::Fake);
    }

    #[test]
    fn verdict_keys_are_modality_specific() {
        assert_eq!(
            Verdict::Real.i18n_key(Modality::Image),
            "verdict-real-image"
        );
        assert_eq!(
            Verdict::Fake.i18n_key(Modality::Audio),
            "verdict-fake-audio"
        );
    }

    #[test]
    fn submit_error_keys_name_the_modality_for_validation() {
        assert_eq!(
            SubmitError::NoFileSelected.i18n_key(Modality::Audio),
            "error-no-file-audio"
        );
        assert_eq!(
            SubmitError::UnsupportedFileType.i18n_key(Modality::Image),
            "error-invalid-type-image"
        );
        assert_eq!(
            SubmitError::FileTooLarge.i18n_key(Modality::Image),
            "error-file-too-large"
        );
    }

    #[test]
    fn submit_error_classification() {
        assert!(SubmitError::NoFileSelected.is_validation());
        assert!(SubmitError::FileTooLarge.is_validation());
        assert!(!SubmitError::Server("model not loaded".into()).is_validation());
        assert!(!SubmitError::Network("connection refused".into()).is_validation());
        assert_eq!(
            SubmitError::Server("boom".into()).detail(),
            Some("boom")
        );
        assert_eq!(SubmitError::NoFileSelected.detail(), None);
    }

    #[test]
    fn confidence_formatting_drops_trailing_zero() {
        assert_eq!(format_confidence(87.0), "87");
        assert_eq!(format_confidence(87.5), "87.5");
        assert_eq!(format_confidence(0.0), "0");
        assert_eq!(format_confidence(99.99), "99.99");
    }

    #[test]
    fn confidence_fill_saturates_out_of_range_values() {
        assert_eq!(confidence_fill(87.0), 87);
        assert_eq!(confidence_fill(87.5), 88);
        assert_eq!(confidence_fill(-5.0), 0);
        assert_eq!(confidence_fill(140.0), 100);
        assert_eq!(confidence_fill(f64::NAN), 0);
    }

    #[test]
    fn selected_file_from_path_reads_metadata() {
        use std::io::Write;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::File::create(&path)
            .expect("create file")
            .write_all(&[0_u8; 64])
            .expect("write file");

        let file = SelectedFile::from_path(&path).expect("selection");
        assert_eq!(file.name, "photo.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size_bytes, 64);
    }

    #[test]
    fn selected_file_from_path_rejects_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(SelectedFile::from_path(dir.path()).is_err());
    }
}
