//! Layered validation of image uploads.
//!
//! Every check is a pure function of its inputs. A candidate is accepted only
//! when extension, declared MIME type, size and (server side) byte signature
//! all agree; the first failing check decides the outcome.

use std::fmt;

use serde::Serialize;

use super::{
    context::UploadContext,
    formats::{self, allowed_extensions},
};

/// 50 KiB. Smaller files are placeholders or truncated stubs.
pub const MIN_FILE_SIZE: u64 = 50 * 1024;
/// 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    NoExtension,
    InvalidExtension,
    InvalidMimeType,
    FileTooSmall,
    FileTooLarge,
    UnsupportedType,
    ContentMismatch,
}

impl ValidationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorCode::NoExtension => "NO_EXTENSION",
            ValidationErrorCode::InvalidExtension => "INVALID_EXTENSION",
            ValidationErrorCode::InvalidMimeType => "INVALID_MIME_TYPE",
            ValidationErrorCode::FileTooSmall => "FILE_TOO_SMALL",
            ValidationErrorCode::FileTooLarge => "FILE_TOO_LARGE",
            ValidationErrorCode::UnsupportedType => "UNSUPPORTED_TYPE",
            ValidationErrorCode::ContentMismatch => "CONTENT_MISMATCH",
        }
    }

    /// User-facing message, in the product's locale.
    pub fn message(&self) -> String {
        match self {
            ValidationErrorCode::NoExtension => "Soubor nemá příponu.".to_string(),
            ValidationErrorCode::InvalidExtension => format!(
                "Nepovolená přípona souboru. Povolené: {}. Soubory SVG nejsou z bezpečnostních důvodů povoleny.",
                allowed_extensions().collect::<Vec<_>>().join(", ")
            ),
            ValidationErrorCode::InvalidMimeType => {
                "Neplatný typ souboru. Nahrajte obrázek JPG, PNG, GIF nebo WEBP.".to_string()
            }
            ValidationErrorCode::FileTooSmall => format!(
                "Soubor je příliš malý. Minimální velikost je {} KB.",
                MIN_FILE_SIZE / 1024
            ),
            ValidationErrorCode::FileTooLarge => format!(
                "Soubor je příliš velký. Maximální velikost je {} MB.",
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            ValidationErrorCode::UnsupportedType => "Nepodporovaný typ obrázku.".to_string(),
            ValidationErrorCode::ContentMismatch => {
                "Obsah souboru neodpovídá deklarovanému typu obrázku. Soubor může být poškozený nebo jde o jiný typ souboru."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ValidationErrorCode>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_code: None,
            error_message: None,
        }
    }

    pub fn rejected(code: ValidationErrorCode) -> Self {
        Self {
            is_valid: false,
            error_code: Some(code),
            error_message: Some(code.message()),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrorCode> {
        match self.error_code {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }
}

impl From<Result<(), ValidationErrorCode>> for ValidationOutcome {
    fn from(result: Result<(), ValidationErrorCode>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::valid(),
            Err(code) => ValidationOutcome::rejected(code),
        }
    }
}

/// Metadata-only pre-check. Fast feedback for the browser, never a trust
/// boundary: content bytes are not inspected.
pub fn validate_client_side(filename: &str, mime_type: &str, byte_size: u64) -> ValidationOutcome {
    check_metadata(filename, mime_type, byte_size, UploadContext::default()).into()
}

/// Authoritative check, re-run on the server regardless of any client result.
pub fn validate_server_side(
    declared_filename: &str,
    declared_mime_type: &str,
    byte_size: u64,
    content: &[u8],
    context: UploadContext,
) -> ValidationOutcome {
    check_metadata(declared_filename, declared_mime_type, byte_size, context)
        .and_then(|()| check_content(content, declared_mime_type))
        .into()
}

/// Lowercased suffix after the last `.`; `None` without a dot or with an
/// empty suffix.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, suffix)| suffix.to_lowercase())
        .filter(|suffix| !suffix.is_empty())
}

fn check_metadata(
    filename: &str,
    mime_type: &str,
    byte_size: u64,
    context: UploadContext,
) -> Result<(), ValidationErrorCode> {
    check_extension(filename)?;
    check_mime_type(mime_type)?;
    check_size(byte_size, context)
}

fn check_extension(filename: &str) -> Result<(), ValidationErrorCode> {
    let extension = file_extension(filename).ok_or(ValidationErrorCode::NoExtension)?;
    if !formats::is_allowed_extension(&extension) {
        return Err(ValidationErrorCode::InvalidExtension);
    }
    Ok(())
}

fn check_mime_type(mime_type: &str) -> Result<(), ValidationErrorCode> {
    if !formats::is_allowed_mime_type(mime_type) {
        return Err(ValidationErrorCode::InvalidMimeType);
    }
    Ok(())
}

fn size_bounds(context: UploadContext) -> (u64, u64) {
    match context {
        UploadContext::Poster | UploadContext::Avatar => (MIN_FILE_SIZE, MAX_FILE_SIZE),
    }
}

fn check_size(byte_size: u64, context: UploadContext) -> Result<(), ValidationErrorCode> {
    let (min, max) = size_bounds(context);
    if byte_size < min {
        return Err(ValidationErrorCode::FileTooSmall);
    }
    if byte_size > max {
        return Err(ValidationErrorCode::FileTooLarge);
    }
    Ok(())
}

// Signatures come from the declared type's entry, never from sniffing.
fn check_content(content: &[u8], declared_mime_type: &str) -> Result<(), ValidationErrorCode> {
    let spec = formats::spec_for_mime_type(declared_mime_type)
        .filter(|spec| !spec.signatures.is_empty())
        .ok_or(ValidationErrorCode::UnsupportedType)?;

    if !spec.matches_content(content) {
        return Err(ValidationErrorCode::ContentMismatch);
    }
    Ok(())
}
