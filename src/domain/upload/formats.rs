//! Allowed raster image formats.
//!
//! Extensions, MIME types and magic numbers live together in [`IMAGE_FORMATS`]
//! so a format is either fully allowed or not at all. SVG is never listed: it is
//! markup a browser executes, not decoded raster data.

/// Fixed bytes expected at a fixed offset of the file content.
#[derive(Debug)]
pub struct Marker {
    pub offset: usize,
    pub bytes: &'static [u8],
}

impl Marker {
    pub fn matches(&self, content: &[u8]) -> bool {
        content
            .get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

#[derive(Debug)]
pub struct FormatSpec {
    pub format: ImageFormat,
    pub mime_type: &'static str,
    pub extensions: &'static [&'static str],
    /// Alternative layouts. Content matches when every marker of any one
    /// layout matches.
    pub signatures: &'static [&'static [Marker]],
}

impl FormatSpec {
    pub fn matches_content(&self, content: &[u8]) -> bool {
        self.signatures
            .iter()
            .any(|layout| !layout.is_empty() && layout.iter().all(|m| m.matches(content)))
    }
}

const JPEG_SOI: &[Marker] = &[Marker {
    offset: 0,
    bytes: &[0xFF, 0xD8, 0xFF],
}];

const PNG_HEADER: &[Marker] = &[Marker {
    offset: 0,
    bytes: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
}];

const GIF87A: &[Marker] = &[Marker {
    offset: 0,
    bytes: b"GIF87a",
}];

const GIF89A: &[Marker] = &[Marker {
    offset: 0,
    bytes: b"GIF89a",
}];

// RIFF alone also wraps AVI and WAV; the form type at offset 8 must be WEBP.
const WEBP_RIFF: &[Marker] = &[
    Marker {
        offset: 0,
        bytes: b"RIFF",
    },
    Marker {
        offset: 8,
        bytes: b"WEBP",
    },
];

pub static IMAGE_FORMATS: &[FormatSpec] = &[
    FormatSpec {
        format: ImageFormat::Jpeg,
        mime_type: "image/jpeg",
        extensions: &["jpg", "jpeg"],
        signatures: &[JPEG_SOI],
    },
    FormatSpec {
        format: ImageFormat::Png,
        mime_type: "image/png",
        extensions: &["png"],
        signatures: &[PNG_HEADER],
    },
    FormatSpec {
        format: ImageFormat::Gif,
        mime_type: "image/gif",
        extensions: &["gif"],
        signatures: &[GIF87A, GIF89A],
    },
    FormatSpec {
        format: ImageFormat::Webp,
        mime_type: "image/webp",
        extensions: &["webp"],
        signatures: &[WEBP_RIFF],
    },
];

pub fn allowed_extensions() -> impl Iterator<Item = &'static str> {
    IMAGE_FORMATS
        .iter()
        .flat_map(|spec| spec.extensions.iter().copied())
}

pub fn allowed_mime_types() -> impl Iterator<Item = &'static str> {
    IMAGE_FORMATS.iter().map(|spec| spec.mime_type)
}

pub fn is_allowed_extension(extension: &str) -> bool {
    allowed_extensions().any(|allowed| allowed == extension)
}

pub fn is_allowed_mime_type(mime_type: &str) -> bool {
    allowed_mime_types().any(|allowed| allowed == mime_type)
}

pub fn spec_for_mime_type(mime_type: &str) -> Option<&'static FormatSpec> {
    IMAGE_FORMATS.iter().find(|spec| spec.mime_type == mime_type)
}

pub fn spec_for_extension(extension: &str) -> Option<&'static FormatSpec> {
    let extension = extension.to_ascii_lowercase();
    IMAGE_FORMATS
        .iter()
        .find(|spec| spec.extensions.contains(&extension.as_str()))
}

/// Content type for serving a stored object, chosen from its extension.
pub fn content_type_for_path(path: &str) -> &'static str {
    path.rsplit_once('.')
        .and_then(|(_, extension)| spec_for_extension(extension))
        .map(|spec| spec.mime_type)
        .unwrap_or("application/octet-stream")
}
