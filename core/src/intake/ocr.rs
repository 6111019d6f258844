use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const OCR_UNAVAILABLE_NOTE: &str = "OCR libraries unavailable in this environment.";

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcrOutcome {
    pub text: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Image-to-text collaborator. The core only ever sees the extracted text.
pub trait TextExtractor {
    fn is_available(&self) -> bool;
    fn extract_text(&self, image_bytes: &[u8]) -> CoreResult<String>;
}

/// Stand-in used when no OCR engine is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableExtractor;

impl TextExtractor for UnavailableExtractor {
    fn is_available(&self) -> bool {
        false
    }

    fn extract_text(&self, _image_bytes: &[u8]) -> CoreResult<String> {
        Err(CoreError::InvalidInput(OCR_UNAVAILABLE_NOTE.to_string()))
    }
}

pub fn run_ocr(extractor: &dyn TextExtractor, upload: &ImageUpload) -> CoreResult<OcrOutcome> {
    if !extractor.is_available() {
        return Ok(OcrOutcome {
            text: String::new(),
            language: "en".to_string(),
            note: Some(OCR_UNAVAILABLE_NOTE.to_string()),
        });
    }
    let is_image = upload
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("image/"));
    if !is_image {
        return Err(CoreError::InvalidInput(
            "please upload an image file".to_string(),
        ));
    }
    let text = extractor.extract_text(&upload.bytes)?;
    Ok(OcrOutcome {
        text: text.trim().to_string(),
        language: "en".to_string(),
        note: None,
    })
}
