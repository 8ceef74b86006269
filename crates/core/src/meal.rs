//! Meal submission record and boundary validation.
//!
//! The share form arrives as a [`MealForm`] with every field optional. The
//! checks run in a fixed order and stop at the first failure so the caller
//! gets exactly one human-readable message.

use crate::error::CoreError;
use crate::slug::slugify;

/// Image file extensions accepted for uploads (compared case-insensitively).
///
/// Raster formats only: stored images are served as-is from a public path,
/// so markup-capable types such as `svg` or `html` stay excluded.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "avif", "bmp", "heic", "heif", "tif", "tiff",
];

/// A binary attachment from the share form.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    /// Filename as sent by the browser.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw share form fields as received from the client.
///
/// Field names mirror the form: `name` is the creator name and `email` the
/// creator email.
#[derive(Debug, Clone, Default)]
pub struct MealForm {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<ImageUpload>,
}

/// A share form that passed validation.
///
/// Text fields are trimmed; `instructions` is still unsanitized.
#[derive(Debug, Clone)]
pub struct ValidMealSubmission {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    /// Lower-cased extension of the uploaded file.
    pub image_extension: String,
    pub image_bytes: Vec<u8>,
}

impl MealForm {
    /// Validate the form, returning the first failure as
    /// [`CoreError::Validation`].
    ///
    /// Order: title, summary, instructions, creator name, creator email,
    /// email `@`, image presence, image extension, derived slug.
    pub fn validate(self) -> Result<ValidMealSubmission, CoreError> {
        let title = require_text(self.title, "Title")?;
        let summary = require_text(self.summary, "Summary")?;
        let instructions = require_text(self.instructions, "Instructions")?;
        let creator = require_text(self.name, "Your name")?;
        let creator_email = require_text(self.email, "Your email")?;
        validate_email(&creator_email)?;

        let image = match self.image {
            Some(image) if !image.bytes.is_empty() => image,
            _ => {
                return Err(CoreError::Validation(
                    "An image is required. Please pick an image file.".into(),
                ))
            }
        };
        let image_extension = image_extension(&image.file_name)?;

        let slug = slugify(&title);
        if slug.is_empty() {
            return Err(CoreError::Validation(
                "Title must contain at least one letter or digit".into(),
            ));
        }

        Ok(ValidMealSubmission {
            slug,
            title,
            summary,
            instructions,
            creator,
            creator_email,
            image_extension,
            image_bytes: image.bytes,
        })
    }
}

/// Require a field to be present and non-blank, returning it trimmed.
fn require_text(value: Option<String>, label: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(CoreError::Validation(format!("{label} is required"))),
    }
}

/// The creator email only has to contain an `@`.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Extract and check the extension of an uploaded image filename.
///
/// Returns the extension lower-cased.
pub fn image_extension(file_name: &str) -> Result<String, CoreError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported image file '{file_name}'. Supported: {}",
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        )))
    }
}
