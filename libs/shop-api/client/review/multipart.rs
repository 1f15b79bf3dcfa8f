//! Multipart form building for review create/update
//!
//! A [`ReviewForm`] is an ordered list of fields. Image uploads live under
//! [`UPLOADED_IMAGES_FIELD`] and become one part per file, in order. Every
//! other field becomes a single text part unless its value is absent, in
//! which case it is left out of the request entirely.

use super::super::error::{ApiError, Result};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Field name the backend reads uploaded review images from
pub const UPLOADED_IMAGES_FIELD: &str = "uploaded_images";

/// An image file to attach to a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// MIME type is guessed from the file extension
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ApiError::InvalidPayload(format!("no file name in path {}", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::InvalidPayload(format!("invalid MIME type: {}", e)))
    }
}

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Null or unset; never sent
    Absent,
    Text(String),
    Images(Vec<ImageUpload>),
}

impl FieldValue {
    /// Absent fields are dropped from the outgoing form
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// One part of the encoded form, borrowed from a [`ReviewForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPart<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, upload: &'a ImageUpload },
}

/// Ordered review fields plus image uploads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    fields: Vec<(String, FieldValue)>,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from any value that serializes to a JSON object
    ///
    /// Strings are sent as-is, numbers and booleans in their JSON spelling,
    /// nested arrays/objects as JSON text. `null` fields are kept as absent
    /// and so never reach the wire. Images are attached separately with
    /// [`ReviewForm::images`]; an empty `uploaded_images` list is accepted and
    /// adds no parts.
    pub fn from_serializable<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        let value =
            serde_json::to_value(data).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(ApiError::InvalidPayload(
                "review form must serialize to a JSON object".to_string(),
            ));
        };

        let mut form = Self::new();
        for (key, value) in map {
            let field = match value {
                Value::Null => FieldValue::Absent,
                Value::Array(items) if key == UPLOADED_IMAGES_FIELD && items.is_empty() => {
                    FieldValue::Images(Vec::new())
                }
                _ if key == UPLOADED_IMAGES_FIELD => {
                    return Err(ApiError::InvalidPayload(format!(
                        "{} must be attached with ReviewForm::images",
                        UPLOADED_IMAGES_FIELD
                    )));
                }
                Value::String(s) => FieldValue::Text(s),
                Value::Bool(b) => FieldValue::Text(b.to_string()),
                Value::Number(n) => FieldValue::Text(n.to_string()),
                other => FieldValue::Text(other.to_string()),
            };
            form.set(key, field);
        }

        Ok(form)
    }

    /// Set a field, replacing an earlier value under the same key in place
    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn text(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, FieldValue::Text(value.to_string()));
        self
    }

    /// `None` behaves like [`ReviewForm::null`]
    pub fn optional<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        let value = match value {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Absent,
        };
        self.set(key, value);
        self
    }

    pub fn null(mut self, key: impl Into<String>) -> Self {
        self.set(key, FieldValue::Absent);
        self
    }

    /// Replace the image uploads
    pub fn images(mut self, uploads: impl IntoIterator<Item = ImageUpload>) -> Self {
        self.set(
            UPLOADED_IMAGES_FIELD,
            FieldValue::Images(uploads.into_iter().collect()),
        );
        self
    }

    /// Append one image after any already attached
    pub fn image(mut self, upload: ImageUpload) -> Self {
        match self
            .fields
            .iter_mut()
            .find(|(name, _)| name == UPLOADED_IMAGES_FIELD)
        {
            Some((_, FieldValue::Images(uploads))) => uploads.push(upload),
            Some((_, slot)) => *slot = FieldValue::Images(vec![upload]),
            None => self.fields.push((
                UPLOADED_IMAGES_FIELD.to_string(),
                FieldValue::Images(vec![upload]),
            )),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Number of parts the encoded form will contain
    pub fn part_count(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, value)| match value {
                FieldValue::Absent => 0,
                FieldValue::Text(_) => 1,
                FieldValue::Images(uploads) => uploads.len(),
            })
            .sum()
    }

    /// Parts in the order they will be sent
    pub fn parts(&self) -> Vec<FormPart<'_>> {
        let mut parts = Vec::new();
        for (name, value) in self.fields.iter().filter(|(_, v)| !v.is_absent()) {
            match value {
                FieldValue::Text(text) => parts.push(FormPart::Text {
                    name: name.as_str(),
                    value: text.as_str(),
                }),
                FieldValue::Images(uploads) => {
                    parts.extend(uploads.iter().map(|upload| FormPart::File {
                        name: name.as_str(),
                        upload,
                    }))
                }
                FieldValue::Absent => {}
            }
        }
        parts
    }

    /// Encode into a `reqwest` multipart form
    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields.into_iter().filter(|(_, v)| !v.is_absent()) {
            match value {
                FieldValue::Text(text) => form = form.text(name, text),
                FieldValue::Images(uploads) => {
                    for upload in uploads {
                        form = form.part(name.clone(), upload.into_part()?);
                    }
                }
                FieldValue::Absent => {}
            }
        }
        Ok(form)
    }
}
