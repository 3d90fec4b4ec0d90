//! Request body extraction: buffered multipart forms and JSON-or-form bodies.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Map an extractor rejection onto [`AppError`], keeping 413 for oversized
/// bodies and reporting everything else as a bad request.
fn rejected(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

/// A file part received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file arrived in.
    pub field: String,
    /// File name supplied by the client, if any.
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// A fully buffered request form.
///
/// Text parts keep their arrival order. A part counts as a file when the
/// client sent a `filename` for it. File inputs left empty by a browser
/// (empty name and no content) are dropped.
///
/// As an extractor it also accepts JSON objects and URL-encoded bodies,
/// which yield text fields only. A request without a `Content-Type`
/// yields an empty form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    files: Vec<UploadedFile>,
}

impl MultipartForm {
    /// Read every part of `multipart` into memory.
    ///
    /// More than one file in the same field is rejected.
    pub async fn collect(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);
            match file_name {
                Some(file_name) => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| rejected(e.status(), e.body_text()))?;
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    if form.files.iter().any(|f| f.field == name) {
                        return Err(AppError::BadRequest(format!(
                            "Only one file is accepted in field '{name}'"
                        )));
                    }
                    form.files.push(UploadedFile {
                        field: name,
                        file_name: Some(file_name).filter(|n| !n.is_empty()),
                        data,
                    });
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| rejected(e.status(), e.body_text()))?;
                    form.fields.push((name, text));
                }
            }
        }

        Ok(form)
    }

    /// Value of a text field. When a field repeats, the last value wins.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a text field, returning its last value.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        let mut value = None;
        self.fields.retain_mut(|(n, v)| {
            if n == name {
                value = Some(std::mem::take(v));
                false
            } else {
                true
            }
        });
        value
    }

    /// Remove the file received in `field`.
    pub fn take_file(&mut self, field: &str) -> Option<UploadedFile> {
        let idx = self.files.iter().position(|f| f.field == field)?;
        Some(self.files.remove(idx))
    }

    /// Text fields in arrival order.
    pub fn text_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Consume the form, returning its files in arrival order.
    pub fn into_files(self) -> Vec<UploadedFile> {
        self.files
    }
}

impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Empty => Ok(Self::default()),
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                Self::collect(multipart).await
            }
            BodyKind::Json => {
                let Json(object) =
                    Json::<BTreeMap<String, Option<FieldValue>>>::from_request(req, state)
                        .await
                        .map_err(|e| rejected(e.status(), e.body_text()))?;
                let fields = object
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|v| (name, v.into_text())))
                    .collect();
                Ok(Self {
                    fields,
                    files: Vec::new(),
                })
            }
            BodyKind::Form => {
                let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                Ok(Self {
                    fields,
                    files: Vec::new(),
                })
            }
            BodyKind::Unsupported(content_type) => Err(AppError::BadRequest(format!(
                "Unsupported content type '{content_type}'"
            ))),
        }
    }
}

/// Body encodings understood by [`MultipartForm`].
#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Empty,
    Multipart,
    Json,
    Form,
    Unsupported(String),
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(CONTENT_TYPE) else {
            return Self::Empty;
        };
        let content_type = value.to_str().unwrap_or_default();
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "multipart/form-data" => Self::Multipart,
            "application/json" => Self::Json,
            "application/x-www-form-urlencoded" => Self::Form,
            _ => Self::Unsupported(content_type.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON or URL-encoded form
// ---------------------------------------------------------------------------

/// Body extractor accepting either `application/json` or
/// `application/x-www-form-urlencoded`.
///
/// Rejections of either format go through the same mapping as
/// [`MultipartForm`]: 413 for oversized bodies, 400 otherwise.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// A scalar body field that may arrive as text (forms) or as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// Convert an optional [`FieldValue`] into optional text.
pub fn text_of(value: Option<FieldValue>) -> Option<String> {
    value.map(FieldValue::into_text)
}
