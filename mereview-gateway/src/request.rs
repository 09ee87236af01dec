//! Transport-neutral description of one outgoing request.
//!
//! Operations build an [`ApiRequest`]; the [`HttpTransport`](crate::transport::HttpTransport)
//! turns it into bytes on the wire.

use reqwest::Method;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Structured payload transmitted as-is (`application/json`).
    Json(serde_json::Value),
    /// Payload already serialised to text before transmission.
    Text(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "json",
            Self::Text(_) => "text",
            Self::Multipart(_) => "multipart",
        }
    }
}

/// An image file attached to a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
        content_type: Option<String>,
    },
    File {
        name: String,
        upload: ImageUpload,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    pub parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
            content_type: None,
        });
        self
    }

    /// A text part declared as `application/json`, for backends that bind a
    /// JSON object from one part of the form.
    pub fn json(mut self, name: impl Into<String>, value: String) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value,
            content_type: Some("application/json".into()),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, upload: ImageUpload) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            upload,
        });
        self
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name() == name)
    }
}
