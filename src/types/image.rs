//! Image payload.

use bytes::Bytes;
use std::fmt;

/// An encoded image and its format (e.g. "png", "jpeg").
///
/// The payload is reference counted, so clones share the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub format: String,
    pub data: Bytes,
}

impl Image {
    pub fn new(format: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            format: format.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} image ({} bytes)", self.format, self.data.len())
    }
}
