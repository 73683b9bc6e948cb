//! Wire types for the models endpoint.

use serde::Deserialize;

/// A single model entry. Provider fields other than `id` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    pub id: String,
}

#[cfg(test)]
impl ModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body of a successful `GET /models` response.
#[derive(Debug, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}
