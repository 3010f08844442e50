use serde::Deserialize;

/// `GET /get-sections`.
#[derive(Debug, Deserialize)]
pub struct SectionsResponse {
    #[serde(default)]
    pub sections: Vec<String>,
}
