use serde::{Deserialize, Serialize};

/// One portfolio entry. `title` is the identity key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub repository_link: String,
    pub demo_link: String,
    pub image_url: String,
}
