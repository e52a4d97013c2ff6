use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One rendered operation: an optional group heading, a label and its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<String>,
    pub label: String,
    pub result: serde_json::Value,
}

/// The ordered output of a demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub generated_at: DateTime<Utc>, // informational only
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            generated_at: Utc::now(),
            sections,
        }
    }

    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Content hash over the sections only, so two runs on the same sample
    /// data agree regardless of when they happened.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(&self.sections)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}
