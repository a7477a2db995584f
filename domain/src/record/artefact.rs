//! Artefact record entity
//!
//! One entry of the `record` array in a finds.org.uk JSON response. Only the
//! fields needed to build a figure and a caption are kept; everything else in
//! the payload is ignored on deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Image size variant served by finds.org.uk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    /// Resized copy under `<imagedir>medium/`
    Medium,
    /// The original upload under `<imagedir>`
    Original,
}

/// A physical find described by the Portable Antiquities Scheme database
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtefactRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Human-facing find reference, e.g. `LIN-D92A22`
    #[serde(default, rename = "old_findID", deserialize_with = "lenient_string")]
    pub find_id: Option<String>,
    #[serde(default, rename = "objecttype", deserialize_with = "lenient_string")]
    pub object_type: Option<String>,
    #[serde(default, rename = "broadperiod", deserialize_with = "lenient_string")]
    pub broad_period: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub county: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, rename = "imagedir", deserialize_with = "lenient_string")]
    pub image_directory: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: Option<String>,
}

impl ArtefactRecord {
    /// Parse a record from the JSON object finds.org.uk returns for it
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Whether an image can be shown for this record
    pub fn has_image(&self) -> bool {
        non_empty(&self.image_directory).is_some() && non_empty(&self.filename).is_some()
    }

    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    pub fn find_id(&self) -> Option<&str> {
        non_empty(&self.find_id)
    }

    pub fn object_type(&self) -> Option<&str> {
        non_empty(&self.object_type)
    }

    pub fn broad_period(&self) -> Option<&str> {
        non_empty(&self.broad_period)
    }

    pub fn county(&self) -> Option<&str> {
        non_empty(&self.county)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Site-relative path of the image, `None` when [`has_image`](Self::has_image) is false.
    pub fn image_path(&self, variant: ImageVariant) -> Option<String> {
        let dir = non_empty(&self.image_directory)?;
        let file = non_empty(&self.filename)?;
        let dir = dir.trim_matches('/');
        Some(match variant {
            ImageVariant::Medium => format!("{dir}/medium/{file}"),
            ImageVariant::Original => format!("{dir}/{file}"),
        })
    }

    /// Site-relative path of the record page
    pub fn record_path(&self) -> Option<String> {
        self.id()
            .map(|id| format!("database/artefacts/record/id/{id}"))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// finds.org.uk is inconsistent about quoting numbers; accept strings,
/// numbers and null for text fields.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
