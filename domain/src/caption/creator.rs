//! Caption creation for rendered records

use crate::core::string::sentence_case;
use crate::record::artefact::ArtefactRecord;
use crate::shortcode::attributes::CaptionOption;
use std::fmt;

/// Kind of record a caption is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Artefact,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Artefact => write!(f, "artefact"),
        }
    }
}

/// Produces the caption text shown under a figure
pub struct CaptionCreator;

impl CaptionCreator {
    /// Create the caption for `record`.
    ///
    /// - `Auto`: generated from the record's metadata
    /// - `Manual`: `caption_text`, or the generated caption when it is empty
    /// - `None`: empty string
    pub fn create(
        kind: RecordKind,
        record: &ArtefactRecord,
        option: CaptionOption,
        caption_text: &str,
    ) -> String {
        match option {
            CaptionOption::None => String::new(),
            CaptionOption::Manual if !caption_text.trim().is_empty() => {
                caption_text.trim().to_string()
            }
            CaptionOption::Manual | CaptionOption::Auto => Self::automatic(kind, record),
        }
    }

    /// e.g. `Roman brooch from Lincolnshire (LIN-D92A22)`
    fn automatic(kind: RecordKind, record: &ArtefactRecord) -> String {
        let mut caption = match (record.broad_period(), record.object_type()) {
            (Some(period), Some(object)) => {
                format!("{} {}", sentence_case(period), object.to_lowercase())
            }
            (None, Some(object)) => sentence_case(object),
            (Some(period), None) => format!("{} {}", sentence_case(period), kind),
            (None, None) => match record.id() {
                Some(id) => format!("{} {}", sentence_case(&kind.to_string()), id),
                None => sentence_case(&kind.to_string()),
            },
        };

        if let Some(county) = record.county() {
            caption.push_str(&format!(" from {county}"));
        }
        if let Some(find_id) = record.find_id() {
            caption.push_str(&format!(" ({find_id})"));
        }
        caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArtefactRecord {
        ArtefactRecord {
            id: Some("123456".to_string()),
            find_id: Some("LIN-D92A22".to_string()),
            object_type: Some("BROOCH".to_string()),
            broad_period: Some("ROMAN".to_string()),
            county: Some("Lincolnshire".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_caption() {
        let caption =
            CaptionCreator::create(RecordKind::Artefact, &record(), CaptionOption::Auto, "");
        assert_eq!(caption, "Roman brooch from Lincolnshire (LIN-D92A22)");
    }

    #[test]
    fn test_auto_ignores_caption_text() {
        let caption = CaptionCreator::create(
            RecordKind::Artefact,
            &record(),
            CaptionOption::Auto,
            "My brooch",
        );
        assert_eq!(caption, "Roman brooch from Lincolnshire (LIN-D92A22)");
    }

    #[test]
    fn test_manual_caption() {
        let caption = CaptionCreator::create(
            RecordKind::Artefact,
            &record(),
            CaptionOption::Manual,
            "Found near the river",
        );
        assert_eq!(caption, "Found near the river");
    }

    #[test]
    fn test_manual_without_text_falls_back_to_auto() {
        let caption =
            CaptionCreator::create(RecordKind::Artefact, &record(), CaptionOption::Manual, "  ");
        assert_eq!(caption, "Roman brooch from Lincolnshire (LIN-D92A22)");
    }

    #[test]
    fn test_no_caption() {
        let caption = CaptionCreator::create(
            RecordKind::Artefact,
            &record(),
            CaptionOption::None,
            "ignored",
        );
        assert!(caption.is_empty());
    }

    #[test]
    fn test_sparse_record() {
        let sparse = ArtefactRecord {
            id: Some("42".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CaptionCreator::create(RecordKind::Artefact, &sparse, CaptionOption::Auto, ""),
            "Artefact 42"
        );

        let period_only = ArtefactRecord {
            broad_period: Some("IRON AGE".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CaptionCreator::create(RecordKind::Artefact, &period_only, CaptionOption::Auto, ""),
            "Iron age artefact"
        );
    }
}
