//! Service categories and the content files that back them.
//!
//! Each file names its array differently (`academyServices`,
//! `PayrollServices`, `intelligenceServices`, `talentacquisitionServices`).
//! The keys are matched exactly as the files spell them.

/// Where a collection lives inside the content directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSource {
    pub file_name: &'static str,
    /// Top-level field holding the array; `None` when the file is the array.
    pub key: Option<&'static str>,
}

pub const PUBLICATIONS: CollectionSource = CollectionSource {
    file_name: "publications.json",
    key: None,
};

/// How a service page frames its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// Title, last-updated date and read time above the sections.
    Article,
    /// Sections only, on a plain white wrapper.
    Landing,
    /// Sections only, wrapper coloured from the record's theme.
    ThemedLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Academy,
    Payroll,
    Intelligence,
    TalentAcquisition,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Academy,
        Category::Payroll,
        Category::Intelligence,
        Category::TalentAcquisition,
    ];

    /// URL path segment.
    pub fn segment(&self) -> &'static str {
        match self {
            Category::Academy => "academy",
            Category::Payroll => "payroll",
            Category::Intelligence => "intelligence",
            Category::TalentAcquisition => "talent-acquisition",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.segment() == segment)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Academy => "Academy",
            Category::Payroll => "Payroll",
            Category::Intelligence => "Intelligence",
            Category::TalentAcquisition => "Talent Acquisition",
        }
    }

    pub fn source(&self) -> CollectionSource {
        match self {
            Category::Academy => CollectionSource {
                file_name: "academyData.json",
                key: Some("academyServices"),
            },
            Category::Payroll => CollectionSource {
                file_name: "payrollData.json",
                key: Some("PayrollServices"),
            },
            Category::Intelligence => CollectionSource {
                file_name: "IntelligenceData.json",
                key: Some("intelligenceServices"),
            },
            Category::TalentAcquisition => CollectionSource {
                file_name: "talentData.json",
                key: Some("talentacquisitionServices"),
            },
        }
    }

    pub fn layout(&self) -> PageLayout {
        match self {
            Category::Academy => PageLayout::Article,
            Category::Payroll => PageLayout::Landing,
            Category::Intelligence | Category::TalentAcquisition => PageLayout::ThemedLanding,
        }
    }

    /// Noun used in the not-found description; academy pages use none.
    pub fn not_found_noun(&self) -> Option<&'static str> {
        match self {
            Category::Academy => None,
            Category::Payroll => Some("payroll"),
            Category::Intelligence => Some("intelligence"),
            Category::TalentAcquisition => Some("talent acquisition"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_segment(category.segment()), Some(category));
        }
        assert_eq!(Category::from_segment("publication"), None);
        assert_eq!(Category::from_segment("Academy"), None);
    }

    #[test]
    fn test_keys_keep_file_casing() {
        assert_eq!(Category::Payroll.source().key, Some("PayrollServices"));
        assert_eq!(Category::TalentAcquisition.source().key, Some("talentacquisitionServices"));
        assert_eq!(PUBLICATIONS.key, None);
    }
}
