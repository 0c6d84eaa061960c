//! Small text and layout rules shared by several renderers.

/// Paragraph delimiter inside `content` fields.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split long-form content into paragraphs.
///
/// Absent or empty content yields no paragraphs.
pub fn split_paragraphs(content: Option<&str>) -> Vec<&str> {
    match content {
        None | Some("") => Vec::new(),
        Some(text) => text.split(PARAGRAPH_DELIMITER).collect(),
    }
}

/// Which slot the image takes in an image-with-text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    First,
    Second,
}

impl ImagePlacement {
    /// `"right"` puts the image second; anything else, or nothing, puts it first.
    pub fn from_position(position: Option<&str>) -> Self {
        match position {
            Some("right") => ImagePlacement::Second,
            _ => ImagePlacement::First,
        }
    }

    pub fn image_first(&self) -> bool {
        matches!(self, ImagePlacement::First)
    }
}
