use crate::content::{AnimationStyle, ServiceRecord, ThemeColors};

/// Page-wide values every section renderer receives.
///
/// Anything else a renderer shows comes from the section payload itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub animation_style: AnimationStyle,
    pub theme_colors: ThemeColors,
}

impl RenderContext {
    pub fn new(animation_style: AnimationStyle, theme_colors: ThemeColors) -> Self {
        Self {
            animation_style,
            theme_colors,
        }
    }

    pub fn for_record(record: &ServiceRecord) -> Self {
        Self::new(record.animation_style, record.theme_colors.clone())
    }
}
