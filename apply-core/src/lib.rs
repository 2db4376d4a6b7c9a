//! Logic lõi của trang "Application Timeline": nội dung các bước và quy tắc hiển thị.

pub mod content;
pub mod disclosure;

use serde::{Deserialize, Serialize};

pub use content::{
    button, description, link, timeline_steps, LinkKind, PageCopy, ProgramLink, StepContent,
    StepId, TimelineStep, PAGE_COPY, PLACEHOLDER_LINK,
};
pub use disclosure::{
    step_views, ExpandedSections, SectionAction, StepView, Viewport, SEE_LESS, SEE_MORE,
};

/// Breakpoint (pixel logic) phân biệt màn hình hẹp.
pub const DEFAULT_NARROW_BREAKPOINT: u32 = 768;

/// Cấu hình trang, có thể ghi đè từ phía JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Chiều rộng nhỏ hơn giá trị này được coi là màn hình hẹp.
    pub narrow_breakpoint: u32,
    /// Đường dẫn ảnh logo chương trình.
    pub logo_src: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            logo_src: "/images/logo.svg".to_string(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ApplyError> {
        if self.narrow_breakpoint == 0 {
            return Err(ApplyError::InvalidConfig(
                "narrow_breakpoint phải lớn hơn 0".to_string(),
            ));
        }
        if self.logo_src.trim().is_empty() {
            return Err(ApplyError::InvalidConfig("logo_src không được rỗng".to_string()));
        }
        Ok(())
    }

    pub fn classify(&self, width: f64) -> Viewport {
        Viewport::classify(width, self.narrow_breakpoint)
    }
}

/// Giá trị ghi đè một phần, nhận từ options của JavaScript.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PageOverrides {
    #[serde(default)]
    pub narrow_breakpoint: Option<u32>,
    #[serde(default)]
    pub logo_src: Option<String>,
}

impl From<PageOverrides> for PageConfig {
    fn from(overrides: PageOverrides) -> Self {
        let mut base = PageConfig::default();
        if let Some(breakpoint) = overrides.narrow_breakpoint {
            base.narrow_breakpoint = breakpoint;
        }
        if let Some(logo_src) = overrides.logo_src {
            base.logo_src = logo_src;
        }
        base
    }
}

/// Lỗi chung của trang.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("Không có bước nào mang tiêu đề {0:?}")]
    UnknownStep(String),
    #[error("Cấu hình không hợp lệ: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.narrow_breakpoint, 768);
        assert_eq!(config.classify(767.0), Viewport::Narrow);
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let config = PageConfig {
            narrow_breakpoint: 0,
            ..PageConfig::default()
        };
        assert!(matches!(config.validate(), Err(ApplyError::InvalidConfig(_))));
    }

    #[test]
    fn overrides_fill_missing_fields_from_defaults() {
        let config = PageConfig::from(PageOverrides {
            narrow_breakpoint: Some(640),
            logo_src: None,
        });
        assert_eq!(config.narrow_breakpoint, 640);
        assert_eq!(config.logo_src, PageConfig::default().logo_src);
        assert_eq!(PageConfig::from(PageOverrides::default()), PageConfig::default());
    }

    #[test]
    fn blank_logo_is_rejected() {
        let config = PageConfig {
            logo_src: "  ".to_string(),
            ..PageConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
