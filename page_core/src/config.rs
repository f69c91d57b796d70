//! Page configuration.
//!
//! Every field has a default matching the observed page, so an empty document
//! (or no document at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;
use crate::layout::ScrollBehavior;
use crate::mode::MainSection;
use crate::nav::{self, HOME_SECTION};

/// Pixels hidden under the fixed header.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;
/// Scroll offset past which the scroll-to-top button shows.
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Which page layout is served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// One mode at a time, switched from the header
    #[default]
    Split,
    /// Every mode on one long page
    Merged,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub variant: PageVariant,
    /// Added to the scroll offset before hit-testing sections
    pub header_offset: f64,
    /// The button shows once the scroll offset is strictly greater than this
    pub scroll_top_threshold: f64,
    /// Mode shown on first render (split variant)
    pub initial_mode: MainSection,
    /// Active section before the first scroll event
    pub initial_section: String,
    /// Animate programmatic scrolls
    pub smooth_scroll: bool,
    /// Browser console log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            variant: PageVariant::default(),
            header_offset: DEFAULT_HEADER_OFFSET,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            initial_mode: MainSection::default(),
            initial_section: HOME_SECTION.to_string(),
            smooth_scroll: true,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pixels("header_offset", self.header_offset)?;
        check_pixels("scroll_top_threshold", self.scroll_top_threshold)?;
        if self.initial_section.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "initial_section",
                reason: "must not be empty".into(),
            });
        }
        if !self.section_ids().any(|id| id == self.initial_section) {
            return Err(ConfigError::Invalid {
                field: "initial_section",
                reason: format!(
                    "`{}` is not a section of the {} page",
                    self.initial_section,
                    match self.variant {
                        PageVariant::Split => self.initial_mode.as_label(),
                        PageVariant::Merged => "merged",
                    }
                ),
            });
        }
        if self.log_level.parse::<Level>().is_err() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("`{}` is not a log level", self.log_level),
            });
        }
        Ok(())
    }

    /// Anchors the first render can land on.
    fn section_ids(&self) -> impl Iterator<Item = &'static str> {
        let items = match self.variant {
            PageVariant::Split => nav::nav_items(self.initial_mode).to_vec(),
            PageVariant::Merged => nav::merged_items(),
        };
        items.into_iter().map(|item| item.id)
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }

    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

fn check_pixels(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite, non-negative pixel value, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.variant, PageVariant::Split);
        assert_eq!(config.header_offset, 100.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.initial_mode, MainSection::Nomofobia);
        assert_eq!(config.initial_section, "inicio");
        assert_eq!(config.scroll_behavior(), ScrollBehavior::Smooth);
        assert_eq!(config.max_level(), Level::INFO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"variant":"merged","initial_mode":"multimedia","smooth_scroll":false,"log_level":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.variant, PageVariant::Merged);
        assert_eq!(config.initial_mode, MainSection::Multimedia);
        assert_eq!(config.scroll_behavior(), ScrollBehavior::Instant);
        assert_eq!(config.max_level(), Level::DEBUG);
        assert_eq!(config.header_offset, DEFAULT_HEADER_OFFSET);
    }

    #[test]
    fn test_rejects_negative_offset() {
        let err = PageConfig::from_json(r#"{"header_offset":-1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "header_offset", .. }));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = PageConfig::from_json(r#"{"initial_mode":"podcasts"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_blank_initial_section() {
        let err = PageConfig::from_json(r#"{"initial_section":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("initial_section"));
    }

    #[test]
    fn test_rejects_unknown_initial_section() {
        let err = PageConfig::from_json(r#"{"initial_section":"nope"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "initial_section", .. }));
        assert_eq!(
            err.to_string(),
            "invalid page config field `initial_section`: `nope` is not a section of the nomofobia page"
        );
    }

    #[test]
    fn test_initial_section_follows_initial_mode() {
        let json = r#"{"initial_mode":"multimedia","initial_section":"evolucion"}"#;
        let err = PageConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("multimedia page"));

        let config = PageConfig::from_json(
            r#"{"initial_mode":"almacenamiento","initial_section":"evolucion"}"#,
        )
        .unwrap();
        assert_eq!(config.initial_section, "evolucion");
    }

    #[test]
    fn test_merged_page_accepts_any_mode_section() {
        let json = r#"{"variant":"merged","initial_section":"ventajas-multimedia"}"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.initial_mode, MainSection::Nomofobia);
        assert_eq!(config.initial_section, "ventajas-multimedia");
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let err = PageConfig::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
    }
}
