//! Top-level topic modes and their colour palettes.
//!
//! The split page shows exactly one [`MainSection`] at a time. Everything that
//! differs between modes (navigation set, palette, titles) is a pure function of
//! the mode, so the rendering layer never has to branch on anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;
use crate::nav::IconKind;

/// Mutually exclusive top-level content groupings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainSection {
    /// Smartphone dependency psychology
    #[default]
    Nomofobia,
    /// History and comparison of digital storage media
    Almacenamiento,
    /// Card and page based multimedia tools
    Multimedia,
}

impl MainSection {
    /// All modes in switcher order.
    pub const ALL: [MainSection; 3] = [
        MainSection::Nomofobia,
        MainSection::Almacenamiento,
        MainSection::Multimedia,
    ];

    /// Returns the lowercase label used in configuration and on the command line.
    pub fn as_label(&self) -> &'static str {
        match self {
            MainSection::Nomofobia => "nomofobia",
            MainSection::Almacenamiento => "almacenamiento",
            MainSection::Multimedia => "multimedia",
        }
    }

    /// Short label shown on the mode switcher buttons.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            MainSection::Nomofobia => "Nomofobia",
            MainSection::Almacenamiento => "Almacenamiento",
            MainSection::Multimedia => "Multimedia",
        }
    }

    /// Palette and titles for this mode.
    pub fn theme(&self) -> &'static Theme {
        match self {
            MainSection::Nomofobia => &NOMOFOBIA_THEME,
            MainSection::Almacenamiento => &ALMACENAMIENTO_THEME,
            MainSection::Multimedia => &MULTIMEDIA_THEME,
        }
    }
}

impl fmt::Display for MainSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for MainSection {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        MainSection::ALL
            .into_iter()
            .find(|mode| mode.as_label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseModeError {
                label: s.to_string(),
            })
    }
}

/// Visual identity of a mode.
///
/// `accent` and `gradient` are CSS tokens: the stylesheet defines
/// `.accent-<token>` and `.gradient-<token>` classes for each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Accent colour token (active nav item, switcher button, header icon)
    pub accent: &'static str,
    /// Gradient token (hero title, call-to-action, scroll-to-top button)
    pub gradient: &'static str,
    /// Header title
    pub title: &'static str,
    /// Footer title
    pub footer_title: &'static str,
    /// Footer tagline
    pub tagline: &'static str,
    /// Brand icon shown in the header and footer
    pub icon: IconKind,
}

static NOMOFOBIA_THEME: Theme = Theme {
    accent: "blue",
    gradient: "blue-teal",
    title: "Nomofobia",
    footer_title: "Nomofobia",
    tagline: "Promoviendo un uso consciente y saludable de la tecnología",
    icon: IconKind::Smartphone,
};

static ALMACENAMIENTO_THEME: Theme = Theme {
    accent: "purple",
    gradient: "purple-indigo",
    title: "Almacenamiento",
    footer_title: "Almacenamiento Digital",
    tagline: "Explorando la evolución del almacenamiento de datos",
    icon: IconKind::HardDrive,
};

static MULTIMEDIA_THEME: Theme = Theme {
    accent: "green",
    gradient: "green-teal",
    title: "Herramientas Multimedia",
    footer_title: "Herramientas Multimedia",
    tagline: "Plataformas interactivas para potenciar tu creatividad",
    icon: IconKind::Layout,
};
