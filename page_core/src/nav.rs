//! Navigation catalogs.
//!
//! Each mode owns a fixed, ordered list of [`NavigationItem`]s. The order is the
//! document order of the section anchors, which is also the order the scroll
//! tracker walks when deciding which section is active.

use serde::Serialize;

use crate::mode::MainSection;

/// Symbolic icon reference. The rendering layer maps each kind to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Home,
    BookOpen,
    AlertTriangle,
    Heart,
    Brain,
    Shield,
    User,
    Smartphone,
    HardDrive,
    Database,
    Disc,
    Usb,
    Save,
    SdCard,
    Layout,
    Menu,
    Close,
    ArrowUp,
}

/// One entry of the section navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Section anchor id
    pub id: &'static str,
    /// Visible label
    pub label: &'static str,
    /// Icon shown next to the label
    pub icon: IconKind,
}

const fn item(id: &'static str, label: &'static str, icon: IconKind) -> NavigationItem {
    NavigationItem { id, label, icon }
}

/// Anchor of the hero section every mode starts with.
pub const HOME_SECTION: &str = "inicio";

const NOMOFOBIA_ITEMS: &[NavigationItem] = &[
    item(HOME_SECTION, "Inicio", IconKind::Home),
    item("definicion", "Definición", IconKind::BookOpen),
    item("sintomas", "Síntomas", IconKind::AlertTriangle),
    item("causas", "Causas", IconKind::Brain),
    item("tips", "Tips", IconKind::Shield),
    item("experiencia", "Experiencia", IconKind::User),
];

const ALMACENAMIENTO_ITEMS: &[NavigationItem] = &[
    item(HOME_SECTION, "Inicio", IconKind::Home),
    item("tipos-almacenamiento", "Tipos", IconKind::HardDrive),
    item("evolucion", "Evolución", IconKind::Database),
    item("comparacion", "Comparación", IconKind::Disc),
];

const MULTIMEDIA_ITEMS: &[NavigationItem] = &[
    item(HOME_SECTION, "Inicio", IconKind::Home),
    item("herramientas-multimedia", "Herramientas", IconKind::Layout),
    item("ventajas-multimedia", "Ventajas", IconKind::Brain),
];

/// Navigation items of a single mode, in document order.
pub fn nav_items(mode: MainSection) -> &'static [NavigationItem] {
    match mode {
        MainSection::Nomofobia => NOMOFOBIA_ITEMS,
        MainSection::Almacenamiento => ALMACENAMIENTO_ITEMS,
        MainSection::Multimedia => MULTIMEDIA_ITEMS,
    }
}

/// Section the hero call-to-action of a mode jumps to (its first content section).
pub fn hero_target(mode: MainSection) -> &'static str {
    nav_items(mode)
        .iter()
        .map(|item| item.id)
        .find(|id| *id != HOME_SECTION)
        .unwrap_or(HOME_SECTION)
}

/// Items of one mode as shown in the merged page's sub-navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub mode: MainSection,
    pub items: Vec<NavigationItem>,
}

/// Sub-navigation groups of the merged page.
///
/// Anchor ids are unique on the merged page, so the shared hero anchor only
/// appears in the first group.
pub fn merged_groups() -> Vec<NavigationGroup> {
    let mut seen: Vec<&'static str> = Vec::new();
    MainSection::ALL
        .into_iter()
        .map(|mode| {
            let items = nav_items(mode)
                .iter()
                .filter(|item| {
                    if seen.contains(&item.id) {
                        false
                    } else {
                        seen.push(item.id);
                        true
                    }
                })
                .copied()
                .collect();
            NavigationGroup { mode, items }
        })
        .collect()
}

/// Flat navigation of the merged page, in document order.
pub fn merged_items() -> Vec<NavigationItem> {
    merged_groups()
        .into_iter()
        .flat_map(|group| group.items)
        .collect()
}
