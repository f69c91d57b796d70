//! Card and page based multimedia tools.

use leptos::prelude::*;
use nomofobia_core::{IconKind, MainSection};

use super::hero::{Hero, HeroCopy};
use super::shared::{BulletList, SectionHeading};
use crate::icons::Icon;
use crate::page::PageHandle;
use crate::reveal::Reveal;

const MODE: MainSection = MainSection::Multimedia;

static HERO: HeroCopy = HeroCopy {
    mode: MODE,
    image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    image_alt: "Herramientas multimedia",
    subtitle: "Plataformas basadas en tarjetas y páginas interactivas para potenciar tu creatividad",
    call_to_action: "Explorar Herramientas",
};

struct Tool {
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    tint: &'static str,
    image: &'static str,
}

const TOOLS: &[Tool] = &[
    Tool {
        name: "Canva",
        description: "Herramienta de diseño gráfico con interfaz de tarjetas para crear presentaciones, infografías y contenido visual",
        features: &[
            "Plantillas prediseñadas",
            "Editor drag-and-drop",
            "Colaboración en tiempo real",
        ],
        tint: "cyan-blue",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Tool {
        name: "Notion",
        description: "Espacio de trabajo basado en bloques y páginas para organización de contenido multimedia y colaboración",
        features: &["Bloques modulares", "Bases de datos", "Integración multimedia"],
        tint: "gray-slate",
        image: "https://images.pexels.com/photos/270360/pexels-photo-270360.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Tool {
        name: "Trello",
        description: "Sistema de gestión visual basado en tarjetas tipo Kanban para organizar proyectos multimedia",
        features: &["Tableros visuales", "Tarjetas arrastrables", "Adjuntos multimedia"],
        tint: "blue-cyan",
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Tool {
        name: "Miro",
        description: "Pizarra digital colaborativa con tarjetas interactivas para brainstorming y diseño visual",
        features: &["Pizarra infinita", "Colaboración remota", "Plantillas visuales"],
        tint: "yellow-orange",
        image: "https://images.pexels.com/photos/7376/startup-photos.jpg?auto=compress&cs=tinysrgb&w=400",
    },
    Tool {
        name: "Prezi",
        description: "Plataforma de presentaciones con navegación no lineal basada en lienzos y zoom dinámico",
        features: &[
            "Presentaciones dinámicas",
            "Zoom interactivo",
            "Transiciones suaves",
        ],
        tint: "green-teal",
        image: "https://images.pexels.com/photos/7059/man-working-on-computer.jpg?auto=compress&cs=tinysrgb&w=400",
    },
    Tool {
        name: "Padlet",
        description: "Muro virtual interactivo con tarjetas multimedia para compartir y colaborar en contenido",
        features: &[
            "Muros personalizables",
            "Contenido multimedia",
            "Colaboración instantánea",
        ],
        tint: "pink-rose",
        image: "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

const ADVANTAGES: &[(IconKind, &str, &str)] = &[
    (
        IconKind::Layout,
        "Organización Visual",
        "Facilitan la estructuración y visualización de información compleja de manera intuitiva",
    ),
    (
        IconKind::User,
        "Colaboración",
        "Permiten trabajo en equipo en tiempo real con múltiples usuarios simultáneamente",
    ),
    (
        IconKind::Brain,
        "Flexibilidad",
        "Se adaptan a diferentes necesidades: educación, negocios, creatividad y más",
    ),
];

const EXTRA_BENEFITS: &[&str] = &[
    "Interfaz intuitiva y fácil de usar",
    "Acceso desde cualquier dispositivo",
    "Integraciones con otras herramientas",
    "Plantillas prediseñadas profesionales",
    "Actualizaciones en tiempo real",
    "Historial de versiones y cambios",
];

/// Full content of the multimedia tools mode.
#[component]
pub fn MultimediaContent(page: PageHandle, home_anchor: bool) -> impl IntoView {
    view! {
        <div class="mode-content theme-multimedia">
            <Hero page=page copy={&HERO} home_anchor=home_anchor />
            <Tools />
            <Advantages />
        </div>
    }
}

#[component]
fn Tools() -> impl IntoView {
    view! {
        <section id="herramientas-multimedia" class="section">
            <div class="container">
                <SectionHeading
                    title="Herramientas Principales"
                    subtitle="Plataformas basadas en tarjetas y páginas interactivas"
                />
                <div class="card-grid">
                    {TOOLS
                        .iter()
                        .enumerate()
                        .map(|(index, tool)| {
                            view! {
                                <Reveal delay_ms={(index as u32) * 100} class="card media-card">
                                    <img src=tool.image alt=tool.name />
                                    <div class="card-body">
                                        <span class=format!("card-icon tint-{}", tool.tint)>
                                            <Icon kind=IconKind::Layout />
                                        </span>
                                        <h3>{tool.name}</h3>
                                        <p>{tool.description}</p>
                                        <h4>"Características principales:"</h4>
                                        <BulletList mode=MODE items={tool.features} />
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Advantages() -> impl IntoView {
    view! {
        <section id="ventajas-multimedia" class="section section-alt">
            <div class="container">
                <SectionHeading
                    title="Ventajas de las Herramientas Basadas en Tarjetas"
                    subtitle="Beneficios de utilizar plataformas interactivas"
                />
                <div class="card-grid three">
                    {ADVANTAGES
                        .iter()
                        .enumerate()
                        .map(|(index, &(icon, title, body))| {
                            view! {
                                <Reveal delay_ms={(index as u32) * 100} class="card centered">
                                    <span class="card-icon gradient-green-teal">
                                        <Icon kind=icon size="32" />
                                    </span>
                                    <h4>{title}</h4>
                                    <p>{body}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal delay_ms=300 class="panel">
                    <h3 class="panel-title">"Beneficios Adicionales"</h3>
                    <BulletList mode=MODE items=EXTRA_BENEFITS />
                </Reveal>
            </div>
        </section>
    }
}
