//! Digital storage content: device types, timeline and comparison.

use leptos::prelude::*;
use nomofobia_core::{IconKind, MainSection};

use super::hero::{Hero, HeroCopy};
use super::shared::{BulletList, SectionHeading, VideoEmbed};
use crate::icons::Icon;
use crate::page::PageHandle;
use crate::reveal::Reveal;

const MODE: MainSection = MainSection::Almacenamiento;

static HERO: HeroCopy = HeroCopy {
    mode: MODE,
    image: "https://images.pexels.com/photos/442150/pexels-photo-442150.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    image_alt: "Dispositivos de almacenamiento",
    subtitle: "Explorando la evolución de los dispositivos de almacenamiento digital",
    call_to_action: "Explorar Dispositivos",
};

struct Device {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    capacity: &'static str,
    speed: &'static str,
    tint: &'static str,
    image: &'static str,
}

const DEVICES: &[Device] = &[
    Device {
        icon: IconKind::HardDrive,
        title: "Discos Duros (HDD)",
        description: "Almacenamiento magnético tradicional con alta capacidad",
        capacity: "500GB - 18TB",
        speed: "5,400 - 15,000 RPM",
        tint: "blue-cyan",
        image: "https://images.pexels.com/photos/442150/pexels-photo-442150.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::Database,
        title: "SSD (Estado Sólido)",
        description: "Almacenamiento flash sin partes móviles, ultra rápido",
        capacity: "120GB - 8TB",
        speed: "550+ MB/s",
        tint: "green-teal",
        image: "https://images.pexels.com/photos/163100/circuit-circuit-board-resistor-computer-163100.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::Disc,
        title: "CD/DVD",
        description: "Medios ópticos para almacenamiento y distribución",
        capacity: "700MB - 8.5GB",
        speed: "1x - 52x",
        tint: "yellow-orange",
        image: "https://images.pexels.com/photos/1626481/pexels-photo-1626481.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::Usb,
        title: "USB Flash Drive",
        description: "Almacenamiento portátil plug-and-play",
        capacity: "1GB - 2TB",
        speed: "USB 2.0 - 3.2",
        tint: "purple-pink",
        image: "https://images.pexels.com/photos/4792728/pexels-photo-4792728.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::Save,
        title: "Disquete",
        description: "Medio de almacenamiento magnético histórico",
        capacity: "1.44MB",
        speed: "Legacy",
        tint: "gray-slate",
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::SdCard,
        title: "Tarjetas de Memoria",
        description: "Almacenamiento compacto para dispositivos móviles",
        capacity: "1GB - 1TB",
        speed: "Class 10 - UHS-II",
        tint: "red-rose",
        image: "https://images.pexels.com/photos/4792729/pexels-photo-4792729.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Device {
        icon: IconKind::Disc,
        title: "Blu-ray",
        description: "Medio óptico de alta definición y gran capacidad",
        capacity: "25GB - 128GB",
        speed: "1x - 16x",
        tint: "indigo-blue",
        image: "https://images.pexels.com/photos/1626481/pexels-photo-1626481.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
    capacity: &'static str,
    icon: IconKind,
}

/// Entries alternate sides of the timeline, starting on the left.
const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "1970s",
        title: "Disquetes",
        description: "Los primeros medios de almacenamiento portátil masivo",
        capacity: "1.44MB",
        icon: IconKind::Save,
    },
    Milestone {
        year: "1980s",
        title: "Discos Duros",
        description: "Almacenamiento magnético de alta capacidad",
        capacity: "5MB - 10MB",
        icon: IconKind::HardDrive,
    },
    Milestone {
        year: "1990s",
        title: "CD-ROM",
        description: "Revolución del almacenamiento óptico",
        capacity: "650MB - 700MB",
        icon: IconKind::Disc,
    },
    Milestone {
        year: "2000s",
        title: "DVD y USB",
        description: "Mayor capacidad y portabilidad mejorada",
        capacity: "4.7GB - 8.5GB",
        icon: IconKind::Usb,
    },
    Milestone {
        year: "2010s",
        title: "SSD y Blu-ray",
        description: "Velocidad extrema y alta definición",
        capacity: "25GB - 1TB",
        icon: IconKind::Database,
    },
    Milestone {
        year: "2020s",
        title: "Almacenamiento en la Nube",
        description: "Acceso global y capacidad ilimitada",
        capacity: "Ilimitado",
        icon: IconKind::Database,
    },
];

/// Full content of the storage mode.
#[component]
pub fn AlmacenamientoContent(page: PageHandle, home_anchor: bool) -> impl IntoView {
    view! {
        <div class="mode-content theme-almacenamiento">
            <Hero page=page copy={&HERO} home_anchor=home_anchor />
            <StorageTypes />
            <Evolution />
            <Comparison />
            <VideoEmbed video_id="qnjz9Jm1ARE" title="Video Almacenamiento" />
        </div>
    }
}

#[component]
fn StorageTypes() -> impl IntoView {
    view! {
        <section id="tipos-almacenamiento" class="section">
            <div class="container">
                <SectionHeading
                    title="Tipos de Almacenamiento"
                    subtitle="Conoce los diferentes dispositivos para guardar información"
                />
                <div class="card-grid">
                    {DEVICES
                        .iter()
                        .enumerate()
                        .map(|(index, device)| {
                            view! {
                                <Reveal delay_ms={(index as u32) * 100} class="card media-card">
                                    <img src=device.image alt=device.title />
                                    <div class="card-body">
                                        <span class=format!("card-icon tint-{}", device.tint)>
                                            <Icon kind=device.icon />
                                        </span>
                                        <h3>{device.title}</h3>
                                        <p>{device.description}</p>
                                        <dl class="specs">
                                            <dt>"Capacidad:"</dt>
                                            <dd>{device.capacity}</dd>
                                            <dt>"Velocidad:"</dt>
                                            <dd>{device.speed}</dd>
                                        </dl>
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
fn Evolution() -> impl IntoView {
    view! {
        <section id="evolucion" class="section section-alt">
            <div class="container">
                <SectionHeading
                    title="Evolución del Almacenamiento"
                    subtitle="Un viaje a través de la historia del almacenamiento digital"
                />
                <ol class="timeline">
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, milestone)| {
                            let side = if index % 2 == 0 { "left" } else { "right" };
                            view! {
                                <li class=format!("timeline-entry {side}")>
                                    <Reveal delay_ms={(index as u32) * 100} class="timeline-card">
                                        <div class="timeline-heading">
                                            <Icon kind=milestone.icon />
                                            <h3>{milestone.title}</h3>
                                            <span class="timeline-year">{milestone.year}</span>
                                        </div>
                                        <p>{milestone.description}</p>
                                        <p class="muted">
                                            "Capacidad típica: " <strong>{milestone.capacity}</strong>
                                        </p>
                                    </Reveal>
                                    <span class="timeline-dot gradient-purple-indigo"></span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

/// Pros (`true`) and cons (`false`) of one technology.
#[component]
fn ProsCons(items: &'static [(bool, &'static str)]) -> impl IntoView {
    view! {
        <ul class="pros-cons">
            {items
                .iter()
                .map(|&(pro, text)| {
                    view! {
                        <li class={if pro { "pro" } else { "con" }}>
                            {if pro { "✓ " } else { "✗ " }}
                            {text}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

const HDD: &[(bool, &str)] = &[
    (true, "Mayor capacidad por precio"),
    (true, "Tecnología madura y confiable"),
    (true, "Ideal para almacenamiento masivo"),
    (false, "Más lento"),
    (false, "Partes móviles (ruido/calor)"),
    (false, "Más frágil"),
];

const SSD: &[(bool, &str)] = &[
    (true, "Velocidad extrema"),
    (true, "Sin partes móviles"),
    (true, "Menor consumo energético"),
    (true, "Más resistente"),
    (false, "Mayor costo por GB"),
    (false, "Capacidades limitadas"),
];

const OPTICAL: &[(bool, &str)] = &[
    (true, "Larga duración"),
    (true, "Resistente a campos magnéticos"),
    (true, "Ideal para archivos"),
    (true, "Bajo costo unitario"),
    (false, "Velocidad limitada"),
    (false, "Sensible a rayones"),
    (false, "Capacidad fija"),
    (false, "Requiere unidad lectora"),
];

const PORTABLE: &[(&str, &[&str])] = &[
    ("USB Flash", &["Plug and play", "Universal", "Reutilizable"]),
    (
        "Tarjetas SD",
        &["Muy compactas", "Para dispositivos móviles", "Diferentes velocidades"],
    ),
    ("Disquetes", &["Históricos", "Muy limitados", "Obsoletos"]),
];

const TRENDS: &[(&str, &str)] = &[
    ("Almacenamiento en la Nube", "Acceso global, escalabilidad infinita"),
    ("NVMe PCIe 5.0", "Velocidades de hasta 14,000 MB/s"),
    ("Almacenamiento Cuántico", "Densidad y velocidad revolucionarias"),
    ("DNA Storage", "Almacenamiento biológico de larga duración"),
];

#[component]
fn Comparison() -> impl IntoView {
    view! {
        <section id="comparacion" class="section">
            <div class="container">
                <SectionHeading
                    title="Comparación de Tecnologías"
                    subtitle="Ventajas y desventajas de cada tipo de almacenamiento"
                />

                <Reveal class="panel">
                    <h3 class="panel-title">"HDD vs SSD"</h3>
                    <div class="two-columns">
                        <div class="callout">
                            <Icon kind=IconKind::HardDrive />
                            <h4>"Disco Duro (HDD)"</h4>
                            <ProsCons items=HDD />
                        </div>
                        <div class="callout">
                            <Icon kind=IconKind::Database />
                            <h4>"SSD"</h4>
                            <ProsCons items=SSD />
                        </div>
                    </div>
                </Reveal>

                <Reveal delay_ms=100 class="panel">
                    <h3 class="panel-title">"Medios Ópticos"</h3>
                    <div class="callout">
                        <Icon kind=IconKind::Disc />
                        <h4>"CD/DVD/Blu-ray"</h4>
                        <ProsCons items=OPTICAL />
                    </div>
                </Reveal>

                <Reveal delay_ms=200 class="panel">
                    <h3 class="panel-title">"Almacenamiento Portátil"</h3>
                    <div class="callout">
                        <Icon kind=IconKind::Usb />
                        <h4>"USB y Tarjetas SD"</h4>
                        <div class="three-columns">
                            {PORTABLE
                                .iter()
                                .map(|&(title, points)| {
                                    view! {
                                        <div>
                                            <h5>{title}</h5>
                                            <BulletList mode=MODE items=points />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>

                <Reveal delay_ms=300 class="panel">
                    <h3 class="panel-title">"Tendencias Futuras"</h3>
                    <div class="callout">
                        <Icon kind=IconKind::Database />
                        <h4>"Tecnologías Emergentes"</h4>
                        <ul class="trend-list">
                            {TRENDS
                                .iter()
                                .map(|&(name, summary)| {
                                    view! {
                                        <li>
                                            <strong>{name} ":"</strong>
                                            " "
                                            {summary}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
