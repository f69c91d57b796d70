//! Smartphone dependency content.

use leptos::prelude::*;
use nomofobia_core::{IconKind, MainSection};

use super::hero::{Hero, HeroCopy};
use super::shared::{BulletList, SectionHeading, VideoEmbed};
use crate::icons::Icon;
use crate::page::PageHandle;
use crate::reveal::Reveal;

const MODE: MainSection = MainSection::Nomofobia;

static HERO: HeroCopy = HeroCopy {
    mode: MODE,
    image: "https://images.pexels.com/photos/5082579/pexels-photo-5082579.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    image_alt: "Persona usando smartphone",
    subtitle: "Explorando el miedo moderno a estar desconectado de nuestros dispositivos móviles",
    call_to_action: "Comenzar Exploración",
};

struct Symptom {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    tint: &'static str,
}

const SYMPTOMS: &[Symptom] = &[
    Symptom {
        icon: IconKind::AlertTriangle,
        title: "Ansiedad Extrema",
        description: "Sentimientos intensos de ansiedad cuando el teléfono está fuera de alcance o sin batería",
        tint: "red-pink",
    },
    Symptom {
        icon: IconKind::Heart,
        title: "Síntomas Físicos",
        description: "Palpitaciones, sudoración, temblores o dificultad para respirar",
        tint: "orange-red",
    },
    Symptom {
        icon: IconKind::Brain,
        title: "Obsesión Constante",
        description: "Revisar el teléfono compulsivamente, incluso cuando no hay notificaciones",
        tint: "purple-blue",
    },
    Symptom {
        icon: IconKind::Smartphone,
        title: "Miedo a la Desconexión",
        description: "Terror a perder la conexión a internet o quedarse sin cobertura",
        tint: "teal-green",
    },
    Symptom {
        icon: IconKind::User,
        title: "Aislamiento Social",
        description: "Preferir la interacción digital sobre las relaciones cara a cara",
        tint: "indigo-purple",
    },
    Symptom {
        icon: IconKind::AlertTriangle,
        title: "Problemas de Sueño",
        description: "Insomnio por mantener el teléfono cerca durante la noche",
        tint: "yellow-orange",
    },
];

const CAUSES: &[&str] = &[
    "Dependencia de la conexión constante",
    "Miedo a perderse información importante (FOMO)",
    "Necesidad de validación social inmediata",
    "Trabajo remoto y comunicación digital",
    "Entretenimiento y escape de la realidad",
    "Inseguridad personal y baja autoestima",
];

const CONSEQUENCES: &[&str] = &[
    "Deterioro de las relaciones interpersonales",
    "Disminución de la productividad laboral",
    "Problemas de concentración y atención",
    "Trastornos del sueño y descanso",
    "Aumento de niveles de estrés y ansiedad",
    "Dependencia tecnológica extrema",
];

struct Tip {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
}

const TIPS: &[Tip] = &[
    Tip {
        icon: IconKind::Shield,
        title: "Establece Horarios Libres",
        description: "Designa momentos específicos del día sin dispositivos móviles",
        steps: &[
            "Apaga el teléfono durante las comidas",
            "Crea una rutina nocturna sin pantallas",
            "Dedica al menos 1 hora diaria al aire libre",
        ],
    },
    Tip {
        icon: IconKind::Heart,
        title: "Fortalece Relaciones Reales",
        description: "Prioriza las interacciones cara a cara sobre las digitales",
        steps: &[
            "Organiza encuentros presenciales",
            "Practica la escucha activa",
            "Participa en actividades grupales sin dispositivos",
        ],
    },
    Tip {
        icon: IconKind::Brain,
        title: "Practica Mindfulness",
        description: "Desarrolla consciencia sobre tu uso tecnológico",
        steps: &[
            "Medita 10 minutos diarios",
            "Observa tus patrones de uso",
            "Practica respiración consciente",
        ],
    },
    Tip {
        icon: IconKind::Smartphone,
        title: "Configura tu Dispositivo",
        description: "Usa herramientas tecnológicas para limitar el uso",
        steps: &[
            "Activa el modo 'No molestar'",
            "Limita las notificaciones",
            "Usa apps de control parental",
        ],
    },
];

const COMMON_SITUATIONS: &[&str] = &[
    "El teléfono se queda sin batería",
    "No hay señal de internet",
    "Olvidas el teléfono en casa",
    "Se rompe la pantalla",
    "Actualizaciones que tardan mucho",
];

const TYPICAL_REACTIONS: &[&str] = &[
    "Sensación de estar perdido",
    "Ansiedad por no recibir mensajes",
    "Miedo a perderse algo importante",
    "Dificultad para concentrarse",
    "Urgencia por reconectarse",
];

/// Full content of the smartphone dependency mode.
#[component]
pub fn NomofobiaContent(page: PageHandle, home_anchor: bool) -> impl IntoView {
    view! {
        <div class="mode-content theme-nomofobia">
            <Hero page=page copy={&HERO} home_anchor=home_anchor />
            <Definition />
            <Symptoms />
            <CausesAndConsequences />
            <Tips />
            <Experience />
            <VideoEmbed video_id="C8ULmYmPJ0Q" title="Video Nomofobia" />
        </div>
    }
}

#[component]
fn Definition() -> impl IntoView {
    view! {
        <section id="definicion" class="section">
            <div class="container two-columns">
                <Reveal>
                    <h2 class="section-title">"¿Qué es la Nomofobia?"</h2>
                    <div class="prose">
                        <p>
                            "La " <strong>"nomofobia"</strong>
                            " (del inglés \"no-mobile-phone phobia\") es el miedo irracional a estar sin teléfono móvil o sin conexión a internet."
                        </p>
                        <p>
                            "Este término fue acuñado durante un estudio realizado por la Oficina de Correos del Reino Unido en 2010, "
                            "y desde entonces ha ganado reconocimiento como un fenómeno psicológico real en nuestra era digital."
                        </p>
                        <p>
                            "Se caracteriza por una ansiedad extrema cuando la persona se encuentra sin su dispositivo móvil, "
                            "sin batería, sin cobertura o sin conexión a internet."
                        </p>
                    </div>
                </Reveal>
                <Reveal delay_ms=200 class="figure">
                    <img
                        src="https://i0.wp.com/canal.ugr.es/wp-content/uploads/2021/07/Nomofobia.jpg?fit=1920%2C1280&ssl=1"
                        alt="Ansiedad por el teléfono"
                    />
                    <span class="figure-badge gradient-blue-teal">
                        <Icon kind=IconKind::Smartphone size="32" />
                    </span>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Symptoms() -> impl IntoView {
    view! {
        <section id="sintomas" class="section section-alt">
            <div class="container">
                <SectionHeading
                    title="Síntomas de la Nomofobia"
                    subtitle="Señales que pueden indicar dependencia tecnológica"
                />
                <div class="card-grid">
                    {SYMPTOMS
                        .iter()
                        .enumerate()
                        .map(|(index, symptom)| {
                            view! {
                                <Reveal delay_ms={(index as u32) * 100} class="card">
                                    <span class=format!("card-icon tint-{}", symptom.tint)>
                                        <Icon kind=symptom.icon />
                                    </span>
                                    <h3>{symptom.title}</h3>
                                    <p>{symptom.description}</p>
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
fn CausesAndConsequences() -> impl IntoView {
    view! {
        <section id="causas" class="section">
            <div class="container">
                <SectionHeading
                    title="Causas y Consecuencias"
                    subtitle="Entendiendo las raíces y efectos de la nomofobia"
                />
                <div class="two-columns">
                    <Reveal class="panel">
                        <h3 class="panel-title">
                            <Icon kind=IconKind::Brain />
                            "Principales Causas"
                        </h3>
                        <BulletList mode=MODE items=CAUSES />
                    </Reveal>
                    <Reveal delay_ms=200 class="panel">
                        <h3 class="panel-title">
                            <Icon kind=IconKind::AlertTriangle />
                            "Consecuencias Negativas"
                        </h3>
                        <BulletList mode=MODE items=CONSEQUENCES />
                    </Reveal>
                </div>
                <Reveal delay_ms=400 class="figure wide">
                    <img
                        src="https://e01-elmundo.uecdn.es/assets/multimedia/imagenes/2023/09/12/16945287155220.jpg"
                        alt="Impacto de la tecnología"
                    />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Tips() -> impl IntoView {
    view! {
        <section id="tips" class="section section-alt">
            <div class="container">
                <SectionHeading
                    title="Tips para Evitar la Nomofobia"
                    subtitle="Estrategias efectivas para una relación saludable con la tecnología"
                />
                <div class="card-grid two">
                    {TIPS
                        .iter()
                        .enumerate()
                        .map(|(index, tip)| {
                            view! {
                                <Reveal delay_ms={(index as u32) * 100} class="card">
                                    <span class="card-icon gradient-blue-teal">
                                        <Icon kind=tip.icon />
                                    </span>
                                    <h3>{tip.title}</h3>
                                    <p>{tip.description}</p>
                                    <BulletList mode=MODE items={tip.steps} />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal delay_ms=400 class="figure wide">
                    <img
                        src="https://images.pexels.com/photos/3771120/pexels-photo-3771120.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                        alt="Bienestar digital"
                    />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experiencia" class="section">
            <div class="container narrow">
                <SectionHeading
                    title="Experiencia Personal"
                    subtitle="Reflexiones sobre el uso del celular y la nomofobia"
                />
                <Reveal class="panel">
                    <span class="card-icon gradient-blue-teal">
                        <Icon kind=IconKind::User size="32" />
                    </span>
                    <h3>"¿Has experimentado nomofobia?"</h3>
                    <p>
                        "En nuestra era digital, es casi imposible no haber experimentado algún grado de ansiedad "
                        "relacionada con nuestros dispositivos móviles. Muchas personas reportan sentimientos de "
                        "inquietud cuando:"
                    </p>
                    <div class="two-columns">
                        <Reveal delay_ms=200 class="callout">
                            <h4>"Situaciones Comunes:"</h4>
                            <BulletList mode=MODE items=COMMON_SITUATIONS />
                        </Reveal>
                        <Reveal delay_ms=400 class="callout">
                            <h4>"Reacciones Típicas:"</h4>
                            <BulletList mode=MODE items=TYPICAL_REACTIONS />
                        </Reveal>
                    </div>
                    <Reveal delay_ms=600 class="callout highlight">
                        <h4>"Reflexión Personal:"</h4>
                        <p>
                            "Es importante reconocer que cierto nivel de dependencia tecnológica es normal en nuestra "
                            "sociedad actual. Sin embargo, cuando esta dependencia interfiere significativamente con "
                            "nuestro bienestar, relaciones o productividad, es momento de buscar un equilibrio más saludable."
                        </p>
                    </Reveal>
                    <p>
                        "La clave está en desarrollar una relación consciente con la tecnología, donde somos nosotros "
                        "quienes controlamos el dispositivo, y no al revés. Esto requiere práctica, paciencia y "
                        "autocompasión mientras aprendemos nuevos hábitos digitales más saludables."
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
