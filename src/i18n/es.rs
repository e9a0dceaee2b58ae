// SPDX-License-Identifier: MPL-2.0
//! Spanish dictionary. Default locale.

use super::dictionary::{
    About, Contact, Dictionary, Footer, Header, Hero, Mindset, PortfolioLabels, Profile,
    SkillCategory, Skills, TitledList,
};

pub static ES: Dictionary = Dictionary {
    header: Header {
        about: "Sobre mí",
        skills: "Habilidades",
        experience: "Experiencia",
        contact: "Contacto",
    },
    hero: Hero {
        greeting: "Hola, soy",
        name: "Luis",
        role: "Senior Full Stack Engineer",
        subtitle: "Construyo productos web escalables, de la base de datos a la interfaz.",
        description: "Más de una década diseñando y construyendo aplicaciones web, liderando \
                      equipos y mentorando a otros desarrolladores.",
        cta: "Ver habilidades",
        contact: "Contactar",
    },
    about: About {
        title: "Sobre mí",
        intro: "Soy ingeniero de software con experiencia en todo el ciclo de vida del \
                producto: descubrimiento, diseño, implementación, despliegue y operación. \
                Disfruto convertir problemas ambiguos en sistemas simples y mantenibles.",
        focus: "Lo que me define:",
        points: &[
            "Arquitecturas limpias y orientadas al dominio",
            "Código tipado de extremo a extremo",
            "Automatización de pruebas y despliegues",
            "Mentoría técnica y revisión de código",
            "Comunicación directa con producto y negocio",
            "Obsesión por la experiencia de usuario",
        ],
    },
    skills: Skills {
        title: "Habilidades Técnicas",
        backend: SkillCategory {
            title: "Backend",
            items: &[
                "Node.js y NestJS en producción a gran escala",
                "Rust para servicios de alto rendimiento",
                "APIs REST y GraphQL con contratos versionados",
                "Colas de mensajes y procesamiento asíncrono",
            ],
        },
        frontend: SkillCategory {
            title: "Frontend",
            items: &[
                "React y Next.js con TypeScript estricto",
                "Gestión de estado predecible y testeable",
                "Sistemas de diseño y componentes reutilizables",
                "Accesibilidad y rendimiento como requisitos",
            ],
        },
        cloud: SkillCategory {
            title: "Cloud y DevOps",
            items: &[
                "AWS: ECS, Lambda, S3, CloudFront",
                "Infraestructura como código con Terraform",
                "Pipelines de CI/CD con despliegues sin downtime",
                "Observabilidad: métricas, trazas y alertas",
            ],
        },
        databases: SkillCategory {
            title: "Bases de Datos",
            items: &[
                "PostgreSQL: modelado, índices y tuning",
                "Redis para caché y colas ligeras",
                "MongoDB en cargas documentales",
                "Migraciones seguras y reversibles",
            ],
        },
    },
    profile: Profile {
        title: "Perfil Profesional",
        roles: &[
            "Senior Full Stack Engineer en equipos de producto",
            "Tech lead de equipos de 3 a 8 personas",
            "Mentor de desarrolladores junior y semi-senior",
            "Referente técnico en revisiones de arquitectura",
        ],
        mindset: Mindset {
            title: "Cómo trabajo",
            description: "Creo que el mejor software nace de iterar rápido sobre una base \
                          sólida: contratos claros, pruebas que dan confianza y decisiones \
                          técnicas documentadas.",
            points: &[
                "Primero entender el problema, después elegir la herramienta",
                "Entregas pequeñas y frecuentes sobre grandes lanzamientos",
                "La deuda técnica se gestiona, no se ignora",
                "El conocimiento se comparte: pairing, docs y charlas internas",
            ],
        },
    },
    security: TitledList {
        title: "Seguridad",
        items: &[
            "Autenticación y autorización: OAuth2, OIDC y JWT",
            "Modelado de amenazas en fases de diseño",
            "Gestión de secretos y cifrado en tránsito y reposo",
            "Auditorías de dependencias y parcheo continuo",
        ],
    },
    architecture: TitledList {
        title: "Arquitectura",
        items: &[
            "Monolitos modulares antes que microservicios prematuros",
            "Límites de dominio explícitos y eventos entre contextos",
            "Diseño orientado a pruebas y a despliegues independientes",
            "Documentación de decisiones con ADRs",
        ],
    },
    portfolio: PortfolioLabels {
        title: "Portafolio Público",
        subtitle: "Proyectos destacados construidos con enfoque en arquitectura, \
                   escalabilidad y experiencia de usuario.",
        description: "Descripción",
        mentoring: "Mentoría técnica",
        technologies: "Tecnologías",
        features: "Características principales",
        stack: "Stack tecnológico",
        architecture: "Arquitectura y diseño",
        challenges: "Desafíos técnicos resueltos",
        ux: "UX/UI",
        demo: "Ver demo",
        repository: "Ver repositorio",
    },
    contact: Contact {
        title: "Contacto",
        description: "¿Tienes un proyecto en mente o quieres hablar de una oportunidad? \
                      Escríbeme y te responderé pronto.",
        email_label: "Escríbeme",
    },
    footer: Footer {
        rights: "Todos los derechos reservados",
    },
};
