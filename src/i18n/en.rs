// SPDX-License-Identifier: MPL-2.0
//! English dictionary.

use super::dictionary::{
    About, Contact, Dictionary, Footer, Header, Hero, Mindset, PortfolioLabels, Profile,
    SkillCategory, Skills, TitledList,
};

pub static EN: Dictionary = Dictionary {
    header: Header {
        about: "About",
        skills: "Skills",
        experience: "Experience",
        contact: "Contact",
    },
    hero: Hero {
        greeting: "Hi, I'm",
        name: "Luis",
        role: "Senior Full Stack Engineer",
        subtitle: "I build scalable web products, from the database to the interface.",
        description: "Over a decade designing and building web applications, leading teams, \
                      and mentoring other developers.",
        cta: "View skills",
        contact: "Get in touch",
    },
    about: About {
        title: "About me",
        intro: "I'm a software engineer with experience across the whole product lifecycle: \
                discovery, design, implementation, deployment, and operations. I enjoy \
                turning ambiguous problems into simple, maintainable systems.",
        focus: "What defines me:",
        points: &[
            "Clean, domain-oriented architectures",
            "End-to-end typed code",
            "Automated testing and deployments",
            "Technical mentoring and code review",
            "Direct communication with product and business",
            "Obsession with user experience",
        ],
    },
    skills: Skills {
        title: "Technical Skills",
        backend: SkillCategory {
            title: "Backend",
            items: &[
                "Node.js and NestJS at production scale",
                "Rust for high-performance services",
                "REST and GraphQL APIs with versioned contracts",
                "Message queues and asynchronous processing",
            ],
        },
        frontend: SkillCategory {
            title: "Frontend",
            items: &[
                "React and Next.js with strict TypeScript",
                "Predictable, testable state management",
                "Design systems and reusable components",
                "Accessibility and performance as requirements",
            ],
        },
        cloud: SkillCategory {
            title: "Cloud & DevOps",
            items: &[
                "AWS: ECS, Lambda, S3, CloudFront",
                "Infrastructure as code with Terraform",
                "CI/CD pipelines with zero-downtime deploys",
                "Observability: metrics, traces, and alerts",
            ],
        },
        databases: SkillCategory {
            title: "Databases",
            items: &[
                "PostgreSQL: modeling, indexing, and tuning",
                "Redis for caching and lightweight queues",
                "MongoDB for document workloads",
                "Safe, reversible migrations",
            ],
        },
    },
    profile: Profile {
        title: "Professional Profile",
        roles: &[
            "Senior Full Stack Engineer on product teams",
            "Tech lead for teams of 3 to 8 people",
            "Mentor for junior and mid-level developers",
            "Technical reference in architecture reviews",
        ],
        mindset: Mindset {
            title: "How I work",
            description: "I believe the best software comes from iterating fast on a solid \
                          foundation: clear contracts, tests you can trust, and documented \
                          technical decisions.",
            points: &[
                "Understand the problem first, pick the tool second",
                "Small, frequent deliveries over big launches",
                "Technical debt is managed, not ignored",
                "Knowledge is shared: pairing, docs, and internal talks",
            ],
        },
    },
    security: TitledList {
        title: "Security",
        items: &[
            "Authentication and authorization: OAuth2, OIDC, and JWT",
            "Threat modeling during design phases",
            "Secret management and encryption in transit and at rest",
            "Dependency audits and continuous patching",
        ],
    },
    architecture: TitledList {
        title: "Architecture",
        items: &[
            "Modular monoliths before premature microservices",
            "Explicit domain boundaries and cross-context events",
            "Designed for testing and independent deploys",
            "Decision records with ADRs",
        ],
    },
    portfolio: PortfolioLabels {
        title: "Public Portfolio",
        subtitle: "Highlighted projects built with a focus on architecture, scalability, \
                   and user experience.",
        description: "Description",
        mentoring: "Technical mentoring",
        technologies: "Technologies",
        features: "Key features",
        stack: "Technology stack",
        architecture: "Architecture and design",
        challenges: "Technical challenges solved",
        ux: "UX/UI",
        demo: "Open demo",
        repository: "Open repository",
    },
    contact: Contact {
        title: "Contact",
        description: "Have a project in mind or want to discuss an opportunity? \
                      Drop me a line and I'll get back to you soon.",
        email_label: "Email me",
    },
    footer: Footer {
        rights: "All rights reserved",
    },
};
