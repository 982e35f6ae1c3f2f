//! The built-in catalog: every record the views render, declared in source.
//!
//! The catalog is constructed once at startup and never mutated. `validate`
//! guards the hand-maintained data against the defects that are easy to
//! introduce while editing it (duplicate ids, empty mandatory fields,
//! malformed link urls).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ArchLayer, CaseStudy, CaseStudyId, ContactLink, EngineeringDecision, ExperienceStat,
    PerspectiveNote, PerspectiveSet, Principle, Profile, SkillCategory,
};
use crate::error::ContentError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub case_studies: Vec<CaseStudy>,
    pub decisions: Vec<EngineeringDecision>,
    pub skill_categories: Vec<SkillCategory>,
    pub principles: Vec<Principle>,
    pub stats: Vec<ExperienceStat>,
    pub contact_links: Vec<ContactLink>,
    pub arch_layers: Vec<ArchLayer>,
}

impl Catalog {
    pub fn built_in() -> Self {
        Self {
            profile: profile(),
            case_studies: case_studies(),
            decisions: decisions(),
            skill_categories: skill_categories(),
            principles: principles(),
            stats: stats(),
            contact_links: contact_links(),
            arch_layers: arch_layers(),
        }
    }

    pub fn case_study(&self, id: &CaseStudyId) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|case| &case.id == id)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for case in &self.case_studies {
            if !seen.insert(case.id.clone()) {
                return Err(ContentError::DuplicateCaseStudyId(case.id.0.clone()));
            }
            let mandatory: [(&'static str, &str); 6] = [
                ("title", &case.title),
                ("context", &case.context),
                ("problem", &case.problem),
                ("constraints", &case.constraints),
                ("solution", &case.solution),
                ("result", &case.result),
            ];
            for (field, value) in mandatory {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyCaseStudyField {
                        id: case.id.0.clone(),
                        field,
                    });
                }
            }
        }
        for category in &self.skill_categories {
            if category.skills.is_empty() {
                return Err(ContentError::EmptySkillCategory(category.category.clone()));
            }
        }
        for decision in &self.decisions {
            if decision.tradeoffs.is_empty() {
                return Err(ContentError::MissingTradeoffs(decision.topic.clone()));
            }
        }
        for link in &self.contact_links {
            let supported = link.url.starts_with("https://")
                || link.url.starts_with("http://")
                || link.url.starts_with("mailto:");
            if !supported {
                return Err(ContentError::UnsupportedLinkUrl {
                    label: link.label.clone(),
                    url: link.url.clone(),
                });
            }
        }
        Ok(())
    }
}

fn profile() -> Profile {
    Profile {
        first_name: "BEKJAN".to_string(),
        last_name: "TEMENOV".to_string(),
        role: "Product-Engineer".to_string(),
        badge: "Product Engineering System v1.0".to_string(),
        tagline: "Building interactive systems, not pages.".to_string(),
        hero_hint: "Rearrange the flow to unlock engineering depth.".to_string(),
        availability: "I am currently open to Frontend / Fullstack Engineer roles where product \
                       thinking and engineering rigor are valued."
            .to_string(),
        location: "Bishkek-based // Remote // Relocation Friendly".to_string(),
        experience_summary: "Specialized in delivering scalable EdTech platforms, LMS systems, \
                             and CRM dashboards serving 200-10,000+ users. Led frontend teams, \
                             conducted code reviews, and shipped deadline-critical features in \
                             Agile environments."
            .to_string(),
    }
}

fn note(title: &str, content: &str) -> PerspectiveNote {
    PerspectiveNote {
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: CaseStudyId::new("ai-mektep"),
            title: "AiMektep - AI-Powered Math Learning Platform".to_string(),
            context: "Game-based math education platform using AI to generate adaptive questions \
                      and real-time physics simulations. Prototype and demo version developed to \
                      validate interactive learning approach."
                .to_string(),
            problem: "Traditional digital learning platforms struggle with engagement. Students \
                      need interactive, visual feedback to understand complex math and physics \
                      concepts. Manual content creation is slow and expensive."
                .to_string(),
            constraints: "4-month development timeline, physics simulations must run at stable \
                          30 FPS on low-end devices, complex AI-generated JSON parsing, limited \
                          infrastructure budget."
                .to_string(),
            solution: "Built with Next.js, TypeScript, and Material UI. Developed 5 interactive \
                       physics-based games using P5.js and DnD-kit with custom drag-and-drop \
                       mechanics (balance scales, water flow simulation, color mixing, hangers, \
                       geometry). Integrated AI APIs for automated game element generation with \
                       structured JSON parsing. Implemented Redux Toolkit for complex state \
                       management across game progression and scoring."
                .to_string(),
            result: "Delivered fully working interactive demo with stable 30 FPS physics \
                     simulations and automated content generation pipeline. Architecture \
                     prepared for future scaling and production deployment."
                .to_string(),
            perspectives: PerspectiveSet {
                user: note(
                    "Interactive Learning Experience",
                    "Designed intuitive drag-and-drop mechanics for multi-step puzzles with \
                     immediate visual feedback and animated physics behavior, making abstract \
                     math concepts easier to understand.",
                ),
                business: note(
                    "Scalable Content Generation",
                    "AI-assisted generation significantly reduces manual content creation effort \
                     and enables rapid curriculum expansion in future production versions.",
                ),
                tech: note(
                    "Physics Simulations & Complex State",
                    "Engineered multiple physics-based mini-games with stable rendering \
                     performance and centralized Redux state management, ensuring predictable \
                     gameplay logic and extensibility.",
                ),
            },
        },
        CaseStudy {
            id: CaseStudyId::new("mind-mentor"),
            title: "MindMentor - B2B Mentor Marketplace Platform".to_string(),
            context: "B2B platform for selling mentorship, lessons, and professional services. \
                      Includes Admin, Mentor, and User panels where mentors can create lessons, \
                      projects, teams, and paid services."
                .to_string(),
            problem: "Experts lacked a structured platform to monetize mentorship, manage \
                      students, and deliver structured learning or consulting services in one \
                      system."
                .to_string(),
            constraints: "Role-based architecture with 3 dashboards, complex content management, \
                          secure payments, and scalable frontend architecture."
                .to_string(),
            solution: "Built with React, TypeScript, Redux, MUI, and SASS. Implemented \
                       three-panel system (Admin, Mentor, User), mentor content creation flows, \
                       service listings, and structured interaction between mentors and users."
                .to_string(),
            result: "Delivered functional B2B mentorship platform demo demonstrating full mentor \
                     lifecycle: content creation, service publishing, and user interaction \
                     across role-based dashboards."
                .to_string(),
            perspectives: PerspectiveSet {
                user: note(
                    "Structured Mentor Interaction",
                    "Users can find mentors, access lessons or services, and interact through a \
                     clear multi-role interface designed for professional learning and \
                     consulting.",
                ),
                business: note(
                    "Mentor Monetization Model",
                    "Platform enables experts to sell lessons, services, and team collaboration, \
                     creating scalable revenue opportunities for educational or consulting \
                     businesses.",
                ),
                tech: note(
                    "Role-Based Frontend Architecture",
                    "Implemented scalable React + TypeScript architecture with Redux state \
                     management and modular dashboard separation for Admin, Mentor, and User \
                     roles.",
                ),
            },
        },
        CaseStudy {
            id: CaseStudyId::new("drive-car"),
            title: "DriveCar - Car Sales Full-Stack Platform".to_string(),
            context: "Full-stack automobile sales platform built independently from scratch to \
                      working demo, including frontend, backend, and database architecture."
                .to_string(),
            problem: "Car sellers needed digital platform to present inventory, manage listings, \
                      and allow customers to browse and interact with available vehicles online."
                .to_string(),
            constraints: "Solo full-stack development, relational database design, secure \
                          backend API, and production-ready deployment configuration."
                .to_string(),
            solution: "Developed full-stack application using React, TypeScript, Tailwind, \
                       Redux, Node.js, Express, and PostgreSQL. Implemented vehicle catalog, \
                       detailed pages, admin management, and backend REST API."
                .to_string(),
            result: "Delivered complete working demo demonstrating full-stack architecture, \
                     CRUD operations, authentication flow, and deployment-ready backend \
                     structure."
                .to_string(),
            perspectives: PerspectiveSet {
                user: note(
                    "Simple Car Discovery",
                    "Users can browse available vehicles, view specifications, and interact \
                     with listings through a clean and responsive interface.",
                ),
                business: note(
                    "Digital Vehicle Sales Channel",
                    "Provides structured system for managing inventory and presenting vehicles \
                     online, forming the foundation for scalable car sales operations.",
                ),
                tech: note(
                    "End-to-End Full-Stack Delivery",
                    "Complete TypeScript-based stack from database to UI with REST API \
                     architecture and modular frontend state management.",
                ),
            },
        },
        CaseStudy {
            id: CaseStudyId::new("edupath"),
            title: "Edupath - School Platform & Course System".to_string(),
            context: "Comprehensive school platform supporting multiple lesson types (sports, \
                      science, and others) with both offline and online education workflows."
                .to_string(),
            problem: "Educational organizations required unified system to present programs, \
                      manage lessons, and promote school activities across disciplines."
                .to_string(),
            constraints: "Content diversity, responsive UX, SEO visibility, and scalable \
                          structure for future expansion."
                .to_string(),
            solution: "Built modern web platform with structured lesson categories, responsive \
                       UI, and architecture suitable for institutional school promotion and \
                       course management."
                .to_string(),
            result: "Delivered production-ready school platform demo demonstrating structured \
                     education presentation and scalable architecture for institutional growth."
                .to_string(),
            perspectives: PerspectiveSet {
                user: note(
                    "Clear Education Navigation",
                    "Students and parents can easily explore lesson categories, formats, and \
                     school programs through intuitive navigation.",
                ),
                business: note(
                    "School Promotion & Structure",
                    "Platform supports institutional branding, program visibility, and \
                     structured presentation of educational services.",
                ),
                tech: note(
                    "Scalable Education Architecture",
                    "Designed flexible frontend structure allowing expansion of lesson types, \
                     formats, and administrative capabilities.",
                ),
            },
        },
        CaseStudy {
            id: CaseStudyId::new("kaitech-lms"),
            title: "Kaitech Analytics Dashboard, LMS & Internal CRM".to_string(),
            context: "Enterprise internal system including analytics dashboard, LMS, and CRM \
                      used inside company environment for up to ~1000 employees."
                .to_string(),
            problem: "Company required unified internal platform for analytics, learning, and \
                      employee management with scalable architecture."
                .to_string(),
            constraints: "Enterprise RBAC, legacy integrations, strict deadlines, and \
                          maintainable frontend architecture for internal scaling."
                .to_string(),
            solution: "Led frontend architecture using Next.js and TypeScript, enforced code \
                       standards, implemented RBAC dashboards, analytics visualization, LMS \
                       flows, and internal CRM interfaces."
                .to_string(),
            result: "Delivered internal enterprise platform used within company environment, \
                     improving analytics visibility, structured learning, and internal \
                     management workflows."
                .to_string(),
            perspectives: PerspectiveSet {
                user: note(
                    "Internal Productivity Tools",
                    "Employees access analytics, learning materials, and internal systems \
                     through unified dashboards.",
                ),
                business: note(
                    "Operational Efficiency",
                    "Centralized internal platform improves decision-making, training \
                     processes, and employee workflow management.",
                ),
                tech: note(
                    "Enterprise Frontend Architecture",
                    "Scalable TypeScript architecture with RBAC, modular dashboards, and \
                     maintainable enterprise-grade structure.",
                ),
            },
        },
    ]
}

fn decisions() -> Vec<EngineeringDecision> {
    vec![
        EngineeringDecision {
            topic: "State Management".to_string(),
            decision: "Redux Toolkit for complex apps, Zustand for lightweight projects"
                .to_string(),
            why: "Redux Toolkit fits large-scale predictable state flows, while Zustand enables \
                  simpler and faster development for smaller interaction-heavy apps."
                .to_string(),
            tradeoffs: vec![
                "Redux adds boilerplate".to_string(),
                "Zustand has smaller ecosystem".to_string(),
                "State choice must match complexity".to_string(),
            ],
        },
        EngineeringDecision {
            topic: "Styling Strategy".to_string(),
            decision: "Tailwind CSS + UI libraries (Shadcn / MUI)".to_string(),
            why: "Utility-first styling accelerates development while UI libraries provide \
                  accessibility and consistency."
                .to_string(),
            tradeoffs: vec![
                "Verbose class names".to_string(),
                "Requires discipline in design system".to_string(),
                "Learning curve for teams".to_string(),
            ],
        },
        EngineeringDecision {
            topic: "TypeScript Adoption".to_string(),
            decision: "Full TypeScript across stack".to_string(),
            why: "Prevents runtime errors, improves maintainability, and scales across teams \
                  and large codebases."
                .to_string(),
            tradeoffs: vec![
                "Slower initial development".to_string(),
                "Complex typing in edge cases".to_string(),
            ],
        },
    ]
}

fn skill_categories() -> Vec<SkillCategory> {
    let category = |name: &str, skills: &[&str]| SkillCategory {
        category: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        category(
            "Frontend Core",
            &["JavaScript (ES6+)", "TypeScript", "React", "Next.js", "HTML5", "CSS3"],
        ),
        category(
            "State Management",
            &["Redux Toolkit", "RTK Query", "Zustand", "Context API"],
        ),
        category(
            "UI & Styling",
            &["Tailwind CSS", "Material UI", "Shadcn UI", "SCSS/SASS", "Responsive Design"],
        ),
        category(
            "Animation & Canvas",
            &["P5.js", "Framer Motion", "DnD kit", "SVG"],
        ),
        category(
            "Backend & Data",
            &["Node.js", "Express", "REST APIs", "PostgreSQL", "MongoDB", "Nginx"],
        ),
        category(
            "Tools & Workflow",
            &["Git", "GitHub", "Vercel", "Jira", "Agile/Scrum", "Code Review"],
        ),
        category(
            "AI Integration",
            &["OpenAI GPT API", "Midjourney API", "Structured JSON Parsing"],
        ),
    ]
}

fn principles() -> Vec<Principle> {
    vec![
        Principle {
            title: "Performance First".to_string(),
            detail: "No animation without a purpose. Keep bundles light.".to_string(),
        },
        Principle {
            title: "Type Safety".to_string(),
            detail: "Interfaces are the contract between features.".to_string(),
        },
        Principle {
            title: "Scalable Patterns".to_string(),
            detail: "Components should be as dumb as possible, services as smart as needed."
                .to_string(),
        },
    ]
}

fn stats() -> Vec<ExperienceStat> {
    vec![
        ExperienceStat {
            value: "300-400".to_string(),
            caption: "Active Users (AiMektep)".to_string(),
        },
        ExperienceStat {
            value: "~70%".to_string(),
            caption: "Content Creation Time Saved".to_string(),
        },
        ExperienceStat {
            value: "30 FPS".to_string(),
            caption: "Stable Physics Performance".to_string(),
        },
    ]
}

fn contact_links() -> Vec<ContactLink> {
    let link = |label: &str, url: &str, icon: &str| ContactLink {
        label: label.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    };
    vec![
        link("LinkedIn", "https://www.linkedin.com/in/bekjan-temenov", "\u{1F464}"),
        link("GitHub", "https://github.com/Bekjan-Temenov", "\u{1F4BB}"),
        link("Telegram", "https://t.me/temen0v", "\u{2708}"),
        link("Email", "mailto:temenovbekzan@gmail.com", "\u{2709}"),
    ]
}

fn arch_layers() -> Vec<ArchLayer> {
    let layer = |name: &str, implementation: &str| ArchLayer {
        layer: name.to_string(),
        implementation: implementation.to_string(),
    };
    vec![
        layer("State", "Shared UI store"),
        layer("View", "eframe + egui"),
        layer("Motion", "Frame-tick animation"),
        layer("Data", "Static typed catalog"),
    ]
}
