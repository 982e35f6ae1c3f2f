use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

id_newtype!(CaseStudyId);

/// Audit lens for a case study. Every case carries all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    User,
    Business,
    Tech,
}

impl Perspective {
    pub const ALL: [Perspective; 3] = [Perspective::User, Perspective::Business, Perspective::Tech];

    pub fn label(self) -> &'static str {
        match self {
            Perspective::User => "USER",
            Perspective::Business => "BUSINESS",
            Perspective::Tech => "TECH",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerspectiveNote {
    pub title: String,
    pub content: String,
}

/// All three perspective notes, mandatory by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerspectiveSet {
    pub user: PerspectiveNote,
    pub business: PerspectiveNote,
    pub tech: PerspectiveNote,
}

impl PerspectiveSet {
    pub fn get(&self, perspective: Perspective) -> &PerspectiveNote {
        match perspective {
            Perspective::User => &self.user,
            Perspective::Business => &self.business,
            Perspective::Tech => &self.tech,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: CaseStudyId,
    pub title: String,
    pub context: String,
    pub problem: String,
    pub constraints: String,
    pub solution: String,
    pub result: String,
    pub perspectives: PerspectiveSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineeringDecision {
    pub topic: String,
    pub decision: String,
    pub why: String,
    pub tradeoffs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceStat {
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// One row of the "how this app is built" diagram on the architecture view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchLayer {
    pub layer: String,
    pub implementation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub badge: String,
    pub tagline: String,
    pub hero_hint: String,
    pub availability: String,
    pub location: String,
    pub experience_summary: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
