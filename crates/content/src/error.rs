use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("duplicate case study id: {0}")]
    DuplicateCaseStudyId(String),
    #[error("case study {id}: field `{field}` is empty")]
    EmptyCaseStudyField { id: String, field: &'static str },
    #[error("skill category `{0}` has no skills")]
    EmptySkillCategory(String),
    #[error("decision `{0}` lists no tradeoffs")]
    MissingTradeoffs(String),
    #[error("contact link `{label}` has unsupported url `{url}` (expected http(s) or mailto)")]
    UnsupportedLinkUrl { label: String, url: String },
}
