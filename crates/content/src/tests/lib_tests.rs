use crate::catalog::Catalog;
use crate::domain::{CaseStudyId, Perspective};
use crate::error::ContentError;

#[test]
fn built_in_catalog_passes_validation() {
    let catalog = Catalog::built_in();
    catalog.validate().expect("built-in catalog must be valid");
}

#[test]
fn built_in_catalog_carries_the_expected_record_counts() {
    let catalog = Catalog::built_in();
    assert_eq!(catalog.case_studies.len(), 5);
    assert_eq!(catalog.decisions.len(), 3);
    assert_eq!(catalog.skill_categories.len(), 7);
    assert_eq!(catalog.principles.len(), 3);
    assert_eq!(catalog.stats.len(), 3);
    assert_eq!(catalog.contact_links.len(), 4);
    assert_eq!(catalog.arch_layers.len(), 4);
}

#[test]
fn case_study_lookup_by_id() {
    let catalog = Catalog::built_in();
    let found = catalog
        .case_study(&CaseStudyId::new("ai-mektep"))
        .expect("ai-mektep exists");
    assert!(found.title.starts_with("AiMektep"));
    assert!(catalog.case_study(&CaseStudyId::new("nope")).is_none());
}

#[test]
fn every_case_study_has_all_three_perspectives_filled() {
    let catalog = Catalog::built_in();
    for case in &catalog.case_studies {
        for perspective in Perspective::ALL {
            let note = case.perspectives.get(perspective);
            assert!(!note.title.trim().is_empty(), "{}: empty title", case.id.0);
            assert!(!note.content.trim().is_empty(), "{}: empty content", case.id.0);
        }
    }
}

#[test]
fn validation_rejects_duplicate_case_study_ids() {
    let mut catalog = Catalog::built_in();
    let duplicate = catalog.case_studies[0].clone();
    catalog.case_studies.push(duplicate);
    assert_eq!(
        catalog.validate(),
        Err(ContentError::DuplicateCaseStudyId("ai-mektep".to_string()))
    );
}

#[test]
fn validation_rejects_empty_mandatory_fields() {
    let mut catalog = Catalog::built_in();
    catalog.case_studies[1].problem = "   ".to_string();
    let id = catalog.case_studies[1].id.0.clone();
    assert_eq!(
        catalog.validate(),
        Err(ContentError::EmptyCaseStudyField {
            id,
            field: "problem"
        })
    );
}

#[test]
fn validation_rejects_non_web_link_urls() {
    let mut catalog = Catalog::built_in();
    catalog.contact_links[0].url = "ftp://example.com".to_string();
    assert!(matches!(
        catalog.validate(),
        Err(ContentError::UnsupportedLinkUrl { .. })
    ));
}

#[test]
fn perspective_labels_match_the_tab_captions() {
    assert_eq!(Perspective::User.label(), "USER");
    assert_eq!(Perspective::Business.label(), "BUSINESS");
    assert_eq!(Perspective::Tech.label(), "TECH");
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = Catalog::built_in();
    let json = serde_json::to_string(&catalog).expect("serialize");
    let back: Catalog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.case_studies.len(), catalog.case_studies.len());
    assert_eq!(back.profile.full_name(), "BEKJAN TEMENOV");
}
