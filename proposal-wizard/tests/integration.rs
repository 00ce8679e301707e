//! Integration tests for proposal-wizard

use chrono::NaiveDate;
use proposal_wizard::{
    Control, FieldValue, PROJECT_LOCATION, PROJECT_NAME, QueryParams, Registry, TestBackend,
    Wizard, WizardError, WizardEvent,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

#[test]
fn test_render_commits_every_field_of_the_page() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::new()).with_today(today());

    let mut backend = TestBackend::new().with_text(PROJECT_NAME, "Foo");
    wizard.render_page(&mut backend).unwrap();

    let values = wizard.session().values();
    assert_eq!(values.len(), 6);
    assert_eq!(values.get_text(PROJECT_NAME).unwrap(), "Foo");
    assert_eq!(values.get_text(PROJECT_LOCATION).unwrap(), "Mbuji Mayi");
    assert_eq!(values.get_text("Project Status").unwrap(), "Proposed");
    assert_eq!(values.get_date("Start Date").unwrap(), today());
    assert_eq!(values.get_text("Description").unwrap(), "");
    assert_eq!(backend.pages(), ["Basic Info".to_string()]);
}

#[test]
fn test_other_location_stores_free_text() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::new());

    let mut backend = TestBackend::new().with_other(PROJECT_LOCATION, 4, "Goma");
    wizard.render_page(&mut backend).unwrap();

    assert_eq!(
        wizard.session().get(PROJECT_LOCATION),
        Some(&FieldValue::from("Goma"))
    );
}

#[test]
fn test_rerender_without_input_is_idempotent() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::new()).with_today(today());

    let mut first = TestBackend::new()
        .with_text(PROJECT_NAME, "Foo")
        .with_other(PROJECT_LOCATION, 4, "Goma")
        .with_choice("Project Status", 3);
    wizard.render_page(&mut first).unwrap();
    let after_first = wizard.session().clone();

    let mut second = TestBackend::new();
    wizard.render_page(&mut second).unwrap();
    assert_eq!(wizard.session(), &after_first);

    // The re-render was seeded with the committed values.
    match &second.seen()[1].control {
        Control::Select {
            selected,
            other_text,
            ..
        } => {
            assert_eq!(*selected, 4);
            assert_eq!(other_text, "Goma");
        }
        other => panic!("Expected select, got {}", other.kind_name()),
    }
}

#[test]
fn test_walk_through_all_pages() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::new()).with_today(today());
    let mut backend = TestBackend::new();

    loop {
        wizard.render_page(&mut backend).unwrap();
        if wizard.session().is_last_page() {
            break;
        }
        wizard.dispatch(WizardEvent::Next).unwrap();
    }

    assert_eq!(wizard.session().values().len(), 24);
    assert_eq!(wizard.link().to_query_string(), "?page=5");
    assert_eq!(
        backend.pages(),
        [
            "Basic Info",
            "Objectives",
            "Team & Budget",
            "Analysis",
            "SWOT Analysis",
            "Follow-up"
        ]
        .map(String::from)
    );
}

#[test]
fn test_strict_backend_fails_on_unscripted_field() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::parse("?page=3"));

    let mut backend = TestBackend::strict().with_text("Risks", "Rain");
    let err = wizard.render_page(&mut backend).unwrap_err();
    assert!(matches!(err, WizardError::Backend(_)));
    assert!(err.to_string().contains("Rewards"));

    // Fields committed before the failure stay committed.
    assert_eq!(wizard.session().values().get_text("Risks").unwrap(), "Rain");
}

#[test]
fn test_resume_link_round_trip() {
    let registry = Registry::builtin().unwrap();
    let mut wizard = Wizard::resume(&registry, QueryParams::new());
    wizard.dispatch(WizardEvent::GoTo(4)).unwrap();

    let link = wizard.link().to_query_string();
    let resumed = Wizard::resume(&registry, QueryParams::parse(&link));
    assert_eq!(resumed.session().page_index(), 4);
    assert_eq!(resumed.current_page().name(), "SWOT Analysis");
}
