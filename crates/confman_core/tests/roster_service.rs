use confman_core::repo::json_repo::{ATTENDEES_FILE, CONFERENCE_FILE};
use confman_core::{
    Attendee, Conference, ConferenceService, HasName, JsonRepository, PaymentType,
    PersistenceError, RecordRepository, RosterError, RosterService, Session, Speaker, Staff,
    TableView, Year,
};
use std::fs;

fn attendee(first: &str, last: &str) -> Attendee {
    Attendee::new(first, last, Some(PaymentType::CreditCard)).unwrap()
}

#[test]
fn add_appends_and_persists_full_roster() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = RosterService::new(&repo);

    let mut roster: Vec<Attendee> = service.load().unwrap();
    service.add(&mut roster, attendee("Ada", "Lovelace")).unwrap();
    service.add(&mut roster, attendee("Alan", "Turing")).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(repo.load_attendees().unwrap(), roster);
}

#[test]
fn replace_swaps_in_new_record_with_new_unique_id() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = RosterService::new(&repo);
    let mut roster = Vec::new();
    service.add(&mut roster, attendee("Ada", "Lovelace")).unwrap();
    service.add(&mut roster, attendee("Alan", "Turing")).unwrap();

    let edited = Attendee::new("Ada", "King", Some(PaymentType::Invoice)).unwrap();
    let previous = service.replace(&mut roster, 0, edited.clone()).unwrap();

    assert_eq!(previous.last_name(), "Lovelace");
    assert_ne!(previous.unique_id(), edited.unique_id());
    assert_eq!(roster[0], edited);
    assert_eq!(roster[1].first_name(), "Alan");

    let reloaded = repo.load_attendees().unwrap();
    assert_eq!(reloaded[0].unique_id(), edited.unique_id());
    assert_eq!(reloaded[0].payment_type(), PaymentType::Invoice);
}

#[test]
fn remove_deletes_by_position_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = RosterService::new(&repo);
    let mut roster = vec![];
    for (first, last, hat) in [("Ken", "Thompson", "L"), ("Dennis", "Ritchie", "M")] {
        service
            .add(&mut roster, Staff::new(first, last, hat).unwrap())
            .unwrap();
    }

    let removed = service.remove(&mut roster, 0).unwrap();

    assert_eq!(removed.first_name(), "Ken");
    assert_eq!(roster.len(), 1);
    assert_eq!(repo.load_staff().unwrap(), roster);
}

#[test]
fn out_of_range_index_is_no_selection_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = RosterService::new(&repo);
    let mut roster: Vec<Attendee> = Vec::new();

    let err = service.remove(&mut roster, 0).unwrap_err();
    assert!(matches!(err, RosterError::NoSelection { index: 0, len: 0 }));

    let err = service
        .replace(&mut roster, 3, attendee("Ada", "Lovelace"))
        .unwrap_err();
    assert!(matches!(err, RosterError::NoSelection { index: 3, len: 0 }));
    assert!(!dir.path().join(ATTENDEES_FILE).exists());
}

#[test]
fn failed_save_rolls_back_the_roster() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = RosterService::new(&repo);
    let mut roster = Vec::new();
    service.add(&mut roster, attendee("Ada", "Lovelace")).unwrap();

    let mut invalid = attendee("Alan", "Turing");
    invalid.set_last_name(" ");
    let err = service.add(&mut roster, invalid.clone()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Persistence(PersistenceError::Validation(_))
    ));
    assert_eq!(roster.len(), 1);

    let before = roster[0].clone();
    service.replace(&mut roster, 0, invalid).unwrap_err();
    assert_eq!(roster[0], before);
    assert_eq!(repo.load_attendees().unwrap(), roster);
}

#[test]
fn sessions_roster_roundtrips_through_service() {
    let dir = tempfile::tempdir().unwrap();
    let service = RosterService::new(JsonRepository::new(dir.path()));
    let mut sessions = Vec::new();
    let speaker = Speaker::new("Grace", "Hopper", "M").unwrap();

    service
        .add(
            &mut sessions,
            Session::new("Compilers", "Abstract", speaker).unwrap(),
        )
        .unwrap();

    let loaded: Vec<Session> = service.load().unwrap();
    assert_eq!(loaded, sessions);
    let view = TableView::from_records(&loaded);
    assert_eq!(view.rows[0][2], "Grace Hopper");
}

#[test]
fn conference_service_sets_and_clears_single_conference() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let service = ConferenceService::new(&repo);
    let mut current = service.load().unwrap();
    assert_eq!(current, None);

    let first = Conference::new("RustConf", "RC", Year::new(2024).unwrap(), "Montreal").unwrap();
    assert_eq!(service.set(&mut current, first.clone()).unwrap(), None);

    let edited = Conference::new("RustConf", "RC", Year::new(2025).unwrap(), "Seattle").unwrap();
    assert_eq!(service.set(&mut current, edited.clone()).unwrap(), Some(first));
    assert_eq!(repo.load_conference().unwrap(), Some(edited.clone()));

    assert_eq!(service.clear(&mut current).unwrap(), edited);
    assert_eq!(current, None);
    assert_eq!(repo.load_conference().unwrap(), None);

    let err = service.clear(&mut current).unwrap_err();
    assert!(matches!(err, RosterError::NoSelection { .. }));
}

#[test]
fn failed_clear_keeps_the_current_conference() {
    let dir = tempfile::tempdir().unwrap();
    let service = ConferenceService::new(JsonRepository::new(dir.path()));
    let conference =
        Conference::new("RustConf", "RC", Year::new(2024).unwrap(), "Montreal").unwrap();
    let mut current = Some(conference.clone());
    fs::create_dir(dir.path().join(CONFERENCE_FILE)).unwrap();

    let err = service.clear(&mut current).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Persistence(PersistenceError::Io { .. })
    ));
    assert_eq!(current, Some(conference));
}
