use confman_core::repo::json_repo::CONFERENCE_FILE;
use confman_core::{Attendee, JsonRepository, PaymentType, RecordRepository};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs;
use std::sync::Mutex;

static LINES: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if record.args().to_string().contains("module=repo") {
            LINES.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[test]
fn loads_and_saves_log_start_ok_and_error_lines_without_contents() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path());
    let attendees = vec![
        Attendee::new("Ada", "Lovelace", Some(PaymentType::Cash)).unwrap(),
        Attendee::new("Alan", "Turing", Some(PaymentType::Check)).unwrap(),
    ];
    repo.save_attendees(&attendees).unwrap();
    repo.load_attendees().unwrap();

    fs::write(
        dir.path().join(CONFERENCE_FILE),
        r#"{"name":"Secret","nickName":"S","year":2024.0,"venue":"V"}"#,
    )
    .unwrap();
    repo.load_conference().unwrap_err();

    let lines = LINES.lock().unwrap().clone();
    let has = |needle: &str| lines.iter().any(|line| line.contains(needle));

    assert!(has("event=doc_save module=repo status=start kind=attendees"));
    assert!(has("event=doc_save module=repo status=ok kind=attendees count=2"));
    assert!(has("event=doc_load module=repo status=start kind=attendees"));
    assert!(has("event=doc_load module=repo status=ok kind=attendees count=2"));
    assert!(has("event=doc_load module=repo status=start kind=conference"));
    assert!(has("event=doc_load module=repo status=error kind=conference"));
    assert!(has("error_code=parse"));

    assert!(lines.iter().all(|line| !line.contains("Lovelace")));
    assert!(lines.iter().all(|line| !line.contains("2024.0")));
}
