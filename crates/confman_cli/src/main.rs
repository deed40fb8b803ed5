//! Command-line front end over `confman_core`.
//!
//! # Responsibility
//! - Inspect and edit a conference data directory without the desktop UI.
//! - Follow the same load -> mutate -> save-all flow the UI panels use.

use clap::{Parser, Subcommand};
use confman_core::{
    Attendee, CollectionRecord, Conference, ConferenceService, EntityKind, JsonRepository,
    PaymentType, RecordRepository, RosterService, Session, Speaker, Staff, TableView,
    VendorSponsor, Year,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "confman", version, about = "Conference data manager")]
struct Cli {
    /// Directory holding the *_data.json documents.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[arg(long, default_value_t = confman_core::default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core ping and version.
    Ping,
    /// Record counts for every entity kind.
    Summary,
    /// Print one entity kind as a table.
    Show { kind: EntityKind },
    AddAttendee {
        first_name: String,
        last_name: String,
        payment_type: PaymentType,
    },
    AddSpeaker {
        first_name: String,
        last_name: String,
        shirt_size: String,
    },
    AddStaff {
        first_name: String,
        last_name: String,
        hat_size: String,
    },
    AddVendor {
        first_name: String,
        last_name: String,
        booth_name: String,
    },
    AddSession {
        title: String,
        abstract_text: String,
        speaker_first_name: String,
        speaker_last_name: String,
        speaker_shirt_size: String,
    },
    SetConference {
        name: String,
        nick_name: String,
        year: Year,
        venue: String,
    },
    ClearConference,
    /// Remove the record at a zero-based position.
    Remove { kind: EntityKind, index: usize },
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = confman_core::init_logging(&cli.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let repo = JsonRepository::new(&cli.data_dir);
    match run(cli.command.unwrap_or(Command::Summary), &repo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, repo: &JsonRepository) -> CliResult {
    let roster = RosterService::new(repo);
    let conferences = ConferenceService::new(repo);

    match command {
        Command::Ping => {
            println!("confman_core ping={}", confman_core::ping());
            println!("confman_core version={}", confman_core::core_version());
        }
        Command::Summary => summary(repo)?,
        Command::Show { kind } => show(repo, kind)?,
        Command::AddAttendee {
            first_name,
            last_name,
            payment_type,
        } => {
            let record = Attendee::new(first_name, last_name, Some(payment_type))?;
            add(&roster, record)?;
        }
        Command::AddSpeaker {
            first_name,
            last_name,
            shirt_size,
        } => add(&roster, Speaker::new(first_name, last_name, shirt_size)?)?,
        Command::AddStaff {
            first_name,
            last_name,
            hat_size,
        } => add(&roster, Staff::new(first_name, last_name, hat_size)?)?,
        Command::AddVendor {
            first_name,
            last_name,
            booth_name,
        } => add(&roster, VendorSponsor::new(first_name, last_name, booth_name)?)?,
        Command::AddSession {
            title,
            abstract_text,
            speaker_first_name,
            speaker_last_name,
            speaker_shirt_size,
        } => {
            let speaker = Speaker::new(speaker_first_name, speaker_last_name, speaker_shirt_size)?;
            add(&roster, Session::new(title, abstract_text, speaker)?)?;
        }
        Command::SetConference {
            name,
            nick_name,
            year,
            venue,
        } => {
            let mut current = conferences.load()?;
            conferences.set(&mut current, Conference::new(name, nick_name, year, venue)?)?;
            println!("conference saved");
        }
        Command::ClearConference => {
            let mut current = conferences.load()?;
            conferences.clear(&mut current)?;
            println!("conference cleared");
        }
        Command::Remove { kind, index } => remove(&roster, kind, index)?,
    }
    Ok(())
}

fn add<T, R>(roster: &RosterService<R>, record: T) -> CliResult
where
    T: CollectionRecord,
    R: RecordRepository,
{
    let mut records: Vec<T> = roster.load()?;
    roster.add(&mut records, record)?;
    println!("{} now has {} record(s)", T::KIND, records.len());
    Ok(())
}

fn remove<R: RecordRepository>(
    roster: &RosterService<R>,
    kind: EntityKind,
    index: usize,
) -> CliResult {
    fn remove_at<T, R>(roster: &RosterService<R>, index: usize) -> CliResult
    where
        T: CollectionRecord,
        R: RecordRepository,
    {
        let mut records: Vec<T> = roster.load()?;
        roster.remove(&mut records, index)?;
        println!("{} now has {} record(s)", T::KIND, records.len());
        Ok(())
    }

    match kind {
        EntityKind::Attendee => remove_at::<Attendee, R>(roster, index),
        EntityKind::Speaker => remove_at::<Speaker, R>(roster, index),
        EntityKind::Staff => remove_at::<Staff, R>(roster, index),
        EntityKind::VendorSponsor => remove_at::<VendorSponsor, R>(roster, index),
        EntityKind::Session => remove_at::<Session, R>(roster, index),
        EntityKind::Conference => Err("use clear-conference to delete the conference".into()),
    }
}

fn summary(repo: &JsonRepository) -> CliResult {
    println!("data_dir={}", repo.data_dir().display());
    for kind in EntityKind::ALL {
        let count = match kind {
            EntityKind::Conference => usize::from(repo.load_conference()?.is_some()),
            EntityKind::Attendee => repo.load_attendees()?.len(),
            EntityKind::Speaker => repo.load_speakers()?.len(),
            EntityKind::Staff => repo.load_staff()?.len(),
            EntityKind::VendorSponsor => repo.load_vendors()?.len(),
            EntityKind::Session => repo.load_sessions()?.len(),
        };
        println!("{kind}={count}");
    }
    Ok(())
}

fn show(repo: &JsonRepository, kind: EntityKind) -> CliResult {
    let view = match kind {
        EntityKind::Conference => {
            let conference: Vec<Conference> = repo.load_conference()?.into_iter().collect();
            TableView::from_records(&conference)
        }
        EntityKind::Attendee => TableView::from_records(&repo.load_attendees()?),
        EntityKind::Speaker => TableView::from_records(&repo.load_speakers()?),
        EntityKind::Staff => TableView::from_records(&repo.load_staff()?),
        EntityKind::VendorSponsor => TableView::from_records(&repo.load_vendors()?),
        EntityKind::Session => TableView::from_records(&repo.load_sessions()?),
    };

    if view.is_empty() {
        println!("no {kind} records");
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use confman_core::{EntityKind, PaymentType};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_attendee_with_payment_type() {
        let cli = Cli::parse_from(["confman", "add-attendee", "Ada", "Lovelace", "credit_card"]);
        match cli.command {
            Some(Command::AddAttendee { payment_type, .. }) => {
                assert_eq!(payment_type, PaymentType::CreditCard);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_show_kind_label() {
        let cli = Cli::parse_from(["confman", "--data-dir", "/tmp/conf", "show", "vendors"]);
        assert!(matches!(
            cli.command,
            Some(Command::Show {
                kind: EntityKind::VendorSponsor
            })
        ));
    }
}
