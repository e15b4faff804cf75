use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table};
use tripdeck_app::App;
use tripdeck_app::add::{TripDraft, add_trip, save_sample_trip};
use tripdeck_app::aggregate::{COLLECTION_TABS, CollectionTab, TripCollections};
use tripdeck_core::doctor::DoctorReport;
use tripdeck_core::time::display_date;
use tripdeck_core::trip::Trip;
use tripdeck_tui::UiExit;

use crate::cli::{AddArgs, Cli, Command, TabArg};

pub fn run_with_deps(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Doctor) => run_doctor_command(),
        Some(Command::List { tab }) => run_list_command(tab),
        Some(Command::Add(args)) => run_add_command(args),
        Some(Command::Save { id }) => run_save_command(&id),
        None => run_root_command(),
    }
}

fn run_root_command() -> Result<()> {
    let ready = App::ensure_config_ready()?;
    let app = App::from_ready(&ready);

    if let UiExit::Navigate(path) = tripdeck_tui::run_trips(&app)? {
        println!("Next: {path}");
    }

    Ok(())
}

fn run_list_command(tab: Option<TabArg>) -> Result<()> {
    let ready = App::ensure_config_ready()?;
    let collections = App::from_ready(&ready).list()?;

    let tabs: Vec<CollectionTab> = match tab {
        Some(tab) => vec![tab.into()],
        None => COLLECTION_TABS.to_vec(),
    };

    for (position, tab) in tabs.into_iter().enumerate() {
        if position > 0 {
            println!();
        }
        print_collection(tab, &collections);
    }

    Ok(())
}

fn print_collection(tab: CollectionTab, collections: &TripCollections) {
    let trips = collections.get(tab);
    println!("{} ({})", tab.title(), trips.len());

    if trips.is_empty() {
        println!("{}", tab.empty_message());
        return;
    }

    println!("{}", trip_table(trips));
}

fn trip_table(trips: &[Trip]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Destination", "Days", "Author", "Created"]);

    for trip in trips {
        table.add_row(vec![
            Cell::new(trip.id.as_str()),
            Cell::new(trip.title.as_str()),
            Cell::new(format!("{}, {}", trip.destination, trip.country)),
            Cell::new(trip.duration),
            Cell::new(format!("@{}", trip.author.username)),
            Cell::new(display_date(&trip.created_at)),
        ]);
    }

    table
}

fn run_add_command(args: AddArgs) -> Result<()> {
    let ready = App::ensure_config_ready()?;
    let record = add_trip(
        &ready.store_path,
        TripDraft {
            title: args.title,
            destination: args.destination,
            country: args.country,
            duration: args.days,
            cover_image: args.cover_image,
        },
    )?;

    println!("Added trip {}: {}", record.id, record.title);
    Ok(())
}

fn run_save_command(id: &str) -> Result<()> {
    let ready = App::ensure_config_ready()?;
    if save_sample_trip(&ready.store_path, id)? {
        println!("Saved {id}");
    } else {
        println!("{id} is already saved");
    }
    Ok(())
}

fn run_doctor_command() -> Result<()> {
    let report = App::doctor();
    print_doctor_report(&report);
    Ok(())
}

fn print_doctor_report(report: &DoctorReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Status", "Details"]);

    for check in &report.checks {
        table.add_row(vec![
            Cell::new(check.name.as_str()),
            Cell::new(check.state),
            Cell::new(check.details.as_str()),
        ]);
    }

    println!("{table}");
    println!("{}", report.summary());
}
