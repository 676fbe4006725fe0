//! eventdesk-client CLI entry point.

use std::io::Read;

use clap::Parser;

use eventdesk_client::cli::{Cli, Commands, OutputFormat};
use eventdesk_client::client::events::UpdateEventRequest;
use eventdesk_client::client::EventdeskClient;
use eventdesk_client::output::{format_output, pretty};
use eventdesk_client::reminders;
use eventdesk_client::validate::{validate_email, validate_name};
use eventdesk_core::events::Event;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = EventdeskClient::new(&cli.base_url);

    match cli.command {
        Commands::Events(events_cmd) => {
            use eventdesk_client::cli::events::EventsAction;
            match events_cmd.action {
                EventsAction::List => {
                    let events = client.list_events().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                    }
                }
                EventsAction::Get { id } => {
                    let event = client.get_event(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_event(&event)),
                    }
                }
                EventsAction::Add {
                    id,
                    name,
                    date,
                    time,
                    location,
                    organizer,
                    description,
                } => {
                    validate_name(&name)?;

                    let mut event = Event::new(id, name, date);
                    event.time = time;
                    event.location = location;
                    event.organizer = organizer;
                    event.description = description;

                    let echoed = client.create_event(&event).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&echoed, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Submitted:\n{}", pretty::format_event(&echoed))
                        }
                    }
                }
                EventsAction::Batch { file } => {
                    let contents = if file.as_os_str() == "-" {
                        let mut buf = String::new();
                        std::io::stdin().read_to_string(&mut buf)?;
                        buf
                    } else {
                        std::fs::read_to_string(&file)?
                    };
                    let events: Vec<Event> = serde_json::from_str(&contents)?;

                    let echoed = client.create_events_batch(&events).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&echoed, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Submitted {} events", echoed.len())
                        }
                    }
                }
                EventsAction::Edit {
                    id,
                    name,
                    date,
                    time,
                    location,
                    organizer,
                    description,
                } => {
                    let event = client
                        .update_event(
                            id,
                            UpdateEventRequest {
                                name,
                                date,
                                time,
                                location,
                                organizer,
                                description,
                            },
                        )
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Delete { id } => {
                    let message = client.delete_event(id).await?;
                    if !cli.quiet {
                        println!("{}", message);
                    }
                }
            }
        }
        Commands::Register(register_cmd) => {
            validate_name(&register_cmd.name)?;
            validate_email(&register_cmd.email)?;

            let message = client
                .register(
                    register_cmd.event_id,
                    &register_cmd.name,
                    &register_cmd.email,
                )
                .await?;
            if !cli.quiet {
                println!("{}", message);
            }
        }
        Commands::Reminders(reminders_cmd) => {
            let window = reminders::parse_window(&reminders_cmd.before)?;

            loop {
                let events = client.list_events().await?;
                let now = chrono::Local::now().naive_local();
                let due = reminders::due_for_reminder(&events, now, window);

                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&due, cli.format)),
                    OutputFormat::Pretty => {
                        if due.is_empty() {
                            if !cli.quiet {
                                println!("No upcoming events within {}", reminders_cmd.before);
                            }
                        } else {
                            for event in &due {
                                println!(
                                    "Reminder: {} starts at {}",
                                    event.name,
                                    reminders::event_start(event)
                                );
                            }
                        }
                    }
                }

                if !reminders_cmd.watch {
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_secs(
                    reminders_cmd.interval_seconds,
                ))
                .await;
            }
        }
        Commands::Health(health_cmd) => {
            use eventdesk_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.health_live().await?;
                    if !cli.quiet {
                        println!("Server is live");
                    }
                }
            }
        }
    }

    Ok(())
}
