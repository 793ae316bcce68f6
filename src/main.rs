use std::io::Write;
use crate::network::Network;
use crate::route::RouteKey;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tabled::Tabled;

mod airport;
mod flight;
mod network;
mod route;

#[derive(Parser)]
struct Args {
    /// Path to the airports JSON dataset
    #[arg(short, long, value_name = "FILE", default_value = "data/airports.json")]
    airports: PathBuf,

    /// Path to the flights JSON dataset
    #[arg(short, long, value_name = "FILE", default_value = "data/flights.json")]
    flights: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct RouteRow {
    route: String,
    flights: usize,
    combined: usize,
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table(mut table: tabled::Table, rows: usize) {
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let network = Network::load_from_files(&args.airports, &args.flights)?;
    let total_flights: usize = network.routes().map(|(_, bucket)| bucket.len()).sum();
    println!(
        "Route map ready. {} flights across {} routes touching {} airports.",
        total_flights,
        network.routes().count(),
        network.visited_airports().len()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "airports".to_string(),
            "airport".to_string(),
            "routes".to_string(),
            "flights".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "airports" => {
                        let mut listed = Vec::new();
                        let mut missing = Vec::new();
                        for code in network.visited_airports() {
                            match network.airport(code) {
                                Some(info) => listed.push(info),
                                None => missing.push(code.as_ref()),
                            }
                        }
                        if listed.is_empty() {
                            println!("No airports with traffic.");
                        } else {
                            let rows = listed.len();
                            print_table(tabled::Table::new(&listed), rows);
                        }
                        if !missing.is_empty() {
                            println!("{}", format!("No airport record for: {}", missing.join(", ")).yellow());
                        }
                    },
                    "airport" => {
                        if let Some(code) = parts.get(1) {
                            match network.airport(code) {
                                Some(info) => println!("{} ({}, {})", info, info.lat, info.lng),
                                None => println!("{}", format!("Unknown airport: {}", code).red()),
                            }
                        } else {
                            println!("Usage: airport <code>");
                        }
                    },
                    "routes" => {
                        let mut rows: Vec<RouteRow> = network.routes()
                            .map(|(key, bucket)| RouteRow {
                                route: key.to_string(),
                                flights: bucket.len(),
                                combined: network.route_count(key),
                            })
                            .collect();
                        rows.sort_by(|a, b| a.route.cmp(&b.route));
                        if rows.is_empty() {
                            println!("No routes found.");
                        } else {
                            let count = rows.len();
                            print_table(tabled::Table::new(&rows), count);
                        }
                    },
                    "flights" => {
                        if let Some(raw) = parts.get(1) {
                            match raw.parse::<RouteKey>() {
                                Ok(key) => {
                                    let flights = network.flights_for_route(&key);
                                    if flights.is_empty() {
                                        println!("No flights on route {}.", key);
                                    } else {
                                        println!("{}", key.to_string().bold());
                                        let rows = flights.len();
                                        print_table(tabled::Table::new(&flights), rows);
                                    }
                                },
                                Err(e) => println!("{}", format!("{}: {}", raw, e).red()),
                            }
                        } else {
                            println!("Usage: flights <departure>-<arrival>");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  airports            - List every airport touched by at least one flight");
                        println!("  airport <code>      - Show one airport with its coordinates");
                        println!("  routes              - List routes with per-direction and combined flight counts");
                        println!("  flights <dep>-<arr> - List flights between two airports, either direction");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit the route map\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
