//! # Seed Data Generator
//!
//! Populates the database with sample companies and jobs for development.
//!
//! ## Usage
//! ```bash
//! # Use DATABASE_URL (or ./jobly.db)
//! cargo run -p jobly-db --bin seed
//!
//! # Specify database path
//! cargo run -p jobly-db --bin seed -- --db ./data/jobly.db
//!
//! # More jobs per company
//! cargo run -p jobly-db --bin seed -- --jobs 10
//! ```

use std::env;

use jobly_core::{NewCompany, NewJob};
use jobly_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// (handle, name, employees, description)
const COMPANIES: &[(&str, &str, i64, &str)] = &[
    ("anderson-arias", "Anderson, Arias and Morrow", 245, "Somebody program how I."),
    ("arnold-berger", "Arnold, Berger and Townsend", 795, "Kind crime at perhaps beat."),
    ("bauer-gallagher", "Bauer-Gallagher", 862, "Difficult ready trip question."),
    ("baker-santos", "Baker-Santos", 225, "Compare certain use."),
    ("hall-mills", "Hall-Mills", 266, "Change family color."),
    ("mejia-scott", "Mejia-Scott", 535, "Customer serve quickly."),
    ("watson-davis", "Watson-Davis", 819, "Year join loss."),
];

const TITLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Conservator",
    "Information Officer",
    "Accountant",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = DbConfig::from_env()?;
    let mut jobs_per_company: usize = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--jobs" | "-j" => {
                if i + 1 < args.len() {
                    jobs_per_company = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Jobly Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $DATABASE_URL or ./jobly.db)");
                println!("  -j, --jobs <N>     Jobs per company (default: 3)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Jobly Seed Data Generator");
    println!("=========================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    let existing = db.companies().count().await?;
    if existing > 0 {
        println!("Database already has {} companies", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    for (index, (handle, name, employees, description)) in COMPANIES.iter().enumerate() {
        let company = NewCompany {
            handle: handle.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            num_employees: Some(*employees),
            logo_url: Some(format!("/logos/logo{}.png", index % 4 + 1)),
        };

        if let Err(e) = db.companies().create(&company).await {
            eprintln!("Failed to insert {}: {}", handle, e);
            continue;
        }

        for n in 0..jobs_per_company {
            let seed = index * 31 + n * 7;
            let job = NewJob {
                title: TITLES[seed % TITLES.len()].to_string(),
                salary: Some(60_000 + (seed as i64 % 10) * 10_000),
                equity: if seed % 3 == 0 { None } else { Some((seed % 10) as f64 / 100.0) },
                company_handle: handle.to_string(),
            };

            if let Err(e) = db.jobs().create(&job).await {
                eprintln!("Failed to insert job for {}: {}", handle, e);
            }
        }
    }

    println!("Companies: {}", db.companies().count().await?);
    println!("Jobs:      {}", db.jobs().count().await?);
    println!();
    println!("Seed complete!");

    db.close().await;
    Ok(())
}
