mod annotate;
mod columns;
mod config;
mod display;
mod extract;

use std::io::Write;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "senusa";
    pub const BIN_NAME: &str = "senusa";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("SENUSA")
        .about("Annotate the variants of a VCF file with Ensembl VEP and browse the results as a table.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(extract::cli::create_extract_cli())
        .subcommand(annotate::cli::create_annotate_cli())
        .subcommand(columns::cli::create_columns_cli())
}

fn init_logging(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG directives win over the -v level
    env_logger::Builder::new()
        .filter_level(filter_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));
    log::debug!("{} {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // EXTRACT
        //
        Some((extract::cli::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            annotate::handlers::run_annotate(matches)?;
        }

        //
        // COLUMNS
        //
        Some((columns::cli::COLUMNS_CMD, _)) => {
            columns::handlers::run_columns();
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
