use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use cashflow::cli::{handle_report_command, ReportArgs};
use cashflow::ReportError;

#[derive(Parser)]
#[command(
    name = "cashflow",
    author = "Kaylee Beyene",
    version,
    about = "Turn a CSV transaction ledger into a cash-flow report",
    long_about = "cashflow reads a ledger of credits and debits, totals income and \
                  expenses, buckets expenses by month, ranks the top counterparties \
                  and writes a single self-contained report. Set RUST_LOG=info \
                  (or debug) to trace the pipeline."
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,
}

fn run(cli: Cli) -> Result<()> {
    let artifact = handle_report_command(&cli.report)?;
    println!("{}", artifact.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<ReportError>() {
            Some(report_err) => {
                eprintln!("error: {} stage failed: {}", report_err.stage(), report_err)
            }
            None => eprintln!("error: {:#}", err),
        }
        std::process::exit(1);
    }
}
