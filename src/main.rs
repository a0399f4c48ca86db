use std::io::{self, BufWriter, Write as _};
use std::process::ExitCode;

use payroll_records::codec::EmployeeStore;
use payroll_records::config::{AppConfig, ConfigLoader};
use payroll_records::console::{self, Pager, Prompter};
use payroll_records::reports::{self, PayrollFormat};
use payroll_records::{Args, Command, PayrollResult, ingest, models};
use tracing as log;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let config = match args.config.as_ref().map(ConfigLoader::load).transpose() {
        Ok(config) => args.apply_overrides(config.unwrap_or_default()),
        Err(e) => {
            init_logging(&args.apply_overrides(AppConfig::default()));
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    match run(&args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::from(config.log_level))
        .init();
}

fn run(command: &Command, config: &AppConfig) -> PayrollResult<()> {
    let store = EmployeeStore::new(&config.data_file, config.layout);
    let today = models::today();
    log::debug!(
        ?command,
        path = %store.path().display(),
        layout = %store.layout(),
        "Running command"
    );

    match command {
        Command::Add => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            console::add_employees(&mut prompter, &store)?;
        }
        Command::Import { input } => {
            let summary = ingest::import_file(input, &store)?;
            let mut out = io::stdout().lock();
            for skipped in &summary.skipped {
                writeln!(out, "Line {} skipped: {}", skipped.line, skipped.reason)?;
            }
            writeln!(
                out,
                "Imported {} employee(s), skipped {} line(s).",
                summary.imported,
                summary.skipped.len()
            )?;
        }
        Command::Veterans { no_pause } => {
            let stdout = io::stdout().lock();
            let report = if *no_pause {
                let mut pager = Pager::continuous(stdout);
                print_veterans(&store, config, today, &mut pager)?
            } else {
                let mut pager = Pager::interactive(io::stdin().lock(), stdout, config.page_size);
                print_veterans(&store, config, today, &mut pager)?
            };
            let mut out = io::stdout().lock();
            reports::render_veteran_summary(&mut out, &report, config.veteran_years)?;
        }
        Command::Payroll { json } => {
            let format = if *json {
                PayrollFormat::JsonLines
            } else {
                PayrollFormat::Text
            };
            let mut out = BufWriter::new(io::stdout().lock());
            reports::write_payroll(store.reader()?, today, &mut out, format)?;
            out.flush()?;
        }
        Command::TopEarners => {
            let top = reports::find_top_earners(store.reader()?, today)?;
            reports::render_top_earners(&mut io::stdout().lock(), &top)?;
        }
        Command::Provinces { all } => {
            let counts = reports::count_by_province(store.reader()?)?;
            let mut out = io::stdout().lock();
            if *all {
                reports::render_all_counts(&mut out, &counts)?;
            }
            reports::render_most_populous(&mut out, &counts)?;
        }
    }
    Ok(())
}

fn print_veterans<R, W>(
    store: &EmployeeStore,
    config: &AppConfig,
    today: chrono::NaiveDate,
    pager: &mut Pager<R, W>,
) -> PayrollResult<reports::VeteranReport>
where
    R: io::BufRead,
    W: io::Write,
{
    let report = reports::scan_veterans(store.reader()?, today, config.veteran_years, |employee| {
        pager.write_line(&reports::format_veteran_line(employee))
    })?;
    pager.output_mut().flush()?;
    Ok(report)
}
