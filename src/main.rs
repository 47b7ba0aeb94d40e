use std::path::Path;
use std::process;

use text_reader::adapters::outbound::console::StdoutPresenter;
use text_reader::adapters::outbound::filesystem::FileSystemReader;
use text_reader::adapters::outbound::logging::{init_logging, TracingLogger};
use text_reader::application::dto::FileReport;
use text_reader::application::factories::FormatterFactory;
use text_reader::application::use_cases::ReadTextUseCase;
use text_reader::cli::Args;
use text_reader::config::{discover_config, load_config_from_path, Settings};
use text_reader::ports::inbound::ReadTextPort;
use text_reader::ports::outbound::OutputPresenter;
use text_reader::shared::error::{ExitCode, ReadError};
use text_reader::shared::Result;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(config.as_ref(), &args.overrides())?;

    init_logging(&settings.log)?;
    if let Some(ref config) = config {
        for warning in config.unknown_field_warnings() {
            tracing::warn!("{}", warning);
        }
    }
    tracing::debug!(
        files = args.paths.len(),
        format = %settings.format,
        policy = %settings.policy,
        "reading files"
    );

    // Create adapters (Dependency Injection)
    let source = FileSystemReader::new().with_max_file_size(settings.max_file_size);
    let logger = TracingLogger::with_component(settings.component.clone());
    let reader = ReadTextUseCase::new(source, logger).with_policy(settings.policy);

    let mut reports = Vec::with_capacity(args.paths.len());
    let mut failures: Vec<ReadError> = Vec::new();
    for path in &args.paths {
        match reader.read_text(path) {
            Ok(outcome) => reports.push(FileReport::from_result(path, Ok(outcome))),
            Err(err) => {
                reports.push(FileReport::from_result(path, Err(&err)));
                failures.push(err);
            }
        }
    }

    // Present whatever was read before reporting failures
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&reports)?;
    StdoutPresenter::new().present(&output)?;

    let failure_count = failures.len();
    if let Some(first) = failures.into_iter().next() {
        return Err(anyhow::Error::new(first).context(format!(
            "{} of {} file(s) could not be read",
            failure_count,
            reports.len()
        )));
    }

    if reports.iter().all(FileReport::is_found) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::FileNotFound)
    }
}
