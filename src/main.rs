use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use a2am_core::{A2amConfig, AtomToAtomMapping, Library, LogSink, MappingSettings};
use clap::Parser;
use crc_a2am::cli::{self, Args, CliError};
use crc_a2am::logging::init_logging;

fn main() -> ExitCode {
    let config = A2amConfig::from_env();
    init_logging(&config.log_level);
    let args = Args::parse();
    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &A2amConfig) -> Result<(), CliError> {
    let library = args.library()?;
    let settings = cli::settings(args, library, config)?;
    let mapping = build_mapping(library, settings)?.with_sink(Arc::new(LogSink));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args, library, &mapping, &mut out)
}

#[cfg(feature = "python")]
fn build_mapping(library: Library, settings: MappingSettings) -> Result<AtomToAtomMapping, CliError> {
    let module = match library {
        Library::ChytorchRxnMap => "chython",
        Library::EpamIndigo => "indigo",
        Library::RxnMapper => "rxnmapper",
    };
    if !a2amengine::core::is_module_available(module) {
        log::warn!("El módulo Python '{module}' no está disponible (Python {}); {} devolverá resultados vacíos",
                   a2amengine::core::python_version(),
                   library.display_name());
    }
    Ok(AtomToAtomMapping::with_python_engines(settings)?)
}

#[cfg(not(feature = "python"))]
fn build_mapping(_library: Library, _settings: MappingSettings) -> Result<AtomToAtomMapping, CliError> {
    Err(a2am_core::A2amError::InvalidConfig("compilado sin la feature `python`: no hay motores disponibles".into()).into())
}
