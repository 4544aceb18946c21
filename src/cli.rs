//! Argumentos y salida del binario `map-reaction-smiles`.
//!
//! Con `--reaction_smiles` se mapea una sola reacción y se imprimen dos
//! líneas legibles. Con `--reaction_smiles_file` se mapea el archivo entero
//! con el driver por lotes del motor y se imprime una línea JSON por reacción.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use a2am_core::{A2amConfig, A2amError, AtomToAtomMapping, Library, MappingResult, MappingSettings};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "map-reaction-smiles",
          version,
          about = "Mapeo átomo-a-átomo de reacciones químicas con Chytorch RxnMap, EPAM Indigo o RXNMapper")]
pub struct Args {
    /// Motor de mapeo
    #[arg(short = 'l', long = "library", value_parser = PossibleValuesParser::new(Library::TOKENS))]
    pub library: String,

    /// SMILES de la reacción a mapear
    #[arg(short = 's',
          long = "reaction_smiles",
          required_unless_present = "reaction_smiles_file",
          conflicts_with = "reaction_smiles_file")]
    pub reaction_smiles: Option<String>,

    /// Archivo con una reacción SMILES por línea
    #[arg(short = 'f', long = "reaction_smiles_file")]
    pub reaction_smiles_file: Option<PathBuf>,

    /// Trabajadores para EPAM Indigo (por defecto A2AM_NUMBER_OF_CPU_CORES)
    #[arg(long = "number_of_cpu_cores")]
    pub number_of_cpu_cores: Option<usize>,

    /// Tamaño de bloque para RXNMapper (por defecto A2AM_BATCH_SIZE)
    #[arg(long = "batch_size")]
    pub batch_size: Option<usize>,

    /// Opciones del motor como objeto JSON, p. ej. '{"handle_existing_atom_to_atom_mapping":"keep"}'
    #[arg(long = "options")]
    pub options: Option<String>,
}

impl Args {
    pub fn library(&self) -> Result<Library, CliError> { Ok(self.library.parse::<Library>()?) }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Mapping(#[from] A2amError),
    #[error("Opciones JSON inválidas para {library}: {message}")]
    Options { library: &'static str, message: String },
    #[error("Error leyendo {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Error de salida: {0}")]
    Output(#[from] io::Error),
    #[error("Error serializando resultado: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("El lote de {count} reacciones falló por completo ({library})")]
    BatchFailed { library: &'static str, count: usize },
}

/// Ajustes de mapeo: configuración de entorno, luego flags, luego `--options`.
pub fn settings(args: &Args, library: Library, config: &A2amConfig) -> Result<MappingSettings, CliError> {
    let mut settings = MappingSettings::from_config(config);
    if let Some(cores) = args.number_of_cpu_cores {
        settings.number_of_cpu_cores = cores;
    }
    if let Some(batch_size) = args.batch_size {
        settings.batch_size = batch_size;
    }
    if let Some(json) = args.options.as_deref() {
        let name = library.display_name();
        match library {
            Library::ChytorchRxnMap => settings.chytorch_rxnmap = merge_options(name, &settings.chytorch_rxnmap, json)?,
            Library::EpamIndigo => settings.epam_indigo = merge_options(name, &settings.epam_indigo, json)?,
            Library::RxnMapper => settings.rxnmapper = merge_options(name, &settings.rxnmapper, json)?,
        }
    }
    Ok(settings)
}

/// Superpone las claves de `json` sobre `base`. Las claves desconocidas se
/// rechazan al deserializar.
pub fn merge_options<T>(library: &'static str, base: &T, json: &str) -> Result<T, CliError>
    where T: Serialize + DeserializeOwned
{
    let invalid = |message: String| CliError::Options { library, message };
    let overrides: Value = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
    let Value::Object(overrides) = overrides else {
        return Err(invalid("se esperaba un objeto JSON".into()));
    };
    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    serde_json::from_value(merged).map_err(|e| invalid(e.to_string()))
}

/// Etiqueta de la señal de calidad de cada motor.
pub fn quality_label(library: Library) -> String {
    match library {
        Library::EpamIndigo => format!("Completed without Errors ({})", library.display_name()),
        Library::ChytorchRxnMap | Library::RxnMapper => format!("Score ({})", library.display_name()),
    }
}

/// Las dos líneas del modo de reacción única. Los valores ausentes se
/// imprimen como `None`.
pub fn render_single(library: Library, result: &MappingResult) -> String {
    let mapped = match &result.mapped_reaction_smiles {
        Some(smiles) => format!("'{smiles}'"),
        None => "None".to_string(),
    };
    let signal = result.quality_signal.map_or_else(|| "None".to_string(), |signal| signal.to_string());
    format!("Mapped Reaction SMILES: {mapped}\n{}: {signal}", quality_label(library))
}

#[derive(Debug, Serialize)]
struct BatchLine<'a> {
    index: usize,
    reaction_smiles: &'a str,
    #[serde(flatten)]
    result: &'a MappingResult,
}

/// Una línea JSON del modo archivo.
pub fn render_batch_line(index: usize, reaction_smiles: &str, result: &MappingResult) -> Result<String, CliError> {
    Ok(serde_json::to_string(&BatchLine { index, reaction_smiles, result })?)
}

/// Reacciones del archivo, una por línea; las líneas en blanco se ignoran.
pub fn read_reactions(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    Ok(content.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
}

/// Ejecuta el modo pedido por `args` y escribe el resultado en `out`.
pub fn run<W: Write>(args: &Args, library: Library, mapping: &AtomToAtomMapping, out: &mut W) -> Result<(), CliError> {
    if let Some(path) = &args.reaction_smiles_file {
        let reactions = read_reactions(path)?;
        log::info!("{} reacciones leídas de {}", reactions.len(), path.display());
        let results = mapping.map_reaction_smiles_strings(library, &reactions)?
                             .ok_or(CliError::BatchFailed { library: library.display_name(),
                                                            count: reactions.len() })?;
        for (index, (reaction, result)) in reactions.iter().zip(&results).enumerate() {
            writeln!(out, "{}", render_batch_line(index, reaction, result)?)?;
        }
        return Ok(());
    }
    let reaction_smiles = args.reaction_smiles.as_deref().unwrap_or_default();
    let result = mapping.map_reaction_smiles(library, reaction_smiles);
    writeln!(out, "{}", render_single(library, &result))?;
    Ok(())
}
