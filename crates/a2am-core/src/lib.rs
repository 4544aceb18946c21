//! a2am-core: orquestación del mapeo átomo-a-átomo de reacciones.
//!
//! - `adapters`: un adaptador por motor con el contrato uniforme
//!   [`AtomToAtomMapper::map_reaction_smiles`] (nunca propaga errores del motor).
//! - `batch`: ejecución secuencial, por pool de trabajadores o por bloques, con
//!   aislamiento de fallos por elemento y reporte de progreso.
//! - `facade`: selección del motor por nombre ([`Library`]).
//! - `options`, `result`, `config`, `error`: tipos de soporte.
//!
//! La química (algoritmos de mapeo, canonicalización, inferencia) vive en los
//! motores externos expuestos por `a2amengine`.

pub mod adapters;
pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod facade;
pub mod library;
pub mod options;
pub mod progress;
pub mod result;

pub use adapters::{AtomToAtomMapper, ChytorchRxnMapAdapter, EpamIndigoAdapter, RxnMapperAdapter};
pub use config::A2amConfig;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::A2amError;
pub use facade::{AtomToAtomMapping, MappingEngines, MappingSettings};
pub use library::Library;
pub use options::{ChytorchRxnMapOptions, EpamIndigoOptions, ExistingMappingMode, RxnMapperOptions};
pub use progress::ProgressReporter;
pub use result::{MappingResult, QualitySignal};

pub use a2amengine::EngineError;
