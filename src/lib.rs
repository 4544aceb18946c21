//! crc-a2am: binario `map-reaction-smiles` sobre `a2am-core`.
//!
//! `cli` define los argumentos y el formato de salida; `logging` instala el
//! logger de terminal según `A2AM_LOG_LEVEL`.

pub mod cli;
pub mod logging;

pub use cli::{Args, CliError};
