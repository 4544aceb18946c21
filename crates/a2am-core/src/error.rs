//! Errores del llamador y de configuración.
//!
//! Los errores de los motores (`EngineError`) nunca llegan aquí: los
//! adaptadores los absorben y devuelven un resultado vacío.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum A2amError {
    #[error("Librería desconocida: '{0}' (valores válidos: chytorch_rxnmap, epam_indigo, rxnmapper)")]
    UnknownLibrary(String),
    #[error("Opciones inválidas para {library}: {message}")]
    InvalidOptions { library: &'static str, message: String },
    #[error("Configuración inválida: {0}")]
    InvalidConfig(String),
    #[error("Error creando el pool de trabajadores: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl A2amError {
    pub(crate) fn invalid_options(library: &'static str, message: impl Into<String>) -> Self {
        A2amError::InvalidOptions { library, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_library_format() {
        let err = A2amError::UnknownLibrary("rdkit".into());
        assert_eq!(err.to_string(),
                   "Librería desconocida: 'rdkit' (valores válidos: chytorch_rxnmap, epam_indigo, rxnmapper)");
    }

    #[test]
    fn test_invalid_options_format() {
        let err = A2amError::invalid_options("EPAM Indigo", "timeout_period_ms debe ser mayor que 0");
        assert_eq!(err.to_string(), "Opciones inválidas para EPAM Indigo: timeout_period_ms debe ser mayor que 0");
    }

    #[test]
    fn test_worker_pool_variant_from() {
        // un pool global ya construido impide construir otro
        let _ = rayon::ThreadPoolBuilder::new().num_threads(1).build_global();
        let build_err = rayon::ThreadPoolBuilder::new().num_threads(1).build_global().unwrap_err();
        let err: A2amError = build_err.into();
        assert!(err.to_string().starts_with("Error creando el pool de trabajadores: "));
    }
}
