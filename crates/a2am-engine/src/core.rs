use pyo3::prelude::*;

use crate::EngineError;

/// Importa un módulo Python; un fallo aquí significa que la librería no está instalada.
pub(crate) fn import<'py>(py: Python<'py>, engine: &'static str, module: &str) -> Result<Bound<'py, PyModule>, EngineError> {
    py.import(module)
      .map_err(|e| EngineError::init(engine, format!("no se pudo importar '{module}': {e}")))
}

/// Convierte un `PyErr` en `EngineError::Mapping` con el intérprete adjunto.
pub(crate) fn mapping_error(engine: &'static str, err: PyErr) -> EngineError {
    EngineError::mapping(engine, err.to_string())
}

/// Comprueba si un módulo Python se puede importar en el intérprete embebido.
pub fn is_module_available(module: &str) -> bool {
    Python::attach(|py| py.import(module).is_ok())
}

/// Versión del intérprete embebido, útil para diagnóstico.
pub fn python_version() -> String {
    Python::attach(|py| py.version().to_string())
}
