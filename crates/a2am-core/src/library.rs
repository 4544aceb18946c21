use std::fmt;
use std::str::FromStr;

use crate::A2amError;

/// Motores de mapeo disponibles, identificados por su token de línea de comandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    ChytorchRxnMap,
    EpamIndigo,
    RxnMapper,
}

impl Library {
    pub const ALL: [Library; 3] = [Library::ChytorchRxnMap, Library::EpamIndigo, Library::RxnMapper];
    pub const TOKENS: [&'static str; 3] = ["chytorch_rxnmap", "epam_indigo", "rxnmapper"];

    pub fn token(&self) -> &'static str {
        match self {
            Library::ChytorchRxnMap => "chytorch_rxnmap",
            Library::EpamIndigo => "epam_indigo",
            Library::RxnMapper => "rxnmapper",
        }
    }

    /// Nombre legible del motor.
    pub fn display_name(&self) -> &'static str {
        match self {
            Library::ChytorchRxnMap => a2amengine::CHYTORCH_RXNMAP,
            Library::EpamIndigo => a2amengine::EPAM_INDIGO,
            Library::RxnMapper => a2amengine::RXNMAPPER,
        }
    }
}

impl FromStr for Library {
    type Err = A2amError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Library::ALL.into_iter()
                    .find(|library| library.token() == s)
                    .ok_or_else(|| A2amError::UnknownLibrary(s.to_string()))
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.token()) }
}
