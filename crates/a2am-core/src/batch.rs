//! Drivers por lotes.
//!
//! Garantía común: la salida tiene la misma longitud que la entrada y la
//! posición i corresponde a la reacción i. Los fallos de un elemento quedan
//! como [`MappingResult::failed`] en su posición.
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::adapters::AtomToAtomMapper;
use crate::{A2amError, Library, MappingResult, ProgressReporter};

/// Etiqueta del indicador de progreso, p. ej.
/// `Mapping the chemical reaction SMILES strings (Library: EPAM Indigo | CPU: 4)`.
/// RXNMapper usa el verbo `Map`.
pub fn progress_label(library: Library, parameter: &str) -> String {
    let verb = match library {
        Library::RxnMapper => "Map",
        Library::ChytorchRxnMap | Library::EpamIndigo => "Mapping",
    };
    format!("{verb} the chemical reaction SMILES strings (Library: {} | {parameter})", library.display_name())
}

/// Un elemento a la vez, en orden.
pub fn map_sequentially<M, S>(mapper: &M, reactions: &[S], show_progress: bool) -> Vec<MappingResult>
    where M: AtomToAtomMapper + ?Sized,
          S: AsRef<str>
{
    let library = mapper.library();
    log::info!("Mapeando {} reacciones con {} (secuencial)", reactions.len(), library.display_name());
    let progress = ProgressReporter::new(progress_label(library, "CPU: ???"), reactions.len(), show_progress);
    let results: Vec<MappingResult> = reactions.iter()
                                               .map(|reaction| {
                                                   let result = mapper.map_reaction_smiles(reaction.as_ref());
                                                   progress.advance(1);
                                                   result
                                               })
                                               .collect();
    progress.finish();
    results
}

/// Reparte los elementos en un pool fijo de `number_of_cpu_cores` trabajadores.
/// El orden de inicio no está garantizado; el de la salida sí.
pub fn map_in_parallel<M, S>(mapper: &M,
                             reactions: &[S],
                             number_of_cpu_cores: usize,
                             show_progress: bool)
                             -> Result<Vec<MappingResult>, A2amError>
    where M: AtomToAtomMapper + ?Sized,
          S: AsRef<str> + Sync
{
    validate_number_of_cpu_cores(number_of_cpu_cores)?;
    let library = mapper.library();
    let pool = ThreadPoolBuilder::new().num_threads(number_of_cpu_cores)
                                       .thread_name(|index| format!("a2am-worker-{index}"))
                                       .build()?;
    log::info!("Mapeando {} reacciones con {} ({} trabajadores)",
               reactions.len(),
               library.display_name(),
               number_of_cpu_cores);
    let progress = ProgressReporter::new(progress_label(library, &format!("CPU: {number_of_cpu_cores}")),
                                         reactions.len(),
                                         show_progress);
    let results: Vec<MappingResult> = pool.install(|| {
                                              reactions.par_iter()
                                                       .map(|reaction| {
                                                           let result = mapper.map_reaction_smiles(reaction.as_ref());
                                                           progress.advance(1);
                                                           result
                                                       })
                                                       .collect()
                                          });
    progress.finish();
    Ok(results)
}

/// Tamaños de los bloques consecutivos: 25 elementos con `batch_size = 10`
/// dan `[10, 10, 5]`.
pub fn chunk_sizes(len: usize, batch_size: usize) -> Vec<usize> {
    if batch_size == 0 {
        return Vec::new();
    }
    (0..len).step_by(batch_size).map(|start| batch_size.min(len - start)).collect()
}

pub fn validate_number_of_cpu_cores(number_of_cpu_cores: usize) -> Result<(), A2amError> {
    if number_of_cpu_cores == 0 {
        return Err(A2amError::InvalidConfig("number_of_cpu_cores debe ser mayor que 0".into()));
    }
    Ok(())
}

pub fn validate_batch_size(batch_size: usize) -> Result<(), A2amError> {
    if batch_size == 0 {
        return Err(A2amError::InvalidConfig("batch_size debe ser mayor que 0".into()));
    }
    Ok(())
}
