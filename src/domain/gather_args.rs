use crate::domain::*;
use crate::error::GridError;
use crate::stencil::*;
use crate::util::*;

/// Collect stencil arguments around `mesh_coord` from `input`.
/// Neighbors outside of the grid are reported, not wrapped or clamped.
pub fn gather_args<Operation, const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<Operation, 2, NEIGHBORHOOD_SIZE>,
    input: &Grid,
    mesh_coord: &Coord<2>,
) -> Result<[f64; NEIGHBORHOOD_SIZE], GridError>
where
    Operation: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
{
    let mut result = [0.0; NEIGHBORHOOD_SIZE];
    for (i, n_i) in stencil.offsets().iter().enumerate() {
        result[i] = input.view(&(mesh_coord + n_i))?;
    }
    Ok(result)
}
