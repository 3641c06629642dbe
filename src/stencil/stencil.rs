use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: &F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Stencils are the combination of an operation and neighbor offsets.
/// The operation is kept as is rather than reduced to weights,
/// so results match the written formula bit for bit.
pub struct Stencil<
    Operation,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
> where
    Operation: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
{
    operation: Operation,
    offsets: [Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE],
}

impl<Operation, const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
    Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>
where
    Operation: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
{
    pub fn new(
        offsets: [[i32; GRID_DIMENSION]; NEIGHBORHOOD_SIZE],
        operation: Operation,
    ) -> Self {
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            operation,
        }
    }

    pub fn offsets(&self) -> &[Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    pub fn weights(&self) -> Values<NEIGHBORHOOD_SIZE> {
        extract_weights(&self.operation)
    }

    #[inline]
    pub fn apply(&self, args: &[f64; NEIGHBORHOOD_SIZE]) -> f64 {
        (self.operation)(args)
    }
}
