use crate::stencil::*;
use crate::util::*;

/// Inputs of the explicit heat conduction update for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatConductionParams<F> {
    pub t_curr: F,
    pub t_x_past: F,
    pub t_x_next: F,
    pub t_y_past: F,
    pub t_y_next: F,
    pub dt: F,
    pub dx: F,
    pub dy: F,
    pub a: F,
}

/// Explicit finite-difference update of one node:
/// `a * dt * (Dx + Dy) + T`, where `Dx`, `Dy` are the second differences
/// along each axis divided by the squared step.
pub fn heat_conduction<F: Float>(params: &HeatConductionParams<F>) -> F {
    let HeatConductionParams {
        t_curr,
        t_x_past,
        t_x_next,
        t_y_past,
        t_y_next,
        dt,
        dx,
        dy,
        a,
    } = *params;
    let two = F::one() + F::one();
    let dx2 = dx * dx;
    let dy2 = dy * dy;
    let d_x = (t_x_next - two * t_curr + t_x_past) / dx2;
    let d_y = (t_y_next - two * t_curr + t_y_past) / dy2;
    a * dt * (d_x + d_y) + t_curr
}

/// Five point heat stencil on `[x, y]` mesh offsets.
/// Arguments are ordered middle, left, right, bottom, top.
pub fn heat_2d(
    dt: f64,
    dx: f64,
    dy: f64,
    a: f64,
) -> Stencil<impl Fn(&[f64; 5]) -> f64, 2, 5> {
    Stencil::new(
        [[0, 0], [-1, 0], [1, 0], [0, -1], [0, 1]],
        move |args: &[f64; 5]| {
            heat_conduction(&HeatConductionParams {
                t_curr: args[0],
                t_x_past: args[1],
                t_x_next: args[2],
                t_y_past: args[3],
                t_y_next: args[4],
                dt,
                dx,
                dy,
                a,
            })
        },
    )
}
