use crate::domain::*;
use crate::error::{GridError, SimulationError};
use crate::output::LayerSink;
use crate::stencil::standard_stencils;
use crate::stencil::*;
use crate::util::*;

/// Diffusivity used unless [`Model::set_diffusivity`] is called.
pub const DEFAULT_DIFFUSIVITY: f64 = 0.1;

/// Upper bound for `(dt / dx)^2` and for the diffusion number.
pub const STABILITY_LIMIT: f64 = 0.5;

fn check_positive(
    parameter: &'static str,
    value: f64,
) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter { parameter, value })
    }
}

/// Non-stationary heat conduction on a rectangular plate
/// with a triangular hole, integrated with an explicit scheme.
#[derive(Debug, Clone)]
pub struct Model {
    present: Grid,
    previous: Grid,

    width: f64,
    height: f64,
    nodes_x: usize,
    nodes_y: usize,
    x_delta: f64,
    y_delta: f64,
    time_delta: f64,
    diffusivity: f64,

    hole_geometry: HoleGeometry,
    outer_restrictions: OuterRestrictions,
    inner_restriction: Restriction,
}

impl Model {
    /// `delta` is used for both axes.
    /// Fails when `(time_delta / delta)^2` exceeds [`STABILITY_LIMIT`].
    pub fn new(
        width: f64,
        height: f64,
        delta: f64,
        time_delta: f64,
    ) -> Result<Self, SimulationError> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        check_positive("delta", delta)?;
        check_positive("time_delta", time_delta)?;

        let ratio = (time_delta / delta) * (time_delta / delta);
        if ratio > STABILITY_LIMIT {
            return Err(SimulationError::StabilityViolation { ratio });
        }

        let nodes_x = node_count(width, delta);
        let nodes_y = node_count(height, delta);
        if nodes_x < 3 || nodes_y < 3 {
            return Err(SimulationError::DegenerateMesh {
                rows: nodes_y,
                cols: nodes_x,
            });
        }

        let model = Model {
            present: Grid::new(nodes_y, nodes_x),
            previous: Grid::new(nodes_y, nodes_x),
            width,
            height,
            nodes_x,
            nodes_y,
            x_delta: delta,
            y_delta: delta,
            time_delta,
            diffusivity: DEFAULT_DIFFUSIVITY,
            hole_geometry: HoleGeometry::default(),
            outer_restrictions: OuterRestrictions::default(),
            inner_restriction: Restriction::default(),
        };
        log::debug!(
            "Model {width}x{height}, {nodes_y}x{nodes_x} nodes, \
             dx = {delta}, dt = {time_delta}"
        );
        model.warn_if_unstable();
        Ok(model)
    }

    /// `a * dt * (1 / dx^2 + 1 / dy^2)`, the explicit scheme is stable
    /// while this stays at or below [`STABILITY_LIMIT`].
    pub fn diffusion_number(&self) -> f64 {
        self.diffusivity
            * self.time_delta
            * (1.0 / (self.x_delta * self.x_delta)
                + 1.0 / (self.y_delta * self.y_delta))
    }

    fn warn_if_unstable(&self) {
        let number = self.diffusion_number();
        if number > STABILITY_LIMIT {
            log::warn!(
                "diffusion number {number} exceeds {STABILITY_LIMIT}, \
                 the explicit scheme will not be stable"
            );
        }
    }

    pub fn set_hole_geometry(&mut self, p1: Point, p2: Point, p3: Point) {
        self.hole_geometry = HoleGeometry::new(p1, p2, p3);
    }

    pub fn hole_geometry(&self) -> &HoleGeometry {
        &self.hole_geometry
    }

    /// Fill both layers with `value`.
    pub fn set_initial_condition(&mut self, value: f64) {
        self.present.fill(value);
        self.previous.fill(value);
    }

    pub fn set_outer_restrictions(
        &mut self,
        up: Restriction,
        down: Restriction,
        left: Restriction,
        right: Restriction,
    ) {
        self.outer_restrictions = OuterRestrictions::new(up, down, left, right);
    }

    pub fn set_outer_restriction_set(
        &mut self,
        restrictions: OuterRestrictions,
    ) {
        self.outer_restrictions = restrictions;
    }

    pub fn set_outer_restriction(
        &mut self,
        edge: Edge,
        restriction: Restriction,
    ) {
        self.outer_restrictions.set(edge, restriction);
    }

    pub fn outer_restrictions(&self) -> &OuterRestrictions {
        &self.outer_restrictions
    }

    pub fn set_inner_restriction(&mut self, restriction: Restriction) {
        self.inner_restriction = restriction;
    }

    pub fn inner_restriction(&self) -> Restriction {
        self.inner_restriction
    }

    pub fn set_diffusivity(
        &mut self,
        diffusivity: f64,
    ) -> Result<(), SimulationError> {
        check_positive("diffusivity", diffusivity)?;
        self.diffusivity = diffusivity;
        self.warn_if_unstable();
        Ok(())
    }

    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn nodes_x(&self) -> usize {
        self.nodes_x
    }

    pub fn nodes_y(&self) -> usize {
        self.nodes_y
    }

    pub fn x_delta(&self) -> f64 {
        self.x_delta
    }

    pub fn y_delta(&self) -> f64 {
        self.y_delta
    }

    pub fn time_delta(&self) -> f64 {
        self.time_delta
    }

    /// Most recently completed layer.
    pub fn present(&self) -> &Grid {
        &self.present
    }

    /// Layer the most recent step was computed from.
    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    pub fn classifier(&self) -> HoleClassifier<'_> {
        HoleClassifier::new(&self.hole_geometry, self.x_delta, self.y_delta)
    }

    /// Number of whole time steps in `total_time`.
    /// Negative or NaN times give zero steps.
    pub fn steps_for(&self, total_time: f64) -> usize {
        (total_time / self.time_delta) as usize
    }

    /// Integrate over `total_time`, handing the initial layer
    /// and every completed layer to `storage`.
    pub fn time_integrate<S: LayerSink + ?Sized>(
        &mut self,
        total_time: f64,
        storage: &mut S,
    ) -> Result<(), SimulationError> {
        profiling::scope!("model::time_integrate");
        let steps = self.steps_for(total_time);
        log::info!(
            "Integrating {steps} steps of dt = {} on {}x{} nodes",
            self.time_delta,
            self.nodes_y,
            self.nodes_x
        );

        storage.commit_layer(&self.present)?;

        let node_map = self.classifier().node_map(self.nodes_y, self.nodes_x);
        log::debug!(
            "Hole covers {} nodes, border {} nodes",
            node_map.count(NodeKind::Hole),
            node_map.border_count()
        );
        let stencil = standard_stencils::heat_2d(
            self.time_delta,
            self.x_delta,
            self.y_delta,
            self.diffusivity,
        );

        for t in 0..steps {
            self.step(&stencil, &node_map)?;
            storage.commit_layer(&self.present)?;
            log::trace!("Committed layer {}", t + 1);
            profiling::finish_frame!();
        }

        log::info!("Finished after {steps} steps");
        Ok(())
    }

    fn step<Operation>(
        &mut self,
        stencil: &Stencil<Operation, 2, 5>,
        node_map: &NodeMap,
    ) -> Result<(), GridError>
    where
        Operation: Fn(&[f64; 5]) -> f64,
    {
        self.previous.copy_from(&self.present)?;
        self.update_nodes(stencil, node_map)?;
        self.refresh_outer_edges()
    }

    fn update_nodes<Operation>(
        &mut self,
        stencil: &Stencil<Operation, 2, 5>,
        node_map: &NodeMap,
    ) -> Result<(), GridError>
    where
        Operation: Fn(&[f64; 5]) -> f64,
    {
        profiling::scope!("model::update_nodes");
        let (rows, cols) = node_map.shape();
        if (rows, cols) != self.present.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.present.shape(),
                found: (rows, cols),
            });
        }
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                let value = match node_map.kind(row, col) {
                    NodeKind::Hole => 0.0,
                    NodeKind::Border { anchor } => {
                        let inner = match anchor {
                            Some((r, c)) => self.previous.get(r, c)?,
                            None => 0.0,
                        };
                        self.inner_restriction.apply(inner, self.x_delta)
                    }
                    NodeKind::Interior => {
                        let mesh_coord = vector![col as i32, row as i32];
                        let args =
                            gather_args(stencil, &self.previous, &mesh_coord)?;
                        stencil.apply(&args)
                    }
                    NodeKind::Edge => continue,
                };
                self.present.set(row, col, value)?;
            }
        }
        Ok(())
    }

    fn refresh_outer_edges(&mut self) -> Result<(), GridError> {
        let (rows, cols) = self.present.shape();
        let left = self.outer_restrictions[Edge::Left];
        let right = self.outer_restrictions[Edge::Right];
        let down = self.outer_restrictions[Edge::Down];
        let up = self.outer_restrictions[Edge::Up];

        for row in 1..rows - 1 {
            let left_inner = self.present.get(row, 1)?;
            let right_inner = self.present.get(row, cols - 2)?;
            self.present
                .set(row, 0, left.apply(left_inner, self.y_delta))?;
            self.present
                .set(row, cols - 1, right.apply(right_inner, self.y_delta))?;
        }

        for col in 0..cols {
            let down_inner = self.present.get(1, col)?;
            let up_inner = self.present.get(rows - 2, col)?;
            self.present
                .set(0, col, down.apply(down_inner, self.x_delta))?;
            self.present
                .set(rows - 1, col, up.apply(up_inner, self.x_delta))?;
        }
        Ok(())
    }
}
