use crate::util::*;

/// Triangular hole cut out of the plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleGeometry {
    vertices: [Point; 3],
}

impl Default for HoleGeometry {
    fn default() -> Self {
        HoleGeometry {
            vertices: [Point::origin(); 3],
        }
    }
}

impl HoleGeometry {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        HoleGeometry {
            vertices: [p1, p2, p3],
        }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Pseudo scalar products of `point` against each edge `(v_i, v_i+1)`:
    /// `(x_i - x) * (y_i+1 - y_i) - (x_i+1 - x_i) * (y_i - y)`.
    pub fn check_values(&self, point: &Point) -> [f64; 3] {
        std::array::from_fn(|i| {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % 3];
            (a.x - point.x) * (b.y - a.y) - (b.x - a.x) * (a.y - point.y)
        })
    }

    /// A point is in the hole when all three check values share a sign.
    /// Zero never counts as negative, so points on an edge or at a vertex
    /// land inside only when the remaining values are non-negative,
    /// which depends on the winding of the vertices.
    pub fn contains(&self, point: &Point) -> bool {
        let negatives = self
            .check_values(point)
            .iter()
            .filter(|v| **v < 0.0)
            .count();
        negatives == 3 || negatives == 0
    }
}

/// How a mesh node is treated during a time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Outermost row or column, refreshed from the outer restrictions.
    Edge,
    /// Regular node, updated with the heat stencil.
    Interior,
    /// Outside the hole but next to it, updated with the hole restriction
    /// applied to `anchor`, the first neighbor that is a regular node.
    Border { anchor: Option<(usize, usize)> },
    /// Masked out.
    Hole,
}

/// Classifies points of a mesh with steps `dx`, `dy` against a hole.
#[derive(Debug, Clone, Copy)]
pub struct HoleClassifier<'a> {
    hole: &'a HoleGeometry,
    dx: f64,
    dy: f64,
}

impl<'a> HoleClassifier<'a> {
    pub fn new(hole: &'a HoleGeometry, dx: f64, dy: f64) -> Self {
        HoleClassifier { hole, dx, dy }
    }

    /// Continuous location of node `(row, col)`.
    #[inline]
    pub fn node_point(&self, row: usize, col: usize) -> Point {
        Point::new(col as f64 * self.dx, row as f64 * self.dy)
    }

    #[inline]
    pub fn point_in_hole(&self, point: &Point) -> bool {
        self.hole.contains(point)
    }

    /// Outside the hole, with one of the eight surrounding mesh
    /// neighbors inside it.
    pub fn point_on_border(&self, point: &Point) -> bool {
        if self.point_in_hole(point) {
            return false;
        }
        let (x, y, dx, dy) = (point.x, point.y, self.dx, self.dy);
        [
            (x, y - dy),
            (x, y + dy),
            (x - dx, y),
            (x + dx, y),
            (x + dx, y - dy),
            (x + dx, y + dy),
            (x - dx, y - dy),
            (x - dx, y + dy),
        ]
        .iter()
        .any(|&(nx, ny)| self.point_in_hole(&Point::new(nx, ny)))
    }

    fn is_regular(&self, row: usize, col: usize) -> bool {
        let point = self.node_point(row, col);
        !self.point_on_border(&point) && !self.point_in_hole(&point)
    }

    /// First regular neighbor of an interior node, trying
    /// `+x`, `-x`, `-y`, `+y` in that order.
    pub fn border_anchor(
        &self,
        row: usize,
        col: usize,
    ) -> Option<(usize, usize)> {
        debug_assert!(row > 0 && col > 0);
        [
            (row, col + 1),
            (row, col - 1),
            (row - 1, col),
            (row + 1, col),
        ]
        .into_iter()
        .find(|&(r, c)| self.is_regular(r, c))
    }

    /// Kind of an interior node.
    pub fn classify(&self, row: usize, col: usize) -> NodeKind {
        let point = self.node_point(row, col);
        if self.point_in_hole(&point) {
            NodeKind::Hole
        } else if self.point_on_border(&point) {
            NodeKind::Border {
                anchor: self.border_anchor(row, col),
            }
        } else {
            NodeKind::Interior
        }
    }

    /// Classify every node of a `rows` x `cols` mesh.
    pub fn node_map(&self, rows: usize, cols: usize) -> NodeMap {
        profiling::scope!("hole_classifier::node_map");
        let kinds = (0..rows * cols)
            .map(|l| {
                let (row, col) = linear_to_coord(l, cols);
                if row == 0 || col == 0 || row + 1 == rows || col + 1 == cols {
                    NodeKind::Edge
                } else {
                    self.classify(row, col)
                }
            })
            .collect();
        NodeMap { rows, cols, kinds }
    }
}

/// Node kinds for a whole mesh.
/// The hole and the steps are fixed for the length of a run,
/// so this is computed once and read every step.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMap {
    rows: usize,
    cols: usize,
    kinds: Vec<NodeKind>,
}

impl NodeMap {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn kind(&self, row: usize, col: usize) -> NodeKind {
        debug_assert!(row < self.rows);
        self.kinds[coord_to_linear(row, col, self.cols)]
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.kinds.iter().filter(|k| **k == kind).count()
    }

    pub fn border_count(&self) -> usize {
        self.kinds
            .iter()
            .filter(|k| matches!(k, NodeKind::Border { .. }))
            .count()
    }
}
