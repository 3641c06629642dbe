mod restriction;

pub use restriction::*;

/// Outer edges of the plate.
/// `Down` is row 0 (`y = 0`), `Up` is the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Up,
    Down,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Up, Edge::Down, Edge::Left, Edge::Right];

    fn slot(self) -> usize {
        match self {
            Edge::Up => 0,
            Edge::Down => 1,
            Edge::Left => 2,
            Edge::Right => 3,
        }
    }
}

/// One restriction per outer edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OuterRestrictions {
    restrictions: [Restriction; 4],
}

impl OuterRestrictions {
    pub fn new(
        up: Restriction,
        down: Restriction,
        left: Restriction,
        right: Restriction,
    ) -> Self {
        OuterRestrictions {
            restrictions: [up, down, left, right],
        }
    }

    /// Same restriction on every edge.
    pub fn uniform(restriction: Restriction) -> Self {
        OuterRestrictions {
            restrictions: [restriction; 4],
        }
    }

    pub fn get(&self, edge: Edge) -> Restriction {
        self.restrictions[edge.slot()]
    }

    pub fn set(&mut self, edge: Edge, restriction: Restriction) {
        self.restrictions[edge.slot()] = restriction;
    }
}

impl std::ops::Index<Edge> for OuterRestrictions {
    type Output = Restriction;

    fn index(&self, edge: Edge) -> &Restriction {
        &self.restrictions[edge.slot()]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn edge_slots_test() {
        let r = OuterRestrictions::new(
            Restriction::Fixed(1.0),
            Restriction::Fixed(2.0),
            Restriction::Flux(3.0),
            Restriction::Convective,
        );
        assert_eq!(r[Edge::Up], Restriction::Fixed(1.0));
        assert_eq!(r[Edge::Down], Restriction::Fixed(2.0));
        assert_eq!(r.get(Edge::Left), Restriction::Flux(3.0));
        assert_eq!(r.get(Edge::Right), Restriction::Convective);
    }

    #[test]
    fn set_test() {
        let mut r = OuterRestrictions::default();
        for edge in Edge::ALL {
            assert_eq!(r[edge], Restriction::Fixed(0.0));
        }
        r.set(Edge::Down, Restriction::Flux(40.0));
        assert_eq!(r[Edge::Down], Restriction::Flux(40.0));
        assert_eq!(r[Edge::Up], Restriction::Fixed(0.0));
        assert_eq!(
            OuterRestrictions::uniform(Restriction::Convective)[Edge::Right],
            Restriction::Convective
        );
    }
}
