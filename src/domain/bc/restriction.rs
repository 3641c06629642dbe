use crate::error::ArgsError;

/// Rule producing a boundary node's value from the adjacent interior
/// value and the step between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Restriction {
    /// First kind: constant value regardless of the interior.
    Fixed(f64),

    /// Second kind: one sided difference with a constant flux,
    /// `inner - flux * delta`.
    Flux(f64),

    /// Third kind: `inner / (1 + delta)`.
    Convective,
}

impl Restriction {
    #[inline]
    pub fn apply(&self, inner: f64, delta: f64) -> f64 {
        match *self {
            Restriction::Fixed(value) => value,
            Restriction::Flux(flux) => inner - flux * delta,
            Restriction::Convective => inner / (1.0 + delta),
        }
    }
}

impl Default for Restriction {
    fn default() -> Self {
        Restriction::Fixed(0.0)
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Restriction::Fixed(value) => write!(f, "fixed:{value}"),
            Restriction::Flux(flux) => write!(f, "flux:{flux}"),
            Restriction::Convective => write!(f, "convective"),
        }
    }
}

/// Parses `fixed:<c>`, `flux:<c>` and `convective`.
impl std::str::FromStr for Restriction {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ArgsError::InvalidRestriction(s.to_string());
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("convective") {
            return Ok(Restriction::Convective);
        }
        let (kind, value) = trimmed.split_once(':').ok_or_else(invalid)?;
        let value: f64 = value.trim().parse().map_err(|_| invalid())?;
        match kind.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Restriction::Fixed(value)),
            "flux" => Ok(Restriction::Flux(value)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn fixed_test() {
        let r = Restriction::Fixed(20.0);
        for x in [-3.0, 0.0, 15.5, 1e6] {
            for step in [0.01, 0.3, 2.0] {
                assert_eq!(r.apply(x, step), 20.0);
            }
        }
    }

    #[test]
    fn flux_test() {
        let r = Restriction::Flux(40.0);
        for x in [-3.0, 0.0, 15.5, 20.0] {
            for step in [0.01, 0.3, 2.0] {
                assert_eq!(r.apply(x, step), x - 40.0 * step);
            }
        }
        assert_approx_eq!(f64, r.apply(20.0, 0.3), 8.0, ulps = 2);
    }

    #[test]
    fn convective_test() {
        let r = Restriction::Convective;
        for x in [-3.0, 0.0, 15.5, 20.0] {
            for step in [0.01, 0.3, 2.0] {
                assert_eq!(r.apply(x, step), x / (1.0 + step));
            }
        }
        assert_approx_eq!(f64, r.apply(13.0, 0.3), 10.0);
    }

    #[test]
    fn default_test() {
        assert_eq!(Restriction::default(), Restriction::Fixed(0.0));
    }

    #[test]
    fn parse_test() {
        assert_eq!("fixed:20".parse(), Ok(Restriction::Fixed(20.0)));
        assert_eq!(" flux: 40.5".parse(), Ok(Restriction::Flux(40.5)));
        assert_eq!("Convective".parse(), Ok(Restriction::Convective));
        assert!("flux".parse::<Restriction>().is_err());
        assert!("fixed:abc".parse::<Restriction>().is_err());
        assert!("robin:1".parse::<Restriction>().is_err());
    }

    #[test]
    fn display_round_trip() {
        for r in [
            Restriction::Fixed(-2.5),
            Restriction::Flux(40.0),
            Restriction::Convective,
        ] {
            assert_eq!(r.to_string().parse(), Ok(r));
        }
    }
}
