use crate::build_info;
use crate::domain::*;
use crate::error::{ArgsError, Result};
use crate::output::*;
use crate::solver::Model;
use crate::util::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Where completed layers go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Plain text on stdout, one block per layer.
    Stream,
    /// Gnuplot data and script, `--output-path` is the file prefix.
    Gnuplot,
    /// One CSV file per layer in `--output-path`.
    Csv,
    /// One PNG frame per layer in `--output-path`.
    Png,
    /// Run without writing anything.
    #[value(name = "none")]
    Discard,
}

impl OutputKind {
    fn name(self) -> &'static str {
        match self {
            OutputKind::Stream => "stream",
            OutputKind::Gnuplot => "gnuplot",
            OutputKind::Csv => "csv",
            OutputKind::Png => "png",
            OutputKind::Discard => "none",
        }
    }
}

/// Parses `<x>,<y>`.
pub fn parse_point(s: &str) -> std::result::Result<Point, ArgsError> {
    let invalid = || ArgsError::InvalidPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

fn parse_restriction(s: &str) -> std::result::Result<Restriction, ArgsError> {
    s.parse()
}

/// Heat conduction on a plate with a triangular hole.
/// The defaults describe a 6 x 4 plate with the hole (2,1), (5,1), (5,3).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Plate width.
    #[arg(long, default_value = "6")]
    pub width: f64,

    /// Plate height.
    #[arg(long, default_value = "4")]
    pub height: f64,

    /// Spatial step, used on both axes.
    #[arg(short, long, default_value = "0.3")]
    pub step: f64,

    /// Time step.
    #[arg(short = 't', long, default_value = "0.1")]
    pub time_step: f64,

    /// Total simulated time.
    #[arg(short = 'T', long, default_value = "25")]
    pub total_time: f64,

    /// Initial value of every node.
    #[arg(short, long, default_value = "20")]
    pub initial: f64,

    /// Thermal diffusivity.
    #[arg(short, long, default_value = "0.1")]
    pub diffusivity: f64,

    /// First hole vertex, `x,y`.
    #[arg(long, default_value = "2,1", value_parser = parse_point)]
    pub hole_a: Point,

    /// Second hole vertex, `x,y`.
    #[arg(long, default_value = "5,1", value_parser = parse_point)]
    pub hole_b: Point,

    /// Third hole vertex, `x,y`.
    #[arg(long, default_value = "5,3", value_parser = parse_point)]
    pub hole_c: Point,

    /// Restriction on the top edge:
    /// `fixed:<c>`, `flux:<c>` or `convective`.
    #[arg(long, default_value = "fixed:20", value_parser = parse_restriction)]
    pub up: Restriction,

    /// Restriction on the bottom edge.
    #[arg(long, default_value = "flux:40", value_parser = parse_restriction)]
    pub down: Restriction,

    /// Restriction on the left edge.
    #[arg(long, default_value = "flux:40", value_parser = parse_restriction)]
    pub left: Restriction,

    /// Restriction on the right edge.
    #[arg(long, default_value = "flux:40", value_parser = parse_restriction)]
    pub right: Restriction,

    /// Restriction on the hole border.
    #[arg(long, default_value = "convective", value_parser = parse_restriction)]
    pub inner: Restriction,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "stream")]
    pub output: OutputKind,

    /// Output file prefix or directory, required unless streaming.
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Decimal places for streamed values.
    #[arg(long)]
    pub precision: Option<usize>,

    /// Value mapped to the low end of the color scale.
    #[arg(long, requires("color_max"))]
    pub color_min: Option<f64>,

    /// Value mapped to the high end of the color scale.
    #[arg(long, requires("color_min"))]
    pub color_max: Option<f64>,

    /// Log level, `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        args.init_logging();
        args
    }

    /// Install the logger, once per process.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
    }

    /// Model configured from the arguments, ready to integrate.
    pub fn build_model(&self) -> Result<Model> {
        let mut model =
            Model::new(self.width, self.height, self.step, self.time_step)?;
        model.set_diffusivity(self.diffusivity)?;
        model.set_initial_condition(self.initial);
        model.set_hole_geometry(self.hole_a, self.hole_b, self.hole_c);
        model.set_outer_restrictions(self.up, self.down, self.left, self.right);
        model.set_inner_restriction(self.inner);
        Ok(model)
    }

    fn require_output_path(
        &self,
    ) -> std::result::Result<&PathBuf, ArgsError> {
        self.output_path
            .as_ref()
            .ok_or(ArgsError::MissingOutputPath(self.output.name()))
    }

    /// Sink selected by `--output`.
    pub fn build_sink(&self) -> Result<Box<dyn LayerSink>> {
        let sink: Box<dyn LayerSink> = match self.output {
            OutputKind::Stream => {
                let sink = StreamSink::stdout();
                match self.precision {
                    Some(p) => Box::new(sink.with_precision(p)),
                    None => Box::new(sink),
                }
            }
            OutputKind::Gnuplot => {
                Box::new(GnuplotSink::create(self.require_output_path()?)?)
            }
            OutputKind::Csv => {
                Box::new(CsvSink::create(self.require_output_path()?)?)
            }
            OutputKind::Png => {
                let sink = FrameSink::create(self.require_output_path()?)?;
                match (self.color_min, self.color_max) {
                    (Some(lo), Some(hi)) => Box::new(sink.with_range(lo, hi)),
                    _ => Box::new(sink),
                }
            }
            OutputKind::Discard => Box::new(NullSink),
        };
        Ok(sink)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::error::Error;
    use float_cmp::assert_approx_eq;

    #[test]
    fn parse_point_test() {
        let p = parse_point("2,1").unwrap();
        assert_approx_eq!(f64, p.x, 2.0);
        assert_approx_eq!(f64, p.y, 1.0);
        let p = parse_point(" 4.5 , -0.25").unwrap();
        assert_approx_eq!(f64, p.x, 4.5);
        assert_approx_eq!(f64, p.y, -0.25);
        assert_eq!(
            parse_point("2;1"),
            Err(ArgsError::InvalidPoint("2;1".to_string()))
        );
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn defaults_test() {
        let args = Args::try_parse_from(["hole_heat"]).unwrap();
        assert_approx_eq!(f64, args.width, 6.0);
        assert_approx_eq!(f64, args.height, 4.0);
        assert_approx_eq!(f64, args.step, 0.3);
        assert_approx_eq!(f64, args.time_step, 0.1);
        assert_approx_eq!(f64, args.total_time, 25.0);
        assert_approx_eq!(f64, args.initial, 20.0);
        assert_eq!(args.up, Restriction::Fixed(20.0));
        assert_eq!(args.down, Restriction::Flux(40.0));
        assert_eq!(args.left, Restriction::Flux(40.0));
        assert_eq!(args.right, Restriction::Flux(40.0));
        assert_eq!(args.inner, Restriction::Convective);
        assert_eq!(args.hole_c, Point::new(5.0, 3.0));
        assert_eq!(args.output, OutputKind::Stream);
        assert_eq!(args.log_level, log::LevelFilter::Info);

        let model = args.build_model().unwrap();
        assert_eq!(model.present().shape(), (13, 20));
        assert_eq!(model.steps_for(args.total_time), 250);
        assert_eq!(model.inner_restriction(), Restriction::Convective);
    }

    #[test]
    fn overrides_test() {
        let args = Args::try_parse_from([
            "hole_heat",
            "--up",
            "convective",
            "--hole-a",
            "1,1",
            "--output",
            "none",
            "-t",
            "0.05",
        ])
        .unwrap();
        assert_eq!(args.up, Restriction::Convective);
        assert_eq!(args.hole_a, Point::new(1.0, 1.0));
        assert_eq!(args.output, OutputKind::Discard);
        assert!(args.build_sink().is_ok());
        assert!(args.build_model().is_ok());
    }

    #[test]
    fn invalid_values_test() {
        assert!(Args::try_parse_from(["hole_heat", "--inner", "hot"]).is_err());
        assert!(Args::try_parse_from(["hole_heat", "--hole-b", "5"]).is_err());
        assert!(
            Args::try_parse_from(["hole_heat", "--color-min", "0"]).is_err()
        );
    }

    #[test]
    fn unstable_model_test() {
        let args =
            Args::try_parse_from(["hole_heat", "--step", "0.1", "-t", "1"])
                .unwrap();
        assert!(matches!(
            args.build_model(),
            Err(Error::Simulation(
                crate::error::SimulationError::StabilityViolation { .. }
            ))
        ));
    }

    #[test]
    fn missing_output_path_test() {
        let args =
            Args::try_parse_from(["hole_heat", "--output", "csv"]).unwrap();
        assert!(matches!(
            args.build_sink(),
            Err(Error::Args(ArgsError::MissingOutputPath("csv")))
        ));
    }

    #[test]
    fn file_sinks_test() {
        let dir = tempfile::tempdir().unwrap();
        let frames = dir.path().join("frames");
        let args = Args::try_parse_from([
            "hole_heat",
            "--output",
            "png",
            "--output-path",
            frames.to_str().unwrap(),
            "--color-min",
            "0",
            "--color-max",
            "40",
        ])
        .unwrap();
        assert!(args.build_sink().is_ok());
        assert!(frames.is_dir());
    }
}
