use crate::domain::Grid;
use crate::error::OutputError;
use crate::output::LayerSink;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const COLUMN_WIDTH: usize = 12;
const PLOT_EXTENSION: &str = "plt";
const CONFIG_EXTENSION: &str = "cfg";
const IMAGE_EXTENSION: &str = "png";
const PALETTE: &str = "set palette defined (0 0 0 0.5, 1 0 0 1, 2 0 0.5 1, \
     3 0 1 1, 4 0.5 1 0.5, 5 1 1 0, 6 1 0.5 0, 7 1 0 0, 8 0.5 0 0)";

/// Heatmap output for gnuplot.
/// Layers go to `<prefix>.plt` as columns of [`COLUMN_WIDTH`] characters
/// with six decimals, values of magnitude 1e4 and above overflow the column.
/// `<prefix>.cfg` holds a script rendering them into `<prefix>.png`.
pub struct GnuplotSink {
    plot_output: BufWriter<File>,
    plot_path: PathBuf,
    config_path: PathBuf,
}

fn with_extension(prefix: &Path, extension: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn create_file(path: &Path) -> Result<File, OutputError> {
    File::create(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })
}

impl GnuplotSink {
    pub fn create<P: AsRef<Path>>(prefix: P) -> Result<Self, OutputError> {
        let prefix = prefix.as_ref();
        let plot_path = with_extension(prefix, PLOT_EXTENSION);
        let config_path = with_extension(prefix, CONFIG_EXTENSION);
        let image_path = with_extension(prefix, IMAGE_EXTENSION);

        let plot_output = BufWriter::new(create_file(&plot_path)?);
        let mut config_output = BufWriter::new(create_file(&config_path)?);
        log::debug!(
            "Writing gnuplot data: {plot_path:?}, script: {config_path:?}"
        );

        writeln!(config_output, "set terminal png")?;
        writeln!(config_output, "set output '{}'", image_path.display())?;
        writeln!(config_output, "set autoscale yfix")?;
        writeln!(config_output, "set autoscale xfix")?;
        writeln!(config_output, "{PALETTE}")?;
        writeln!(config_output, "set pm3d map")?;
        writeln!(
            config_output,
            "splot '{}' matrix notitle",
            plot_path.display()
        )?;
        config_output.flush()?;

        Ok(GnuplotSink {
            plot_output,
            plot_path,
            config_path,
        })
    }

    pub fn plot_path(&self) -> &Path {
        &self.plot_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl LayerSink for GnuplotSink {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        profiling::scope!("gnuplot_sink::commit_layer");
        for row in layer.row_iter() {
            for value in row {
                write!(self.plot_output, "{value:>COLUMN_WIDTH$.6} ")?;
            }
            writeln!(self.plot_output)?;
        }
        writeln!(self.plot_output)?;
        self.plot_output.flush()?;
        Ok(())
    }
}
