use crate::domain::Grid;
use crate::error::OutputError;
use crate::output::{ensure_dir_exists, LayerSink};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Writes each layer to its own `layer_NNNN.csv` inside a directory.
pub struct CsvSink {
    output_dir: PathBuf,
    layer: usize,
}

impl CsvSink {
    pub fn create<P: AsRef<Path>>(output_dir: P) -> Result<Self, OutputError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        ensure_dir_exists(&output_dir)?;
        Ok(CsvSink {
            output_dir,
            layer: 0,
        })
    }

    pub fn layer_path(&self, layer: usize) -> PathBuf {
        self.output_dir.join(format!("layer_{layer:04}.csv"))
    }
}

impl LayerSink for CsvSink {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        profiling::scope!("csv_sink::commit_layer");
        let path = self.layer_path(self.layer);
        log::debug!("Writing: {path:?}");
        let file = std::fs::File::create(&path).map_err(|source| {
            OutputError::Open {
                path: path.clone(),
                source,
            }
        })?;
        let mut output = std::io::BufWriter::new(file);

        // Write line for each row
        for row in layer.row_iter() {
            if let Some((first, rest)) = row.split_first() {
                write!(output, "{first}")?;
                for r in rest {
                    write!(output, ", {r}")?;
                }
            }
            writeln!(output)?;
        }
        output.flush()?;
        self.layer += 1;
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn layers_test() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("csv");
        let mut sink = CsvSink::create(&output_dir).unwrap();
        assert!(output_dir.is_dir());

        let mut grid = Grid::filled(2, 3, 1.0);
        grid.set(1, 0, -2.5).unwrap();
        sink.commit_layer(&grid).unwrap();
        sink.commit_layer(&Grid::new(1, 1)).unwrap();

        let first =
            std::fs::read_to_string(output_dir.join("layer_0000.csv")).unwrap();
        assert_eq!(first, "1, 1, 1\n-2.5, 1, 1\n");
        let second =
            std::fs::read_to_string(output_dir.join("layer_0001.csv")).unwrap();
        assert_eq!(second, "0\n");
    }

    #[test]
    fn output_dir_is_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            CsvSink::create(&path),
            Err(OutputError::Open { .. })
        ));
    }
}
