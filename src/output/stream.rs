use crate::domain::Grid;
use crate::error::OutputError;
use crate::output::LayerSink;
use std::io::prelude::*;

/// Plain text dump: one line of space separated values per row,
/// starting from row 0, and a blank line after each layer.
pub struct StreamSink<W: Write> {
    output: W,
    precision: Option<usize>,
}

impl<W: Write> StreamSink<W> {
    pub fn new(output: W) -> Self {
        StreamSink {
            output,
            precision: None,
        }
    }

    /// Print values with a fixed number of decimals.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_value(&mut self, value: f64) -> std::io::Result<()> {
        match self.precision {
            Some(p) => write!(self.output, "{value:.p$}"),
            None => write!(self.output, "{value}"),
        }
    }
}

impl StreamSink<std::io::BufWriter<std::io::StdoutLock<'static>>> {
    pub fn stdout() -> Self {
        StreamSink::new(std::io::BufWriter::new(std::io::stdout().lock()))
    }
}

impl<W: Write> LayerSink for StreamSink<W> {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        profiling::scope!("stream_sink::commit_layer");
        for row in layer.row_iter() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(self.output, " ")?;
                }
                self.write_value(*value)?;
            }
            writeln!(self.output)?;
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn dump_test() {
        let mut grid = Grid::filled(2, 3, 20.0);
        grid.set(1, 2, 1.5).unwrap();
        let mut sink = StreamSink::new(Vec::new());
        sink.commit_layer(&grid).unwrap();
        sink.commit_layer(&Grid::new(1, 2)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "20 20 20\n20 20 1.5\n\n0 0\n\n");
    }

    #[test]
    fn precision_test() {
        let grid = Grid::filled(1, 2, 1.0 / 3.0);
        let mut sink = StreamSink::new(Vec::new()).with_precision(3);
        sink.commit_layer(&grid).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "0.333 0.333\n\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_test() {
        let mut sink = StreamSink::new(BrokenPipe);
        let r = sink.commit_layer(&Grid::new(2, 2));
        assert!(matches!(r, Err(OutputError::Write(_))));
    }
}
