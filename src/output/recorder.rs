use crate::domain::Grid;
use crate::error::OutputError;
use crate::output::LayerSink;

/// Keeps a copy of every committed layer in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    layers: Vec<Grid>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Grid] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.layers.last()
    }

    pub fn into_layers(self) -> Vec<Grid> {
        self.layers
    }
}

impl LayerSink for RecordingSink {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        self.layers.push(layer.clone());
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn record_test() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());
        sink.commit_layer(&Grid::filled(2, 2, 1.0)).unwrap();
        sink.commit_layer(&Grid::filled(2, 2, 2.0)).unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last(), Some(&Grid::filled(2, 2, 2.0)));
        let layers = sink.into_layers();
        assert_eq!(layers[0], Grid::filled(2, 2, 1.0));
    }

    #[test]
    fn boxed_sink_test() {
        let mut recorder = RecordingSink::new();
        {
            let mut boxed: Box<dyn LayerSink + '_> = Box::new(&mut recorder);
            boxed.commit_layer(&Grid::new(1, 1)).unwrap();
        }
        assert_eq!(recorder.len(), 1);
    }
}
