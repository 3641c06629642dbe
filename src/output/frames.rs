use crate::domain::Grid;
use crate::error::OutputError;
use crate::output::{ensure_dir_exists, LayerSink};
use std::path::{Path, PathBuf};

/// Writes each layer as a `frame_NNNN.png` heatmap.
/// The last row (the up edge) is drawn at the top of the image.
pub struct FrameSink {
    output_dir: PathBuf,
    range: Option<(f64, f64)>,
    frame: usize,
}

impl FrameSink {
    /// Colors are scaled to each layer's own min and max unless
    /// a fixed range is given with [`FrameSink::with_range`].
    pub fn create<P: AsRef<Path>>(output_dir: P) -> Result<Self, OutputError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        ensure_dir_exists(&output_dir)?;
        Ok(FrameSink {
            output_dir,
            range: None,
            frame: 0,
        })
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some((lo, hi));
        self
    }

    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.output_dir.join(format!("frame_{frame:04}.png"))
    }
}

/// Map `value` into `[0, 1]` over `[lo, hi]`.
fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Render a layer with the turbo gradient over `range`,
/// or over the layer's own min and max.
pub fn layer_image(
    layer: &Grid,
    range: Option<(f64, f64)>,
) -> image::RgbImage {
    let (rows, cols) = layer.shape();
    let (lo, hi) = range.or_else(|| layer.min_max()).unwrap_or((0.0, 1.0));
    let gradient = colorous::TURBO;
    let mut img = image::RgbImage::new(cols as u32, rows as u32);
    for (row, values) in layer.row_iter().enumerate() {
        let y = (rows - 1 - row) as u32;
        for (col, value) in values.iter().enumerate() {
            let c = gradient.eval_continuous(normalize(*value, lo, hi));
            img.put_pixel(col as u32, y, image::Rgb(c.as_array()));
        }
    }
    img
}

impl LayerSink for FrameSink {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        profiling::scope!("frame_sink::commit_layer");
        let path = self.frame_path(self.frame);
        log::debug!("Saving: {path:?}");
        layer_image(layer, self.range)
            .save(&path)
            .map_err(|source| OutputError::Image { path, source })?;
        self.frame += 1;
        Ok(())
    }
}
