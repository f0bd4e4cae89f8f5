#![allow(dead_code)]

use myrtio_status_led::{Instant, PixelRenderer, Rgb};

/// Renderer that records every frame it is asked to show
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub setup_calls: Vec<usize>,
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingRenderer {
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl PixelRenderer for RecordingRenderer {
    fn setup_hardware(&mut self, pixel_count: usize) {
        self.setup_calls.push(pixel_count);
    }

    fn render(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
