//! Frame timing

/// Number of frame timestamps averaged over
pub const WINDOW: usize = 5;

/// Average frame rate over the last [WINDOW] frames
///
/// Timestamps are in milliseconds, as handed out by a display refresh callback.
/// Until the window has filled, the missing timestamps count as zero,
/// which makes the first few readings low.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameRateMeter {
    stamps: [f64; WINDOW],
}

impl FrameRateMeter {
    pub fn new() -> FrameRateMeter {
        FrameRateMeter::default()
    }

    /// Record that a frame was drawn at `millis`
    pub fn record(&mut self, millis: f64) {
        self.stamps.rotate_left(1);
        self.stamps[WINDOW - 1] = millis;
    }

    /// Mean time between the recorded frames, in milliseconds
    pub fn millis_per_frame(&self) -> f64 {
        (self.stamps[WINDOW - 1] - self.stamps[0]) / (WINDOW - 1) as f64
    }

    /// Frames per second, or `None` if no time has passed
    pub fn fps(&self) -> Option<f64> {
        let ms = self.millis_per_frame();
        (ms > 0.).then(|| 1000. / ms)
    }
}
