use std::time::Duration;

/// Runtime tuning for the render and refresh loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeConfig {
    /// Target interval between frames. The render loop measures each frame
    /// body and sleeps the remainder.
    ///
    /// Defaults to ~30 Hz.
    pub frame_interval: Duration,

    /// Horizontal scroll speed in pixels per second. Frame-rate independent:
    /// regions move `scroll_speed * dt` each frame.
    ///
    /// Defaults to `30.0`.
    pub scroll_speed: f32,

    /// How often the refresh loop polls its sources. Sources gate themselves
    /// on their own cadence, so this only bounds reaction latency.
    ///
    /// Defaults to one second.
    pub refresh_poll_interval: Duration,

    /// Capacity of the frame-time ring used for rate reporting.
    ///
    /// Defaults to `120` (about four seconds at the default frame rate).
    pub frame_history: usize,

    /// Outline every drawable's box in a palette color keyed by its index.
    pub debug_overlay: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(33),
            scroll_speed: 30.0,
            refresh_poll_interval: Duration::from_secs(1),
            frame_history: 120,
            debug_overlay: false,
        }
    }
}
