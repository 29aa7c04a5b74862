/// Converts wall-clock frame time into whole simulation ticks.
///
/// Physics constants are expressed per tick, so a host whose refresh rate
/// differs from the tick rate still sees the same flight. Backlog beyond
/// `max_catch_up` ticks (tab in background, debugger pause) is dropped
/// rather than replayed.
pub struct FramePacer {
    /// Seconds per tick.
    frame_dt: f64,
    /// Unconsumed wall-clock time.
    pending: f64,
    max_catch_up: u32,
    ticks_run: u64,
}

impl FramePacer {
    pub fn new(tick_rate: f64, max_catch_up: u32) -> Self {
        Self {
            frame_dt: 1.0 / tick_rate,
            pending: 0.0,
            max_catch_up: max_catch_up.max(1),
            ticks_run: 0,
        }
    }

    /// Add elapsed seconds. Returns the number of ticks to run now.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.pending += elapsed.max(0.0);
        let due = (self.pending / self.frame_dt).floor();
        let ticks = if due > self.max_catch_up as f64 {
            log::warn!(
                "frame pacer dropped {} ticks of backlog",
                due as u64 - self.max_catch_up as u64
            );
            self.pending = 0.0;
            self.max_catch_up
        } else {
            self.pending -= due * self.frame_dt;
            due as u32
        };
        self.ticks_run += ticks as u64;
        ticks
    }

    /// Total ticks handed out since construction.
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }
}
