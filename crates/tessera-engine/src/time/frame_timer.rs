use std::collections::VecDeque;
use std::time::Instant;

/// Sample window used by `FrameTimer::default()`.
pub const DEFAULT_FPS_WINDOW: usize = 100;

/// Frame timing snapshot returned by [`FrameTimer::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick (or since start), in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Zero-based index of the frame that just completed.
    pub frame_index: u64,
}

/// Frame counter with a rolling frames-per-second average.
///
/// The timer keeps the timestamps of the last `window` frames. `fps()` divides
/// the number of frame intervals in that window by the time they span. Until
/// the window has filled, the start epoch is the oldest sample, so the value is
/// the average over all frames so far.
///
/// The `*_at` variants take an explicit timestamp so callers (and tests) can
/// drive the timer from a simulated clock.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    window: usize,
    started: Option<Instant>,
    frame_count: u64,

    /// Oldest first. Holds at most `window + 1` timestamps (= `window` intervals).
    samples: VecDeque<Instant>,
}

impl FrameTimer {
    /// Creates a stopped timer averaging over `window` frames (at least 1).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            started: None,
            frame_count: 0,
            samples: VecDeque::with_capacity(window + 1),
        }
    }

    /// Starts (or restarts) measuring from now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Starts (or restarts) measuring from `now`. Resets the frame count.
    pub fn start_at(&mut self, now: Instant) {
        self.started = Some(now);
        self.frame_count = 0;
        self.samples.clear();
        self.samples.push_back(now);
    }

    /// Records one completed frame at the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Records one completed frame at `now`.
    ///
    /// A tick on a timer that was never started implicitly starts it at `now`
    /// and still counts the frame.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        if self.started.is_none() {
            self.start_at(now);
        }

        let prev = self.samples.back().copied().unwrap_or(now);
        let dt = now.saturating_duration_since(prev);

        self.samples.push_back(now);
        while self.samples.len() > self.window + 1 {
            self.samples.pop_front();
        }

        let frame_index = self.frame_count;
        self.frame_count = self.frame_count.wrapping_add(1);

        FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index,
        }
    }

    /// Ticks recorded since the last start.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of frames the FPS average spans once warmed up.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Average frames per second over the most recent sample window.
    ///
    /// Returns `0.0` before the first tick or if the samples span no time.
    pub fn fps(&self) -> f64 {
        let (Some(oldest), Some(newest)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };

        let intervals = self.samples.len().saturating_sub(1);
        let span = newest.saturating_duration_since(*oldest).as_secs_f64();
        if intervals == 0 || span <= 0.0 {
            return 0.0;
        }

        intervals as f64 / span
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FPS_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn run(timer: &mut FrameTimer, base: Instant, step: Duration, frames: u32) -> Instant {
        let mut now = base;
        for _ in 0..frames {
            now += step;
            timer.tick_at(now);
        }
        now
    }

    #[test]
    fn frame_count_matches_ticks() {
        let base = Instant::now();
        for n in [0u32, 1, 7, 250] {
            let mut t = FrameTimer::default();
            t.start_at(base);
            run(&mut t, base, Duration::from_millis(16), n);
            assert_eq!(t.frame_count(), u64::from(n));
        }
    }

    #[test]
    fn start_resets_count() {
        let base = Instant::now();
        let mut t = FrameTimer::new(10);
        t.start_at(base);
        let later = run(&mut t, base, Duration::from_millis(5), 42);
        t.start_at(later);
        assert_eq!(t.frame_count(), 0);
        assert_eq!(t.fps(), 0.0);
    }

    #[test]
    fn fps_is_zero_before_first_tick() {
        let mut t = FrameTimer::default();
        assert_eq!(t.fps(), 0.0);
        t.start();
        assert_eq!(t.fps(), 0.0);
    }

    #[test]
    fn fps_converges_to_tick_rate_after_full_window() {
        let base = Instant::now();
        let mut t = FrameTimer::new(100);
        t.start_at(base);
        run(&mut t, base, Duration::from_millis(20), 150);
        assert!((t.fps() - 50.0).abs() < 0.01, "fps = {}", t.fps());
    }

    #[test]
    fn fps_before_window_fills_uses_frames_so_far() {
        let base = Instant::now();
        let mut t = FrameTimer::new(100);
        t.start_at(base);
        run(&mut t, base, Duration::from_millis(10), 5);
        assert!((t.fps() - 100.0).abs() < 0.01, "fps = {}", t.fps());
    }

    #[test]
    fn fps_tracks_only_recent_window() {
        let base = Instant::now();
        let mut t = FrameTimer::new(10);
        t.start_at(base);
        // Slow frames first, then fast ones that fill the whole window.
        let mid = run(&mut t, base, Duration::from_millis(100), 20);
        run(&mut t, mid, Duration::from_millis(10), 10);
        assert!((t.fps() - 100.0).abs() < 0.01, "fps = {}", t.fps());
    }

    #[test]
    fn tick_reports_dt_and_index() {
        let base = Instant::now();
        let mut t = FrameTimer::default();
        t.start_at(base);
        let first = t.tick_at(base + Duration::from_millis(16));
        let second = t.tick_at(base + Duration::from_millis(48));
        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert!((second.dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn tick_without_start_starts_implicitly() {
        let mut t = FrameTimer::new(4);
        t.tick();
        assert!(t.is_started());
        assert_eq!(t.frame_count(), 1);
    }

    #[test]
    fn zero_window_is_clamped() {
        assert_eq!(FrameTimer::new(0).window(), 1);
    }
}
