use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Wall-clock time spent in each pipeline step, in execution order
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    /// Runs `f` and records its elapsed time under `name`.
    pub fn measure<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.add_step(name, start.elapsed());
        out
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Summed duration of every step recorded as `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        let mut matching = self.steps.iter().filter(|s| s.name == name).peekable();
        matching.peek()?;
        Some(matching.map(|s| s.duration).sum())
    }

    pub fn slowest(&self) -> Option<&StepTiming> {
        self.steps.iter().max_by_key(|s| s.duration)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }
}

impl fmt::Display for PipelineTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_duration().as_secs_f64();
        writeln!(f, "Rail finder stage timings:")?;
        writeln!(f, "{:-<56}", "")?;
        for step in &self.steps {
            let ms = step.duration.as_secs_f64() * 1000.0;
            let share = if total > 0.0 {
                step.duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            writeln!(f, "{:<24} {:>12.3}ms ({:>5.1}%)", step.name, ms, share)?;
        }
        writeln!(f, "{:-<56}", "")?;
        write!(f, "{:<24} {:>12.3}ms", "Total", total * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("hough", Duration::from_millis(3));
        timings.add_step("fit", Duration::from_millis(1));
        timings.add_step("hough", Duration::from_millis(2));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("hough"), Some(Duration::from_millis(5)));
        assert_eq!(timings.get_step("render"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(6));
        assert_eq!(timings.slowest().map(|s| s.name), Some("hough"));
    }

    #[test]
    fn summary_lists_every_step_and_total() {
        let mut timings = PipelineTimings::new();
        timings.add_step("normalize", Duration::from_millis(4));
        timings.add_step("binarize", Duration::from_millis(4));
        let summary = timings.to_string();
        assert!(summary.contains("normalize"));
        assert!(summary.contains("binarize"));
        assert!(summary.contains("( 50.0%)"));
        assert!(summary.lines().last().unwrap().starts_with("Total"));
    }

    #[test]
    fn measure_returns_closure_output() {
        let mut timings = PipelineTimings::new();
        let value = timings.measure("decode", || 41 + 1);
        assert_eq!(value, 42);
        assert_eq!(timings.steps()[0].name, "decode");
    }

    #[test]
    fn empty_timings_have_no_slowest_step() {
        let timings = PipelineTimings::new();
        assert!(timings.slowest().is_none());
        assert_eq!(timings.total_duration(), Duration::ZERO);
    }
}
