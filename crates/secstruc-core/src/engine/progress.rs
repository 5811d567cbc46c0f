use std::fmt;

/// The stages of one assignment run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HbondNetwork,
    BetaBridges,
    Labeling,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::HbondNetwork => "Hydrogen-Bond Network",
            Self::BetaBridges => "Beta Bridges",
            Self::Labeling => "Labeling",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { phase: Phase },
    PhaseFinish { phase: Phase },

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The callback may be invoked from several worker threads at once when the
/// `parallel` feature is enabled.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `work` between a `PhaseStart` and a `PhaseFinish` for `phase`.
    pub fn phase<T>(&self, phase: Phase, work: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { phase });
        let result = work();
        self.report(Progress::PhaseFinish { phase });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
        assert_eq!(reporter.phase(Phase::Labeling, || 42), 42);
    }

    #[test]
    fn phase_wraps_work_with_start_and_finish_events() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{event:?}"));
        }));

        reporter.phase(Phase::BetaBridges, || reporter.report(Progress::TaskIncrement));
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                "PhaseStart { phase: BetaBridges }",
                "TaskIncrement",
                "PhaseFinish { phase: BetaBridges }",
            ]
        );
    }

    #[test]
    fn phase_names_are_human_readable() {
        assert_eq!(Phase::HbondNetwork.to_string(), "Hydrogen-Bond Network");
        assert_eq!(Phase::Labeling.name(), "Labeling");
    }
}
