use std::fmt;

/// Checkpoints a codec passes through while encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Symbol frequencies counted
    FrequencyTable,
    /// Huffman tree merged down to a single root
    CodeTree,
    /// Code table derived from the tree
    CodeTable,
    /// Input is being transformed
    Encoding,
    /// Result assembled
    Complete,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::FrequencyTable => "frequency-table",
            Stage::CodeTree => "code-tree",
            Stage::CodeTable => "code-table",
            Stage::Encoding => "encoding",
            Stage::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single progress update
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressEvent {
    pub stage: Stage,
    /// Percentage in 0..=100
    pub percentage: u8,
    pub message: String,
}

impl ProgressEvent {
    pub fn new(stage: Stage, percentage: u8, message: impl Into<String>) -> Self {
        Self { stage, percentage: percentage.min(100), message: message.into() }
    }
}

/// Receiver of progress updates, owned by the caller
///
/// Codecs call `report` synchronously at each checkpoint and ignore what the receiver does with
/// the event. Any `FnMut(&ProgressEvent)` closure is a reporter.
pub trait ProgressReporter {
    fn report(&mut self, event: &ProgressEvent);
}

impl<F: FnMut(&ProgressEvent)> ProgressReporter for F {
    fn report(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Reporter that discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _event: &ProgressEvent) {}
}

/// Reporter that keeps every event, for hosts that render a history
#[derive(Clone, Debug, Default)]
pub struct ProgressLog {
    pub events: Vec<ProgressEvent>,
}

impl ProgressReporter for ProgressLog {
    fn report(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}

/// Reports an `Encoding` stage proportionally to input consumed
///
/// Percentages are mapped into `start..=end` and only emitted when the whole-percent value
/// grows, so a reporter sees at most one event per percent.
pub struct ProportionalProgress<'a> {
    reporter: &'a mut dyn ProgressReporter,
    total: usize,
    start: u8,
    end: u8,
    last: Option<u8>,
}

impl<'a> ProportionalProgress<'a> {
    pub fn new(reporter: &'a mut dyn ProgressReporter, total: usize, start: u8, end: u8) -> Self {
        Self { reporter, total, start, end: end.max(start), last: None }
    }

    /// Record that `consumed` of `total` input symbols have been processed
    pub fn advance(&mut self, consumed: usize) {
        let span = (self.end - self.start) as usize;
        let done =
            if self.total == 0 { span } else { consumed.min(self.total) * span / self.total };
        let percentage = self.start + done as u8;

        if self.last.is_some_and(|last| percentage <= last) {
            return;
        }
        self.last = Some(percentage);
        self.reporter.report(&ProgressEvent::new(
            Stage::Encoding,
            percentage,
            format!("processed {} of {} symbols", consumed.min(self.total), self.total),
        ));
    }
}
