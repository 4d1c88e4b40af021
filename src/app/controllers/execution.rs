use crate::app::services::executor::ExecutionOutcome;

pub const RUNNING_TEXT: &str = "Running...";
pub const NO_LANGUAGE_TEXT: &str = "Error: no language is selected.";
pub const UNREACHABLE_TEXT: &str =
    "Failed to connect to the execution service. Please ensure the backend is running.";

/// Identifies one Run click. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// Owns the output console text. Only the most recently issued request may
/// write its result; older responses that arrive late are dropped.
#[derive(Debug, Default)]
pub struct ExecutionTracker {
    issued: u64,
    latest: Option<RequestToken>,
    output: String,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request: show the placeholder and hand out its token.
    pub fn begin(&mut self) -> RequestToken {
        let token = self.issue();
        self.output = RUNNING_TEXT.to_string();
        token
    }

    /// Apply a finished request. Returns false if a newer request superseded it.
    pub fn finish(&mut self, token: RequestToken, outcome: &ExecutionOutcome) -> bool {
        if self.latest != Some(token) {
            return false;
        }
        self.output = render_outcome(outcome);
        true
    }

    /// Run was clicked with no active language. Counts as the newest request.
    pub fn no_language(&mut self) {
        self.issue();
        self.output = NO_LANGUAGE_TEXT.to_string();
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.latest = Some(token);
        token
    }
}

/// Text shown in the output console for a finished request.
pub fn render_outcome(outcome: &ExecutionOutcome) -> String {
    match outcome {
        ExecutionOutcome::Output(output) => output.clone(),
        ExecutionOutcome::Failed(error) => format!("Error: {}", error),
        ExecutionOutcome::Unreachable => UNREACHABLE_TEXT.to_string(),
    }
}
