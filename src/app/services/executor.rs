use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest<'a> {
    pub language: &'a str,
    pub code: &'a str,
}

/// Body returned by the execution service: `{ "output": ... }` or `{ "error": ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The service ran the code; stdout (and any stderr section) verbatim.
    Output(String),
    /// The service answered with an error payload.
    Failed(String),
    /// The service could not be reached or its answer could not be understood.
    Unreachable,
}

impl ExecuteResponse {
    /// A non-empty `error` wins over `output`; a body with neither is malformed.
    pub fn into_outcome(self) -> Result<ExecutionOutcome> {
        if let Some(error) = self.error
            && !error.is_empty()
        {
            return Ok(ExecutionOutcome::Failed(error));
        }
        match self.output {
            Some(output) => Ok(ExecutionOutcome::Output(output)),
            None => Err(AppError::MalformedResponse(
                "neither output nor error present".to_string(),
            )),
        }
    }
}

pub trait ExecutionService: Send + Sync {
    /// Submit one snippet. `Err` means a transport or parse failure, never an
    /// application error reported by the service.
    fn execute(&self, language: &str, code: &str) -> Result<ExecutionOutcome>;
}

/// Talks to the execution service over HTTP with a single POST per call.
#[derive(Debug, Clone)]
pub struct HttpExecutionService {
    endpoint: String,
}

impl HttpExecutionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ExecutionService for HttpExecutionService {
    fn execute(&self, language: &str, code: &str) -> Result<ExecutionOutcome> {
        let response = minreq::post(&self.endpoint)
            .with_json(&ExecuteRequest { language, code })?
            .send()?;

        // Error payloads come back with 4xx/5xx statuses, so the body is
        // inspected before the status.
        let status = response.status_code;
        let body = response.as_str()?;
        match serde_json::from_str::<ExecuteResponse>(body) {
            Ok(parsed) => parsed.into_outcome(),
            Err(_) if !(200..300).contains(&status) => Err(AppError::Status(status)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Run one request to completion, folding transport failures into
/// `ExecutionOutcome::Unreachable`. The cause is logged, not returned.
pub fn run(service: &dyn ExecutionService, language: &str, code: &str) -> ExecutionOutcome {
    match service.execute(language, code) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error executing code: {}", e);
            ExecutionOutcome::Unreachable
        }
    }
}
