//! Query types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Returns a boxed `ProblemDetails` to keep the `Err` variant small.
pub trait Validate {
    /// Validate the request; `request_id` fills the problem's `instance`.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Query string of `GET /api/v1/route`.
///
/// Names are matched exactly against short or long building names, so they
/// are passed through untrimmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl Validate for RouteQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        for (field, value) in [("start", &self.start), ("end", &self.end)] {
            if value.trim().is_empty() {
                return Err(Box::new(
                    ProblemDetails::bad_request(
                        format!("The '{}' parameter is required and cannot be empty", field),
                        request_id,
                    )
                    .with_extension("field", field),
                ));
            }
        }
        Ok(())
    }
}
