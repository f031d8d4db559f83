use thiserror::Error;

/// Why a request to the budget backend did not produce usable data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("the backend could not be reached: {0}")]
    Network(String),

    #[error("the backend responded with status {status}")]
    Server { status: u16 },

    #[error("the backend response could not be read: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Classifies a failed `send()`; nothing was received from the server.
    pub fn from_send(error: gloo_net::Error) -> Self {
        ApiError::Network(error.to_string())
    }

    /// Classifies a failure while reading or decoding the response body.
    pub fn from_body(error: gloo_net::Error) -> Self {
        ApiError::Malformed(error.to_string())
    }

    pub fn from_status(status: u16) -> Option<Self> {
        (!(200..300).contains(&status)).then_some(ApiError::Server { status })
    }
}

/// A non-blocking message shown above the page after a failed request.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// What was being attempted, e.g. "carregar as transações".
    pub action: &'static str,
    pub error: ApiError,
}

impl Notice {
    pub fn new(action: &'static str, error: ApiError) -> Self {
        Self { action, error }
    }

    pub fn message(&self) -> String {
        let reason = match &self.error {
            ApiError::Network(_) => "servidor indisponível".to_string(),
            ApiError::Server { status } => format!("erro do servidor ({status})"),
            ApiError::Malformed(_) => "resposta inválida".to_string(),
        };
        format!("Não foi possível {}: {}.", self.action, reason)
    }
}
