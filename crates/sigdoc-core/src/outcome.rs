use thiserror::Error;

/// Why a well-formed signature was not accepted.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("signature does not match the document")]
    SignatureMismatch,
}

/// Result of verifying a structurally valid document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Rejected(Rejection),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            VerificationOutcome::Verified => None,
            VerificationOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
