//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

/// Why an artifact's bytes were refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, displaydoc::Display)]
pub enum InvalidInputReason {
    /// expected {expected} bytes, got {actual}
    WrongLength { expected: usize, actual: usize },
    /// contents were rejected
    RejectedContents,
}

/// invalid {type_name}: {reason}
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub struct InvalidInput {
    pub type_name: &'static str,
    pub reason: InvalidInputReason,
}

/// verification failed
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub struct VerificationFailed;

/// Either recoverable failure, for callers that want a single error type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub enum ZkCredError {
    /// {0}
    InvalidInput(#[from] InvalidInput),
    /// {0}
    VerificationFailed(#[from] VerificationFailed),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = InvalidInput {
            type_name: "NotarySignature",
            reason: InvalidInputReason::WrongLength {
                expected: 64,
                actual: 63,
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid NotarySignature: expected 64 bytes, got 63"
        );
        assert_eq!(
            ZkCredError::from(VerificationFailed).to_string(),
            "verification failed"
        );
    }
}
