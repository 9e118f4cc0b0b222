//! Tagged state machine for the OTP-gated auth forms.
//!
//! Replaces the pair of `sent`/`verified` booleans the forms would otherwise
//! juggle: a code can only be verified after it was requested, and a failed
//! submission drops the form back to an editable state.

/// Where an auth form currently is in the OTP flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A one-time code was mailed; "Send OTP" now reads "Resend OTP".
    OtpRequested,
    /// The backend confirmed the code; the check indicator shows.
    OtpVerified,
    /// A register/login call is in flight; the submit button is locked.
    Submitting,
}

impl AuthPhase {
    /// A code was (re)sent. Verified forms keep their indicator.
    #[must_use]
    pub fn otp_sent(self) -> Self {
        match self {
            Self::Idle | Self::OtpRequested => Self::OtpRequested,
            other => other,
        }
    }

    /// The backend accepted the code. Only reachable after a send.
    #[must_use]
    pub fn otp_confirmed(self) -> Self {
        match self {
            Self::OtpRequested => Self::OtpVerified,
            other => other,
        }
    }

    /// A register/login call left the station.
    ///
    /// Submission is allowed from any interactive phase; the backend is the
    /// authority on whether the code was actually correct.
    #[must_use]
    pub fn submit_started(self) -> Self {
        Self::Submitting
    }

    /// The register/login call failed; the form is editable again with the
    /// code still counted as verified.
    #[must_use]
    pub fn submit_failed(self) -> Self {
        match self {
            Self::Submitting => Self::OtpVerified,
            other => other,
        }
    }

    /// Whether a code was mailed at least once.
    #[must_use]
    pub fn otp_was_sent(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the backend confirmed the code.
    #[must_use]
    pub fn is_verified(self) -> bool {
        matches!(self, Self::OtpVerified | Self::Submitting)
    }

    /// Whether a register/login call is in flight.
    #[must_use]
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let phase = AuthPhase::default();
        assert_eq!(phase, AuthPhase::Idle);

        let phase = phase.otp_sent();
        assert_eq!(phase, AuthPhase::OtpRequested);
        assert!(phase.otp_was_sent());
        assert!(!phase.is_verified());

        let phase = phase.otp_confirmed();
        assert_eq!(phase, AuthPhase::OtpVerified);
        assert!(phase.is_verified());

        let phase = phase.submit_started();
        assert!(phase.is_submitting());
        assert!(phase.is_verified());
    }

    #[test]
    fn test_verification_requires_a_sent_code() {
        // Confirming a code that was never requested changes nothing.
        assert_eq!(AuthPhase::Idle.otp_confirmed(), AuthPhase::Idle);
    }

    #[test]
    fn test_resend_keeps_verified_indicator() {
        assert_eq!(AuthPhase::OtpVerified.otp_sent(), AuthPhase::OtpVerified);
        assert_eq!(AuthPhase::OtpRequested.otp_sent(), AuthPhase::OtpRequested);
    }

    #[test]
    fn test_failed_submit_returns_to_verified() {
        let phase = AuthPhase::OtpVerified.submit_started().submit_failed();
        assert_eq!(phase, AuthPhase::OtpVerified);
        assert!(!phase.is_submitting());
    }

    #[test]
    fn test_submit_allowed_without_verification() {
        // The backend enforces OTP correctness; the client does not gate.
        let phase = AuthPhase::OtpRequested.submit_started();
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_submit_failed_outside_submission_is_inert() {
        assert_eq!(AuthPhase::Idle.submit_failed(), AuthPhase::Idle);
        assert_eq!(
            AuthPhase::OtpRequested.submit_failed(),
            AuthPhase::OtpRequested
        );
    }
}
