/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Coarse classification of service faults, used by callers that decide whether to retry.

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// The service asked the caller to slow down, or a dependency of the service was throttled.
    ThrottlingError,

    /// The service or one of its dependencies was unavailable. Retrying later may succeed.
    ServerError,

    /// The request itself was rejected. Resending it unchanged will fail again.
    ClientError,
}

impl ErrorKind {
    /// Whether resending the same request may succeed.
    pub fn is_retryable(self) -> bool {
        !matches!(self, ErrorKind::ClientError)
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`, or `None` when the fault is not modeled.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the wire error code, if one was received.
    fn code(&self) -> Option<&str>;
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn client_errors_are_final() {
        assert!(!ErrorKind::ClientError.is_retryable());
        assert!(ErrorKind::ServerError.is_retryable());
        assert!(ErrorKind::ThrottlingError.is_retryable());
    }
}
