use r2d2::ManageConnection;
use secrecy::SecretString;
use serde::Serialize;
use tracing::info;

use crate::oracle::OracleConnectionManager;

const SUCCESS_MESSAGE: &str = "successful";

/// Outcome of a one-off connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionVerification {
    pub has_succeeded: bool,
    pub message: String,
}

impl ConnectionVerification {
    pub fn succeeded() -> Self {
        Self {
            has_succeeded: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            has_succeeded: false,
            message: message.into(),
        }
    }
}

/// Opens and closes a single connection outside of any pool.
///
/// Failures are reported in the returned [`ConnectionVerification`] with the driver's
/// message instead of as an error.
pub fn verify_connection(
    jdbc_url: &str,
    username: &str,
    password: &SecretString,
) -> ConnectionVerification {
    let manager = OracleConnectionManager::new(jdbc_url, username, password.clone());

    let verification = match manager.connect() {
        Ok(conn) => match conn.close() {
            Ok(()) => ConnectionVerification::succeeded(),
            Err(err) => ConnectionVerification::failed(err.to_string()),
        },
        Err(err) => ConnectionVerification::failed(err.to_string()),
    };

    info!(
        connect_string = manager.connect_string(),
        username,
        has_succeeded = verification.has_succeeded,
        message = %verification.message,
        "verified oracle connection"
    );

    verification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_outcome() {
        assert_eq!(
            ConnectionVerification::succeeded(),
            ConnectionVerification {
                has_succeeded: true,
                message: "successful".to_string(),
            }
        );
        assert!(!ConnectionVerification::failed("ORA-01017").has_succeeded);
    }

    #[test]
    fn unreachable_database_is_reported_as_failure() {
        let verification = verify_connection(
            "jdbc:oracle:thin:@not a url",
            "u",
            &SecretString::new("p".to_string()),
        );

        assert!(!verification.has_succeeded);
        assert!(!verification.message.is_empty());
        assert_ne!(verification.message, "successful");
    }
}
