use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// SQLSTATE code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Everything the engine can fail with. Driver and transport failures pass
/// through unchanged in `Driver`; the engine adds no retry or recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// A single-entity select matched zero rows.
    #[error("no rows in result set")]
    NotFound,
    /// An update predicate named a field the entity does not declare.
    #[error("field `{0}` does not exist in the entity")]
    FieldNotFound(String),
    /// An update predicate named a field that carries no column mapping.
    #[error("field `{0}` has no column mapping")]
    FieldNotAnnotated(String),
    /// A result value did not convert into the destination field's type.
    #[error("{0}")]
    Decode(String),
    /// A database error the client classified with an SQLSTATE code.
    #[error("database error: {message}")]
    Database {
        sqlstate: Option<String>,
        message: String,
    },
    /// Opaque client or transport error, passed through unchanged.
    #[error(transparent)]
    Driver(#[from] anyhow::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// True when the underlying database error reports a violated unique
    /// constraint. Callers branch on this for duplicate-key conditions.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Error::Database { sqlstate: Some(code), .. } if code == UNIQUE_VIOLATION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_matches_sqlstate() {
        let err = Error::Database {
            sqlstate: Some("23505".into()),
            message: "duplicate key value violates unique constraint".into(),
        };
        assert!(err.is_unique_violation());
    }

    #[test]
    fn other_errors_are_not_unique_violations() {
        let check = Error::Database {
            sqlstate: Some("23514".into()),
            message: "check constraint violated".into(),
        };
        assert!(!check.is_unique_violation());
        assert!(!Error::NotFound.is_unique_violation());
        assert!(!Error::Driver(anyhow::Error::msg("connection reset")).is_unique_violation());
    }

    #[test]
    fn not_found_predicate() {
        assert!(Error::NotFound.is_not_found());
        assert!(!Error::FieldNotFound("label".into()).is_not_found());
    }
}
