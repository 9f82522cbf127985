use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Outcome taxonomy of a persistence call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("unique constraint violated: {0}")]
    UniqueConstraintViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("record not found")]
    RecordNotFound,
    #[error("{0}")]
    Persistence(String),
}

impl From<DbErr> for GatewayError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => GatewayError::UniqueConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => GatewayError::ForeignKeyViolation(msg),
            _ => match err {
                DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => GatewayError::RecordNotFound,
                other => GatewayError::Persistence(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_updated_maps_to_not_found() {
        assert_eq!(GatewayError::from(DbErr::RecordNotUpdated), GatewayError::RecordNotFound);
        assert_eq!(GatewayError::from(DbErr::RecordNotFound("users".into())), GatewayError::RecordNotFound);
    }

    #[test]
    fn other_errors_keep_their_message() {
        let err = GatewayError::from(DbErr::Custom("pool timed out".into()));
        match err {
            GatewayError::Persistence(msg) => assert!(msg.contains("pool timed out")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
