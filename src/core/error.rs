//! Error types.
//!
//! Sampling and allocation never fail: an undersized pool is a valid,
//! degraded result. Errors only come from the boundary (run configuration
//! that does not match the roster) and from persistence.

use thiserror::Error;

use super::ids::PlayerRef;

/// Run configuration rejected before allocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player {0} is not in the roster")]
    UnknownPlayer(PlayerRef),

    #[error("player {0} is listed more than once")]
    DuplicatePlayer(PlayerRef),

    #[error("perks per player must be at least 1")]
    ZeroPerkCount,
}

/// Failure reading or writing the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid binary data: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid store key {0:?}")]
    InvalidKey(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnknownPlayer(PlayerRef::new("ghost"));
        assert_eq!(err.to_string(), "player ghost is not in the roster");

        let err = ConfigError::DuplicatePlayer(PlayerRef::new("p1"));
        assert_eq!(err.to_string(), "player p1 is listed more than once");
    }

    #[test]
    fn test_error_from_conversions() {
        let err: Error = ConfigError::ZeroPerkCount.into();
        assert!(matches!(err, Error::Config(ConfigError::ZeroPerkCount)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = StoreError::from(json_err).into();
        assert!(matches!(err, Error::Store(StoreError::Json(_))));
    }
}
