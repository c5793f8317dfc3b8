pub mod api;
pub mod graphql;

pub use api::{ApiError, GameApiClient, normalize_tap_vector};
pub use graphql::{FreeBoostKind, Operation, UpgradeKind};
