pub mod postgres;

pub use postgres::{MAX_DB_CONNECTIONS, PG_HOST_ENV, PostgresUrl};
