pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_connection_pool_at, create_in_memory_pool, get_connection,
    ConnectionPool, PooledConn,
};
pub use migrations::initialize_database;
