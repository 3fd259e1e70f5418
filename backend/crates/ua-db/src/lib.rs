pub mod connection;
pub mod error;
pub mod repositories;
pub mod retry;


pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use retry::{IsRetryable, RetryPolicy, with_retry};
