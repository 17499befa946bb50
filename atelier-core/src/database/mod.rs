pub mod ports;
pub mod sqlite;
pub mod unit_of_work;

pub use sqlite::SqliteDatabase;
pub use unit_of_work::AppUnitOfWork;
