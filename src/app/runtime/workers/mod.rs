/// Query execution worker.
pub mod query;
