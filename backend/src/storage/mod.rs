//! Persistence for submissions: the CSV log itself (`csv_log`) and the single
//! background task that owns every write to it (`writer`).

pub mod csv_log;
pub mod writer;
