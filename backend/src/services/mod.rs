pub mod database;
pub mod feed;
pub mod storage;
