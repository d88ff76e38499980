pub mod ids;
pub mod storage;
