// Service module exports

pub mod settings;
pub mod storage;
pub mod store;
