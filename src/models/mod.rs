// Module exports for models

pub mod draft;
pub mod event;
pub mod settings;
pub mod ui;
