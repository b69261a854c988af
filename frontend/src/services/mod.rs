pub mod api;
pub mod dialogs;
pub mod logging;
pub mod storage;
