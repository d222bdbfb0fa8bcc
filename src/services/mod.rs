pub mod detail_service;
pub mod history_service;
pub mod home_service;
pub mod transfer_service;
