pub mod use_booking;
pub mod use_shop;
