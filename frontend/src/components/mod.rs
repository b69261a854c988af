pub mod booking_calendar;
pub mod booking_form;
pub mod calendar;
pub mod cart_badge;
pub mod category_filter;
pub mod product_card;
pub mod shop;
