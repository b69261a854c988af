//! Domain logic for the booking calendar and shop widgets.
//!
//! Everything in this crate is browser-free: the frontend feeds it fetched
//! data and a [`storage::KeyValueStore`], and renders the view models it
//! returns. Keeping the logic here lets it be exercised with plain `cargo test`.

pub mod booking;
pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod fallback;
pub mod locale;
pub mod storage;

pub use booking::{
    Booking, BookingEvent, BookingForm, BookingOutcome, BookingPhase, BookingRepository,
    BookingValidationError, BookingWidget,
};
pub use calendar::{
    AvailabilityData, AvailabilitySet, CalendarDay, CalendarDayType, CalendarFocusDate,
    CalendarMonth, CalendarService,
};
pub use cart::{Cart, CartLine, CartRepository, CartService};
pub use catalog::{CatalogData, CategoryOption, Product, ProductCardView, ProductCatalog};
pub use config::{ConfigError, FallbackPolicy, WidgetConfig};
pub use locale::Labels;
pub use storage::{KeyValueStore, MemoryStore};
