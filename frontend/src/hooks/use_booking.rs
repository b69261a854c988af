use chrono::Utc;
use shared::{
    AvailabilitySet, BookingEvent, BookingForm, BookingOutcome, BookingRepository, BookingWidget,
    CalendarFocusDate, CalendarMonth, WidgetConfig,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::DataClient;
use crate::services::dialogs::alert;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStore;

const COMPONENT: &str = "booking";

pub struct UseBookingResult {
    pub calendar: CalendarMonth,
    pub form: BookingForm,
    pub selected_date: Option<String>,
    pub form_visible: bool,
    pub loaded: bool,
    pub on_event: Callback<BookingEvent>,
}

#[hook]
pub fn use_booking(config: &WidgetConfig) -> UseBookingResult {
    let widget =
        use_mut_ref(|| BookingWidget::new(CalendarFocusDate::default(), config.labels.clone()));
    let update = use_force_update();

    // Load availability once; the widget ignores events until it arrives
    {
        let widget = widget.clone();
        let update = update.clone();
        let client = DataClient::from_config(config);
        let fallback = config.availability_fallback;

        use_effect_with((), move |_| {
            spawn_local(async move {
                let availability = match client.fetch_availability().await {
                    Ok(data) => AvailabilitySet::from(data),
                    Err(e) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!(
                                "Could not load availability, using {:?} fallback: {:#}",
                                fallback, e
                            ),
                        );
                        fallback.availability()
                    }
                };
                Logger::info_with_component(
                    COMPONENT,
                    &format!("{} available date(s) loaded", availability.len()),
                );
                widget.borrow_mut().set_availability(availability);
                update.force_update();
            });
            || ()
        });
    }

    let on_event = {
        let widget = widget.clone();
        let bookings_key = config.bookings_key.clone();
        let labels = config.labels.clone();

        Callback::from(move |event: BookingEvent| {
            let repository = BookingRepository::new(BrowserStore, bookings_key.clone());
            let outcome = widget.borrow_mut().dispatch(event, &repository, Utc::now());

            match outcome {
                BookingOutcome::Ignored => return,
                BookingOutcome::Updated => {}
                BookingOutcome::Invalid(e) => {
                    Logger::debug_with_component(COMPONENT, &format!("Booking rejected: {}", e));
                    alert(&labels.missing_fields);
                }
                BookingOutcome::Booked(booking) => {
                    alert(&labels.confirmation(&booking.name, &booking.date, &booking.service));
                }
                BookingOutcome::StorageFailed(e) => {
                    Logger::error_with_component(COMPONENT, &format!("Booking not saved: {}", e));
                    alert(&labels.booking_failed);
                }
            }
            update.force_update();
        })
    };

    let widget = widget.borrow();
    UseBookingResult {
        calendar: widget.render(),
        form: widget.form().clone(),
        selected_date: widget.selected_date().map(str::to_string),
        form_visible: widget.form_visible(),
        loaded: widget.is_loaded(),
        on_event,
    }
}
