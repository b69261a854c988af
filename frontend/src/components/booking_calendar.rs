use shared::{BookingEvent, WidgetConfig};
use yew::prelude::*;

use crate::components::booking_form::BookingFormPanel;
use crate::components::calendar::Calendar;
use crate::hooks::use_booking::use_booking;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub config: WidgetConfig,
}

/// Calendar plus booking form, mounted into `#booking-calendar`
#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    let booking = use_booking(&props.config);
    let on_event = booking.on_event.clone();

    let emit = |to_event: fn(String) -> BookingEvent| {
        let on_event = on_event.clone();
        Callback::from(move |value: String| on_event.emit(to_event(value)))
    };

    let on_prev_month = {
        let on_event = on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(BookingEvent::PreviousMonth))
    };
    let on_next_month = {
        let on_event = on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(BookingEvent::NextMonth))
    };
    let on_submit = {
        let on_event = on_event.clone();
        Callback::from(move |_: ()| on_event.emit(BookingEvent::Submit))
    };

    html! {
        <section class={classes!("booking", (!booking.loaded).then_some("loading"))}>
            <Calendar
                calendar_data={booking.calendar.clone()}
                on_select_date={emit(BookingEvent::SelectDate)}
                {on_prev_month}
                {on_next_month}
            />
            <BookingFormPanel
                visible={booking.form_visible}
                selected_date={booking.selected_date.clone()}
                form={booking.form.clone()}
                services={props.config.services.clone()}
                choose_service_label={props.config.labels.choose_service.clone()}
                submit_label={props.config.labels.submit_booking.clone()}
                on_name_change={emit(BookingEvent::UpdateName)}
                on_email_change={emit(BookingEvent::UpdateEmail)}
                on_service_change={emit(BookingEvent::UpdateService)}
                {on_submit}
            />
        </section>
    }
}
