use shared::BookingForm;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingFormPanelProps {
    pub visible: bool,
    pub selected_date: Option<String>,
    pub form: BookingForm,
    pub services: Vec<String>,
    pub choose_service_label: String,
    pub submit_label: String,

    // Event handlers
    pub on_name_change: Callback<String>,
    pub on_email_change: Callback<String>,
    pub on_service_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingFormPanel)]
pub fn booking_form_panel(props: &BookingFormPanelProps) -> Html {
    let selected_date = props.selected_date.clone().unwrap_or_default();
    let form_class = classes!("booking-form", props.visible.then_some("visible"));

    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let on_email_input = {
        let on_email_change = props.on_email_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email_change.emit(input.value());
        })
    };

    let on_service_select = {
        let on_service_change = props.on_service_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_service_change.emit(select.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id="booking-form" class={form_class} {onsubmit}>
            <p class="booking-date">
                <span id="booking-date-display">{selected_date.clone()}</span>
            </p>
            <input type="hidden" id="selected-date" name="date" value={selected_date} />

            <div class="form-group">
                <input
                    type="text"
                    id="booking-name"
                    placeholder="Name"
                    value={props.form.name.clone()}
                    oninput={on_name_input}
                />
            </div>

            <div class="form-group">
                <input
                    type="email"
                    id="booking-email"
                    placeholder="E-Mail"
                    value={props.form.email.clone()}
                    oninput={on_email_input}
                />
            </div>

            <div class="form-group">
                <select id="service-select" onchange={on_service_select}>
                    <option value="" selected={props.form.service.is_empty()}>
                        {&props.choose_service_label}
                    </option>
                    {for props.services.iter().map(|service| html! {
                        <option value={service.clone()} selected={*service == props.form.service}>
                            {service}
                        </option>
                    })}
                </select>
            </div>

            <button type="submit" id="submit-booking" class="btn btn-primary">
                {&props.submit_label}
            </button>
        </form>
    }
}
