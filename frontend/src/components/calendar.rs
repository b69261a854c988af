use shared::{CalendarDay, CalendarMonth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub on_select_date: Callback<String>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
}

fn render_day(day: &CalendarDay, on_select_date: &Callback<String>) -> Html {
    if day.is_padding() {
        return html! { <td class="calendar-day unavailable empty"></td> };
    }

    let day_class = classes!(
        "calendar-day",
        if day.available { "available" } else { "unavailable" },
        day.selected.then_some("selected"),
    );

    // Only available days are clickable
    let onclick = day.available.then(|| {
        let on_select_date = on_select_date.clone();
        let date_key = day.date_key.clone();
        Callback::from(move |_: MouseEvent| on_select_date.emit(date_key.clone()))
    });

    html! {
        <td class={day_class} data-date={day.date_key.clone()} {onclick}>
            {day.day}
        </td>
    }
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_data = &props.calendar_data;

    html! {
        <div class="calendar-container">
            <div class="calendar-header">
                <button id="prev-month" class="calendar-nav" onclick={props.on_prev_month.clone()}>
                    {"‹"}
                </button>
                <span id="month-year" class="month-year">{&calendar_data.label}</span>
                <button id="next-month" class="calendar-nav" onclick={props.on_next_month.clone()}>
                    {"›"}
                </button>
            </div>
            <table class="calendar">
                <thead>
                    <tr>
                        {for calendar_data
                            .weekday_labels
                            .iter()
                            .map(|weekday| html! { <th>{weekday}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for calendar_data.weeks().map(|week| html! {
                        <tr>
                            {for week.iter().map(|day| render_day(day, &props.on_select_date))}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
