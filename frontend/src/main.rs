mod components;
mod hooks;
mod services;

use components::booking_calendar::{BookingCalendar, BookingCalendarProps};
use components::shop::{Shop, ShopProps};
use log::LevelFilter;
use shared::WidgetConfig;

/// Element holding optional JSON overrides for [`WidgetConfig`]
const CONFIG_ELEMENT_ID: &str = "widget-config";
const BOOKING_ROOT_ID: &str = "booking-calendar";
const SHOP_ROOT_ID: &str = "shop";

fn load_config() -> WidgetConfig {
    let raw = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => WidgetConfig::from_json(&raw).unwrap_or_else(|e| {
            log::error!("{}; falling back to defaults", e);
            WidgetConfig::default()
        }),
        _ => WidgetConfig::default(),
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);

    let config = load_config();
    let document = gloo::utils::document();

    // Each page carries at most one of the widgets; mount whatever is present
    if let Some(root) = document.get_element_by_id(BOOKING_ROOT_ID) {
        yew::Renderer::<BookingCalendar>::with_root_and_props(
            root,
            BookingCalendarProps { config: config.clone() },
        )
        .render();
    }

    if let Some(root) = document.get_element_by_id(SHOP_ROOT_ID) {
        yew::Renderer::<Shop>::with_root_and_props(root, ShopProps { config }).render();
    }
}
