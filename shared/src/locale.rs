//! User-facing text for both widgets.
//!
//! The site is German-language; an English set is provided for pages that
//! need it. Labels travel inside [`crate::WidgetConfig`] so a page can swap
//! them without touching the widget code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    /// January first
    pub month_names: [String; 12],
    /// Sunday first
    pub weekdays: [String; 7],
    pub all_categories: String,
    pub add_to_cart: String,
    pub added_to_cart: String,
    pub missing_fields: String,
    /// Template with `{name}`, `{date}` and `{service}` placeholders
    pub booking_confirmation: String,
    pub booking_failed: String,
    pub currency_symbol: String,
    pub choose_service: String,
    pub submit_booking: String,
}

fn owned<const N: usize>(items: [&str; N]) -> [String; N] {
    items.map(str::to_string)
}

impl Labels {
    pub fn german() -> Self {
        Self {
            month_names: owned([
                "Januar", "Februar", "März", "April", "Mai", "Juni",
                "Juli", "August", "September", "Oktober", "November", "Dezember",
            ]),
            weekdays: owned(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
            all_categories: "Alle Kategorien".to_string(),
            add_to_cart: "In den Warenkorb".to_string(),
            added_to_cart: "Artikel wurde dem Warenkorb hinzugefügt.".to_string(),
            missing_fields: "Bitte füllen Sie alle Felder aus und wählen Sie einen Termin."
                .to_string(),
            booking_confirmation: "Vielen Dank, {name}! Ihre Buchungsanfrage für den {date} ({service}) wurde gesendet. Wir werden uns in Kürze bei Ihnen melden."
                .to_string(),
            booking_failed: "Ihre Buchung konnte nicht gespeichert werden. Bitte versuchen Sie es erneut."
                .to_string(),
            currency_symbol: "€".to_string(),
            choose_service: "Bitte Leistung wählen".to_string(),
            submit_booking: "Termin anfragen".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            month_names: owned([
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ]),
            weekdays: owned(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            all_categories: "All categories".to_string(),
            add_to_cart: "Add to cart".to_string(),
            added_to_cart: "Item added to your cart.".to_string(),
            missing_fields: "Please fill in all fields and choose a date.".to_string(),
            booking_confirmation: "Thank you, {name}! Your booking request for {date} ({service}) has been sent. We will get back to you shortly."
                .to_string(),
            booking_failed: "Your booking could not be saved. Please try again.".to_string(),
            currency_symbol: "€".to_string(),
            choose_service: "Choose a service".to_string(),
            submit_booking: "Request appointment".to_string(),
        }
    }

    /// Month name for a 1-based month, falling back to the raw number
    pub fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|index| self.month_names.get(index as usize))
            .cloned()
            .unwrap_or_else(|| month.to_string())
    }

    /// e.g. "September 2025"
    pub fn month_label(&self, month: u32, year: i32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    pub fn confirmation(&self, name: &str, date: &str, service: &str) -> String {
        self.booking_confirmation
            .replace("{name}", name)
            .replace("{date}", date)
            .replace("{service}", service)
    }

    pub fn format_price(&self, price: f64) -> String {
        format!("{:.2} {}", price, self.currency_symbol)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::german()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        let labels = Labels::german();
        assert_eq!(labels.month_name(1), "Januar");
        assert_eq!(labels.month_name(3), "März");
        assert_eq!(labels.month_name(12), "Dezember");
        assert_eq!(labels.month_name(0), "0");
        assert_eq!(labels.month_name(13), "13");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(Labels::german().month_label(9, 2025), "September 2025");
        assert_eq!(Labels::english().month_label(10, 2025), "October 2025");
    }

    #[test]
    fn test_confirmation_fills_placeholders() {
        let message = Labels::english().confirmation("Ada", "2025-09-01", "Repair");
        assert!(message.contains("Ada"));
        assert!(message.contains("2025-09-01"));
        assert!(message.contains("(Repair)"));
        assert!(!message.contains('{'));
    }

    #[test]
    fn test_format_price() {
        let labels = Labels::german();
        assert_eq!(labels.format_price(9.99), "9.99 €");
        assert_eq!(labels.format_price(39.9), "39.90 €");
    }
}
