//! Booking widget state machine and booking persistence.
//!
//! The widget is either showing no selection, or has an available date
//! selected with the booking form revealed. Navigating months always drops
//! back to no selection. A successful submit appends one [`Booking`] to the
//! stored list and also returns to no selection.
//!
//! [`BookingWidget::dispatch`] is the only way state changes; the frontend
//! turns DOM events into [`BookingEvent`]s and renders
//! [`BookingWidget::render`].

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::calendar::{AvailabilitySet, CalendarFocusDate, CalendarMonth, CalendarService};
use crate::locale::Labels;
use crate::storage::{load_json_list, save_json_list, KeyValueStore};

/// A customer's appointment request, append-only once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub date: String,
    pub service: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("No date selected")]
    MissingDate,
    #[error("Name cannot be empty")]
    MissingName,
    #[error("Email cannot be empty")]
    MissingEmail,
    #[error("No service selected")]
    MissingService,
}

/// Raw form input as typed by the customer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub service: String,
}

impl BookingForm {
    /// Check that all four fields are present and build the record.
    ///
    /// Only emptiness is checked; the email is not validated further.
    pub fn validate(
        &self,
        selected_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Booking, BookingValidationError> {
        let date = selected_date
            .filter(|date| !date.is_empty())
            .ok_or(BookingValidationError::MissingDate)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(BookingValidationError::MissingEmail);
        }
        if self.service.is_empty() {
            return Err(BookingValidationError::MissingService);
        }

        Ok(Booking {
            date: date.to_string(),
            service: self.service.clone(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Persists bookings under a fixed storage key
pub struct BookingRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BookingRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// All stored bookings in insertion order; malformed data reads as none
    pub fn list_bookings(&self) -> Vec<Booking> {
        load_json_list(&self.store, &self.key)
    }

    /// Read the whole list, append `booking` and write it back
    pub fn append_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.list_bookings();
        bookings.push(booking.clone());
        save_json_list(&self.store, &self.key, &bookings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPhase {
    NoSelection,
    DateSelected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    PreviousMonth,
    NextMonth,
    SelectDate(String),
    UpdateName(String),
    UpdateEmail(String),
    UpdateService(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// State changed; re-render
    Updated,
    /// Event did not apply (e.g. clicking an unavailable date)
    Ignored,
    /// Submit rejected; the form stays open
    Invalid(BookingValidationError),
    /// Submit stored this booking
    Booked(Booking),
    /// Submit was valid but the store refused the write; the form stays open
    StorageFailed(String),
}

/// Complete state of one booking calendar
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWidget {
    focus: CalendarFocusDate,
    availability: AvailabilitySet,
    /// False until availability has been set once; every event is ignored
    /// before that
    loaded: bool,
    phase: BookingPhase,
    form: BookingForm,
    calendar: CalendarService,
}

impl BookingWidget {
    /// A widget waiting for its availability data
    pub fn new(focus: CalendarFocusDate, labels: Labels) -> Self {
        Self {
            focus,
            availability: AvailabilitySet::default(),
            loaded: false,
            phase: BookingPhase::NoSelection,
            form: BookingForm::default(),
            calendar: CalendarService::new(labels),
        }
    }

    pub fn focus(&self) -> CalendarFocusDate {
        self.focus
    }

    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn availability(&self) -> &AvailabilitySet {
        &self.availability
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn selected_date(&self) -> Option<&str> {
        match &self.phase {
            BookingPhase::DateSelected(date) => Some(date.as_str()),
            BookingPhase::NoSelection => None,
        }
    }

    /// The form is shown exactly while a date is selected
    pub fn form_visible(&self) -> bool {
        matches!(self.phase, BookingPhase::DateSelected(_))
    }

    /// Install the fetched (or fallback) availability and start accepting events
    pub fn set_availability(&mut self, availability: AvailabilitySet) {
        self.availability = availability;
        self.loaded = true;
        self.phase = BookingPhase::NoSelection;
    }

    pub fn render(&self) -> CalendarMonth {
        self.calendar.generate_calendar_month(
            self.focus.month,
            self.focus.year,
            &self.availability,
            self.selected_date(),
        )
    }

    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        event: BookingEvent,
        repository: &BookingRepository<S>,
        now: DateTime<Utc>,
    ) -> BookingOutcome {
        if !self.loaded {
            debug!("Ignoring {:?} before availability is loaded", event);
            return BookingOutcome::Ignored;
        }

        match event {
            BookingEvent::PreviousMonth => {
                self.focus = self.focus.previous();
                self.phase = BookingPhase::NoSelection;
                BookingOutcome::Updated
            }
            BookingEvent::NextMonth => {
                self.focus = self.focus.next();
                self.phase = BookingPhase::NoSelection;
                BookingOutcome::Updated
            }
            BookingEvent::SelectDate(date) => {
                if !self.availability.contains(&date) || !self.is_in_focus(&date) {
                    return BookingOutcome::Ignored;
                }
                self.phase = BookingPhase::DateSelected(date);
                BookingOutcome::Updated
            }
            BookingEvent::UpdateName(name) => {
                self.form.name = name;
                BookingOutcome::Updated
            }
            BookingEvent::UpdateEmail(email) => {
                self.form.email = email;
                BookingOutcome::Updated
            }
            BookingEvent::UpdateService(service) => {
                self.form.service = service;
                BookingOutcome::Updated
            }
            BookingEvent::Submit => self.submit(repository, now),
        }
    }

    fn submit<S: KeyValueStore>(
        &mut self,
        repository: &BookingRepository<S>,
        now: DateTime<Utc>,
    ) -> BookingOutcome {
        let booking = match self.form.validate(self.selected_date(), now) {
            Ok(booking) => booking,
            Err(e) => return BookingOutcome::Invalid(e),
        };

        if let Err(e) = repository.append_booking(&booking) {
            warn!("Failed to store booking for {}: {}", booking.date, e);
            return BookingOutcome::StorageFailed(e.to_string());
        }

        info!("Stored booking for {} ({})", booking.date, booking.service);
        self.form.clear();
        self.phase = BookingPhase::NoSelection;
        BookingOutcome::Booked(booking)
    }

    fn is_in_focus(&self, date: &str) -> bool {
        let prefix = format!("{:04}-{:02}-", self.focus.year, self.focus.month);
        date.starts_with(&prefix)
    }
}
