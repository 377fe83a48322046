//! Date picker field model.
//!
//! The field holds an optional calendar date; picking one expands the field
//! exactly like typed content does. The calendar grid itself is an external
//! collaborator; this model owns the value, the open/closed picker flag,
//! and the selectable range.

use std::{fmt, time::Instant};

use derive_setters::Setters;
use formfield_core::{Callback, CallbackWith, TransitionAnimator, Validity};
use thiserror::Error;

use crate::{
    description::Description,
    field_frame::{FieldFrame, FieldFrameArgs},
};

/// Errors from calendar-date construction and bounded selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateFieldError {
    /// Month outside `1..=12`.
    #[error("month {month} is out of range 1..=12")]
    MonthOutOfRange {
        /// The rejected month.
        month: u8,
    },
    /// Day outside the month's length (leap-year aware).
    #[error("day {day} does not exist in {year}-{month:02}")]
    DayOutOfRange {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The rejected day.
        day: u8,
    },
    /// Selection outside the field's minimum/maximum bounds.
    #[error("{date} is outside the selectable range")]
    OutOfBounds {
        /// The rejected date.
        date: CalendarDate,
    },
}

/// A validated calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, rejecting impossible year/month/day combinations.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateFieldError> {
        if !(1..=12).contains(&month) {
            return Err(DateFieldError::MonthOutOfRange { month });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateFieldError::DayOutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month, `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Arguments for configuring a [`DateField`].
#[derive(Clone, Setters)]
pub struct DateFieldArgs {
    /// Label floated while the field is focused or holds a date.
    #[setters(into)]
    pub label: String,
    /// Initial selected date.
    #[setters(strip_option)]
    pub initial_value: Option<CalendarDate>,
    /// Earliest selectable date.
    #[setters(strip_option)]
    pub minimum_date: Option<CalendarDate>,
    /// Latest selectable date.
    #[setters(strip_option)]
    pub maximum_date: Option<CalendarDate>,
    /// Optional description rendered above the input area.
    #[setters(strip_option)]
    pub description: Option<Description>,
    /// Called with the new selection (or `None` on clear).
    #[setters(strip_option, into)]
    pub on_change: Option<CallbackWith<Option<CalendarDate>>>,
    /// Fired once per focus edge.
    #[setters(strip_option, into)]
    pub on_focus: Option<Callback>,
    /// Fired once per blur edge.
    #[setters(strip_option, into)]
    pub on_blur: Option<Callback>,
    /// Full-distance duration of the expand/collapse transition.
    pub transition_duration: std::time::Duration,
}

impl Default for DateFieldArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            initial_value: None,
            minimum_date: None,
            maximum_date: None,
            description: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            transition_duration: TransitionAnimator::DEFAULT_DURATION,
        }
    }
}

/// A labeled date field sharing the floating-label lifecycle, with an
/// open/closed picker flag tied to focus.
pub struct DateField {
    frame: FieldFrame,
    value: Option<CalendarDate>,
    minimum_date: Option<CalendarDate>,
    maximum_date: Option<CalendarDate>,
    picker_open: bool,
    on_change: Option<CallbackWith<Option<CalendarDate>>>,
}

impl DateField {
    /// Creates a field from its arguments.
    pub fn new(args: DateFieldArgs) -> Self {
        let mut frame_args = FieldFrameArgs::default()
            .label(args.label)
            .initial_has_content(args.initial_value.is_some())
            .transition_duration(args.transition_duration);
        if let Some(description) = args.description {
            frame_args = frame_args.description(description);
        }
        if let Some(on_focus) = args.on_focus {
            frame_args = frame_args.on_focus(on_focus);
        }
        if let Some(on_blur) = args.on_blur {
            frame_args = frame_args.on_blur(on_blur);
        }
        Self {
            frame: FieldFrame::new(frame_args),
            value: args.initial_value,
            minimum_date: args.minimum_date,
            maximum_date: args.maximum_date,
            picker_open: false,
            on_change: args.on_change,
        }
    }

    /// The selected date, if any.
    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    /// The selected date formatted as `YYYY-MM-DD`.
    pub fn formatted(&self) -> Option<String> {
        self.value.map(|date| date.to_string())
    }

    /// Whether the calendar picker is currently open.
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// User tapped the field surface: focus it and open the picker.
    pub fn press(&mut self, now: Instant) {
        self.picker_open = true;
        self.frame.press(now);
    }

    /// Selects a date from the picker.
    ///
    /// Rejects dates outside the configured bounds without touching any
    /// state. On success the value updates, `on_change` fires, and the
    /// picker closes with the field blurred.
    pub fn select_date(&mut self, date: CalendarDate, now: Instant) -> Result<(), DateFieldError> {
        if self.minimum_date.is_some_and(|min| date < min)
            || self.maximum_date.is_some_and(|max| date > max)
        {
            return Err(DateFieldError::OutOfBounds { date });
        }
        self.value = Some(date);
        self.frame.set_has_content(true, now);
        if let Some(on_change) = &self.on_change {
            on_change.call(self.value);
        }
        self.dismiss_picker(now);
        Ok(())
    }

    /// Clears the selection; the field collapses unless still focused.
    pub fn clear(&mut self, now: Instant) {
        if self.value.is_none() {
            return;
        }
        self.value = None;
        self.frame.set_has_content(false, now);
        if let Some(on_change) = &self.on_change {
            on_change.call(None);
        }
    }

    /// Closes the picker and releases focus without changing the value.
    pub fn dismiss_picker(&mut self, now: Instant) {
        self.picker_open = false;
        self.frame.native_blur(now);
    }

    /// Advances the transition timeline.
    pub fn tick(&mut self, now: Instant) {
        self.frame.tick(now);
    }

    /// Stores the caller's validity judgement for display.
    pub fn set_validity(&mut self, validity: impl Into<Validity>) {
        self.frame.set_validity(validity);
    }

    /// The caller-supplied validity signal.
    pub fn validity(&self) -> Validity {
        self.frame.validity()
    }

    /// Returns the derived expanded state.
    pub fn is_expanded(&self) -> bool {
        self.frame.is_expanded()
    }

    /// Shared frame accessor for label and description presentation.
    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_calendar_date_rejects_impossible_dates() {
        assert_eq!(
            CalendarDate::new(2022, 0, 1),
            Err(DateFieldError::MonthOutOfRange { month: 0 })
        );
        assert_eq!(
            CalendarDate::new(2022, 13, 1),
            Err(DateFieldError::MonthOutOfRange { month: 13 })
        );
        assert_eq!(
            CalendarDate::new(2022, 4, 31),
            Err(DateFieldError::DayOutOfRange {
                year: 2022,
                month: 4,
                day: 31
            })
        );
        assert!(CalendarDate::new(2022, 1, 0).is_err());
    }

    #[test]
    fn test_calendar_date_leap_years() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn test_calendar_date_ordering_and_display() {
        assert!(date(2022, 10, 10) < date(2022, 11, 11));
        assert!(date(2022, 12, 31) < date(2023, 1, 1));
        assert_eq!(date(2022, 10, 10).to_string(), "2022-10-10");
    }

    #[test]
    fn test_selection_respects_bounds() {
        let mut field = DateField::new(
            DateFieldArgs::default()
                .minimum_date(date(2022, 10, 10))
                .maximum_date(date(2022, 11, 11)),
        );
        let t0 = Instant::now();
        field.press(t0);
        assert!(field.is_picker_open());

        let too_early = date(2022, 10, 9);
        assert_eq!(
            field.select_date(too_early, t0),
            Err(DateFieldError::OutOfBounds { date: too_early })
        );
        assert_eq!(field.value(), None);
        assert!(field.is_picker_open());

        assert_eq!(field.select_date(date(2022, 10, 20), t0), Ok(()));
        assert_eq!(field.value(), Some(date(2022, 10, 20)));
        assert!(!field.is_picker_open());
        // Selected content keeps the field expanded after the blur.
        assert!(field.is_expanded());
    }

    #[test]
    fn test_clear_collapses_unfocused_field() {
        let mut field =
            DateField::new(DateFieldArgs::default().initial_value(date(2022, 10, 20)));
        let t0 = Instant::now();
        assert!(field.is_expanded());

        field.clear(t0);
        assert_eq!(field.value(), None);
        assert!(!field.is_expanded());

        // Clearing again is a no-op.
        field.clear(t0);
        assert_eq!(field.value(), None);
    }
}
