//! Scripted form walkthrough.
//!
//! Builds the field roster of a typical submission form and drives it
//! through a simulated interaction timeline (taps, typing, blurs, frame
//! ticks), logging the presentation state after each step. Run with
//! `RUST_LOG=trace` to see the engine's edge and transition events.

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use formfield_components::{
    choice_field::{ChoiceField, ChoiceFieldArgs},
    date_field::{CalendarDate, DateField, DateFieldArgs},
    description::Description,
    multi_line::{MultiLineField, MultiLineFieldArgs},
    photo_field::{PhotoField, PhotoFieldArgs},
    single_line::{SingleLineField, SingleLineFieldArgs},
    theme::FieldTheme,
};
use formfield_core::Validity;
use tracing_subscriber::EnvFilter;

/// Form values merged from field callbacks, reducer style.
#[derive(Debug, Default)]
struct FormState {
    store_name: String,
    reference: String,
    notes: String,
    visit_date: Option<CalendarDate>,
    selected_answers: Vec<usize>,
}

/// The reference must start with 'R'; no judgement while empty.
fn reference_validity(reference: &str) -> Validity {
    if reference.is_empty() {
        Validity::Unknown
    } else {
        Validity::from(reference.starts_with('R'))
    }
}

fn log_field(name: &str, expanded: bool, fraction: f32, validity: Validity) {
    let theme = FieldTheme::default();
    let accent = theme.validity_accent(validity);
    tracing::info!(
        name,
        expanded,
        fraction,
        ?validity,
        accent_r = accent.r,
        accent_g = accent.g,
        accent_b = accent.b,
        "field state"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let form = Arc::new(Mutex::new(FormState::default()));
    let frame = Duration::from_millis(50);
    let mut now = Instant::now();

    let mut store_name = SingleLineField::new(
        SingleLineFieldArgs::default()
            .label("Store name")
            .on_change({
                let form = form.clone();
                move |text: String| {
                    if let Ok(mut state) = form.lock() {
                        state.store_name = text;
                    }
                }
            }),
    );

    let mut reference = SingleLineField::new(
        SingleLineFieldArgs::default()
            .label("Reference (must start with 'R')")
            .on_change({
                let form = form.clone();
                move |text: String| {
                    if let Ok(mut state) = form.lock() {
                        state.reference = text;
                    }
                }
            }),
    );

    let mut notes = MultiLineField::new(
        MultiLineFieldArgs::default()
            .label("Visit notes")
            .placeholder("I am a placeholder")
            .description(
                Description::new("Add information and context for the reviewer")
                    .with_picture("https://example.com/help.png"),
            )
            .on_change({
                let form = form.clone();
                move |text: String| {
                    if let Ok(mut state) = form.lock() {
                        state.notes = text;
                    }
                }
            }),
    );

    let mut visit_date = DateField::new(
        DateFieldArgs::default()
            .label("Visit date")
            .minimum_date(CalendarDate::new(2022, 10, 10)?)
            .maximum_date(CalendarDate::new(2022, 11, 11)?)
            .description(Description::new("Between 2022-10-10 and 2022-11-11"))
            .on_change({
                let form = form.clone();
                move |date: Option<CalendarDate>| {
                    if let Ok(mut state) = form.lock() {
                        state.visit_date = date;
                    }
                }
            }),
    );

    let mut shelf_check = ChoiceField::new(
        ChoiceFieldArgs::default()
            .label("Shelf check")
            .possible_answers(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ])
            .on_select({
                let form = form.clone();
                move |index: usize| {
                    if let Ok(mut state) = form.lock() {
                        if let Some(position) =
                            state.selected_answers.iter().position(|i| *i == index)
                        {
                            state.selected_answers.remove(position);
                        } else {
                            state.selected_answers.push(index);
                        }
                    }
                }
            }),
    );

    let mut photos = PhotoField::new(
        PhotoFieldArgs::default()
            .label("Shelf photos")
            .description(Description::new("You can click on pictures"))
            .on_press_picture(|index: usize| {
                tracing::info!(index, "picture pressed");
            }),
    );

    // Tap the store-name field and let its expand animation finish.
    store_name.press(now);
    for _ in 0..5 {
        now += frame;
        store_name.tick(now);
    }
    tracing::info!(caret = store_name.caret_active(), "store name ready for input");
    store_name.set_text("Corner Market", now);
    store_name.native_blur(now);
    log_field(
        "store_name",
        store_name.is_expanded(),
        store_name.label_fraction(),
        store_name.validity(),
    );

    // Type an invalid reference, watch the accent flip, then fix it.
    reference.press(now);
    for _ in 0..5 {
        now += frame;
        reference.tick(now);
    }
    for text in ["Q", "Q1", "R1", "R12"] {
        reference.set_text(text, now);
        reference.set_validity(reference_validity(reference.text()));
        log_field(
            "reference",
            reference.is_expanded(),
            reference.label_fraction(),
            reference.validity(),
        );
    }
    reference.native_blur(now);

    // Multi-line placeholder appears while expanded and empty.
    notes.press(now);
    tracing::info!(placeholder = notes.show_placeholder(), "notes placeholder");
    notes.set_text("Aisle 3 was restocked.\nEnd cap needs a new banner.", now);
    notes.native_blur(now);
    log_field(
        "notes",
        notes.is_expanded(),
        notes.label_fraction(),
        notes.validity(),
    );

    // Date selection inside bounds; the out-of-range attempt is rejected.
    visit_date.press(now);
    if let Err(error) = visit_date.select_date(CalendarDate::new(2022, 9, 1)?, now) {
        tracing::warn!(%error, "date rejected");
    }
    visit_date.select_date(CalendarDate::new(2022, 10, 20)?, now)?;
    tracing::info!(date = ?visit_date.formatted(), "date selected");

    // Toggle a couple of answers and attach a photo.
    shelf_check.toggle_answer(1, now);
    shelf_check.toggle_answer(3, now);
    photos.add_picture("https://example.com/shelf-1.jpg", now);
    photos.press_picture(0);

    // Drain the remaining transitions.
    for _ in 0..8 {
        now += frame;
        notes.tick(now);
        visit_date.tick(now);
        shelf_check.tick(now);
        photos.tick(now);
    }

    let state = form.lock().map_err(|_| "form state poisoned")?;
    tracing::info!(
        store_name = %state.store_name,
        reference = %state.reference,
        notes = %state.notes,
        visit_date = ?state.visit_date,
        selected_answers = ?state.selected_answers,
        "final form state"
    );
    Ok(())
}
