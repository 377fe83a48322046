//! Form field models with floating labels and validity accents.
//!
//! # Usage
//!
//! Each field model owns a [`field_frame::FieldFrame`] (the shared focus,
//! transition, and validity glue from `formfield-core`) plus its own value
//! state. The hosting UI relays interaction events in and reads the derived
//! presentation back out per frame:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use formfield_components::single_line::{SingleLineField, SingleLineFieldArgs};
//!
//! let mut field = SingleLineField::new(
//!     SingleLineFieldArgs::default().label("Store name"),
//! );
//!
//! let t0 = Instant::now();
//! field.press(t0);
//! // ... frame loop ...
//! field.tick(t0 + Duration::from_millis(250));
//! assert!(field.is_expanded());
//! assert!(field.caret_active());
//! ```
//!
//! Validity is a pass-through display concern: callers judge the content and
//! supply the tri-state signal, the fields only carry it to the theme's
//! accent mapping.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod choice_field;
pub mod date_field;
pub mod description;
pub mod field_frame;
pub mod multi_line;
pub mod photo_field;
pub mod single_line;
pub mod theme;
