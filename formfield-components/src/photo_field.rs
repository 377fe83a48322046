//! Photo field model.
//!
//! Holds the list of picture URIs attached to the field; the photo grid and
//! camera surface are external collaborators. Any attached picture counts
//! as content for the floating-label lifecycle.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use formfield_core::{Callback, CallbackWith, TransitionAnimator, Validity};

use crate::{
    description::Description,
    field_frame::{FieldFrame, FieldFrameArgs},
};

/// Arguments for configuring a [`PhotoField`].
#[derive(Clone, Setters)]
pub struct PhotoFieldArgs {
    /// Label floated while the field is focused or holds pictures.
    #[setters(into)]
    pub label: String,
    /// Picture URIs attached at construction time.
    #[setters(into)]
    pub picture_uris: Vec<String>,
    /// Optional description rendered above the grid.
    #[setters(strip_option)]
    pub description: Option<Description>,
    /// Called with the index of a pressed picture.
    #[setters(strip_option, into)]
    pub on_press_picture: Option<CallbackWith<usize>>,
    /// Called when the user asks to open the camera.
    #[setters(strip_option, into)]
    pub on_open_camera: Option<Callback>,
    /// Full-distance duration of the expand/collapse transition.
    pub transition_duration: Duration,
}

impl Default for PhotoFieldArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            picture_uris: Vec::new(),
            description: None,
            on_press_picture: None,
            on_open_camera: None,
            transition_duration: TransitionAnimator::DEFAULT_DURATION,
        }
    }
}

/// A labeled photo attachment field sharing the floating-label lifecycle.
pub struct PhotoField {
    frame: FieldFrame,
    pictures: Vec<String>,
    on_press_picture: Option<CallbackWith<usize>>,
    on_open_camera: Option<Callback>,
}

impl PhotoField {
    /// Creates a field from its arguments.
    pub fn new(args: PhotoFieldArgs) -> Self {
        let mut frame_args = FieldFrameArgs::default()
            .label(args.label)
            .initial_has_content(!args.picture_uris.is_empty())
            .transition_duration(args.transition_duration);
        if let Some(description) = args.description {
            frame_args = frame_args.description(description);
        }
        Self {
            frame: FieldFrame::new(frame_args),
            pictures: args.picture_uris,
            on_press_picture: args.on_press_picture,
            on_open_camera: args.on_open_camera,
        }
    }

    /// The attached picture URIs.
    pub fn picture_uris(&self) -> &[String] {
        &self.pictures
    }

    /// Attaches a picture, expanding the field if it was empty.
    pub fn add_picture(&mut self, uri: impl Into<String>, now: Instant) {
        self.pictures.push(uri.into());
        self.frame.set_has_content(true, now);
    }

    /// Removes the picture at `index`; out-of-range indices are ignored.
    pub fn remove_picture(&mut self, index: usize, now: Instant) {
        if index >= self.pictures.len() {
            tracing::warn!(index, pictures = self.pictures.len(), "ignoring out-of-range removal");
            return;
        }
        self.pictures.remove(index);
        self.frame.set_has_content(!self.pictures.is_empty(), now);
    }

    /// User pressed the picture at `index`; out-of-range indices are
    /// ignored.
    pub fn press_picture(&self, index: usize) {
        if index >= self.pictures.len() {
            tracing::warn!(index, pictures = self.pictures.len(), "ignoring out-of-range press");
            return;
        }
        if let Some(on_press) = &self.on_press_picture {
            on_press.call(index);
        }
    }

    /// User asked to open the camera.
    pub fn open_camera(&self) {
        if let Some(on_open) = &self.on_open_camera {
            on_open.call();
        }
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
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[test]
    fn test_pictures_drive_expansion() {
        let mut field = PhotoField::new(PhotoFieldArgs::default());
        let t0 = Instant::now();
        assert!(!field.is_expanded());

        field.add_picture("https://example.com/a.png", t0);
        assert!(field.is_expanded());

        field.remove_picture(0, t0);
        assert!(!field.is_expanded());
        assert!(field.picture_uris().is_empty());
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let presses = Arc::new(AtomicUsize::new(0));
        let mut field = PhotoField::new(
            PhotoFieldArgs::default()
                .picture_uris(vec!["a".to_string()])
                .on_press_picture({
                    let presses = presses.clone();
                    move |_: usize| {
                        presses.fetch_add(1, Ordering::SeqCst);
                    }
                }),
        );
        let t0 = Instant::now();

        field.press_picture(5);
        assert_eq!(presses.load(Ordering::SeqCst), 0);
        field.press_picture(0);
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        field.remove_picture(5, t0);
        assert_eq!(field.picture_uris().len(), 1);
    }
}
