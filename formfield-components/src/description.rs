//! Helper text and pictures attachable to any field.

/// A picture shown alongside a field description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionPicture {
    /// Source URI of the picture.
    pub src: String,
}

impl DescriptionPicture {
    /// Creates a picture reference from a source URI.
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// Explanatory text, optionally illustrated, rendered above a field's input
/// area to give the user context for what they are supposed to enter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    /// The description text.
    pub text: String,
    /// Pictures illustrating the description.
    pub pictures: Vec<DescriptionPicture>,
}

impl Description {
    /// Creates a text-only description.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pictures: Vec::new(),
        }
    }

    /// Adds a picture to the description.
    pub fn with_picture(mut self, src: impl Into<String>) -> Self {
        self.pictures.push(DescriptionPicture::new(src));
        self
    }
}
