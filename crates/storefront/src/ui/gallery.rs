//! Product image gallery state.

use url::Url;

/// Thumbnail strip with one active image shown large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGallery {
    images: Vec<Url>,
    active: usize,
}

impl ProductGallery {
    /// Create a gallery with the first image active.
    #[must_use]
    pub const fn new(images: Vec<Url>) -> Self {
        Self { images, active: 0 }
    }

    /// Make the thumbnail at `index` the main image.
    ///
    /// Returns `false` (and changes nothing) for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }

        self.active = index;
        true
    }

    /// Index of the active thumbnail.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The image currently shown large, if the gallery has any images.
    #[must_use]
    pub fn main_image(&self) -> Option<&Url> {
        self.images.get(self.active)
    }

    /// All thumbnails, in display order.
    #[must_use]
    pub fn thumbnails(&self) -> &[Url] {
        &self.images
    }
}
