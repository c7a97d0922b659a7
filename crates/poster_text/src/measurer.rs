//! Measurement provider seam

use crate::Extent;

/// Reports the natural (unscaled) extent of a single line of text.
///
/// The layout engine calls this repeatedly while growing a candidate line, so
/// implementations must be pure reads: the same text always yields the same
/// extent within one layout pass.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Extent;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str) -> Extent {
        (**self).measure(text)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str) -> Extent {
        (**self).measure(text)
    }
}

/// Adapts a closure into a [`TextMeasurer`]
///
/// ```
/// use poster_text::{Extent, MeasureFn, TextMeasurer};
///
/// let measurer = MeasureFn::new(|text: &str| Extent::new(text.len() as f32 * 8.0, 16.0));
/// assert_eq!(measurer.measure("abc"), Extent::new(24.0, 16.0));
/// ```
#[derive(Clone, Copy)]
pub struct MeasureFn<F> {
    measure: F,
}

impl<F> MeasureFn<F>
where
    F: Fn(&str) -> Extent,
{
    pub fn new(measure: F) -> Self {
        Self { measure }
    }
}

impl<F> TextMeasurer for MeasureFn<F>
where
    F: Fn(&str) -> Extent,
{
    fn measure(&self, text: &str) -> Extent {
        (self.measure)(text)
    }
}

impl<F> std::fmt::Debug for MeasureFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasureFn").finish_non_exhaustive()
    }
}
