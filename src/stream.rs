//! Streaming card info for processing numbers as they arrive.
//!
//! Iterator adapters that compute [`CardInfo`] lazily, useful for large
//! files or line-oriented input without loading everything into memory.
//!
//! # Example
//!
//! ```
//! use card_identifier::stream::CardInfoExt;
//!
//! let cards = vec!["4532015112830366", "invalid", "378282246310005"];
//! let valid_count = cards.iter()
//!     .copied()
//!     .card_info()
//!     .filter(|info| info.is_valid())
//!     .count();
//!
//! assert_eq!(valid_count, 2);
//! ```

use crate::info::{get_card_info, CardInfo};

/// Iterator yielding a [`CardInfo`] for each input string.
///
/// Created by [`CardInfoExt::card_info`].
#[derive(Debug, Clone)]
pub struct CardInfoStream<I> {
    inner: I,
}

impl<I> CardInfoStream<I> {
    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for CardInfoStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = CardInfo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| get_card_info(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for CardInfoStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for CardInfoStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| get_card_info(s.as_ref()))
    }
}

/// Iterator yielding only inputs whose brand was identified.
///
/// Created by [`CardInfoExt::identified_only`].
#[derive(Debug, Clone)]
pub struct IdentifiedStream<I> {
    inner: I,
}

impl<I, S> Iterator for IdentifiedStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = CardInfo;

    fn next(&mut self) -> Option<Self::Item> {
        for s in self.inner.by_ref() {
            let info = get_card_info(s.as_ref());
            if info.identified().is_some() {
                return Some(info);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension trait adding card info adapters to any iterator of strings.
pub trait CardInfoExt: Iterator + Sized {
    /// Computes card info for each item.
    ///
    /// # Example
    ///
    /// ```
    /// use card_identifier::stream::CardInfoExt;
    ///
    /// let brands: Vec<_> = ["4532015112830366", "6011111111111117"]
    ///     .iter()
    ///     .card_info()
    ///     .map(|info| info.brand())
    ///     .collect();
    /// assert_eq!(brands, vec!["Visa", "Discover"]);
    /// ```
    fn card_info(self) -> CardInfoStream<Self>;

    /// Computes card info and skips items with brand `"Unknown"`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_identifier::stream::CardInfoExt;
    ///
    /// let cards = ["4532015112830366", "invalid", "9999999999999"];
    /// let known: Vec<_> = cards.iter().identified_only().collect();
    /// assert_eq!(known.len(), 2);
    /// ```
    fn identified_only(self) -> IdentifiedStream<Self>;
}

impl<I: Iterator + Sized> CardInfoExt for I {
    #[inline]
    fn card_info(self) -> CardInfoStream<Self> {
        CardInfoStream { inner: self }
    }

    #[inline]
    fn identified_only(self) -> IdentifiedStream<Self> {
        IdentifiedStream { inner: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_info_stream() {
        let cards = ["4532015112830366", "invalid", "378282246310005"];
        let infos: Vec<_> = cards.iter().card_info().collect();

        assert_eq!(infos.len(), 3);
        assert_eq!(infos[1].brand(), "Unknown");
    }

    #[test]
    fn test_exact_size_and_reverse() {
        let cards = vec!["4532015112830366".to_string(), "378282246310005".to_string()];
        let stream = cards.into_iter().card_info();
        assert_eq!(stream.len(), 2);

        let last = stream.rev().next().unwrap();
        assert_eq!(last.brand(), "Amex");
    }

    #[test]
    fn test_identified_only() {
        let cards = ["bad", "4532015112830366", "", "1", "9999999999999"];
        let brands: Vec<_> = cards.iter().identified_only().map(|i| i.brand()).collect();
        assert_eq!(brands, vec!["Visa", "Other"]);
    }

    #[test]
    fn test_into_inner() {
        let cards = ["4532015112830366"];
        let mut inner = cards.iter().card_info().into_inner();
        assert_eq!(inner.next(), Some(&"4532015112830366"));
    }
}
