//! Batch processing for many card numbers at once.
//!
//! The pattern table is read-only after its first use, so batches can be
//! spread across threads with the `parallel` feature (rayon) without any
//! locking.

use crate::info::{get_card_info, CardInfo};
use crate::luhn::validate_card;

/// Batch identifier for processing multiple card numbers.
///
/// # Example
///
/// ```
/// use card_identifier::BatchIdentifier;
///
/// let batch = BatchIdentifier::new();
/// let cards = vec!["4532015112830366", "378282246310005", "invalid"];
/// let results = batch.info_all(&cards);
///
/// assert_eq!(results[0].brand(), "Visa");
/// assert_eq!(results[2].brand(), "Unknown");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchIdentifier {
    identified_only: bool,
}

impl BatchIdentifier {
    /// Creates a new batch identifier that keeps every result.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops results whose brand is `"Unknown"`.
    #[inline]
    pub fn identified_only(mut self, identified_only: bool) -> Self {
        self.identified_only = identified_only;
        self
    }

    fn keep(&self, info: &CardInfo) -> bool {
        !self.identified_only || info.identified().is_some()
    }

    /// Computes card info for every input, in input order.
    pub fn info_all<S: AsRef<str>>(&self, cards: &[S]) -> Vec<CardInfo> {
        cards
            .iter()
            .map(|c| get_card_info(c.as_ref()))
            .filter(|info| self.keep(info))
            .collect()
    }

    /// Splits the batch into checksum-valid results and the indices of the
    /// inputs that failed.
    pub fn partition_valid<S: AsRef<str>>(&self, cards: &[S]) -> (Vec<CardInfo>, Vec<usize>) {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            let info = get_card_info(card.as_ref());
            if !self.keep(&info) {
                continue;
            }
            if info.is_valid() {
                valid.push(info);
            } else {
                invalid.push(i);
            }
        }

        (valid, invalid)
    }

    /// Computes card info in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn info_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> Vec<CardInfo> {
        use rayon::prelude::*;
        cards
            .par_iter()
            .map(|c| get_card_info(c.as_ref()))
            .filter(|info| self.keep(info))
            .collect()
    }
}

/// Computes card info for a slice without creating a [`BatchIdentifier`].
///
/// # Example
///
/// ```
/// use card_identifier::batch::card_info_batch;
///
/// let results = card_info_batch(&["4532015112830366", "6011111111111117"]);
/// assert_eq!(results[1].brand(), "Discover");
/// ```
#[inline]
pub fn card_info_batch<S: AsRef<str>>(cards: &[S]) -> Vec<CardInfo> {
    cards.iter().map(|c| get_card_info(c.as_ref())).collect()
}

/// Computes card info for a slice in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn card_info_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<CardInfo> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| get_card_info(c.as_ref())).collect()
}

/// Counts Luhn-valid and invalid cards in a batch.
///
/// Skips identification and formatting entirely.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use card_identifier::batch::count_valid;
///
/// let cards = ["4532015112830366", "1234567890123456", "378282246310005"];
/// assert_eq!(count_valid(&cards), (2, 1));
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| validate_card(c.as_ref())).count();
    (valid, cards.len() - valid)
}

/// Counts Luhn-valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| validate_card(c.as_ref()))
        .count();

    (valid, cards.len() - valid)
}
