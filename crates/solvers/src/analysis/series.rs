use std::slice;

/// One entry of an [`ErrorSeries`]: the error measured at a key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample<K> {
    /// Where the error was measured (a step count or an x-value).
    pub at: K,

    /// The signed error, `exact - approximate`.
    pub error: f64,
}

/// An ordered sequence of error samples.
///
/// Global error series are keyed by step count (`ErrorSeries<usize>`) and
/// local error series by x-value (`ErrorSeries<f64>`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ErrorSeries<K> {
    samples: Vec<Sample<K>>,
}

impl<K> ErrorSeries<K> {
    #[must_use]
    pub fn samples(&self) -> &[Sample<K>] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample<K>> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample<K>> {
        self.samples.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample<K>> {
        self.samples.iter()
    }

    /// Returns the error of the first sample keyed at `at`.
    #[must_use]
    pub fn get(&self, at: &K) -> Option<f64>
    where
        K: PartialEq,
    {
        self.samples
            .iter()
            .find(|sample| sample.at == *at)
            .map(|sample| sample.error)
    }

    /// Returns the error values in order, dropping the keys.
    #[must_use]
    pub fn errors(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.error).collect()
    }
}

impl<K> Default for ErrorSeries<K> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl<K> FromIterator<(K, f64)> for ErrorSeries<K> {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            samples: iter
                .into_iter()
                .map(|(at, error)| Sample { at, error })
                .collect(),
        }
    }
}

impl<'a, K> IntoIterator for &'a ErrorSeries<K> {
    type Item = &'a Sample<K>;
    type IntoIter = slice::Iter<'a, Sample<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
