//! An editable set of coin denominations.
//!
//! Coins are kept positive, unique and in ascending order, and the set is never
//! empty. The coin-change builder evaluates coins in exactly this stored order.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinSet {
    coins: Vec<usize>,
}

impl Default for CoinSet {
    /// The classic `{1, 2, 5}` denominations.
    fn default() -> Self {
        Self {
            coins: vec![1, 2, 5],
        }
    }
}

impl CoinSet {
    /// Builds a coin set from arbitrary denominations, sorting them ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use dptrace::cs::dynamic::CoinSet;
    /// use dptrace::Error;
    ///
    /// let coins = CoinSet::new([5, 1, 2]).unwrap();
    /// assert_eq!(coins.as_slice(), &[1, 2, 5]);
    ///
    /// assert_eq!(CoinSet::new([2, 2]), Err(Error::DuplicateCoin(2)));
    /// assert_eq!(CoinSet::new(Vec::new()), Err(Error::EmptyCoinSet));
    /// ```
    pub fn new<I: IntoIterator<Item = usize>>(coins: I) -> Result<Self> {
        let mut coins: Vec<usize> = coins.into_iter().collect();
        if coins.is_empty() {
            return Err(Error::EmptyCoinSet);
        }
        if coins.contains(&0) {
            return Err(Error::ZeroCoin);
        }
        coins.sort_unstable();
        if let Some(pair) = coins.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::DuplicateCoin(pair[0]));
        }
        Ok(Self { coins })
    }

    /// Adds a denomination, keeping ascending order.
    pub fn insert(&mut self, coin: usize) -> Result<()> {
        if coin == 0 {
            return Err(Error::ZeroCoin);
        }
        match self.coins.binary_search(&coin) {
            Ok(_) => Err(Error::DuplicateCoin(coin)),
            Err(pos) => {
                self.coins.insert(pos, coin);
                log::debug!("added coin {coin}, coins now {:?}", self.coins);
                Ok(())
            }
        }
    }

    /// Removes a denomination. The last remaining coin cannot be removed.
    pub fn remove(&mut self, coin: usize) -> Result<()> {
        let pos = self
            .coins
            .binary_search(&coin)
            .map_err(|_| Error::UnknownCoin(coin))?;
        if self.coins.len() == 1 {
            return Err(Error::LastCoin);
        }
        self.coins.remove(pos);
        log::debug!("removed coin {coin}, coins now {:?}", self.coins);
        Ok(())
    }

    pub fn contains(&self, coin: usize) -> bool {
        self.coins.binary_search(&coin).is_ok()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.coins
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.coins.iter().copied()
    }
}

impl AsRef<[usize]> for CoinSet {
    fn as_ref(&self) -> &[usize] {
        &self.coins
    }
}
