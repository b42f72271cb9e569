/// Starting balance of a fresh [`Purse`].
pub const DEFAULT_BALANCE: u32 = 500;

/// The currency holder fares are charged against.
///
/// The dispatcher calls [`Wallet::try_deduct`] exactly once per purchase and
/// never checks the balance beforehand.
pub trait Wallet {
    fn balance(&self) -> u32;

    /// Deduct `amount` if the balance covers it. Returns false, leaving the
    /// balance unchanged, when it does not.
    fn try_deduct(&mut self, amount: u32) -> bool;

    fn credit(&mut self, amount: u32);
}

/// In-memory wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purse {
    balance: u32,
}

impl Default for Purse {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}

impl Purse {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }
}

impl Wallet for Purse {
    #[inline]
    fn balance(&self) -> u32 {
        self.balance
    }

    fn try_deduct(&mut self, amount: u32) -> bool {
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                true
            }
            None => false,
        }
    }

    fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }
}
