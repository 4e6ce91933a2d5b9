//! Client balance state
//!
//! A [`Client`] holds the balances of one account. The mutation helpers each
//! move funds between `available`, `held` and `total` in a single step so that
//! `total == available + held` holds after every call. Every balance is
//! computed with checked arithmetic before any of them is written.

use super::error::Rejection;
use super::transaction::ClientId;
use rust_decimal::Decimal;

/// Balance state of a single client
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// The client ID, assigned on first sighting
    pub id: ClientId,

    /// Funds usable for withdrawal
    ///
    /// May go negative when a dispute holds funds that were already spent.
    pub available: Decimal,

    /// Funds frozen by open disputes
    pub held: Decimal,

    /// Sum of available and held funds
    pub total: Decimal,

    /// Set by a chargeback and never cleared
    ///
    /// A locked client keeps processing transactions; the flag is only reported.
    pub locked: bool,
}

impl Client {
    /// Create a client with zero balances and unlocked status
    pub fn new(id: ClientId) -> Self {
        Client {
            id,
            available: Decimal::ZERO,
            held: Decimal::ZERO,
            total: Decimal::ZERO,
            locked: false,
        }
    }

    /// Add funds to available and total (deposit)
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if either balance would overflow. Nothing
    /// is changed in that case.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), Rejection> {
        self.commit(
            self.available.checked_add(amount),
            Some(self.held),
            self.total.checked_add(amount),
        )
    }

    /// Remove funds from available and total (withdrawal)
    pub fn debit(&mut self, amount: Decimal) -> Result<(), Rejection> {
        self.commit(
            self.available.checked_sub(amount),
            Some(self.held),
            self.total.checked_sub(amount),
        )
    }

    /// Move funds from available to held (dispute)
    pub fn hold(&mut self, amount: Decimal) -> Result<(), Rejection> {
        self.commit(
            self.available.checked_sub(amount),
            self.held.checked_add(amount),
            Some(self.total),
        )
    }

    /// Move funds from held back to available (resolve)
    pub fn release(&mut self, amount: Decimal) -> Result<(), Rejection> {
        self.commit(
            self.available.checked_add(amount),
            self.held.checked_sub(amount),
            Some(self.total),
        )
    }

    /// Remove held funds from the account and lock it (chargeback)
    ///
    /// The account is only locked when the balances could be updated.
    pub fn charge_back(&mut self, amount: Decimal) -> Result<(), Rejection> {
        self.commit(
            Some(self.available),
            self.held.checked_sub(amount),
            self.total.checked_sub(amount),
        )?;
        self.locked = true;
        Ok(())
    }

    /// Write all three balances, or none if any computation overflowed
    fn commit(
        &mut self,
        available: Option<Decimal>,
        held: Option<Decimal>,
        total: Option<Decimal>,
    ) -> Result<(), Rejection> {
        match (available, held, total) {
            (Some(available), Some(held), Some(total)) => {
                self.available = available;
                self.held = held;
                self.total = total;
                Ok(())
            }
            _ => Err(Rejection::arithmetic_overflow(self.id)),
        }
    }

    /// Whether `total == available + held`
    pub fn is_balanced(&self) -> bool {
        self.total == self.available + self.held
    }
}
