//! Client ledger
//!
//! The [`ClientLedger`] owns the balance state of every client seen during a
//! replay. Clients are created in exactly one place, [`ClientLedger::get_or_create`],
//! with zero balances and unlocked status, and are never removed.

use crate::types::{Client, ClientId};
use std::collections::HashMap;

/// Map of client IDs to balance state
#[derive(Debug, Default)]
pub struct ClientLedger {
    clients: HashMap<ClientId, Client>,
}

impl ClientLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        ClientLedger {
            clients: HashMap::new(),
        }
    }

    /// Get the client for `id`, creating it with zero balances on first sighting
    ///
    /// # Arguments
    ///
    /// * `id` - The client identifier
    ///
    /// # Returns
    ///
    /// A mutable reference to the existing or newly created client
    pub fn get_or_create(&mut self, id: ClientId) -> &mut Client {
        self.clients.entry(id).or_insert_with(|| Client::new(id))
    }

    /// Look up a client without creating it
    ///
    /// # Returns
    ///
    /// * `Some(&Client)` - If the client has been seen
    /// * `None` - If no record referenced this client yet
    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    /// Returns true if the client exists and is locked
    pub fn is_locked(&self, id: ClientId) -> bool {
        self.clients.get(&id).is_some_and(|client| client.locked)
    }

    /// All clients sorted by ID
    pub fn clients(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.values().collect();
        clients.sort_by_key(|client| client.id);
        clients
    }

    /// Number of clients seen so far
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if no client has been seen
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ClientLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.clients().len(), 0);
    }

    #[test]
    fn test_get_or_create_creates_zeroed_client() {
        let mut ledger = ClientLedger::new();

        let client = ledger.get_or_create(1);

        assert_eq!(*client, Client::new(1));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_or_create_returns_existing_client() {
        let mut ledger = ClientLedger::new();

        ledger.get_or_create(1).credit(Decimal::new(10000, 4)).unwrap();

        let client = ledger.get_or_create(1);
        assert_eq!(client.available, Decimal::new(10000, 4));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_does_not_create() {
        let ledger = ClientLedger::new();
        assert!(ledger.get(5).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_is_locked() {
        let mut ledger = ClientLedger::new();
        assert!(!ledger.is_locked(1));

        ledger.get_or_create(1);
        assert!(!ledger.is_locked(1));

        ledger.get_or_create(1).locked = true;
        assert!(ledger.is_locked(1));
    }

    #[test]
    fn test_clients_sorted_by_id() {
        let mut ledger = ClientLedger::new();
        for id in [3, 1, 2] {
            ledger.get_or_create(id);
        }

        let ids: Vec<ClientId> = ledger.clients().iter().map(|client| client.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
