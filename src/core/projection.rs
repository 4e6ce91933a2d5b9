//! Output projection
//!
//! Turns the final ledger into summary rows ready for serialization: decimal
//! fields carry exactly four fractional digits and `locked` stays a boolean.
//! Rows come out sorted by client ID.

use crate::core::ledger::ClientLedger;
use crate::types::{Client, ClientId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub client: ClientId,
    pub available: String,
    pub held: String,
    pub total: String,
    pub locked: bool,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        ClientSummary {
            client: client.id,
            available: format_amount(client.available),
            held: format_amount(client.held),
            total: format_amount(client.total),
            locked: client.locked,
        }
    }
}

/// Project every client in the ledger, sorted by ID
pub fn project(ledger: &ClientLedger) -> Vec<ClientSummary> {
    ledger.clients().into_iter().map(ClientSummary::from).collect()
}

/// Format with exactly four digits after the decimal point
///
/// Amounts with more digits are rounded half away from zero first, so
/// `1.23456` prints as `1.2346` rather than being cut to `1.2345`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.4}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer(Decimal::new(3, 0), "3.0000")]
    #[case::zero(Decimal::ZERO, "0.0000")]
    #[case::short_fraction(Decimal::new(15, 1), "1.5000")]
    #[case::four_digits(Decimal::new(1001234, 4), "100.1234")]
    #[case::negative(Decimal::new(-1, 0), "-1.0000")]
    #[case::smallest_unit(Decimal::new(1, 4), "0.0001")]
    #[case::rounds_up(Decimal::new(123_456_789, 8), "1.2346")]
    #[case::rounds_down(Decimal::new(123_454_999, 8), "1.2345")]
    #[case::midpoint_away_from_zero(Decimal::new(5, 5), "0.0001")]
    #[case::negative_midpoint(Decimal::new(-15, 5), "-0.0002")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_summary_from_client() {
        let mut client = Client::new(2);
        client.credit(Decimal::new(100_000, 4)).unwrap();
        client.hold(Decimal::new(40_000, 4)).unwrap();
        client.charge_back(Decimal::new(40_000, 4)).unwrap();

        let summary = ClientSummary::from(&client);

        assert_eq!(
            summary,
            ClientSummary {
                client: 2,
                available: "6.0000".to_string(),
                held: "0.0000".to_string(),
                total: "6.0000".to_string(),
                locked: true,
            }
        );
    }

    #[test]
    fn test_project_sorted_by_client() {
        let mut ledger = ClientLedger::new();
        ledger.get_or_create(9).credit(Decimal::ONE).unwrap();
        ledger.get_or_create(1);
        ledger.get_or_create(4);

        let rows = project(&ledger);

        let ids: Vec<ClientId> = rows.iter().map(|row| row.client).collect();
        assert_eq!(ids, vec![1, 4, 9]);
        assert_eq!(rows[2].available, "1.0000");
    }

    #[test]
    fn test_project_empty_ledger() {
        assert!(project(&ClientLedger::new()).is_empty());
    }
}
