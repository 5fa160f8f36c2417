use serde::Serialize;
use supplydash_model::HasStatus;

use crate::group::sum_by_key;

/// How many records carry one status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Count records per distinct status, in order of first appearance.
pub fn status_distribution<T: HasStatus>(records: &[T]) -> Vec<StatusCount> {
    sum_by_key(records, |r| r.status(), |_| 1usize)
        .into_iter()
        .map(|row| StatusCount {
            status: row.key,
            count: row.total,
        })
        .collect()
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// delivered
    Good,
    /// shipped
    Pending,
    /// processing
    Attention,
    Neutral,
}

impl StatusTone {
    /// Classify a lifecycle label, case-insensitive.
    pub fn of(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "delivered" => StatusTone::Good,
            "shipped" => StatusTone::Pending,
            "processing" => StatusTone::Attention,
            _ => StatusTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use supplydash_model::{Order, Shipment};

    use super::*;

    fn order(status: &str) -> Order {
        Order {
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_in_first_seen_order() {
        let dist = status_distribution(&[order("A"), order("B"), order("A")]);
        assert_eq!(
            dist,
            vec![
                StatusCount { status: "A".into(), count: 2 },
                StatusCount { status: "B".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn works_for_shipments() {
        let shipments = vec![
            Shipment { status: "Shipped".into(), ..Default::default() },
            Shipment { status: "Delivered".into(), ..Default::default() },
        ];
        let dist = status_distribution(&shipments);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].status, "Shipped");
    }

    #[test]
    fn empty_input() {
        assert!(status_distribution::<Order>(&[]).is_empty());
    }

    #[test]
    fn tone_is_case_insensitive() {
        assert_eq!(StatusTone::of("Delivered"), StatusTone::Good);
        assert_eq!(StatusTone::of("SHIPPED"), StatusTone::Pending);
        assert_eq!(StatusTone::of("processing"), StatusTone::Attention);
        assert_eq!(StatusTone::of("Cancelled"), StatusTone::Neutral);
    }
}
