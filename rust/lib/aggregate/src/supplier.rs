use serde::Serialize;
use supplydash_model::Supplier;

/// Delivery performance bucket; lower delivery time is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryBand {
    /// Three days or less.
    Fast,
    /// Up to a week.
    Moderate,
    Slow,
}

impl DeliveryBand {
    pub fn of(average_delivery_time: f64) -> Self {
        if average_delivery_time <= 3.0 {
            DeliveryBand::Fast
        } else if average_delivery_time <= 7.0 {
            DeliveryBand::Moderate
        } else {
            DeliveryBand::Slow
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRank {
    pub name: String,
    pub average_delivery_time: f64,
    pub band: DeliveryBand,
}

/// Suppliers ordered by average delivery time, fastest first.
/// Ties keep their input order.
pub fn supplier_ranking(suppliers: &[Supplier]) -> Vec<SupplierRank> {
    let mut ranks: Vec<SupplierRank> = suppliers
        .iter()
        .map(|s| SupplierRank {
            name: s.name.clone(),
            average_delivery_time: s.average_delivery_time,
            band: DeliveryBand::of(s.average_delivery_time),
        })
        .collect();
    ranks.sort_by(|a, b| a.average_delivery_time.total_cmp(&b.average_delivery_time));
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str, avg: f64) -> Supplier {
        Supplier {
            name: name.to_string(),
            average_delivery_time: avg,
            ..Default::default()
        }
    }

    #[test]
    fn fastest_first() {
        let ranks = supplier_ranking(&[supplier("X", 7.0), supplier("Y", 3.0)]);
        let names: Vec<&str> = ranks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Y", "X"]);
    }

    #[test]
    fn ties_are_stable() {
        let ranks = supplier_ranking(&[
            supplier("B", 4.0),
            supplier("A", 4.0),
            supplier("C", 1.0),
        ]);
        let names: Vec<&str> = ranks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn bands() {
        assert_eq!(DeliveryBand::of(3.0), DeliveryBand::Fast);
        assert_eq!(DeliveryBand::of(3.5), DeliveryBand::Moderate);
        assert_eq!(DeliveryBand::of(7.0), DeliveryBand::Moderate);
        assert_eq!(DeliveryBand::of(7.1), DeliveryBand::Slow);
    }
}
