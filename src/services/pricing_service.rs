use crate::models::pricing::{PriceBreakdown, PricingInput};

/// Per-day base rate in rupees, before any multiplier.
pub const BASE_RATE: f64 = 5000.0;

/// Multiplier applied to the day-count cost per traveler group category.
pub const TRAVELER_MULTIPLIERS: [(&str, f64); 6] = [
    ("solo", 1.8),
    ("couple", 2.0),
    ("family", 3.5),
    ("school", 6.0),
    ("college", 6.0),
    ("corporate", 4.0),
];

/// Tier multiplier over the traveler-adjusted base cost. The essential tier
/// costs exactly the base cost; the tier is a straight multiply, not base
/// plus a premium.
pub const PACKAGE_MULTIPLIERS: [(&str, f64); 2] = [("essential", 1.0), ("premium", 2.5)];

/// Meal plan fraction added on top of the base cost (not the package cost).
pub const MEAL_MULTIPLIERS: [(&str, f64); 4] = [
    ("none", 0.0),
    ("breakfast", 0.15),
    ("half", 0.30),
    ("full", 0.50),
];

/// Flat per-person add-on prices, independent of duration and tier.
pub const ACTIVITY_PRICES: [(&str, f64); 6] = [
    ("meditation", 1500.0),
    ("cooking", 2000.0),
    ("photography", 2500.0),
    ("spa", 3500.0),
    ("adventure", 3000.0),
    ("cultural", 1500.0),
];

/// 10% discount applies when the subtotal strictly exceeds this.
pub const DISCOUNT_THRESHOLD: f64 = 50000.0;
pub const DISCOUNT_RATE: f64 = 0.10;

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub struct PricingService;

impl PricingService {
    /// Computes the cost breakdown for one trip configuration.
    ///
    /// Total over its input domain: unknown traveler/package strings fall
    /// back to a multiplier of 1, unknown meal plans and activities
    /// contribute 0. Never fails, never rounds.
    ///
    /// `traveler_count` scales only the per-person activity add-ons. Base,
    /// package, and meal costs depend on the traveler type multiplier
    /// alone. Kept bit-for-bit compatible with the live site; see DESIGN.md
    /// before changing.
    pub fn calculate_price(input: &PricingInput) -> PriceBreakdown {
        let total_days: u32 = input.destinations.iter().map(|d| d.days).sum();

        let traveler_multiplier =
            lookup(&TRAVELER_MULTIPLIERS, &input.traveler_type).unwrap_or(1.0);
        let package_multiplier = lookup(&PACKAGE_MULTIPLIERS, &input.package_type).unwrap_or(1.0);
        let meal_multiplier = lookup(&MEAL_MULTIPLIERS, &input.meal_option).unwrap_or(0.0);

        let base_cost = BASE_RATE * total_days as f64 * traveler_multiplier;
        let package_cost = base_cost * package_multiplier;
        let meal_cost = base_cost * meal_multiplier;

        let activities_cost: f64 = input
            .activities
            .iter()
            .map(|a| lookup(&ACTIVITY_PRICES, a).unwrap_or(0.0) * input.traveler_count as f64)
            .sum();

        let subtotal = package_cost + meal_cost + activities_cost;
        let discount = if subtotal > DISCOUNT_THRESHOLD {
            subtotal * DISCOUNT_RATE
        } else {
            0.0
        };

        PriceBreakdown {
            total_days,
            base_cost,
            package_cost,
            meal_cost,
            activities_cost,
            discount,
            total: subtotal - discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pricing::DestinationSelection;

    fn input(
        destinations: &[(&str, u32)],
        traveler_type: &str,
        traveler_count: u32,
        package_type: &str,
        meal_option: &str,
        activities: &[&str],
    ) -> PricingInput {
        PricingInput {
            destinations: destinations
                .iter()
                .map(|(id, days)| DestinationSelection {
                    id: id.to_string(),
                    days: *days,
                })
                .collect(),
            traveler_type: traveler_type.to_string(),
            traveler_count,
            package_type: package_type.to_string(),
            meal_option: meal_option.to_string(),
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn empty_trip_is_free() {
        let breakdown =
            PricingService::calculate_price(&input(&[], "couple", 2, "premium", "full", &[]));
        assert_eq!(breakdown.total_days, 0);
        assert_eq!(breakdown.base_cost, 0.0);
        assert_eq!(breakdown.package_cost, 0.0);
        assert_eq!(breakdown.meal_cost, 0.0);
        assert_eq!(breakdown.activities_cost, 0.0);
        assert_eq!(breakdown.discount, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn solo_essential_three_days() {
        let breakdown = PricingService::calculate_price(&input(
            &[("bodh-gaya", 3)],
            "solo",
            1,
            "essential",
            "none",
            &[],
        ));
        assert_eq!(breakdown.total_days, 3);
        assert_eq!(breakdown.base_cost, 27000.0);
        assert_eq!(breakdown.package_cost, 27000.0);
        assert_eq!(breakdown.meal_cost, 0.0);
        assert_eq!(breakdown.discount, 0.0);
        assert_eq!(breakdown.total, 27000.0);
    }

    #[test]
    fn family_premium_full_board_with_activity() {
        let breakdown = PricingService::calculate_price(&input(
            &[("rajgir", 5)],
            "family",
            2,
            "premium",
            "full",
            &["meditation"],
        ));
        assert_eq!(breakdown.base_cost, 87500.0);
        assert_eq!(breakdown.package_cost, 218750.0);
        assert_eq!(breakdown.meal_cost, 43750.0);
        assert_eq!(breakdown.activities_cost, 3000.0);
        assert_eq!(breakdown.discount, 26550.0);
        assert_eq!(breakdown.total, 238950.0);
    }

    #[test]
    fn unknown_enum_values_degrade_to_neutral_multipliers() {
        let breakdown = PricingService::calculate_price(&input(
            &[("patna", 2)],
            "alien",
            3,
            "ultra",
            "gourmet",
            &["skydiving"],
        ));
        assert_eq!(breakdown.base_cost, 10000.0);
        assert_eq!(breakdown.package_cost, 10000.0);
        assert_eq!(breakdown.meal_cost, 0.0);
        assert_eq!(breakdown.activities_cost, 0.0);
        assert_eq!(breakdown.discount, 0.0);
        assert_eq!(breakdown.total, 10000.0);
    }

    #[test]
    fn empty_strings_never_panic() {
        let breakdown = PricingService::calculate_price(&input(&[("x", 1)], "", 0, "", "", &[""]));
        assert_eq!(breakdown.total, 5000.0);
    }

    #[test]
    fn discount_threshold_is_strictly_greater_than() {
        // couple at 10000/day for 5 days lands exactly on the threshold
        let at_threshold = PricingService::calculate_price(&input(
            &[("nalanda", 5)],
            "couple",
            2,
            "essential",
            "none",
            &[],
        ));
        assert_eq!(at_threshold.discount, 0.0);
        assert_eq!(at_threshold.total, 50000.0);

        // one cultural show for one person pushes the subtotal over
        let over_threshold = PricingService::calculate_price(&input(
            &[("nalanda", 5)],
            "couple",
            1,
            "essential",
            "none",
            &["cultural"],
        ));
        assert_eq!(over_threshold.discount, 5150.0);
        assert_eq!(over_threshold.total, 46350.0);
    }

    #[test]
    fn traveler_count_scales_only_activities() {
        let one = PricingService::calculate_price(&input(
            &[("gaya", 4)],
            "corporate",
            1,
            "premium",
            "half",
            &["spa", "adventure"],
        ));
        let ten = PricingService::calculate_price(&input(
            &[("gaya", 4)],
            "corporate",
            10,
            "premium",
            "half",
            &["spa", "adventure"],
        ));
        assert_eq!(one.base_cost, ten.base_cost);
        assert_eq!(one.package_cost, ten.package_cost);
        assert_eq!(one.meal_cost, ten.meal_cost);
        assert_eq!(one.activities_cost, 6500.0);
        assert_eq!(ten.activities_cost, 65000.0);
    }

    #[test]
    fn meal_cost_scales_off_base_cost_not_package_cost() {
        let breakdown = PricingService::calculate_price(&input(
            &[("vaishali", 2)],
            "couple",
            2,
            "premium",
            "breakfast",
            &[],
        ));
        // 5000 * 2 * 2.0 = 20000 base; breakfast is 15% of base, not of the
        // 2.5x package cost
        assert_eq!(breakdown.meal_cost, 3000.0);
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let cfg = input(
            &[("bodh-gaya", 2), ("rajgir", 3)],
            "school",
            40,
            "premium",
            "full",
            &["cooking", "cultural"],
        );
        let first = PricingService::calculate_price(&cfg);
        let second = PricingService::calculate_price(&cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn adding_days_never_decreases_total() {
        for traveler in ["solo", "couple", "family", "school", "corporate", "???"] {
            let mut previous = 0.0;
            for days in 1..=30 {
                let breakdown = PricingService::calculate_price(&input(
                    &[("kesariya", days)],
                    traveler,
                    2,
                    "premium",
                    "half",
                    &["photography"],
                ));
                assert!(breakdown.total >= previous);
                assert!(breakdown.total >= 0.0);
                previous = breakdown.total;
            }
        }
    }

    #[test]
    fn total_equals_subtotal_minus_discount() {
        let breakdown = PricingService::calculate_price(&input(
            &[("pawapuri", 7)],
            "college",
            25,
            "premium",
            "full",
            &[
                "meditation",
                "cooking",
                "photography",
                "spa",
                "adventure",
                "cultural",
            ],
        ));
        let subtotal = breakdown.package_cost + breakdown.meal_cost + breakdown.activities_cost;
        assert_eq!(breakdown.total, subtotal - breakdown.discount);
        assert_eq!(breakdown.discount, subtotal * 0.10);
    }
}
