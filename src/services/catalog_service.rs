use crate::models::catalog::{ActivityOption, Destination, MealPlan, PackageTier, TravelerType};

/// Destinations offered by the package builder. `suggested_days` seeds the
/// day counter when a destination is first selected.
pub const DESTINATIONS: [Destination; 6] = [
    Destination {
        id: "bodh-gaya",
        name: "Bodh Gaya",
        min_days: 1,
        suggested_days: 2,
    },
    Destination {
        id: "rajgir",
        name: "Rajgir",
        min_days: 1,
        suggested_days: 2,
    },
    Destination {
        id: "nalanda",
        name: "Nalanda",
        min_days: 1,
        suggested_days: 1,
    },
    Destination {
        id: "pawapuri",
        name: "Pawapuri",
        min_days: 1,
        suggested_days: 1,
    },
    Destination {
        id: "vaishali",
        name: "Vaishali",
        min_days: 1,
        suggested_days: 1,
    },
    Destination {
        id: "kesariya",
        name: "Kesariya",
        min_days: 1,
        suggested_days: 1,
    },
];

/// Destination names offered on the quote-request form. Wider than the
/// builder catalog; these are free-form metadata for staff follow-up.
pub const QUOTE_DESTINATIONS: [&str; 10] = [
    "Bodh Gaya",
    "Rajgir",
    "Nalanda",
    "Pawapuri",
    "Vaishali",
    "Kesariya",
    "Patna",
    "Gaya",
    "Vikramshila",
    "Rohtasgarh",
];

pub const TRAVELER_TYPES: [TravelerType; 6] = [
    TravelerType {
        id: "solo",
        name: "Solo Traveler",
        multiplier: 1.8,
        fixed_count: Some(1),
    },
    TravelerType {
        id: "couple",
        name: "Couple",
        multiplier: 2.0,
        fixed_count: Some(2),
    },
    TravelerType {
        id: "family",
        name: "Family",
        multiplier: 3.5,
        fixed_count: None,
    },
    TravelerType {
        id: "school",
        name: "School Group",
        multiplier: 6.0,
        fixed_count: None,
    },
    TravelerType {
        id: "college",
        name: "College Group",
        multiplier: 6.0,
        fixed_count: None,
    },
    TravelerType {
        id: "corporate",
        name: "Corporate",
        multiplier: 4.0,
        fixed_count: None,
    },
];

pub const PACKAGE_TIERS: [PackageTier; 3] = [
    PackageTier {
        id: "essential",
        name: "Essential",
        multiplier: Some(1.0),
        features: &[
            "Budget hotels (2-3 star)",
            "Basic transportation",
            "Standard guide (optional)",
        ],
    },
    PackageTier {
        id: "premium",
        name: "Premium",
        multiplier: Some(2.5),
        features: &[
            "Luxury hotels (4-5 star)",
            "Premium transportation",
            "Expert multilingual guide",
            "All meals included",
            "VIP experiences",
        ],
    },
    // Quote forms accept deluxe as request metadata; it is never priced.
    PackageTier {
        id: "deluxe",
        name: "Deluxe",
        multiplier: None,
        features: &[],
    },
];

pub const MEAL_PLANS: [MealPlan; 4] = [
    MealPlan {
        id: "none",
        name: "No Meals",
        multiplier: 0.0,
    },
    MealPlan {
        id: "breakfast",
        name: "Breakfast Only",
        multiplier: 0.15,
    },
    MealPlan {
        id: "half",
        name: "Half Board (2 meals)",
        multiplier: 0.30,
    },
    MealPlan {
        id: "full",
        name: "Full Board (3 meals)",
        multiplier: 0.50,
    },
];

pub const ACTIVITIES: [ActivityOption; 6] = [
    ActivityOption {
        id: "meditation",
        name: "Meditation Session",
        price_per_person: 1500.0,
    },
    ActivityOption {
        id: "cooking",
        name: "Cooking Workshop",
        price_per_person: 2000.0,
    },
    ActivityOption {
        id: "photography",
        name: "Photography Tour",
        price_per_person: 2500.0,
    },
    ActivityOption {
        id: "spa",
        name: "Spa & Wellness",
        price_per_person: 3500.0,
    },
    ActivityOption {
        id: "adventure",
        name: "Adventure Activities",
        price_per_person: 3000.0,
    },
    ActivityOption {
        id: "cultural",
        name: "Cultural Show",
        price_per_person: 1500.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing_service::{ACTIVITY_PRICES, TRAVELER_MULTIPLIERS};

    #[test]
    fn catalog_multipliers_match_pricing_tables() {
        for traveler in &TRAVELER_TYPES {
            let (_, multiplier) = TRAVELER_MULTIPLIERS
                .iter()
                .find(|(id, _)| *id == traveler.id)
                .expect("traveler type missing from pricing table");
            assert_eq!(traveler.multiplier, *multiplier);
        }
        for activity in &ACTIVITIES {
            let (_, price) = ACTIVITY_PRICES
                .iter()
                .find(|(id, _)| *id == activity.id)
                .expect("activity missing from pricing table");
            assert_eq!(activity.price_per_person, *price);
        }
    }

    #[test]
    fn deluxe_tier_has_no_multiplier() {
        let deluxe = PACKAGE_TIERS.iter().find(|t| t.id == "deluxe").unwrap();
        assert!(deluxe.multiplier.is_none());
    }

    #[test]
    fn builder_destinations_have_sane_day_bounds() {
        assert_eq!(DESTINATIONS.len(), 6);
        assert_eq!(QUOTE_DESTINATIONS.len(), 10);
        for dest in &DESTINATIONS {
            assert!(dest.min_days >= 1);
            assert!(dest.suggested_days >= dest.min_days);
        }
    }
}
