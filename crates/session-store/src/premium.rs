//! Premium plans and perks. Display data only; nothing is ever charged.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub per_month: &'static str,
    pub popular: bool,
    pub savings: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "1 Month",
        price: "$12.99",
        original_price: "$39.99",
        per_month: "$12.99/mo",
        popular: false,
        savings: None,
    },
    Plan {
        name: "12 Months",
        price: "$5.99",
        original_price: "$19.99",
        per_month: "$5.99/mo",
        popular: true,
        savings: Some("Save 70%"),
    },
    Plan {
        name: "3 Months",
        price: "$8.99",
        original_price: "$29.99",
        per_month: "$8.99/mo",
        popular: false,
        savings: None,
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Unlimited Messages",
        description: "Chat without any limits",
    },
    Feature {
        title: "Image Generation",
        description: "Create unlimited custom images",
    },
    Feature {
        title: "Priority Access",
        description: "Be first to try new features",
    },
    Feature {
        title: "Faster Responses",
        description: "No waiting, instant replies",
    },
];

/// The plan highlighted as "most popular".
pub fn popular_plan() -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.popular)
}
