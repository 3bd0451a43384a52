//! The subscription plan catalog.

use serde::{Deserialize, Serialize};

/// Icon/category tag shown on a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    Reading,
    Insight,
    Vision,
}

/// One purchasable plan.
///
/// `price` is in whole currency units (rupees, not paise); the checkout
/// initiator converts to the widget's minor-unit convention at open time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub title: String,
    pub price: u64,
    pub category: PlanCategory,
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

/// The static catalog of purchasable plans.
pub fn plan_catalog() -> Vec<Plan> {
    vec![
        Plan {
            title: "Basic Reading".to_string(),
            price: 999,
            category: PlanCategory::Reading,
            features: vec![
                "Personal Birth Chart Analysis".to_string(),
                "Monthly Horoscope".to_string(),
                "Basic Compatibility Guide".to_string(),
            ],
            recommended: false,
        },
        Plan {
            title: "Advanced Insights".to_string(),
            price: 1999,
            category: PlanCategory::Insight,
            features: vec![
                "Detailed Birth Chart Analysis".to_string(),
                "Weekly Personalized Readings".to_string(),
                "Advanced Compatibility Analysis".to_string(),
                "Career & Finance Guidance".to_string(),
            ],
            recommended: true,
        },
        Plan {
            title: "Premium Guidance".to_string(),
            price: 2999,
            category: PlanCategory::Vision,
            features: vec![
                "Complete Astrological Profile".to_string(),
                "Daily Personalized Readings".to_string(),
                "Live Consultation Sessions".to_string(),
                "Relationship & Career Roadmap".to_string(),
                "Priority Support".to_string(),
            ],
            recommended: false,
        },
    ]
}

/// Find a plan by its display title.
pub fn find_plan<'a>(plans: &'a [Plan], title: &str) -> Option<&'a Plan> {
    plans.iter().find(|p| p.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let plans = plan_catalog();
        assert_eq!(plans.len(), 3);
        assert_eq!(
            plans.iter().map(|p| p.price).collect::<Vec<_>>(),
            vec![999, 1999, 2999]
        );
        // Exactly one recommended plan
        assert_eq!(plans.iter().filter(|p| p.recommended).count(), 1);
        assert!(plans.iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn test_recommended_plan_is_advanced_insights() {
        let plans = plan_catalog();
        let recommended = plans.iter().find(|p| p.recommended).unwrap();
        assert_eq!(recommended.title, "Advanced Insights");
        assert_eq!(recommended.price, 1999);
        assert_eq!(recommended.category, PlanCategory::Insight);
    }

    #[test]
    fn test_find_plan() {
        let plans = plan_catalog();
        assert_eq!(find_plan(&plans, "Basic Reading").map(|p| p.price), Some(999));
        assert!(find_plan(&plans, "Missing Plan").is_none());
    }
}
