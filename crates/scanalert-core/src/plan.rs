//! Static pricing catalog.
//!
//! The plan cards, billing mock-up, and testimonials are all fixed content.
//! Upgrading never changes the account's tier -- the "Free Plan" badge in
//! the header is static by design.

/// Pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTier {
    Free,
    Pro,
}

/// A single plan card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Monthly price in whole dollars
    pub price: u32,
    pub features: &'static [&'static str],
    /// Drawn with the accent border and "Most Popular" ribbon
    pub highlighted: bool,
}

/// Known plan configurations with their feature lists
pub const CATALOG: &[Plan] = &[
    Plan {
        tier: PlanTier::Free,
        name: "Free Plan",
        tagline: "Perfect for getting started",
        price: 0,
        features: &[
            "1 website scan per week",
            "Basic SEO analysis",
            "Email report summaries",
            "Mobile-friendly interface",
            "Community support",
        ],
        highlighted: false,
    },
    Plan {
        tier: PlanTier::Pro,
        name: "Pro Plan",
        tagline: "For serious website owners",
        price: 9,
        features: &[
            "Monitor up to 3 websites",
            "Unlimited scans anytime",
            "Advanced SEO insights",
            "Broken link detection",
            "Speed optimization tips",
            "Priority email support",
            "Custom reporting schedules",
            "White-label reports",
        ],
        highlighted: true,
    },
];

/// A customer quote shown below the plan cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Star rating out of 5
    pub rating: u8,
}

/// Fixed testimonial content
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Shopify Store Owner",
        quote: "ScanAlert helped me identify 15 SEO issues I never knew existed. \
                My organic traffic increased 40% in 2 months!",
        rating: 5,
    },
    Testimonial {
        name: "Mike Chen",
        role: "Blogger & Content Creator",
        quote: "The weekly reports are a game-changer. I love getting detailed \
                insights without having to remember to check manually.",
        rating: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_free_and_pro() {
        assert_eq!(CATALOG.len(), 2);
        assert_eq!(CATALOG[0].tier, PlanTier::Free);
        assert_eq!(CATALOG[1].tier, PlanTier::Pro);
    }

    #[test]
    fn test_free_plan_costs_nothing() {
        let free = &CATALOG[0];
        assert_eq!(free.price, 0);
        assert!(!free.highlighted);
    }

    #[test]
    fn test_pro_plan_is_highlighted() {
        let pro = &CATALOG[1];
        assert_eq!(pro.price, 9);
        assert!(pro.highlighted);
        assert_eq!(pro.features.len(), 8);
    }

    #[test]
    fn test_testimonials_rated_out_of_five() {
        for t in TESTIMONIALS {
            assert!(t.rating <= 5);
        }
    }
}
