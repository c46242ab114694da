use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::pricing::{check_price, PricingError};
use super::PlanTier;

/// One subscription plan as edited from the admin back-office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfigItem {
    pub key: PlanTier,
    /// Monthly price in euros
    pub price: f64,
    #[serde(default)]
    pub is_popular: bool,
    pub features_en: Vec<String>,
    pub features_de: Vec<String>,
}

/// The full plan lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalog {
    pub plans: Vec<PlanConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::with_prices(16.0, 39.0, 99.0)
    }
}

impl PlanCatalog {
    /// Default lineup and feature lists with the given monthly prices
    pub fn with_prices(basic: f64, care_plus: f64, vip: f64) -> Self {
        let plans = vec![
            PlanConfigItem {
                key: PlanTier::Basic,
                price: basic,
                is_popular: false,
                features_en: features(&[
                    "Yearly Vaccinations",
                    "2x Annual Health Check",
                    "10% Off Partner Vets",
                    "Digital Membership Card",
                ]),
                features_de: features(&[
                    "Jährliche Impfungen",
                    "2x Jährlicher Gesundheitscheck",
                    "10% Rabatt bei Partner-Tierärzten",
                    "Digitale Mitgliedskarte",
                ]),
            },
            PlanConfigItem {
                key: PlanTier::CarePlus,
                price: care_plus,
                is_popular: true,
                features_en: features(&[
                    "Yearly Vaccinations",
                    "3x Annual Health Checks",
                    "15% Off All Treatments",
                    "15% Off at Partner Shops",
                    "Priority Customer Support",
                ]),
                features_de: features(&[
                    "Jährliche Impfungen",
                    "3x Jährliche Gesundheitschecks",
                    "15% Rabatt auf alle Behandlungen",
                    "15% Rabatt in Partner-Shops",
                    "Prioritäts-Kundensupport",
                ]),
            },
            PlanConfigItem {
                key: PlanTier::Vip,
                price: vip,
                is_popular: false,
                features_en: features(&[
                    "Everything in Care Plus",
                    "4x Annual Health Checks",
                    "4x Professional Grooming sessions (€240+ value)",
                    "1x Professional Teeth Cleaning (€175 value)",
                    "25% Off at Partner Shops",
                    "24/7 Priority Chat",
                    "VIP Event Access",
                    "More perks as our network grows!",
                ]),
                features_de: features(&[
                    "Alles aus Care Plus",
                    "4x Jährliche Gesundheitschecks",
                    "4x Professionelle Pflegesitzungen (€240+ Wert)",
                    "1x Professionelle Zahnreinigung (€175 Wert)",
                    "25% Rabatt in Partner-Shops",
                    "24/7 Prioritäts-Chat",
                    "VIP Event Zugang",
                    "Mehr Vorteile wenn unser Netzwerk wächst!",
                ]),
            },
        ];

        Self {
            plans,
            updated_at: None,
        }
    }

    pub fn plan(&self, tier: PlanTier) -> Option<&PlanConfigItem> {
        self.plans.iter().find(|p| p.key == tier)
    }

    /// Monthly list price; a tier missing from an unvalidated catalog costs nothing
    pub fn monthly_price(&self, tier: PlanTier) -> f64 {
        self.plan(tier).map(|p| p.price).unwrap_or(0.0)
    }

    pub fn annual_price(&self, tier: PlanTier) -> f64 {
        self.monthly_price(tier) * 12.0
    }

    /// Change a plan's monthly price and stamp the catalog
    pub fn set_price(&mut self, tier: PlanTier, price: f64) -> Result<(), PricingError> {
        check_price(tier.as_str(), price)?;
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.key == tier)
            .ok_or(PricingError::MissingPlan(tier))?;
        plan.price = price;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.plans.is_empty() {
            return Err(PricingError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for plan in &self.plans {
            if !seen.insert(plan.key) {
                return Err(PricingError::DuplicatePlan(plan.key));
            }
            check_price(plan.key.as_str(), plan.price)?;
            if plan.features_en.is_empty() || plan.features_de.is_empty() {
                return Err(PricingError::MissingFeatures(plan.key));
            }
        }

        for tier in PlanTier::ALL {
            if !seen.contains(&tier) {
                return Err(PricingError::MissingPlan(tier));
            }
        }
        Ok(())
    }
}
