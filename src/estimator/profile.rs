use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::plans::PlanCatalog;
use super::pricing::{check_value, CareFactors, PriceTable, PricingError};
use super::{AgeBracket, PlanTier, SurveyError};

/// How the Care-Plus grooming and visit thresholds are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdComparison {
    /// `value > threshold`
    Strict,
    /// `value >= threshold`
    Inclusive,
}

impl ThresholdComparison {
    pub fn exceeds(&self, value: f64, threshold: f64) -> bool {
        match self {
            ThresholdComparison::Strict => value > threshold,
            ThresholdComparison::Inclusive => value >= threshold,
        }
    }
}

/// Thresholds for picking a plan; VIP rules are checked before Care-Plus rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    pub vip_min_conditions: usize,
    pub vip_min_grooming: u32,
    pub senior_forces_vip: bool,
    pub care_plus_min_conditions: usize,
    pub care_plus_grooming_threshold: u32,
    pub care_plus_visits_threshold: f64,
    pub care_plus_comparison: ThresholdComparison,
}

impl RecommendationPolicy {
    pub fn recommend(
        &self,
        condition_count: usize,
        grooming_visits: u32,
        vet_visits: f64,
        age: AgeBracket,
    ) -> PlanTier {
        if condition_count >= self.vip_min_conditions
            || grooming_visits >= self.vip_min_grooming
            || (self.senior_forces_vip && age == AgeBracket::Senior)
        {
            return PlanTier::Vip;
        }

        let cmp = self.care_plus_comparison;
        if condition_count >= self.care_plus_min_conditions
            || cmp.exceeds(
                f64::from(grooming_visits),
                f64::from(self.care_plus_grooming_threshold),
            )
            || cmp.exceeds(vet_visits, self.care_plus_visits_threshold)
        {
            return PlanTier::CarePlus;
        }

        PlanTier::Basic
    }

    /// Thresholds must be real numbers and VIP must not be easier to reach than Care-Plus
    pub fn validate(&self) -> Result<(), PricingError> {
        check_value("care_plus_visits_threshold", self.care_plus_visits_threshold)?;

        if self.vip_min_conditions < self.care_plus_min_conditions {
            return Err(PricingError::ThresholdOrder {
                item: "min_conditions",
                vip: self.vip_min_conditions as f64,
                care_plus: self.care_plus_min_conditions as f64,
            });
        }
        if self.vip_min_grooming < self.care_plus_grooming_threshold {
            return Err(PricingError::ThresholdOrder {
                item: "grooming",
                vip: f64::from(self.vip_min_grooming),
                care_plus: f64::from(self.care_plus_grooming_threshold),
            });
        }
        Ok(())
    }
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            vip_min_conditions: 2,
            vip_min_grooming: 4,
            senior_forces_vip: true,
            care_plus_min_conditions: 1,
            care_plus_grooming_threshold: 2,
            care_plus_visits_threshold: 2.0,
            care_plus_comparison: ThresholdComparison::Strict,
        }
    }
}

/// Services a plan includes, used to value the membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBenefits {
    pub free_checkups: u32,
    #[serde(default)]
    pub free_grooming_sessions: u32,
    #[serde(default)]
    pub free_dental_cleanings: u32,
    /// Fraction of the no-membership total credited as partner discounts
    pub discount_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSchedule {
    pub basic: TierBenefits,
    pub care_plus: TierBenefits,
    pub vip: TierBenefits,
}

impl BenefitSchedule {
    pub fn for_tier(&self, tier: PlanTier) -> &TierBenefits {
        match tier {
            PlanTier::Basic => &self.basic,
            PlanTier::CarePlus => &self.care_plus,
            PlanTier::Vip => &self.vip,
        }
    }

    pub fn vetpro() -> Self {
        Self {
            basic: TierBenefits {
                free_checkups: 1,
                free_grooming_sessions: 0,
                free_dental_cleanings: 0,
                discount_rate: 0.05,
            },
            care_plus: TierBenefits {
                free_checkups: 2,
                free_grooming_sessions: 0,
                free_dental_cleanings: 0,
                discount_rate: 0.10,
            },
            vip: TierBenefits {
                free_checkups: 2,
                free_grooming_sessions: 4,
                free_dental_cleanings: 1,
                discount_rate: 0.20,
            },
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        for tier in PlanTier::ALL {
            check_value(
                &format!("{}.discount_rate", tier),
                self.for_tier(tier).discount_rate,
            )?;
        }
        Ok(())
    }
}

impl Default for BenefitSchedule {
    fn default() -> Self {
        Self {
            basic: TierBenefits {
                free_checkups: 2,
                free_grooming_sessions: 0,
                free_dental_cleanings: 0,
                discount_rate: 0.10,
            },
            care_plus: TierBenefits {
                free_checkups: 3,
                free_grooming_sessions: 0,
                free_dental_cleanings: 0,
                discount_rate: 0.15,
            },
            vip: TierBenefits {
                free_checkups: 4,
                free_grooming_sessions: 4,
                free_dental_cleanings: 1,
                discount_rate: 0.25,
            },
        }
    }
}

/// Named estimator presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Main landing-page survey
    #[default]
    Vienna,
    /// Partner-vet bundle
    Vetpro,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Vienna => "vienna",
            ProfileKind::Vetpro => "vetpro",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vienna" | "main" => Ok(ProfileKind::Vienna),
            "vetpro" => Ok(ProfileKind::Vetpro),
            _ => Err(SurveyError::UnknownValue {
                field: "profile",
                value: s.to_string(),
            }),
        }
    }
}

/// Everything the estimator reads besides the questionnaire answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorProfile {
    pub prices: PriceTable,
    pub factors: CareFactors,
    pub plans: PlanCatalog,
    pub policy: RecommendationPolicy,
    pub benefits: BenefitSchedule,
}

impl EstimatorProfile {
    pub fn vienna() -> Self {
        Self {
            prices: PriceTable::vienna(),
            factors: CareFactors::default(),
            plans: PlanCatalog::default(),
            policy: RecommendationPolicy::default(),
            benefits: BenefitSchedule::default(),
        }
    }

    pub fn vetpro() -> Self {
        Self {
            prices: PriceTable::vienna(),
            factors: CareFactors::default(),
            plans: PlanCatalog::with_prices(19.0, 39.0, 99.0),
            policy: RecommendationPolicy {
                care_plus_comparison: ThresholdComparison::Inclusive,
                ..RecommendationPolicy::default()
            },
            benefits: BenefitSchedule::vetpro(),
        }
    }

    pub fn preset(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Vienna => Self::vienna(),
            ProfileKind::Vetpro => Self::vetpro(),
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        self.prices.validate()?;
        self.factors.validate()?;
        self.plans.validate()?;
        self.policy.validate()?;
        self.benefits.validate()?;
        Ok(())
    }
}

impl Default for EstimatorProfile {
    fn default() -> Self {
        Self::vienna()
    }
}
