use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AgeBracket, Condition, PetType, PlanTier, VetFrequency};

/// Invalid price table, care factors or plan catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Price for {item} must be a non-negative number (got {value})")]
    NegativePrice { item: String, value: f64 },
    #[error("{item} must be a non-negative number (got {value})")]
    NegativeValue { item: String, value: f64 },
    #[error("VIP threshold {item} ({vip}) is below the Care-Plus threshold ({care_plus})")]
    ThresholdOrder {
        item: &'static str,
        vip: f64,
        care_plus: f64,
    },
    #[error("Emergency buffer must be in [0, 1) (got {0})")]
    BufferOutOfRange(f64),
    #[error("Plan catalog is empty")]
    EmptyCatalog,
    #[error("Plan catalog has no entry for {0}")]
    MissingPlan(PlanTier),
    #[error("Plan {0} appears more than once in the catalog")]
    DuplicatePlan(PlanTier),
    #[error("Missing features for plan: {0}")]
    MissingFeatures(PlanTier),
}

pub(crate) fn check_price(item: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::NegativePrice {
            item: item.to_string(),
            value,
        })
    }
}

/// Same bound as `check_price`, for rates, multipliers and thresholds
pub(crate) fn check_value(item: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::NegativeValue {
            item: item.to_string(),
            value,
        })
    }
}

/// Vaccination bundle priced per pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationPrices {
    pub basic: f64,
    pub rabies: f64,
}

impl VaccinationPrices {
    pub fn bundle(&self) -> f64 {
        self.basic + self.rabies
    }
}

/// Grooming session price per animal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroomingPrices {
    pub dog: f64,
    pub cat: f64,
    /// Also used for every category that is not a dog or a cat
    pub rabbit: f64,
}

impl GroomingPrices {
    pub fn for_pet(&self, pet_type: PetType) -> f64 {
        match pet_type {
            PetType::Dog => self.dog,
            PetType::Cat => self.cat,
            PetType::Rabbit | PetType::Other => self.rabbit,
        }
    }
}

/// Annual care cost per chronic condition ("none" is always free)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionCosts {
    pub allergies: f64,
    pub diabetes: f64,
    pub joint_problems: f64,
    pub skin_conditions: f64,
    pub digestive_issues: f64,
    pub heart_conditions: f64,
    pub dental_problems: f64,
    pub obesity: f64,
}

impl ConditionCosts {
    pub fn cost(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Allergies => self.allergies,
            Condition::Diabetes => self.diabetes,
            Condition::JointProblems => self.joint_problems,
            Condition::SkinConditions => self.skin_conditions,
            Condition::DigestiveIssues => self.digestive_issues,
            Condition::HeartConditions => self.heart_conditions,
            Condition::DentalProblems => self.dental_problems,
            Condition::Obesity => self.obesity,
        }
    }
}

/// Reference vet prices for the service region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub checkup: f64,
    pub vaccination: VaccinationPrices,
    #[serde(default)]
    pub bloodwork: f64,
    pub dental_cleaning: f64,
    pub grooming: GroomingPrices,
    pub health_condition_costs: ConditionCosts,
    pub emergency_buffer_percent: f64,
}

impl PriceTable {
    /// Vienna vet prices (2025/2026 Austrian veterinary data)
    pub fn vienna() -> Self {
        Self {
            checkup: 40.0,
            vaccination: VaccinationPrices {
                basic: 65.0,
                rabies: 45.0,
            },
            bloodwork: 75.0,
            dental_cleaning: 175.0,
            grooming: GroomingPrices {
                dog: 60.0,
                cat: 45.0,
                rabbit: 35.0,
            },
            health_condition_costs: ConditionCosts {
                allergies: 225.0,
                diabetes: 600.0,
                joint_problems: 300.0,
                skin_conditions: 175.0,
                digestive_issues: 225.0,
                heart_conditions: 450.0,
                dental_problems: 200.0,
                obesity: 150.0,
            },
            emergency_buffer_percent: 0.15,
        }
    }

    /// Every price zero, buffer included
    pub fn zero() -> Self {
        Self {
            checkup: 0.0,
            vaccination: VaccinationPrices {
                basic: 0.0,
                rabies: 0.0,
            },
            bloodwork: 0.0,
            dental_cleaning: 0.0,
            grooming: GroomingPrices {
                dog: 0.0,
                cat: 0.0,
                rabbit: 0.0,
            },
            health_condition_costs: ConditionCosts {
                allergies: 0.0,
                diabetes: 0.0,
                joint_problems: 0.0,
                skin_conditions: 0.0,
                digestive_issues: 0.0,
                heart_conditions: 0.0,
                dental_problems: 0.0,
                obesity: 0.0,
            },
            emergency_buffer_percent: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        check_price("checkup", self.checkup)?;
        check_price("vaccination.basic", self.vaccination.basic)?;
        check_price("vaccination.rabies", self.vaccination.rabies)?;
        check_price("bloodwork", self.bloodwork)?;
        check_price("dental_cleaning", self.dental_cleaning)?;
        check_price("grooming.dog", self.grooming.dog)?;
        check_price("grooming.cat", self.grooming.cat)?;
        check_price("grooming.rabbit", self.grooming.rabbit)?;
        for condition in Condition::ALL {
            check_price(condition.as_str(), self.health_condition_costs.cost(condition))?;
        }

        let buffer = self.emergency_buffer_percent;
        if !(0.0..1.0).contains(&buffer) {
            return Err(PricingError::BufferOutOfRange(buffer));
        }
        Ok(())
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::vienna()
    }
}

/// Expected vet visits per year for each questionnaire frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitsPerYear {
    pub rarely: f64,
    pub once_year: f64,
    pub twice_year: f64,
    pub quarterly: f64,
    pub monthly: f64,
}

impl VisitsPerYear {
    pub fn for_frequency(&self, frequency: VetFrequency) -> f64 {
        match frequency {
            VetFrequency::Rarely => self.rarely,
            VetFrequency::OnceYear => self.once_year,
            VetFrequency::TwiceYear => self.twice_year,
            VetFrequency::Quarterly => self.quarterly,
            VetFrequency::Monthly => self.monthly,
        }
    }
}

/// Visit counts and age multipliers applied on top of the price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareFactors {
    pub visits_per_year: VisitsPerYear,
    pub puppy_vaccination_multiplier: f64,
    pub senior_vaccination_multiplier: f64,
    pub senior_condition_multiplier: f64,
}

impl CareFactors {
    pub fn vaccination_multiplier(&self, age: AgeBracket) -> f64 {
        match age {
            AgeBracket::PuppyKitten => self.puppy_vaccination_multiplier,
            AgeBracket::Senior => self.senior_vaccination_multiplier,
            AgeBracket::Young | AgeBracket::Adult => 1.0,
        }
    }

    pub fn condition_multiplier(&self, age: AgeBracket) -> f64 {
        match age {
            AgeBracket::Senior => self.senior_condition_multiplier,
            _ => 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        for frequency in VetFrequency::ALL {
            check_value(
                &format!("visits_per_year.{}", frequency.as_str()),
                self.visits_per_year.for_frequency(frequency),
            )?;
        }
        check_value("puppy_vaccination_multiplier", self.puppy_vaccination_multiplier)?;
        check_value("senior_vaccination_multiplier", self.senior_vaccination_multiplier)?;
        check_value("senior_condition_multiplier", self.senior_condition_multiplier)?;
        Ok(())
    }
}

impl Default for CareFactors {
    fn default() -> Self {
        Self {
            visits_per_year: VisitsPerYear {
                rarely: 0.5,
                once_year: 1.0,
                twice_year: 2.0,
                quarterly: 4.0,
                monthly: 12.0,
            },
            puppy_vaccination_multiplier: 1.5,
            senior_vaccination_multiplier: 1.2,
            senior_condition_multiplier: 1.3,
        }
    }
}
