pub mod calculator;
pub mod plans;
pub mod pricing;
pub mod profile;
pub mod types;

pub use calculator::estimate;
pub use plans::{PlanCatalog, PlanConfigItem};
pub use pricing::{
    CareFactors, ConditionCosts, GroomingPrices, PriceTable, PricingError, VaccinationPrices,
    VisitsPerYear,
};
pub use profile::{
    BenefitSchedule, EstimatorProfile, ProfileKind, RecommendationPolicy, ThresholdComparison,
    TierBenefits,
};
pub use types::{
    AgeBracket, Condition, ConditionTag, CostBreakdown, GroomingFrequency, HealthConditions,
    PetType, PlanTier, SurveyAnswers, SurveyError, SurveyInput, VetFrequency,
};
