use serde::{Deserialize, Serialize};

use crate::estimator::{
    BenefitSchedule, CareFactors, EstimatorProfile, PlanCatalog, PriceTable, ProfileKind,
    RecommendationPolicy,
};
use crate::report::Language;

/// Questionnaire limits enforced before estimating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub max_pet_count: u32,
}

/// Plan catalog edits, kept per profile so each preset's prices stay its own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vienna: Option<PlanCatalog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vetpro: Option<PlanCatalog>,
}

impl PlanOverrides {
    pub fn is_empty(&self) -> bool {
        self.vienna.is_none() && self.vetpro.is_none()
    }

    pub fn get(&self, kind: ProfileKind) -> Option<&PlanCatalog> {
        match kind {
            ProfileKind::Vienna => self.vienna.as_ref(),
            ProfileKind::Vetpro => self.vetpro.as_ref(),
        }
    }

    fn slot(&mut self, kind: ProfileKind) -> &mut Option<PlanCatalog> {
        match kind {
            ProfileKind::Vienna => &mut self.vienna,
            ProfileKind::Vetpro => &mut self.vetpro,
        }
    }
}

/// User configuration stored in `~/.petpass/config.toml`
///
/// The override tables replace the matching part of the selected preset
/// wholesale; leave them out to use the preset as shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileKind,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub survey: SurveyConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<CareFactors>,
    #[serde(default, skip_serializing_if = "PlanOverrides::is_empty")]
    pub plans: PlanOverrides,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<RecommendationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<BenefitSchedule>,
}

impl Config {
    /// The preset named by `profile` with every configured override applied
    pub fn resolve_profile(&self) -> EstimatorProfile {
        let mut profile = EstimatorProfile::preset(self.profile);

        if let Some(prices) = &self.prices {
            profile.prices = prices.clone();
        }
        if let Some(factors) = &self.factors {
            profile.factors = factors.clone();
        }
        if let Some(plans) = self.plans.get(self.profile) {
            profile.plans = plans.clone();
        }
        if let Some(policy) = &self.policy {
            profile.policy = policy.clone();
        }
        if let Some(benefits) = &self.benefits {
            profile.benefits = benefits.clone();
        }

        profile
    }

    /// Plan catalog of the selected profile, seeded from its preset on first edit
    pub fn plans_mut(&mut self) -> &mut PlanCatalog {
        self.plans_mut_for(self.profile)
    }

    pub fn plans_mut_for(&mut self, kind: ProfileKind) -> &mut PlanCatalog {
        self.plans
            .slot(kind)
            .get_or_insert_with(|| EstimatorProfile::preset(kind).plans)
    }

    pub fn check_pet_count(&self, pet_count: u32) -> Result<(), String> {
        if pet_count > self.survey.max_pet_count {
            return Err(format!(
                "Pet count {} exceeds the maximum of {}",
                pet_count, self.survey.max_pet_count
            ));
        }
        Ok(())
    }
}
