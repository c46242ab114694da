use super::types::{Config, PlanOverrides, SurveyConfig};
use crate::estimator::ProfileKind;
use crate::report::Language;

/// The questionnaire's +/- buttons stop at five pets
pub const DEFAULT_MAX_PET_COUNT: u32 = 5;

pub const DEFAULT_CONFIG: Config = Config {
    profile: ProfileKind::Vienna,
    language: Language::En,
    survey: SurveyConfig {
        max_pet_count: DEFAULT_MAX_PET_COUNT,
    },
    prices: None,
    factors: None,
    plans: PlanOverrides {
        vienna: None,
        vetpro: None,
    },
    policy: None,
    benefits: None,
};

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            max_pet_count: DEFAULT_MAX_PET_COUNT,
        }
    }
}

/// Profile forced through `PETPASS_PROFILE`, if it names a known preset
pub fn profile_from_env() -> Option<ProfileKind> {
    std::env::var("PETPASS_PROFILE")
        .ok()
        .and_then(|value| value.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profile: profile_from_env().unwrap_or_default(),
            ..DEFAULT_CONFIG
        }
    }
}
