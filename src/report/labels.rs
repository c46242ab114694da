use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::estimator::{
    AgeBracket, Condition, ConditionTag, GroomingFrequency, PetType, PlanTier, SurveyError,
    VetFrequency,
};

/// Display language of the survey and its reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn texts(&self) -> &'static SurveyTexts {
        match self {
            Language::En => &EN,
            Language::De => &DE,
        }
    }

    pub fn plan_name(&self, tier: PlanTier) -> &'static str {
        match (self, tier) {
            (Language::En, PlanTier::Basic) => "The Basic",
            (Language::En, PlanTier::CarePlus) => "The Care Plus",
            (Language::En, PlanTier::Vip) => "The VIP",
            (Language::De, PlanTier::Basic) => "Der Basis",
            (Language::De, PlanTier::CarePlus) => "Der Care Plus",
            (Language::De, PlanTier::Vip) => "Der VIP",
        }
    }

    pub fn pet_type(&self, pet_type: PetType) -> &'static str {
        match (self, pet_type) {
            (Language::En, _) => pet_type.as_str(),
            (Language::De, PetType::Dog) => "Hund",
            (Language::De, PetType::Cat) => "Katze",
            (Language::De, PetType::Rabbit) => "Hase",
            (Language::De, PetType::Other) => "Andere",
        }
    }

    pub fn age(&self, age: AgeBracket) -> &'static str {
        match (self, age) {
            (Language::En, AgeBracket::PuppyKitten) => "Puppy/Kitten",
            (Language::En, AgeBracket::Young) => "Young",
            (Language::En, AgeBracket::Adult) => "Adult",
            (Language::En, AgeBracket::Senior) => "Senior",
            (Language::De, AgeBracket::PuppyKitten) => "Welpe/Kätzchen",
            (Language::De, AgeBracket::Young) => "Jung",
            (Language::De, AgeBracket::Adult) => "Erwachsen",
            (Language::De, AgeBracket::Senior) => "Senior",
        }
    }

    pub fn vet_frequency(&self, frequency: VetFrequency) -> &'static str {
        match (self, frequency) {
            (Language::En, VetFrequency::Rarely) => "Rarely",
            (Language::En, VetFrequency::OnceYear) => "Once a year",
            (Language::En, VetFrequency::TwiceYear) => "Twice a year",
            (Language::En, VetFrequency::Quarterly) => "Every 3 months",
            (Language::En, VetFrequency::Monthly) => "Monthly",
            (Language::De, VetFrequency::Rarely) => "Selten",
            (Language::De, VetFrequency::OnceYear) => "Einmal im Jahr",
            (Language::De, VetFrequency::TwiceYear) => "Zweimal im Jahr",
            (Language::De, VetFrequency::Quarterly) => "Alle 3 Monate",
            (Language::De, VetFrequency::Monthly) => "Monatlich",
        }
    }

    pub fn condition(&self, tag: ConditionTag) -> &'static str {
        let condition = match tag {
            ConditionTag::Healthy(_) => {
                return match self {
                    Language::En => "No health issues",
                    Language::De => "Keine Gesundheitsprobleme",
                }
            }
            ConditionTag::Condition(c) => c,
        };

        match (self, condition) {
            (Language::En, Condition::Allergies) => "Allergies",
            (Language::En, Condition::Diabetes) => "Diabetes",
            (Language::En, Condition::JointProblems) => "Joint problems / Arthritis",
            (Language::En, Condition::SkinConditions) => "Skin conditions",
            (Language::En, Condition::DigestiveIssues) => "Digestive issues",
            (Language::En, Condition::HeartConditions) => "Heart conditions",
            (Language::En, Condition::DentalProblems) => "Dental problems",
            (Language::En, Condition::Obesity) => "Obesity / Weight issues",
            (Language::De, Condition::Allergies) => "Allergien",
            (Language::De, Condition::Diabetes) => "Diabetes",
            (Language::De, Condition::JointProblems) => "Gelenkprobleme / Arthritis",
            (Language::De, Condition::SkinConditions) => "Hauterkrankungen",
            (Language::De, Condition::DigestiveIssues) => "Verdauungsprobleme",
            (Language::De, Condition::HeartConditions) => "Herzerkrankungen",
            (Language::De, Condition::DentalProblems) => "Zahnprobleme",
            (Language::De, Condition::Obesity) => "Übergewicht / Gewichtsprobleme",
        }
    }

    pub fn grooming(&self, frequency: GroomingFrequency) -> &'static str {
        match (self, frequency) {
            (Language::En, GroomingFrequency::Never) => "Never",
            (Language::En, GroomingFrequency::Occasional) => "1-2 times a year",
            (Language::En, GroomingFrequency::Seasonal) => "3-4 times a year",
            (Language::En, GroomingFrequency::Bimonthly) => "5-6 times a year",
            (Language::En, GroomingFrequency::Monthly) => "Monthly",
            (Language::De, GroomingFrequency::Never) => "Nie",
            (Language::De, GroomingFrequency::Occasional) => "1-2 mal im Jahr",
            (Language::De, GroomingFrequency::Seasonal) => "3-4 mal im Jahr",
            (Language::De, GroomingFrequency::Bimonthly) => "5-6 mal im Jahr",
            (Language::De, GroomingFrequency::Monthly) => "Monatlich",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "de" | "german" | "deutsch" => Ok(Language::De),
            _ => Err(SurveyError::UnknownValue {
                field: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// Fixed strings of the savings report
pub struct SurveyTexts {
    pub estimated_costs: &'static str,
    pub vet_checkups: &'static str,
    pub vaccinations: &'static str,
    pub health_condition_care: &'static str,
    pub professional_grooming: &'static str,
    pub emergency_buffer: &'static str,
    pub total_without: &'static str,
    pub year: &'static str,
    pub month: &'static str,
    pub with_plan: &'static str,
    pub could_save: &'static str,
    pub per_year: &'static str,
    pub savings: &'static str,
    pub only: &'static str,
    pub whats_included: &'static str,
    pub vaccinations_covered: &'static str,
    pub annual_check: &'static str,
    pub annual_checks: &'static str,
    pub off_partner: &'static str,
    pub grooming_sessions: &'static str,
    pub teeth_cleaning: &'static str,
    pub teeth_cleanings: &'static str,
    pub value: &'static str,
    pub more_perks: &'static str,
}

pub static EN: SurveyTexts = SurveyTexts {
    estimated_costs: "Your estimated annual costs",
    vet_checkups: "Vet checkups",
    vaccinations: "Vaccinations",
    health_condition_care: "Health condition care",
    professional_grooming: "Professional grooming",
    emergency_buffer: "Emergency buffer",
    total_without: "Total without membership",
    year: "year",
    month: "mo",
    with_plan: "With",
    could_save: "You could save up to",
    per_year: "per year",
    savings: "savings",
    only: "Only",
    whats_included: "What's included:",
    vaccinations_covered: "All yearly vaccinations covered",
    annual_check: "annual health check",
    annual_checks: "annual health checks",
    off_partner: "off at partner locations",
    grooming_sessions: "professional grooming sessions",
    teeth_cleaning: "professional teeth cleaning",
    teeth_cleanings: "professional teeth cleanings",
    value: "value",
    more_perks: "+ More perks as our network expands!",
};

pub static DE: SurveyTexts = SurveyTexts {
    estimated_costs: "Deine geschätzten jährlichen Kosten",
    vet_checkups: "Tierarzt-Untersuchungen",
    vaccinations: "Impfungen",
    health_condition_care: "Gesundheitsbehandlung",
    professional_grooming: "Professionelle Fellpflege",
    emergency_buffer: "Notfallpuffer",
    total_without: "Gesamt ohne Mitgliedschaft",
    year: "Jahr",
    month: "Monat",
    with_plan: "Mit",
    could_save: "Du könntest sparen bis zu",
    per_year: "pro Jahr",
    savings: "Ersparnis",
    only: "Nur",
    whats_included: "Was ist enthalten:",
    vaccinations_covered: "Alle jährlichen Impfungen abgedeckt",
    annual_check: "jährlicher Gesundheitscheck",
    annual_checks: "jährliche Gesundheitschecks",
    off_partner: "Rabatt bei Partnerstandorten",
    grooming_sessions: "professionelle Pflegesitzungen",
    teeth_cleaning: "professionelle Zahnreinigung",
    teeth_cleanings: "professionelle Zahnreinigungen",
    value: "Wert",
    more_perks: "+ Mehr Vorteile wenn unser Netzwerk wächst!",
};
