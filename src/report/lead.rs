use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::estimator::{CostBreakdown, SurveyAnswers};
use crate::report::labels::Language;
use crate::report::summary::format_euros;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeadError {
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("Unknown district: {0}")]
    UnknownDistrict(String),
}

/// Vienna district choices offered on the waitlist form
pub const DISTRICTS: [&str; 10] = [
    "1st (Innere Stadt)",
    "2nd (Leopoldstadt)",
    "3rd (Landstraße)",
    "4th (Wieden)",
    "5th (Margareten)",
    "6th (Mariahilf)",
    "7th (Neubau)",
    "8th (Josefstadt)",
    "9th (Alsergrund)",
    "Other (10-23)",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct District(&'static str);

impl District {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for District {
    fn default() -> Self {
        District(DISTRICTS[0])
    }
}

impl FromStr for District {
    type Err = LeadError;

    /// Accepts the full label, the ordinal ("7th") or the bare number ("7")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DISTRICTS
            .iter()
            .find(|d| {
                let ordinal = d.split_whitespace().next().unwrap_or_default();
                let number = ordinal.trim_end_matches(|c: char| c.is_ascii_alphabetic());
                d.eq_ignore_ascii_case(needle)
                    || ordinal.eq_ignore_ascii_case(needle)
                    || (!number.is_empty() && number == needle)
            })
            .map(|d| District(*d))
            .ok_or_else(|| LeadError::UnknownDistrict(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for District {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl From<District> for String {
    fn from(district: District) -> Self {
        district.0.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Survey,
    QuickJoin,
}

/// Contact details shared by both signup flows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub district: District,
    pub language: Language,
}

impl Contact {
    pub fn new(email: &str, district: District, language: Language) -> Result<Self, LeadError> {
        let email = email.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };
        if !valid {
            return Err(LeadError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            email: email.to_string(),
            district,
            language,
        })
    }
}

/// Survey answers and results flattened into display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDetails {
    pub pet_type: String,
    pub pet_count: u32,
    pub pet_age: String,
    pub vet_frequency: String,
    pub health_conditions: String,
    pub grooming_frequency: String,
    pub estimated_annual_cost: String,
    pub recommended_plan: String,
    pub estimated_savings: String,
    pub savings_percentage: String,
}

/// Body posted to the hosted forms service when someone joins the waitlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub email: String,
    pub district: District,
    pub language: Language,
    pub source: LeadSource,
    #[serde(flatten)]
    pub survey: Option<SurveyDetails>,
}

impl LeadPayload {
    pub fn quick_join(contact: Contact) -> Self {
        Self {
            email: contact.email,
            district: contact.district,
            language: contact.language,
            source: LeadSource::QuickJoin,
            survey: None,
        }
    }

    pub fn from_survey(contact: Contact, answers: &SurveyAnswers, breakdown: &CostBreakdown) -> Self {
        let language = contact.language;
        let conditions: Vec<&str> = answers
            .health_conditions()
            .tags()
            .iter()
            .map(|t| t.as_str())
            .collect();

        let survey = SurveyDetails {
            pet_type: answers.pet_type().as_str().to_string(),
            pet_count: answers.pet_count(),
            pet_age: language.age(answers.pet_age()).to_string(),
            vet_frequency: language.vet_frequency(answers.vet_frequency()).to_string(),
            health_conditions: conditions.join(", "),
            grooming_frequency: format!(
                "{} times/year",
                answers.grooming_frequency().visits_per_year()
            ),
            estimated_annual_cost: format_euros(breakdown.total_without_membership),
            recommended_plan: language.plan_name(breakdown.recommended_plan).to_string(),
            estimated_savings: format!("{}/year", format_euros(breakdown.annual_savings)),
            savings_percentage: format!("{}%", breakdown.savings_percentage),
        };

        Self {
            email: contact.email,
            district: contact.district,
            language,
            source: LeadSource::Survey,
            survey: Some(survey),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
