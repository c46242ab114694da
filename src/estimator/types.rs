use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validation errors raised while building a questionnaire answer set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurveyError {
    #[error("Pet count must be at least 1 (got {0})")]
    InvalidPetCount(u32),
    #[error("At least one health condition tag is required (use \"none\")")]
    EmptyConditions,
    #[error("\"none\" cannot be combined with other health conditions")]
    ConflictingConditions,
    #[error("Grooming frequency {0} is not one of 0, 2, 4, 6, 12 visits per year")]
    InvalidGroomingFrequency(u32),
    #[error("Unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },
}

/// Normalize user input so `twice-year`, `Twice_Year` and `twice_year` match
fn normalize(input: &str) -> String {
    input.trim().to_lowercase().replace('-', "_")
}

fn unknown(field: &'static str, value: &str) -> SurveyError {
    SurveyError::UnknownValue {
        field,
        value: value.to_string(),
    }
}

/// Animal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
    Rabbit,
    Other,
}

impl PetType {
    pub const ALL: [PetType; 4] = [PetType::Dog, PetType::Cat, PetType::Rabbit, PetType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rabbit => "rabbit",
            PetType::Other => "other",
        }
    }
}

impl FromStr for PetType {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "dog" => Ok(PetType::Dog),
            "cat" => Ok(PetType::Cat),
            "rabbit" => Ok(PetType::Rabbit),
            "other" => Ok(PetType::Other),
            _ => Err(unknown("pet type", s)),
        }
    }
}

/// Life stage, ordered from youngest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    PuppyKitten,
    Young,
    Adult,
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::PuppyKitten,
        AgeBracket::Young,
        AgeBracket::Adult,
        AgeBracket::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::PuppyKitten => "puppy_kitten",
            AgeBracket::Young => "young",
            AgeBracket::Adult => "adult",
            AgeBracket::Senior => "senior",
        }
    }
}

impl FromStr for AgeBracket {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "puppy_kitten" | "puppy" | "kitten" => Ok(AgeBracket::PuppyKitten),
            "young" => Ok(AgeBracket::Young),
            "adult" => Ok(AgeBracket::Adult),
            "senior" => Ok(AgeBracket::Senior),
            _ => Err(unknown("age bracket", s)),
        }
    }
}

/// How often the pet currently sees a vet, ordered from least to most frequent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetFrequency {
    Rarely,
    OnceYear,
    TwiceYear,
    Quarterly,
    Monthly,
}

impl VetFrequency {
    pub const ALL: [VetFrequency; 5] = [
        VetFrequency::Rarely,
        VetFrequency::OnceYear,
        VetFrequency::TwiceYear,
        VetFrequency::Quarterly,
        VetFrequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VetFrequency::Rarely => "rarely",
            VetFrequency::OnceYear => "once_year",
            VetFrequency::TwiceYear => "twice_year",
            VetFrequency::Quarterly => "quarterly",
            VetFrequency::Monthly => "monthly",
        }
    }
}

impl FromStr for VetFrequency {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "rarely" => Ok(VetFrequency::Rarely),
            "once_year" => Ok(VetFrequency::OnceYear),
            "twice_year" => Ok(VetFrequency::TwiceYear),
            "quarterly" => Ok(VetFrequency::Quarterly),
            "monthly" => Ok(VetFrequency::Monthly),
            _ => Err(unknown("vet frequency", s)),
        }
    }
}

/// A chronic health condition with its own annual care cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Allergies,
    Diabetes,
    JointProblems,
    SkinConditions,
    DigestiveIssues,
    HeartConditions,
    DentalProblems,
    Obesity,
}

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::Allergies,
        Condition::Diabetes,
        Condition::JointProblems,
        Condition::SkinConditions,
        Condition::DigestiveIssues,
        Condition::HeartConditions,
        Condition::DentalProblems,
        Condition::Obesity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Allergies => "allergies",
            Condition::Diabetes => "diabetes",
            Condition::JointProblems => "joint_problems",
            Condition::SkinConditions => "skin_conditions",
            Condition::DigestiveIssues => "digestive_issues",
            Condition::HeartConditions => "heart_conditions",
            Condition::DentalProblems => "dental_problems",
            Condition::Obesity => "obesity",
        }
    }
}

/// A questionnaire condition tag: either the distinguished "none" or a real condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionTag {
    Healthy(NoneTag),
    Condition(Condition),
}

/// Serde helper so `"none"` round-trips as a plain string inside `ConditionTag`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoneTag {
    None,
}

impl ConditionTag {
    pub const NONE: ConditionTag = ConditionTag::Healthy(NoneTag::None);

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionTag::Healthy(_) => "none",
            ConditionTag::Condition(condition) => condition.as_str(),
        }
    }
}

impl From<Condition> for ConditionTag {
    fn from(condition: Condition) -> Self {
        ConditionTag::Condition(condition)
    }
}

impl FromStr for ConditionTag {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key == "none" {
            return Ok(ConditionTag::NONE);
        }
        Condition::ALL
            .iter()
            .find(|c| c.as_str() == key)
            .map(|c| ConditionTag::Condition(*c))
            .ok_or_else(|| unknown("health condition", s))
    }
}

/// Selected health conditions; "none" and real conditions are mutually exclusive
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<ConditionTag>", try_from = "Vec<ConditionTag>")]
pub enum HealthConditions {
    #[default]
    NoConditions,
    /// Never empty
    Conditions(BTreeSet<Condition>),
}

impl HealthConditions {
    /// Build from real conditions; an empty iterator yields `NoConditions`
    pub fn from_conditions<I: IntoIterator<Item = Condition>>(conditions: I) -> Self {
        let set: BTreeSet<Condition> = conditions.into_iter().collect();
        if set.is_empty() {
            HealthConditions::NoConditions
        } else {
            HealthConditions::Conditions(set)
        }
    }

    /// Validate a raw tag list from the questionnaire
    pub fn from_tags(tags: &[ConditionTag]) -> Result<Self, SurveyError> {
        if tags.is_empty() {
            return Err(SurveyError::EmptyConditions);
        }

        let has_none = tags.iter().any(|t| matches!(t, ConditionTag::Healthy(_)));
        let real: Vec<Condition> = tags
            .iter()
            .filter_map(|t| match t {
                ConditionTag::Condition(c) => Some(*c),
                ConditionTag::Healthy(_) => None,
            })
            .collect();

        if has_none && !real.is_empty() {
            return Err(SurveyError::ConflictingConditions);
        }

        Ok(Self::from_conditions(real))
    }

    /// Apply one click of the questionnaire's condition checklist
    pub fn toggle(self, tag: ConditionTag) -> Self {
        let condition = match tag {
            ConditionTag::Healthy(_) => return HealthConditions::NoConditions,
            ConditionTag::Condition(c) => c,
        };

        let mut set = match self {
            HealthConditions::NoConditions => BTreeSet::new(),
            HealthConditions::Conditions(set) => set,
        };
        if !set.remove(&condition) {
            set.insert(condition);
        }
        Self::from_conditions(set)
    }

    /// Number of real conditions ("none" counts as zero)
    pub fn count(&self) -> usize {
        match self {
            HealthConditions::NoConditions => 0,
            HealthConditions::Conditions(set) => set.len(),
        }
    }

    pub fn contains(&self, condition: Condition) -> bool {
        match self {
            HealthConditions::NoConditions => false,
            HealthConditions::Conditions(set) => set.contains(&condition),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        let set = match self {
            HealthConditions::NoConditions => None,
            HealthConditions::Conditions(set) => Some(set),
        };
        set.into_iter().flat_map(|s| s.iter().copied())
    }

    pub fn tags(&self) -> Vec<ConditionTag> {
        match self {
            HealthConditions::NoConditions => vec![ConditionTag::NONE],
            HealthConditions::Conditions(set) => {
                set.iter().map(|c| ConditionTag::Condition(*c)).collect()
            }
        }
    }
}

impl From<HealthConditions> for Vec<ConditionTag> {
    fn from(conditions: HealthConditions) -> Self {
        conditions.tags()
    }
}

impl TryFrom<Vec<ConditionTag>> for HealthConditions {
    type Error = SurveyError;

    fn try_from(tags: Vec<ConditionTag>) -> Result<Self, Self::Error> {
        HealthConditions::from_tags(&tags)
    }
}

/// Professional grooming visits per year, limited to the questionnaire menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum GroomingFrequency {
    Never,
    Occasional,
    Seasonal,
    Bimonthly,
    Monthly,
}

impl GroomingFrequency {
    pub const ALL: [GroomingFrequency; 5] = [
        GroomingFrequency::Never,
        GroomingFrequency::Occasional,
        GroomingFrequency::Seasonal,
        GroomingFrequency::Bimonthly,
        GroomingFrequency::Monthly,
    ];

    pub fn visits_per_year(&self) -> u32 {
        match self {
            GroomingFrequency::Never => 0,
            GroomingFrequency::Occasional => 2,
            GroomingFrequency::Seasonal => 4,
            GroomingFrequency::Bimonthly => 6,
            GroomingFrequency::Monthly => 12,
        }
    }
}

impl From<GroomingFrequency> for u32 {
    fn from(frequency: GroomingFrequency) -> Self {
        frequency.visits_per_year()
    }
}

impl TryFrom<u32> for GroomingFrequency {
    type Error = SurveyError;

    fn try_from(visits: u32) -> Result<Self, Self::Error> {
        GroomingFrequency::ALL
            .iter()
            .copied()
            .find(|f| f.visits_per_year() == visits)
            .ok_or(SurveyError::InvalidGroomingFrequency(visits))
    }
}

impl FromStr for GroomingFrequency {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(visits) = s.trim().parse::<u32>() {
            return GroomingFrequency::try_from(visits);
        }
        match normalize(s).as_str() {
            "never" => Ok(GroomingFrequency::Never),
            "occasional" => Ok(GroomingFrequency::Occasional),
            "seasonal" => Ok(GroomingFrequency::Seasonal),
            "bimonthly" => Ok(GroomingFrequency::Bimonthly),
            "monthly" => Ok(GroomingFrequency::Monthly),
            _ => Err(unknown("grooming frequency", s)),
        }
    }
}

/// Subscription tier, ordered Basic < CarePlus < Vip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Basic,
    CarePlus,
    Vip,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::CarePlus, PlanTier::Vip];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::CarePlus => "care_plus",
            PlanTier::Vip => "vip",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "basic" => Ok(PlanTier::Basic),
            "care_plus" | "careplus" => Ok(PlanTier::CarePlus),
            "vip" => Ok(PlanTier::Vip),
            _ => Err(unknown("plan", s)),
        }
    }
}

/// Raw questionnaire answers as submitted by the survey form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyInput {
    pub pet_type: PetType,
    pub pet_count: u32,
    pub pet_age: AgeBracket,
    pub vet_frequency: VetFrequency,
    pub health_conditions: Vec<ConditionTag>,
    pub grooming_frequency: u32,
}

/// Validated questionnaire answers for one estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SurveyInput")]
pub struct SurveyAnswers {
    pet_type: PetType,
    pet_count: u32,
    pet_age: AgeBracket,
    vet_frequency: VetFrequency,
    health_conditions: HealthConditions,
    grooming_frequency: GroomingFrequency,
}

impl SurveyAnswers {
    pub fn new(
        pet_type: PetType,
        pet_count: u32,
        pet_age: AgeBracket,
        vet_frequency: VetFrequency,
        health_conditions: HealthConditions,
        grooming_frequency: GroomingFrequency,
    ) -> Result<Self, SurveyError> {
        if pet_count == 0 {
            return Err(SurveyError::InvalidPetCount(pet_count));
        }

        Ok(Self {
            pet_type,
            pet_count,
            pet_age,
            vet_frequency,
            health_conditions,
            grooming_frequency,
        })
    }

    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    pub fn pet_count(&self) -> u32 {
        self.pet_count
    }

    pub fn pet_age(&self) -> AgeBracket {
        self.pet_age
    }

    pub fn vet_frequency(&self) -> VetFrequency {
        self.vet_frequency
    }

    pub fn health_conditions(&self) -> &HealthConditions {
        &self.health_conditions
    }

    pub fn grooming_frequency(&self) -> GroomingFrequency {
        self.grooming_frequency
    }

    pub fn with_health_conditions(mut self, health_conditions: HealthConditions) -> Self {
        self.health_conditions = health_conditions;
        self
    }

    pub fn with_pet_age(mut self, pet_age: AgeBracket) -> Self {
        self.pet_age = pet_age;
        self
    }
}

impl Default for SurveyAnswers {
    /// The questionnaire's starting state: one adult dog, twice-yearly checkups
    fn default() -> Self {
        Self {
            pet_type: PetType::Dog,
            pet_count: 1,
            pet_age: AgeBracket::Adult,
            vet_frequency: VetFrequency::TwiceYear,
            health_conditions: HealthConditions::NoConditions,
            grooming_frequency: GroomingFrequency::Occasional,
        }
    }
}

impl TryFrom<SurveyInput> for SurveyAnswers {
    type Error = SurveyError;

    fn try_from(input: SurveyInput) -> Result<Self, Self::Error> {
        SurveyAnswers::new(
            input.pet_type,
            input.pet_count,
            input.pet_age,
            input.vet_frequency,
            HealthConditions::from_tags(&input.health_conditions)?,
            GroomingFrequency::try_from(input.grooming_frequency)?,
        )
    }
}

/// Annual cost estimate and plan recommendation, all amounts in whole euros
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub annual_checkups: u64,
    pub vaccinations: u64,
    pub health_condition_costs: u64,
    pub grooming: u64,
    pub emergency_buffer: u64,
    pub total_without_membership: u64,
    pub recommended_plan: PlanTier,
    /// Annual list price of the recommended plan
    pub plan_cost: u64,
    pub annual_savings: u64,
    pub savings_percentage: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_tag_parsing() {
        assert_eq!("none".parse::<ConditionTag>().unwrap(), ConditionTag::NONE);
        assert_eq!(
            "heart-conditions".parse::<ConditionTag>().unwrap(),
            ConditionTag::Condition(Condition::HeartConditions)
        );
        assert!(matches!(
            "fleas".parse::<ConditionTag>(),
            Err(SurveyError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_conditions_reject_none_with_real_condition() {
        let tags = [ConditionTag::NONE, Condition::Diabetes.into()];
        assert_eq!(
            HealthConditions::from_tags(&tags),
            Err(SurveyError::ConflictingConditions)
        );
        assert_eq!(
            HealthConditions::from_tags(&[]),
            Err(SurveyError::EmptyConditions)
        );
    }

    #[test]
    fn test_conditions_deduplicate() {
        let tags = [Condition::Obesity.into(), Condition::Obesity.into()];
        let conditions = HealthConditions::from_tags(&tags).unwrap();
        assert_eq!(conditions.count(), 1);
        assert!(conditions.contains(Condition::Obesity));
    }

    #[test]
    fn test_toggle_follows_checklist_rules() {
        let conditions = HealthConditions::NoConditions
            .toggle(Condition::Allergies.into())
            .toggle(Condition::Diabetes.into());
        assert_eq!(conditions.count(), 2);

        // Unchecking the last real condition falls back to "none"
        let conditions = conditions
            .toggle(Condition::Allergies.into())
            .toggle(Condition::Diabetes.into());
        assert_eq!(conditions, HealthConditions::NoConditions);

        let conditions = HealthConditions::from_conditions([Condition::Obesity])
            .toggle(ConditionTag::NONE);
        assert_eq!(conditions, HealthConditions::NoConditions);
    }

    #[test]
    fn test_grooming_frequency_menu() {
        assert_eq!(GroomingFrequency::try_from(6), Ok(GroomingFrequency::Bimonthly));
        assert_eq!(
            GroomingFrequency::try_from(3),
            Err(SurveyError::InvalidGroomingFrequency(3))
        );
        assert_eq!("12".parse::<GroomingFrequency>(), Ok(GroomingFrequency::Monthly));
        assert_eq!("seasonal".parse::<GroomingFrequency>(), Ok(GroomingFrequency::Seasonal));
    }

    #[test]
    fn test_survey_answers_from_json() {
        let json = r#"{
            "petType": "cat",
            "petCount": 2,
            "petAge": "senior",
            "vetFrequency": "quarterly",
            "healthConditions": ["diabetes", "obesity"],
            "groomingFrequency": 4
        }"#;

        let answers: SurveyAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.pet_type(), PetType::Cat);
        assert_eq!(answers.pet_count(), 2);
        assert_eq!(answers.pet_age(), AgeBracket::Senior);
        assert_eq!(answers.vet_frequency(), VetFrequency::Quarterly);
        assert_eq!(answers.health_conditions().count(), 2);
        assert_eq!(answers.grooming_frequency(), GroomingFrequency::Seasonal);
    }

    #[test]
    fn test_survey_answers_json_rejects_invalid_input() {
        let zero_pets = r#"{"petType":"dog","petCount":0,"petAge":"adult",
            "vetFrequency":"rarely","healthConditions":["none"],"groomingFrequency":0}"#;
        assert!(serde_json::from_str::<SurveyAnswers>(zero_pets).is_err());

        let conflicting = r#"{"petType":"dog","petCount":1,"petAge":"adult",
            "vetFrequency":"rarely","healthConditions":["none","allergies"],"groomingFrequency":0}"#;
        assert!(serde_json::from_str::<SurveyAnswers>(conflicting).is_err());

        let unknown_age = r#"{"petType":"dog","petCount":1,"petAge":"ancient",
            "vetFrequency":"rarely","healthConditions":["none"],"groomingFrequency":0}"#;
        assert!(serde_json::from_str::<SurveyAnswers>(unknown_age).is_err());
    }

    #[test]
    fn test_survey_answers_serialize_none_tag() {
        let value = serde_json::to_value(SurveyAnswers::default()).unwrap();
        assert_eq!(value["healthConditions"], serde_json::json!(["none"]));
        assert_eq!(value["groomingFrequency"], 2);
        assert_eq!(value["vetFrequency"], "twice_year");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(PlanTier::Basic < PlanTier::CarePlus);
        assert!(PlanTier::CarePlus < PlanTier::Vip);
        assert_eq!("care-plus".parse::<PlanTier>(), Ok(PlanTier::CarePlus));
    }
}
