use clap::Parser;

use crate::estimator::{
    AgeBracket, ConditionTag, GroomingFrequency, PetType, PlanTier, ProfileKind, VetFrequency,
};
use crate::report::{District, Language};

#[derive(Parser, Debug)]
#[command(name = "petpass")]
#[command(
    version,
    about = "Estimate yearly pet care costs and the savings of a PetPass membership",
    long_about = "Estimate yearly pet care costs and the savings of a PetPass membership.\n\n\
                  Without --pet-type the questionnaire is read as JSON from stdin."
)]
pub struct Cli {
    /// Pet type (dog, cat, rabbit, other)
    #[arg(long = "pet-type", value_name = "TYPE")]
    pub pet_type: Option<PetType>,

    /// Number of pets
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    pub count: u32,

    /// Age bracket (puppy_kitten, young, adult, senior)
    #[arg(long = "age", default_value = "adult")]
    pub age: AgeBracket,

    /// Vet visit frequency (rarely, once_year, twice_year, quarterly, monthly)
    #[arg(long = "vet-frequency", default_value = "twice_year")]
    pub vet_frequency: VetFrequency,

    /// Health condition, repeat for several (or "none")
    #[arg(long = "condition", value_name = "TAG")]
    pub conditions: Vec<ConditionTag>,

    /// Grooming sessions per year (0, 2, 4, 6, 12)
    #[arg(short = 'g', long = "grooming", default_value = "2")]
    pub grooming: GroomingFrequency,

    /// Estimator profile, overrides the config file
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<ProfileKind>,

    /// Report language, overrides the config file
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<Language>,

    /// Print the cost breakdown as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Email for the waitlist, prints the lead payload
    #[arg(long = "email")]
    pub email: Option<String>,

    /// Vienna district for the waitlist (e.g. 7, 7th or "7th (Neubau)")
    #[arg(long = "district")]
    pub district: Option<District>,

    /// Join the waitlist without answering the questionnaire
    #[arg(long = "quick-join", requires = "email")]
    pub quick_join: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    /// Set a monthly plan price in the config file
    #[arg(long = "set-plan-price", value_name = "TIER=PRICE", value_parser = parse_plan_price)]
    pub set_plan_price: Option<(PlanTier, f64)>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_plan_price(s: &str) -> Result<(PlanTier, f64), String> {
    let (tier, price) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TIER=PRICE, got {:?}", s))?;
    let tier: PlanTier = tier.parse().map_err(|e| format!("{}", e))?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid price {:?}", price))?;
    Ok((tier, price))
}
