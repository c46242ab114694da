use petpass::cli::Cli;
use petpass::config::{Config, ConfigLoader};
use petpass::estimator::{HealthConditions, SurveyAnswers};
use petpass::report::{render_summary, Contact, LeadPayload};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        let mut config = Config::load().unwrap_or_else(|_| Config::default());
        if let Some(profile) = cli.profile {
            config.profile = profile;
        }
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    if let Some((tier, price)) = cli.set_plan_price {
        let mut config = ConfigLoader::load();
        let kind = cli.profile.unwrap_or(config.profile);
        if let Err(e) = config.plans_mut_for(kind).set_price(tier, price) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }

        config.save()?;
        println!("{} plan set to €{}/month for the {} profile", tier, price, kind);
        return Ok(());
    }

    let mut config = ConfigLoader::load();
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    let language = cli.lang.unwrap_or(config.language);

    if cli.quick_join {
        let contact = contact_from_cli(&cli, language)?;
        println!("{}", LeadPayload::quick_join(contact).to_json()?);
        return Ok(());
    }

    let answers = match cli.pet_type {
        Some(pet_type) => {
            let conditions = if cli.conditions.is_empty() {
                HealthConditions::NoConditions
            } else {
                HealthConditions::from_tags(&cli.conditions)?
            };
            SurveyAnswers::new(
                pet_type,
                cli.count,
                cli.age,
                cli.vet_frequency,
                conditions,
                cli.grooming,
            )?
        }
        None => {
            // Read the questionnaire from stdin
            let stdin = io::stdin();
            serde_json::from_reader(stdin.lock())?
        }
    };

    if let Err(e) = config.check_pet_count(answers.pet_count()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let profile = config.resolve_profile();
    profile.validate()?;
    let breakdown = profile.estimate(&answers);

    if cli.email.is_some() {
        let contact = contact_from_cli(&cli, language)?;
        let payload = LeadPayload::from_survey(contact, &answers, &breakdown);
        println!("{}", payload.to_json()?);
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", render_summary(&answers, &breakdown, &profile, language));
    }

    Ok(())
}

fn contact_from_cli(
    cli: &Cli,
    language: petpass::report::Language,
) -> Result<Contact, Box<dyn std::error::Error>> {
    let email = cli.email.as_deref().unwrap_or_default();
    let district = cli.district.clone().unwrap_or_default();
    Ok(Contact::new(email, district, language)?)
}
