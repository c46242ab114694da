use crate::estimator::{CostBreakdown, EstimatorProfile, PlanTier, SurveyAnswers};
use crate::report::labels::Language;

/// Format a whole-euro amount the way the survey shows it
pub fn format_euros(amount: u64) -> String {
    format!("€{}", amount)
}

/// Format a monthly plan price, keeping cents only when there are any
pub fn format_monthly_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("€{}", price as u64)
    } else {
        format!("€{:.2}", price)
    }
}

fn percent(rate: f64) -> u64 {
    (rate * 100.0).round() as u64
}

/// Perks listed under "What's included" for a plan
pub fn included_perks(tier: PlanTier, profile: &EstimatorProfile, language: Language) -> Vec<String> {
    let t = language.texts();
    let benefits = profile.benefits.for_tier(tier);
    let mut perks = vec![t.vaccinations_covered.to_string()];

    let checks = if benefits.free_checkups == 1 {
        t.annual_check
    } else {
        t.annual_checks
    };
    perks.push(format!("{} {}", benefits.free_checkups, checks));
    perks.push(format!("{}% {}", percent(benefits.discount_rate), t.off_partner));

    if benefits.free_grooming_sessions > 0 {
        let dog_value =
            profile.prices.grooming.dog * f64::from(benefits.free_grooming_sessions);
        perks.push(format!(
            "{} {} ({}+ {})",
            benefits.free_grooming_sessions,
            t.grooming_sessions,
            format_monthly_price(dog_value),
            t.value
        ));
    }
    if benefits.free_dental_cleanings > 0 {
        let cleaning = if benefits.free_dental_cleanings == 1 {
            t.teeth_cleaning
        } else {
            t.teeth_cleanings
        };
        let dental_value =
            profile.prices.dental_cleaning * f64::from(benefits.free_dental_cleanings);
        perks.push(format!(
            "{} {} ({} {})",
            benefits.free_dental_cleanings,
            cleaning,
            format_monthly_price(dental_value),
            t.value
        ));
    }
    if tier == PlanTier::Vip {
        perks.push(t.more_perks.to_string());
    }

    perks
}

fn line(label: &str, amount: &str) -> String {
    format!("  {:<32}{:>10}", label, amount)
}

/// Human-readable savings report for one estimate
pub fn render_summary(
    answers: &SurveyAnswers,
    breakdown: &CostBreakdown,
    profile: &EstimatorProfile,
    language: Language,
) -> String {
    let t = language.texts();
    let mut out = Vec::new();

    out.push(format!(
        "{} × {} · {} · {}",
        answers.pet_count(),
        language.pet_type(answers.pet_type()),
        language.age(answers.pet_age()),
        language.vet_frequency(answers.vet_frequency())
    ));
    out.push(String::new());

    out.push(t.estimated_costs.to_string());
    out.push(line(t.vet_checkups, &format_euros(breakdown.annual_checkups)));
    out.push(line(t.vaccinations, &format_euros(breakdown.vaccinations)));
    if breakdown.health_condition_costs > 0 {
        out.push(line(
            t.health_condition_care,
            &format_euros(breakdown.health_condition_costs),
        ));
    }
    if breakdown.grooming > 0 {
        out.push(line(t.professional_grooming, &format_euros(breakdown.grooming)));
    }
    let buffer_label = format!(
        "{} ({}%)",
        t.emergency_buffer,
        percent(profile.prices.emergency_buffer_percent)
    );
    out.push(line(&buffer_label, &format_euros(breakdown.emergency_buffer)));
    out.push(line(
        t.total_without,
        &format!(
            "{}/{}",
            format_euros(breakdown.total_without_membership),
            t.year
        ),
    ));
    out.push(String::new());

    let tier = breakdown.recommended_plan;
    out.push(format!("{} {}", t.with_plan, language.plan_name(tier)));
    out.push(format!(
        "  {} {} {} ({}% {})",
        t.could_save,
        format_euros(breakdown.annual_savings),
        t.per_year,
        breakdown.savings_percentage,
        t.savings
    ));
    out.push(format!(
        "  {} {}/{}",
        t.only,
        format_monthly_price(profile.plans.monthly_price(tier)),
        t.month
    ));
    out.push(String::new());

    out.push(t.whats_included.to_string());
    for perk in included_perks(tier, profile, language) {
        out.push(format!("  ✓ {}", perk));
    }

    out.join("\n")
}
