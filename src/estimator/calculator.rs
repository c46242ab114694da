use crate::debug_println;
use crate::estimator::{CostBreakdown, EstimatorProfile, PlanTier, SurveyAnswers};

/// Round half up to a whole euro
pub fn round_currency(amount: f64) -> f64 {
    (amount + 0.5).floor()
}

fn to_whole(amount: f64) -> u64 {
    round_currency(amount).max(0.0) as u64
}

/// Routine checkup spend per year
pub fn calculate_checkup_cost(answers: &SurveyAnswers, profile: &EstimatorProfile) -> f64 {
    let visits = profile
        .factors
        .visits_per_year
        .for_frequency(answers.vet_frequency());
    visits * profile.prices.checkup * f64::from(answers.pet_count())
}

/// Vaccination bundle spend, scaled for puppies/kittens and seniors
pub fn calculate_vaccination_cost(answers: &SurveyAnswers, profile: &EstimatorProfile) -> f64 {
    let base = profile.prices.vaccination.bundle() * f64::from(answers.pet_count());
    base * profile.factors.vaccination_multiplier(answers.pet_age())
}

/// Chronic condition care, scaled for seniors independently of vaccinations
pub fn calculate_condition_cost(answers: &SurveyAnswers, profile: &EstimatorProfile) -> f64 {
    let per_pet: f64 = answers
        .health_conditions()
        .iter()
        .map(|c| profile.prices.health_condition_costs.cost(c))
        .sum();
    per_pet * f64::from(answers.pet_count()) * profile.factors.condition_multiplier(answers.pet_age())
}

pub fn calculate_grooming_cost(answers: &SurveyAnswers, profile: &EstimatorProfile) -> f64 {
    let unit_price = profile.prices.grooming.for_pet(answers.pet_type());
    f64::from(answers.grooming_frequency().visits_per_year())
        * unit_price
        * f64::from(answers.pet_count())
}

/// Pick the plan tier for a questionnaire
pub fn recommend_plan(answers: &SurveyAnswers, profile: &EstimatorProfile) -> PlanTier {
    profile.policy.recommend(
        answers.health_conditions().count(),
        answers.grooming_frequency().visits_per_year(),
        profile
            .factors
            .visits_per_year
            .for_frequency(answers.vet_frequency()),
        answers.pet_age(),
    )
}

/// Heuristic value of what a member of `tier` receives for free or discounted
pub fn calculate_membership_value(
    answers: &SurveyAnswers,
    profile: &EstimatorProfile,
    tier: PlanTier,
    vaccinations: f64,
    total_without_membership: f64,
) -> f64 {
    let benefits = profile.benefits.for_tier(tier);
    let pets = f64::from(answers.pet_count());
    let grooming_price = profile.prices.grooming.for_pet(answers.pet_type());

    let mut value = vaccinations;
    value += profile.prices.checkup * f64::from(benefits.free_checkups) * pets;
    value += f64::from(benefits.free_grooming_sessions) * grooming_price * pets;
    value += profile.prices.dental_cleaning * f64::from(benefits.free_dental_cleanings) * pets;
    value += total_without_membership * benefits.discount_rate;
    value
}

/// Estimate annual vet spend, recommend a plan and project the savings
pub fn estimate(answers: &SurveyAnswers, profile: &EstimatorProfile) -> CostBreakdown {
    let checkups = calculate_checkup_cost(answers, profile);
    let vaccinations = calculate_vaccination_cost(answers, profile);
    let conditions = calculate_condition_cost(answers, profile);
    let grooming = calculate_grooming_cost(answers, profile);

    let subtotal = checkups + vaccinations + conditions + grooming;
    let emergency_buffer = subtotal * profile.prices.emergency_buffer_percent;
    let total_without_membership = round_currency(subtotal + emergency_buffer);

    debug_println!(
        "estimate: subtotal {:.2} + buffer {:.2} = {}",
        subtotal,
        emergency_buffer,
        total_without_membership
    );

    let recommended_plan = recommend_plan(answers, profile);
    let plan_cost = profile.plans.annual_price(recommended_plan);
    let membership_value = calculate_membership_value(
        answers,
        profile,
        recommended_plan,
        vaccinations,
        total_without_membership,
    );

    let annual_savings = round_currency(membership_value - plan_cost).max(0.0);
    let savings_percentage = if total_without_membership > 0.0 {
        round_currency(annual_savings / total_without_membership * 100.0)
    } else {
        0.0
    };

    debug_println!(
        "estimate: plan {} costs {:.2}/year, value {:.2}, savings {}",
        recommended_plan,
        plan_cost,
        membership_value,
        annual_savings
    );

    CostBreakdown {
        annual_checkups: to_whole(checkups),
        vaccinations: to_whole(vaccinations),
        health_condition_costs: to_whole(conditions),
        grooming: to_whole(grooming),
        emergency_buffer: to_whole(emergency_buffer),
        total_without_membership: to_whole(total_without_membership),
        recommended_plan,
        plan_cost: to_whole(plan_cost),
        annual_savings: to_whole(annual_savings),
        savings_percentage: to_whole(savings_percentage),
    }
}

impl EstimatorProfile {
    pub fn estimate(&self, answers: &SurveyAnswers) -> CostBreakdown {
        estimate(answers, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{
        AgeBracket, Condition, GroomingFrequency, HealthConditions, PetType, PriceTable,
        VetFrequency,
    };

    fn answers(
        pet_type: PetType,
        count: u32,
        age: AgeBracket,
        frequency: VetFrequency,
        conditions: &[Condition],
        grooming: GroomingFrequency,
    ) -> SurveyAnswers {
        SurveyAnswers::new(
            pet_type,
            count,
            age,
            frequency,
            HealthConditions::from_conditions(conditions.iter().copied()),
            grooming,
        )
        .unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(46.5), 47.0);
        assert_eq!(round_currency(356.5), 357.0);
        assert_eq!(round_currency(84.3), 84.0);
        assert_eq!(round_currency(-0.5), 0.0);
    }

    #[test]
    fn test_default_survey_on_vienna_profile() {
        let breakdown = estimate(&SurveyAnswers::default(), &EstimatorProfile::vienna());

        assert_eq!(breakdown.annual_checkups, 80);
        assert_eq!(breakdown.vaccinations, 110);
        assert_eq!(breakdown.health_condition_costs, 0);
        assert_eq!(breakdown.grooming, 120);
        assert_eq!(breakdown.emergency_buffer, 47);
        assert_eq!(breakdown.total_without_membership, 357);
        // Two visits and two groomings sit on the strict Care-Plus threshold
        assert_eq!(breakdown.recommended_plan, PlanTier::Basic);
        assert_eq!(breakdown.plan_cost, 192);
        assert_eq!(breakdown.annual_savings, 34);
        assert_eq!(breakdown.savings_percentage, 10);
    }

    #[test]
    fn test_default_survey_on_vetpro_profile() {
        let breakdown = estimate(&SurveyAnswers::default(), &EstimatorProfile::vetpro());

        assert_eq!(breakdown.total_without_membership, 357);
        assert_eq!(breakdown.recommended_plan, PlanTier::CarePlus);
        assert_eq!(breakdown.plan_cost, 468);
        assert_eq!(breakdown.annual_savings, 0);
        assert_eq!(breakdown.savings_percentage, 0);
    }

    #[test]
    fn test_two_conditions_force_vip() {
        let answers = SurveyAnswers::default().with_health_conditions(
            HealthConditions::from_conditions([Condition::Diabetes, Condition::HeartConditions]),
        );
        let breakdown = estimate(&answers, &EstimatorProfile::vienna());

        assert_eq!(breakdown.health_condition_costs, 1050);
        assert_eq!(breakdown.emergency_buffer, 204);
        assert_eq!(breakdown.total_without_membership, 1564);
        assert_eq!(breakdown.recommended_plan, PlanTier::Vip);
        assert_eq!(breakdown.plan_cost, 1188);
        assert_eq!(breakdown.annual_savings, 0);
    }

    #[test]
    fn test_monthly_grooming_forces_vip() {
        let a = answers(
            PetType::Dog,
            1,
            AgeBracket::Adult,
            VetFrequency::TwiceYear,
            &[],
            GroomingFrequency::Monthly,
        );
        let breakdown = estimate(&a, &EstimatorProfile::vienna());

        assert_eq!(breakdown.grooming, 720);
        assert_eq!(breakdown.total_without_membership, 1047);
        assert_eq!(breakdown.recommended_plan, PlanTier::Vip);
    }

    #[test]
    fn test_senior_multipliers_stack() {
        let a = answers(
            PetType::Dog,
            1,
            AgeBracket::Senior,
            VetFrequency::OnceYear,
            &[Condition::JointProblems],
            GroomingFrequency::Never,
        );
        let breakdown = estimate(&a, &EstimatorProfile::vienna());

        assert_eq!(breakdown.annual_checkups, 40);
        assert_eq!(breakdown.vaccinations, 132);
        assert_eq!(breakdown.health_condition_costs, 390);
        assert_eq!(breakdown.emergency_buffer, 84);
        assert_eq!(breakdown.total_without_membership, 646);
        assert_eq!(breakdown.recommended_plan, PlanTier::Vip);
    }

    #[test]
    fn test_positive_savings_for_low_need_cat() {
        let a = answers(
            PetType::Cat,
            1,
            AgeBracket::Young,
            VetFrequency::OnceYear,
            &[],
            GroomingFrequency::Never,
        );
        let breakdown = estimate(&a, &EstimatorProfile::vienna());

        assert_eq!(breakdown.total_without_membership, 173);
        assert_eq!(breakdown.recommended_plan, PlanTier::Basic);
        assert_eq!(breakdown.annual_savings, 15);
        assert_eq!(breakdown.savings_percentage, 9);
    }

    #[test]
    fn test_pet_count_scales_costs() {
        let a = answers(
            PetType::Dog,
            3,
            AgeBracket::Adult,
            VetFrequency::TwiceYear,
            &[],
            GroomingFrequency::Never,
        );
        let breakdown = estimate(&a, &EstimatorProfile::vienna());

        assert_eq!(breakdown.annual_checkups, 240);
        assert_eq!(breakdown.vaccinations, 330);
        assert_eq!(breakdown.emergency_buffer, 86);
        assert_eq!(breakdown.total_without_membership, 656);
        assert_eq!(breakdown.annual_savings, 444);
        assert_eq!(breakdown.savings_percentage, 68);
    }

    #[test]
    fn test_rabbit_and_other_share_grooming_price() {
        let profile = EstimatorProfile::vienna();
        let rabbit = answers(
            PetType::Rabbit,
            2,
            AgeBracket::PuppyKitten,
            VetFrequency::Rarely,
            &[],
            GroomingFrequency::Occasional,
        );
        let other = answers(
            PetType::Other,
            2,
            AgeBracket::PuppyKitten,
            VetFrequency::Rarely,
            &[],
            GroomingFrequency::Occasional,
        );

        let breakdown = estimate(&rabbit, &profile);
        assert_eq!(breakdown, estimate(&other, &profile));
        assert_eq!(breakdown.annual_checkups, 40);
        assert_eq!(breakdown.vaccinations, 330);
        assert_eq!(breakdown.grooming, 140);
        assert_eq!(breakdown.total_without_membership, 587);
        assert_eq!(breakdown.annual_savings, 357);
        assert_eq!(breakdown.savings_percentage, 61);
    }

    #[test]
    fn test_large_senior_household_vip_savings() {
        let a = answers(
            PetType::Dog,
            2,
            AgeBracket::Senior,
            VetFrequency::Monthly,
            &[Condition::Diabetes, Condition::Obesity],
            GroomingFrequency::Bimonthly,
        );
        let breakdown = estimate(&a, &EstimatorProfile::vienna());

        assert_eq!(breakdown.annual_checkups, 960);
        assert_eq!(breakdown.vaccinations, 264);
        assert_eq!(breakdown.health_condition_costs, 1950);
        assert_eq!(breakdown.grooming, 720);
        assert_eq!(breakdown.emergency_buffer, 584);
        assert_eq!(breakdown.total_without_membership, 4478);
        assert_eq!(breakdown.recommended_plan, PlanTier::Vip);
        assert_eq!(breakdown.annual_savings, 1346);
        assert_eq!(breakdown.savings_percentage, 30);
    }

    #[test]
    fn test_zero_price_table_has_no_percentage() {
        let mut profile = EstimatorProfile::vienna();
        profile.prices = PriceTable::zero();

        let breakdown = estimate(&SurveyAnswers::default(), &profile);
        assert_eq!(breakdown.total_without_membership, 0);
        assert_eq!(breakdown.annual_savings, 0);
        assert_eq!(breakdown.savings_percentage, 0);
    }

    #[test]
    fn test_membership_value_components() {
        let profile = EstimatorProfile::vienna();
        let a = SurveyAnswers::default();
        let value = calculate_membership_value(&a, &profile, PlanTier::Vip, 110.0, 1000.0);
        // 110 + 4 checkups + 4 dog groomings + 1 dental + 25% of 1000
        assert!((value - (110.0 + 160.0 + 240.0 + 175.0 + 250.0)).abs() < 1e-9);
    }

    #[test]
    fn test_profile_estimate_matches_free_function() {
        let profile = EstimatorProfile::vetpro();
        let a = SurveyAnswers::default();
        assert_eq!(profile.estimate(&a), estimate(&a, &profile));
    }
}
