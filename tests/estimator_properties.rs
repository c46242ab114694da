//! Property-based tests for the cost estimator
//!
//! These check invariants across the whole questionnaire space rather than
//! single worked examples.

use petpass::estimator::calculator::{
    calculate_condition_cost, calculate_membership_value, calculate_vaccination_cost,
};
use petpass::estimator::{
    estimate, AgeBracket, Condition, EstimatorProfile, GroomingFrequency, HealthConditions,
    PetType, PlanTier, PriceTable, ProfileKind, SurveyAnswers, VetFrequency,
};
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::json;

fn answers_strategy() -> impl Strategy<Value = SurveyAnswers> {
    (
        select(PetType::ALL.to_vec()),
        1u32..=5,
        select(AgeBracket::ALL.to_vec()),
        select(VetFrequency::ALL.to_vec()),
        prop::collection::btree_set(select(Condition::ALL.to_vec()), 0..4),
        select(GroomingFrequency::ALL.to_vec()),
    )
        .prop_map(|(pet_type, count, age, vet, conditions, grooming)| {
            SurveyAnswers::new(
                pet_type,
                count,
                age,
                vet,
                HealthConditions::from_conditions(conditions),
                grooming,
            )
            .unwrap()
        })
}

fn profile_strategy() -> impl Strategy<Value = EstimatorProfile> {
    prop_oneof![Just(ProfileKind::Vienna), Just(ProfileKind::Vetpro)]
        .prop_map(EstimatorProfile::preset)
}

proptest! {
    /// Property: the same answers always give the same breakdown
    #[test]
    fn test_estimate_is_deterministic(
        answers in answers_strategy(),
        profile in profile_strategy()
    ) {
        prop_assert_eq!(estimate(&answers, &profile), estimate(&answers, &profile));
    }

    /// Property: a membership worth less than its price saves nothing
    #[test]
    fn test_savings_clamped_at_zero(
        answers in answers_strategy(),
        profile in profile_strategy()
    ) {
        let breakdown = estimate(&answers, &profile);
        let plan_cost = profile.plans.annual_price(breakdown.recommended_plan);
        let value = calculate_membership_value(
            &answers,
            &profile,
            breakdown.recommended_plan,
            calculate_vaccination_cost(&answers, &profile),
            breakdown.total_without_membership as f64,
        );

        if value < plan_cost {
            prop_assert_eq!(breakdown.annual_savings, 0);
            prop_assert_eq!(breakdown.savings_percentage, 0);
        } else {
            prop_assert!(breakdown.annual_savings as f64 >= (value - plan_cost).floor());
        }
        if breakdown.annual_savings == 0 {
            prop_assert_eq!(breakdown.savings_percentage, 0);
        }
        prop_assert_eq!(
            breakdown.plan_cost as f64,
            profile.plans.annual_price(breakdown.recommended_plan)
        );
    }

    /// Property: line items never exceed the total they add up to
    #[test]
    fn test_line_items_within_total(
        answers in answers_strategy(),
        profile in profile_strategy()
    ) {
        let b = estimate(&answers, &profile);
        let items = b.annual_checkups + b.vaccinations + b.health_condition_costs + b.grooming;
        // Each item is rounded separately, so allow one euro per item
        prop_assert!(items + b.emergency_buffer <= b.total_without_membership + 5);
        prop_assert!(b.total_without_membership <= items + b.emergency_buffer + 5);
    }

    /// Property: adding a condition never lowers the recommended tier
    #[test]
    fn test_tier_monotonic_in_conditions(
        answers in answers_strategy(),
        profile in profile_strategy(),
        extra in select(Condition::ALL.to_vec())
    ) {
        let before = estimate(&answers, &profile).recommended_plan;

        let mut conditions: Vec<Condition> = answers.health_conditions().iter().collect();
        conditions.push(extra);
        let sicker = answers
            .clone()
            .with_health_conditions(HealthConditions::from_conditions(conditions));
        let after = estimate(&sicker, &profile).recommended_plan;

        prop_assert!(after >= before);
    }

    /// Property: seniors are always steered to VIP by the shipped presets
    #[test]
    fn test_seniors_get_vip(
        answers in answers_strategy(),
        profile in profile_strategy()
    ) {
        let senior = answers.with_pet_age(AgeBracket::Senior);
        prop_assert_eq!(estimate(&senior, &profile).recommended_plan, PlanTier::Vip);
    }

    /// Property: seniors pay 1.2x on vaccinations and 1.3x on condition care
    #[test]
    fn test_senior_scaling_applies_to_both_items(
        answers in answers_strategy(),
        profile in profile_strategy()
    ) {
        let adult = answers.clone().with_pet_age(AgeBracket::Adult);
        let senior = answers.with_pet_age(AgeBracket::Senior);

        let vaccination_ratio = calculate_vaccination_cost(&senior, &profile)
            / calculate_vaccination_cost(&adult, &profile);
        prop_assert!((vaccination_ratio - 1.2).abs() < 1e-9);

        let adult_conditions = calculate_condition_cost(&adult, &profile);
        if adult_conditions > 0.0 {
            let ratio = calculate_condition_cost(&senior, &profile) / adult_conditions;
            prop_assert!((ratio - 1.3).abs() < 1e-9);
        }
    }

    /// Property: a zero price table yields a zero estimate
    #[test]
    fn test_zero_prices_give_zero_total(answers in answers_strategy()) {
        let profile = EstimatorProfile {
            prices: PriceTable::zero(),
            ..EstimatorProfile::vienna()
        };
        let breakdown = estimate(&answers, &profile);
        prop_assert_eq!(breakdown.total_without_membership, 0);
        prop_assert_eq!(breakdown.annual_savings, 0);
        prop_assert_eq!(breakdown.savings_percentage, 0);
    }
}

#[test]
fn test_survey_json_matches_form_shape() {
    let answers: SurveyAnswers = serde_json::from_value(json!({
        "petType": "dog",
        "petCount": 1,
        "petAge": "adult",
        "vetFrequency": "twice_year",
        "healthConditions": ["diabetes", "heart_conditions"],
        "groomingFrequency": 2
    }))
    .unwrap();

    let breakdown = estimate(&answers, &EstimatorProfile::vienna());
    assert_eq!(breakdown.health_condition_costs, 1050);
    assert_eq!(breakdown.total_without_membership, 1564);
    assert_eq!(breakdown.recommended_plan, PlanTier::Vip);

    let output = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(output["totalWithoutMembership"], 1564);
    assert_eq!(output["recommendedPlan"], "vip");
}

#[test]
fn test_survey_json_rejects_contract_violations() {
    let base = json!({
        "petType": "cat",
        "petCount": 1,
        "petAge": "young",
        "vetFrequency": "once_year",
        "healthConditions": ["none"],
        "groomingFrequency": 0
    });
    assert!(serde_json::from_value::<SurveyAnswers>(base.clone()).is_ok());

    let cases = [
        ("petCount", json!(0)),
        ("healthConditions", json!([])),
        ("healthConditions", json!(["none", "allergies"])),
        ("groomingFrequency", json!(3)),
        ("petType", json!("hamster")),
    ];
    for (field, value) in cases {
        let mut input = base.clone();
        input[field] = value;
        assert!(
            serde_json::from_value::<SurveyAnswers>(input).is_err(),
            "{} should be rejected",
            field
        );
    }
}
