// ABOUTME: Meal recommendation engine scoring a static dataset against a calorie budget
// ABOUTME: Progressive eligibility relaxation and de-duplicated protein/fill/quick picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal recommendation engine.
//!
//! Eligibility is decided in up to three tiers:
//!
//! 1. calories within `[budget - 300, budget + 100]` (lower edge floored at 0),
//!    restricted to the preferred category when one is given
//! 2. calories at most `budget + 100`, same category restriction
//! 3. the ten lowest-calorie meals of the whole dataset, unfiltered
//!
//! A tier is used as soon as it yields at least three meals. Each pick is then
//! scored independently over the eligible set; later picks skip meals already
//! chosen whenever another candidate exists.

use crate::meal_database::bundled_meals;
use chrono::{DateTime, Utc};
use mealpilot_core::constants::recommendation::{
    tags, CALORIE_BUFFER, FALLBACK_MEAL_COUNT, FIBER_TAG_BONUS, FILLING_TAG_BONUS,
    LOWER_WINDOW_BUFFERS, MIN_ELIGIBLE_MEALS, PORTABLE_TAG_BONUS, QUICK_PREP_BASELINE_MINUTES,
    QUICK_PREP_MINUTE_WEIGHT, QUICK_TAG_BONUS, VOLUME_SCORE_WEIGHT,
};
use mealpilot_core::models::{LoggableFood, MealCategory, MealDatabaseEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category written on foods logged from a recommendation
const RECOMMENDED_CATEGORY: &str = "recommended";

/// Which filter tier produced the eligible set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityTier {
    /// Calorie window around the budget
    Primary,
    /// Upper calorie bound only
    Relaxed,
    /// Lowest-calorie meals of the whole dataset
    LowestCalorie,
}

/// A meal annotated with one recommendation-specific score
#[derive(Debug, Clone, Copy)]
pub struct ScoredMeal<'a> {
    /// The scored meal
    pub meal: &'a MealDatabaseEntry,
    /// Score for the criterion being ranked (higher is better)
    pub score: f64,
}

impl<'a> ScoredMeal<'a> {
    fn new(meal: &'a MealDatabaseEntry, score: f64) -> Self {
        // NaN would otherwise sort above every real score
        let score = if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        };
        Self { meal, score }
    }
}

/// Output of a single recommendation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Best protein-per-calorie meal
    pub protein_pick: Option<MealDatabaseEntry>,
    /// Most filling meal other than the protein pick
    pub fill_pick: Option<MealDatabaseEntry>,
    /// Quickest meal other than the previous picks
    pub quick_pick: Option<MealDatabaseEntry>,
    /// Calorie budget the recommendation was computed for
    pub remaining_calories: f64,
    /// Protein budget the recommendation was computed for
    pub remaining_protein: f64,
    /// Number of meals that passed eligibility filtering
    pub eligible_count: usize,
    /// Filter tier that produced the eligible set
    pub tier: EligibilityTier,
}

/// Recommends meals from a fixed dataset
#[derive(Debug, Clone, Copy)]
pub struct MealRecommender<'a> {
    meals: &'a [MealDatabaseEntry],
}

impl Default for MealRecommender<'static> {
    fn default() -> Self {
        Self::new(bundled_meals())
    }
}

impl<'a> MealRecommender<'a> {
    /// Create a recommender over the given meals
    #[must_use]
    pub const fn new(meals: &'a [MealDatabaseEntry]) -> Self {
        Self { meals }
    }

    /// Meals this recommender draws from
    #[must_use]
    pub const fn meals(&self) -> &'a [MealDatabaseEntry] {
        self.meals
    }

    /// Recommend up to three distinct meals for the remaining budget
    #[must_use]
    pub fn recommend(
        &self,
        remaining_calories: f64,
        remaining_protein: f64,
        preferred_category: Option<MealCategory>,
    ) -> RecommendationResult {
        recommend_meals(
            self.meals,
            remaining_calories,
            remaining_protein,
            preferred_category,
        )
    }
}

/// Recommend meals from any slice of meal records.
///
/// Deterministic for a given slice; ties keep dataset order.
#[must_use]
pub fn recommend_meals(
    meals: &[MealDatabaseEntry],
    remaining_calories: f64,
    remaining_protein: f64,
    preferred_category: Option<MealCategory>,
) -> RecommendationResult {
    let (eligible, tier) = eligible_meals(meals, remaining_calories, preferred_category);

    let protein_pick = best_excluding(&eligible, protein_score, &[]);
    let fill_pick = best_excluding(&eligible, fill_score, &picked_ids(&[protein_pick]));
    let quick_pick = best_excluding(
        &eligible,
        quick_score,
        &picked_ids(&[protein_pick, fill_pick]),
    );

    debug!(
        remaining_calories,
        remaining_protein,
        eligible = eligible.len(),
        ?tier,
        "Computed meal recommendations"
    );

    RecommendationResult {
        protein_pick: protein_pick.cloned(),
        fill_pick: fill_pick.cloned(),
        quick_pick: quick_pick.cloned(),
        remaining_calories,
        remaining_protein,
        eligible_count: eligible.len(),
        tier,
    }
}

/// Select the eligible set using progressive relaxation
fn eligible_meals(
    meals: &[MealDatabaseEntry],
    remaining_calories: f64,
    preferred_category: Option<MealCategory>,
) -> (Vec<&MealDatabaseEntry>, EligibilityTier) {
    let upper = remaining_calories + CALORIE_BUFFER;
    let lower = (remaining_calories - LOWER_WINDOW_BUFFERS * CALORIE_BUFFER).max(0.0);
    let in_category = |meal: &MealDatabaseEntry| match preferred_category {
        Some(category) => meal.category == category,
        None => true,
    };

    let primary: Vec<&MealDatabaseEntry> = meals
        .iter()
        .filter(|&m| in_category(m) && m.calories >= lower && m.calories <= upper)
        .collect();
    if primary.len() >= MIN_ELIGIBLE_MEALS {
        return (primary, EligibilityTier::Primary);
    }

    let relaxed: Vec<&MealDatabaseEntry> = meals
        .iter()
        .filter(|&m| in_category(m) && m.calories <= upper)
        .collect();
    if relaxed.len() >= MIN_ELIGIBLE_MEALS {
        return (relaxed, EligibilityTier::Relaxed);
    }

    let mut lowest: Vec<&MealDatabaseEntry> = meals.iter().collect();
    lowest.sort_by(|a, b| a.calories.total_cmp(&b.calories));
    lowest.truncate(FALLBACK_MEAL_COUNT);
    (lowest, EligibilityTier::LowestCalorie)
}

/// Protein density plus absolute protein; meals without calories rank last
fn protein_score(meal: &MealDatabaseEntry) -> f64 {
    if meal.calories <= 0.0 {
        return f64::NEG_INFINITY;
    }
    (meal.protein / meal.calories).mul_add(100.0, meal.protein)
}

fn fill_score(meal: &MealDatabaseEntry) -> f64 {
    let mut score = meal.volume_score * VOLUME_SCORE_WEIGHT;
    if meal.has_tag(tags::FILLING) {
        score += FILLING_TAG_BONUS;
    }
    if meal.has_tag(tags::FIBER) {
        score += FIBER_TAG_BONUS;
    }
    score
}

fn quick_score(meal: &MealDatabaseEntry) -> f64 {
    let mut score =
        (QUICK_PREP_BASELINE_MINUTES - f64::from(meal.prep_time)) * QUICK_PREP_MINUTE_WEIGHT;
    if meal.has_tag(tags::QUICK) {
        score += QUICK_TAG_BONUS;
    }
    if meal.has_tag(tags::PORTABLE) {
        score += PORTABLE_TAG_BONUS;
    }
    score
}

/// Rank meals by score, highest first; the sort is stable so ties keep input order
fn rank<'a>(
    eligible: &[&'a MealDatabaseEntry],
    score: fn(&MealDatabaseEntry) -> f64,
) -> Vec<ScoredMeal<'a>> {
    let mut scored: Vec<ScoredMeal<'a>> = eligible
        .iter()
        .map(|&meal| ScoredMeal::new(meal, score(meal)))
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Highest-scoring meal not already picked, falling back to the overall best
fn best_excluding<'a>(
    eligible: &[&'a MealDatabaseEntry],
    score: fn(&MealDatabaseEntry) -> f64,
    excluded_ids: &[&str],
) -> Option<&'a MealDatabaseEntry> {
    let ranked = rank(eligible, score);
    ranked
        .iter()
        .find(|scored| !excluded_ids.contains(&scored.meal.id.as_str()))
        .or_else(|| ranked.first())
        .map(|scored| scored.meal)
}

fn picked_ids<'a>(picks: &[Option<&'a MealDatabaseEntry>]) -> Vec<&'a str> {
    picks.iter().flatten().map(|&meal| meal.id.as_str()).collect()
}

/// Project a meal into a loggable food entry.
///
/// The identifier embeds the logging time so logging the same meal twice
/// produces two distinct entries.
#[must_use]
pub fn meal_to_food(meal: &MealDatabaseEntry, now: DateTime<Utc>) -> LoggableFood {
    LoggableFood {
        id: format!("{}-{}", meal.id, now.timestamp_millis()),
        source_meal_id: meal.id.clone(),
        name: meal.name.clone(),
        calories: meal.calories,
        protein: meal.protein,
        carbs: meal.carbs,
        fat: meal.fat,
        serving_size: meal.serving_size,
        serving_unit: meal.serving_unit.clone(),
        category: RECOMMENDED_CATEGORY.to_owned(),
        per_serving: true,
        logged_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, calories: f64, protein: f64) -> MealDatabaseEntry {
        MealDatabaseEntry {
            id: id.to_owned(),
            name: id.to_owned(),
            category: MealCategory::Lunch,
            calories,
            protein,
            carbs: 10.0,
            fat: 5.0,
            prep_time: 10,
            volume_score: 5.0,
            tags: Vec::new(),
            serving_size: 1.0,
            serving_unit: "serving".to_owned(),
            description: None,
        }
    }

    #[test]
    fn test_protein_score_prefers_density() {
        let lean = meal("lean", 200.0, 30.0);
        let heavy = meal("heavy", 800.0, 35.0);
        assert!(protein_score(&lean) > protein_score(&heavy));
    }

    #[test]
    fn test_zero_calorie_meal_ranks_last_for_protein() {
        let water = meal("water", 0.0, 0.0);
        assert!(protein_score(&water).is_infinite());
        assert!(protein_score(&water) < protein_score(&meal("rice", 200.0, 4.0)));
    }

    #[test]
    fn test_quick_score_formula() {
        let mut wrap = meal("wrap", 400.0, 20.0);
        wrap.prep_time = 5;
        wrap.tags = vec!["quick".to_owned(), "portable".to_owned()];
        assert!((quick_score(&wrap) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_score_formula() {
        let mut oats = meal("oats", 350.0, 12.0);
        oats.volume_score = 7.0;
        oats.tags = vec!["Filling".to_owned(), "fiber".to_owned()];
        assert!((fill_score(&oats) - 105.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let meals = [meal("a", 300.0, 20.0), meal("b", 300.0, 20.0)];
        let eligible: Vec<&MealDatabaseEntry> = meals.iter().collect();
        let best = best_excluding(&eligible, protein_score, &[]);
        assert_eq!(best.map(|m| m.id.as_str()), Some("a"));
    }
}
