//! Answer analysis: species affinity scores and desired traits.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{round2, Answers, Quiz};
use crate::species::Species;

// ---------------------------------------------------------------------------
// Species scores
// ---------------------------------------------------------------------------

/// Accumulated affinity per recommendable species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesScores {
    pub dog: f64,
    pub cat: f64,
    pub bird: f64,
    pub rabbit: f64,
}

impl SpeciesScores {
    pub fn get(&self, species: Species) -> f64 {
        match species {
            Species::Dog => self.dog,
            Species::Cat => self.cat,
            Species::Bird => self.bird,
            Species::Rabbit => self.rabbit,
            Species::Other => 0.0,
        }
    }

    fn slot(&mut self, species: Species) -> Option<&mut f64> {
        match species {
            Species::Dog => Some(&mut self.dog),
            Species::Cat => Some(&mut self.cat),
            Species::Bird => Some(&mut self.bird),
            Species::Rabbit => Some(&mut self.rabbit),
            Species::Other => None,
        }
    }

    /// Add points to a species. Non-scorable species are ignored.
    pub fn add(&mut self, species: Species, points: f64) {
        if let Some(score) = self.slot(species) {
            *score += points;
        }
    }

    pub fn max(&self) -> f64 {
        Species::SCORABLE
            .iter()
            .map(|s| self.get(*s))
            .fold(0.0, f64::max)
    }

    /// Rescale so the best species scores 100. All-zero scores are unchanged.
    pub fn normalize(&mut self) {
        let max = self.max();
        if max <= 0.0 {
            return;
        }
        for species in Species::SCORABLE {
            if let Some(score) = self.slot(species) {
                *score = round2(*score / max * 100.0);
            }
        }
    }

    /// Species with the highest score; ties go to the earliest species in
    /// [`Species::SCORABLE`] order, so all-zero scores yield `Dog`.
    pub fn top(&self) -> Species {
        let mut best = Species::SCORABLE[0];
        for species in Species::SCORABLE {
            if self.get(species) > self.get(best) {
                best = species;
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Trait preferences
// ---------------------------------------------------------------------------

/// Value tag attached to a preferred trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitValue {
    Binary,
}

/// A single `{trait, value}` entry as exchanged with clients and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitPreference {
    #[serde(rename = "trait")]
    pub name: String,
    pub value: TraitValue,
}

/// Ordered set of desired traits keyed by name.
///
/// Inserting an existing name overwrites its value in place (last write
/// wins, first position kept). Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitPreferences(IndexMap<String, TraitValue>);

impl TraitPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TraitValue) {
        self.0.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Trait names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<TraitPreference> {
        self.0
            .iter()
            .map(|(name, value)| TraitPreference {
                name: name.clone(),
                value: *value,
            })
            .collect()
    }
}

impl FromIterator<TraitPreference> for TraitPreferences {
    fn from_iter<I: IntoIterator<Item = TraitPreference>>(iter: I) -> Self {
        let mut prefs = TraitPreferences::new();
        for pref in iter {
            prefs.insert(pref.name, pref.value);
        }
        prefs
    }
}

impl Serialize for TraitPreferences {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TraitPreferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<TraitPreference>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Outcome of analyzing one set of quiz answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub recommended_species: Species,
    /// Breed recommendation is not implemented; always `None`.
    pub recommended_breed: Option<String>,
    pub trait_preferences: TraitPreferences,
    pub species_scores: SpeciesScores,
}

impl Quiz {
    /// Score answers against the rule table.
    ///
    /// Pure function of `answers` and the configured rules. Answers for
    /// unknown sections or questions are ignored.
    pub fn analyze(&self, answers: &Answers) -> Analysis {
        let mut scores = SpeciesScores::default();
        let mut traits = TraitPreferences::new();

        for rule in self.rules {
            let Some(value) = answers
                .get(rule.section)
                .and_then(|section| section.as_object())
                .and_then(|section| section.get(rule.question))
            else {
                continue;
            };
            if !rule.matches(value) {
                continue;
            }

            let weight = self.definition.weight(rule.section, rule.question);
            for delta in rule.effect.species {
                scores.add(delta.species, delta.resolve(weight));
            }
            for name in rule.effect.traits {
                traits.insert(*name, TraitValue::Binary);
            }
        }

        scores.normalize();

        Analysis {
            recommended_species: scores.top(),
            recommended_breed: None,
            trait_preferences: traits,
            species_scores: scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::quiz::rules::{AnswerRule, RuleEffect, Scaling, SpeciesDelta};
    use crate::quiz::QuizDefinition;

    fn answers(value: serde_json::Value) -> Answers {
        value.as_object().cloned().expect("answers must be an object")
    }

    #[test]
    fn large_house_and_very_active_recommends_dog() {
        let quiz = Quiz::standard();
        let analysis = quiz.analyze(&answers(json!({
            "living_situation": {"living_space": "house_large"},
            "lifestyle": {"activity_level": "very_active"},
        })));

        assert_eq!(analysis.recommended_species, Species::Dog);
        assert_eq!(
            analysis.species_scores,
            SpeciesScores {
                dog: 100.0,
                cat: 0.0,
                bird: 0.0,
                rabbit: 0.0
            }
        );
        assert_eq!(analysis.trait_preferences.len(), 2);
        assert!(analysis.trait_preferences.contains("High Energy"));
        assert!(analysis.trait_preferences.contains("Easily Trained"));
        assert_eq!(analysis.recommended_breed, None);
    }

    #[test]
    fn raw_scores_are_weighted_before_normalizing() {
        // dog: 2 * 2.0 (living_space) = 4.0, cat: 1.5 unweighted (sedentary)
        let quiz = Quiz::standard();
        let analysis = quiz.analyze(&answers(json!({
            "living_situation": {"living_space": "house_large"},
            "lifestyle": {"activity_level": "sedentary"},
        })));

        assert_eq!(analysis.species_scores.dog, 100.0);
        assert_eq!(analysis.species_scores.cat, 37.5);
        assert_eq!(analysis.recommended_species, Species::Dog);
    }

    #[test]
    fn small_apartment_and_sedentary_recommends_cat() {
        let quiz = Quiz::standard();
        let analysis = quiz.analyze(&answers(json!({
            "living_situation": {"living_space": "apartment_small"},
            "lifestyle": {"activity_level": "sedentary"},
        })));

        assert_eq!(analysis.recommended_species, Species::Cat);
        assert_eq!(analysis.species_scores.cat, 100.0);
        assert_eq!(
            analysis.trait_preferences.names(),
            vec!["Apartment Friendly".to_string(), "Calm".to_string()]
        );
    }

    #[test]
    fn empty_answers_fall_back_to_dog_with_zero_scores() {
        let analysis = Quiz::standard().analyze(&Answers::new());

        assert_eq!(analysis.recommended_species, Species::Dog);
        assert_eq!(analysis.species_scores, SpeciesScores::default());
        assert!(analysis.trait_preferences.is_empty());
    }

    #[test]
    fn trait_only_rule_leaves_scores_at_zero() {
        let analysis = Quiz::standard().analyze(&answers(json!({
            "lifestyle": {"activity_level": "moderate"},
        })));

        assert_eq!(analysis.species_scores.max(), 0.0);
        assert_eq!(analysis.recommended_species, Species::Dog);
        assert!(analysis.trait_preferences.contains("Easily Trained"));
    }

    #[test]
    fn unknown_answers_and_non_object_sections_are_ignored() {
        let analysis = Quiz::standard().analyze(&answers(json!({
            "living_situation": "house_large",
            "lifestyle": {"activity_level": "couch"},
            "extra": {"whatever": "x"},
        })));

        assert_eq!(analysis.species_scores, SpeciesScores::default());
        assert!(analysis.trait_preferences.is_empty());
    }

    #[test]
    fn tie_goes_to_earliest_species() {
        static TIE_RULES: &[AnswerRule] = &[AnswerRule {
            section: "lifestyle",
            question: "activity_level",
            answer: "moderate",
            effect: RuleEffect {
                species: &[
                    SpeciesDelta {
                        species: Species::Rabbit,
                        points: 1.0,
                        scaling: Scaling::Unweighted,
                    },
                    SpeciesDelta {
                        species: Species::Cat,
                        points: 1.0,
                        scaling: Scaling::Unweighted,
                    },
                ],
                traits: &[],
            },
        }];
        let quiz = Quiz::with_rules(QuizDefinition::standard(), TIE_RULES);
        let analysis = quiz.analyze(&answers(json!({
            "lifestyle": {"activity_level": "moderate"},
        })));

        assert_eq!(analysis.species_scores.cat, 100.0);
        assert_eq!(analysis.species_scores.rabbit, 100.0);
        assert_eq!(analysis.recommended_species, Species::Cat);
    }

    #[test]
    fn analysis_is_deterministic() {
        let quiz = Quiz::standard();
        let input = answers(json!({
            "living_situation": {"living_space": "house_large"},
            "lifestyle": {"activity_level": "sedentary"},
        }));
        assert_eq!(quiz.analyze(&input), quiz.analyze(&input));
    }

    #[test]
    fn normalized_maximum_is_one_hundred() {
        let mut scores = SpeciesScores {
            dog: 3.0,
            cat: 1.0,
            bird: 0.0,
            rabbit: 2.0,
        };
        scores.normalize();
        assert_eq!(scores.max(), 100.0);
        assert_eq!(scores.cat, 33.33);
        assert_eq!(scores.rabbit, 66.67);
    }

    #[test]
    fn repeated_trait_keeps_first_position() {
        let mut prefs = TraitPreferences::new();
        prefs.insert("Calm", TraitValue::Binary);
        prefs.insert("High Energy", TraitValue::Binary);
        prefs.insert("Calm", TraitValue::Binary);

        assert_eq!(prefs.names(), vec!["Calm".to_string(), "High Energy".to_string()]);
    }

    #[test]
    fn trait_preferences_survive_storage_format() {
        let analysis = Quiz::standard().analyze(&answers(json!({
            "living_situation": {"living_space": "house_large"},
            "lifestyle": {"activity_level": "sedentary"},
        })));

        let stored = serde_json::to_value(&analysis.trait_preferences).unwrap();
        assert_eq!(stored[0]["trait"], "High Energy");
        assert_eq!(stored[0]["value"], "binary");

        let reloaded: TraitPreferences = serde_json::from_value(stored).unwrap();
        assert_eq!(reloaded, analysis.trait_preferences);
    }
}
