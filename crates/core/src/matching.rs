//! Ranking of candidate pets against a quiz recommendation.

use std::cmp::Ordering;

use crate::species::Species;

/// A pet that can be ranked by trait overlap.
pub trait MatchCandidate {
    fn name(&self) -> &str;
    /// Stored species value; compared after canonicalization.
    fn species(&self) -> &str;
    fn trait_names(&self) -> Vec<&str>;
}

/// A candidate paired with its overlap count.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch<T> {
    pub candidate: T,
    pub matching_trait_count: i64,
}

/// Number of the candidate's traits whose name appears in `desired`.
///
/// Exact, case-sensitive name comparison.
pub fn matching_trait_count<T: MatchCandidate>(candidate: &T, desired: &[String]) -> i64 {
    candidate
        .trait_names()
        .into_iter()
        .filter(|name| desired.iter().any(|d| d == name))
        .count() as i64
}

/// Rank candidates for `species` by trait overlap with `desired`.
///
/// - Candidates of another species are dropped (stored species values are
///   canonicalized before comparison).
/// - When `desired` is non-empty, candidates with no overlapping trait are
///   dropped.
/// - Results are ordered by overlap descending, then name ascending.
pub fn rank_matches<T: MatchCandidate>(
    candidates: Vec<T>,
    species: Species,
    desired: &[String],
) -> Vec<RankedMatch<T>> {
    let mut ranked: Vec<RankedMatch<T>> = candidates
        .into_iter()
        .filter(|c| Species::parse(c.species()).is_ok_and(|s| s == species))
        .map(|candidate| {
            let matching_trait_count = matching_trait_count(&candidate, desired);
            RankedMatch {
                candidate,
                matching_trait_count,
            }
        })
        .filter(|m| desired.is_empty() || m.matching_trait_count > 0)
        .collect();

    ranked.sort_by(compare_matches);
    ranked
}

fn compare_matches<T: MatchCandidate>(a: &RankedMatch<T>, b: &RankedMatch<T>) -> Ordering {
    b.matching_trait_count
        .cmp(&a.matching_trait_count)
        .then_with(|| a.candidate.name().cmp(b.candidate.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Candidate {
        name: &'static str,
        species: &'static str,
        traits: Vec<&'static str>,
    }

    impl MatchCandidate for Candidate {
        fn name(&self) -> &str {
            self.name
        }

        fn species(&self) -> &str {
            self.species
        }

        fn trait_names(&self) -> Vec<&str> {
            self.traits.clone()
        }
    }

    fn pet(name: &'static str, species: &'static str, traits: &[&'static str]) -> Candidate {
        Candidate {
            name,
            species,
            traits: traits.to_vec(),
        }
    }

    fn desired(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn names<T: MatchCandidate>(ranked: &[RankedMatch<T>]) -> Vec<String> {
        ranked.iter().map(|m| m.candidate.name().to_string()).collect()
    }

    #[test]
    fn orders_by_overlap_then_name() {
        let ranked = rank_matches(
            vec![
                pet("Rex", "dog", &["High Energy"]),
                pet("Buddy", "dog", &["High Energy", "Easily Trained"]),
                pet("Ace", "dog", &["Easily Trained"]),
            ],
            Species::Dog,
            &desired(&["High Energy", "Easily Trained"]),
        );

        assert_eq!(names(&ranked), vec!["Buddy", "Ace", "Rex"]);
        assert_eq!(ranked[0].matching_trait_count, 2);
        assert_eq!(ranked[1].matching_trait_count, 1);
    }

    #[test]
    fn drops_zero_overlap_when_traits_requested() {
        let ranked = rank_matches(
            vec![pet("Rex", "dog", &["Calm"]), pet("Max", "dog", &["High Energy"])],
            Species::Dog,
            &desired(&["High Energy"]),
        );

        assert_eq!(names(&ranked), vec!["Max"]);
    }

    #[test]
    fn keeps_all_species_matches_when_no_traits_requested() {
        let ranked = rank_matches(
            vec![pet("Zed", "dog", &[]), pet("Abe", "dog", &["Calm"])],
            Species::Dog,
            &[],
        );

        assert_eq!(names(&ranked), vec!["Abe", "Zed"]);
        assert!(ranked.iter().all(|m| m.matching_trait_count == 0));
    }

    #[test]
    fn never_returns_other_species() {
        let ranked = rank_matches(
            vec![
                pet("Tom", "cat", &["High Energy"]),
                pet("Rex", "Dog", &["High Energy"]),
                pet("Odd", "lizard", &["High Energy"]),
            ],
            Species::Dog,
            &desired(&["High Energy"]),
        );

        assert_eq!(names(&ranked), vec!["Rex"]);
    }

    #[test]
    fn trait_names_match_exactly() {
        let candidate = pet("Rex", "dog", &["high energy", "Calm"]);
        assert_eq!(matching_trait_count(&candidate, &desired(&["High Energy"])), 0);
        assert_eq!(matching_trait_count(&candidate, &desired(&["Calm"])), 1);
    }

    #[test]
    fn empty_candidate_list_yields_no_matches() {
        let ranked: Vec<RankedMatch<Candidate>> =
            rank_matches(Vec::new(), Species::Cat, &desired(&["Calm"]));
        assert!(ranked.is_empty());
    }
}
