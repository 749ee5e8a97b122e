//! Both predictions for one annotated sequence.

use kf_structure::DotBracketVec;
use kf_structure::base_pair_distance;

use crate::FoldConfig;
use crate::FoldError;
use crate::Recurrence;
use crate::fold;
use crate::fold_with_knots;
use crate::parse_sequence;

/// The two structures predicted for one sequence, and how far apart they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub length: usize,
    pub standard: DotBracketVec,
    pub knot_aware: DotBracketVec,
    /// Base-pair distance between `standard` and `knot_aware`.
    pub distance: usize,
}

/// Settings of the plain and the pseudoknot-preserving prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predictor {
    pub standard: FoldConfig,
    pub knot_aware: FoldConfig,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            standard: FoldConfig::standard(),
            knot_aware: FoldConfig::knot_aware(),
        }
    }
}

impl Predictor {
    /// Apply the same minimum loop size to both predictions.
    pub fn with_min_loop(mut self, min_loop: usize) -> Self {
        self.standard = self.standard.with_min_loop(min_loop);
        self.knot_aware = self.knot_aware.with_min_loop(min_loop);
        self
    }

    /// Apply the same recurrence to both predictions.
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.standard = self.standard.with_recurrence(recurrence);
        self.knot_aware = self.knot_aware.with_recurrence(recurrence);
        self
    }

    pub fn predict(&self, sequence: &str, structure: &str) -> Result<Prediction, FoldError> {
        let seq = parse_sequence(sequence)?;
        let annotation = DotBracketVec::try_from(structure)?;
        if annotation.len() != seq.len() {
            return Err(FoldError::LengthMismatch {
                sequence: seq.len(),
                structure: annotation.len(),
            });
        }

        let standard = fold(&seq, &self.standard)?;
        let knot_aware = fold_with_knots(&seq, &annotation, &self.knot_aware)?;
        let distance = base_pair_distance(&standard.to_string(), &knot_aware.to_string());
        Ok(Prediction {
            length: seq.len(),
            standard,
            knot_aware,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use kf_structure::DotBracket;
    use kf_structure::PairSet;
    use kf_structure::knot_spans;
    use crate::Base;
    use crate::ScoreMatrix;
    use crate::TieBreak;
    use crate::can_pair;
    use crate::fold_pairs;

    fn random_sequence(rng: &mut StdRng, length: usize) -> String {
        (0..length).map(|_| ['A', 'C', 'G', 'U'][rng.random_range(0..4)]).collect()
    }

    #[test]
    fn test_predict_example() {
        let predictor = Predictor::default();
        let p = predictor.predict("GGGAAAUCCGGGAAAUCC", "..[[..]]..........").unwrap();
        assert_eq!(p.length, 18);
        assert_eq!(p.standard.to_string(), ".((..(((..))...)))");
        assert_eq!(p.knot_aware.to_string(), "..[[..]]..(((..)))");
        assert_eq!(p.distance, 8);
    }

    #[test]
    fn test_predict_bifurcating() {
        let predictor = Predictor::default().with_recurrence(Recurrence::Bifurcating);
        let p = predictor.predict("GGGAAAUCCGGGAAAUCC", "..................").unwrap();
        assert_eq!(p.standard.to_string(), ".(((..))).(((..)))");
        assert_eq!(p.knot_aware, p.standard);
        assert_eq!(p.distance, 0);
    }

    #[test]
    fn test_predict_input_mismatch() {
        let predictor = Predictor::default();
        let err = predictor.predict("GGGAAAUCC", "...").unwrap_err();
        assert!(err.is_input_mismatch());
        assert!(predictor.predict("", "").unwrap_err().is_input_mismatch());
        assert!(!predictor.predict("GGG", "(.(").unwrap_err().is_input_mismatch());
    }

    #[test]
    fn test_random_folds_are_valid_nested_structures() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..200 {
            let length = rng.random_range(1..60);
            let seq = crate::parse_sequence(&random_sequence(&mut rng, length)).unwrap();
            let min_loop = round % 5;
            for tie_break in [TieBreak::PreferLeftUnpaired, TieBreak::PreferRightUnpaired] {
                for recurrence in [Recurrence::Adjacent, Recurrence::Bifurcating] {
                    let config = FoldConfig::standard()
                        .with_min_loop(min_loop)
                        .with_tie_break(tie_break)
                        .with_recurrence(recurrence);
                    let pairs = fold_pairs(&seq, &config).unwrap();

                    let mut used = vec![false; length];
                    for p in &pairs {
                        let (i, j) = (p.i() as usize, p.j() as usize);
                        assert!(can_pair(seq[i], seq[j]));
                        assert!(j - i >= min_loop);
                        assert!(!used[i] && !used[j]);
                        used[i] = true;
                        used[j] = true;
                    }
                    for a in &pairs {
                        for b in &pairs {
                            assert!(!a.crosses(b), "{a:?} crosses {b:?}");
                        }
                    }
                    let score = ScoreMatrix::fill(&seq, &config, &[]).score();
                    assert_eq!(pairs.len(), score);
                    assert_eq!(fold_pairs(&seq, &config).unwrap(), pairs);
                }
            }
        }
    }

    #[test]
    fn test_bifurcating_never_scores_lower() {
        let mut rng = StdRng::seed_from_u64(7);
        let adjacent = FoldConfig::standard();
        let full = adjacent.with_recurrence(Recurrence::Bifurcating);
        for _ in 0..100 {
            let length = rng.random_range(1..50);
            let seq: Vec<Base> = crate::parse_sequence(&random_sequence(&mut rng, length)).unwrap();
            let a = ScoreMatrix::fill(&seq, &adjacent, &[]).score();
            let b = ScoreMatrix::fill(&seq, &full, &[]).score();
            assert!(a <= b);
        }
    }

    /// Hairpin-shaped annotation with an embedded knot at a random place.
    fn random_annotation(rng: &mut StdRng, length: usize) -> String {
        let mut s = vec!['.'; length];
        if length >= 8 {
            let start = rng.random_range(0..length - 7);
            let end = rng.random_range(start + 7..length);
            s[start] = '(';
            s[start + 1] = '[';
            s[end - 1] = ')';
            s[end] = ']';
        }
        s.into_iter().collect()
    }

    #[test]
    fn test_random_knot_aware_predictions_keep_spans() {
        let mut rng = StdRng::seed_from_u64(2024);
        let predictor = Predictor::default();
        for _ in 0..200 {
            let length = rng.random_range(1..60);
            let sequence = random_sequence(&mut rng, length);
            let structure = random_annotation(&mut rng, length);
            let p = predictor.predict(&sequence, &structure).unwrap();

            let annotation = DotBracketVec::try_from(structure.as_str()).unwrap();
            let spans = knot_spans(&annotation).unwrap();
            assert_eq!(p.knot_aware.len(), length);
            for span in &spans {
                assert_eq!(p.knot_aware[span.clone()], annotation[span.clone()]);
            }
            for (idx, (&new, &old)) in p.knot_aware.iter().zip(annotation.iter()).enumerate() {
                if spans.iter().any(|s| s.contains(&idx)) {
                    assert_eq!(new, old);
                } else {
                    assert!(matches!(new, DotBracket::Unpaired | DotBracket::Open | DotBracket::Close));
                }
            }

            let s = p.standard.to_string();
            assert_eq!(base_pair_distance(&s, &s), 0);
            assert_eq!(
                p.distance,
                PairSet::from_parentheses(&s)
                    .symmetric_difference_len(&PairSet::from_parentheses(&p.knot_aware.to_string()))
            );
        }
    }
}
