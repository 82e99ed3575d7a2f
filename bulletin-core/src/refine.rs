//! Post-merge refinement
//!
//! Accumulation can leave a small bullet behind, typically the tail of a
//! paragraph or of the whole input. This pass folds any bullet under the
//! merge threshold into the bullet before it. The first bullet has nothing
//! before it and is kept as-is.

use crate::rules::RuleSet;
use crate::text;

/// Refined bullets and how many were folded away
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refined {
    /// Final bullets
    pub bullets: Vec<String>,
    /// Bullets merged into their predecessor
    pub merged: usize,
}

/// Fold undersized bullets into their predecessor
pub fn refine(bullets: Vec<String>, rules: &RuleSet) -> Refined {
    let thresholds = rules.thresholds();
    let mut refined = Refined::default();

    for bullet in bullets {
        let words = text::word_count(&bullet);

        match refined.bullets.last_mut() {
            Some(previous) if thresholds.is_undersized(words) => {
                log::trace!("merging {words}-word bullet into its predecessor");
                *previous = merge(previous, &bullet);
                refined.merged += 1;
            }
            _ => refined.bullets.push(bullet),
        }
    }

    refined
}

fn merge(previous: &str, bullet: &str) -> String {
    text::ensure_terminal(&text::normalize(&format!("{previous} {bullet}")))
}
