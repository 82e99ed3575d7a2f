//! Greedy bullet accumulation
//!
//! Sentences are folded into bullets by an explicit state machine. The state
//! is a [`BulletState`] (fragments plus running word count); each sentence
//! advances it through [`BulletState::advance`], which may commit zero, one
//! or two bullets along the way.
//!
//! Rules, in order, for each sentence:
//!
//! 1. Concluding sentences are dropped outright.
//! 2. A sentence that is unterminated, short, or arrives while the bullet is
//!    still under the minimum is a forced continuation.
//! 3. Otherwise the current bullet is committed first when the sentence would
//!    push it over the maximum, or when the bullet is already full enough and
//!    the sentence opens with a transition or is long on its own.
//! 4. The sentence is appended; reaching the maximum commits immediately.
//!
//! Paragraph ends commit bullets that reached the minimum. The end of input
//! commits whatever is left.

use crate::extract::Sentence;
use crate::rules::RuleSet;
use crate::text;
use smallvec::SmallVec;

/// Bullets emitted by a single transition (at most two)
pub type Emitted = SmallVec<[String; 2]>;

/// In-progress bullet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletState {
    fragments: SmallVec<[String; 4]>,
    words: usize,
}

/// Outcome of feeding one sentence to a [`BulletState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the sentence
    pub state: BulletState,
    /// Bullets committed while handling the sentence, in order
    pub emitted: Emitted,
    /// Whether the sentence was dropped as a conclusion
    pub skipped: bool,
}

impl BulletState {
    /// Empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Running word count
    pub fn words(&self) -> usize {
        self.words
    }

    /// Whether any fragment has been accumulated
    pub fn has_content(&self) -> bool {
        !self.fragments.is_empty()
    }

    /// Feed one sentence
    pub fn advance(self, sentence: &Sentence, rules: &RuleSet) -> Transition {
        if rules.is_conclusion(&sentence.text) {
            log::trace!("skipping concluding sentence: {:?}", sentence.text);
            return Transition {
                state: self,
                emitted: Emitted::new(),
                skipped: true,
            };
        }

        let thresholds = rules.thresholds();
        let mut state = self;
        let mut emitted = Emitted::new();

        let forced = !sentence.terminated
            || thresholds.is_short(sentence.words)
            || state.words < thresholds.min_words;

        if !forced && state.has_content() {
            let overflows = state.words + sentence.words > thresholds.max_words;
            let breaks = state.words >= thresholds.min_words
                && (rules.starts_transition(&sentence.text) || thresholds.is_long(sentence.words));

            if overflows || breaks {
                let (next, bullet) = state.commit();
                state = next;
                emitted.extend(bullet);
            }
        }

        state.fragments.push(sentence.text.clone());
        state.words += sentence.words;

        if state.words >= thresholds.max_words {
            let (next, bullet) = state.commit();
            state = next;
            emitted.extend(bullet);
        }

        Transition {
            state,
            emitted,
            skipped: false,
        }
    }

    /// Close a paragraph: commit if the bullet reached the minimum
    pub fn close_paragraph(self, rules: &RuleSet) -> (Self, Option<String>) {
        if self.words >= rules.thresholds().min_words {
            self.commit()
        } else {
            (self, None)
        }
    }

    /// Commit the bullet, returning the reset state and the finished bullet
    ///
    /// Fragments are joined, normalized and terminated. A result without a
    /// single word is dropped.
    pub fn commit(self) -> (Self, Option<String>) {
        if self.fragments.is_empty() {
            return (Self::default(), None);
        }

        let joined = self.fragments.join(" ");
        let bullet = text::ensure_terminal(&text::normalize(&joined));

        if text::word_count(&bullet) == 0 {
            log::trace!("dropping empty bullet: {joined:?}");
            return (Self::default(), None);
        }

        log::trace!("committed bullet ({} words)", self.words);
        (Self::default(), Some(bullet))
    }
}

/// Result of accumulating a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulated {
    /// Committed bullets in source order
    pub bullets: Vec<String>,
    /// Sentences considered
    pub sentences: usize,
    /// Sentences dropped as conclusions
    pub skipped: usize,
}

/// Fold every paragraph's sentences into bullets
pub fn accumulate(paragraphs: &[Vec<Sentence>], rules: &RuleSet) -> Accumulated {
    let mut result = Accumulated::default();
    let mut state = BulletState::new();

    for paragraph in paragraphs {
        for sentence in paragraph {
            let transition = state.advance(sentence, rules);
            state = transition.state;
            result.sentences += 1;
            result.skipped += usize::from(transition.skipped);
            result.bullets.extend(transition.emitted);
        }

        let (next, bullet) = state.close_paragraph(rules);
        state = next;
        result.bullets.extend(bullet);
    }

    // Only forced commit that may be under the minimum
    let (_, bullet) = state.commit();
    result.bullets.extend(bullet);

    result
}
