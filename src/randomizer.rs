//! Exam randomization.
//!
//! Shuffles the order of questions and, within each question, the order
//! of its choices, while keeping the answer index pointing at the
//! correct choice text. Both shuffles are uniform Fisher-Yates via
//! [`SliceRandom::shuffle`], driven by an injected random source so
//! tests can seed it.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::models::Question;

/// Return a shuffled copy of the question bank.
///
/// The input is left untouched. Every question in the copy also has its
/// choices shuffled independently via [`shuffle_choices`].
pub fn shuffle_bank<R: Rng>(questions: &[Question], rng: &mut R) -> Vec<Question> {
    let mut shuffled = questions.to_vec();
    shuffled.shuffle(rng);
    for question in &mut shuffled {
        shuffle_choices(question, rng);
    }
    shuffled
}

/// Shuffle a question's choices in place, re-deriving the answer index.
///
/// Questions with an unset or out-of-range answer index are skipped with
/// a warning and left unmodified; one bad row never aborts the batch.
/// If several choices share the correct answer's text, the answer index
/// lands on the first match in the shuffled order.
pub fn shuffle_choices<R: Rng>(question: &mut Question, rng: &mut R) {
    let Some(answer) = question.answer else {
        warn!(
            prompt = %question.prompt,
            "question has no answer index, leaving choices unshuffled"
        );
        return;
    };
    let Some(correct) = question.choices.get(answer).cloned() else {
        warn!(
            prompt = %question.prompt,
            answer,
            choices = question.choices.len(),
            "answer index out of range, leaving choices unshuffled"
        );
        return;
    };

    question.choices.shuffle(rng);
    question.answer = question
        .choices
        .iter()
        .position(|choice| *choice == correct);
}
