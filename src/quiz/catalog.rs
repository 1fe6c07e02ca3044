use log::{debug, info};

use super::{
    samples, AnswerRecord, Question, Quiz, QuizError, QuizId, QuizResult, OPTION_COUNT,
};

/// Owns every quiz, the id counter and the most recent scored result.
///
/// Constructed once at startup and handed to whoever needs it; tests build
/// their own fresh instance so nothing leaks between cases.
#[derive(Debug)]
pub struct QuizCatalog {
    quizzes: Vec<Quiz>,
    next_id: QuizId,
    current_result: Option<QuizResult>,
}

impl QuizCatalog {
    /// A catalog pre-loaded with the bundled sample quizzes. The id counter
    /// starts one past the highest seeded id, so user quizzes never collide
    /// with the samples.
    pub fn new() -> Self {
        let quizzes = samples::sample_quizzes();
        let next_id = quizzes.iter().map(|quiz| quiz.id).max().unwrap_or(0) + 1;
        Self {
            quizzes,
            next_id,
            current_result: None,
        }
    }

    /// Stores a new quiz under the next free id and returns it. Titles,
    /// question texts and options must be non-empty and the correct-option
    /// index must point at one of the four options; an empty question list is
    /// the caller's problem, not ours.
    pub fn create_quiz(
        &mut self,
        title: &str,
        questions: Vec<Question>,
        created_by: &str,
    ) -> Result<Quiz, QuizError> {
        validate(title, &questions)?;

        let quiz = Quiz::new(
            self.next_id,
            title.to_string(),
            created_by.to_string(),
            questions,
        );
        self.next_id += 1;

        info!(
            "created quiz {} ({:?}) with {} questions, by {}",
            quiz.id,
            quiz.title,
            quiz.questions.len(),
            quiz.created_by
        );
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    /// All quizzes in insertion order, samples first.
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn find_quiz_by_id(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }

    /// Scores `answers` against the quiz's answer key, stores the result as
    /// the current one (replacing any prior result) and returns it.
    ///
    /// Answers are paired with questions by position. A missing entry (the
    /// sequence was shorter than the question list) or an out-of-range index
    /// simply scores as incorrect; partial submissions are not an error.
    pub fn submit_quiz(
        &mut self,
        quiz_id: QuizId,
        answers: &[usize],
    ) -> Result<QuizResult, QuizError> {
        let quiz = self
            .find_quiz_by_id(quiz_id)
            .ok_or(QuizError::QuizNotFound(quiz_id))?;

        let records: Vec<AnswerRecord> = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let selected = answers.get(position).copied();
                AnswerRecord {
                    question_id: question.id,
                    selected_option: selected,
                    is_correct: selected == Some(question.correct_option),
                }
            })
            .collect();

        let result = QuizResult {
            quiz_id: quiz.id,
            quiz_title: quiz.title.clone(),
            total_questions: quiz.questions.len(),
            correct_count: records.iter().filter(|record| record.is_correct).count(),
            answers: records,
        };

        info!(
            "quiz {} submitted: {}/{} correct",
            result.quiz_id, result.correct_count, result.total_questions
        );
        self.current_result = Some(result.clone());
        Ok(result)
    }

    pub fn clear_result(&mut self) {
        if let Some(result) = self.current_result.take() {
            debug!("cleared result for quiz {}", result.quiz_id);
        }
    }

    pub fn current_result(&self) -> Option<&QuizResult> {
        self.current_result.as_ref()
    }
}

impl Default for QuizCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(title: &str, questions: &[Question]) -> Result<(), QuizError> {
    if title.trim().is_empty() {
        return Err(QuizError::EmptyTitle);
    }
    for question in questions {
        if question.text.trim().is_empty() {
            return Err(QuizError::EmptyQuestionText(question.id));
        }
        if question.options.iter().any(|option| option.trim().is_empty()) {
            return Err(QuizError::EmptyOption(question.id));
        }
        if question.correct_option >= OPTION_COUNT {
            return Err(QuizError::CorrectOptionOutOfRange(
                question.id,
                question.correct_option,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct_option: usize) -> Question {
        Question::new(
            id,
            format!("Question {}?", id),
            [
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_option,
        )
    }

    #[test]
    fn seeded_catalog_has_six_sample_quizzes() {
        let catalog = QuizCatalog::new();
        let ids: Vec<QuizId> = catalog.quizzes().iter().map(|quiz| quiz.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for quiz in catalog.quizzes() {
            assert_eq!(quiz.questions.len(), 5);
            assert_eq!(quiz.created_by, "demo@example.com");
        }
    }

    #[test]
    fn create_quiz_assigns_ids_past_the_seeds() {
        let mut catalog = QuizCatalog::new();
        let first = catalog
            .create_quiz("Rust Basics", vec![question(1, 0)], "ann@example.com")
            .unwrap();
        let second = catalog
            .create_quiz("More Rust", vec![question(1, 3)], "ann@example.com")
            .unwrap();
        assert_eq!(first.id, 7);
        assert_eq!(second.id, 8);
    }

    #[test]
    fn created_quiz_is_findable_and_stored_verbatim() {
        let mut catalog = QuizCatalog::new();
        let questions = vec![question(1, 2), question(2, 0)];
        let created = catalog
            .create_quiz("Trivia Night", questions.clone(), "bob@example.com")
            .unwrap();

        let found = catalog.find_quiz_by_id(created.id).unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.title, "Trivia Night");
        assert_eq!(found.created_by, "bob@example.com");
        assert_eq!(found.questions, questions);
        assert_eq!(catalog.quizzes().last().unwrap().id, created.id);
    }

    #[test]
    fn find_quiz_by_id_returns_none_for_unknown_id() {
        let catalog = QuizCatalog::new();
        assert!(catalog.find_quiz_by_id(999).is_none());
    }

    #[test]
    fn create_quiz_rejects_empty_title() {
        let mut catalog = QuizCatalog::new();
        let err = catalog
            .create_quiz("  ", vec![question(1, 0)], "ann@example.com")
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyTitle);
        assert_eq!(catalog.quizzes().len(), 6);
    }

    #[test]
    fn create_quiz_rejects_empty_question_text() {
        let mut catalog = QuizCatalog::new();
        let mut bad = question(3, 0);
        bad.text = String::new();
        let err = catalog
            .create_quiz("Fine Title", vec![question(1, 0), bad], "ann@example.com")
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyQuestionText(3));
    }

    #[test]
    fn create_quiz_rejects_blank_option() {
        let mut catalog = QuizCatalog::new();
        let mut bad = question(2, 1);
        bad.options[3] = " ".to_string();
        let err = catalog
            .create_quiz("Fine Title", vec![bad], "ann@example.com")
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyOption(2));
    }

    #[test]
    fn create_quiz_rejects_out_of_range_correct_option() {
        let mut catalog = QuizCatalog::new();
        let err = catalog
            .create_quiz("Fine Title", vec![question(1, 4)], "ann@example.com")
            .unwrap_err();
        assert_eq!(err, QuizError::CorrectOptionOutOfRange(1, 4));
    }

    #[test]
    fn rejected_quiz_does_not_consume_an_id() {
        let mut catalog = QuizCatalog::new();
        catalog
            .create_quiz("", vec![question(1, 0)], "ann@example.com")
            .unwrap_err();
        let created = catalog
            .create_quiz("Valid", vec![question(1, 0)], "ann@example.com")
            .unwrap();
        assert_eq!(created.id, 7);
    }

    #[test]
    fn empty_question_list_is_accepted() {
        let mut catalog = QuizCatalog::new();
        let created = catalog
            .create_quiz("Nothing To See", vec![], "ann@example.com")
            .unwrap();
        let result = catalog.submit_quiz(created.id, &[]).unwrap();
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.correct_count, 0);
        assert!(result.answers.is_empty());
    }

    #[test]
    fn general_knowledge_answer_key_scores_perfectly() {
        let mut catalog = QuizCatalog::new();
        let result = catalog.submit_quiz(1, &[2, 1, 3, 2, 1]).unwrap();
        assert_eq!(result.quiz_title, "General Knowledge Quiz");
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_count, 5);
        assert!(result.answers.iter().all(|record| record.is_correct));
    }

    #[test]
    fn all_zeros_scores_nothing_against_general_knowledge() {
        // No General Knowledge question keys to option 0.
        let mut catalog = QuizCatalog::new();
        let result = catalog.submit_quiz(1, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.answers.len(), 5);
        assert!(result.answers.iter().all(|record| !record.is_correct));
    }

    #[test]
    fn all_zeros_matches_riddle_quiz_where_zero_is_the_key() {
        // Riddle quiz questions 1 and 5 key to option 0.
        let mut catalog = QuizCatalog::new();
        let result = catalog.submit_quiz(6, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(result.correct_count, 2);
        let flags: Vec<bool> = result
            .answers
            .iter()
            .map(|record| record.is_correct)
            .collect();
        assert_eq!(flags, vec![true, false, false, false, true]);
    }

    #[test]
    fn short_answer_sequence_scores_the_tail_as_unanswered() {
        let mut catalog = QuizCatalog::new();
        let result = catalog.submit_quiz(1, &[2, 1]).unwrap();
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.answers.len(), 5);
        for record in &result.answers[2..] {
            assert_eq!(record.selected_option, None);
            assert!(!record.is_correct);
        }
    }

    #[test]
    fn out_of_range_selections_score_as_incorrect() {
        let mut catalog = QuizCatalog::new();
        let result = catalog.submit_quiz(1, &[9, 9, 9, 9, 9]).unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.answers[0].selected_option, Some(9));
    }

    #[test]
    fn submitting_unknown_quiz_fails_without_touching_the_result_slot() {
        let mut catalog = QuizCatalog::new();
        let previous = catalog.submit_quiz(1, &[2, 1, 3, 2, 1]).unwrap();

        let err = catalog.submit_quiz(42, &[0]).unwrap_err();
        assert_eq!(err, QuizError::QuizNotFound(42));
        assert_eq!(catalog.current_result(), Some(&previous));
    }

    #[test]
    fn each_submission_replaces_the_current_result() {
        let mut catalog = QuizCatalog::new();
        catalog.submit_quiz(1, &[2, 1, 3, 2, 1]).unwrap();
        let second = catalog.submit_quiz(2, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(catalog.current_result(), Some(&second));
    }

    #[test]
    fn clear_result_empties_the_slot_and_is_idempotent() {
        let mut catalog = QuizCatalog::new();
        catalog.submit_quiz(1, &[2, 1, 3, 2, 1]).unwrap();

        catalog.clear_result();
        assert!(catalog.current_result().is_none());

        // Clearing an already-empty slot is a no-op, not an error.
        catalog.clear_result();
        assert!(catalog.current_result().is_none());
    }
}
