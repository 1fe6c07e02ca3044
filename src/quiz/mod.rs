pub mod catalog;
pub mod samples;

pub use catalog::QuizCatalog;

pub type QuizId = u32;
pub type QuestionId = u32;

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
}

impl Question {
    pub fn new(
        id: QuestionId,
        text: String,
        options: [String; OPTION_COUNT],
        correct_option: usize,
    ) -> Self {
        Self {
            id,
            text,
            options,
            correct_option,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub created_by: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: QuizId, title: String, created_by: String, questions: Vec<Question>) -> Self {
        Self {
            id,
            title,
            created_by,
            questions,
        }
    }
}

/// One scored answer, in question order. `selected_option` is `None` when the
/// submitted answer sequence was shorter than the question list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected_option: Option<usize>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub total_questions: usize,
    pub correct_count: usize,
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz {0} not found")]
    QuizNotFound(QuizId),
    #[error("quiz title must not be empty")]
    EmptyTitle,
    #[error("question {0} has empty text")]
    EmptyQuestionText(QuestionId),
    #[error("question {0} has an empty option")]
    EmptyOption(QuestionId),
    #[error("question {0} marks option {1} as correct, which is out of range")]
    CorrectOptionOutOfRange(QuestionId, usize),
}
