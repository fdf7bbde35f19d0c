//! Quiz maker state: the builder draft and the take-a-quiz session.

use std::collections::HashMap;

use crate::domain::{
    aggregates, Collection, Question, Quiz, ValidationError, ValidationResult,
};
use crate::infrastructure::IdFactory;

/// Pages of the quiz app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPage {
    Home,
    Builder,
    Listing,
    Take,
}

/// Focused field inside the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderFocus {
    Title,
    QuestionText,
    Option(usize),
}

pub const OPTIONS_PER_QUESTION: usize = 4;

/// One question being edited in the builder, before it becomes a
/// domain [`Question`] on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftQuestion {
    pub text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_option: usize,
}

impl DraftQuestion {
    fn blank() -> Self {
        Self {
            text: String::new(),
            options: Default::default(),
            correct_option: 0,
        }
    }
}

#[derive(Debug)]
pub struct QuizApp {
    pub quizzes: Collection<Quiz>,
    pub page: QuizPage,
    pub selected: usize,
    pub draft_title: String,
    pub draft_questions: Vec<DraftQuestion>,
    pub builder_question: usize,
    pub builder_focus: BuilderFocus,
    /// Identifier of the quiz being taken, re-resolved per read.
    pub active_quiz: Option<String>,
    pub current_question: usize,
    /// Question index to chosen option index for the running session.
    pub answers: HashMap<usize, usize>,
    pub show_results: bool,
    pub status_message: Option<String>,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            quizzes: Collection::new(),
            page: QuizPage::Home,
            selected: 0,
            draft_title: String::new(),
            draft_questions: vec![DraftQuestion::blank()],
            builder_question: 0,
            builder_focus: BuilderFocus::Title,
            active_quiz: None,
            current_question: 0,
            answers: HashMap::new(),
            show_results: false,
            status_message: None,
        }
    }
}

impl QuizApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn go_home(&mut self) {
        self.page = QuizPage::Home;
        self.status_message = None;
    }

    pub fn open_listing(&mut self) {
        self.page = QuizPage::Listing;
        self.selected = 0;
        self.status_message = None;
    }

    pub fn start_builder(&mut self) {
        self.page = QuizPage::Builder;
        self.draft_title.clear();
        self.draft_questions = vec![DraftQuestion::blank()];
        self.builder_question = 0;
        self.builder_focus = BuilderFocus::Title;
        self.status_message = None;
    }

    // --- builder ---

    pub fn focus_next_builder_field(&mut self) {
        self.builder_focus = match self.builder_focus {
            BuilderFocus::Title => BuilderFocus::QuestionText,
            BuilderFocus::QuestionText => BuilderFocus::Option(0),
            BuilderFocus::Option(index) if index + 1 < OPTIONS_PER_QUESTION => {
                BuilderFocus::Option(index + 1)
            }
            BuilderFocus::Option(_) => BuilderFocus::Title,
        };
    }

    pub fn push_builder_char(&mut self, ch: char) {
        let question = self.builder_question;
        match self.builder_focus {
            BuilderFocus::Title => self.draft_title.push(ch),
            BuilderFocus::QuestionText => {
                if let Some(draft) = self.draft_questions.get_mut(question) {
                    draft.text.push(ch);
                }
            }
            BuilderFocus::Option(index) => {
                if let Some(draft) = self.draft_questions.get_mut(question) {
                    draft.options[index].push(ch);
                }
            }
        }
    }

    pub fn pop_builder_char(&mut self) {
        let question = self.builder_question;
        match self.builder_focus {
            BuilderFocus::Title => {
                self.draft_title.pop();
            }
            BuilderFocus::QuestionText => {
                if let Some(draft) = self.draft_questions.get_mut(question) {
                    draft.text.pop();
                }
            }
            BuilderFocus::Option(index) => {
                if let Some(draft) = self.draft_questions.get_mut(question) {
                    draft.options[index].pop();
                }
            }
        }
    }

    /// Marks the focused option as the correct answer for the current draft
    /// question.
    pub fn mark_correct(&mut self) {
        if let BuilderFocus::Option(index) = self.builder_focus {
            if let Some(draft) = self.draft_questions.get_mut(self.builder_question) {
                draft.correct_option = index;
            }
        }
    }

    pub fn next_draft_question(&mut self) {
        if self.builder_question + 1 < self.draft_questions.len() {
            self.builder_question += 1;
            self.builder_focus = BuilderFocus::QuestionText;
        }
    }

    pub fn previous_draft_question(&mut self) {
        if self.builder_question > 0 {
            self.builder_question -= 1;
            self.builder_focus = BuilderFocus::QuestionText;
        }
    }

    pub fn add_draft_question(&mut self) {
        self.draft_questions.push(DraftQuestion::blank());
        self.builder_question = self.draft_questions.len() - 1;
        self.builder_focus = BuilderFocus::QuestionText;
    }

    /// Drops the current draft question; the last remaining question cannot
    /// be removed.
    pub fn remove_draft_question(&mut self) {
        if self.draft_questions.len() > 1 {
            self.draft_questions.remove(self.builder_question);
            if self.builder_question >= self.draft_questions.len() {
                self.builder_question = self.draft_questions.len() - 1;
            }
        }
    }

    /// Publishes the drafted quiz to the listing after validating the title,
    /// every question text, and every option.
    pub fn submit_quiz(&mut self) {
        if let Err(error) = self.validate_draft() {
            self.status_message = Some(error.to_string());
            return;
        }
        let questions: Collection<Question> = self
            .draft_questions
            .iter()
            .map(|draft| Question {
                id: IdFactory::new_id(),
                text: draft.text.trim().to_string(),
                options: draft.options.iter().map(|option| option.trim().to_string()).collect(),
                correct_option: draft.correct_option,
            })
            .collect();
        let quiz = Quiz {
            id: IdFactory::new_id(),
            title: self.draft_title.trim().to_string(),
            questions,
        };
        self.quizzes = self.quizzes.add(quiz);
        self.page = QuizPage::Listing;
        self.selected = 0;
        self.status_message = Some("Quiz created".to_string());
    }

    fn validate_draft(&self) -> ValidationResult<()> {
        if self.draft_title.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "quiz title" });
        }
        for draft in &self.draft_questions {
            if draft.text.trim().is_empty() {
                return Err(ValidationError::BlankQuestion);
            }
            if draft.options.iter().any(|option| option.trim().is_empty()) {
                return Err(ValidationError::BlankOption);
            }
        }
        Ok(())
    }

    // --- listing / take session ---

    pub fn select_next(&mut self) {
        if self.quizzes.len() > 0 && self.selected < self.quizzes.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn start_selected(&mut self) {
        if let Some(quiz) = self.quizzes.get(self.selected) {
            self.active_quiz = Some(quiz.id.clone());
            self.current_question = 0;
            self.answers.clear();
            self.show_results = false;
            self.page = QuizPage::Take;
            self.status_message = None;
        }
    }

    /// The quiz behind the take session, if it still exists.
    pub fn active(&self) -> Option<&Quiz> {
        self.active_quiz
            .as_deref()
            .and_then(|id| self.quizzes.find(id))
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.answers.get(&self.current_question).copied()
    }

    pub fn select_option(&mut self, option: usize) {
        let Some(quiz) = self.active() else {
            return;
        };
        let valid = quiz
            .questions
            .get(self.current_question)
            .is_some_and(|question| option < question.options.len());
        if valid {
            self.answers.insert(self.current_question, option);
        }
    }

    /// Advances to the next question, or finishes the quiz on the last one.
    /// The current question must be answered first.
    pub fn next_question(&mut self) {
        if self.selected_answer().is_none() {
            return;
        }
        let count = self.active().map(|quiz| quiz.questions.len()).unwrap_or(0);
        if self.current_question + 1 < count {
            self.current_question += 1;
        } else {
            self.show_results = true;
        }
    }

    pub fn previous_question(&mut self) {
        self.current_question = self.current_question.saturating_sub(1);
    }

    pub fn retake(&mut self) {
        self.current_question = 0;
        self.answers.clear();
        self.show_results = false;
    }

    pub fn back_to_listing(&mut self) {
        self.page = QuizPage::Listing;
        self.active_quiz = None;
        self.show_results = false;
        self.status_message = None;
    }

    /// Score of the running session, recomputed from the answer map on every
    /// call.
    pub fn session_score(&self) -> usize {
        self.active()
            .map(|quiz| aggregates::score(&quiz.questions, &self.answers))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct_option: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {}", id),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option,
        }
    }

    fn quiz(id: &str, title: &str, questions: Vec<Question>) -> Quiz {
        Quiz {
            id: id.to_string(),
            title: title.to_string(),
            questions: questions.into_iter().collect(),
        }
    }

    fn app_with_quiz() -> QuizApp {
        let mut app = QuizApp::new();
        app.quizzes = app.quizzes.add(quiz(
            "capitals",
            "World Capitals",
            vec![question("q1", 1), question("q2", 2), question("q3", 0)],
        ));
        app.open_listing();
        app
    }

    fn type_into_builder(app: &mut QuizApp, text: &str) {
        for ch in text.chars() {
            app.push_builder_char(ch);
        }
    }

    fn fill_current_question(app: &mut QuizApp) {
        app.builder_focus = BuilderFocus::QuestionText;
        type_into_builder(app, "What is 2 + 2?");
        for index in 0..OPTIONS_PER_QUESTION {
            app.builder_focus = BuilderFocus::Option(index);
            type_into_builder(app, &format!("answer {}", index));
        }
    }

    #[test]
    fn test_new_starts_on_home() {
        let app = QuizApp::new();
        assert_eq!(app.page, QuizPage::Home);
        assert!(app.quizzes.is_empty());
    }

    #[test]
    fn test_submit_requires_title() {
        let mut app = QuizApp::new();
        app.start_builder();
        app.submit_quiz();

        assert_eq!(app.page, QuizPage::Builder);
        assert!(app.quizzes.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("quiz title cannot be empty")
        );
    }

    #[test]
    fn test_submit_requires_question_text() {
        let mut app = QuizApp::new();
        app.start_builder();
        type_into_builder(&mut app, "Arithmetic");
        app.submit_quiz();

        assert!(app.quizzes.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("all question texts must be filled")
        );
    }

    #[test]
    fn test_submit_requires_every_option() {
        let mut app = QuizApp::new();
        app.start_builder();
        type_into_builder(&mut app, "Arithmetic");
        app.builder_focus = BuilderFocus::QuestionText;
        type_into_builder(&mut app, "What is 2 + 2?");
        app.submit_quiz();

        assert!(app.quizzes.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("all options must be filled for each question")
        );
    }

    #[test]
    fn test_submit_publishes_quiz_to_listing() {
        let mut app = QuizApp::new();
        app.start_builder();
        type_into_builder(&mut app, "Arithmetic");
        fill_current_question(&mut app);
        app.builder_focus = BuilderFocus::Option(2);
        app.mark_correct();
        app.submit_quiz();

        assert_eq!(app.page, QuizPage::Listing);
        assert_eq!(app.quizzes.len(), 1);
        let published = app.quizzes.get(0).unwrap();
        assert_eq!(published.title, "Arithmetic");
        assert_eq!(published.questions.len(), 1);
        assert_eq!(published.questions.get(0).unwrap().correct_option, 2);
    }

    #[test]
    fn test_remove_last_draft_question_is_blocked() {
        let mut app = QuizApp::new();
        app.start_builder();
        app.remove_draft_question();
        assert_eq!(app.draft_questions.len(), 1);

        app.add_draft_question();
        app.remove_draft_question();
        assert_eq!(app.draft_questions.len(), 1);
    }

    #[test]
    fn test_take_session_records_answers_per_question() {
        let mut app = app_with_quiz();
        app.start_selected();

        app.select_option(1); // q1: correct
        app.next_question();
        app.select_option(3); // q2: wrong
        app.next_question();

        assert_eq!(app.current_question, 2);
        assert!(!app.show_results);
        assert_eq!(app.session_score(), 1);
    }

    #[test]
    fn test_next_question_requires_an_answer() {
        let mut app = app_with_quiz();
        app.start_selected();

        app.next_question();
        assert_eq!(app.current_question, 0);
    }

    #[test]
    fn test_finishing_last_question_shows_results() {
        let mut app = app_with_quiz();
        app.start_selected();

        app.select_option(1);
        app.next_question();
        app.select_option(2);
        app.next_question();
        app.select_option(0);
        app.next_question();

        assert!(app.show_results);
        assert_eq!(app.session_score(), 3);
    }

    #[test]
    fn test_session_score_ignores_unanswered_questions() {
        let mut app = app_with_quiz();
        app.start_selected();
        app.answers.insert(0, 1); // correct
        app.answers.insert(1, 0); // wrong; q3 unanswered

        assert_eq!(app.session_score(), 1);
    }

    #[test]
    fn test_retake_resets_the_session() {
        let mut app = app_with_quiz();
        app.start_selected();
        app.select_option(1);
        app.next_question();

        app.retake();

        assert_eq!(app.current_question, 0);
        assert!(app.answers.is_empty());
        assert!(!app.show_results);
        assert_eq!(app.session_score(), 0);
    }

    #[test]
    fn test_active_resolves_to_none_after_deletion() {
        let mut app = app_with_quiz();
        app.start_selected();
        app.quizzes = app.quizzes.remove("capitals");

        assert_eq!(app.page, QuizPage::Take);
        assert!(app.active().is_none());
        assert_eq!(app.session_score(), 0);
    }
}
