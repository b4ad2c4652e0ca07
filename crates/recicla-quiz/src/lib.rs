//! Recycling knowledge quiz.
//!
//! A fixed bank of multiple-choice questions, answered one at a time. The
//! session tracks the score and remembers every wrong answer together with
//! its corrective tip, so the results screen can teach instead of just
//! grading.

use thiserror::Error;
use tracing::debug;

use recicla_core::ReciclaError;

pub const PERFECT_SCORE_MESSAGE: &str =
    "🎉 Parabéns! Você acertou todas as perguntas! Você é um expert em reciclagem!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("option {0} does not exist for this question")]
    InvalidOption(usize),

    #[error("the quiz is already finished")]
    AlreadyFinished,
}

impl From<QuizError> for ReciclaError {
    fn from(err: QuizError) -> Self {
        ReciclaError::Quiz(err.to_string())
    }
}

pub struct QuizOption {
    pub text: &'static str,
    pub correct: bool,
}

pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [QuizOption],
    /// Corrective explanation shown when the question is missed.
    pub tip: &'static str,
}

impl QuizQuestion {
    fn correct_answer(&self) -> &'static str {
        self.options
            .iter()
            .find(|option| option.correct)
            .map(|option| option.text)
            .unwrap_or_default()
    }
}

pub static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "Garrafas de óleo de cozinha podem ser recicladas?",
        options: &[
            QuizOption { text: "Sim, sempre", correct: false },
            QuizOption { text: "Não, nunca", correct: false },
            QuizOption {
                text: "Sim, mas apenas em pontos específicos de coleta",
                correct: true,
            },
            QuizOption { text: "Depende do tipo de óleo", correct: false },
        ],
        tip: "Óleo de cozinha usado deve ser levado a pontos específicos de coleta. Nunca \
              descarte na pia! 1 litro de óleo pode contaminar 25.000 litros de água.",
    },
    QuizQuestion {
        question: "Isopor é reciclável na sua cidade?",
        options: &[
            QuizOption { text: "Sim, sempre", correct: false },
            QuizOption { text: "Não, nunca", correct: false },
            QuizOption {
                text: "Depende da cidade e do tipo de isopor",
                correct: true,
            },
            QuizOption { text: "Apenas isopor branco", correct: false },
        ],
        tip: "Isopor (EPS) é tecnicamente reciclável, mas muitas cidades não têm estrutura. \
              Verifique com a prefeitura ou cooperativas locais. Reduza o consumo sempre que \
              possível!",
    },
    QuizQuestion {
        question: "Papel engordurado pode ser reciclado?",
        options: &[
            QuizOption { text: "Sim, sempre", correct: false },
            QuizOption { text: "Não, contamina o processo", correct: true },
            QuizOption { text: "Apenas se estiver limpo", correct: false },
            QuizOption {
                text: "Depende da quantidade de gordura",
                correct: false,
            },
        ],
        tip: "Papel engordurado (como caixas de pizza com gordura) não pode ser reciclado \
              porque contamina o processo. Use para compostagem ou descarte no lixo comum.",
    },
    QuizQuestion {
        question: "Latas de alumínio podem ser recicladas infinitamente?",
        options: &[
            QuizOption { text: "Sim, sem perder qualidade", correct: true },
            QuizOption { text: "Não, apenas algumas vezes", correct: false },
            QuizOption { text: "Depende do tipo de lata", correct: false },
            QuizOption { text: "Apenas latas novas", correct: false },
        ],
        tip: "Latas de alumínio podem ser recicladas infinitamente sem perder qualidade! A \
              reciclagem de alumínio economiza 95% da energia necessária para produzir novo \
              alumínio.",
    },
    QuizQuestion {
        question: "Vidros coloridos e transparentes devem ser separados na reciclagem?",
        options: &[
            QuizOption { text: "Sim, sempre separados", correct: false },
            QuizOption { text: "Não, podem ser misturados", correct: true },
            QuizOption { text: "Depende da cooperativa", correct: false },
            QuizOption { text: "Apenas vidros quebrados", correct: false },
        ],
        tip: "Vidros coloridos e transparentes podem ser reciclados juntos. O importante é \
              remover tampas e rótulos, e lavar bem antes de descartar.",
    },
];

/// Score tier on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    KeepLearning,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 70.0 {
            Grade::VeryGood
        } else if percentage >= 50.0 {
            Grade::Good
        } else {
            Grade::KeepLearning
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Grade::Excellent => "🏆",
            Grade::VeryGood => "⭐",
            Grade::Good => "👍",
            Grade::KeepLearning => "📚",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Grade::Excellent => "Excelente!",
            Grade::VeryGood => "Muito Bom!",
            Grade::Good => "Bom!",
            Grade::KeepLearning => "Continue Aprendendo!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => {
                "Você é um verdadeiro especialista em reciclagem! Continue assim!"
            }
            Grade::VeryGood => {
                "Você tem um bom conhecimento sobre reciclagem! Continue aprendendo!"
            }
            Grade::Good => "Você está no caminho certo! Continue aprendendo sobre reciclagem!",
            Grade::KeepLearning => {
                "Não desanime! Use as dicas abaixo para melhorar seus conhecimentos!"
            }
        }
    }
}

/// A missed question, kept for the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub question: &'static str,
    pub user_answer: &'static str,
    pub correct_answer: &'static str,
    pub tip: &'static str,
}

/// Outcome of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

/// Final results, available once every question is answered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub grade: Grade,
    pub wrong_answers: Vec<WrongAnswer>,
}

impl QuizResults {
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }

    pub fn is_perfect(&self) -> bool {
        self.wrong_answers.is_empty()
    }
}

/// One run through the question bank.
#[derive(Debug, Default)]
pub struct QuizSession {
    current: usize,
    score: usize,
    wrong_answers: Vec<WrongAnswer>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        QUESTIONS.get(self.current)
    }

    /// Progress label, 1-based.
    pub fn progress_label(&self) -> String {
        format!(
            "Pergunta {} de {}",
            (self.current + 1).min(QUESTIONS.len()),
            QUESTIONS.len()
        )
    }

    /// Answer the current question by option index and advance.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, QuizError> {
        let question = QUESTIONS.get(self.current).ok_or(QuizError::AlreadyFinished)?;
        let option = question
            .options
            .get(option_index)
            .ok_or(QuizError::InvalidOption(option_index))?;

        if option.correct {
            self.score += 1;
        } else {
            self.wrong_answers.push(WrongAnswer {
                question: question.question,
                user_answer: option.text,
                correct_answer: question.correct_answer(),
                tip: question.tip,
            });
        }

        self.current += 1;
        debug!(
            question = self.current,
            correct = option.correct,
            score = self.score,
            "question answered"
        );

        Ok(AnswerOutcome {
            correct: option.correct,
            finished: self.is_finished(),
        })
    }

    /// Results, once the session is finished.
    pub fn results(&self) -> Option<QuizResults> {
        if !self.is_finished() {
            return None;
        }
        let total = QUESTIONS.len();
        let percentage = self.score as f64 / total as f64 * 100.0;
        Some(QuizResults {
            score: self.score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
            wrong_answers: self.wrong_answers.clone(),
        })
    }

    /// Discard all progress and start over.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn correct_index(question: &QuizQuestion) -> usize {
        question
            .options
            .iter()
            .position(|option| option.correct)
            .unwrap()
    }

    // ---- question bank ----

    #[test]
    fn test_bank_has_five_questions_with_one_correct_option_each() {
        assert_eq!(QUESTIONS.len(), 5);
        for question in QUESTIONS {
            assert_eq!(question.options.len(), 4);
            assert_eq!(
                question.options.iter().filter(|o| o.correct).count(),
                1,
                "{}",
                question.question
            );
            assert!(!question.tip.is_empty());
        }
    }

    // ---- session flow ----

    #[test]
    fn test_perfect_run() {
        let mut session = QuizSession::new();
        for i in 0..QUESTIONS.len() {
            let question = session.current_question().unwrap();
            let outcome = session.answer(correct_index(question)).unwrap();
            assert!(outcome.correct);
            assert_eq!(outcome.finished, i == QUESTIONS.len() - 1);
        }

        let results = session.results().unwrap();
        assert_eq!(results.score, 5);
        assert_eq!(results.score_label(), "5/5");
        assert_eq!(results.grade, Grade::Excellent);
        assert!(results.is_perfect());
    }

    #[test]
    fn test_wrong_answers_are_remembered_with_tips() {
        let mut session = QuizSession::new();
        // Miss the first question, ace the rest.
        let first = session.current_question().unwrap();
        let wrong_index = (correct_index(first) + 1) % first.options.len();
        assert!(!session.answer(wrong_index).unwrap().correct);
        while let Some(question) = session.current_question() {
            session.answer(correct_index(question)).unwrap();
        }

        let results = session.results().unwrap();
        assert_eq!(results.score, 4);
        assert_eq!(results.wrong_answers.len(), 1);
        let missed = &results.wrong_answers[0];
        assert_eq!(missed.question, QUESTIONS[0].question);
        assert_eq!(
            missed.correct_answer,
            "Sim, mas apenas em pontos específicos de coleta"
        );
        assert_eq!(missed.tip, QUESTIONS[0].tip);
        assert!(!results.is_perfect());
    }

    #[test]
    fn test_results_unavailable_mid_session() {
        let mut session = QuizSession::new();
        assert!(session.results().is_none());
        session.answer(0).unwrap();
        assert!(session.results().is_none());
    }

    #[test]
    fn test_invalid_option_is_rejected_without_advancing() {
        let mut session = QuizSession::new();
        assert_eq!(session.answer(9), Err(QuizError::InvalidOption(9)));
        assert_eq!(session.progress_label(), "Pergunta 1 de 5");
    }

    #[test]
    fn test_answer_after_finish_is_rejected() {
        let mut session = QuizSession::new();
        while let Some(question) = session.current_question() {
            session.answer(correct_index(question)).unwrap();
        }
        assert_eq!(session.answer(0), Err(QuizError::AlreadyFinished));
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut session = QuizSession::new();
        session.answer(0).unwrap();
        session.restart();
        assert!(!session.is_finished());
        assert_eq!(session.progress_label(), "Pergunta 1 de 5");
        assert!(session.results().is_none());
    }

    #[test]
    fn test_progress_label_advances() {
        let mut session = QuizSession::new();
        assert_eq!(session.progress_label(), "Pergunta 1 de 5");
        session.answer(0).unwrap();
        assert_eq!(session.progress_label(), "Pergunta 2 de 5");
    }

    // ---- grading ----

    #[test]
    fn test_grade_tiers() {
        assert_eq!(Grade::from_percentage(100.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(90.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(80.0), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(70.0), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(60.0), Grade::Good);
        assert_eq!(Grade::from_percentage(50.0), Grade::Good);
        assert_eq!(Grade::from_percentage(40.0), Grade::KeepLearning);
        assert_eq!(Grade::from_percentage(0.0), Grade::KeepLearning);
    }

    #[test]
    fn test_grade_copy() {
        assert_eq!(Grade::Excellent.icon(), "🏆");
        assert_eq!(Grade::Excellent.title(), "Excelente!");
        assert_eq!(
            Grade::KeepLearning.message(),
            "Não desanime! Use as dicas abaixo para melhorar seus conhecimentos!"
        );
    }

    #[test]
    fn test_four_of_five_is_very_good() {
        // 4/5 = 80%.
        let mut session = QuizSession::new();
        let first = session.current_question().unwrap();
        session.answer((correct_index(first) + 1) % 4).unwrap();
        while let Some(question) = session.current_question() {
            session.answer(correct_index(question)).unwrap();
        }
        assert_eq!(session.results().unwrap().grade, Grade::VeryGood);
    }
}
