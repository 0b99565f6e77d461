use anyhow::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::output::{Message, QuizOutput};
use crate::progress::{LoadResult, ProgressCache, ProgressStore};
use crate::store::{Question, QuestionBank, WeekKey};

use self::advance::AutoAdvanceController;
use self::settings::Settings;
use self::timer::TimerController;

pub mod advance;
pub mod settings;
pub mod shuffle;
pub mod timer;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Loading,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    SingleWeek,
    Mixed,
}

impl SessionMode {
    fn of(week: WeekKey) -> Self {
        match week {
            WeekKey::Mixed => SessionMode::Mixed,
            _ => SessionMode::SingleWeek,
        }
    }
}

pub struct QuizSession<O: QuizOutput> {
    bank: Arc<QuestionBank>,
    cache: ProgressCache,
    clock: Arc<dyn Clock>,
    output: O,
    phase: Phase,
    mode: SessionMode,
    week: Option<WeekKey>,
    questions: Vec<Question>,
    answers: HashMap<usize, String>,
    completed: bool,
    score: usize,
    current_question_index: usize,
    tab_active: bool,
    timer: TimerController,
    auto_advance: AutoAdvanceController,
}

impl<O: QuizOutput> QuizSession<O> {
    pub fn new(
        bank: Arc<QuestionBank>,
        store: Arc<dyn ProgressStore>,
        clock: Arc<dyn Clock>,
        settings: Settings,
        output: O,
    ) -> Self {
        let cache = ProgressCache::new(store, clock.clone(), settings.progress_expiry);
        let timer = TimerController::new(clock.clone(), true);
        let auto_advance = AutoAdvanceController::new(settings.auto_advance_delay);
        QuizSession {
            bank,
            cache,
            clock,
            output,
            phase: Phase::Loading,
            mode: SessionMode::SingleWeek,
            week: None,
            questions: Vec::new(),
            answers: HashMap::new(),
            completed: false,
            score: 0,
            current_question_index: 0,
            tab_active: true,
            timer,
            auto_advance,
        }
    }

    pub fn start(&mut self, week: WeekKey) -> Result<()> {
        let pool = self.bank.questions_for(week);
        if pool.is_empty() {
            self.output.say(&Message::EmptyDataset(week));
            bail!("No questions available for {}", week);
        }

        self.questions = shuffle::shuffle_questions(&pool);
        self.week = Some(week);
        self.mode = SessionMode::of(week);
        self.answers.clear();
        self.completed = false;
        self.score = 0;
        self.current_question_index = 0;
        self.auto_advance.cancel();
        self.timer = TimerController::new(self.clock.clone(), self.tab_active);
        self.phase = Phase::InProgress;

        if self.mode == SessionMode::SingleWeek {
            match self.cache.load(week) {
                LoadResult::Valid(saved) => {
                    let total = self.questions.len();
                    self.answers
                        .extend(saved.into_iter().filter(|(index, _)| *index < total));
                    if !self.answers.is_empty() {
                        self.output
                            .say(&Message::ProgressRestored(week, self.answers.len()));
                    }
                }
                LoadResult::Expired | LoadResult::Malformed => {
                    self.output.say(&Message::ProgressDiscarded(week));
                }
                LoadResult::Absent => (),
            }
        }

        self.output
            .say(&Message::QuestionsLoaded(week, self.questions.len()));
        Ok(())
    }

    pub fn restart(&mut self, week: WeekKey) -> Result<()> {
        self.cache.clear(week);
        self.output.say(&Message::QuizReset(week));
        self.start(week)
    }

    pub fn select_answer(&mut self, index: usize, option: &str) {
        if self.completed {
            self.output.say(&Message::SelectAfterCompletion(index));
            return;
        }
        if index >= self.questions.len() {
            self.output.say(&Message::AnswerOutOfBounds(index));
            return;
        }
        if self.mode == SessionMode::Mixed && self.answers.contains_key(&index) {
            self.output.say(&Message::AnswerLocked(index));
            return;
        }

        // In-memory state leads; the cache write follows it
        self.answers.insert(index, option.to_owned());
        if self.mode == SessionMode::SingleWeek {
            if let Some(week) = self.week {
                self.cache.save(week, &self.answers);
            }
        }
        self.output
            .say(&Message::AnswerSelected(index, self.answers.len()));

        let is_last = index + 1 == self.questions.len();
        if self.mode == SessionMode::Mixed && index == self.current_question_index && !is_last {
            self.auto_advance.schedule();
            self.output.say(&Message::AutoAdvanceScheduled(index));
        }
    }

    pub fn submit(&mut self) {
        if self.phase != Phase::InProgress {
            self.output.say(&Message::SubmitIgnored);
            return;
        }

        let score = self.count_correct();
        self.score = score;
        self.completed = true;
        self.phase = Phase::Completed;
        self.timer.stop();
        self.auto_advance.cancel();
        self.output.say(&Message::QuizSubmitted(
            score,
            self.questions.len(),
            self.timer.elapsed_seconds(),
        ));
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.timer.tick(dt);
        if self.auto_advance.tick(dt) {
            self.advance_to(self.current_question_index + 1);
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.tab_active = visible;
        if self.phase != Phase::InProgress {
            return;
        }
        if self.timer.set_visible(visible) {
            let seconds = self.timer.elapsed_seconds();
            let message = if visible {
                Message::TimerResumed(seconds)
            } else {
                Message::TimerPaused(seconds)
            };
            self.output.say(&message);
        }
    }

    pub fn next(&mut self) {
        self.cancel_auto_advance();
        if self.current_question_index + 1 < self.questions.len() {
            self.advance_to(self.current_question_index + 1);
        }
    }

    pub fn previous(&mut self) {
        self.cancel_auto_advance();
        if self.current_question_index > 0 {
            self.advance_to(self.current_question_index - 1);
        }
    }

    fn advance_to(&mut self, index: usize) {
        if index >= self.questions.len() {
            return;
        }
        self.current_question_index = index;
        self.output.say(&Message::Navigated(index));
    }

    fn cancel_auto_advance(&mut self) {
        if self.auto_advance.cancel() {
            self.output
                .say(&Message::AutoAdvanceCancelled(self.current_question_index));
        }
    }

    fn count_correct(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answers.get(index).map(String::as_str) == Some(question.answer.as_str())
            })
            .count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn week(&self) -> Option<WeekKey> {
        self.week
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    pub fn is_tab_active(&self) -> bool {
        self.tab_active
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn auto_advance_countdown(&self) -> Option<u64> {
        self.auto_advance.countdown()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn correct_count(&self) -> usize {
        self.count_correct()
    }

    pub fn incorrect_count(&self) -> usize {
        self.answers.len().saturating_sub(self.count_correct())
    }

    pub fn accuracy_percent(&self) -> u32 {
        let attempted = self.answers.len();
        if attempted == 0 {
            return 0;
        }
        (self.count_correct() as f64 / attempted as f64 * 100.0).round() as u32
    }

    pub fn score_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}
