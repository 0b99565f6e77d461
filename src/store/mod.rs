use anyhow::*;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

pub mod question;

pub use question::{Question, RawQuestion};

lazy_static! {
    static ref WEEK_SELECTOR_REGEX: Regex = Regex::new("^week([0-9]+)$").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeekKey {
    Week(u32),
    All,
    Mixed,
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeekKey::Week(number) => write!(f, "week{}", number),
            WeekKey::All => write!(f, "all"),
            WeekKey::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for WeekKey {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(WeekKey::All),
            "mixed" => Ok(WeekKey::Mixed),
            _ => WEEK_SELECTOR_REGEX
                .captures(value)
                .and_then(|captures| captures[1].parse().ok())
                .map(WeekKey::Week)
                .ok_or_else(|| anyhow!("Invalid week selector: {}", value)),
        }
    }
}

#[derive(Debug, Default)]
pub struct QuestionBank {
    weeks: BTreeMap<u32, Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert_week(&mut self, week: u32, questions: Vec<Question>) {
        self.weeks
            .entry(week)
            .or_insert_with(Vec::new)
            .extend(questions);
    }

    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Could not open question bank at {:?}", source))?;
        Self::from_reader(file)
    }

    pub fn from_reader(source: impl Read) -> Result<QuestionBank> {
        let mut csv_reader = csv::Reader::from_reader(source);
        let mut rows: Vec<RawQuestion> = Vec::new();
        for row in csv_reader.deserialize() {
            rows.push(row?);
        }

        let weeks: BTreeMap<u32, Vec<Question>> = rows
            .into_iter()
            .map(|raw| (raw.week, Question::from(raw)))
            .into_group_map()
            .into_iter()
            .collect();

        for (week, questions) in &weeks {
            for question in questions {
                if question.options.len() < 2 {
                    bail!(
                        "Question \"{}\" in week{} has fewer than two options",
                        question.prompt,
                        week
                    );
                }
            }
        }

        Ok(QuestionBank { weeks })
    }

    pub fn get_weeks(&self) -> Vec<WeekKey> {
        self.weeks.keys().copied().map(WeekKey::Week).collect()
    }

    pub fn questions_for(&self, week: WeekKey) -> Vec<Question> {
        match week {
            WeekKey::Week(number) => self.weeks.get(&number).cloned().unwrap_or_default(),
            WeekKey::All | WeekKey::Mixed => self.weeks.values().flatten().cloned().collect(),
        }
    }

    pub fn question_count(&self, week: WeekKey) -> usize {
        match week {
            WeekKey::Week(number) => self.weeks.get(&number).map(Vec::len).unwrap_or(0),
            WeekKey::All | WeekKey::Mixed => self.weeks.values().map(Vec::len).sum(),
        }
    }
}
