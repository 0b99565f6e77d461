use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub week: u32,
    pub prompt: String,
    pub options: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let options = raw
            .options
            .split('|')
            .map(|option| option.trim().to_owned())
            .filter(|option| !option.is_empty())
            .collect();
        Question {
            prompt: raw.prompt,
            options,
            answer: raw.answer,
        }
    }
}
