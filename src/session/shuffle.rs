use rand::seq::SliceRandom;

use crate::store::Question;

pub fn shuffled<T: Clone>(source: &[T]) -> Vec<T> {
    let mut items = source.to_vec();
    items.shuffle(&mut rand::thread_rng());
    items
}

// Question order and each question's option order are shuffled independently.
pub fn shuffle_questions(source: &[Question]) -> Vec<Question> {
    shuffled(source)
        .into_iter()
        .map(|mut question| {
            question.options = shuffled(&question.options);
            question
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    fn sample_questions() -> Vec<Question> {
        (0..20)
            .map(|index| Question {
                prompt: format!("question {}", index),
                options: vec![
                    format!("option {}a", index),
                    format!("option {}b", index),
                    format!("option {}c", index),
                    format!("option {}d", index),
                ],
                answer: format!("option {}a", index),
            })
            .collect()
    }

    #[test]
    fn shuffled_preserves_the_multiset() {
        let source: Vec<String> = (0..50).map(|n| format!("item {}", n / 2)).collect();
        let result = shuffled(&source);
        assert_eq!(result.len(), source.len());
        assert_eq!(sorted(result), sorted(source.clone()));
    }

    #[test]
    fn questions_and_options_are_permutations() {
        let source = sample_questions();
        let result = shuffle_questions(&source);

        assert_eq!(result.len(), source.len());
        let mut prompts: Vec<String> = result.iter().map(|q| q.prompt.clone()).collect();
        prompts.sort();
        let mut expected: Vec<String> = source.iter().map(|q| q.prompt.clone()).collect();
        expected.sort();
        assert_eq!(prompts, expected);

        for question in &result {
            let original = source
                .iter()
                .find(|q| q.prompt == question.prompt)
                .unwrap();
            assert_eq!(
                sorted(question.options.clone()),
                sorted(original.options.clone())
            );
            assert!(question.options.contains(&question.answer));
        }
    }

    #[test]
    fn source_questions_are_never_mutated() {
        let source = sample_questions();
        let snapshot = source.clone();
        let _ = shuffle_questions(&source);
        assert_eq!(source, snapshot);
    }
}
