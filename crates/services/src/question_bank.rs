use quiz_core::Question;

use crate::error::QuestionBankError;
use crate::source::QuestionRecord;

/// Turn fetched records into validated true/false questions.
///
/// HTML entities in the prompt and answer are decoded to plain text first.
///
/// # Errors
///
/// Returns `QuestionBankError::Invalid` for the first record that does not
/// form a valid question.
pub fn build_question_bank(
    records: impl IntoIterator<Item = QuestionRecord>,
) -> Result<Vec<Question>, QuestionBankError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let prompt = decode_text(&record.question);
            let answer = decode_text(&record.correct_answer);
            Question::true_false(prompt, answer)
                .map_err(|source| QuestionBankError::Invalid { index, source })
        })
        .collect()
}

fn decode_text(raw: &str) -> String {
    html_escape::decode_html_entities(raw).trim().to_string()
}
