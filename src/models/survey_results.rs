use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the `Questions LEFT JOIN Options` query. The option columns are
/// null for a question that has no options yet.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResultRow {
    #[sqlx(rename = "QuestionID")]
    pub question_id: i64,
    #[sqlx(rename = "QuestionText")]
    pub question_text: String,
    #[sqlx(rename = "OptionID")]
    pub option_id: Option<i64>,
    #[sqlx(rename = "OptionText")]
    pub option_text: Option<String>,
    #[sqlx(rename = "Votes")]
    pub votes: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct OptionResult {
    #[serde(rename = "OptionID")]
    pub option_id: i64,
    #[serde(rename = "OptionText")]
    pub option_text: String,
    #[serde(rename = "Votes")]
    pub votes: i64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct QuestionResult {
    #[serde(rename = "QuestionID")]
    pub question_id: i64,
    #[serde(rename = "QuestionText")]
    pub question_text: String,
    #[serde(rename = "Options")]
    pub options: Vec<OptionResult>,
}

/// Folds flat join rows into one entry per question, keeping the order in
/// which questions first appear.
pub fn group_results<I>(rows: I) -> Vec<QuestionResult>
where
    I: IntoIterator<Item = ResultRow>,
{
    let mut results: Vec<QuestionResult> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.question_id).or_insert_with(|| {
            results.push(QuestionResult {
                question_id: row.question_id,
                question_text: row.question_text.clone(),
                options: Vec::new(),
            });
            results.len() - 1
        });

        if let Some(option_id) = row.option_id {
            results[slot].options.push(OptionResult {
                option_id,
                option_text: row.option_text.unwrap_or_default(),
                votes: row.votes.unwrap_or(0),
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(question_id: i64, text: &str, option: Option<(i64, &str, i64)>) -> ResultRow {
        ResultRow {
            question_id,
            question_text: text.to_string(),
            option_id: option.map(|o| o.0),
            option_text: option.map(|o| o.1.to_string()),
            votes: option.map(|o| o.2),
        }
    }

    #[test]
    fn test_groups_options_under_questions() {
        let rows = vec![
            row(1, "Favourite colour?", Some((10, "Red", 2))),
            row(1, "Favourite colour?", Some((11, "Blue", 5))),
            row(2, "Anything else?", None),
        ];
        let grouped = group_results(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].question_id, 1);
        assert_eq!(
            grouped[0].options,
            vec![
                OptionResult {
                    option_id: 10,
                    option_text: "Red".to_string(),
                    votes: 2
                },
                OptionResult {
                    option_id: 11,
                    option_text: "Blue".to_string(),
                    votes: 5
                },
            ]
        );
        assert_eq!(grouped[1].question_text, "Anything else?");
        assert!(grouped[1].options.is_empty());
    }

    #[test]
    fn test_no_rows_is_empty() {
        assert!(group_results(Vec::new()).is_empty());
    }

    #[test]
    fn test_first_seen_order_with_interleaved_rows() {
        let rows = vec![
            row(7, "Second asked", Some((1, "a", 0))),
            row(3, "First asked", Some((2, "b", 1))),
            row(7, "Second asked", Some((3, "c", 4))),
        ];
        let grouped = group_results(rows);

        let ids: Vec<i64> = grouped.iter().map(|q| q.question_id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(grouped[0].options.len(), 2);
        assert_eq!(grouped[1].options.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let grouped = group_results(vec![row(1, "Q", Some((5, "Yes", 3)))]);
        assert_eq!(
            serde_json::to_value(&grouped).unwrap(),
            serde_json::json!([{
                "QuestionID": 1,
                "QuestionText": "Q",
                "Options": [{"OptionID": 5, "OptionText": "Yes", "Votes": 3}]
            }])
        );
    }
}
