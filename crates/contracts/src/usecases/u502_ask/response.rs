//! Answer payloads of `/api/ask` and `/api/compare/ask`.
//!
//! The backend does not version its answers; the shape is recognised from
//! the JSON structure alone.

use crate::shared::api::ApiError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const NO_ANSWER: &str = "No answer returned.";

/// Treat `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Document-grounded answer combined with a web-search answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualEnginePayload {
    #[serde(default, deserialize_with = "nullable")]
    pub rag: RagAnswer,
    #[serde(default, deserialize_with = "nullable")]
    pub cse: WebAnswer,
    #[serde(default)]
    pub fused: Option<FusedAnswer>,
    #[serde(default, deserialize_with = "nullable")]
    pub final_answer: String,
    #[serde(default, deserialize_with = "nullable")]
    pub final_citations: Vec<Citation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagAnswer {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
}

impl RagAnswer {
    pub fn is_known(&self) -> bool {
        self.status == "known"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebAnswer {
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FusedAnswer {
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(rename = "ref", default, deserialize_with = "nullable")]
    pub reference: String,
}

/// Side-by-side answer for two topics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparePayload {
    #[serde(rename = "A", default, deserialize_with = "nullable")]
    pub a: WebAnswer,
    #[serde(rename = "B", default, deserialize_with = "nullable")]
    pub b: WebAnswer,
    #[serde(default, deserialize_with = "nullable")]
    pub matrix: Vec<MatrixRow>,
    #[serde(default, deserialize_with = "nullable")]
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    #[serde(default, deserialize_with = "nullable")]
    pub dimension: String,
    #[serde(default, deserialize_with = "nullable")]
    pub a_value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub b_value: String,
}

/// One assistant bubble to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub sources: Vec<String>,
}

impl AssistantReply {
    fn new(text: String, sources: Vec<String>) -> Self {
        Self { text, sources }
    }

    fn text(text: String) -> Self {
        Self::new(text, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    DualEngine(DualEnginePayload),
    Comparison(ComparePayload),
    WebOnly { answer: String, sources: Vec<String> },
}

impl AskOutcome {
    /// Recognise the answer shape of an envelope's `data`.
    pub fn classify(data: &Value) -> Self {
        if data.get("A").is_some() && data.get("B").is_some() {
            if let Ok(payload) = serde_json::from_value::<ComparePayload>(data.clone()) {
                return AskOutcome::Comparison(payload);
            }
        }

        if let Some(raw) = data.get("raw") {
            if let Ok(payload) = serde_json::from_value::<DualEnginePayload>(raw.clone()) {
                if payload.rag.is_known() {
                    return AskOutcome::DualEngine(payload);
                }
            }
        }

        let answer = data
            .get("answer")
            .and_then(Value::as_str)
            .filter(|a| !a.is_empty())
            .unwrap_or(NO_ANSWER)
            .to_string();
        let sources = data
            .get("sources")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        AskOutcome::WebOnly { answer, sources }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            AskOutcome::DualEngine(_) => "dual-engine",
            AskOutcome::Comparison(_) => "comparison",
            AskOutcome::WebOnly { .. } => "web-only",
        }
    }

    /// Bubbles in display order.
    pub fn replies(&self) -> Vec<AssistantReply> {
        match self {
            AskOutcome::DualEngine(p) => {
                let mut out = vec![
                    AssistantReply::text(format!(
                        "RAG Answer (From your document):\n{}",
                        p.rag.summary
                    )),
                    AssistantReply::new(
                        format!("Web Answer (CSE):\n{}", p.cse.summary),
                        p.cse.sources.clone(),
                    ),
                ];
                if let Some(fused) = p.fused.as_ref().filter(|f| !f.summary.is_empty()) {
                    out.push(AssistantReply::text(format!(
                        "Fused Summary:\n{}",
                        fused.summary
                    )));
                }
                out.push(AssistantReply::new(
                    p.final_answer.clone(),
                    p.final_citations
                        .iter()
                        .map(|c| c.reference.clone())
                        .collect(),
                ));
                out
            }
            AskOutcome::Comparison(p) => {
                let mut out = vec![
                    AssistantReply::new(
                        format!("Summary — A (Web):\n{}", p.a.summary),
                        p.a.sources.clone(),
                    ),
                    AssistantReply::new(
                        format!("Summary — B (Web):\n{}", p.b.summary),
                        p.b.sources.clone(),
                    ),
                ];
                // first row only, keeps the transcript compact
                if let Some(row) = p.matrix.first() {
                    out.push(AssistantReply::text(format!(
                        "Comparison Matrix → {}\nA: {}\nB: {}",
                        row.dimension, row.a_value, row.b_value
                    )));
                }
                let recommendation = if p.recommendation.is_empty() {
                    "-"
                } else {
                    p.recommendation.as_str()
                };
                out.push(AssistantReply::text(format!(
                    "Recommendation:\n{recommendation}"
                )));
                out
            }
            AskOutcome::WebOnly { answer, sources } => {
                vec![AssistantReply::new(answer.clone(), sources.clone())]
            }
        }
    }
}

/// Chat line for a failed ask call.
pub fn ask_failure_line(err: &ApiError) -> String {
    match err {
        ApiError::Application(raw) => format!("Error: {raw}"),
        other => format!("Error contacting server: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dual_engine_replies() {
        let data = json!({
            "answer": "Final",
            "sources": ["https://a.example"],
            "raw": {
                "rag": {"status": "known", "summary": "Doc says 12h battery"},
                "cse": {"summary": "Web says 11h", "sources": ["https://a.example"]},
                "fused": {"comparator": "aligned", "summary": "Both agree on ~12h"},
                "final_answer": "About 12 hours",
                "final_citations": [{"type": "pdf", "ref": "document"}, {"type": "url", "ref": "https://a.example"}]
            }
        });
        let outcome = AskOutcome::classify(&data);
        assert_eq!(outcome.shape_name(), "dual-engine");
        let replies = outcome.replies();
        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0].text, "RAG Answer (From your document):\nDoc says 12h battery");
        assert_eq!(replies[1].sources, vec!["https://a.example"]);
        assert_eq!(replies[2].text, "Fused Summary:\nBoth agree on ~12h");
        assert_eq!(replies[3].text, "About 12 hours");
        assert_eq!(replies[3].sources, vec!["document", "https://a.example"]);
    }

    #[test]
    fn test_dual_engine_without_fused() {
        let data = json!({
            "raw": {
                "rag": {"status": "known", "summary": "Doc"},
                "cse": {"summary": "Web", "sources": null},
                "final_answer": "Final",
                "final_citations": []
            }
        });
        let replies = AskOutcome::classify(&data).replies();
        assert_eq!(replies.len(), 3);
        assert!(replies[1].sources.is_empty());
    }

    #[test]
    fn test_unknown_rag_falls_back_to_web_only() {
        let data = json!({
            "answer": "Looked it up on the web",
            "sources": ["https://b.example"],
            "raw": {"rag": {"status": "unknown"}, "cse": {"summary": "x"}}
        });
        let outcome = AskOutcome::classify(&data);
        assert_eq!(
            outcome,
            AskOutcome::WebOnly {
                answer: "Looked it up on the web".into(),
                sources: vec!["https://b.example".into()]
            }
        );
    }

    #[test]
    fn test_web_only_defaults() {
        let replies = AskOutcome::classify(&json!({"answer": null})).replies();
        assert_eq!(replies, vec![AssistantReply::text(NO_ANSWER.into())]);
    }

    #[test]
    fn test_comparison_replies() {
        let data = json!({
            "A": {"summary": "A is light", "sources": ["https://a.example"]},
            "B": {"summary": "B is fast", "sources": []},
            "matrix": [
                {"dimension": "Answer (web)", "a_value": "light", "b_value": "fast"},
                {"dimension": "ignored", "a_value": "", "b_value": ""}
            ],
            "recommendation": ""
        });
        let outcome = AskOutcome::classify(&data);
        assert_eq!(outcome.shape_name(), "comparison");
        let replies = outcome.replies();
        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0].text, "Summary — A (Web):\nA is light");
        assert_eq!(replies[2].text, "Comparison Matrix → Answer (web)\nA: light\nB: fast");
        assert_eq!(replies[3].text, "Recommendation:\n-");
    }

    #[test]
    fn test_comparison_without_matrix() {
        let data = json!({"A": {}, "B": {}, "matrix": [], "recommendation": "Initialize comparison first."});
        let replies = AskOutcome::classify(&data).replies();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[2].text, "Recommendation:\nInitialize comparison first.");
    }

    #[test]
    fn test_failure_lines() {
        assert_eq!(
            ask_failure_line(&ApiError::Application(r#"{"ok":false}"#.into())),
            r#"Error: {"ok":false}"#
        );
        assert_eq!(
            ask_failure_line(&ApiError::Network("Failed to fetch".into())),
            "Error contacting server: Failed to fetch"
        );
    }
}
