//! The `responseSchema` constraint sent to Gemini.
//!
//! Gemini accepts an OpenAPI-style subset (`OBJECT`, `ARRAY`, `STRING`,
//! `NUMBER`, `enum`, `required`), not full JSON Schema, so this is written
//! by hand to mirror [`mg_core::AnalysisResponse`]. The full schemars
//! schema is still applied to the reply in [`crate::decode`].

use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

fn strings() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn choice(options: &[&str]) -> Value {
    json!({ "type": "STRING", "enum": options })
}

fn object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| ((*name).to_string(), schema.clone()))
        .collect();
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

/// Gemini `responseSchema` for an analysis report. Every property is required.
#[must_use]
pub fn response_schema() -> Value {
    object(&[
        ("app_name", string()),
        ("category", string()),
        (
            "daily_checkin",
            object(&[
                ("date", string()),
                ("self_reported_stress", number()),
                ("mood_word", string()),
                ("sleep_quality", string()),
                ("main_trigger", string()),
            ]),
        ),
        (
            "stress_analysis",
            object(&[
                ("current_score", number()),
                ("stress_level", choice(&["Low", "Moderate", "High"])),
                ("trend", choice(&["Increasing", "Stable", "Decreasing"])),
                ("primary_triggers", strings()),
            ]),
        ),
        (
            "stress_graph",
            object(&[
                (
                    "history",
                    json!({
                        "type": "ARRAY",
                        "items": object(&[("date", string()), ("stress_score", number())]),
                    }),
                ),
                ("seven_day_average", number()),
            ]),
        ),
        (
            "user_profile",
            object(&[
                ("emotional_state", string()),
                ("primary_intent", string()),
                ("coping_readiness", choice(&["Low", "Medium", "High"])),
            ]),
        ),
        (
            "coping_suggestions",
            json!({
                "type": "ARRAY",
                "items": object(&[
                    ("title", string()),
                    ("description", string()),
                    ("duration_minutes", number()),
                ]),
            }),
        ),
        ("calming_message", string()),
        (
            "recommendations",
            object(&[
                (
                    "videos",
                    json!({ "type": "ARRAY", "items": string(), "description": "YouTube URLs" }),
                ),
                ("shorts_reels", strings()),
                ("shayari", strings()),
                ("quotes", strings()),
                ("standup", strings()),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::{CopingReadiness, StressLevel, Trend};
    use pretty_assertions::assert_eq;

    #[test]
    fn top_level_requires_every_section() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            required,
            vec![
                "app_name",
                "category",
                "daily_checkin",
                "stress_analysis",
                "stress_graph",
                "user_profile",
                "coping_suggestions",
                "calming_message",
                "recommendations",
            ]
        );
    }

    #[test]
    fn enums_match_core_types() {
        let schema = response_schema();
        let analysis = &schema["properties"]["stress_analysis"]["properties"];
        let levels: Vec<&str> = StressLevel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(analysis["stress_level"]["enum"], json!(levels));
        let trends: Vec<&str> = Trend::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(analysis["trend"]["enum"], json!(trends));
        let readiness: Vec<&str> = CopingReadiness::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            schema["properties"]["user_profile"]["properties"]["coping_readiness"]["enum"],
            json!(readiness)
        );
    }

    #[test]
    fn uses_gemini_type_names() {
        let text = response_schema().to_string();
        assert!(text.contains("\"OBJECT\""));
        assert!(!text.contains("\"object\""));
        assert!(!text.contains("$ref"));
    }
}
