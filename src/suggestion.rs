//! Interpretation of the model's completion text.
//!
//! The upstream model is asked for a JSON object with keys `humor`,
//! `empathy`, `curiosity`, but compliance is best-effort. Anything that is
//! not a JSON object degrades to the raw text filling all three slots; this
//! never produces an error.

use serde_json::{Map, Value};

/// The three parallel reply suggestions shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTriple {
    pub humor: String,
    pub empathy: String,
    pub curiosity: String,
}

impl SuggestionTriple {
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "humor": self.humor,
            "empathy": self.empathy,
            "curiosity": self.curiosity,
        })
    }
}

/// Converts raw completion text into a [`SuggestionTriple`].
///
/// Primary path: the text parses as a JSON object, and each expected key is
/// read if present, coerced to text, and trimmed; missing keys become empty
/// strings. Fallback path: the trimmed raw text fills all three fields.
pub fn parse_suggestions(raw: &str) -> SuggestionTriple {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => SuggestionTriple {
            humor: field(&map, "humor"),
            empathy: field(&map, "empathy"),
            curiosity: field(&map, "curiosity"),
        },
        _ => {
            let text = raw.trim().to_string();
            SuggestionTriple {
                humor: text.clone(),
                empathy: text.clone(),
                curiosity: text,
            }
        }
    }
}

fn field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .map(|value| match value {
            Value::String(text) => text.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::parse_suggestions;

    #[test]
    fn well_formed_object_maps_to_the_three_fields() {
        let triple = parse_suggestions(r#"{"humor":" A ","empathy":"B","curiosity":" C"}"#);
        assert_eq!(triple.humor, "A");
        assert_eq!(triple.empathy, "B");
        assert_eq!(triple.curiosity, "C");
    }

    #[test]
    fn missing_keys_default_to_empty_strings() {
        let triple = parse_suggestions(r#"{"humor":"A"}"#);
        assert_eq!(triple.humor, "A");
        assert_eq!(triple.empathy, "");
        assert_eq!(triple.curiosity, "");
    }

    #[test]
    fn non_json_text_fills_all_three_fields() {
        let triple = parse_suggestions("  Sorry, I cannot help with that.  ");
        assert_eq!(triple.humor, "Sorry, I cannot help with that.");
        assert_eq!(triple.empathy, triple.humor);
        assert_eq!(triple.curiosity, triple.humor);
    }

    #[test]
    fn json_but_not_an_object_also_degrades() {
        let triple = parse_suggestions(r#"["humor","empathy"]"#);
        assert_eq!(triple.humor, r#"["humor","empathy"]"#);
        assert_eq!(triple.empathy, triple.humor);

        let triple = parse_suggestions(r#""just a string""#);
        assert_eq!(triple.curiosity, r#""just a string""#);
    }

    #[test]
    fn non_string_values_are_coerced_to_text() {
        let triple = parse_suggestions(r#"{"humor":42,"empathy":true,"curiosity":null}"#);
        assert_eq!(triple.humor, "42");
        assert_eq!(triple.empathy, "true");
        assert_eq!(triple.curiosity, "null");
    }

    #[test]
    fn chinese_round_trip_is_exact() {
        let raw = r#"{"humor":"哈哈当然在，有啥好事儿？","empathy":"在呢，怎么了？","curiosity":"在的，发生什么了？"}"#;
        let triple = parse_suggestions(raw);
        assert_eq!(triple.humor, "哈哈当然在，有啥好事儿？");
        assert_eq!(triple.empathy, "在呢，怎么了？");
        assert_eq!(triple.curiosity, "在的，发生什么了？");
    }

    #[test]
    fn prose_wrapped_json_is_treated_as_raw_text() {
        let raw = "Here is the JSON: {\"humor\":\"A\"}";
        let triple = parse_suggestions(raw);
        assert_eq!(triple.humor, raw);
    }
}
