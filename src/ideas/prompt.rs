use serde_json::{json, Value};

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Based on the topic \"{topic}\", generate a catchy, thought-provoking TEDx talk title \
         and a brief, compelling one-paragraph abstract for it. The abstract should be around \
         50-70 words."
    )
}

/// Output shape the service is asked to honour. Replies are still parsed as untrusted text.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The catchy, thought-provoking TEDx talk title."
            },
            "abstract": {
                "type": "STRING",
                "description": "A brief, compelling one-paragraph abstract for the talk."
            }
        },
        "required": ["title", "abstract"]
    })
}

pub fn build_request_body(topic: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": build_prompt(topic) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}
