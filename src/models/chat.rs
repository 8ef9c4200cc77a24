use serde::{Deserialize, Serialize};

/// Reply kind for navigation answers (backend sends Portuguese identifiers)
pub const KIND_NAVIGATION: &str = "navegacao";
/// Reply kind for building-info answers
pub const KIND_BUILDING_INFO: &str = "info_predio";

/// Fallback shown when the backend answers without a `resposta` field
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that request.";

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    #[serde(rename = "mensagem")]
    pub message: String,
}

/// Response from `POST /api/chat`. Field names on the wire are Portuguese,
/// they are part of the backend contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "resposta", default)]
    pub reply: Option<String>,
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "origem", default)]
    pub origin: Option<String>,
    #[serde(rename = "destino", default)]
    pub destination: Option<String>,
}

impl ChatResponse {
    /// Assistant text to display, falling back when the backend sent none
    pub fn reply_text(&self) -> &str {
        self.reply.as_deref().unwrap_or(FALLBACK_REPLY)
    }

    /// Origin/destination pair when the assistant answered a navigation
    /// question. Requires the kind marker and both endpoints.
    pub fn navigation(&self) -> Option<(&str, &str)> {
        if self.kind.as_deref() != Some(KIND_NAVIGATION) {
            return None;
        }
        match (self.origin.as_deref(), self.destination.as_deref()) {
            (Some(origin), Some(destination)) => Some((origin, destination)),
            _ => None,
        }
    }

    pub fn is_building_info(&self) -> bool {
        self.kind.as_deref() == Some(KIND_BUILDING_INFO)
    }
}

/// Response from `GET /api/predios/{ref}/info`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildingInfoResponse {
    #[serde(rename = "texto_formatado", default)]
    pub formatted_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_reply() {
        let json = r#"{
            "resposta": "Here is the route from A to D.",
            "tipo": "navegacao",
            "origem": "A",
            "destino": "D"
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.reply_text(), "Here is the route from A to D.");
        assert_eq!(response.navigation(), Some(("A", "D")));
        assert!(!response.is_building_info());
    }

    #[test]
    fn parses_minimal_reply() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"resposta": "Building A hosts admissions."}"#).unwrap();
        assert_eq!(response.reply_text(), "Building A hosts admissions.");
        assert_eq!(response.navigation(), None);
    }

    #[test]
    fn missing_reply_falls_back() {
        let response: ChatResponse = serde_json::from_str(r#"{"resposta": null}"#).unwrap();
        assert_eq!(response.reply_text(), FALLBACK_REPLY);

        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reply_text(), FALLBACK_REPLY);
    }

    #[test]
    fn navigation_requires_both_endpoints() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"resposta": "ok", "tipo": "navegacao", "origem": "A"}"#,
        )
        .unwrap();
        assert_eq!(response.navigation(), None);

        let response: ChatResponse = serde_json::from_str(
            r#"{"resposta": "ok", "origem": "A", "destino": "D"}"#,
        )
        .unwrap();
        assert_eq!(response.navigation(), None);
    }

    #[test]
    fn building_info_kind_is_detected() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"resposta": "ok", "tipo": "info_predio"}"#).unwrap();
        assert!(response.is_building_info());
    }

    #[test]
    fn chat_request_uses_wire_field_name() {
        let request = ChatRequest { message: "how do I get to the library?".to_string() };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mensagem"], "how do I get to the library?");
    }
}
