//! Static leaderboard shown beside the canvas
//!
//! Records come from `data.json` next to the page. Loading is best effort:
//! any failure is logged and the game runs without a leaderboard.

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

/// Where the page serves the leaderboard from
pub const LEADERBOARD_URL: &str = "data.json";

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub score: u64,
}

impl LeaderboardEntry {
    /// One display line, e.g. `1. alice - 120 pts`
    pub fn display_line(&self) -> String {
        format!("{}. {} - {} pts", self.rank, self.username, self.score)
    }
}

/// Parse the JSON array served as `data.json`
pub fn parse_leaderboard(json: &str) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    Ok(serde_json::from_str(json)?)
}

/// Fetch and parse the leaderboard (WASM only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_leaderboard(url: &str) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = crate::platform::dom::window()?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LeaderboardError::Fetch(format!("{:?}", e)))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| LeaderboardError::Fetch("not a Response".to_string()))?;
    if !resp.ok() {
        return Err(LeaderboardError::Status(resp.status()));
    }

    let text_promise = resp
        .text()
        .map_err(|e| LeaderboardError::Fetch(format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| LeaderboardError::Fetch(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();

    parse_leaderboard(&text)
}

/// Append one row per entry to `#leaderboard` (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> Result<(), crate::error::WebError> {
    use crate::platform::dom;

    let document = dom::document()?;
    let container = dom::element("leaderboard")?;
    for entry in entries {
        let row = document.create_element("div")?;
        row.set_class_name("leaderboard-entry");
        row.set_text_content(Some(&entry.display_line()));
        container.append_child(&row)?;
    }
    Ok(())
}

/// Fetch and show the leaderboard, logging any failure (WASM only)
#[cfg(target_arch = "wasm32")]
pub async fn load_and_render() {
    match fetch_leaderboard(LEADERBOARD_URL).await {
        Ok(entries) => {
            log::info!("Loaded {} leaderboard entries", entries.len());
            if let Err(e) = render_leaderboard(&entries) {
                log::error!("Error showing leaderboard: {}", e);
            }
        }
        Err(e) => log::error!("Error loading data: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let json = r#"[
            {"rank": 1, "username": "maya", "score": 120},
            {"rank": 2, "username": "tom", "score": 87}
        ]"#;
        let entries = parse_leaderboard(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_line(), "1. maya - 120 pts");
        assert_eq!(entries[1].display_line(), "2. tom - 87 pts");
    }

    #[test]
    fn test_bundled_data_parses() {
        let entries = parse_leaderboard(include_str!("../data.json")).unwrap();
        assert!(!entries.is_empty());
        assert_eq!(entries[0].rank, 1);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_leaderboard("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let err = parse_leaderboard(r#"{"rank": 1}"#).unwrap_err();
        assert!(matches!(err, LeaderboardError::Parse(_)));
        let err = parse_leaderboard(r#"[{"rank": 1, "username": "x"}]"#).unwrap_err();
        assert!(matches!(err, LeaderboardError::Parse(_)));
    }
}
