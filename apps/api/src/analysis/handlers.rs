//! Axum route handlers for the analysis catalog.

use axum::Json;
use serde::Serialize;

use crate::analysis::catalog::AnalysisOption;

#[derive(Debug, Serialize)]
pub struct OptionInfo {
    pub key: AnalysisOption,
    pub title: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/options
///
/// Lists the nine analysis options a client can offer for selection.
pub async fn handle_list_options() -> Json<Vec<OptionInfo>> {
    Json(
        AnalysisOption::ALL
            .into_iter()
            .map(|key| OptionInfo {
                key,
                title: key.title(),
                description: key.description(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_options_returns_all_nine() {
        let Json(options) = handle_list_options().await;
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].title, "Resume Review");
        assert_eq!(options[8].key, AnalysisOption::Custom);
    }
}
