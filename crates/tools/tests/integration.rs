#[cfg(test)]
mod tests {
    use openapp_core::EngineConfig;
    use openapp_tools::{OpenAppTool, Tool, ToolRegistry};
    use serde_json::json;
    use std::sync::Arc;

    /// Config whose desktop scan sees only the given fixture directory.
    /// Flatpak/Snap contributions still depend on the host, so assertions
    /// stay additive: fixture entries are present, nothing is assumed
    /// absent.
    fn fixture_config(dir: &std::path::Path) -> EngineConfig {
        EngineConfig {
            desktop_entry_dirs: Some(vec![dir.to_path_buf()]),
            ..Default::default()
        }
    }

    fn write_entry(dir: &std::path::Path, stem: &str, name: &str) {
        std::fs::write(
            dir.join(format!("{}.desktop", stem)),
            format!("[Desktop Entry]\nType=Application\nName={}\nExec={}\n", name, stem),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(OpenAppTool::default()));

        assert!(registry.get("open_app").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.names(), vec!["open_app".to_string()]);
    }

    #[tokio::test]
    async fn test_registry_schemas_describe_function_calls() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(OpenAppTool::default()));

        let schemas = registry.schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0]["function"]["name"], "open_app");
        assert!(schemas[0]["function"]["parameters"]["properties"]["app_name"].is_object());
    }

    #[tokio::test]
    async fn test_listing_mode_with_fixture_entries() {
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");
        write_entry(dir.path(), "openapp-fixture-beta", "Fixture Beta");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool.execute(json!({})).await.unwrap();

        assert!(result.success);
        let message = result.output["message"].as_str().unwrap();
        assert!(message.contains("openapp-fixture-alpha (Fixture Alpha)"));
        assert!(message.contains("openapp-fixture-beta (Fixture Beta)"));
    }

    #[tokio::test]
    async fn test_null_args_treated_as_listing_request() {
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool.execute(serde_json::Value::Null).await.unwrap();

        assert!(result.success);
        assert!(!result.output["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_a_validation_error() {
        let tool = OpenAppTool::default();
        let result = tool.execute(json!({"app_name": 5})).await;
        assert!(matches!(
            result,
            Err(openapp_tools::ToolError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_exact_match_exhausting_chain_reports_launch_failure() {
        // The fixture id is not on PATH and no packaging system knows it,
        // so every strategy skips or fails; the caller gets the vague
        // reinstall/permissions notice, not an error.
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool
            .execute(json!({"app_name": "openapp-fixture-alpha"}))
            .await
            .unwrap();

        assert!(!result.success);
        let message = result.output["message"].as_str().unwrap();
        assert!(message.contains("Unable to launch 'openapp-fixture-alpha'"));
        assert!(message.contains("reinstalling or extra permissions"));
        assert_eq!(result.error.as_deref(), Some("launch failed"));
    }

    #[tokio::test]
    async fn test_close_typo_resolves_to_fixture_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool
            .execute(json!({"app_name": "openapp-fixture-alphaa"}))
            .await
            .unwrap();

        // Fuzzy-corrected to the fixture id, whose launch then fails.
        assert!(!result.success);
        assert!(result.output["message"]
            .as_str()
            .unwrap()
            .contains("openapp-fixture-alpha"));
    }

    #[tokio::test]
    async fn test_distant_query_never_launches() {
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");
        write_entry(dir.path(), "openapp-fixture-beta", "Fixture Beta");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool
            .execute(json!({"app_name": "qqzz-unrelated-qqzz"}))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("ambiguous query"));
        let message = result.output["message"].as_str().unwrap();
        assert!(message.starts_with("Similar applications to 'qqzz-unrelated-qqzz':"));
        assert!(message.contains("% match"));
    }

    #[tokio::test]
    async fn test_blank_query_falls_back_to_listing() {
        let dir = tempfile::tempdir().unwrap();
        write_entry(dir.path(), "openapp-fixture-alpha", "Fixture Alpha");

        let tool = OpenAppTool::new(fixture_config(dir.path()));
        let result = tool.execute(json!({"app_name": "   "})).await.unwrap();

        assert!(result.success);
        assert!(result.output["message"]
            .as_str()
            .unwrap()
            .contains("openapp-fixture-alpha"));
    }
}
