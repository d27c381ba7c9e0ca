use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::params::{ParamsArgs, build_params};
use crate::core::AppConfig;
use crate::notify::{NotificationEvent, NotificationParams};

/// Read notification params in their JSON wire form from a file.
pub async fn read_params(path: &Path) -> Result<NotificationParams> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let params = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid notification params in {}", path.display()))?;
    Ok(params)
}

/// Resolve the params from an input file when given, otherwise from
/// the command line flags.
pub async fn resolve_params(
    input: Option<&Path>,
    args: &ParamsArgs,
) -> Result<NotificationParams> {
    match input {
        Some(path) => read_params(path).await,
        None => build_params(args),
    }
}

/// Render the event derived from the resolved params as JSON.
pub async fn render(
    input: Option<&Path>,
    args: &ParamsArgs,
    config: &AppConfig,
) -> Result<String> {
    let params = resolve_params(input, args).await?;
    let event = NotificationEvent::from(&params);
    tracing::debug!(
        experience_id = params.experience_id(),
        origin = ?event.origin,
        "Rendering notification event"
    );

    Ok(config.to_json(&event)?)
}

pub async fn run(input: Option<PathBuf>, args: ParamsArgs, config: &AppConfig) -> Result<()> {
    println!("{}", render(input.as_deref(), &args, config).await?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationOrigin;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_params_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{"experienceId": "exp-1", "body": {{"title": "Hi"}}, "isFromBackground": true}}"#
        )?;

        let params = resolve_params(Some(file.path()), &ParamsArgs::default()).await?;
        assert_eq!(params.experience_id(), "exp-1");
        assert_eq!(params.is_from_background(), Some(true));
        assert_eq!(NotificationEvent::from(&params).origin, NotificationOrigin::Selected);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_file_reports_path() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{"body": {{}}}}"#)?;

        let err = read_params(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Invalid notification params"));

        Ok(())
    }

    #[tokio::test]
    async fn test_render_prints_event_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{"experienceId": "exp-1", "body": {{"title": "Hi"}}, "isRemote": true, "actionId": "reply"}}"#
        )?;
        let config = AppConfig {
            log_filter: crate::core::DEFAULT_LOG_FILTER.to_string(),
            pretty: false,
        };

        let output = render(Some(file.path()), &ParamsArgs::default(), &config).await?;
        assert_eq!(
            output,
            r#"{"origin":"received","data":{"title":"Hi"},"remote":true,"actionId":"reply"}"#
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_flags() -> Result<()> {
        let args = ParamsArgs {
            experience_id: Some("exp-1".to_string()),
            ..Default::default()
        };
        let params = resolve_params(None, &args).await?;
        assert!(params.body().is_empty());
        assert_eq!(NotificationEvent::from(&params).origin, NotificationOrigin::Received);

        Ok(())
    }
}
