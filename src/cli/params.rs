use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::core::AppConfig;
use crate::notify::{NotificationBody, NotificationParams};

/// Flags describing a notification on the command line
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ParamsArgs {
    /// Experience the notification belongs to
    #[arg(long)]
    pub experience_id: Option<String>,

    /// Notification body as a JSON object
    #[arg(long)]
    pub body: Option<String>,

    /// Whether the notification was delivered by push
    #[arg(long)]
    pub remote: Option<bool>,

    /// Whether the app was in the background when it arrived
    #[arg(long)]
    pub from_background: Option<bool>,

    /// Identifier of the action the user picked
    #[arg(long)]
    pub action_id: Option<String>,

    /// Text the user typed into the notification
    #[arg(long)]
    pub user_text: Option<String>,
}

/// Parse a JSON object into a notification body. Omitting `--body`
/// gives an empty body.
pub fn parse_body(raw: Option<&str>) -> Result<NotificationBody> {
    let Some(raw) = raw else {
        return Ok(NotificationBody::new());
    };

    let value: Value = serde_json::from_str(raw).context("Failed to parse --body as JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!(
            "Notification body must be a JSON object, got: {}",
            other
        )),
    }
}

pub fn build_params(args: &ParamsArgs) -> Result<NotificationParams> {
    let experience_id = args
        .experience_id
        .clone()
        .ok_or_else(|| anyhow!("Missing --experience-id"))?;
    let body = parse_body(args.body.as_deref())?;

    Ok(NotificationParams::new(
        experience_id,
        body,
        args.remote,
        args.from_background,
        args.action_id.clone(),
        args.user_text.clone(),
    ))
}

/// Render the params built from `args` as JSON.
pub fn render(args: &ParamsArgs, config: &AppConfig) -> Result<String> {
    let params = build_params(args)?;
    tracing::debug!(experience_id = params.experience_id(), "Built notification params");

    Ok(config.to_json(&params)?)
}

pub async fn run(args: ParamsArgs, config: &AppConfig) -> Result<()> {
    println!("{}", render(&args, config)?);

    Ok(())
}
