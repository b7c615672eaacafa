//! Init command implementation
//!
//! Writes the endpoint settings used by every sync command.

use colored::Colorize;
use confsync_meta::EndpointSettings;

use crate::context::AppContext;
use crate::error::Result;
use crate::interactive;

/// Write endpoint settings, prompting for values when `api` is not given.
pub fn run_init(ctx: &AppContext, api: Option<String>, token: Option<String>) -> Result<()> {
    let existing = EndpointSettings::load(&ctx.settings_path).ok();

    let (api, token) = match api {
        Some(api) => (api, token),
        None => interactive::prompt_endpoint(existing.as_ref().map(|s| s.api.as_str()))?,
    };

    let settings = EndpointSettings::new(&api, token)?;
    settings.save(&ctx.settings_path)?;

    let verb = if existing.is_some() { "Updated" } else { "Created" };
    println!(
        "{} {} endpoint settings at {}",
        "OK".green().bold(),
        verb,
        ctx.settings_path.as_str().yellow()
    );
    println!("   API: {}", settings.api.cyan());
    if settings.token.is_some() {
        println!("   Token: {}", "(set)".dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> AppContext {
        AppContext::resolve(
            temp.path(),
            Path::new("configs"),
            Some(temp.path().join("cfg/settings.json")),
        )
        .unwrap()
    }

    #[test]
    fn test_init_writes_settings() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);

        run_init(&ctx, Some("http://localhost:8080/".into()), Some("tok".into())).unwrap();

        let settings = EndpointSettings::load(&ctx.settings_path).unwrap();
        assert_eq!(settings.api, "http://localhost:8080");
        assert_eq!(settings.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_init_overwrites_previous_settings() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);

        run_init(&ctx, Some("http://old".into()), Some("tok".into())).unwrap();
        run_init(&ctx, Some("https://new".into()), None).unwrap();

        let settings = EndpointSettings::load(&ctx.settings_path).unwrap();
        assert_eq!(settings.api, "https://new");
        assert_eq!(settings.token, None);
    }

    #[test]
    fn test_init_rejects_bad_url() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);

        assert!(run_init(&ctx, Some("localhost:8080".into()), None).is_err());
        assert!(!ctx.settings_path.exists());
    }
}
