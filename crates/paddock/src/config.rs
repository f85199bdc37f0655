//! CLI configuration: thin wrapper around `paddock_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--url, --timeout, --insecure).

use paddock_core::FacilityConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use paddock_config::{
    Config, DEFAULT_URL, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build the `FacilityConfig` for this invocation.
///
/// Flag > env > profile > built-in default. With no config file at all
/// the CLI talks to [`DEFAULT_URL`].
pub fn resolve(global: &GlobalOpts) -> Result<FacilityConfig, CliError> {
    let cfg = load_config_or_default();
    resolve_with(&cfg, global)
}

pub fn resolve_with(cfg: &Config, global: &GlobalOpts) -> Result<FacilityConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        // An explicitly requested profile must exist unless --url replaces it.
        None if global.profile.is_some() && global.url.is_none() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        None => Profile::new(DEFAULT_URL),
    };

    if let Some(ref url) = global.url {
        profile.url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    tracing::debug!(profile = %profile_name, url = %profile.url, "resolved backend");
    Ok(paddock_config::profile_to_facility_config(
        &profile,
        &cfg.defaults,
    )?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use paddock_core::TlsVerification;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["paddock"];
        argv.extend_from_slice(args);
        argv.push("dashboard");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with(name: &str, profile: Profile) -> Config {
        let mut cfg = Config::default();
        cfg.default_profile = Some(name.into());
        cfg.profiles.insert(name.into(), profile);
        cfg
    }

    #[test]
    fn no_config_uses_default_url() {
        let resolved = resolve_with(&Config::default(), &global(&[])).unwrap();
        assert_eq!(resolved.url.as_str(), "http://localhost:5000/");
        assert_eq!(resolved.timeout, None);
        assert_eq!(resolved.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn flags_override_profile() {
        let mut farm = Profile::new("http://farm.local:5000");
        farm.timeout = Some(10);
        let cfg = config_with("farm", farm);

        let resolved = resolve_with(&cfg, &global(&[])).unwrap();
        assert_eq!(resolved.url.host_str(), Some("farm.local"));
        assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));

        let resolved = resolve_with(
            &cfg,
            &global(&["--url", "https://backup.local", "--timeout", "3", "-k"]),
        )
        .unwrap();
        assert_eq!(resolved.url.host_str(), Some("backup.local"));
        assert_eq!(resolved.timeout, Some(Duration::from_secs(3)));
        assert_eq!(resolved.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = config_with("farm", Profile::new("http://farm.local:5000"));
        let err = resolve_with(&cfg, &global(&["--profile", "barn"])).unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "barn");
                assert_eq!(available, "farm");
            }
            other => panic!("expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = resolve_with(&Config::default(), &global(&["--url", "not a url"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
