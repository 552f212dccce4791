use fairsplit_application::Role;
use fairsplit_domain::{RoundingMode, SettlementContext, UnknownParticipantPolicy};
use fairsplit_presentation::DEFAULT_CURRENCY;
use std::{borrow::Cow, env};

pub const SCALE_VAR: &str = "FAIRSPLIT_SCALE";
pub const ROUNDING_VAR: &str = "FAIRSPLIT_ROUNDING";
pub const UNKNOWN_PARTICIPANTS_VAR: &str = "FAIRSPLIT_UNKNOWN_PARTICIPANTS";
pub const CURRENCY_VAR: &str = "FAIRSPLIT_CURRENCY";
pub const ROLE_VAR: &str = "FAIRSPLIT_ROLE";

/// Runtime configuration read from `.env` and the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub context: SettlementContext,
    pub currency: String,
    pub role: Role,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Cow<'static, str>> {
        let defaults = SettlementContext::cents_default();

        let scale = match lookup(SCALE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("{SCALE_VAR} must be a non-negative integer, got '{raw}'"))?,
            None => defaults.scale,
        };

        let rounding_mode = match lookup(ROUNDING_VAR).as_deref().map(str::trim) {
            None => defaults.rounding_mode,
            Some("half-up") => RoundingMode::HalfUp,
            Some("half-even") => RoundingMode::HalfEven,
            Some(other) => {
                return Err(
                    format!("{ROUNDING_VAR} must be 'half-up' or 'half-even', got '{other}'")
                        .into(),
                );
            }
        };

        let unknown_participants =
            match lookup(UNKNOWN_PARTICIPANTS_VAR).as_deref().map(str::trim) {
                None => defaults.unknown_participants,
                Some("reject") => UnknownParticipantPolicy::Reject,
                Some("extend") => UnknownParticipantPolicy::Extend,
                Some(other) => {
                    return Err(format!(
                        "{UNKNOWN_PARTICIPANTS_VAR} must be 'reject' or 'extend', got '{other}'"
                    )
                    .into());
                }
            };

        let role = match lookup(ROLE_VAR).as_deref().map(str::trim) {
            None | Some("user") => Role::User,
            Some("admin") => Role::Admin,
            Some("super-admin") => Role::SuperAdmin,
            Some(other) => {
                return Err(format!(
                    "{ROLE_VAR} must be 'user', 'admin' or 'super-admin', got '{other}'"
                )
                .into());
            }
        };

        let currency = lookup(CURRENCY_VAR)
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());

        let context = SettlementContext {
            scale,
            rounding_mode,
            unknown_participants,
        }
        .validate()
        .map_err(|err| err.to_string())?;

        Ok(Self {
            context,
            currency,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, Cow<'static, str>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_cents_and_npr() {
        let config = config(&[]).expect("defaults are valid");
        assert_eq!(config.context, SettlementContext::cents_default());
        assert_eq!(config.currency, "NPR");
        assert_eq!(config.role, Role::User);
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            (SCALE_VAR, "0"),
            (ROUNDING_VAR, "half-even"),
            (UNKNOWN_PARTICIPANTS_VAR, "extend"),
            (CURRENCY_VAR, "JPY"),
            (ROLE_VAR, "admin"),
        ])
        .expect("valid config");

        assert_eq!(config.context.scale, 0);
        assert_eq!(config.context.rounding_mode, RoundingMode::HalfEven);
        assert_eq!(
            config.context.unknown_participants,
            UnknownParticipantPolicy::Extend
        );
        assert_eq!(config.currency, "JPY");
        assert_eq!(config.role, Role::Admin);
    }

    #[rstest]
    #[case::bad_scale(SCALE_VAR, "two")]
    #[case::scale_too_large(SCALE_VAR, "40")]
    #[case::bad_rounding(ROUNDING_VAR, "floor")]
    #[case::bad_policy(UNKNOWN_PARTICIPANTS_VAR, "ignore")]
    #[case::bad_role(ROLE_VAR, "root")]
    fn rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        assert!(config(&[(key, value)]).is_err());
    }
}
