// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Core decision logic.
//!
//! [`authenticate`] applies a fixed precedence order across the configured
//! strategies and turns the selected verifier's answer into an
//! [`AuthOutcome`]. The first matching branch decides; a rejection inside a
//! branch never falls through to a later strategy.
//!
//! The function is pure apart from ticket construction: it performs no I/O,
//! takes no locks and writes no logs. Rejections are ordinary `Ok` values;
//! `Err` is reserved for misconfiguration.

use crate::config::AuthConfig;
use crate::defaults;
use crate::error::AuthError;
use crate::ticket::{AuthOutcome, Ticket};
use crate::verifier::{RegisteredVerifier, VerifierRegistry};

/// Authenticate one request given the value of the configured header.
///
/// `header_value` is `None` when the header was absent from the request,
/// which is distinct from an empty string value.
///
/// Precedence:
/// 1. no credential presented → `NoResult`;
/// 2. registered-verifier mode → the named entry if one is configured
///    (missing entry is a configuration error), otherwise the first
///    full-ticket verifier, otherwise the first simple verifier, otherwise
///    `NoResult`;
/// 3. inline key-check function;
/// 4. static key, compared case-sensitively;
/// 5. nothing configured → `NoResult`.
pub fn authenticate(
    header_value: Option<&str>,
    config: &AuthConfig,
    registry: &VerifierRegistry,
) -> Result<AuthOutcome, AuthError> {
    let Some(api_key) = header_value else {
        return Ok(AuthOutcome::NoResult);
    };

    if config.use_registered_verifier {
        return authenticate_registered(api_key, config, registry);
    }

    if let Some(key_check) = &config.key_check {
        let (accepted, principal) = key_check(api_key);
        return simple_outcome(accepted, principal);
    }

    if let Some(expected) = &config.api_key {
        if api_key == expected {
            return Ok(AuthOutcome::Success(Ticket::new(defaults::DEFAULT_PRINCIPAL)?));
        }
        return Ok(AuthOutcome::NoResult);
    }

    Ok(AuthOutcome::NoResult)
}

/// Registered-verifier branch of [`authenticate`].
///
/// Full-ticket verifiers are pass-through: their outcome, including `Fail`
/// and `NoResult`, is returned verbatim with no post-processing.
fn authenticate_registered(
    api_key: &str,
    config: &AuthConfig,
    registry: &VerifierRegistry,
) -> Result<AuthOutcome, AuthError> {
    if let Some(name) = &config.verifier_name {
        return match registry.get(name) {
            Some(RegisteredVerifier::Full(verifier)) => Ok(verifier.verify(api_key)),
            Some(RegisteredVerifier::Simple(verifier)) => {
                let (accepted, principal) = verifier.verify(api_key);
                simple_outcome(accepted, principal)
            }
            None => Err(AuthError::VerifierNotRegistered { name: name.clone() }),
        };
    }

    if let Some(verifier) = registry.find_full() {
        return Ok(verifier.verify(api_key));
    }

    if let Some(verifier) = registry.find_simple() {
        let (accepted, principal) = verifier.verify(api_key);
        return simple_outcome(accepted, principal);
    }

    // Registered mode with an empty registry and no name pinned defers to
    // other schemes instead of faulting.
    Ok(AuthOutcome::NoResult)
}

/// Wrap a simple verifier's answer into an outcome.
///
/// The principal name is only consulted on acceptance; an accepted key with
/// an empty name surfaces as [`AuthError::MissingPrincipal`].
fn simple_outcome(accepted: bool, principal: String) -> Result<AuthOutcome, AuthError> {
    if accepted {
        Ok(AuthOutcome::Success(Ticket::new(principal)?))
    } else {
        Ok(AuthOutcome::NoResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_key_config() -> AuthConfig {
        AuthConfig::new().with_api_key("testapi")
    }

    #[test]
    fn missing_header_is_no_result_regardless_of_configuration() {
        let registry = VerifierRegistry::new();

        for config in [
            AuthConfig::new(),
            static_key_config(),
            AuthConfig::new().with_key_check(|_| (true, "anyone".to_string())),
            AuthConfig::new().use_registered_verifier(),
            AuthConfig::new().with_verifier_name("users"),
        ] {
            let outcome = authenticate(None, &config, &registry).unwrap();
            assert_eq!(outcome, AuthOutcome::NoResult);
        }
    }

    #[test]
    fn static_key_match_issues_default_principal() {
        let registry = VerifierRegistry::new();
        let outcome = authenticate(Some("testapi"), &static_key_config(), &registry).unwrap();

        let ticket = outcome.ticket().expect("expected success");
        assert_eq!(ticket.principal, defaults::DEFAULT_PRINCIPAL);
        assert_eq!(ticket.scheme, defaults::SCHEME);
    }

    #[test]
    fn static_key_mismatch_is_no_result() {
        let registry = VerifierRegistry::new();
        for wrong in ["wrongkey", "TESTAPI", "testapi ", ""] {
            let outcome = authenticate(Some(wrong), &static_key_config(), &registry).unwrap();
            assert_eq!(outcome, AuthOutcome::NoResult, "key {wrong:?} must not match");
        }
    }

    #[test]
    fn key_check_mirrors_function_output() {
        let registry = VerifierRegistry::new();
        let config =
            AuthConfig::new().with_key_check(|key| (key.starts_with("good"), key.to_string()));

        let outcome = authenticate(Some("goodkey"), &config, &registry).unwrap();
        assert_eq!(outcome.ticket().unwrap().principal, "goodkey");

        let outcome = authenticate(Some("badkey"), &config, &registry).unwrap();
        assert_eq!(outcome, AuthOutcome::NoResult);
    }

    #[test]
    fn key_check_takes_precedence_over_static_key() {
        let registry = VerifierRegistry::new();
        let config = static_key_config().with_key_check(|_| (false, String::new()));

        // The static key would match, but the inline function decides.
        let outcome = authenticate(Some("testapi"), &config, &registry).unwrap();
        assert_eq!(outcome, AuthOutcome::NoResult);
    }

    #[test]
    fn accepted_key_with_empty_principal_is_a_fault() {
        let registry = VerifierRegistry::new();
        let config = AuthConfig::new().with_key_check(|_| (true, String::new()));

        let result = authenticate(Some("anykey"), &config, &registry);
        assert!(matches!(result, Err(AuthError::MissingPrincipal)));
    }

    #[test]
    fn full_verifier_outcome_passes_through_unchanged() {
        let mut registry = VerifierRegistry::new();
        registry.register_full("tickets", |key: &str| {
            if key == "machine-key" {
                AuthOutcome::Success(
                    Ticket::new("machine")
                        .unwrap()
                        .with_role("testrole")
                        .with_property("returnUrl", "http://localhost"),
                )
            } else {
                AuthOutcome::fail("unknown machine key")
            }
        });
        let config = AuthConfig::new().use_registered_verifier();

        let outcome = authenticate(Some("machine-key"), &config, &registry).unwrap();
        let ticket = outcome.ticket().unwrap();
        assert!(ticket.has_role("testrole"));
        assert_eq!(ticket.property("returnUrl"), Some("http://localhost"));

        let outcome = authenticate(Some("other"), &config, &registry).unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Fail {
                reason: "unknown machine key".to_string()
            }
        );
    }

    #[test]
    fn full_verifier_is_preferred_over_simple() {
        let mut registry = VerifierRegistry::new();
        registry.register_simple("simple", |_: &str| (true, "from-simple".to_string()));
        registry.register_full("full", |_: &str| {
            AuthOutcome::Success(Ticket::new("from-full").unwrap())
        });
        let config = AuthConfig::new().use_registered_verifier();

        let outcome = authenticate(Some("key"), &config, &registry).unwrap();
        assert_eq!(outcome.ticket().unwrap().principal, "from-full");
    }

    #[test]
    fn registered_simple_verifier_builds_the_ticket() {
        let mut registry = VerifierRegistry::new();
        registry.register_simple("users", |key: &str| (key == "u-key", "alice".to_string()));
        let config = AuthConfig::new().use_registered_verifier();

        let outcome = authenticate(Some("u-key"), &config, &registry).unwrap();
        assert_eq!(outcome.ticket().unwrap().principal, "alice");

        let outcome = authenticate(Some("nope"), &config, &registry).unwrap();
        assert_eq!(outcome, AuthOutcome::NoResult);
    }

    #[test]
    fn named_verifier_is_used_even_when_others_exist() {
        let mut registry = VerifierRegistry::new();
        registry.register_full("full", |_: &str| {
            AuthOutcome::Success(Ticket::new("from-full").unwrap())
        });
        registry.register_simple("users", |_: &str| (true, "from-named".to_string()));
        let config = AuthConfig::new().with_verifier_name("users");

        let outcome = authenticate(Some("key"), &config, &registry).unwrap();
        assert_eq!(outcome.ticket().unwrap().principal, "from-named");
    }

    #[test]
    fn missing_named_verifier_is_a_fault_not_a_rejection() {
        let registry = VerifierRegistry::new();
        let config = AuthConfig::new().with_verifier_name("users");

        let result = authenticate(Some("key"), &config, &registry);
        match result {
            Err(AuthError::VerifierNotRegistered { name }) => assert_eq!(name, "users"),
            other => panic!("expected VerifierNotRegistered, got {other:?}"),
        }
    }

    #[test]
    fn registered_mode_with_empty_registry_defers() {
        let registry = VerifierRegistry::new();
        let config = AuthConfig::new().use_registered_verifier();

        let outcome = authenticate(Some("key"), &config, &registry).unwrap();
        assert_eq!(outcome, AuthOutcome::NoResult);
    }

    #[test]
    fn registered_mode_shadows_inline_and_static_strategies() {
        let mut registry = VerifierRegistry::new();
        registry.register_simple("users", |_: &str| (false, String::new()));
        let config = static_key_config()
            .with_key_check(|_| (true, "inline".to_string()))
            .use_registered_verifier();

        // The registered verifier rejects; no fallthrough to the inline
        // function or the static key even though both would accept.
        let outcome = authenticate(Some("testapi"), &config, &registry).unwrap();
        assert_eq!(outcome, AuthOutcome::NoResult);
    }

    #[test]
    fn empty_header_value_is_a_credential() {
        // Present-but-empty is handed to the verifier, unlike an absent header.
        let registry = VerifierRegistry::new();
        let config = AuthConfig::new().with_key_check(|key| (key.is_empty(), "anon".to_string()));

        let outcome = authenticate(Some(""), &config, &registry).unwrap();
        assert_eq!(outcome.ticket().unwrap().principal, "anon");
    }
}
