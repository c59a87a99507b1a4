// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Scheme-wide defaults.
//!
//! These constants define the authentication scheme identity and are used
//! wherever the caller did not configure an explicit value.

/// Name of the authentication scheme, attached to every issued ticket.
pub const SCHEME: &str = "ApiKeyHeader";

/// Header inspected for the API key when no other header is configured.
///
/// Header names are matched case-insensitively, so this also covers the
/// conventional `X-APIKEY` spelling on the wire.
pub const API_KEY_HEADER: &str = "x-apikey";

/// Principal name used for tickets issued by the static-key strategy,
/// which has no per-user identity of its own.
pub const DEFAULT_PRINCIPAL: &str = "ApiKeyHeader User";
