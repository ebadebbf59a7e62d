//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with a bounded
//! request timeout and optional proxy support.

use std::time::Duration;

use pitch_writer_core::ProxyConfig;

/// Build a `reqwest::Client` with the given timeout and proxy configuration.
///
/// - `Some(proxy)` -> configure proxy on the client
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
///
/// Every request through the returned client is bounded by `timeout`; the
/// transport default is never relied on.
pub fn build_http_client(timeout: Duration, proxy: Option<&ProxyConfig>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().timeout(timeout);
    match proxy {
        Some(cfg) => {
            let url = cfg.url();
            let mut p = reqwest::Proxy::all(&url).expect("valid proxy URL");
            if let (Some(u), Some(pw)) = (&cfg.username, &cfg.password) {
                p = p.basic_auth(u, pw);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    builder.build().expect("failed to build reqwest client")
}
