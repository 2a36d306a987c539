// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// The request a document is being served for.
///
/// Used only to build a submission endpoint for forms that declare none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Host the page was requested from, e.g. `example.com`.
    pub host: String,

    /// Path and query of the request, e.g. `/page?x=1`. Taken verbatim.
    pub request_uri: String,
}

impl RequestContext {
    pub fn new<H, U>(host: H, request_uri: U) -> RequestContext
    where
        H: Into<String>,
        U: Into<String>,
    {
        RequestContext {
            host: host.into(),
            request_uri: request_uri.into(),
        }
    }

    /// Protocol-relative URL of the current request: `//host` + request URI.
    pub fn default_action_url(&self) -> String {
        format!("//{}{}", self.host, self.request_uri)
    }
}
