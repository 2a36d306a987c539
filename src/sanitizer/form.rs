// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Corrects the submission attributes of `<form>` elements.
//!
//! After the pass every form has an explicit `method`, a submission
//! endpoint that is not plaintext `http://` (`action` for GET, `action-xhr`
//! for POST, with `action` removed from POST forms), and a `target` of
//! either `_top` or `_blank`.

use log::{debug, trace};
use markup5ever_rcdom::Handle;

use super::Sanitizer;
use crate::dom;
use crate::request::RequestContext;

const METHOD: &str = "method";
const ACTION: &str = "action";
const ACTION_XHR: &str = "action-xhr";
const TARGET: &str = "target";

const HTTP_PREFIX: &str = "http://";

/// Submission method resolved from a form's `method` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    /// Any other declared value, lower-cased.
    Other(String),
}

impl Method {
    /// Absent or empty means `get`, as in HTML.
    pub fn resolve(declared: Option<&str>) -> Method {
        match declared {
            None | Some("") => Method::Get,
            Some(value) => match &*value.to_ascii_lowercase() {
                "get" => Method::Get,
                "post" => Method::Post,
                other => Method::Other(other.to_owned()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match *self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Other(ref other) => other,
        }
    }
}

/// Where a form's response may be displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Top,
    Blank,
}

impl Target {
    /// `_self`, `_parent` and a missing target behave like `_top`; any other
    /// browsing context name behaves like `_blank`.
    pub fn coerce(declared: Option<&str>) -> Target {
        match declared.unwrap_or("") {
            "_top" | "" | "_self" | "_parent" => Target::Top,
            _ => Target::Blank,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Top => "_top",
            Target::Blank => "_blank",
        }
    }
}

/// Turn `http://host/path` into `//host/path`.
///
/// The scheme is matched ASCII case-insensitively when `ignore_case` is set.
/// Anything else is returned unchanged.
pub fn downgrade_http(url: &str, ignore_case: bool) -> &str {
    let plaintext = match url.get(..HTTP_PREFIX.len()) {
        Some(scheme) if ignore_case => scheme.eq_ignore_ascii_case(HTTP_PREFIX),
        Some(scheme) => scheme == HTTP_PREFIX,
        None => false,
    };
    if plaintext {
        &url["http:".len()..]
    } else {
        url
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// The `<form>` correction pass.
#[derive(Clone, Debug, Default)]
pub struct FormSanitizer {
    request: RequestContext,
}

impl FormSanitizer {
    pub fn new(request: RequestContext) -> FormSanitizer {
        FormSanitizer { request }
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// Correct every form in `forms`, last to first.
    ///
    /// Handles that are not HTML `form` elements are skipped.
    pub fn normalize(&self, forms: &[Handle]) {
        let mut visited = 0;
        for form in forms.iter().rev() {
            if !dom::is_html_element(form, "form") {
                trace!("skipping non-form node");
                continue;
            }
            self.normalize_form(form);
            visited += 1;
        }
        debug!("normalized {} of {} form candidates", visited, forms.len());
    }

    fn normalize_form(&self, form: &Handle) {
        let declared_method = dom::get_attribute(form, METHOD);
        let method = Method::resolve(declared_method.as_deref());
        if declared_method.as_deref() != Some(method.as_str()) {
            trace!("method {:?} -> {:?}", declared_method, method.as_str());
            dom::set_attribute(form, METHOD, method.as_str());
        }

        let declared_action = dom::get_attribute(form, ACTION);
        let action_url = match non_empty(declared_action.as_deref()) {
            Some(action) => downgrade_http(action, true).to_owned(),
            None => downgrade_http(&self.request.default_action_url(), true).to_owned(),
        };

        match method {
            Method::Get => {
                if declared_action.as_deref() != Some(&*action_url) {
                    trace!("action {:?} -> {:?}", declared_action, action_url);
                    dom::set_attribute(form, ACTION, &action_url);
                }
            },
            Method::Post => {
                dom::remove_attribute(form, ACTION);
                let declared_xhr = dom::get_attribute(form, ACTION_XHR);
                match non_empty(declared_xhr.as_deref()) {
                    None => {
                        trace!("action-xhr set to {:?}", action_url);
                        dom::set_attribute(form, ACTION_XHR, &action_url);
                    },
                    Some(xhr) => {
                        let secure = downgrade_http(xhr, false);
                        if secure.len() != xhr.len() {
                            trace!("action-xhr {:?} -> {:?}", xhr, secure);
                            dom::set_attribute(form, ACTION_XHR, secure);
                        }
                    },
                }
            },
            Method::Other(ref other) => {
                trace!("leaving endpoints of method {:?} form alone", other);
            },
        }

        let declared_target = dom::get_attribute(form, TARGET);
        let target = Target::coerce(declared_target.as_deref());
        if declared_target.as_deref() != Some(target.as_str()) {
            trace!("target {:?} -> {:?}", declared_target, target.as_str());
            dom::set_attribute(form, TARGET, target.as_str());
        }
    }
}

impl Sanitizer for FormSanitizer {
    fn name(&self) -> &'static str {
        "form"
    }

    fn sanitize(&self, document: &Handle) {
        let forms = dom::get_elements_by_tag_name(document, "form");
        if forms.is_empty() {
            return;
        }
        self.normalize(&forms);
    }
}

/// Correct `forms` for a document served for `request`.
pub fn normalize_forms(forms: &[Handle], request: &RequestContext) {
    FormSanitizer::new(request.clone()).normalize(forms);
}
