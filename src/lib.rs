// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Corrects `<form>` elements of a parsed HTML document so they can be
//! embedded under a restricted-HTML profile.
//!
//! The profile forbids plaintext `http://` submission endpoints, wants
//! `action` on GET forms and `action-xhr` on POST forms, and only lets the
//! response be shown in `_top` or `_blank`. The pass runs over a
//! [`markup5ever_rcdom::RcDom`] built by `html5ever` and mutates it in
//! place.

#![crate_name = "form_sanitizer"]

pub use markup5ever_rcdom::{Handle, RcDom};

pub use crate::driver::{
    parse, parse_from_reader, sanitize_dom, sanitize_from_reader, sanitize_html, serialize_dom,
    SanitizeOpts, Scope,
};
pub use crate::request::RequestContext;
pub use crate::sanitizer::form::{normalize_forms, FormSanitizer, Method, Target};
pub use crate::sanitizer::{sanitize_all, Sanitizer};

pub mod dom;
pub mod driver;
mod request;
pub mod sanitizer;
