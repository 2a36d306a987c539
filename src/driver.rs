// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! High-level interface: parse, correct forms, serialize.

use std::default::Default;
use std::io;

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, ParseOpts};
use markup5ever::{local_name, namespace_url, ns, QualName};
use markup5ever_rcdom::{RcDom, SerializableHandle};

use crate::request::RequestContext;
use crate::sanitizer::form::FormSanitizer;
use crate::sanitizer::Sanitizer;

/// Whether input is a whole document or a fragment of `<body>` content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Document,
    Fragment,
}

impl Default for Scope {
    fn default() -> Scope {
        Scope::Document
    }
}

/// All-encompassing options struct for a sanitizing run.
#[derive(Clone, Default)]
pub struct SanitizeOpts {
    /// Options handed to the HTML parser.
    pub parse: ParseOpts,

    /// Request the document is served for.
    pub request: RequestContext,

    /// How to parse and serialize the input.
    pub scope: Scope,
}

fn body_context() -> QualName {
    QualName::new(None, ns!(html), local_name!("body"))
}

/// Parse `input` into a fresh DOM.
pub fn parse(input: &str, opts: &SanitizeOpts) -> RcDom {
    match opts.scope {
        Scope::Document => parse_document(RcDom::default(), opts.parse.clone()).one(input),
        Scope::Fragment => {
            parse_fragment(RcDom::default(), opts.parse.clone(), body_context(), vec![]).one(input)
        },
    }
}

/// Parse UTF-8 from `reader` into a fresh DOM. Invalid sequences are replaced.
pub fn parse_from_reader<R>(reader: &mut R, opts: &SanitizeOpts) -> io::Result<RcDom>
where
    R: io::Read,
{
    match opts.scope {
        Scope::Document => parse_document(RcDom::default(), opts.parse.clone())
            .from_utf8()
            .read_from(reader),
        Scope::Fragment => {
            parse_fragment(RcDom::default(), opts.parse.clone(), body_context(), vec![])
                .from_utf8()
                .read_from(reader)
        },
    }
}

/// Serialize `dom` back to HTML.
///
/// For `Scope::Fragment` only the content of the synthetic `<html>` root is
/// written.
pub fn serialize_dom(dom: &RcDom, scope: Scope) -> io::Result<String> {
    let root = match scope {
        Scope::Document => dom.document.clone(),
        Scope::Fragment => {
            let first = dom.document.children.borrow().first().cloned();
            first.unwrap_or_else(|| dom.document.clone())
        },
    };
    let root: SerializableHandle = root.into();

    let mut bytes = vec![];
    serialize(&mut bytes, &root, SerializeOpts::default())?;
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Correct every form in `dom`.
pub fn sanitize_dom(dom: &RcDom, request: &RequestContext) {
    FormSanitizer::new(request.clone()).sanitize(&dom.document);
}

/// Parse `input`, correct its forms and serialize the result.
///
/// ## Example
///
/// ```rust
/// use form_sanitizer::{sanitize_html, RequestContext, SanitizeOpts, Scope};
///
/// let opts = SanitizeOpts {
///     request: RequestContext::new("example.com", "/page"),
///     scope: Scope::Fragment,
///     ..Default::default()
/// };
/// let html = sanitize_html("<form></form>", &opts).unwrap();
/// assert_eq!(html, r#"<form method="get" action="//example.com/page" target="_top"></form>"#);
/// ```
pub fn sanitize_html(input: &str, opts: &SanitizeOpts) -> io::Result<String> {
    let dom = parse(input, opts);
    sanitize_dom(&dom, &opts.request);
    serialize_dom(&dom, opts.scope)
}

/// Like [`sanitize_html`], reading UTF-8 input from `reader`.
pub fn sanitize_from_reader<R>(reader: &mut R, opts: &SanitizeOpts) -> io::Result<String>
where
    R: io::Read,
{
    let dom = parse_from_reader(reader, opts)?;
    sanitize_dom(&dom, &opts.request);
    serialize_dom(&dom, opts.scope)
}
