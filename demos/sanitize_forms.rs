// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read HTML on stdin, correct its forms, write the result to stdout.
//!
//!   sanitize-forms [--fragment] [HOST [REQUEST_URI]] < page.html
//!
//! HOST defaults to `localhost` and REQUEST_URI to `/`.

use std::env;
use std::io::{self, Write};
use std::process;

use form_sanitizer::{sanitize_from_reader, RequestContext, SanitizeOpts, Scope};

fn main() {
    let mut scope = Scope::Document;
    let mut positional = vec![];
    for arg in env::args().skip(1) {
        match &*arg {
            "--fragment" => scope = Scope::Fragment,
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let host = positional.next().unwrap_or_else(|| "localhost".to_owned());
    let request_uri = positional.next().unwrap_or_else(|| "/".to_owned());

    let opts = SanitizeOpts {
        request: RequestContext::new(host, request_uri),
        scope,
        ..Default::default()
    };

    let stdin = io::stdin();
    let result = sanitize_from_reader(&mut stdin.lock(), &opts)
        .and_then(|html| io::stdout().write_all(html.as_bytes()));
    if let Err(err) = result {
        eprintln!("sanitize-forms: {}", err);
        process::exit(1);
    }
}
