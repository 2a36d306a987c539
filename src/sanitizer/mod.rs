// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Post-parse correction passes.

use log::debug;
use markup5ever_rcdom::Handle;

pub mod form;

/// A correction pass run over an already-parsed document.
///
/// Passes mutate the tree in place and never fail: anything they cannot
/// make conforming is coerced or skipped. Passes that detach nodes should
/// walk their snapshot back to front so that siblings queued behind a
/// removed node stay valid.
pub trait Sanitizer {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Correct the tree rooted at `document`.
    fn sanitize(&self, document: &Handle);
}

/// Run `sanitizers` over `document`, in order.
pub fn sanitize_all(document: &Handle, sanitizers: &[&dyn Sanitizer]) {
    for sanitizer in sanitizers {
        debug!("running {} sanitizer", sanitizer.name());
        sanitizer.sanitize(document);
    }
}
