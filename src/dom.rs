// Copyright 2026 The form_sanitizer Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element lookup and attribute primitives over an `RcDom` tree.
//!
//! Only attributes in the null namespace are considered, which is where the
//! HTML tree builder puts every attribute of an HTML element.

use markup5ever::{namespace_url, ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, NodeData};
use tendril::StrTendril;

fn is_named(attr: &Attribute, name: &str) -> bool {
    attr.name.ns == ns!() && &*attr.name.local == name
}

/// Is this node an element in the HTML namespace with the given local name?
pub fn is_html_element(handle: &Handle, local: &str) -> bool {
    match handle.data {
        NodeData::Element { ref name, .. } => name.ns == ns!(html) && &*name.local == local,
        _ => false,
    }
}

/// Collect every HTML element named `local` below `root`, in document order.
///
/// The result is a snapshot: mutating or detaching the returned nodes does
/// not change it. `<template>` contents live in their own tree and are not
/// searched.
pub fn get_elements_by_tag_name(root: &Handle, local: &str) -> Vec<Handle> {
    let mut found = vec![];
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        if is_html_element(&node, local) {
            found.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    found
}

/// The value of attribute `name`, or `None` if it is not declared.
pub fn get_attribute(handle: &Handle, name: &str) -> Option<StrTendril> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| is_named(attr, name))
            .map(|attr| attr.value.clone()),
        _ => None,
    }
}

pub fn has_attribute(handle: &Handle, name: &str) -> bool {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs.borrow().iter().any(|attr| is_named(attr, name)),
        _ => false,
    }
}

/// Set attribute `name` to `value`.
///
/// An existing attribute keeps its position; a new one is appended. Does
/// nothing for non-element nodes.
pub fn set_attribute(handle: &Handle, name: &str, value: &str) {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        let mut attrs = attrs.borrow_mut();
        let value = StrTendril::from_slice(value);
        match attrs.iter().position(|attr| is_named(attr, name)) {
            Some(index) => attrs[index].value = value,
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value,
            }),
        }
    }
}

/// Remove attribute `name`, returning whether it was declared.
///
/// Duplicate declarations left behind by a non-conforming tree are removed
/// too.
pub fn remove_attribute(handle: &Handle, name: &str) -> bool {
    match handle.data {
        NodeData::Element { ref attrs, .. } => {
            let mut attrs = attrs.borrow_mut();
            let before = attrs.len();
            attrs.retain(|attr| !is_named(attr, name));
            attrs.len() != before
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5ever::tendril::TendrilSink;
    use html5ever::{parse_document, ParseOpts};
    use markup5ever_rcdom::RcDom;

    fn document(input: &str) -> Handle {
        parse_document(RcDom::default(), ParseOpts::default())
            .one(input)
            .document
    }

    fn attr_names(handle: &Handle) -> Vec<String> {
        match handle.data {
            NodeData::Element { ref attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| attr.name.local.to_string())
                .collect(),
            _ => panic!("not an element"),
        }
    }

    #[test]
    fn finds_elements_in_document_order() {
        let doc = document(
            "<form id=a></form><div><form id=b></form></div><p><span><form id=c></form></span></p>",
        );
        let ids: Vec<_> = get_elements_by_tag_name(&doc, "form")
            .iter()
            .map(|form| get_attribute(form, "id").unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn skips_template_contents() {
        let doc = document("<template><form></form></template>");
        assert!(get_elements_by_tag_name(&doc, "form").is_empty());
    }

    #[test]
    fn ignores_foreign_elements() {
        let doc = document("<svg><form></form></svg>");
        let forms = get_elements_by_tag_name(&doc, "form");
        assert!(forms.iter().all(|form| is_html_element(form, "form")));
    }

    #[test]
    fn set_keeps_position_of_existing_attribute() {
        let doc = document("<form method=get action=/a target=_self></form>");
        let form = &get_elements_by_tag_name(&doc, "form")[0];
        set_attribute(form, "action", "/b");
        set_attribute(form, "action-xhr", "/c");
        assert_eq!(attr_names(form), vec!["method", "action", "target", "action-xhr"]);
        assert_eq!(get_attribute(form, "action").as_deref(), Some("/b"));
        assert_eq!(get_attribute(form, "action-xhr").as_deref(), Some("/c"));
    }

    #[test]
    fn remove_reports_presence() {
        let doc = document("<form action=/a></form>");
        let form = &get_elements_by_tag_name(&doc, "form")[0];
        assert!(has_attribute(form, "action"));
        assert!(remove_attribute(form, "action"));
        assert!(!has_attribute(form, "action"));
        assert!(!remove_attribute(form, "action"));
    }

    #[test]
    fn empty_value_is_still_declared() {
        let doc = document("<form action></form>");
        let form = &get_elements_by_tag_name(&doc, "form")[0];
        assert!(has_attribute(form, "action"));
        assert_eq!(get_attribute(form, "action").as_deref(), Some(""));
    }

    #[test]
    fn non_elements_have_no_attributes() {
        let doc = document("<p>text</p>");
        assert_eq!(get_attribute(&doc, "id"), None);
        set_attribute(&doc, "id", "x");
        assert!(!has_attribute(&doc, "id"));
        assert!(!remove_attribute(&doc, "id"));
    }
}
