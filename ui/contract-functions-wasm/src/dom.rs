//! DOM helpers.
//!
//! Thin wrappers over `web_sys` lookups. Missing elements are `None`, never a
//! panic: the panel markup comes from the server and may omit sections.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, NodeList};

fn doc() -> Document {
    gloo_utils::document()
}

fn collect(nodes: Result<NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(nl) = nodes else {
        return Vec::new();
    };
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    collect(doc().query_selector_all(selector))
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect(parent.query_selector_all(selector))
}

/// Attribute value, `None` when absent or blank.
pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn has_attr(el: &Element, name: &str) -> bool {
    el.has_attribute(name)
}

pub fn input_value(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub fn create_element(tag: &str) -> Option<Element> {
    doc().create_element(tag).ok()
}

/// Append `text` to `el` as a text node.
pub fn append_text(el: &Element, text: &str) {
    let _ = el.append_with_str_1(text);
}

/// Append `<a href="{href}">{text}</a>` to `el`.
pub fn append_link(el: &Element, href: &str, text: &str) {
    let Some(anchor) = create_element("a") else {
        return;
    };
    let _ = anchor.set_attribute("href", href);
    anchor.set_text_content(Some(text));
    let _ = el.append_child(&anchor);
}

/// Replace `el`'s children with `<a href="{href}">{text}</a>`.
pub fn set_link(el: &Element, href: &str, text: &str) {
    set_text(el, "");
    append_link(el, href, text);
}
