// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for bdl-icons component tests.
//
// Provides mount/cleanup helpers and small DOM accessors so that individual
// test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use yew::platform::time::sleep;
use yew::{BaseComponent, Renderer};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Render `COMP` with `props` into a fresh mount point and yield to the
/// scheduler so the DOM is populated.
pub async fn render_with_props<COMP>(props: COMP::Properties) -> web_sys::Element
where
    COMP: BaseComponent,
{
    let mount = create_mount_point();
    Renderer::<COMP>::with_root_and_props(mount.clone(), props).render();
    sleep(Duration::ZERO).await;
    mount
}

/// The single `<svg>` root rendered under `mount`.
pub fn svg_root(mount: &web_sys::Element) -> web_sys::Element {
    let svgs = mount.query_selector_all("svg").unwrap();
    assert_eq!(svgs.length(), 1, "expected exactly one <svg> root");
    mount.query_selector("svg").unwrap().unwrap()
}

/// Attribute names on `element`, in DOM order.
pub fn attribute_names(element: &web_sys::Element) -> Vec<String> {
    element.get_attribute_names().iter().filter_map(|name| name.as_string()).collect()
}

/// Local names of the element children of `element`.
pub fn child_tags(element: &web_sys::Element) -> Vec<String> {
    let children = element.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|child| child.local_name())
        .collect()
}
