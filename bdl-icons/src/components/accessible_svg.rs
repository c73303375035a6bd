/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Generic accessible `<svg>` root.
//!
//! Titled or labelled icons are exposed as `role="img"`; unlabelled ones are
//! hidden from assistive technology. Icons are `focusable="false"` unless the
//! caller says otherwise.

use yew::prelude::*;
use yew::virtual_dom::{AttrValue, VNode};

use super::svg_props::SvgProps;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[function_component(AccessibleSvg)]
pub fn accessible_svg(props: &SvgProps) -> Html {
    let title = non_empty(&props.title);
    if props.title.is_some() && title.is_none() {
        log::trace!("empty icon title ignored, rendering as decorative");
    }
    let aria_label = non_empty(&props.aria_label).cloned();
    let labelled = title.is_some() || aria_label.is_some();

    let labelledby = title.map(|title| title_id(props.id.as_ref(), title));
    let role = props
        .role
        .clone()
        .unwrap_or(AttrValue::Static(if labelled { "img" } else { "presentation" }));
    let aria_hidden = (!labelled).then_some(AttrValue::Static("true"));
    let focusable = props
        .focusable
        .clone()
        .unwrap_or(AttrValue::Static("false"));

    let title_node = match (title, labelledby.clone()) {
        (Some(title), Some(id)) => html! { <title {id}>{ title.to_string() }</title> },
        _ => html! {},
    };

    let mut svg = html! {
        <svg
            xmlns={SVG_NAMESPACE}
            class={props.class.clone()}
            id={props.id.clone()}
            style={props.style.clone()}
            width={props.width.clone()}
            height={props.height.clone()}
            viewBox={props.view_box.clone()}
            {focusable}
            {role}
            aria-hidden={aria_hidden}
            aria-label={aria_label}
            aria-labelledby={labelledby}
            onclick={props.onclick.clone()}
        >
            { title_node }
            { props.children.clone() }
        </svg>
    };

    if let VNode::VTag(tag) = &mut svg {
        for (key, value) in props.attrs.iter() {
            tag.add_attribute(key, value.clone());
        }
    }

    svg
}

fn non_empty(value: &Option<AttrValue>) -> Option<&AttrValue> {
    value.as_ref().filter(|value| !value.trim().is_empty())
}

/// Stable id for the `<title>` element so the same props always render the
/// same markup.
fn title_id(id: Option<&AttrValue>, title: &str) -> AttrValue {
    match id {
        Some(id) => format!("{id}-title").into(),
        None => format!("icon-title-{}", slugify(title)).into(),
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
