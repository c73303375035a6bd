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

//! Property set shared by [`AccessibleSvg`](super::AccessibleSvg) and every
//! icon built on top of it.
//!
//! Icons carry fixed defaults (size, viewBox) and let the caller override any
//! of them. [`SvgProps::with_defaults`] is that merge: a shallow,
//! field-by-field combine where whatever the caller set wins.

use std::rc::Rc;

use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Extra attributes applied verbatim to the root `<svg>` element.
///
/// Covers everything without a dedicated field on [`SvgProps`]: `data-*`,
/// `aria-*`, `tabindex` and so on. Insertion order is kept and re-inserting a
/// key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgAttrs(Rc<Vec<(&'static str, AttrValue)>>);

impl SvgAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SvgAttrs::insert`].
    pub fn with(mut self, key: &'static str, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<AttrValue>) {
        let value = value.into();
        let entries = Rc::make_mut(&mut self.0);
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combine two attribute sets. Keys keep the order they have in
    /// `defaults`; values from `overrides` win.
    pub fn merge(defaults: &SvgAttrs, overrides: &SvgAttrs) -> SvgAttrs {
        if overrides.is_empty() {
            return defaults.clone();
        }
        if defaults.is_empty() {
            return overrides.clone();
        }
        let mut merged = defaults.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

impl<V: Into<AttrValue>> FromIterator<(&'static str, V)> for SvgAttrs {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut attrs = SvgAttrs::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Rendering properties of an SVG icon. Nothing is required.
#[derive(Properties, Clone, Debug, Default, PartialEq)]
pub struct SvgProps {
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
    #[prop_or_default]
    pub view_box: Option<AttrValue>,

    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub style: Option<AttrValue>,

    /// Accessible name rendered as a `<title>` child.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Overrides the role `AccessibleSvg` would otherwise pick.
    #[prop_or_default]
    pub role: Option<AttrValue>,
    #[prop_or_default]
    pub focusable: Option<AttrValue>,

    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,

    #[prop_or_default]
    pub attrs: SvgAttrs,

    #[prop_or_default]
    pub children: Html,
}

impl SvgProps {
    /// Props carrying only a size and a viewBox, the usual icon defaults.
    pub fn sized(
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        view_box: impl Into<AttrValue>,
    ) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
            view_box: Some(view_box.into()),
            ..Self::default()
        }
    }

    /// Lay `self` (the caller's props) over `defaults`.
    ///
    /// Every field the caller set wins; unset fields fall back to the default.
    /// `class` counts as set when non-empty, `attrs` merge key by key.
    /// `children` are left as the caller passed them; components that own
    /// their content assign it after merging.
    pub fn with_defaults(self, defaults: SvgProps) -> SvgProps {
        SvgProps {
            width: self.width.or(defaults.width),
            height: self.height.or(defaults.height),
            view_box: self.view_box.or(defaults.view_box),
            class: if self.class.is_empty() {
                defaults.class
            } else {
                self.class
            },
            id: self.id.or(defaults.id),
            style: self.style.or(defaults.style),
            title: self.title.or(defaults.title),
            aria_label: self.aria_label.or(defaults.aria_label),
            role: self.role.or(defaults.role),
            focusable: self.focusable.or(defaults.focusable),
            onclick: self.onclick.or(defaults.onclick),
            attrs: SvgAttrs::merge(&defaults.attrs, &self.attrs),
            children: self.children,
        }
    }
}
