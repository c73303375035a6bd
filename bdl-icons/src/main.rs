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

use anyhow::Context;
use bdl_icons::constants::{GALLERY_LOG_LEVEL, GALLERY_SHOW_TOKENS, GALLERY_SIZES};
use bdl_icons::{FileVector16, SvgAttrs};
use yew::prelude::*;

#[function_component(TokenSwatches)]
fn token_swatches() -> Html {
    html! {
        <ul class="token-swatches">
            { for bdl_tokens::GRAYS.iter().map(|(name, value)| html! {
                <li key={*name}>
                    <span class="swatch" style={format!("background: {value}")} />
                    <code>{ format!("{name} {value}") }</code>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        log::debug!("icon clicked at ({}, {})", e.client_x(), e.client_y());
    });

    html! {
        <main class="icon-gallery">
            <h1>{ "bdl icons" }</h1>
            <section class="sizes">
                { for GALLERY_SIZES.iter().map(|size| {
                    let size = size.to_string();
                    html! {
                        <figure key={size.clone()}>
                            <FileVector16
                                width={size.clone()}
                                height={size.clone()}
                                attrs={SvgAttrs::new().with("data-size", size.clone())}
                                onclick={onclick.clone()}
                            />
                            <figcaption>{ format!("{size}px") }</figcaption>
                        </figure>
                    }
                }) }
            </section>
            <section class="labelled">
                <FileVector16 title="Vector file" class={classes!("icon-large")} width="48" height="48" />
            </section>
            if *GALLERY_SHOW_TOKENS {
                <TokenSwatches />
            }
        </main>
    }
}

fn main() -> anyhow::Result<()> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(*GALLERY_LOG_LEVEL).context("failed to install console logger")?;
    log::info!("rendering icon gallery at sizes {:?}", *GALLERY_SIZES);
    yew::Renderer::<Gallery>::new().render();
    Ok(())
}
