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

use bdl_tokens::BDL_GRAY_50;
use yew::prelude::*;

use crate::components::{AccessibleSvg, SvgProps};

/// Outline of the vector-file glyph in a 16×16 box.
pub const FILE_VECTOR_16_PATH: &str = "M9.422 1c.146 0 .286.057.389.158l3.528 3.454a.533.533 0 01.161.38v8.393c0 .892-.74 1.615-1.65 1.615h-7.7c-.911 0-1.65-.723-1.65-1.615V2.615C2.5 1.723 3.239 1 4.15 1h5.272zM6.598 8.535l-.215.128a3.382 3.382 0 00-1.6 2.387.5.5 0 10.717.45.491.491 0 00-.218-.41A2.886 2.886 0 016.64 9.092l.212-.126a1.525 1.525 0 01-.254-.431zm2.808.001l-.017.03a1.5 1.5 0 01-.23.386l-.01.013.215.129a2.86 2.86 0 011.354 1.993.5.5 0 10.502-.035 3.366 3.366 0 00-1.6-2.388l-.214-.128zM8 7a1 1 0 00-.969.75H4.736a.235.235 0 00-.236.235v.03c0 .13.106.235.236.235h2.296a1 1 0 001.936 0h2.297c.13 0 .235-.105.235-.235v-.03a.235.235 0 00-.235-.235H8.969A1 1 0 008 7zm0 .5a.5.5 0 11-.492.59L7.5 8.01v-.026A.5.5 0 018 7.5z";

fn with_glyph(props: &SvgProps) -> SvgProps {
    let mut props = props
        .clone()
        .with_defaults(SvgProps::sized("16", "16", "0 0 16 16"));
    props.children = html! {
        <path fill={BDL_GRAY_50} d={FILE_VECTOR_16_PATH} />
    };
    props
}

/// 16×16 vector file-type icon.
#[function_component(FileVector16)]
pub fn file_vector_16(props: &SvgProps) -> Html {
    let props = with_glyph(props);
    html! { <AccessibleSvg ..props /> }
}
