pub mod accessible_svg;
pub mod svg_props;

pub use accessible_svg::AccessibleSvg;
pub use svg_props::{SvgAttrs, SvgProps};
