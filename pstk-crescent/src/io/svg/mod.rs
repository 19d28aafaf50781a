mod pstk_to_svg;
mod svg_util;

#[doc(inline)]
pub use pstk_to_svg::pstk_to_svg;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgLayoutTheme;
#[doc(inline)]
pub use svg_util::{data_to_path, multi_polygon_data, simple_polygon_data};
