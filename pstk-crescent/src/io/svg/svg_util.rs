use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use geo_types::{LineString, MultiPolygon};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::primitives::SPolygon;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the outline of the hole on top of the copper
    #[serde(default = "default_true")]
    pub hole: bool,
    ///Draw the rendered crescents of crossing shapes
    #[serde(default = "default_true")]
    pub crescents: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            hole: true,
            crescents: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub copper_fill: Color,
    pub hole_fill: Color,
    pub crescent_fill: Color,
    pub unconnected_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::COPPER
    }
}

impl SvgLayoutTheme {
    pub const COPPER: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        copper_fill: Color(0xCC, 0x82, 0x4A),
        hole_fill: Color(0x2D, 0x2D, 0x2D),
        crescent_fill: Color(0xFF, 0x00, 0x00),
        unconnected_fill: Color(0xA0, 0xA0, 0xA0),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        copper_fill: Color(0x7A, 0x7A, 0x7A),
        hole_fill: Color(0xFF, 0xFF, 0xFF),
        crescent_fill: Color(0x30, 0x30, 0x30),
        unconnected_fill: Color(0xD3, 0xD3, 0xD3),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color, expected #RRGGBB: {s}"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(s_poly.vertex(0).into());
    for i in 1..s_poly.n_vertices() {
        data = data.line_to::<(f64, f64)>(s_poly.vertex(i).into());
    }
    data.close()
}

fn ring_data(data: Data, ring: &LineString<f64>) -> Data {
    let mut coords = ring.coords();
    match coords.next() {
        None => data,
        Some(first) => coords
            .fold(data.move_to((first.x, first.y)), |d, c| d.line_to((c.x, c.y)))
            .close(),
    }
}

/// Path data of every polygon, interiors included (to be drawn with the evenodd fill rule)
pub fn multi_polygon_data(m_poly: &MultiPolygon<f64>) -> Data {
    m_poly.0.iter().fold(Data::new(), |data, poly| {
        poly.interiors()
            .iter()
            .fold(ring_data(data, poly.exterior()), ring_data)
    })
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
