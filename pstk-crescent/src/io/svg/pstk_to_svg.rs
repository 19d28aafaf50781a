use anyhow::{Context, Result};
use svg::Document;
use svg::node::element::{Group, Title};

use crate::crescent::render::render_crescent;
use crate::geometry::primitives::{Point, Rect};
use crate::io::svg::svg_util::{
    SvgDrawOptions, change_brightness, data_to_path, multi_polygon_data, simple_polygon_data,
};
use crate::pstk::placement::shape_to_placed_polygon;
use crate::pstk::{PstkInstance, PstkProto, ShapeKind};
use crate::util::CrescentConfig;

/// Draws the copper shapes of a placed pad-stack, its hole and the crescents of crossing shapes
pub fn pstk_to_svg(
    proto: &PstkProto,
    instance: &PstkInstance,
    config: &CrescentConfig,
    options: SvgDrawOptions,
) -> Result<Document> {
    let theme = &options.theme;
    let hole = proto.hole_shape();

    let placed_shapes = proto
        .shapes()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.shape.kind() != ShapeKind::HoleShadow)
        .map(|(i, r)| {
            shape_to_placed_polygon(instance, &r.shape, config)
                .with_context(|| format!("placing shape {i} of '{}'", proto.name))
                .map(|outline| (i, r, outline))
        })
        .collect::<Result<Vec<_>>>()?;
    let placed_hole = match &hole {
        Some(hole) => shape_to_placed_polygon(instance, hole, config).context("placing hole")?,
        None => None,
    };

    let all_vertices = placed_shapes
        .iter()
        .filter_map(|(_, _, outline)| outline.as_ref())
        .chain(placed_hole.as_ref())
        .flat_map(|sp| sp.vertices.iter().copied())
        .collect::<Vec<Point>>();
    let (tx, ty) = instance.placement.translation();
    let bbox = match Rect::bounding(&all_vertices) {
        Some(bbox) => bbox,
        None => Rect::try_new(tx - 1.0, ty - 1.0, tx + 1.0, ty + 1.0)?,
    };
    let vbox = bbox.inflate(0.05 * f64::max(bbox.width(), bbox.height()));

    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    //draw copper
    let copper_group = placed_shapes.iter().fold(
        Group::new().set("id", "copper"),
        |group, (i, record, outline)| match outline {
            None => group,
            Some(outline) => {
                let connected = record.flags().is_none_or(|f| f.connected);
                let fill = match connected {
                    true => theme.copper_fill,
                    false => theme.unconnected_fill,
                };
                let title = Title::new(format!(
                    "shape {i}, {:?}, flags: {:?}",
                    record.shape.kind(),
                    record.flags()
                ));
                group.add(
                    data_to_path(
                        simple_polygon_data(outline),
                        &[
                            ("fill", &*format!("{fill}")),
                            ("stroke", &*format!("{}", change_brightness(fill, 0.5))),
                            ("stroke-width", &*format!("{stroke_width}")),
                            ("fill-opacity", "0.8"),
                        ],
                    )
                    .add(title),
                )
            }
        },
    );

    //draw crescents
    let crescent_group = match (options.crescents, &hole) {
        (true, Some(hole)) => {
            let mut group = Group::new().set("id", "crescents");
            for (i, record, _) in placed_shapes.iter() {
                if !record.flags().is_some_and(|f| f.crescent) {
                    continue;
                }
                let crescent = render_crescent(instance, &record.shape, hole, config)
                    .with_context(|| format!("rendering crescent of shape {i}"))?;
                group = group.add(
                    data_to_path(
                        multi_polygon_data(&crescent),
                        &[
                            ("fill", &*format!("{}", theme.crescent_fill)),
                            ("fill-rule", "evenodd"),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{stroke_width}")),
                        ],
                    )
                    .add(Title::new(format!("crescent of shape {i}"))),
                );
            }
            Some(group)
        }
        _ => None,
    };

    //draw hole
    let hole_group = match (options.hole, &placed_hole) {
        (true, Some(outline)) => Some(
            Group::new().set("id", "hole").add(
                data_to_path(
                    simple_polygon_data(outline),
                    &[
                        ("fill", &*format!("{}", theme.hole_fill)),
                        ("fill-opacity", "0.5"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "hole, plated: {}, placement: [{}]",
                    proto.hplated, instance.placement
                ))),
            ),
        ),
        _ => None,
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let document = [Some(copper_group), crescent_group, hole_group]
        .into_iter()
        .flatten()
        .fold(
            Document::new()
                .set("viewBox", vbox_svg)
                .add(Title::new(format!("pad-stack '{}'", proto.name))),
            |doc, group| doc.add(group),
        );
    Ok(document)
}
