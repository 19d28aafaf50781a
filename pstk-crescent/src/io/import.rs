use anyhow::{Context, Result, ensure};
use log::{debug, warn};

use crate::geometry::DTransformation;
use crate::geometry::primitives::{Point, SPolygon};
use crate::io::ext_repr::{ExtPlacement, ExtPstkLibrary, ExtPstkProto, ExtShape};
use crate::pstk::{
    CircleShape, LineShape, PolyShape, PstkInstance, PstkLibrary, PstkProto, PstkShape,
};

pub fn import_shape(ext_shape: &ExtShape) -> Result<PstkShape> {
    let shape = match ext_shape {
        ExtShape::Circle { x, y, dia } => PstkShape::Circle(CircleShape {
            x: *x,
            y: *y,
            dia: *dia,
        }),
        ExtShape::Line {
            x1,
            y1,
            x2,
            y2,
            thickness,
            square,
        } => PstkShape::Line(LineShape {
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
            thickness: *thickness,
            square: *square,
        }),
        ExtShape::Polygon(points) => PstkShape::Polygon(PolyShape::new(points.clone())),
        ExtShape::HoleShadow(None) => PstkShape::HoleShadow(None),
        ExtShape::HoleShadow(Some(outline)) => {
            let vertices = outline.iter().map(|&p| Point::from(p)).collect();
            let snapshot = SPolygon::new(vertices).context("invalid hole shadow outline")?;
            PstkShape::HoleShadow(Some(snapshot))
        }
    };
    shape.validate()?;
    Ok(shape)
}

pub fn import_proto(ext_proto: &ExtPstkProto) -> Result<PstkProto> {
    let mut proto = PstkProto::new(ext_proto.name.clone(), ext_proto.hdia, ext_proto.hplated)?;
    if let Some(ext_slot) = &ext_proto.slot {
        if ext_proto.hdia > 0 {
            warn!(
                "[IMP] prototype '{}' has both a drill and a slot, the slot takes precedence",
                ext_proto.name
            );
        }
        proto.set_slot(Some(import_shape(ext_slot)?))?;
    }
    for (i, ext_shape) in ext_proto.shapes.iter().enumerate() {
        let shape = import_shape(ext_shape)
            .with_context(|| format!("shape {i} of prototype '{}'", ext_proto.name))?;
        proto.push_shape(shape)?;
    }
    debug!(
        "[IMP] imported prototype '{}' with {} shapes",
        proto.name,
        proto.shapes().len()
    );
    Ok(proto)
}

pub fn import_placement(ext_placement: &ExtPlacement) -> Result<DTransformation> {
    let ExtPlacement {
        rotation,
        xmirror,
        translation: (tx, ty),
    } = *ext_placement;
    ensure!(
        rotation.is_finite() && tx.is_finite() && ty.is_finite(),
        "non-finite placement: {ext_placement:?}"
    );
    Ok(DTransformation::new(rotation.to_radians(), xmirror, (tx, ty)))
}

pub fn import_library(ext_lib: &ExtPstkLibrary) -> Result<PstkLibrary> {
    let mut library = PstkLibrary::default();
    for ext_proto in &ext_lib.protos {
        library.add_proto(import_proto(ext_proto)?)?;
    }
    for ext_inst in &ext_lib.instances {
        let proto = library
            .proto_index(&ext_inst.proto)
            .with_context(|| format!("instance of unknown prototype '{}'", ext_inst.proto))?;
        let placement = import_placement(&ext_inst.placement)?;
        library.add_instance(PstkInstance::new(proto, placement))?;
    }
    Ok(library)
}
