use itertools::Itertools;

use crate::io::ext_repr::{
    ExtPstkInstance, ExtPstkLibrary, ExtPstkProto, ExtShape, ExtShapeReport,
};
use crate::pstk::{PstkLibrary, PstkProto, PstkShape};

pub fn export_shape(shape: &PstkShape) -> ExtShape {
    match shape {
        PstkShape::Circle(c) => ExtShape::Circle {
            x: c.x,
            y: c.y,
            dia: c.dia,
        },
        PstkShape::Line(l) => ExtShape::Line {
            x1: l.x1,
            y1: l.y1,
            x2: l.x2,
            y2: l.y2,
            thickness: l.thickness,
            square: l.square,
        },
        PstkShape::Polygon(p) => ExtShape::Polygon(p.points.clone()),
        PstkShape::HoleShadow(snapshot) => ExtShape::HoleShadow(
            snapshot
                .as_ref()
                .map(|sp| sp.vertices.iter().map(|&p| p.into()).collect()),
        ),
    }
}

pub fn export_proto(proto: &PstkProto) -> ExtPstkProto {
    ExtPstkProto {
        name: proto.name.clone(),
        hdia: proto.hdia(),
        hplated: proto.hplated,
        slot: proto.slot().map(export_shape),
        shapes: proto
            .shapes()
            .iter()
            .map(|r| export_shape(&r.shape))
            .collect(),
    }
}

pub fn export_library(library: &PstkLibrary) -> ExtPstkLibrary {
    ExtPstkLibrary {
        protos: library.protos.iter().map(export_proto).collect(),
        instances: library
            .instances
            .iter()
            .filter_map(|inst| {
                library.protos.get(inst.proto).map(|proto| ExtPstkInstance {
                    proto: proto.name.clone(),
                    placement: inst.placement.into(),
                })
            })
            .collect(),
    }
}

/// Report of the cached classification of every shape in the library
pub fn export_report(library: &PstkLibrary) -> Vec<ExtShapeReport> {
    library
        .protos
        .iter()
        .flat_map(|proto| {
            proto
                .shapes()
                .iter()
                .enumerate()
                .map(|(index, record)| ExtShapeReport {
                    proto: proto.name.clone(),
                    index,
                    shape: export_shape(&record.shape),
                    flags: record.flags(),
                })
        })
        .collect_vec()
}
