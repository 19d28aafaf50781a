use anyhow::{Context, Result, ensure};
use log::{info, warn};

use crate::crescent::{ClassificationFlags, classify};
use crate::pstk::{CircleShape, Coord, PstkShape, ShapeKind};

/// A copper shape of a prototype together with its cached classification.
/// `None` flags mean the classification is stale.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRecord {
    pub shape: PstkShape,
    flags: Option<ClassificationFlags>,
}

impl ShapeRecord {
    pub fn new(shape: PstkShape) -> Self {
        Self { shape, flags: None }
    }

    pub fn flags(&self) -> Option<ClassificationFlags> {
        self.flags
    }

    pub fn invalidate(&mut self) {
        self.flags = None;
    }

    /// Classifies the shape against `hole` and caches the result.
    /// Without a hole, or for a hole shadow record, nothing is connected.
    pub fn classify_against(&mut self, hole: Option<&mut PstkShape>) -> Result<ClassificationFlags> {
        let flags = match (hole, self.shape.kind()) {
            (None, _) | (_, ShapeKind::HoleShadow) => ClassificationFlags::unconnected(),
            (Some(hole), _) => classify(&mut self.shape, hole)?,
        };
        self.flags = Some(flags);
        Ok(flags)
    }
}

/// Pad-stack prototype: a hole (round drill or slot) and the copper shapes around it
#[derive(Clone, Debug, PartialEq)]
pub struct PstkProto {
    pub name: String,
    hdia: Coord,
    pub hplated: bool,
    slot: Option<PstkShape>,
    shapes: Vec<ShapeRecord>,
}

impl PstkProto {
    pub fn new(name: impl Into<String>, hdia: Coord, hplated: bool) -> Result<Self> {
        let mut proto = Self {
            name: name.into(),
            hdia: 0,
            hplated,
            slot: None,
            shapes: vec![],
        };
        proto.set_hole_dia(hdia)?;
        Ok(proto)
    }

    pub fn hdia(&self) -> Coord {
        self.hdia
    }

    pub fn slot(&self) -> Option<&PstkShape> {
        self.slot.as_ref()
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    /// The hole of the prototype: the slot when present, otherwise the round drill (if any)
    pub fn hole_shape(&self) -> Option<PstkShape> {
        match (&self.slot, self.hdia) {
            (Some(slot), _) => Some(slot.clone()),
            (None, hdia) if hdia > 0 => Some(PstkShape::Circle(CircleShape {
                x: 0,
                y: 0,
                dia: hdia,
            })),
            (None, _) => None,
        }
    }

    /// Classifies every shape against the hole, refreshing all cached flags
    pub fn update(&mut self) -> Result<()> {
        let mut hole = self.hole_shape();
        if hole.is_none() {
            warn!("[PS] prototype '{}' has no hole, no shape is connected", self.name);
        }
        for (i, record) in self.shapes.iter_mut().enumerate() {
            record
                .classify_against(hole.as_mut())
                .with_context(|| format!("classifying shape {i} of prototype '{}'", self.name))?;
        }
        info!(
            "[PS] prototype '{}' updated: {} shapes, {} with crescent",
            self.name,
            self.shapes.len(),
            self.shapes
                .iter()
                .filter(|r| r.flags().is_some_and(|f| f.crescent))
                .count()
        );
        Ok(())
    }

    fn invalidate(&mut self) {
        self.shapes.iter_mut().for_each(|r| r.invalidate());
    }

    pub fn set_hole_dia(&mut self, hdia: Coord) -> Result<()> {
        ensure!(hdia >= 0, "negative hole diameter: {hdia}");
        self.hdia = hdia;
        self.invalidate();
        Ok(())
    }

    pub fn set_slot(&mut self, slot: Option<PstkShape>) -> Result<()> {
        if let Some(slot) = &slot {
            ensure!(
                slot.kind() != ShapeKind::HoleShadow,
                "a hole shadow can not be used as a slot"
            );
            slot.validate()?;
        }
        self.slot = slot;
        self.invalidate();
        Ok(())
    }

    /// Adds a copper shape and returns its index
    pub fn push_shape(&mut self, shape: PstkShape) -> Result<usize> {
        shape.validate()?;
        self.shapes.push(ShapeRecord::new(shape));
        self.invalidate();
        Ok(self.shapes.len() - 1)
    }

    pub fn grow_shape(&mut self, i: usize, is_absolute: bool, val: Coord) -> Result<()> {
        self.shape_mut(i)?.grow(is_absolute, val)?;
        self.invalidate();
        Ok(())
    }

    /// Grows every shape of the prototype
    pub fn grow(&mut self, is_absolute: bool, val: Coord) -> Result<()> {
        for record in self.shapes.iter_mut() {
            record.shape.grow(is_absolute, val)?;
        }
        self.invalidate();
        Ok(())
    }

    pub fn scale_shape(&mut self, i: usize, sx: f64, sy: f64) -> Result<()> {
        self.shape_mut(i)?.scale(sx, sy)?;
        self.invalidate();
        Ok(())
    }

    /// Cached flags of shape `i`, `None` when stale or out of range
    pub fn shape_flags(&self, i: usize) -> Option<ClassificationFlags> {
        self.shapes.get(i).and_then(|r| r.flags())
    }

    fn shape_mut(&mut self, i: usize) -> Result<&mut PstkShape> {
        let n = self.shapes.len();
        self.shapes
            .get_mut(i)
            .map(|r| &mut r.shape)
            .with_context(|| format!("shape index {i} out of range ({n} shapes)"))
    }
}
