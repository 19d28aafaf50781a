use anyhow::{Context, Result, ensure};

use crate::pstk::{PstkInstance, PstkProto};

/// Collection of prototypes and the instances placing them
#[derive(Clone, Debug, Default)]
pub struct PstkLibrary {
    pub protos: Vec<PstkProto>,
    pub instances: Vec<PstkInstance>,
}

impl PstkLibrary {
    pub fn proto_index(&self, name: &str) -> Option<usize> {
        self.protos.iter().position(|p| p.name == name)
    }

    pub fn add_proto(&mut self, proto: PstkProto) -> Result<usize> {
        ensure!(
            self.proto_index(&proto.name).is_none(),
            "duplicate prototype name: '{}'",
            proto.name
        );
        self.protos.push(proto);
        Ok(self.protos.len() - 1)
    }

    pub fn add_instance(&mut self, instance: PstkInstance) -> Result<usize> {
        ensure!(
            instance.proto < self.protos.len(),
            "instance refers to unknown prototype {}",
            instance.proto
        );
        self.instances.push(instance);
        Ok(self.instances.len() - 1)
    }

    pub fn proto_of(&self, instance: &PstkInstance) -> Result<&PstkProto> {
        self.protos
            .get(instance.proto)
            .with_context(|| format!("instance refers to unknown prototype {}", instance.proto))
    }

    /// Refreshes the cached flags of every prototype
    pub fn update_all(&mut self) -> Result<()> {
        self.protos.iter_mut().try_for_each(|p| p.update())
    }
}
