//! Draft assembly.

use async_trait::async_trait;
use partsmith::{
    builds::{Pc, Workstation},
    catalog::CatalogItem,
    hardware::{Attributes, Hardware},
    ids::ItemId,
};

use crate::domain::{catalog::errors::CatalogServiceError, specs::SpecsResolver};

/// Turns a client draft into a storable item.
#[async_trait]
pub trait Assembler<T: CatalogItem>: Send + Sync {
    /// Builds the item stored under `id` from `draft`.
    async fn assemble(&self, id: ItemId<T>, draft: T::Draft) -> Result<T, CatalogServiceError>;
}

/// Validates and copies hardware drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareAssembler;

#[async_trait]
impl<A: Attributes> Assembler<Hardware<A>> for HardwareAssembler {
    async fn assemble(
        &self,
        id: ItemId<Hardware<A>>,
        draft: <Hardware<A> as CatalogItem>::Draft,
    ) -> Result<Hardware<A>, CatalogServiceError> {
        Ok(Hardware::assemble(id, draft)?)
    }
}

/// Resolves a build's components and derives its price and energy
/// consumption.
#[derive(Debug, Clone)]
pub struct BuildAssembler {
    resolver: SpecsResolver,
}

impl BuildAssembler {
    #[must_use]
    pub fn new(resolver: SpecsResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Assembler<Pc> for BuildAssembler {
    async fn assemble(
        &self,
        id: ItemId<Pc>,
        draft: <Pc as CatalogItem>::Draft,
    ) -> Result<Pc, CatalogServiceError> {
        let specs = self.resolver.resolve(draft.specs_ids.as_ref()).await?;

        Ok(Pc::assemble(id, draft, specs)?)
    }
}

#[async_trait]
impl Assembler<Workstation> for BuildAssembler {
    async fn assemble(
        &self,
        id: ItemId<Workstation>,
        draft: <Workstation as CatalogItem>::Draft,
    ) -> Result<Workstation, CatalogServiceError> {
        let specs = self.resolver.resolve(draft.specs_ids.as_ref()).await?;

        Ok(Workstation::assemble(id, draft, specs)?)
    }
}
