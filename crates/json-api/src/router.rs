//! App Router

use salvo::Router;

use partsmith::{
    builds::{Pc, Workstation},
    hardware::{Cpu, Gpu, Hdd, Motherboard, PcCase, PowerSupply, Ram, Ssd},
};

use crate::{catalog::catalog_router, configurator::configurator_router};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(catalog_router::<Cpu>())
        .push(catalog_router::<Gpu>())
        .push(catalog_router::<Motherboard>())
        .push(catalog_router::<Ram>())
        .push(catalog_router::<Ssd>())
        .push(catalog_router::<Hdd>())
        .push(catalog_router::<PowerSupply>())
        .push(catalog_router::<PcCase>())
        .push(catalog_router::<Pc>())
        .push(catalog_router::<Workstation>())
        .push(configurator_router())
}
