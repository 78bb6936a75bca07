//! Catalog Handlers
//!
//! One set of CRUD, name listing and photo handlers shared by every catalog
//! collection. The handlers are generic over the item type, which picks its
//! service out of the [`AppContext`].

use std::{marker::PhantomData, sync::Arc};

use salvo::{Handler, Writer, async_trait, http::header::LOCATION, prelude::*};

use partsmith::{
    builds::{Pc, Workstation},
    catalog::{CatalogItem, NameMap},
    hardware::{Cpu, Gpu, Hdd, Motherboard, PcCase, PowerSupply, Ram, Ssd},
    ids::ItemId,
};
use partsmith_app::{context::AppContext, domain::catalog::CatalogService, photos::PhotoUpload};

use crate::{errors::catalog_status_error, extensions::*};

/// A catalog item type served over HTTP.
pub(crate) trait CatalogCollection: CatalogItem {
    /// The service for this collection.
    fn service(app: &AppContext) -> &Arc<dyn CatalogService<Self>>;
}

macro_rules! catalog_collections {
    ($($item:ty => $field:ident),* $(,)?) => {
        $(
            impl CatalogCollection for $item {
                fn service(app: &AppContext) -> &Arc<dyn CatalogService<Self>> {
                    &app.$field
                }
            }
        )*
    };
}

catalog_collections! {
    Cpu => cpus,
    Gpu => gpus,
    Motherboard => motherboards,
    Ram => rams,
    Ssd => ssds,
    Hdd => hdds,
    PowerSupply => power_supplies,
    PcCase => pc_cases,
    Pc => pcs,
    Workstation => workstations,
}

/// Routes for one collection, mounted under its collection name.
pub(crate) fn catalog_router<T: CatalogCollection>() -> Router {
    Router::with_path(T::COLLECTION)
        .get(ListItems::<T>::default())
        .post(CreateItem::<T>::default())
        .push(Router::with_path("names").get(ItemNames::<T>::default()))
        .push(
            Router::with_path("{id}")
                .get(GetItem::<T>::default())
                .put(UpdateItem::<T>::default())
                .delete(DeleteItem::<T>::default())
                .push(Router::with_path("photos").post(AddPhoto::<T>::default())),
        )
}

fn collection_service<T: CatalogCollection>(
    depot: &Depot,
) -> Result<Arc<dyn CatalogService<T>>, StatusError> {
    let state = depot.state_or_500()?;

    Ok(Arc::clone(T::service(&state.app)))
}

fn item_id<T>(req: &Request) -> Result<ItemId<T>, StatusError> {
    req.param::<String>("id")
        .map(ItemId::new)
        .ok_or_else(|| StatusError::bad_request().brief("Missing item id"))
}

async fn draft<T: CatalogItem>(req: &mut Request) -> Result<T::Draft, StatusError> {
    req.parse_json::<T::Draft>()
        .await
        .or_400("Invalid item payload")
}

macro_rules! generic_handler {
    ($($name:ident),* $(,)?) => {
        $(
            pub(crate) struct $name<T>(PhantomData<fn() -> T>);

            impl<T> Default for $name<T> {
                fn default() -> Self {
                    Self(PhantomData)
                }
            }
        )*
    };
}

generic_handler!(
    ListItems, CreateItem, ItemNames, GetItem, UpdateItem, DeleteItem, AddPhoto
);

#[async_trait]
impl<T: CatalogCollection> Handler for ListItems<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = list::<T>(depot).await;

        result.write(req, depot, res).await;
    }
}

async fn list<T: CatalogCollection>(depot: &Depot) -> Result<Json<Vec<T>>, StatusError> {
    let items = collection_service::<T>(depot)?
        .list()
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(items))
}

#[async_trait]
impl<T: CatalogCollection> Handler for CreateItem<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = create::<T>(req, depot, res).await;

        result.write(req, depot, res).await;
    }
}

async fn create<T: CatalogCollection>(
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
) -> Result<Json<T>, StatusError> {
    let service = collection_service::<T>(depot)?;
    let draft = draft::<T>(req).await?;

    let item = service.create(draft).await.map_err(catalog_status_error)?;

    res.add_header(LOCATION, format!("/{}/{}", T::COLLECTION, item.id()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item))
}

#[async_trait]
impl<T: CatalogCollection> Handler for ItemNames<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = names::<T>(depot).await;

        result.write(req, depot, res).await;
    }
}

async fn names<T: CatalogCollection>(depot: &Depot) -> Result<Json<NameMap>, StatusError> {
    let names = collection_service::<T>(depot)?
        .names_with_prices()
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(names))
}

#[async_trait]
impl<T: CatalogCollection> Handler for GetItem<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = get::<T>(req, depot).await;

        result.write(req, depot, res).await;
    }
}

async fn get<T: CatalogCollection>(
    req: &mut Request,
    depot: &Depot,
) -> Result<Json<T>, StatusError> {
    let id = item_id::<T>(req)?;

    let item = collection_service::<T>(depot)?
        .get(&id)
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(item))
}

#[async_trait]
impl<T: CatalogCollection> Handler for UpdateItem<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = update::<T>(req, depot).await;

        result.write(req, depot, res).await;
    }
}

async fn update<T: CatalogCollection>(
    req: &mut Request,
    depot: &Depot,
) -> Result<Json<T>, StatusError> {
    let id = item_id::<T>(req)?;
    let service = collection_service::<T>(depot)?;
    let draft = draft::<T>(req).await?;

    let item = service
        .update(&id, draft)
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(item))
}

#[async_trait]
impl<T: CatalogCollection> Handler for DeleteItem<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = delete::<T>(req, depot).await;

        result.write(req, depot, res).await;
    }
}

async fn delete<T: CatalogCollection>(
    req: &mut Request,
    depot: &Depot,
) -> Result<StatusCode, StatusError> {
    let id = item_id::<T>(req)?;

    collection_service::<T>(depot)?
        .delete(&id)
        .await
        .map_err(catalog_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[async_trait]
impl<T: CatalogCollection> Handler for AddPhoto<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = add_photo::<T>(req, depot).await;

        result.write(req, depot, res).await;
    }
}

async fn add_photo<T: CatalogCollection>(
    req: &mut Request,
    depot: &Depot,
) -> Result<Json<T>, StatusError> {
    let id = item_id::<T>(req)?;
    let service = collection_service::<T>(depot)?;
    let max_photo_bytes = depot.state_or_500()?.max_photo_bytes;

    let file_name = req.query::<String>("file_name").unwrap_or_default();
    let content_type = req.content_type().map(|mime| mime.to_string());

    let bytes = req
        .payload_with_max_size(max_photo_bytes)
        .await
        .or_400("Invalid photo payload")?
        .to_vec();

    if bytes.is_empty() {
        return Err(StatusError::bad_request().brief("Photo is empty"));
    }

    let item = service
        .add_photo(
            &id,
            PhotoUpload {
                file_name,
                content_type,
                bytes,
            },
        )
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(item))
}
