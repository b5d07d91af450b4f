use std::sync::Arc;

use poem::http::StatusCode;
use poem::{Body, Request};
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetWishlistItemsParams, GetWishlistItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemParams, GetItemUseCase};
use business::domain::item::use_cases::purchase::{PurchaseItemParams, PurchaseItemUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::ItemResponse;
use crate::api::media::{read_json, require_json};
use crate::api::security::ApiKeyAuth;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    get_wishlist_use_case: Arc<dyn GetWishlistByIdUseCase>,
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetWishlistItemsUseCase>,
    get_use_case: Arc<dyn GetItemUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    purchase_use_case: Arc<dyn PurchaseItemUseCase>,
}

impl ItemApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_wishlist_use_case: Arc<dyn GetWishlistByIdUseCase>,
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetWishlistItemsUseCase>,
        get_use_case: Arc<dyn GetItemUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        purchase_use_case: Arc<dyn PurchaseItemUseCase>,
    ) -> Self {
        Self {
            get_wishlist_use_case,
            create_use_case,
            get_all_use_case,
            get_use_case,
            update_use_case,
            delete_use_case,
            purchase_use_case,
        }
    }
}

/// Path of a single item, used for the `Location` header.
pub fn item_location(wishlist_id: i64, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/wishlists/{wishlist_id}/items/{id}"),
        None => format!("/wishlists/{wishlist_id}/items"),
    }
}

/// Wishlist item management API
///
/// Every route checks that the wishlist exists before touching its items.
#[OpenApi]
impl ItemApi {
    /// List the items of a wishlist
    ///
    /// Optionally filtered by exact item name. An existing wishlist with no
    /// items answers 404 unless the service is configured otherwise.
    #[oai(
        path = "/wishlists/:wishlist_id/items",
        method = "get",
        tag = "ApiTags::Items"
    )]
    async fn list(&self, wishlist_id: Path<i64>, name: Query<Option<String>>) -> ListItemsResponse {
        let params = GetWishlistItemsParams {
            wishlist_id: wishlist_id.0,
            name: name.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => {
                ListItemsResponse::Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListItemsResponse::NotFound(json),
                    503 => ListItemsResponse::ServiceUnavailable(json),
                    _ => ListItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a wishlist
    ///
    /// Expects a JSON body with `name` and `wishlist_id`; `purchased` defaults
    /// to false. The wishlist id in the path wins over the one in the body.
    #[oai(
        path = "/wishlists/:wishlist_id/items",
        method = "post",
        tag = "ApiTags::Items"
    )]
    async fn create(
        &self,
        _auth: ApiKeyAuth,
        wishlist_id: Path<i64>,
        req: &Request,
        body: Body,
    ) -> CreateItemResponse {
        if let Err(err) = self
            .get_wishlist_use_case
            .execute(GetWishlistByIdParams { id: wishlist_id.0 })
            .await
        {
            return CreateItemResponse::from_error(err.into_error_response());
        }

        if let Err(json) = require_json(req) {
            return CreateItemResponse::UnsupportedMediaType(json);
        }

        let params = CreateItemParams {
            wishlist_id: wishlist_id.0,
            data: read_json(body).await,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => {
                let location = item_location(item.wishlist_id, item.id);
                CreateItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => CreateItemResponse::from_error(err.into_error_response()),
        }
    }

    /// Get an item
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "get",
        tag = "ApiTags::Items"
    )]
    async fn get(&self, wishlist_id: Path<i64>, item_id: Path<i64>) -> ItemResponseEnvelope {
        let params = GetItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };

        match self.get_use_case.execute(params).await {
            Ok(item) => ItemResponseEnvelope::Ok(Json(item.into())),
            Err(err) => ItemResponseEnvelope::from_error(err.into_error_response()),
        }
    }

    /// Update an item
    ///
    /// Expects a JSON body with `name` and `wishlist_id`, like on creation. The
    /// body's `wishlist_id` is overridden by the path, so the item never moves.
    /// `purchased` is replaced too and resets to false when omitted.
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn update(
        &self,
        _auth: ApiKeyAuth,
        wishlist_id: Path<i64>,
        item_id: Path<i64>,
        req: &Request,
        body: Body,
    ) -> ItemResponseEnvelope {
        let lookup = GetItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };
        if let Err(err) = self.get_use_case.execute(lookup).await {
            return ItemResponseEnvelope::from_error(err.into_error_response());
        }

        if let Err(json) = require_json(req) {
            return ItemResponseEnvelope::UnsupportedMediaType(json);
        }

        let params = UpdateItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
            data: read_json(body).await,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => ItemResponseEnvelope::Ok(Json(item.into())),
            Err(err) => ItemResponseEnvelope::from_error(err.into_error_response()),
        }
    }

    /// Delete an item
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Items"
    )]
    async fn delete(
        &self,
        _auth: ApiKeyAuth,
        wishlist_id: Path<i64>,
        item_id: Path<i64>,
    ) -> DeleteItemResponse {
        let params = DeleteItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    503 => DeleteItemResponse::ServiceUnavailable(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark an item as purchased
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id/purchase",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn purchase(
        &self,
        _auth: ApiKeyAuth,
        wishlist_id: Path<i64>,
        item_id: Path<i64>,
    ) -> ItemResponseEnvelope {
        let params = PurchaseItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };

        match self.purchase_use_case.execute(params).await {
            Ok(item) => ItemResponseEnvelope::Ok(Json(item.into())),
            Err(err) => ItemResponseEnvelope::from_error(err.into_error_response()),
        }
    }
}

#[derive(ApiResponse)]
pub enum ListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl CreateItemResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ItemResponseEnvelope {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl ItemResponseEnvelope {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
