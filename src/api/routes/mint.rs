//! Mint endpoints.
//!
//! Both endpoints answer only after the transaction is confirmed, or with the
//! error envelope. Any method other than POST is answered with 405.
use actix_web::{web, HttpResponse};

use super::method_not_allowed;
use crate::{
    api::controllers::mint,
    models::{ApiError, AppState, MintFungibleRequest, MintNonFungibleRequest},
};

async fn mint_erc20(
    data: web::Data<AppState>,
    request: web::Json<MintFungibleRequest>,
) -> Result<HttpResponse, ApiError> {
    mint::mint_fungible(&data.relay, request.into_inner()).await
}

async fn mint_erc721(
    data: web::Data<AppState>,
    request: web::Json<MintNonFungibleRequest>,
) -> Result<HttpResponse, ApiError> {
    mint::mint_non_fungible(&data.relay, request.into_inner()).await
}

/// Initializes the mint routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mint/erc20")
            .route(web::post().to(mint_erc20))
            .default_service(method_not_allowed("POST")),
    )
    .service(
        web::resource("/mint/erc721")
            .route(web::post().to(mint_erc721))
            .default_service(method_not_allowed("POST")),
    );
}
