use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use greenloop_mint_relayer::api;

use crate::integration::common::{app_state, app_state_without_signer, StubProvider, NFT_CONTRACT, SIGNER};

#[actix_web::test]
async fn test_health_reports_signer_and_contracts() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(StubProvider::new()), Some(NFT_CONTRACT)))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["wallet"], SIGNER);
    assert_eq!(
        body["contracts"]["glPET"],
        "0x35FbA5dE07ed5479c8a151b78013b8Fea0FE67B4"
    );
    assert_eq!(body["contracts"]["glPETc"], NFT_CONTRACT);
    assert_eq!(body["environment"], "development");
}

#[actix_web::test]
async fn test_health_under_api_prefix() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_without_signer())
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["wallet"], "não configurado");
}

#[actix_web::test]
async fn test_health_rejects_other_methods() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_without_signer())
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::delete().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Método não permitido. Use GET.");
}
