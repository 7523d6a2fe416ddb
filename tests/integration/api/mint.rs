use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use greenloop_mint_relayer::api;
use serde_json::json;

use crate::integration::common::{
    app_state, app_state_without_signer, StubProvider, NFT_CONTRACT, RECIPIENT,
};

#[actix_web::test]
async fn test_erc20_mint_confirms_and_scales_amount() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc20")
        .set_json(json!({"to": RECIPIENT, "amount": "10"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["amount"], "10");
    assert_eq!(body["amountInWei"], "10000000000000000000");
    assert_eq!(body["blockNumber"], 100);
    assert_eq!(body["to"], RECIPIENT);
    assert!(body["transactionHash"]
        .as_str()
        .is_some_and(|hash| hash.starts_with("0x") && hash.len() == 66));
    assert_eq!(provider.submissions(), 1);
}

#[actix_web::test]
async fn test_erc20_accepts_numeric_amount_at_root() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/mint/erc20")
        .set_json(json!({"to": RECIPIENT, "amount": 2.5}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["amountInWei"], "2500000000000000000");
}

#[actix_web::test]
async fn test_repeated_request_is_minted_twice() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/mint/erc20")
            .set_json(json!({"to": RECIPIENT, "amount": "1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(provider.submissions(), 2);
}

#[actix_web::test]
async fn test_erc20_invalid_address_makes_no_chain_call() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc20")
        .set_json(json!({"to": "not-an-address", "amount": "10"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Endereço inválido");
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_erc20_missing_amount_is_bad_request() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc20")
        .set_json(json!({"to": RECIPIENT}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Parâmetros obrigatórios: to (endereço) e amount (quantidade)"
    );
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_erc721_without_contract_address_is_server_error() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), None))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc721")
        .set_json(json!({"to": RECIPIENT, "uri": "ipfs://metadata"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.ends_with("não configurado")));
    assert_eq!(body["kind"], "CONFIGURATION_ERROR");
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_erc721_mint_returns_token_id() {
    let provider = Arc::new(StubProvider::minting_token(7));
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider.clone(), Some(NFT_CONTRACT)))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc721")
        .set_json(json!({"to": RECIPIENT, "uri": "ipfs://metadata"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["uri"], "ipfs://metadata");
    assert_eq!(body["tokenId"], "7");
    assert_eq!(provider.submissions(), 1);
}

#[actix_web::test]
async fn test_erc721_without_transfer_log_has_null_token_id() {
    let provider = Arc::new(StubProvider::new());
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider, Some(NFT_CONTRACT)))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/mint/erc721")
        .set_json(json!({"to": RECIPIENT, "uri": "ipfs://metadata"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert!(body["tokenId"].is_null());
}

#[actix_web::test]
async fn test_mint_without_signer_is_configuration_error() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_without_signer())
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc20")
        .set_json(json!({"to": RECIPIENT, "amount": "1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "PRIVATE_KEY não configurada");
}

#[actix_web::test]
async fn test_get_on_mint_route_is_method_not_allowed() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_without_signer())
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/mint/erc721").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers().get("allow").unwrap(), "POST");
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_without_signer())
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/mint/erc20")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"to\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
