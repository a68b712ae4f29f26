use inventory_core::inventory::load_initial;
use inventory_core::{ApiConfig, InventoryApi, InventoryError, InventoryHttpClient, LookupKind, ProductPayload};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InventoryHttpClient {
    let config = ApiConfig::new(&format!("{}/", server.uri())).expect("mock server uri is valid");
    InventoryHttpClient::new(config)
}

fn product_json(id: i64, sku: &str, price: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "sku": sku,
        "nombre": "Agua",
        "cantidad": 12,
        "precio": price,
        "categoria": { "id": 2, "nombre_categoria": "Bebidas", "detalle_categoria": "Sin alcohol" },
        "unidad": { "id": 1, "unidad": "Botella" },
        "estado": { "id": 3, "estado": "Activo", "detalle_estado": null }
    })
}

fn payload(id: Option<i64>) -> ProductPayload {
    ProductPayload {
        id,
        sku: "LEC-01".to_string(),
        name: "Leche".to_string(),
        category_code: 4,
        unit_code: 1,
        status_code: 5,
        quantity: 6,
        price: 4.5,
    }
}

#[tokio::test]
async fn test_list_products_accepts_string_and_numeric_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "A1", json!("3.50")),
            product_json(2, "A2", json!(7)),
            product_json(3, "A3", json!("n/a")),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).list_products().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].price.value(), 3.5);
    assert_eq!(products[1].price.value(), 7.0);
    assert_eq!(products[2].price.value(), 0.0);
    assert!(products[2].price.is_malformed());
    assert_eq!(products[0].category.name, "Bebidas");
    assert_eq!(products[0].unit.detail, None);
}

#[tokio::test]
async fn test_load_options_projects_each_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "nombre_categoria": "Bebidas", "detalle_categoria": "Sin alcohol" },
            { "id": 4, "nombre_categoria": "Lácteos" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/unidades/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "unidad": "Botella", "detalle": "600ml" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/estados/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 5, "estado": "Pendiente" }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let categories = client.load_options(LookupKind::Category).await.unwrap();
    let units = client.load_options(LookupKind::Unit).await.unwrap();
    let statuses = client.load_options(LookupKind::Status).await.unwrap();

    let names: Vec<_> = categories.iter().map(|o| (o.id, o.name.as_str())).collect();
    assert_eq!(names, vec![(2, "Bebidas"), (4, "Lácteos")]);
    assert_eq!(units[0].name, "Botella");
    assert_eq!(statuses[0].id, 5);
}

#[tokio::test]
async fn test_initial_load_fails_when_one_table_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/unidades/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/estados/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = load_initial(&client_for(&server)).await;

    match result {
        Err(InventoryError::ServerError { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/api/unidades/"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_posts_bare_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/productos/"))
        .and(body_json(json!({
            "sku": "LEC-01",
            "nombre": "Leche",
            "cod_categoria": 4,
            "cod_unidad": 1,
            "cod_estado": 5,
            "cantidad": 6,
            "precio": 4.5
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).create_product(&payload(None)).await.unwrap();
}

#[tokio::test]
async fn test_update_puts_to_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/productos/9/"))
        .and(body_json(json!({
            "id": 9,
            "sku": "LEC-01",
            "nombre": "Leche",
            "cod_categoria": 4,
            "cod_unidad": 1,
            "cod_estado": 5,
            "cantidad": 6,
            "precio": 4.5
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).update_product(9, &payload(Some(9))).await.unwrap();
}

#[tokio::test]
async fn test_delete_hits_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/productos/7/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_product(7).await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/productos/7/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_product(7).await.unwrap_err();
    assert!(matches!(err, InventoryError::ServerError { status: 500, .. }));
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "not a list" })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_products().await.unwrap_err();
    assert!(matches!(err, InventoryError::Decode { .. }));
}
