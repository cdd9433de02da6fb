use carlot::api::CarlotApi;
use carlot::server::create_router;
use carlot::store::fs::FileStore;
use carlot::store::memory::InMemoryStore;
use carlot::store::CarStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

async fn spawn_app<S>(store: S) -> String
where
    S: CarStore + Send + 'static,
{
    let app = create_router(CarlotApi::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> Client {
    Client::new()
}

async fn add_car(base_url: &str, body: Value) -> reqwest::Response {
    client()
        .post(format!("{}/api/cars", base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn add_corolla(base_url: &str) -> Value {
    let resp = add_car(
        base_url,
        json!({
            "brand": "Toyota",
            "model": "Corolla",
            "pricePerDay": "45",
            "imageUrl": "img.png"
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn rent(base_url: &str, body: Value) -> reqwest::Response {
    client()
        .post(format!("{}/api/rent", base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn message(resp: reqwest::Response) -> String {
    let body: Value = resp.json().await.unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_health_reports_car_count() {
    let base_url = spawn_app(InMemoryStore::new()).await;
    add_corolla(&base_url).await;

    let body: Value = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cars"], 1);
}

#[tokio::test]
async fn test_add_and_list_cars() {
    let base_url = spawn_app(InMemoryStore::new()).await;

    let car = add_corolla(&base_url).await;
    assert_eq!(car["carId"], "C001");
    assert_eq!(car["pricePerDay"], 45.0);
    assert_eq!(car["available"], true);
    assert_eq!(car["rentedBy"], "");

    // Numeric JSON values are accepted as well as strings
    let resp = add_car(
        &base_url,
        json!({"brand": "Honda", "model": "Civic", "pricePerDay": 50.5, "imageUrl": "h.png"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cars: Vec<Value> = client()
        .get(format!("{}/api/cars", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[1]["carId"], "C002");
    assert_eq!(cars[1]["pricePerDay"], 50.5);
}

#[tokio::test]
async fn test_add_car_validation() {
    let base_url = spawn_app(InMemoryStore::new()).await;

    let resp = add_car(
        &base_url,
        json!({"brand": "Toyota", "model": "Corolla", "pricePerDay": "abc", "imageUrl": "x"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(resp).await, "Invalid price");

    let resp = add_car(
        &base_url,
        json!({"brand": "  ", "model": "Corolla", "pricePerDay": "45", "imageUrl": "x"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(resp).await, "Enter valid car details");

    let resp = add_car(
        &base_url,
        json!({"brand": "Toyota", "model": "Corolla", "pricePerDay": "0", "imageUrl": "x"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client()
        .post(format!("{}/api/cars", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!message(resp).await.is_empty());
}

#[tokio::test]
async fn test_get_car_is_case_insensitive() {
    let base_url = spawn_app(InMemoryStore::new()).await;
    add_corolla(&base_url).await;

    let resp = client()
        .get(format!("{}/api/cars/c001", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let car: Value = resp.json().await.unwrap();
    assert_eq!(car["brand"], "Toyota");

    let resp = client()
        .get(format!("{}/api/cars/C999", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(resp).await, "Car not found: C999");
}

#[tokio::test]
async fn test_rent_and_return_flow() {
    let base_url = spawn_app(InMemoryStore::new()).await;
    add_corolla(&base_url).await;

    let resp = rent(
        &base_url,
        json!({"carId": "C001", "customer": "Alice", "days": "3"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Rented successfully");
    assert_eq!(body["total"], 135.0);

    // Second rental of the same car conflicts
    let resp = rent(&base_url, json!({"carId": "C001", "customer": "Bob", "days": 1})).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(message(resp).await, "Car C001 already rented");

    // Rented cars cannot be deleted
    let resp = client()
        .delete(format!("{}/api/cars/C001", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = client()
        .post(format!("{}/api/return/C001", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(message(resp).await, "Returned successfully");

    let car: Value = client()
        .get(format!("{}/api/cars/C001", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(car["available"], true);
    assert_eq!(car["rentedBy"], "");
}

#[tokio::test]
async fn test_rent_validation() {
    let base_url = spawn_app(InMemoryStore::new()).await;
    add_corolla(&base_url).await;

    let resp = rent(
        &base_url,
        json!({"carId": "C001", "customer": "Alice", "days": "three"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(resp).await, "Invalid days");

    let resp = rent(&base_url, json!({"carId": "C001", "customer": "Alice", "days": "0"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(resp).await, "Days must be > 0");

    let resp = rent(&base_url, json!({"carId": "C001", "customer": "  ", "days": "2"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(resp).await, "Customer name required");

    let resp = rent(&base_url, json!({"carId": "C404", "customer": "Alice", "days": "2"})).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_car() {
    let base_url = spawn_app(InMemoryStore::new()).await;
    add_corolla(&base_url).await;

    let resp = client()
        .delete(format!("{}/api/cars/C001", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(message(resp).await, "Deleted successfully");

    let resp = client()
        .delete(format!("{}/api/cars/C001", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // IDs are never reused within a run
    let car = add_corolla(&base_url).await;
    assert_eq!(car["carId"], "C002");
}

#[tokio::test]
async fn test_changes_reach_the_car_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.txt");
    let base_url = spawn_app(FileStore::new(&path)).await;

    add_corolla(&base_url).await;
    rent(&base_url, json!({"carId": "C001", "customer": "Alice", "days": "2"})).await;

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "C001|Toyota|Corolla|45.0|img.png|false|Alice\n");
}

#[tokio::test]
async fn test_persistence_failure_is_internal_error() {
    let base_url = spawn_app(InMemoryStore::new().failing_writes()).await;

    let resp = add_car(
        &base_url,
        json!({"brand": "Toyota", "model": "Corolla", "pricePerDay": "45", "imageUrl": "x"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
