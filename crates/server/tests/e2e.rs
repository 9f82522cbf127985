use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use server::startup;

struct TestApp {
    base_url: String,
    _shutdown: oneshot::Sender<()>,
}

/// Full stack over a migrated in-memory SQLite database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig { database: DatabaseConfig::sqlite_memory(), ..AppConfig::default() };
    let state = startup::build_state(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        if let Err(e) = startup::serve(listener, state, shutdown).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), _shutdown: tx })
}

#[tokio::test]
async fn e2e_status() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/status", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "API Online");
    Ok(())
}

#[tokio::test]
async fn e2e_user_store_product_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/usuarios", app.base_url))
        .json(&json!({"name": "Ana", "email": "ana@example.com", "password": "123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let user = res.json::<Value>().await?;
    let uid = user["id"].as_i64().expect("user id");

    let res = c
        .post(format!("{}/usuarios", app.base_url))
        .json(&json!({"name": "Outra", "email": "ana@example.com", "password": "456"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c
        .post(format!("{}/stores", app.base_url))
        .json(&json!({"name": "Loja", "userId": uid}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let store = res.json::<Value>().await?;
    let sid = store["id"].as_i64().expect("store id");

    let res = c
        .post(format!("{}/stores", app.base_url))
        .json(&json!({"name": "Outra Loja", "userId": uid}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c
        .post(format!("{}/products", app.base_url))
        .json(&json!({"name": "Caneta", "price": -5, "storeId": sid}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(format!("{}/products", app.base_url))
        .json(&json!({"name": "Caneta", "price": 4.5, "storeId": 9999}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c
        .post(format!("{}/products", app.base_url))
        .json(&json!({"name": "Caneta", "price": 4.5, "storeId": sid}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let product = res.json::<Value>().await?;
    assert_eq!(product["store"]["user"]["email"], "ana@example.com");

    let detail = c.get(format!("{}/usuarios/{}", app.base_url, uid)).send().await?.json::<Value>().await?;
    assert_eq!(detail["store"]["products"][0]["id"], product["id"]);

    let res = c.delete(format!("{}/stores/{}", app.base_url, sid)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let products = c.get(format!("{}/products", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(products, json!([]));
    Ok(())
}
