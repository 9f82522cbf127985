use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

use crate::gateway::domain::{NewProduct, NewStore, NewUser, ProductChanges, StoreChanges, UserChanges};
use crate::gateway::{GatewayError, PersistenceGateway};

/// Fresh migrated in-memory SQLite database; every test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser { name: name.into(), email: email.into(), password: "p".into() }
}

/// Behaviour every gateway implementation must share. Expects an empty store.
pub async fn gateway_contract(gw: &dyn PersistenceGateway) {
    // users
    let ana = gw.create_user(new_user("Ana", "ana@x.com")).await.expect("create ana");
    let bia = gw.create_user(new_user("Bia", "bia@x.com")).await.expect("create bia");
    assert!(bia.id > ana.id);
    assert!(matches!(
        gw.create_user(new_user("Clone", "ana@x.com")).await,
        Err(GatewayError::UniqueConstraintViolation(_))
    ));
    let ids: Vec<i32> = gw.find_users().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![ana.id, bia.id]);

    let renamed = gw
        .update_user(ana.id, UserChanges { name: Some("Ana Maria".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ana Maria");
    assert_eq!(renamed.email, "ana@x.com");
    assert!(matches!(
        gw.update_user(ana.id, UserChanges { email: Some("bia@x.com".into()), ..Default::default() }).await,
        Err(GatewayError::UniqueConstraintViolation(_))
    ));
    assert_eq!(gw.update_user(9999, UserChanges::default()).await, Err(GatewayError::RecordNotFound));

    // stores
    let shop = gw.create_store(NewStore { name: "Shop".into(), user_id: ana.id }).await.unwrap();
    assert_eq!(shop.user.id, ana.id);
    assert!(shop.products.is_empty());
    assert!(matches!(
        gw.create_store(NewStore { name: "Second".into(), user_id: ana.id }).await,
        Err(GatewayError::UniqueConstraintViolation(_))
    ));
    assert!(matches!(
        gw.create_store(NewStore { name: "Ghost".into(), user_id: 9999 }).await,
        Err(GatewayError::ForeignKeyViolation(_))
    ));
    assert_eq!(gw.find_stores().await.unwrap().len(), 1);

    let moved = gw
        .update_store(shop.store.id, StoreChanges { name: Some("Loja".into()) })
        .await
        .unwrap();
    assert_eq!(moved.store.name, "Loja");
    assert_eq!(moved.store.user_id, ana.id);
    assert_eq!(gw.update_store(9999, StoreChanges::default()).await, Err(GatewayError::RecordNotFound));

    // products
    let p1 = gw
        .create_product(NewProduct { name: "P1".into(), price: 10.0, store_id: shop.store.id })
        .await
        .unwrap();
    let p2 = gw
        .create_product(NewProduct { name: "P2".into(), price: 2.5, store_id: shop.store.id })
        .await
        .unwrap();
    assert_eq!(p1.store.store.id, shop.store.id);
    assert_eq!(p1.store.user.id, ana.id);
    assert!(matches!(
        gw.create_product(NewProduct { name: "Orphan".into(), price: 1.0, store_id: 9999 }).await,
        Err(GatewayError::ForeignKeyViolation(_))
    ));

    let repriced = gw
        .update_product(p2.product.id, ProductChanges { price: Some(3.0), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(repriced.product.price, 3.0);
    assert_eq!(repriced.product.name, "P2");

    let listed: Vec<i32> = gw.find_products().await.unwrap().iter().map(|p| p.product.id).collect();
    assert_eq!(listed, vec![p1.product.id, p2.product.id]);

    let detail = gw.find_user(ana.id).await.unwrap().expect("ana detail");
    let store = detail.store.expect("ana owns a store");
    assert_eq!(store.store.id, shop.store.id);
    assert_eq!(store.products.len(), 2);
    assert!(gw.find_user(bia.id).await.unwrap().expect("bia detail").store.is_none());

    let fetched = gw.find_store(shop.store.id).await.unwrap().expect("store");
    assert_eq!(fetched.products.iter().map(|p| p.id).collect::<Vec<_>>(), listed);

    let looked_up = gw.find_product(p2.product.id).await.unwrap().expect("p2 detail");
    assert_eq!(looked_up.product.name, "P2");
    assert_eq!(looked_up.store.store.id, shop.store.id);
    assert_eq!(looked_up.store.user.id, ana.id);

    // deletes
    gw.delete_product(p1.product.id).await.unwrap();
    assert_eq!(gw.delete_product(p1.product.id).await, Err(GatewayError::RecordNotFound));
    assert!(gw.find_product(p1.product.id).await.unwrap().is_none());

    gw.delete_user(ana.id).await.unwrap();
    assert!(gw.find_user(ana.id).await.unwrap().is_none());
    assert!(gw.find_store(shop.store.id).await.unwrap().is_none());
    assert!(gw.find_product(p2.product.id).await.unwrap().is_none());
    assert_eq!(gw.delete_user(ana.id).await, Err(GatewayError::RecordNotFound));
    assert_eq!(gw.delete_store(shop.store.id).await, Err(GatewayError::RecordNotFound));
}
