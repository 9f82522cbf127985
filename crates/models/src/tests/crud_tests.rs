use crate::{product, store, user};
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, ModelTrait, QueryOrder, Set, SqlErr};
use anyhow::Result;

use super::setup_test_db;

async fn insert_user(db: &sea_orm::DatabaseConnection, email: &str) -> Result<user::Model> {
    let am = user::ActiveModel {
        name: Set("Ana".into()),
        email: Set(email.into()),
        password: Set("secret".into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_store(db: &sea_orm::DatabaseConnection, user_id: i32, name: &str) -> Result<store::Model, sea_orm::DbErr> {
    store::ActiveModel { name: Set(name.into()), user_id: Set(user_id), ..Default::default() }
        .insert(db)
        .await
}

#[tokio::test]
async fn test_user_ids_are_assigned_in_order() -> Result<()> {
    let db = setup_test_db().await?;
    let a = insert_user(&db, "a@x.com").await?;
    let b = insert_user(&db, "b@x.com").await?;
    assert!(b.id > a.id);

    let all = user::Entity::find().order_by_asc(user::Column::Id).all(&db).await?;
    assert_eq!(all.iter().map(|u| u.id).collect::<Vec<_>>(), vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "dup@x.com").await?;
    let err = insert_user(&db, "dup@x.com").await.unwrap_err();
    let db_err = err.downcast::<sea_orm::DbErr>()?;
    assert!(matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    Ok(())
}

#[tokio::test]
async fn test_second_store_for_user_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_user(&db, "owner@x.com").await?;
    insert_store(&db, u.id, "S1").await?;
    let err = insert_store(&db, u.id, "S2").await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    Ok(())
}

#[tokio::test]
async fn test_store_for_missing_user_is_foreign_key_violation() -> Result<()> {
    let db = setup_test_db().await?;
    let err = insert_store(&db, 999, "Ghost").await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))));
    assert!(store::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_relations_load_both_directions() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_user(&db, "rel@x.com").await?;
    let s = insert_store(&db, u.id, "Shop").await?;
    for (name, price) in [("P1", 10.0), ("P2", 2.5)] {
        product::ActiveModel { name: Set(name.into()), price: Set(price), store_id: Set(s.id), ..Default::default() }
            .insert(&db)
            .await?;
    }

    let owned = u.find_related(store::Entity).one(&db).await?.expect("store of user");
    assert_eq!(owned.id, s.id);

    let stores = store::Entity::find().all(&db).await?;
    let owners = stores.load_one(user::Entity, &db).await?;
    let products = stores.load_many(product::Entity::find().order_by_asc(product::Column::Id), &db).await?;
    assert_eq!(owners[0].as_ref().map(|o| o.id), Some(u.id));
    assert_eq!(products[0].iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["P1", "P2"]);
    Ok(())
}

#[tokio::test]
async fn test_deleting_user_cascades_to_store_and_products() -> Result<()> {
    let db = setup_test_db().await?;
    let u = insert_user(&db, "cascade@x.com").await?;
    let s = insert_store(&db, u.id, "Shop").await?;
    product::ActiveModel { name: Set("P".into()), price: Set(1.0), store_id: Set(s.id), ..Default::default() }
        .insert(&db)
        .await?;

    user::Entity::delete_by_id(u.id).exec(&db).await?;
    assert!(store::Entity::find_by_id(s.id).one(&db).await?.is_none());
    assert!(product::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[test]
fn test_models_serialize_camel_case() {
    let s = store::Model { id: 1, name: "S".into(), user_id: 2 };
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "name": "S", "userId": 2}));

    let p = product::Model { id: 3, name: "P".into(), price: 9.5, store_id: 1 };
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["storeId"], 1);
    assert_eq!(json["price"], 9.5);
}

#[test]
fn test_price_validation() {
    assert!(product::validate_price(0.01).is_ok());
    assert!(product::validate_price(0.0).is_err());
    assert!(product::validate_price(-5.0).is_err());
    assert!(product::validate_price(f64::NAN).is_err());
    assert!(product::validate_price(f64::INFINITY).is_err());
}

#[test]
fn test_user_required_fields() {
    assert!(user::validate_required("A", "a@x.com", "p").is_ok());
    assert!(user::validate_required(" ", "a@x.com", "p").is_err());
    assert!(user::validate_required("A", "", "p").is_err());
    assert!(user::validate_required("A", "a@x.com", "").is_err());
}
