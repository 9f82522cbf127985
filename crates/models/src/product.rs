use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub store_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Store,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Price must be finite and strictly positive.
pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ModelError::Validation("Preço deve ser um número válido maior que zero".into()));
    }
    Ok(())
}
