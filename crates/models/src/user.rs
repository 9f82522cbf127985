use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Store,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Store => Entity::has_one(store::Entity).into() }
    }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Name, email and password must all be present and non-blank.
pub fn validate_required(name: &str, email: &str, password: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ModelError::Validation("Nome, email e senha são obrigatórios".into()));
    }
    Ok(())
}
