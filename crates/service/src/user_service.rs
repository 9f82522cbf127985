use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use models::user;

use crate::errors::ServiceError;
use crate::gateway::domain::{NewUser, UserChanges, UserDetail};
use crate::gateway::{GatewayError, PersistenceGateway};

pub const USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const EMAIL_TAKEN: &str = "E-mail já cadastrado";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserInput> for UserChanges {
    fn from(input: UpdateUserInput) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());
        UserChanges { name: keep(input.name), email: keep(input.email), password: keep(input.password) }
    }
}

fn interpret(err: GatewayError) -> ServiceError {
    match err {
        GatewayError::UniqueConstraintViolation(_) => ServiceError::Conflict(EMAIL_TAKEN.into()),
        GatewayError::RecordNotFound => ServiceError::NotFound(USER_NOT_FOUND.into()),
        other @ (GatewayError::ForeignKeyViolation(_) | GatewayError::Persistence(_)) => ServiceError::Gateway(other),
    }
}

/// User operations over a shared gateway
#[derive(Clone)]
pub struct UserService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self { Self { gateway } }

    /// Create a user; name, email and password must all be non-empty.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::gateway::repo::InMemoryGateway;
    /// use service::user_service::{CreateUserInput, UserService};
    /// let svc = UserService::new(Arc::new(InMemoryGateway::new()));
    /// let input = CreateUserInput { name: Some("Ana".into()), email: Some("ana@example.com".into()), password: Some("123".into()) };
    /// let user = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn create(&self, input: CreateUserInput) -> Result<user::Model, ServiceError> {
        let received = json!({ "name": input.name, "email": input.email });
        let (name, email, password) = (
            input.name.unwrap_or_default(),
            input.email.unwrap_or_default(),
            input.password.unwrap_or_default(),
        );
        user::validate_required(&name, &email, &password)
            .map_err(|e| ServiceError::missing_fields(e.to_string(), received))?;

        let created = self.gateway.create_user(NewUser { name, email, password }).await.map_err(interpret)?;
        info!(user_id = created.id, email = %created.email, "user_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.gateway.find_users().await.map_err(interpret)
    }

    /// User with its store and the store's products.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<UserDetail, ServiceError> {
        self.gateway
            .find_user(id)
            .await
            .map_err(interpret)?
            .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.into()))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateUserInput) -> Result<user::Model, ServiceError> {
        let updated = self.gateway.update_user(id, input.into()).await.map_err(interpret)?;
        info!(user_id = updated.id, "user_updated");
        Ok(updated)
    }

    /// Removes the user together with its store and products.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.gateway.delete_user(id).await.map_err(interpret)?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}
