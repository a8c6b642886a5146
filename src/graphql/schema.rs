use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::users::DynUsersService;

use super::types::*;

pub type SignupSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(users: DynUsersService) -> SignupSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .finish()
}

fn users_service<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DynUsersService> {
    ctx.data::<DynUsersService>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a registered user by ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let users = users_service(ctx)?;
        Ok(users.find_by_id(&id).await?.map(User::from))
    }

    /// Get a registered user by email address
    async fn user_by_email(
        &self,
        ctx: &Context<'_>,
        email: String,
    ) -> async_graphql::Result<Option<User>> {
        let users = users_service(ctx)?;
        Ok(users.find_by_email(&email).await?.map(User::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register a new account and return its activation token
    async fn register(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "registerDto")] register_dto: RegisterInput,
    ) -> async_graphql::Result<RegisterResponse> {
        let users = users_service(ctx)?;
        let new_user = crate::model::NewUser::from(register_dto);
        tracing::debug!(email = %new_user.email, "Registering user");

        let outcome = users.register(new_user).await;
        if let Err(ref e) = outcome {
            match e {
                crate::users::UsersError::Hashing(_) | crate::users::UsersError::Storage(_) => {
                    tracing::error!(error = %e, "Registration failed")
                }
                _ => tracing::info!(error = %e, "Registration rejected"),
            }
        }

        Ok(outcome.into())
    }
}
