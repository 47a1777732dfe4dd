use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::permission::PermissionKey,
};
use test_utils::{builder::TestBuilder, factory};
