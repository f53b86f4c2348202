use tracing::info;

use crate::client::UserServiceClient;
use crate::users::model::User;
use crate::users::validation::check_create_form;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreateStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Created(String),
}

/// New-user form.
#[derive(Debug, Default)]
pub struct CreateUserView {
    pub name: String,
    pub email: String,
    status: CreateStatus,
}

impl CreateUserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &CreateStatus {
        &self.status
    }

    pub fn can_submit(&self) -> bool {
        self.status != CreateStatus::Submitting
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Validates and submits the form.
    ///
    /// Returns the created user so the parent can react to it; inputs are
    /// kept when validation fails.
    pub async fn submit(&mut self, client: &UserServiceClient) -> Option<User> {
        let req = match check_create_form(&self.name, &self.email) {
            Ok(req) => req,
            Err(e) => {
                self.status = CreateStatus::Failed(e.to_string());
                return None;
            }
        };

        self.status = CreateStatus::Submitting;
        let created = client.create_user(&req).await;
        let user = created.into_inner();
        info!(user_id = user.id, "user created from form");
        self.status =
            CreateStatus::Created(format!("User \"{}\" created successfully!", user.name));
        self.name.clear();
        self.email.clear();
        Some(user)
    }
}
