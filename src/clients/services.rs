use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;
use uuid::Uuid;

use crate::clients::dto::{ClientCommand, ClientResponse, UpdateClientCommand};
use crate::clients::repo::PgClientStore;
use crate::result::ServiceResult;

pub const CLIENT_INVALID: &str = "Client Invalid";
pub const NAME_EMPTY: &str = "Name can't be empty!";
pub const EMAIL_INVALID: &str = "Email is invalid!";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Collect-all validation of a client command.
pub(crate) fn validate(command: &ClientCommand) -> Vec<String> {
    let mut errors = Vec::new();
    if command.name.trim().is_empty() {
        errors.push(NAME_EMPTY.to_string());
    }
    if !is_valid_email(&command.email) {
        errors.push(EMAIL_INVALID.to_string());
    }
    errors
}

pub struct ClientService {
    clients: PgClientStore,
}

impl ClientService {
    pub fn new(clients: PgClientStore) -> Self {
        Self { clients }
    }

    pub async fn create_client(&self, command: ClientCommand) -> anyhow::Result<ServiceResult> {
        let errors = validate(&command);
        if !errors.is_empty() {
            return Ok(ServiceResult::bad_request_all(errors));
        }

        let client = self
            .clients
            .insert(&command.name, &command.email, &command.contact_numbers)
            .await?;

        info!(client_id = %client.id, "client created");
        Ok(ServiceResult::created(ClientResponse::from(client)))
    }

    pub async fn update_client(
        &self,
        command: UpdateClientCommand,
    ) -> anyhow::Result<ServiceResult> {
        if let Some(email) = command.email.as_deref() {
            if !is_valid_email(email) {
                return Ok(ServiceResult::bad_request(EMAIL_INVALID));
            }
        }

        let updated = self
            .clients
            .update(
                command.id,
                command.name.as_deref(),
                command.email.as_deref(),
                command.contact_numbers.as_deref(),
            )
            .await?;

        match updated {
            Some(client) => {
                info!(client_id = %client.id, "client updated");
                Ok(ServiceResult::ok(ClientResponse::from(client)))
            }
            None => Ok(ServiceResult::bad_request(CLIENT_INVALID)),
        }
    }

    pub async fn get_all_clients(&self, amount: Option<i64>) -> anyhow::Result<ServiceResult> {
        let clients = self.clients.list(amount).await?;
        let responses: Vec<ClientResponse> =
            clients.into_iter().map(ClientResponse::from).collect();
        Ok(ServiceResult::ok(responses))
    }

    pub async fn get_client_by_id(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        match self.clients.find_by_id(id).await? {
            Some(client) => Ok(ServiceResult::ok(ClientResponse::from(client))),
            None => Ok(ServiceResult::bad_request(CLIENT_INVALID)),
        }
    }

    pub async fn delete_client(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        if self.clients.delete(id).await? {
            info!(client_id = %id, "client deleted");
            Ok(ServiceResult::ok(id))
        } else {
            Ok(ServiceResult::bad_request(CLIENT_INVALID))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, email: &str) -> ClientCommand {
        ClientCommand {
            name: name.to_string(),
            email: email.to_string(),
            contact_numbers: vec!["123456789".to_string()],
        }
    }

    #[test]
    fn accepts_a_valid_command() {
        assert!(validate(&command("Test Client", "test@example.com")).is_empty());
    }

    #[test]
    fn rejects_an_empty_name() {
        let errors = validate(&command("", "test@example.com"));
        assert!(errors.contains(&NAME_EMPTY.to_string()));
    }

    #[test]
    fn rejects_a_malformed_email() {
        let errors = validate(&command("Test Client", "not-an-email"));
        assert!(errors.contains(&EMAIL_INVALID.to_string()));
    }

    #[test]
    fn collects_both_violations() {
        let errors = validate(&command("  ", "nope"));
        assert_eq!(errors.len(), 2);
    }
}
