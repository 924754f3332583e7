use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clients::repo::Client;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCommand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_numbers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClientCommand {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact_numbers: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact_numbers: Vec<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            contact_numbers: client.contact_numbers,
        }
    }
}
