use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemCommand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}
