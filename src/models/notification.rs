use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates::flexible_date;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, alias = "isRead")]
    pub read: bool,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, with = "flexible_date")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCount {
    #[serde(alias = "unreadCount")]
    pub count: u64,
}
