use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub user_id: String,
    pub is_correct: bool,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
}
