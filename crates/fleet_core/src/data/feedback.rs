use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Feedback {
    #[serde(alias = "Order_ID", default)]
    pub order_id: String,
    #[serde(alias = "Rating")]
    pub rating: i64,
    #[serde(alias = "Issue_Category", default)]
    pub issue_category: String,
    #[serde(alias = "Would_Recommend", default)]
    pub would_recommend: Option<String>,
    #[serde(alias = "Feedback_Text", default)]
    pub feedback_text: Option<String>,
}
