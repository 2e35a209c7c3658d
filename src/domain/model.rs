use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 錄取狀態；伺服器回傳未知字串時原樣保留，null 視為預設值
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum OfferStatus {
    #[default]
    Offered,
    Accepted,
    Declined,
    Joined,
    Other(String),
}

impl OfferStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OfferStatus::Offered => "Offered",
            OfferStatus::Accepted => "Accepted",
            OfferStatus::Declined => "Declined",
            OfferStatus::Joined => "Joined",
            OfferStatus::Other(value) => value,
        }
    }
}

impl From<String> for OfferStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Offered" => OfferStatus::Offered,
            "Accepted" => OfferStatus::Accepted,
            "Declined" => OfferStatus::Declined,
            "Joined" => OfferStatus::Joined,
            _ => OfferStatus::Other(value),
        }
    }
}

impl From<Option<String>> for OfferStatus {
    fn from(value: Option<String>) -> Self {
        value.map(OfferStatus::from).unwrap_or_default()
    }
}

impl From<OfferStatus> for String {
    fn from(status: OfferStatus) -> Self {
        match status {
            OfferStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// 只接受已知狀態（不分大小寫），避免打錯字的狀態被伺服器統計漏掉
impl FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            OfferStatus::Offered,
            OfferStatus::Accepted,
            OfferStatus::Declined,
            OfferStatus::Joined,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| {
            format!(
                "unknown offer status '{}' (expected Offered, Accepted, Declined or Joined)",
                s
            )
        })
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum InternshipStatus {
    #[default]
    Ongoing,
    Completed,
    Other(String),
}

impl InternshipStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InternshipStatus::Ongoing => "Ongoing",
            InternshipStatus::Completed => "Completed",
            InternshipStatus::Other(value) => value,
        }
    }
}

impl From<String> for InternshipStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ongoing" => InternshipStatus::Ongoing,
            "Completed" => InternshipStatus::Completed,
            _ => InternshipStatus::Other(value),
        }
    }
}

impl From<Option<String>> for InternshipStatus {
    fn from(value: Option<String>) -> Self {
        value.map(InternshipStatus::from).unwrap_or_default()
    }
}

impl From<InternshipStatus> for String {
    fn from(status: InternshipStatus) -> Self {
        match status {
            InternshipStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for InternshipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [InternshipStatus::Ongoing, InternshipStatus::Completed]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown internship status '{}' (expected Ongoing or Completed)",
                    s
                )
            })
    }
}

impl fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    #[serde(default)]
    pub dept: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub internships: Vec<Internship>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub ctc: Option<String>,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub student_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InternshipStatus,
    pub student_id: i64,
    #[serde(default)]
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub evaluation: Option<String>,
    pub internship_id: i64,
}

/// 伺服器端計算的統計數字，客戶端只讀不寫
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_students: u64,
    pub total_offers: u64,
    pub accepted_offers: u64,
    pub joined_offers: u64,
    pub ongoing_internships: u64,
}

// ---- 寫入用的 payload ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub roll_no: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// 只送出有設定的欄位，伺服器會保留其餘欄位的舊值
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    pub student_id: i64,
    pub company: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OfferStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInternship {
    pub student_id: i64,
    pub company: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: InternshipStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InternshipUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InternshipStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub internship_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}
