use crate::domain::model::{
    DashboardSummary, Internship, InternshipUpdate, NewInternship, NewOffer, NewReport,
    NewStudent, Offer, OfferUpdate, Report, ReportUpdate, Student, StudentUpdate,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// 遠端 placement 服務提供的資源操作
#[async_trait]
pub trait PlacementApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn get_student(&self, id: i64) -> Result<Student>;
    async fn create_student(&self, student: &NewStudent) -> Result<Student>;
    async fn update_student(&self, id: i64, update: &StudentUpdate) -> Result<Student>;
    async fn delete_student(&self, id: i64) -> Result<()>;

    async fn list_offers(&self) -> Result<Vec<Offer>>;
    async fn create_offer(&self, offer: &NewOffer) -> Result<Offer>;
    async fn update_offer(&self, id: i64, update: &OfferUpdate) -> Result<Offer>;
    async fn delete_offer(&self, id: i64) -> Result<()>;

    async fn list_internships(&self) -> Result<Vec<Internship>>;
    async fn create_internship(&self, internship: &NewInternship) -> Result<Internship>;
    async fn update_internship(&self, id: i64, update: &InternshipUpdate) -> Result<Internship>;
    async fn delete_internship(&self, id: i64) -> Result<()>;

    async fn create_report(&self, report: &NewReport) -> Result<Report>;
    async fn update_report(&self, id: i64, update: &ReportUpdate) -> Result<Report>;
    async fn delete_report(&self, id: i64) -> Result<()>;

    async fn dashboard_summary(&self) -> Result<DashboardSummary>;
}
