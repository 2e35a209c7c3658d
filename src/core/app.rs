use crate::core::PlacementApi;
use crate::domain::model::{
    DashboardSummary, NewInternship, NewOffer, NewReport, NewStudent, Report, Student,
};
use crate::utils::error::Result;
use serde::Serialize;

/// 學生清單與統計的當前畫面
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub dashboard: DashboardSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Refresh,
    ViewStudent(i64),
    DeleteStudent(i64),
    SubmitStudent(NewStudent),
    SubmitOffer(NewOffer),
    SubmitInternship(NewInternship),
    SubmitReport(NewReport),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppOutcome {
    Refreshed(Snapshot),
    StudentDetail(Student),
    DashboardUpdated(DashboardSummary),
    ReportAdded(Report),
}

pub struct PlacementApp<A: PlacementApi> {
    api: A,
}

impl<A: PlacementApi> PlacementApp<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 啟動時載入學生清單與統計，由宿主在啟動時呼叫一次
    pub async fn start(&self) -> Result<Snapshot> {
        tracing::info!("🚀 Loading students and dashboard");
        self.snapshot().await
    }

    pub async fn handle(&self, event: AppEvent) -> Result<AppOutcome> {
        match event {
            AppEvent::Refresh => Ok(AppOutcome::Refreshed(self.snapshot().await?)),
            AppEvent::ViewStudent(id) => {
                tracing::debug!("Viewing student {}", id);
                let student = self.api.get_student(id).await?;
                Ok(AppOutcome::StudentDetail(student))
            }
            AppEvent::DeleteStudent(id) => {
                self.api.delete_student(id).await?;
                tracing::info!("🗑️ Deleted student {}", id);
                Ok(AppOutcome::Refreshed(self.snapshot().await?))
            }
            AppEvent::SubmitStudent(student) => {
                let created = self.api.create_student(&student).await?;
                tracing::info!("✅ Added student {} ({})", created.name, created.roll_no);
                Ok(AppOutcome::Refreshed(self.snapshot().await?))
            }
            AppEvent::SubmitOffer(offer) => {
                let created = self.api.create_offer(&offer).await?;
                tracing::info!(
                    "✅ Added offer {} for student {}",
                    created.id,
                    created.student_id
                );
                let dashboard = self.api.dashboard_summary().await?;
                Ok(AppOutcome::DashboardUpdated(dashboard))
            }
            AppEvent::SubmitInternship(internship) => {
                let created = self.api.create_internship(&internship).await?;
                tracing::info!(
                    "✅ Added internship {} for student {}",
                    created.id,
                    created.student_id
                );
                let dashboard = self.api.dashboard_summary().await?;
                Ok(AppOutcome::DashboardUpdated(dashboard))
            }
            AppEvent::SubmitReport(report) => {
                let created = self.api.create_report(&report).await?;
                tracing::info!(
                    "✅ Added report {} for internship {}",
                    created.id,
                    created.internship_id
                );
                Ok(AppOutcome::ReportAdded(created))
            }
        }
    }

    // 依序載入：先學生清單，再統計
    async fn snapshot(&self) -> Result<Snapshot> {
        let students = self.api.list_students().await?;
        tracing::debug!("Loaded {} students", students.len());
        let dashboard = self.api.dashboard_summary().await?;
        Ok(Snapshot {
            students,
            dashboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        Internship, InternshipStatus, InternshipUpdate, Offer, OfferStatus, OfferUpdate,
        ReportUpdate, StudentUpdate,
    };
    use crate::utils::error::ClientError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockApi {
        calls: Arc<Mutex<Vec<String>>>,
        students: Arc<Mutex<Vec<Student>>>,
        fail_writes: bool,
    }

    impl MockApi {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        async fn record(&self, call: &str) {
            self.calls.lock().await.push(call.to_string());
        }

        async fn calls(&self) -> Vec<String> {
            self.calls.lock().await.clone()
        }

        fn write_result(&self) -> Result<()> {
            if self.fail_writes {
                Err(ClientError::ApiError {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn student(id: i64, roll_no: &str, name: &str) -> Student {
        Student {
            id,
            roll_no: roll_no.to_string(),
            name: name.to_string(),
            dept: None,
            year: None,
            email: None,
            offers: vec![],
            internships: vec![],
        }
    }

    #[async_trait]
    impl PlacementApi for MockApi {
        async fn list_students(&self) -> Result<Vec<Student>> {
            self.record("list_students").await;
            Ok(self.students.lock().await.clone())
        }

        async fn get_student(&self, id: i64) -> Result<Student> {
            self.record("get_student").await;
            self.students
                .lock()
                .await
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or(ClientError::ApiError {
                    status: 404,
                    body: "not found".to_string(),
                })
        }

        async fn create_student(&self, new: &NewStudent) -> Result<Student> {
            self.record("create_student").await;
            self.write_result()?;
            let mut students = self.students.lock().await;
            let created = student(students.len() as i64 + 1, &new.roll_no, &new.name);
            students.push(created.clone());
            Ok(created)
        }

        async fn update_student(&self, _id: i64, _update: &StudentUpdate) -> Result<Student> {
            unimplemented!()
        }

        async fn delete_student(&self, id: i64) -> Result<()> {
            self.record("delete_student").await;
            self.write_result()?;
            self.students.lock().await.retain(|s| s.id != id);
            Ok(())
        }

        async fn list_offers(&self) -> Result<Vec<Offer>> {
            unimplemented!()
        }

        async fn create_offer(&self, new: &NewOffer) -> Result<Offer> {
            self.record("create_offer").await;
            self.write_result()?;
            Ok(Offer {
                id: 1,
                company: Some(new.company.clone()),
                role: Some(new.role.clone()),
                ctc: new.ctc.clone(),
                status: new.status.clone(),
                date: new.date,
                student_id: new.student_id,
            })
        }

        async fn update_offer(&self, _id: i64, _update: &OfferUpdate) -> Result<Offer> {
            unimplemented!()
        }

        async fn delete_offer(&self, _id: i64) -> Result<()> {
            unimplemented!()
        }

        async fn list_internships(&self) -> Result<Vec<Internship>> {
            unimplemented!()
        }

        async fn create_internship(&self, new: &NewInternship) -> Result<Internship> {
            self.record("create_internship").await;
            self.write_result()?;
            Ok(Internship {
                id: 1,
                company: Some(new.company.clone()),
                role: Some(new.role.clone()),
                start_date: new.start_date,
                end_date: new.end_date,
                status: new.status.clone(),
                student_id: new.student_id,
                reports: vec![],
            })
        }

        async fn update_internship(
            &self,
            _id: i64,
            _update: &InternshipUpdate,
        ) -> Result<Internship> {
            unimplemented!()
        }

        async fn delete_internship(&self, _id: i64) -> Result<()> {
            unimplemented!()
        }

        async fn create_report(&self, new: &NewReport) -> Result<Report> {
            self.record("create_report").await;
            self.write_result()?;
            Ok(Report {
                id: 9,
                date: new.date,
                title: Some(new.title.clone()),
                content: new.content.clone(),
                evaluation: new.evaluation.clone(),
                internship_id: new.internship_id,
            })
        }

        async fn update_report(&self, _id: i64, _update: &ReportUpdate) -> Result<Report> {
            unimplemented!()
        }

        async fn delete_report(&self, _id: i64) -> Result<()> {
            unimplemented!()
        }

        async fn dashboard_summary(&self) -> Result<DashboardSummary> {
            self.record("dashboard_summary").await;
            Ok(DashboardSummary {
                total_students: self.students.lock().await.len() as u64,
                ..Default::default()
            })
        }
    }

    fn new_student() -> NewStudent {
        NewStudent {
            roll_no: "BT123".to_string(),
            name: "Aman Verma".to_string(),
            dept: Some("CSE".to_string()),
            year: Some("3".to_string()),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_start_loads_students_then_dashboard() {
        let api = MockApi::default();
        api.students.lock().await.push(student(1, "R1", "A"));
        let app = PlacementApp::new(api.clone());

        let snapshot = app.start().await.unwrap();

        assert_eq!(snapshot.students.len(), 1);
        assert_eq!(snapshot.dashboard.total_students, 1);
        assert_eq!(api.calls().await, vec!["list_students", "dashboard_summary"]);
    }

    #[tokio::test]
    async fn test_submit_student_refreshes_after_write() {
        let api = MockApi::default();
        let app = PlacementApp::new(api.clone());

        let outcome = app
            .handle(AppEvent::SubmitStudent(new_student()))
            .await
            .unwrap();

        match outcome {
            AppOutcome::Refreshed(snapshot) => {
                assert_eq!(snapshot.students.len(), 1);
                assert_eq!(snapshot.students[0].roll_no, "BT123");
                assert_eq!(snapshot.dashboard.total_students, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            api.calls().await,
            vec!["create_student", "list_students", "dashboard_summary"]
        );
    }

    #[tokio::test]
    async fn test_failed_write_skips_refresh() {
        let api = MockApi::failing();
        let app = PlacementApp::new(api.clone());

        let result = app.handle(AppEvent::SubmitStudent(new_student())).await;

        assert!(matches!(
            result,
            Err(ClientError::ApiError { status: 500, .. })
        ));
        assert_eq!(api.calls().await, vec!["create_student"]);
    }

    #[tokio::test]
    async fn test_delete_student_refreshes_list_and_dashboard() {
        let api = MockApi::default();
        api.students.lock().await.push(student(1, "R1", "A"));
        api.students.lock().await.push(student(2, "R2", "B"));
        let app = PlacementApp::new(api.clone());

        let outcome = app.handle(AppEvent::DeleteStudent(1)).await.unwrap();

        let AppOutcome::Refreshed(snapshot) = outcome else {
            panic!("expected refreshed snapshot");
        };
        assert_eq!(snapshot.students.len(), 1);
        assert_eq!(snapshot.students[0].id, 2);
        assert_eq!(
            api.calls().await,
            vec!["delete_student", "list_students", "dashboard_summary"]
        );
    }

    #[tokio::test]
    async fn test_submit_offer_reloads_dashboard_only() {
        let api = MockApi::default();
        let app = PlacementApp::new(api.clone());

        let outcome = app
            .handle(AppEvent::SubmitOffer(NewOffer {
                student_id: 1,
                company: "Zomato".to_string(),
                role: "SDE Intern".to_string(),
                ctc: Some("6 LPA".to_string()),
                date: None,
                status: OfferStatus::Accepted,
            }))
            .await
            .unwrap();

        assert!(matches!(outcome, AppOutcome::DashboardUpdated(_)));
        assert_eq!(api.calls().await, vec!["create_offer", "dashboard_summary"]);
    }

    #[test]
    fn test_submit_internship_reloads_dashboard_only() {
        tokio_test::block_on(async {
            let api = MockApi::default();
            let app = PlacementApp::new(api.clone());

            let outcome = app
                .handle(AppEvent::SubmitInternship(NewInternship {
                    student_id: 1,
                    company: "ABC Corp".to_string(),
                    role: "Data Analyst Intern".to_string(),
                    start_date: None,
                    end_date: None,
                    status: InternshipStatus::Ongoing,
                }))
                .await
                .unwrap();

            assert!(matches!(outcome, AppOutcome::DashboardUpdated(_)));
            assert_eq!(
                api.calls().await,
                vec!["create_internship", "dashboard_summary"]
            );
        });
    }

    #[tokio::test]
    async fn test_submit_report_returns_created_report() {
        let api = MockApi::default();
        let app = PlacementApp::new(api.clone());

        let outcome = app
            .handle(AppEvent::SubmitReport(NewReport {
                internship_id: 4,
                title: "Week 1".to_string(),
                content: None,
                evaluation: None,
                date: None,
            }))
            .await
            .unwrap();

        let AppOutcome::ReportAdded(report) = outcome else {
            panic!("expected created report");
        };
        assert_eq!(report.internship_id, 4);
        assert_eq!(api.calls().await, vec!["create_report"]);
    }

    #[tokio::test]
    async fn test_view_missing_student_surfaces_error() {
        let api = MockApi::default();
        let app = PlacementApp::new(api);

        let result = app.handle(AppEvent::ViewStudent(999)).await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }
}
