use httpmock::prelude::*;
use placement_client::config::toml_config::TomlConfig;
use placement_client::domain::model::NewStudent;
use placement_client::utils::validation::Validate;
use placement_client::{ApiClient, AppEvent, AppOutcome, ClientError, ClientSettings, PlacementApp};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn mock_dashboard(server: &MockServer, total_students: u64) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/summary");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "total_students": total_students,
                "total_offers": 0,
                "accepted_offers": 0,
                "joined_offers": 0,
                "ongoing_internships": 0
            }));
    })
}

#[tokio::test]
async fn test_start_against_configured_server() {
    let server = MockServer::start();
    let students_mock = server.mock(|when, then| {
        when.method(GET).path("/api/students");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"id": 1, "roll_no": "R1", "name": "A"}]));
    });
    let dashboard_mock = mock_dashboard(&server, 1);

    // 透過設定檔指定 base_url
    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[api]\nbase_url = \"{}\"\ntimeout_seconds = 5\n",
        server.url("/api")
    )
    .unwrap();

    let file = TomlConfig::from_file(config_file.path()).unwrap();
    file.validate().unwrap();
    let settings = ClientSettings::resolve(None, None, Some(&file));
    settings.validate().unwrap();

    let app = PlacementApp::new(ApiClient::from_config(&settings).unwrap());
    let snapshot = app.start().await.unwrap();

    students_mock.assert();
    dashboard_mock.assert();
    assert_eq!(snapshot.students.len(), 1);
    assert_eq!(snapshot.students[0].roll_no, "R1");
    assert_eq!(snapshot.dashboard.total_students, 1);
}

#[tokio::test]
async fn test_submit_student_reloads_list_and_dashboard() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/students")
            .json_body(json!({"roll_no": "BT123", "name": "Aman Verma"}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({"id": 1, "roll_no": "BT123", "name": "Aman Verma"}));
    });
    let students_mock = server.mock(|when, then| {
        when.method(GET).path("/api/students");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"id": 1, "roll_no": "BT123", "name": "Aman Verma"}]));
    });
    let dashboard_mock = mock_dashboard(&server, 1);

    let app = PlacementApp::new(ApiClient::new(server.url("/api")));
    let outcome = app
        .handle(AppEvent::SubmitStudent(NewStudent {
            roll_no: "BT123".to_string(),
            name: "Aman Verma".to_string(),
            dept: None,
            year: None,
            email: None,
        }))
        .await
        .unwrap();

    create_mock.assert();
    students_mock.assert();
    dashboard_mock.assert();
    let AppOutcome::Refreshed(snapshot) = outcome else {
        panic!("expected refreshed snapshot");
    };
    assert_eq!(snapshot.students[0].name, "Aman Verma");
}

#[tokio::test]
async fn test_failed_delete_does_not_reload() {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/students/42");
        then.status(404).body("not found");
    });
    let students_mock = server.mock(|when, then| {
        when.method(GET).path("/api/students");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([]));
    });
    let dashboard_mock = mock_dashboard(&server, 0);

    let app = PlacementApp::new(ApiClient::new(server.url("/api")));
    let result = app.handle(AppEvent::DeleteStudent(42)).await;

    delete_mock.assert();
    assert_eq!(students_mock.hits(), 0);
    assert_eq!(dashboard_mock.hits(), 0);
    match result {
        Err(ClientError::ApiError { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
