// tests/integration/resource_tests.rs
//! 食事・服薬・症状・目標・診察メモ・実績

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::register_test_user,
    request::{create_get_request, create_request, read_json},
};

#[tokio::test]
async fn test_meal_totals_and_date_lookup() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({
        "date": "2025-03-14T12:30:00Z",
        "mealType": "lunch",
        "foodItems": [
            { "name": "Rice", "calories": 200, "protein": 4, "carbs": 45 },
            { "name": "Salmon", "calories": 350, "protein": 34, "fat": 22 }
        ]
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/meals", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["data"]["totalCalories"], 550.0);
    assert_eq!(body["data"]["totalProtein"], 38.0);
    assert_eq!(body["data"]["totalFat"], 22.0);
    let meal_id = body["data"]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(create_get_request("/api/meals/date/2025-03-14", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let res = app
        .clone()
        .oneshot(create_get_request("/api/meals/date/2025-03-15", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // foodItems を更新すると合計も再計算
    let update = json!({ "foodItems": [{ "name": "Apple", "calories": 95 }] });
    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/meals/{}", meal_id),
            &user.token,
            &update,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["totalCalories"], 95.0);
    assert_eq!(body["data"]["mealType"], "lunch");
}

#[tokio::test]
async fn test_meal_date_and_type_validation() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/meals/date/14-03-2025", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["message"], "Invalid date format. Use YYYY-MM-DD");

    let payload = json!({ "mealType": "brunch", "foodItems": [] });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/meals", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_medication_log_appends_intake() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({
        "name": "Vitamin D",
        "dosage": "1000 IU",
        "frequency": "once daily"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/medications", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["data"]["active"], true);
    assert!(body["data"]["logs"].as_array().unwrap().is_empty());
    let medication_id = body["data"]["id"].as_str().unwrap().to_string();

    let log_uri = format!("/api/medications/{}/log", medication_id);
    for time in ["08:00", "20:00"] {
        let res = app
            .clone()
            .oneshot(create_request(
                "POST",
                &log_uri,
                &user.token,
                &json!({ "time": time, "taken": true }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app
        .clone()
        .oneshot(create_get_request("/api/medications", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    let logs = body["data"][0]["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1]["time"], "20:00");

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            &format!("/api/medications/{}/log", uuid::Uuid::new_v4()),
            &user.token,
            &json!({ "taken": true }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_medication_frequency_validation() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({ "name": "Ibuprofen", "frequency": "hourly" });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/medications", &user.token, &payload))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_symptom_lifecycle() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({
        "symptoms": ["headache", "fatigue"],
        "severity": 6,
        "stressLevel": 7,
        "duration": "3 hours"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/symptoms", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["data"]["symptoms"], json!(["headache", "fatigue"]));
    let symptom_id = body["data"]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/symptoms/{}", symptom_id),
            &user.token,
            &json!({ "severity": 3 }),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["data"]["severity"], 3);
    assert_eq!(body["data"]["stressLevel"], 7);

    let res = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/symptoms/{}", symptom_id),
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["data"]["message"], "Symptom deleted");
}

#[tokio::test]
async fn test_goal_progress() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({
        "goalType": "steps",
        "targetValue": 10000,
        "currentValue": 2500,
        "unit": "steps"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/goals", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["data"]["progressPercent"], 25.0);
    assert_eq!(body["data"]["completed"], false);
    let goal_id = body["data"]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/goals/{}", goal_id),
            &user.token,
            &json!({ "currentValue": 12000, "completed": true }),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["data"]["progressPercent"], 100.0);
    assert_eq!(body["data"]["completed"], true);

    let res = app
        .clone()
        .oneshot(create_get_request("/api/goals", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_doctor_notes_and_achievements() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let note = json!({
        "doctorName": "Dr. Mensah",
        "visitDate": "2025-02-10T09:00:00Z",
        "diagnosis": "Seasonal allergies",
        "notes": "Start antihistamine, review in a month"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/doctor-notes", &user.token, &note))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    let note_id = body["data"]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/doctor-notes/{}", note_id),
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["data"]["message"], "Doctor note deleted");

    let achievement = json!({
        "title": "First week",
        "description": "Logged vitals for 7 days",
        "achievementType": "streak"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/achievements", &user.token, &achievement))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(create_get_request("/api/achievements", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    let achievements = body["data"].as_array().unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0]["title"], "First week");
}
