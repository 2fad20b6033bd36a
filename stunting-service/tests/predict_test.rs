//! `POST /predict` contract tests against the fixture model.

mod common;

use axum::http::StatusCode;
use common::{post_json, router_with_encoder, send, test_router, MALE_ONLY_ENCODER};
use serde_json::{json, Value};

async fn predict(body: Value) -> (StatusCode, Value) {
    send(test_router(), post_json("/predict", &body)).await
}

#[tokio::test]
async fn predicts_normal_growth() {
    let (status, body) = predict(json!({
        "jenis_kelamin": "laki-laki",
        "usia": 24,
        "tinggi_badan": 87
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasil_prediksi"], "normal");
    assert_eq!(body["keterangan"], "✔ Normal (pertumbuhan baik)");
    assert_eq!(
        body["probabilitas"],
        json!({"normal": 100.0, "severely stunted": 0.0, "stunted": 0.0, "tinggi": 0.0})
    );
}

#[tokio::test]
async fn predicts_each_status() {
    let cases = [
        ("perempuan", 70.5, "severely stunted", "⚠ Sangat pendek parah (risiko sangat tinggi, perlu penanganan segera!)"),
        ("laki-laki", 80.0, "stunted", "⚠ Pendek (indikasi stunting, perlu pemantauan gizi)"),
        ("laki-laki", 87.0, "normal", "✔ Normal (pertumbuhan baik)"),
        ("laki-laki", 97.0, "tinggi", "✔ Lebih tinggi dari rata-rata"),
    ];

    for (sex, height, label, description) in cases {
        let (status, body) = predict(json!({
            "jenis_kelamin": sex,
            "usia": 24,
            "tinggi_badan": height
        }))
        .await;

        assert_eq!(status, StatusCode::OK, "{} {}", sex, height);
        assert_eq!(body["hasil_prediksi"], label, "{} {}", sex, height);
        assert_eq!(body["keterangan"], description);
    }
}

#[tokio::test]
async fn echoes_input_fields() {
    let (status, body) = predict(json!({
        "jenis_kelamin": "Perempuan",
        "usia": 13,
        "tinggi_badan": 74.25
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jenis_kelamin"], "Perempuan");
    assert_eq!(body["usia"], 13);
    assert_eq!(body["tinggi_badan"], 74.25);
}

#[tokio::test]
async fn sex_is_case_insensitive() {
    let request = |sex: &str| {
        json!({
            "jenis_kelamin": sex,
            "usia": 24,
            "tinggi_badan": 82.5
        })
    };

    let (_, lower) = predict(request("laki-laki")).await;
    let (status, upper) = predict(request("LAKI-LAKI")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(upper["hasil_prediksi"], lower["hasil_prediksi"]);
    assert_eq!(upper["probabilitas"], lower["probabilitas"]);
    assert_eq!(upper["jenis_kelamin"], "LAKI-LAKI");
}

#[tokio::test]
async fn probabilities_cover_classes_and_sum_to_100() {
    let (status, body) = predict(json!({
        "jenis_kelamin": "laki-laki",
        "usia": 24,
        "tinggi_badan": 82.5
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let probabilities = body["probabilitas"].as_object().unwrap();

    let mut keys: Vec<&str> = probabilities.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["normal", "severely stunted", "stunted", "tinggi"]);

    let total: f64 = probabilities.values().map(|v| v.as_f64().unwrap()).sum();
    assert!((total - 100.0).abs() <= 0.01 * probabilities.len() as f64);

    // Five neighbours: three stunted, two normal.
    assert_eq!(body["hasil_prediksi"], "stunted");
    assert_eq!(probabilities["stunted"], 60.0);
    assert_eq!(probabilities["normal"], 40.0);
}

#[tokio::test]
async fn repeated_requests_are_deterministic() {
    let request = json!({
        "jenis_kelamin": "perempuan",
        "usia": 24,
        "tinggi_badan": 80
    });

    let (_, first) = predict(request.clone()).await;
    for _ in 0..5 {
        let (status, body) = predict(request.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasil_prediksi"], first["hasil_prediksi"]);
        assert_eq!(body["probabilitas"], first["probabilitas"]);
    }
}

#[tokio::test]
async fn rejects_unknown_sex_with_400() {
    for sex in ["other", "male", ""] {
        let (status, body) = predict(json!({
            "jenis_kelamin": sex,
            "usia": 24,
            "tinggi_badan": 80
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "sex {:?}", sex);
        assert_eq!(body["code"], "bad_request");
        assert_eq!(
            body["error"],
            "Jenis kelamin harus 'laki-laki' atau 'perempuan'"
        );
    }
}

#[tokio::test]
async fn rejects_out_of_range_values_with_422() {
    let cases = [
        (0, 80.0, "usia"),
        (61, 80.0, "usia"),
        (24, 30.0, "tinggi_badan"),
        (24, 150.0, "tinggi_badan"),
        (24, 12.0, "tinggi_badan"),
    ];

    for (usia, tinggi_badan, field) in cases {
        let (status, body) = predict(json!({
            "jenis_kelamin": "laki-laki",
            "usia": usia,
            "tinggi_badan": tinggi_badan
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} {}", usia, tinggi_badan);
        assert_eq!(body["code"], "validation_error");
        assert!(body["details"].as_str().unwrap().contains(field));
        assert!(body.get("hasil_prediksi").is_none());
    }
}

#[tokio::test]
async fn accepts_boundary_ages() {
    for usia in [1, 60] {
        let (status, _) = predict(json!({
            "jenis_kelamin": "laki-laki",
            "usia": usia,
            "tinggi_badan": 80
        }))
        .await;

        assert_eq!(status, StatusCode::OK, "usia {}", usia);
    }
}

#[tokio::test]
async fn rejects_schema_violations_with_422() {
    let bodies = [
        json!({"jenis_kelamin": "laki-laki", "tinggi_badan": 80}),
        json!({"jenis_kelamin": "laki-laki", "usia": "dua", "tinggi_badan": 80}),
        json!({"jenis_kelamin": "laki-laki", "usia": 24.5, "tinggi_badan": 80}),
        json!({"jenis_kelamin": 1, "usia": 24, "tinggi_badan": 80}),
    ];

    for body in bodies {
        let (status, response) = predict(body.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", body);
        assert_eq!(response["code"], "invalid_json");
    }
}

#[tokio::test]
async fn rejects_malformed_json_with_400() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"usia\": "))
        .unwrap();

    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_json");
}

#[tokio::test]
async fn encoder_drift_is_an_opaque_500() {
    let router = router_with_encoder(MALE_ONLY_ENCODER);
    let (status, body) = send(
        router,
        post_json(
            "/predict",
            &json!({"jenis_kelamin": "perempuan", "usia": 24, "tinggi_badan": 80}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "prediction_failed");
    assert!(!body.to_string().contains("encoder"));
}
