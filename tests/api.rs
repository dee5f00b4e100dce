use serde_json::{json, Value};
use std::sync::Arc;
use warp::http::StatusCode;

use startup_dashboard_model::config::ModelConfig;
use startup_dashboard_model::routes::routes;

fn api() -> impl warp::Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone + 'static {
    routes(Arc::new(ModelConfig::default()), None)
}

fn financial() -> Value {
    json!({
        "acv": 350000.0,
        "customers": 3.0,
        "growthRate": 15.0,
        "churnRate": 10.0,
        "teamSize": 8.0,
        "avgSalary": 140000.0,
        "infraCost": 10000.0,
        "marketingCost": 20000.0
    })
}

fn body(res: &warp::http::Response<warp::hyper::body::Bytes>) -> Value {
    serde_json::from_slice(res.body()).expect("response is JSON")
}

#[tokio::test]
async fn metrics_route_computes_unit_economics() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/metrics")
        .json(&financial())
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let metrics = body(&res);
    assert_eq!(metrics["arr"], json!(1050000.0));
    assert_eq!(metrics["runwayMonths"], json!(1));
    assert_eq!(metrics["cac"], json!(35000.0));
    assert_eq!(metrics["ltvCacRatio"], json!(85.0));
}

#[tokio::test]
async fn zero_churn_serializes_ltv_as_null() {
    let mut inputs = financial();
    inputs["churnRate"] = json!(0.0);

    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/metrics")
        .json(&inputs)
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let metrics = body(&res);
    assert!(metrics["ltv"].is_null());
    assert!(metrics["ltvCacRatio"].is_null());
}

#[tokio::test]
async fn projection_route_returns_thirteen_quarters() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/projection")
        .json(&financial())
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let periods = body(&res);
    let periods = periods.as_array().unwrap();
    assert_eq!(periods.len(), 13);
    assert!(periods[0]["period"].as_str().unwrap().starts_with('Q'));
    assert!((periods[0]["customers"].as_f64().unwrap() - 3.0).abs() < 1e-9);
    assert!((periods[1]["customers"].as_f64().unwrap() - 3.45).abs() < 1e-9);
}

#[tokio::test]
async fn funding_route_reports_dilution() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/funding")
        .json(&json!({
            "targetRaise": 8.0,
            "preMoneyValuation": 24.0,
            "leadCheck": 5.0,
            "esopPoolPercent": 20.0,
            "useOfFunds": {
                "productPercent": 40.0,
                "gtmPercent": 30.0,
                "teamPercent": 20.0,
                "reservePercent": 10.0
            }
        }))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let summary = body(&res);
    assert_eq!(summary["postMoney"], json!(32.0));
    assert_eq!(summary["dilutionPercent"], json!(25.0));
    assert_eq!(summary["founderOwnershipPercent"], json!(23.6));
    assert_eq!(summary["useOfFundsBalanced"], json!(true));
}

#[tokio::test]
async fn three_year_route_recommends_whole_millions() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/funding/three_year")
        .json(&json!({
            "financial": financial(),
            "threeYear": {
                "year2TeamSize": 12.0,
                "year3TeamSize": 20.0,
                "avgSalary": 120000.0,
                "year2MonthlyMarketing": 25000.0,
                "year3MonthlyMarketing": 60000.0,
                "year2MonthlyInfra": 15000.0,
                "year3MonthlyInfra": 25000.0
            }
        }))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(&res)["recommendedRaise"], json!(9));
}

#[tokio::test]
async fn team_route_adds_hiring_waves() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/team")
        .json(&json!({
            "plannedHiresNearTerm": 3.0,
            "plannedHiresNextPeriod": 2.0,
            "newHireSalary": 120000.0,
            "equityPercentPerHire": 0.5
        }))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let costs = body(&res);
    assert_eq!(costs["totalTeamSize"], json!(7.0));
    assert_eq!(costs["totalEquityAllocated"], json!(2.5));
}

#[tokio::test]
async fn pipeline_route_aggregates_supplied_deals() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/pipeline")
        .json(&json!([
            {"stage": "Closed", "value": 350000.0, "status": "active"},
            {"stage": "Lead", "value": 50000.0, "status": "active"},
            {"stage": "Closed", "value": 100000.0, "status": "churned"}
        ]))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let actuals = body(&res);
    assert_eq!(actuals["actualARR"], json!(450000.0));
    assert_eq!(actuals["actualCustomerCount"], json!(2));
    assert_eq!(actuals["pipelineValue"], json!(500000.0));
    assert_eq!(actuals["activeDealsCount"], json!(2));
}

#[tokio::test]
async fn live_pipeline_without_collaborator_is_unavailable() {
    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/pipeline")
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body(&res)["error"].as_str().unwrap().contains("DEALS_API_URL"));
}

#[tokio::test]
async fn dashboard_route_prefers_actuals() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/dashboard")
        .json(&json!({
            "financial": financial(),
            "hiring": {
                "plannedHiresNearTerm": 0.0,
                "plannedHiresNextPeriod": 0.0,
                "newHireSalary": 0.0,
                "equityPercentPerHire": 0.0
            },
            "funding": {
                "targetRaise": 8.0,
                "preMoneyValuation": 24.0,
                "leadCheck": 5.0,
                "esopPoolPercent": 20.0,
                "useOfFunds": {
                    "productPercent": 40.0,
                    "gtmPercent": 30.0,
                    "teamPercent": 20.0,
                    "reservePercent": 20.0
                }
            },
            "threeYear": {
                "year2TeamSize": 0.0,
                "year3TeamSize": 0.0,
                "avgSalary": 0.0,
                "year2MonthlyMarketing": 0.0,
                "year3MonthlyMarketing": 0.0,
                "year2MonthlyInfra": 0.0,
                "year3MonthlyInfra": 0.0
            },
            "deals": [{"stage": "Closed", "value": 420000.0, "status": "active"}]
        }))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let model = body(&res);
    assert_eq!(model["display"]["source"], json!("actual"));
    assert_eq!(model["display"]["arr"], json!(420000.0));
    assert_eq!(model["projection"].as_array().unwrap().len(), 13);
    assert_eq!(model["issues"][0]["field"], json!("funding.useOfFunds"));
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/metrics")
        .header("content-type", "application/json")
        .body("{\"acv\": \"lots\"}")
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(body(&res)["error"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/nothing")
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/metrics")
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body(&res)["error"], json!("Method Not Allowed"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let padding = "x".repeat(300 * 1024);
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/metrics")
        .header("content-type", "application/json")
        .body(format!("{{\"padding\": \"{}\"}}", padding))
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn body_without_content_length_is_length_required() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/metrics")
        .header("content-type", "application/json")
        .reply(&api())
        .await;

    assert_eq!(res.status(), StatusCode::LENGTH_REQUIRED);
    assert_eq!(body(&res)["error"], json!("Length Required"));
}
