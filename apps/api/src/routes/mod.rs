pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::exercises::handlers as exercises;
use crate::progression::handlers as progression;
use crate::state::AppState;
use crate::view::handlers as view;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Progression
        .route("/api/v1/progress", get(progression::handle_get_progress))
        .route(
            "/api/v1/exercises/complete",
            post(progression::handle_complete),
        )
        // View controller
        .route("/api/v1/mode", get(view::handle_get_mode))
        .route("/api/v1/mode/reading", post(view::handle_start_reading))
        .route("/api/v1/mode/writing", post(view::handle_start_writing))
        .route("/api/v1/mode/exit", post(view::handle_exit))
        // Exercise generation
        .route(
            "/api/v1/reading/exercise",
            post(exercises::handle_reading_exercise),
        )
        .route(
            "/api/v1/writing/scenario",
            post(exercises::handle_writing_scenario),
        )
        .route(
            "/api/v1/writing/evaluate",
            post(exercises::handle_evaluate_writing),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::create_pool;
    use crate::errors::AppError;
    use crate::exercises::generator::ExerciseGenerator;
    use crate::exercises::models::{Question, ReadingExercise, WritingFeedback, WritingScenario};
    use crate::progression::models::UserState;
    use crate::progression::store::ProgressStore;
    use crate::view::ViewController;

    /// Canned generator that records the level of every call.
    #[derive(Default)]
    struct StubGenerator {
        fail: bool,
        levels: StdMutex<Vec<u32>>,
    }

    impl StubGenerator {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn record(&self, level: u32, operation: &str) -> Result<(), AppError> {
            self.levels.lock().unwrap().push(level);
            if self.fail {
                return Err(AppError::Llm(format!("{operation} failed: stub outage")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ExerciseGenerator for StubGenerator {
        async fn generate_reading_exercise(&self, level: u32) -> Result<ReadingExercise, AppError> {
            self.record(level, "generate_reading_exercise")?;
            Ok(ReadingExercise {
                subject: "Rollback of v2.3".to_string(),
                sender: "Mike, Backend Lead".to_string(),
                body: "We rolled back v2.3 because of a memory leak.".to_string(),
                questions: vec![Question {
                    question: "Why was v2.3 rolled back?".to_string(),
                    options: vec![
                        "Memory leak".to_string(),
                        "Slow build".to_string(),
                        "Bad UI".to_string(),
                        "No reason".to_string(),
                    ],
                    correct_index: 0,
                    explanation: "本文にメモリリークとあります。".to_string(),
                }],
            })
        }

        async fn generate_writing_scenario(&self, level: u32) -> Result<WritingScenario, AppError> {
            self.record(level, "generate_writing_scenario")?;
            Ok(scenario())
        }

        async fn evaluate_writing(
            &self,
            level: u32,
            _scenario: &WritingScenario,
            draft: &str,
        ) -> Result<WritingFeedback, AppError> {
            self.record(level, "evaluate_writing")?;
            Ok(WritingFeedback {
                score: 74,
                critique: "結論を先に書きましょう。".to_string(),
                improved_version: format!("Improved: {draft}"),
                grammar_mistakes: vec!["\"is slow\" → \"is running slowly\"".to_string()],
            })
        }
    }

    fn scenario() -> WritingScenario {
        WritingScenario {
            context: "The nightly build has failed three times.".to_string(),
            recipient_role: "Build engineer".to_string(),
            goal: "調査を依頼する".to_string(),
            key_points: vec!["3回失敗".to_string()],
        }
    }

    async fn test_app(user: UserState, generator: Arc<StubGenerator>) -> (Router, AppState) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let state = AppState::new(ViewController::new(user), ProgressStore::new(pool), generator);
        (build_router(state.clone()), state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app(UserState::default(), Arc::default()).await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_progress_starts_on_dashboard_with_defaults() {
        let (app, _) = test_app(UserState::default(), Arc::default()).await;
        let (status, body) = send(&app, "GET", "/api/v1/progress", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "dashboard");
        assert_eq!(body["user"]["level"], 1);
        assert_eq!(body["user"]["xpToNextLevel"], 100);
        assert_eq!(body["summary"]["band"], "Beginner");
    }

    #[tokio::test]
    async fn test_reading_cycle_levels_up_and_persists() {
        let generator = Arc::new(StubGenerator::default());
        let user = UserState {
            level: 1,
            xp: 90,
            ..UserState::default()
        };
        let (app, state) = test_app(user, generator.clone()).await;

        let (status, body) = send(&app, "POST", "/api/v1/mode/reading", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "reading");

        let (status, body) = send(&app, "POST", "/api/v1/reading/exercise", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["correctIndex"], 0);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 10, "type": "reading" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "dashboard");
        assert_eq!(body["user"]["level"], 2);
        assert_eq!(body["user"]["xp"], 5);
        assert_eq!(body["user"]["history"][0]["level"], 1);
        assert_eq!(body["xpGained"], 15);
        assert_eq!(body["leveledUp"], true);

        let saved = state.store.load().await.unwrap();
        assert_eq!(saved.level, 2);
        assert_eq!(saved.history.len(), 1);
        assert_eq!(*generator.levels.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_writing_cycle_passes_current_level_to_generator() {
        let generator = Arc::new(StubGenerator::default());
        let user = UserState {
            level: 30,
            ..UserState::default()
        };
        let (app, _) = test_app(user, generator.clone()).await;

        send(&app, "POST", "/api/v1/mode/writing", None).await;

        let (status, body) = send(&app, "POST", "/api/v1/writing/scenario", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recipientRole"], "Build engineer");

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/writing/evaluate",
            Some(json!({ "scenario": scenario(), "draft": "Please look at the build." })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 74);
        assert_eq!(body["improvedVersion"], "Improved: Please look at the build.");

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 74, "type": "writing" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["level"], 31);
        assert_eq!(body["user"]["xp"], 11);
        assert_eq!(*generator.levels.lock().unwrap(), vec![30, 30]);
    }

    #[tokio::test]
    async fn test_generation_outside_matching_mode_conflicts() {
        let generator = Arc::new(StubGenerator::default());
        let (app, _) = test_app(UserState::default(), generator.clone()).await;

        let (status, body) = send(&app, "POST", "/api/v1/reading/exercise", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");
        assert!(generator.levels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_switching_exercise_requires_dashboard() {
        let (app, _) = test_app(UserState::default(), Arc::default()).await;
        send(&app, "POST", "/api/v1/mode/reading", None).await;

        let (status, _) = send(&app, "POST", "/api/v1/mode/writing", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(&app, "POST", "/api/v1/mode/exit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "dashboard");

        let (status, body) = send(&app, "POST", "/api/v1/mode/writing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "writing");
    }

    #[tokio::test]
    async fn test_completion_type_must_match_mode() {
        let (app, state) = test_app(UserState::default(), Arc::default()).await;
        send(&app, "POST", "/api/v1/mode/writing", None).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 90, "type": "reading" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(state.controller.lock().await.user().history.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_rejected() {
        let (app, state) = test_app(UserState::default(), Arc::default()).await;
        send(&app, "POST", "/api/v1/mode/reading", None).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 101, "type": "reading" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let controller = state.controller.lock().await;
        assert_eq!(controller.mode(), crate::view::Mode::Reading);
        assert!(controller.user().history.is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_propagates_and_keeps_mode() {
        let (app, state) = test_app(UserState::default(), Arc::new(StubGenerator::failing())).await;
        send(&app, "POST", "/api/v1/mode/reading", None).await;

        let (status, body) = send(&app, "POST", "/api/v1/reading/exercise", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
        assert_eq!(state.controller.lock().await.mode(), crate::view::Mode::Reading);
    }

    #[tokio::test]
    async fn test_empty_draft_is_rejected_before_evaluation() {
        let generator = Arc::new(StubGenerator::default());
        let (app, _) = test_app(UserState::default(), generator.clone()).await;
        send(&app, "POST", "/api/v1/mode/writing", None).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/writing/evaluate",
            Some(json!({ "scenario": scenario(), "draft": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(generator.levels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_in_memory_progress() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let state = AppState::new(
            ViewController::new(UserState {
                level: 1,
                xp: 90,
                ..UserState::default()
            }),
            ProgressStore::new(pool.clone()),
            Arc::new(StubGenerator::default()),
        );
        let app = build_router(state.clone());
        send(&app, "POST", "/api/v1/mode/reading", None).await;

        pool.close().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 10, "type": "reading" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["level"], 2);
        assert_eq!(body["user"]["xp"], 5);

        let controller = state.controller.lock().await;
        assert_eq!(controller.mode(), crate::view::Mode::Dashboard);
        assert_eq!(controller.user().level, 2);
        assert_eq!(controller.user().xp, 5);
        assert_eq!(controller.user().history.len(), 1);
    }

    #[tokio::test]
    async fn test_response_fields_are_camel_case() {
        let (app, _) = test_app(UserState::default(), Arc::default()).await;
        send(&app, "POST", "/api/v1/mode/writing", None).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 40, "type": "writing" })),
        )
        .await;
        assert_eq!(body["xpGained"], 60);
        assert_eq!(body["leveledUp"], false);
        assert_eq!(body["summary"]["progressPercent"], 60);
        assert_eq!(body["summary"]["totalExercises"], 1);
        assert_eq!(body["summary"]["writing"]["averageScore"], 40.0);
        assert_eq!(body["summary"]["writing"]["bestScore"], 40);
        assert!(body.get("xp_gained").is_none());
        assert!(body["summary"].get("progress_percent").is_none());
    }

    #[tokio::test]
    async fn test_max_level_completion_keeps_xp_capped() {
        let user = UserState {
            level: 50,
            xp: 100,
            ..UserState::default()
        };
        let (app, _) = test_app(user, Arc::default()).await;
        send(&app, "POST", "/api/v1/mode/reading", None).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/v1/exercises/complete",
            Some(json!({ "score": 50, "type": "reading" })),
        )
        .await;
        assert_eq!(body["user"]["level"], 50);
        assert_eq!(body["user"]["xp"], 100);
        assert_eq!(body["leveledUp"], false);
        assert_eq!(body["summary"]["maxLevelReached"], true);
    }
}
