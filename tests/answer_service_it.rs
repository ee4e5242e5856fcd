// tests/answer_service_it.rs
use chrono::Duration;

mod support;

use support::{QuestionBuilder, downvote, seed_user, sqlite_fixture, upvote};
use tullamore_qa::application::commands::answers::{CreateAnswerCommand, PatchAnswerCommand};
use tullamore_qa::application::dto::{AnswerDto, QuestionDto};
use tullamore_qa::application::services::ApplicationServices;
use tullamore_qa::domain::answer::AnswerId;
use tullamore_qa::domain::question::QuestionId;

async fn answer(services: &ApplicationServices, question: &QuestionDto, body: &str) -> AnswerDto {
    services
        .answer_commands
        .add_answer(
            question,
            CreateAnswerCommand {
                author: None,
                body: body.into(),
            },
        )
        .await
        .unwrap()
}

fn id(answer: &AnswerDto) -> AnswerId {
    AnswerId::new(answer.id).unwrap()
}

#[tokio::test]
async fn answers_are_listed_in_creation_order() {
    let fx = sqlite_fixture().await;
    let question = QuestionBuilder::new("Which crate?").save(&fx.services).await;
    let first = answer(&fx.services, &question, "serde").await;
    let second = answer(&fx.services, &question, "sqlx").await;

    let listed = fx.services.answer_queries.list_answers(&question).await.unwrap();

    let ids: Vec<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, [first.id, second.id]);
    assert!(listed.iter().all(|a| !a.chosen));
    assert!(listed.iter().all(|a| a.question_id == question.id));
}

#[tokio::test]
async fn answering_missing_question_is_not_found() {
    let fx = sqlite_fixture().await;

    let err = fx
        .services
        .answer_commands
        .add_answer(
            QuestionId::new(42).unwrap(),
            CreateAnswerCommand {
                author: None,
                body: "orphan".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn blank_answer_body_is_rejected() {
    let fx = sqlite_fixture().await;
    let question = QuestionBuilder::new("Q").save(&fx.services).await;

    let err = fx
        .services
        .answer_commands
        .add_answer(
            &question,
            CreateAnswerCommand {
                author: None,
                body: "   ".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(!err.is_not_found());
    assert!(!err.is_conflict());
}

#[tokio::test]
async fn at_most_one_answer_is_chosen() {
    let fx = sqlite_fixture().await;
    let question = QuestionBuilder::new("Pick one").save(&fx.services).await;
    let first = answer(&fx.services, &question, "first").await;
    let second = answer(&fx.services, &question, "second").await;

    let chosen = fx.services.answer_commands.choose_answer(id(&first)).await.unwrap();
    assert!(chosen.chosen);

    let chosen = fx.services.answer_commands.choose_answer(id(&second)).await.unwrap();
    assert!(chosen.chosen);

    let listed = fx.services.answer_queries.list_answers(&question).await.unwrap();
    let chosen_ids: Vec<i64> = listed.iter().filter(|a| a.chosen).map(|a| a.id).collect();
    assert_eq!(chosen_ids, [second.id]);

    let again = fx.services.answer_commands.choose_answer(id(&second)).await.unwrap();
    assert!(again.chosen);
}

#[tokio::test]
async fn choosing_in_one_question_leaves_others_alone() {
    let fx = sqlite_fixture().await;
    let q1 = QuestionBuilder::new("One").save(&fx.services).await;
    let q2 = QuestionBuilder::new("Two").save(&fx.services).await;
    let a1 = answer(&fx.services, &q1, "a1").await;
    let a2 = answer(&fx.services, &q2, "a2").await;

    fx.services.answer_commands.choose_answer(id(&a1)).await.unwrap();
    fx.services.answer_commands.choose_answer(id(&a2)).await.unwrap();

    assert!(fx.services.answer_queries.get_answer(id(&a1)).await.unwrap().chosen);
    assert!(fx.services.answer_queries.get_answer(id(&a2)).await.unwrap().chosen);
}

#[tokio::test]
async fn patching_body_bumps_last_updated_at_but_votes_do_not() {
    let fx = sqlite_fixture().await;
    seed_user(&fx.services, "a").await;
    seed_user(&fx.services, "b").await;
    let question = QuestionBuilder::new("Q").save(&fx.services).await;
    let original = answer(&fx.services, &question, "draft").await;

    fx.clock.advance(Duration::minutes(2));
    let voted = fx
        .services
        .answer_commands
        .patch_answer(
            id(&original),
            PatchAnswerCommand {
                body: None,
                votes: Some(vec![upvote("a"), downvote("b")]),
            },
        )
        .await
        .unwrap();
    assert_eq!((voted.upvotes, voted.downvotes), (1, 1));
    assert_eq!(voted.last_updated_at, original.last_updated_at);

    fx.clock.advance(Duration::minutes(2));
    let edited = fx
        .services
        .answer_commands
        .patch_answer(
            id(&original),
            PatchAnswerCommand {
                body: Some("final".into()),
                votes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.body, "final");
    assert_eq!(edited.upvotes, 1);
    assert_eq!(edited.created_at, original.created_at);
    assert_eq!(edited.last_updated_at, original.created_at + Duration::minutes(4));
}

#[tokio::test]
async fn deleting_answer_twice_is_not_found() {
    let fx = sqlite_fixture().await;
    seed_user(&fx.services, "fan").await;
    let question = QuestionBuilder::new("Q").save(&fx.services).await;
    let doomed = answer(&fx.services, &question, "bye").await;
    fx.services
        .answer_commands
        .patch_answer(
            id(&doomed),
            PatchAnswerCommand {
                body: None,
                votes: Some(vec![upvote("fan")]),
            },
        )
        .await
        .unwrap();

    fx.services.answer_commands.delete_answer(id(&doomed)).await.unwrap();

    let err = fx.services.answer_commands.delete_answer(id(&doomed)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(fx.services.answer_queries.list_answers(&question).await.unwrap().is_empty());
}
